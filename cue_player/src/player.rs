use crate::{board::Board, capturer::SessionCapturer, pacer::Pacer};
use cue_config::Config;
use cue_core::{CaptureStatus, Capturer as _};
use humantime::format_duration;
use log::{info, warn};
use std::time::Duration;

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug)]
pub struct Summary {
	pub ticks: usize,
	/// host time spent playing
	pub elapsed: Duration,
	/// sequence time reached
	pub time: f32,
	pub fired: usize,
	pub pending: usize,
	pub capture: Option<(CaptureStatus, Option<Duration>)>,
	/// every event fired and the capture, if any, stopped
	pub done: bool,
}

impl Summary {
	pub fn log(&self) {
		info!(
			"played {} ticks in {} of host time, reaching {:.3}",
			self.ticks,
			format_duration(round(self.elapsed)),
			self.time
		);
		info!("{} events fired, {} pending", self.fired, self.pending);

		match self.capture {
			Some((status, Some(length))) => {
				info!("capture {status:?} after {}", format_duration(round(length)));
			}
			Some((status, None)) => info!("capture {status:?}"),
			None => {}
		}

		if !self.done {
			warn!("stopped by the duration limit before the sequence was done");
		}
	}
}

fn round(duration: Duration) -> Duration {
	Duration::from_millis(duration.as_millis() as u64)
}

/// Runs the configured sequence against `board` until it's done or the duration limit is hit.
pub fn play(config: &Config, board: &mut Board) -> Summary {
	let mut sequencer = config.sequencer(SessionCapturer::default());
	let mut pacer = Pacer::new(config.playback.mode, config.playback.step());
	let limit = config.playback.limit();

	let mut elapsed = Duration::ZERO;
	let mut last_report = Duration::ZERO;
	let mut ticks = 0;
	let mut fired = 0;

	while elapsed < limit && !sequencer.is_done() {
		sequencer.capturer_mut().flush();

		let delta = pacer.next_frame();
		elapsed = elapsed.saturating_add(delta);

		let tick = sequencer.tick(delta.as_secs_f32(), board);
		ticks += 1;
		fired += tick.fired;

		if config.frame_meter.report && elapsed - last_report >= REPORT_INTERVAL {
			info!("{:.3}: {}", tick.time, sequencer.meter().label());
			last_report = elapsed;
		}
	}

	sequencer.capturer_mut().flush();

	let capture = sequencer.capture_window().map(|_| {
		let capturer = sequencer.capturer();
		(capturer.status(), capturer.length())
	});

	Summary {
		ticks,
		elapsed,
		time: sequencer.dispatcher().time(),
		fired,
		pending: sequencer.dispatcher().pending(),
		capture,
		done: sequencer.is_done(),
	}
}

#[cfg(test)]
mod tests {
	use super::play;
	use crate::board::Board;
	use cue_config::Config;
	use cue_core::CaptureStatus;

	const TIMELINE: &str = r#"
time_multiplier = 1.0

[recording]
start = 0.5
stop = 2.0

[playback]
frame_rate = 10.0
duration = 30.0

[[groups]]
[[groups.events]]
target = "door"
flag = "open"
time = 1.0

[[groups.events]]
target = "door"
flag = "open"
time = 1.5
value = false
"#;

	#[test]
	fn plays_until_done() {
		let config = Config::from_toml(TIMELINE).unwrap();
		let mut board = Board::new(config.target_names());

		let summary = play(&config, &mut board);

		assert!(summary.done);
		assert_eq!(summary.fired, 2);
		assert_eq!(summary.pending, 0);
		assert!(summary.ticks < 30);
		assert!(matches!(summary.capture, Some((CaptureStatus::Finish, Some(_)))));

		let flags: Vec<_> = board
			.iter()
			.flat_map(|(name, flags)| flags.iter().map(move |(flag, value)| (name, flag, value)))
			.collect();
		assert_eq!(flags, [("door", "open", false)]);
	}

	#[test]
	fn missing_targets_run_into_the_limit() {
		let config = Config::from_toml(&format!(
			"targets = [\"window\"]\n{}",
			TIMELINE.replace("duration = 30.0", "duration = 3.0")
		))
		.unwrap();
		let mut board = Board::new(config.target_names());

		let summary = play(&config, &mut board);

		assert!(!summary.done);
		assert_eq!(summary.fired, 0);
		assert_eq!(summary.pending, 2);
		assert_eq!(summary.ticks, 30);
	}

	#[test]
	fn missing_targets_can_be_dropped() {
		let config = Config::from_toml(&format!(
			"targets = []\nmissing_target = \"drop\"\n{TIMELINE}"
		))
		.unwrap();
		let mut board = Board::new(config.target_names());

		let summary = play(&config, &mut board);

		assert!(summary.done);
		assert_eq!(summary.fired, 0);
		assert_eq!(summary.pending, 0);
	}
}
