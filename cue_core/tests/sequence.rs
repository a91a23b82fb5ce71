use cue_core::{
	CaptureActions, CaptureStatus, CaptureWindow, Capturer, Clock, Dispatcher, EventGroup,
	FlagSet, FrameMeter, FrameState, Sequencer, TriggerEvent,
};
use std::{collections::HashMap, sync::Arc};

#[derive(Debug, Default)]
struct Recorder {
	status: CaptureStatus,
}

impl Capturer for Recorder {
	fn start(&mut self) {
		self.status = CaptureStatus::Started;
	}

	fn stop(&mut self) {
		self.status = CaptureStatus::Stopped;
	}

	fn status(&self) -> CaptureStatus {
		self.status
	}
}

fn design_video() -> Dispatcher {
	Dispatcher::new(
		Clock::new(1.6),
		vec![
			EventGroup::new(vec![
				TriggerEvent::new(1.0, "logo", "show", true),
				TriggerEvent::new(4.0, "logo", "show", false),
			]),
			EventGroup::new(vec![TriggerEvent::new(2.0, "menu", "open", true)]),
		],
	)
}

#[test]
fn plays_a_whole_sequence_at_a_fixed_step() {
	let mut sequencer = Sequencer::new(design_video(), Recorder::default())
		.with_capture_window(CaptureWindow::new(0.5, 5.0));
	let mut targets: HashMap<Arc<str>, FlagSet> = ["logo", "menu"]
		.into_iter()
		.map(|name| (name.into(), FlagSet::default()))
		.collect();

	let mut ticks = Vec::new();
	while !sequencer.is_done() {
		ticks.push(sequencer.tick(0.25, &mut targets));
		assert!(ticks.len() < 100, "sequence never finished");
	}

	let fired: usize = ticks.iter().map(|tick| tick.fired).sum();
	assert_eq!(fired, 3);

	let actions: Vec<_> = ticks
		.iter()
		.map(|tick| tick.capture)
		.filter(|actions| !actions.is_empty())
		.collect();
	assert_eq!(
		actions,
		[
			CaptureActions {
				started: true,
				stopped: false
			},
			CaptureActions {
				started: false,
				stopped: true
			}
		]
	);

	assert_eq!(targets["logo"].get("show"), Some(false));
	assert_eq!(targets["menu"].get("open"), Some(true));
	assert_eq!(sequencer.capturer().status, CaptureStatus::Stopped);
}

#[test]
fn late_target_fires_once_it_appears() {
	let mut sequencer = Sequencer::new(design_video(), Recorder::default());
	let mut targets: HashMap<Arc<str>, FlagSet> = HashMap::new();
	targets.insert("logo".into(), FlagSet::default());

	for _ in 0..10 {
		sequencer.tick(0.5, &mut targets);
	}

	assert_eq!(sequencer.dispatcher().pending(), 1);
	assert!(!sequencer.is_done());

	targets.insert("menu".into(), FlagSet::default());
	let tick = sequencer.tick(0.5, &mut targets);

	assert_eq!(tick.fired, 1);
	assert_eq!(targets["menu"].get("open"), Some(true));
	assert!(sequencer.is_done());
}

#[test]
fn reports_frame_pacing() {
	let mut sequencer = Sequencer::new(design_video(), Recorder::default())
		.with_frame_meter(FrameMeter::new(55.0));
	let mut targets: HashMap<Arc<str>, FlagSet> = HashMap::new();

	let last = (0..100)
		.map(|_| sequencer.tick(1.0 / 20.0, &mut targets))
		.last()
		.map(|tick| tick.frame);

	assert_eq!(last, Some(FrameState::FramingOut));
}

#[test]
fn passed_capture_window_starts_and_stops_in_one_tick() {
	let dispatcher = Dispatcher::new(Clock::new(1.0), Vec::new());
	let mut sequencer = Sequencer::new(dispatcher, Recorder::default())
		.with_capture_window(CaptureWindow::new(0.0, 0.1));
	let mut targets: HashMap<Arc<str>, FlagSet> = HashMap::new();

	let tick = sequencer.tick(1.0, &mut targets);

	assert_eq!(
		tick.capture,
		CaptureActions {
			started: true,
			stopped: true
		}
	);
	assert!(sequencer.is_done());
}
