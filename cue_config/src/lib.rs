use cue_core::{
	CaptureWindow, Capturer, Clock, Dispatcher, EventGroup, FrameMeter, MissingTarget,
	Sequencer, TriggerEvent,
};
use serde::{Deserialize, Serialize};
use std::{
	collections::BTreeSet,
	fs::{create_dir_all, read_to_string, write},
	io,
	path::Path,
	sync::Arc,
	time::Duration,
};

mod error;

pub use error::{Error, Result};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
	/// how much faster than the host clock the sequence runs
	pub time_multiplier: f64,
	pub missing_target: OnMissingTarget,
	/// targets that exist in the scene, defaults to every target an event names
	pub targets: Option<Vec<Arc<str>>>,
	pub recording: Option<Recording>,
	pub frame_meter: Meter,
	pub playback: Playback,
	pub groups: Vec<Group>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			time_multiplier: 1.6,
			missing_target: OnMissingTarget::default(),
			targets: None,
			recording: None,
			frame_meter: Meter::default(),
			playback: Playback::default(),
			groups: Vec::new(),
		}
	}
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OnMissingTarget {
	#[default]
	Retry,
	Drop,
}

impl From<OnMissingTarget> for MissingTarget {
	fn from(value: OnMissingTarget) -> Self {
		match value {
			OnMissingTarget::Retry => Self::Retry,
			OnMissingTarget::Drop => Self::Drop,
		}
	}
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Recording {
	pub start: f64,
	pub stop: f64,
}

impl Default for Recording {
	fn default() -> Self {
		Self {
			start: 0.0,
			stop: 100.0,
		}
	}
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Meter {
	/// fps below which the host is considered to be framing out
	pub threshold: f64,
	/// periodically log the smoothed frame time
	pub report: bool,
}

impl Default for Meter {
	fn default() -> Self {
		Self {
			threshold: 55.0,
			report: false,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
	/// fixed steps, as fast as possible
	#[default]
	Offline,
	/// steps measured from the wall clock, paced to the frame rate
	Realtime,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Playback {
	pub mode: Mode,
	pub frame_rate: f64,
	/// upper bound on host time, in seconds
	pub duration: f64,
}

impl Default for Playback {
	fn default() -> Self {
		Self {
			mode: Mode::default(),
			frame_rate: 60.0,
			duration: 120.0,
		}
	}
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Group {
	pub events: Vec<Event>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Event {
	pub target: Arc<str>,
	pub flag: Arc<str>,
	pub time: f64,
	#[serde(default = "set_to_true")]
	pub value: bool,
}

fn set_to_true() -> bool {
	true
}

/// Positive and still finite once narrowed to the `f32` the core runs on.
fn positive(x: f64) -> bool {
	let x = x as f32;
	x.is_finite() && x > 0.0
}

fn non_negative(x: f64) -> bool {
	let x = x as f32;
	x.is_finite() && x >= 0.0
}

impl Playback {
	/// Host time per tick.
	#[must_use]
	pub fn step(&self) -> Duration {
		Duration::try_from_secs_f64(self.frame_rate.recip()).unwrap_or(Duration::MAX)
	}

	/// Host time after which playback gives up.
	#[must_use]
	pub fn limit(&self) -> Duration {
		Duration::try_from_secs_f64(self.duration).unwrap_or(Duration::MAX)
	}
}

impl Config {
	pub fn from_toml(toml: &str) -> Result<Self> {
		let config = toml::from_str::<Self>(toml)?;
		config.validate()?;
		Ok(config)
	}

	pub fn to_toml(&self) -> Result<String> {
		Ok(toml::to_string(self)?)
	}

	pub fn read(path: &Path) -> Result<Self> {
		let toml = read_to_string(path).map_err(|source| Error::Read {
			path: path.to_owned(),
			source,
		})?;

		Self::from_toml(&toml)
	}

	/// Like [`Config::read`], but writes out and returns the default config if `path` doesn't
	/// exist yet.
	pub fn read_or_create(path: &Path) -> Result<Self> {
		match read_to_string(path) {
			Ok(toml) => Self::from_toml(&toml),
			Err(err) if err.kind() == io::ErrorKind::NotFound => {
				let config = Self::default();
				config.write(path)?;
				Ok(config)
			}
			Err(source) => Err(Error::Read {
				path: path.to_owned(),
				source,
			}),
		}
	}

	pub fn write(&self, path: &Path) -> Result<()> {
		let toml = self.to_toml()?;

		path.parent()
			.map_or(Ok(()), create_dir_all)
			.and_then(|()| write(path, toml))
			.map_err(|source| Error::Write {
				path: path.to_owned(),
				source,
			})
	}

	pub fn validate(&self) -> Result<()> {
		if !positive(self.time_multiplier) {
			return Err(Error::Multiplier(self.time_multiplier));
		}

		for (group, events) in self.groups.iter().enumerate() {
			for (event, e) in events.events.iter().enumerate() {
				if !non_negative(e.time) {
					return Err(Error::EventTime {
						group,
						event,
						time: e.time,
					});
				}

				for (field, name) in [("target", &e.target), ("flag", &e.flag)] {
					if name.trim().is_empty() {
						return Err(Error::EmptyName {
							group,
							event,
							field,
						});
					}
				}
			}
		}

		if self
			.targets
			.iter()
			.flatten()
			.any(|name| name.trim().is_empty())
		{
			return Err(Error::EmptyTarget);
		}

		if let Some(Recording { start, stop }) = self.recording {
			if !non_negative(start) || !non_negative(stop) || (stop as f32) < (start as f32) {
				return Err(Error::RecordingWindow { start, stop });
			}
		}

		if !positive(self.frame_meter.threshold) {
			return Err(Error::Threshold(self.frame_meter.threshold));
		}

		if !positive(self.playback.frame_rate)
			|| !matches!(
				Duration::try_from_secs_f64(self.playback.frame_rate.recip()),
				Ok(step) if !step.is_zero()
			)
		{
			return Err(Error::FrameRate(self.playback.frame_rate));
		}

		if !positive(self.playback.duration)
			|| Duration::try_from_secs_f64(self.playback.duration).is_err()
		{
			return Err(Error::Duration(self.playback.duration));
		}

		Ok(())
	}

	/// Names of the targets present in the scene.
	#[must_use]
	pub fn target_names(&self) -> BTreeSet<Arc<str>> {
		self.targets.as_ref().map_or_else(
			|| {
				self.groups
					.iter()
					.flat_map(|group| &group.events)
					.map(|event| event.target.clone())
					.collect()
			},
			|targets| targets.iter().cloned().collect(),
		)
	}

	#[must_use]
	pub fn dispatcher(&self) -> Dispatcher {
		let groups = self
			.groups
			.iter()
			.map(|group| {
				group
					.events
					.iter()
					.map(|event| {
						TriggerEvent::new(
							event.time as f32,
							event.target.clone(),
							event.flag.clone(),
							event.value,
						)
					})
					.collect::<EventGroup>()
			})
			.collect();

		Dispatcher::new(Clock::new(self.time_multiplier as f32), groups)
			.with_missing_target(self.missing_target.into())
	}

	#[must_use]
	pub fn sequencer<C: Capturer>(&self, capturer: C) -> Sequencer<C> {
		let meter = FrameMeter::new(self.frame_meter.threshold as f32)
			.with_warnings(self.playback.mode == Mode::Realtime);
		let sequencer = Sequencer::new(self.dispatcher(), capturer).with_frame_meter(meter);

		match self.recording {
			Some(Recording { start, stop }) => {
				sequencer.with_capture_window(CaptureWindow::new(start as f32, stop as f32))
			}
			None => sequencer,
		}
	}
}
