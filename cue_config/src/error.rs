use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("can't read {}: {source}", .path.display())]
	Read { path: PathBuf, source: io::Error },
	#[error("can't write {}: {source}", .path.display())]
	Write { path: PathBuf, source: io::Error },
	#[error(transparent)]
	Parse(#[from] toml::de::Error),
	#[error(transparent)]
	Serialize(#[from] toml::ser::Error),
	#[error("time multiplier must be positive and finite, got {0}")]
	Multiplier(f64),
	#[error("event {event} of group {group} has invalid time {time}")]
	EventTime { group: usize, event: usize, time: f64 },
	#[error("event {event} of group {group} has an empty {field} name")]
	EmptyName {
		group: usize,
		event: usize,
		field: &'static str,
	},
	#[error("target list contains an empty name")]
	EmptyTarget,
	#[error("recording window {start}..{stop} is invalid")]
	RecordingWindow { start: f64, stop: f64 },
	#[error("frame meter threshold must be positive, got {0}")]
	Threshold(f64),
	#[error("frame rate must give a positive frame time, got {0}")]
	FrameRate(f64),
	#[error("duration must be positive and representable, got {0}")]
	Duration(f64),
}
