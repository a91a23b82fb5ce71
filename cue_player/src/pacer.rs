use cue_config::Mode;
use std::{
	thread::sleep,
	time::{Duration, Instant},
};

/// Produces the host's frame deltas.
#[derive(Debug)]
pub enum Pacer {
	Offline { step: Duration },
	Realtime { step: Duration, last: Instant },
}

impl Pacer {
	pub fn new(mode: Mode, step: Duration) -> Self {
		match mode {
			Mode::Offline => Self::Offline { step },
			Mode::Realtime => Self::Realtime {
				step,
				last: Instant::now(),
			},
		}
	}

	/// Waits for the next frame if pacing in real time, and returns how long the frame took.
	pub fn next_frame(&mut self) -> Duration {
		match self {
			Self::Offline { step } => *step,
			Self::Realtime { step, last } => {
				let now = Instant::now();
				match last.checked_add(*step) {
					Some(deadline) if deadline > now => sleep(deadline - now),
					Some(_) => {}
					None => sleep(*step),
				}

				let now = Instant::now();
				let delta = now - *last;
				*last = now;
				delta
			}
		}
	}
}
