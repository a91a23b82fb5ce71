use log::warn;

/// Sequence time, advanced once per host tick.
///
/// The clock only moves forward: every delta is scaled by `multiplier` before being added,
/// and deltas that would move it backwards (or poison it) are dropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clock {
	time: f32,
	multiplier: f32,
}

impl Default for Clock {
	fn default() -> Self {
		Self::new(1.0)
	}
}

impl Clock {
	#[must_use]
	pub fn new(multiplier: f32) -> Self {
		debug_assert!(multiplier.is_finite() && multiplier > 0.0);

		Self {
			time: 0.0,
			multiplier,
		}
	}

	#[must_use]
	pub fn time(self) -> f32 {
		self.time
	}

	#[must_use]
	pub fn multiplier(self) -> f32 {
		self.multiplier
	}

	pub fn advance(&mut self, delta: f32) -> f32 {
		if !delta.is_finite() || delta < 0.0 {
			warn!("ignoring clock delta of {delta}");
			return self.time;
		}

		self.time += delta * self.multiplier;
		self.time
	}
}
