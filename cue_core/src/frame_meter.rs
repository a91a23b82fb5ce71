use log::{info, warn};

const SMOOTHING: f32 = 0.1;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FrameState {
	Steady,
	/// the smoothed frame rate is below the threshold
	FramingOut,
}

/// Moving average of the host's frame time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameMeter {
	/// smoothed frame time, in seconds
	delta: f32,
	/// frame rate below which frames are considered dropped
	threshold: f32,
	state: FrameState,
	/// log when the state changes
	warnings: bool,
}

impl Default for FrameMeter {
	fn default() -> Self {
		Self::new(55.0)
	}
}

impl FrameMeter {
	#[must_use]
	pub fn new(threshold: f32) -> Self {
		Self {
			delta: 0.0,
			threshold,
			state: FrameState::Steady,
			warnings: true,
		}
	}

	/// Fixed-step hosts feed synthetic deltas, whose frame rate isn't worth warning about.
	#[must_use]
	pub fn with_warnings(mut self, warnings: bool) -> Self {
		self.warnings = warnings;
		self
	}

	#[must_use]
	pub fn warns(self) -> bool {
		self.warnings
	}

	#[must_use]
	pub fn threshold(self) -> f32 {
		self.threshold
	}

	pub fn update(&mut self, delta: f32) -> FrameState {
		if delta.is_finite() && delta >= 0.0 {
			self.delta += (delta - self.delta) * SMOOTHING;
		}

		let fps = self.fps();
		let state = if fps < self.threshold {
			FrameState::FramingOut
		} else {
			FrameState::Steady
		};

		if self.warnings && state != self.state {
			match state {
				FrameState::FramingOut => warn!("framing out at {fps:.1} fps"),
				FrameState::Steady => info!("back to {fps:.1} fps"),
			}
		}

		self.state = state;
		state
	}

	#[must_use]
	pub fn state(self) -> FrameState {
		self.state
	}

	/// Infinite until the first nonzero frame time is seen.
	#[must_use]
	pub fn fps(self) -> f32 {
		self.delta.recip()
	}

	#[must_use]
	pub fn millis(self) -> f32 {
		self.delta * 1000.0
	}

	#[must_use]
	pub fn label(self) -> String {
		format!("{:.1} ms ({:.0} fps)", self.millis(), self.fps())
	}
}
