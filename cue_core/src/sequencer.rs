use crate::{
	CaptureActions, CaptureStatus, CaptureWindow, Capturer, Dispatcher, FrameMeter, FrameState,
	Targets,
};

/// What happened during one [`Sequencer::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
	/// sequence time after the tick
	pub time: f32,
	/// number of events applied
	pub fired: usize,
	pub capture: CaptureActions,
	pub frame: FrameState,
}

/// Owns everything driven by the host's frame loop.
#[derive(Debug)]
pub struct Sequencer<C> {
	dispatcher: Dispatcher,
	window: Option<CaptureWindow>,
	capturer: C,
	meter: FrameMeter,
}

impl<C: Capturer> Sequencer<C> {
	#[must_use]
	pub fn new(dispatcher: Dispatcher, capturer: C) -> Self {
		Self {
			dispatcher,
			window: None,
			capturer,
			meter: FrameMeter::default(),
		}
	}

	#[must_use]
	pub fn with_capture_window(mut self, window: CaptureWindow) -> Self {
		self.window = Some(window);
		self
	}

	#[must_use]
	pub fn with_frame_meter(mut self, meter: FrameMeter) -> Self {
		self.meter = meter;
		self
	}

	pub fn tick(&mut self, delta: f32, targets: &mut impl Targets) -> Tick {
		let frame = self.meter.update(delta);
		let fired = self.dispatcher.advance(delta, targets);
		let time = self.dispatcher.time();
		let capture = self
			.window
			.map(|window| window.poll(time, &mut self.capturer))
			.unwrap_or_default();

		Tick {
			time,
			fired,
			capture,
			frame,
		}
	}

	/// No events are left and the capture, if any, has been stopped.
	#[must_use]
	pub fn is_done(&self) -> bool {
		self.dispatcher.is_done()
			&& (self.window.is_none()
				|| matches!(
					self.capturer.status(),
					CaptureStatus::Stopped | CaptureStatus::Finish
				))
	}

	#[must_use]
	pub fn dispatcher(&self) -> &Dispatcher {
		&self.dispatcher
	}

	#[must_use]
	pub fn capture_window(&self) -> Option<CaptureWindow> {
		self.window
	}

	#[must_use]
	pub fn capturer(&self) -> &C {
		&self.capturer
	}

	pub fn capturer_mut(&mut self) -> &mut C {
		&mut self.capturer
	}

	#[must_use]
	pub fn meter(&self) -> FrameMeter {
		self.meter
	}
}
