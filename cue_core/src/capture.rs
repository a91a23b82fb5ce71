use log::info;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CaptureStatus {
	#[default]
	NotStart,
	Started,
	/// stopped, still flushing what was captured
	Stopped,
	Finish,
}

/// A video capturer, driven by the sequence clock.
pub trait Capturer {
	fn start(&mut self);
	fn stop(&mut self);
	fn status(&self) -> CaptureStatus;
}

/// The calls a [`CaptureWindow::poll`] made on the capturer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CaptureActions {
	pub started: bool,
	pub stopped: bool,
}

impl CaptureActions {
	#[must_use]
	pub fn is_empty(self) -> bool {
		!self.started && !self.stopped
	}
}

/// The stretch of sequence time that gets recorded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureWindow {
	pub start: f32,
	pub stop: f32,
}

impl CaptureWindow {
	#[must_use]
	pub fn new(start: f32, stop: f32) -> Self {
		debug_assert!(start <= stop);

		Self { start, stop }
	}

	/// Starts, then stops `capturer` if `time` has passed the respective bound.
	///
	/// The status is read again between the two checks, so a capture whose whole window has
	/// already passed is started and stopped by the same poll. A capture is only ever started
	/// from [`CaptureStatus::NotStart`], so a finished capture stays finished.
	pub fn poll(self, time: f32, capturer: &mut impl Capturer) -> CaptureActions {
		let mut actions = CaptureActions::default();

		if time > self.start && capturer.status() == CaptureStatus::NotStart {
			info!("{time:.3}: starting capture");
			capturer.start();
			actions.started = true;
		}

		if time > self.stop && capturer.status() == CaptureStatus::Started {
			info!("{time:.3}: stopping capture");
			capturer.stop();
			actions.stopped = true;
		}

		actions
	}
}

#[cfg(test)]
mod tests {
	use super::{CaptureActions, CaptureStatus, CaptureWindow, Capturer};

	#[derive(Debug, Default)]
	struct Fake {
		status: CaptureStatus,
		starts: usize,
		stops: usize,
	}

	impl Capturer for Fake {
		fn start(&mut self) {
			self.starts += 1;
			self.status = CaptureStatus::Started;
		}

		fn stop(&mut self) {
			self.stops += 1;
			self.status = CaptureStatus::Stopped;
		}

		fn status(&self) -> CaptureStatus {
			self.status
		}
	}

	#[test]
	fn starts_then_stops_once() {
		let window = CaptureWindow::new(1.0, 3.0);
		let mut capturer = Fake::default();

		assert!(window.poll(0.5, &mut capturer).is_empty());
		assert_eq!(
			window.poll(1.5, &mut capturer),
			CaptureActions {
				started: true,
				stopped: false
			}
		);
		assert!(window.poll(2.0, &mut capturer).is_empty());
		assert_eq!(
			window.poll(3.5, &mut capturer),
			CaptureActions {
				started: false,
				stopped: true
			}
		);
		assert!(window.poll(4.0, &mut capturer).is_empty());

		assert_eq!((capturer.starts, capturer.stops), (1, 1));
	}

	#[test]
	fn passed_window_starts_and_stops_in_one_poll() {
		let window = CaptureWindow::new(0.0, 0.1);
		let mut capturer = Fake::default();

		assert_eq!(
			window.poll(1.0, &mut capturer),
			CaptureActions {
				started: true,
				stopped: true
			}
		);
		assert_eq!(capturer.status, CaptureStatus::Stopped);
		assert_eq!((capturer.starts, capturer.stops), (1, 1));
	}

	#[test]
	fn finished_capture_is_not_restarted() {
		let window = CaptureWindow::new(0.0, 1.0);
		let mut capturer = Fake {
			status: CaptureStatus::Finish,
			..Fake::default()
		};

		assert!(window.poll(0.5, &mut capturer).is_empty());
		assert_eq!(capturer.starts, 0);
	}
}
