use cue_core::{CaptureStatus, Capturer};
use log::{info, warn};
use std::time::{Duration, Instant};

/// Keeps track of a capture session on the wall clock.
///
/// After [`Capturer::stop`] the session stays [`CaptureStatus::Stopped`] until the next
/// [`SessionCapturer::flush`], mirroring a capturer that finishes writing asynchronously.
#[derive(Debug, Default)]
pub struct SessionCapturer {
	status: CaptureStatus,
	started: Option<Instant>,
	length: Option<Duration>,
}

impl SessionCapturer {
	pub fn flush(&mut self) {
		if self.status == CaptureStatus::Stopped {
			info!("capture finished");
			self.status = CaptureStatus::Finish;
		}
	}

	/// Wall-clock length of the finished session.
	#[must_use]
	pub fn length(&self) -> Option<Duration> {
		self.length
	}
}

impl Capturer for SessionCapturer {
	fn start(&mut self) {
		if !matches!(self.status, CaptureStatus::NotStart | CaptureStatus::Finish) {
			warn!("previous capture hasn't finished yet");
			return;
		}

		self.started = Some(Instant::now());
		self.length = None;
		self.status = CaptureStatus::Started;
	}

	fn stop(&mut self) {
		if self.status != CaptureStatus::Started {
			warn!("capture hasn't been started yet");
			return;
		}

		self.length = self.started.take().map(|started| started.elapsed());
		self.status = CaptureStatus::Stopped;
	}

	fn status(&self) -> CaptureStatus {
		self.status
	}
}
