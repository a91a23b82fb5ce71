mod capture;
mod clock;
mod dispatcher;
mod event;
mod frame_meter;
mod sequencer;
mod target;

pub use capture::{CaptureActions, CaptureStatus, CaptureWindow, Capturer};
pub use clock::Clock;
pub use dispatcher::{Dispatcher, MissingTarget};
pub use event::{EventGroup, TriggerEvent};
pub use frame_meter::{FrameMeter, FrameState};
pub use sequencer::{Sequencer, Tick};
pub use target::{FlagSet, Target, Targets};
