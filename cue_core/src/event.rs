use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub struct TriggerEvent {
	/// sequence time after which the event may fire
	time: f32,
	/// handle of the target whose flag is set
	target: Arc<str>,
	/// name of the flag to set on the target
	flag: Arc<str>,
	/// the value the flag is set to
	value: bool,
	fired: bool,
}

impl TriggerEvent {
	#[must_use]
	pub fn new(
		time: f32,
		target: impl Into<Arc<str>>,
		flag: impl Into<Arc<str>>,
		value: bool,
	) -> Self {
		Self {
			time,
			target: target.into(),
			flag: flag.into(),
			value,
			fired: false,
		}
	}

	#[must_use]
	pub fn time(&self) -> f32 {
		self.time
	}

	#[must_use]
	pub fn target(&self) -> &str {
		&self.target
	}

	#[must_use]
	pub fn flag(&self) -> &str {
		&self.flag
	}

	#[must_use]
	pub fn value(&self) -> bool {
		self.value
	}

	#[must_use]
	pub fn fired(&self) -> bool {
		self.fired
	}

	pub(crate) fn is_due(&self, time: f32) -> bool {
		!self.fired && time > self.time
	}

	pub(crate) fn mark_fired(&mut self) {
		self.fired = true;
	}
}

/// Events scanned independently of every other group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventGroup {
	events: Vec<TriggerEvent>,
}

impl EventGroup {
	#[must_use]
	pub fn new(events: Vec<TriggerEvent>) -> Self {
		Self { events }
	}

	#[must_use]
	pub fn events(&self) -> &[TriggerEvent] {
		&self.events
	}

	pub(crate) fn events_mut(&mut self) -> &mut [TriggerEvent] {
		&mut self.events
	}

	#[must_use]
	pub fn pending(&self) -> usize {
		self.events.iter().filter(|event| !event.fired).count()
	}
}

impl FromIterator<TriggerEvent> for EventGroup {
	fn from_iter<I: IntoIterator<Item = TriggerEvent>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
