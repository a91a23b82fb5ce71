use crate::{Clock, EventGroup, Targets};
use log::{debug, warn};

/// What to do with a due event whose target can't be resolved.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MissingTarget {
	/// leave the event pending and try again on the next tick
	#[default]
	Retry,
	/// mark the event as fired without applying it
	Drop,
}

#[derive(Clone, Debug)]
pub struct Dispatcher {
	clock: Clock,
	groups: Vec<EventGroup>,
	missing_target: MissingTarget,
}

impl Dispatcher {
	#[must_use]
	pub fn new(clock: Clock, groups: Vec<EventGroup>) -> Self {
		Self {
			clock,
			groups,
			missing_target: MissingTarget::default(),
		}
	}

	#[must_use]
	pub fn with_missing_target(mut self, missing_target: MissingTarget) -> Self {
		self.missing_target = missing_target;
		self
	}

	#[must_use]
	pub fn time(&self) -> f32 {
		self.clock.time()
	}

	#[must_use]
	pub fn multiplier(&self) -> f32 {
		self.clock.multiplier()
	}

	#[must_use]
	pub fn groups(&self) -> &[EventGroup] {
		&self.groups
	}

	#[must_use]
	pub fn pending(&self) -> usize {
		self.groups.iter().map(EventGroup::pending).sum()
	}

	#[must_use]
	pub fn is_done(&self) -> bool {
		self.pending() == 0
	}

	/// Moves the clock forward and fires every event whose trigger time has been passed.
	///
	/// Returns how many events had their effect applied during this call.
	pub fn advance(&mut self, delta: f32, targets: &mut impl Targets) -> usize {
		let time = self.clock.advance(delta);
		let mut fired = 0;

		for (group_idx, group) in self.groups.iter_mut().enumerate() {
			for event in group.events_mut() {
				if !event.is_due(time) {
					continue;
				}

				if let Some(target) = targets.resolve(event.target()) {
					target.set_flag(event.flag(), event.value());
					event.mark_fired();
					fired += 1;

					debug!(
						"{time:.3}: group {group_idx} set {}.{} = {}",
						event.target(),
						event.flag(),
						event.value()
					);
				} else if self.missing_target == MissingTarget::Drop {
					event.mark_fired();

					warn!(
						"{time:.3}: group {group_idx} dropped {}.{}, target is missing",
						event.target(),
						event.flag()
					);
				}
			}
		}

		fired
	}
}
