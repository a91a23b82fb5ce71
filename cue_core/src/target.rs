use std::{
	collections::{BTreeMap, HashMap},
	hash::BuildHasher,
	sync::Arc,
};

/// Something with named boolean flags, e.g. an animation state machine.
pub trait Target {
	fn set_flag(&mut self, name: &str, value: bool);
}

/// Resolves target handles at fire time.
///
/// A handle is valid on a given tick exactly when [`Targets::resolve`] returns `Some` for it,
/// so targets may come and go between ticks.
pub trait Targets {
	fn resolve(&mut self, id: &str) -> Option<&mut dyn Target>;
}

impl<T: Target, S: BuildHasher> Targets for HashMap<Arc<str>, T, S> {
	fn resolve(&mut self, id: &str) -> Option<&mut dyn Target> {
		self.get_mut(id).map(|target| target as &mut dyn Target)
	}
}

impl<T: Target> Targets for BTreeMap<Arc<str>, T> {
	fn resolve(&mut self, id: &str) -> Option<&mut dyn Target> {
		self.get_mut(id).map(|target| target as &mut dyn Target)
	}
}

/// Plain in-memory flag storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlagSet {
	flags: BTreeMap<Arc<str>, bool>,
}

impl FlagSet {
	#[must_use]
	pub fn get(&self, name: &str) -> Option<bool> {
		self.flags.get(name).copied()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
		self.flags.iter().map(|(name, &value)| (&**name, value))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.flags.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.flags.is_empty()
	}
}

impl Target for FlagSet {
	fn set_flag(&mut self, name: &str, value: bool) {
		if let Some(flag) = self.flags.get_mut(name) {
			*flag = value;
		} else {
			self.flags.insert(name.into(), value);
		}
	}
}
