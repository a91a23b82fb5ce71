use cue_core::{FlagSet, Target, Targets};
use log::info;
use std::{collections::BTreeMap, sync::Arc};

/// A named stand-in for an animator, logging every flag it's given.
#[derive(Debug)]
struct Actor {
	name: Arc<str>,
	flags: FlagSet,
}

impl Target for Actor {
	fn set_flag(&mut self, name: &str, value: bool) {
		info!("{}.{name} = {value}", self.name);
		self.flags.set_flag(name, value);
	}
}

/// Every target present in the scene.
#[derive(Debug, Default)]
pub struct Board {
	actors: BTreeMap<Arc<str>, Actor>,
}

impl Board {
	pub fn new(names: impl IntoIterator<Item = Arc<str>>) -> Self {
		Self {
			actors: names
				.into_iter()
				.map(|name| {
					(
						name.clone(),
						Actor {
							name,
							flags: FlagSet::default(),
						},
					)
				})
				.collect(),
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &FlagSet)> {
		self.actors
			.iter()
			.map(|(name, actor)| (&**name, &actor.flags))
	}
}

impl Targets for Board {
	fn resolve(&mut self, id: &str) -> Option<&mut dyn Target> {
		self.actors
			.get_mut(id)
			.map(|actor| actor as &mut dyn Target)
	}
}
