use chrono::{DateTime, Utc};

use crate::{Iri, Item, ItemCollection, Object, TypeTag};

/// an action with no direct object, like arriving somewhere
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntransitiveActivity {
	pub base: Object,
	/// Describes one or more entities that either performed or are expected to perform the activity
	pub actor: Option<Item>,
	/// Describes the indirect object, or target, of the activity
	pub target: Option<Item>,
	/// Describes the result of the activity
	pub result: Option<Item>,
	/// Describes an indirect object of the activity from which the activity is directed
	pub origin: Option<Item>,
	/// Identifies one or more objects used (or to be used) in the completion of an Activity
	pub instrument: Option<Item>,
}

impl IntransitiveActivity {
	pub fn new(kind: impl Into<TypeTag>, id: Option<Iri>) -> Self {
		IntransitiveActivity {
			base: Object::new(kind, id),
			..Default::default()
		}
	}
}

crate::setters! {
	IntransitiveActivity {
		actor: Option<Item>,
		target: Option<Item>,
		result: Option<Item>,
		origin: Option<Item>,
		instrument: Option<Item>,
	}
}

crate::shape!(IntransitiveActivity => IntransitiveActivity);

/// an action performed by an actor on an object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activity {
	pub base: IntransitiveActivity,
	pub object: Option<Item>,
}

impl Activity {
	pub fn new(kind: impl Into<TypeTag>, id: Option<Iri>) -> Self {
		Activity {
			base: IntransitiveActivity::new(kind, id),
			object: None,
		}
	}

	pub fn set_actor(mut self, val: Option<Item>) -> Self {
		self.base.actor = val;
		self
	}
}

crate::setters! {
	Activity {
		object: Option<Item>,
	}
}

crate::shape!(Activity => Activity);

/// how a Question was closed: a flag, a moment, or an object
#[derive(Debug, Clone, PartialEq)]
pub enum Closed {
	Flag(bool),
	At(DateTime<Utc>),
	Item(Item),
}

/// a poll: exclusive choices in `one_of`, inclusive ones in `any_of`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Question {
	pub base: IntransitiveActivity,
	pub one_of: ItemCollection,
	pub any_of: ItemCollection,
	pub closed: Option<Closed>,
}

impl Question {
	pub fn new(id: Option<Iri>) -> Self {
		Question {
			base: IntransitiveActivity::new(crate::IntransitiveActivityType::Question, id),
			..Default::default()
		}
	}
}

crate::setters! {
	Question {
		one_of: ItemCollection,
		any_of: ItemCollection,
		closed: Option<Closed>,
	}
}

crate::shape!(Question => Question);
