use crate::{Iri, Item, Object, ObjectType};

/// `subject` is related to `object` through `relationship`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relationship {
	pub base: Object,
	pub subject: Option<Item>,
	pub object: Option<Item>,
	pub relationship: Option<Item>,
}

impl Relationship {
	pub fn new(id: Option<Iri>) -> Self {
		Relationship {
			base: Object::new(ObjectType::Relationship, id),
			..Default::default()
		}
	}
}

crate::setters! {
	Relationship {
		subject: Option<Item>,
		object: Option<Item>,
		relationship: Option<Item>,
	}
}

crate::shape!(Relationship => Relationship);
