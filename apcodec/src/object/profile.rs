use crate::{Iri, Item, Object, ObjectType};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
	pub base: Object,
	pub describes: Option<Item>,
}

impl Profile {
	pub fn new(id: Option<Iri>) -> Self {
		Profile {
			base: Object::new(ObjectType::Profile, id),
			describes: None,
		}
	}
}

crate::setters! {
	Profile {
		describes: Option<Item>,
	}
}

crate::shape!(Profile => Profile);
