use chrono::{DateTime, Utc};

use crate::{Iri, Object, ObjectType, TypeTag};

/// placeholder left behind by a deleted object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tombstone {
	pub base: Object,
	pub former_type: Option<TypeTag>,
	pub deleted: Option<DateTime<Utc>>,
}

impl Tombstone {
	pub fn new(id: Option<Iri>) -> Self {
		Tombstone {
			base: Object::new(ObjectType::Tombstone, id),
			..Default::default()
		}
	}
}

crate::setters! {
	Tombstone {
		former_type: Option<TypeTag>,
		deleted: Option<DateTime<Utc>>,
	}
}

crate::shape!(Tombstone => Tombstone);
