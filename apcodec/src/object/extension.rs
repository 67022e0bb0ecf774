use crate::{Iri, Object, TypeTag};

/// record of a type the registry doesn't know: Object fields plus everything else, untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extension {
	pub base: Object,
	pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Extension {
	pub fn new(kind: impl Into<TypeTag>, id: Option<Iri>) -> Self {
		Extension {
			base: Object::new(kind, id),
			fields: serde_json::Map::new(),
		}
	}

	pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
		self.fields.get(key)
	}
}

crate::shape!(Extension => Extension);
