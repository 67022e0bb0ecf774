mod activity;
mod collection;
mod link;
mod object;

pub use activity::{
	AcceptType, ActivityType, IgnoreType, IntransitiveActivityType, OfferType, RejectType,
};
pub use collection::CollectionType;
pub use link::LinkType;
pub use object::{ActorType, DocumentType, ObjectType};

crate::strenum! {
	pub enum BaseType {
		;
		Object(ObjectType),
		Link(LinkType)
	};
}

impl BaseType {
	/// record shape the standard vocabulary builds for this type
	pub fn family(&self) -> Family {
		match self {
			BaseType::Link(_) => Family::Link,
			BaseType::Object(x) => x.family(),
		}
	}
}

/// the concrete record shapes a type tag can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Family {
	Object,
	Link,
	Activity,
	IntransitiveActivity,
	Question,
	Actor,
	Collection,
	OrderedCollection,
	CollectionPage,
	OrderedCollectionPage,
	Place,
	Profile,
	Relationship,
	Tombstone,
	Extension,
}

impl Family {
	pub fn is_activity(&self) -> bool {
		matches!(self, Family::Activity | Family::IntransitiveActivity | Family::Question)
	}

	pub fn is_collection(&self) -> bool {
		matches!(
			self,
			Family::Collection | Family::OrderedCollection | Family::CollectionPage | Family::OrderedCollectionPage
		)
	}

	pub fn is_page(&self) -> bool {
		matches!(self, Family::CollectionPage | Family::OrderedCollectionPage)
	}
}

/// open type tag carried by every record, empty for a generic Object
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeTag(String);

impl TypeTag {
	pub fn new(tag: impl Into<String>) -> Self {
		TypeTag(tag.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// standard vocabulary entry for this tag, if any
	pub fn known(&self) -> Option<BaseType> {
		BaseType::try_from(self.0.as_str()).ok()
	}
}

impl AsRef<str> for TypeTag {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for TypeTag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for TypeTag {
	fn from(value: &str) -> Self {
		TypeTag(value.to_string())
	}
}

impl From<String> for TypeTag {
	fn from(value: String) -> Self {
		TypeTag(value)
	}
}

impl PartialEq<str> for TypeTag {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for TypeTag {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}
