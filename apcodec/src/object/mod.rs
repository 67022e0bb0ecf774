pub mod activity;
pub mod actor;
pub mod collection;
pub mod extension;
pub mod link;
pub mod place;
pub mod profile;
pub mod relationship;
pub mod tombstone;

use chrono::{DateTime, Utc};

use crate::{Duration, Family, Iri, Item, ItemCollection, LangMap, MimeType, TypeTag};

/// base ActivityStreams record, every other non-Link record embeds one
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
	pub id: Option<Iri>,
	pub kind: TypeTag,
	pub name: LangMap,
	pub content: LangMap,
	pub summary: LangMap,
	/// Identifies a resource attached or related to an object that potentially requires special handling
	pub attachment: ItemCollection,
	/// Identifies one or more entities to which this object is attributed
	pub attributed_to: Option<Item>,
	/// Identifies one or more entities that represent the total population of entities for which the object can considered to be relevant
	pub audience: ItemCollection,
	/// Identifies the context within which the object exists or an activity was performed
	pub context: Option<Item>,
	/// When used on an Object, identifies the MIME media type of the value of the content property
	pub media_type: Option<MimeType>,
	pub published: Option<DateTime<Utc>>,
	pub updated: Option<DateTime<Utc>>,
	pub start_time: Option<DateTime<Utc>>,
	pub end_time: Option<DateTime<Utc>>,
	pub duration: Duration,
	pub icon: Option<Item>,
	pub image: Option<Item>,
	pub preview: Option<Item>,
	pub location: Option<Item>,
	pub generator: Option<Item>,
	pub in_reply_to: Option<Item>,
	pub replies: Option<Item>,
	/// One or more "tags" that have been associated with an objects. A tag can be any kind of Object
	pub tag: ItemCollection,
	pub url: Option<Item>,
	pub to: ItemCollection,
	pub bto: ItemCollection,
	pub cc: ItemCollection,
	pub bcc: ItemCollection,
	pub likes: Option<Item>,
	pub shares: Option<Item>,
	pub source: Option<Source>,
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	pub sensitive: Option<bool>,
}

impl Object {
	pub fn new(kind: impl Into<TypeTag>, id: Option<Iri>) -> Self {
		Object {
			id,
			kind: kind.into(),
			..Default::default()
		}
	}
}

crate::setters! {
	Object {
		id: Option<Iri>,
		name: LangMap,
		content: LangMap,
		summary: LangMap,
		attachment: ItemCollection,
		attributed_to: Option<Item>,
		audience: ItemCollection,
		context: Option<Item>,
		media_type: Option<MimeType>,
		published: Option<DateTime<Utc>>,
		updated: Option<DateTime<Utc>>,
		start_time: Option<DateTime<Utc>>,
		end_time: Option<DateTime<Utc>>,
		duration: Duration,
		icon: Option<Item>,
		image: Option<Item>,
		preview: Option<Item>,
		location: Option<Item>,
		generator: Option<Item>,
		in_reply_to: Option<Item>,
		replies: Option<Item>,
		tag: ItemCollection,
		url: Option<Item>,
		to: ItemCollection,
		bto: ItemCollection,
		cc: ItemCollection,
		bcc: ItemCollection,
		likes: Option<Item>,
		shares: Option<Item>,
		source: Option<Source>,
	}
}

impl crate::Base for Object {
	fn id(&self) -> Option<&Iri> {
		self.id.as_ref()
	}

	fn kind(&self) -> &TypeTag {
		&self.kind
	}

	fn family(&self) -> Family {
		Family::Object
	}
}

impl crate::AsObject for Object {
	fn as_object(&self) -> &Object {
		self
	}

	fn as_object_mut(&mut self) -> &mut Object {
		self
	}
}

/// the content an object was authored from, before rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Source {
	pub content: LangMap,
	pub media_type: Option<MimeType>,
}
