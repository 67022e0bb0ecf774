use crate::{Family, Iri, Item, LangMap, LangRef, MimeType, TypeTag};

/// qualified reference to a resource, never an Object itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
	pub id: Option<Iri>,
	pub kind: TypeTag,
	pub name: LangMap,
	/// link relations, as in HTML5 `rel`
	pub rel: Vec<String>,
	pub media_type: Option<MimeType>,
	pub height: Option<u64>,
	pub width: Option<u64>,
	pub preview: Option<Item>,
	pub href: Option<Iri>,
	pub href_lang: Option<LangRef>,
}

impl Link {
	pub fn new(kind: impl Into<TypeTag>, href: Option<Iri>) -> Self {
		Link {
			kind: kind.into(),
			href,
			..Default::default()
		}
	}
}

crate::setters! {
	Link {
		id: Option<Iri>,
		name: LangMap,
		rel: Vec<String>,
		media_type: Option<MimeType>,
		height: Option<u64>,
		width: Option<u64>,
		preview: Option<Item>,
		href: Option<Iri>,
		href_lang: Option<LangRef>,
	}
}

impl crate::Base for Link {
	fn id(&self) -> Option<&Iri> {
		self.id.as_ref()
	}

	fn kind(&self) -> &TypeTag {
		&self.kind
	}

	fn family(&self) -> Family {
		Family::Link
	}
}
