use crate::{Base, CollectionType, Iri, Item, Object, Result};

use super::{Collection, Container, OrderedCollection};

/// `{collection}?offset={n}`, or nothing for anonymous collections
pub(crate) fn page_link(id: Option<&Iri>, offset: u64) -> Option<Iri> {
	let id = id?;
	let sep = if id.as_str().contains('?') { '&' } else { '?' };
	Iri::parse(&format!("{id}{sep}offset={offset}")).ok()
}

pub(crate) fn window(items: &[Item], offset: u64, limit: u64) -> Vec<Item> {
	items
		.iter()
		.skip(usize::try_from(offset).unwrap_or(usize::MAX))
		.take(usize::try_from(limit).unwrap_or(usize::MAX))
		.cloned()
		.collect()
}

fn parent_ref(parent: &impl Base) -> Option<Item> {
	parent.id().cloned().map(Item::Iri)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionPage {
	pub base: Collection,
	pub(crate) part_of: Option<Item>,
	pub next: Option<Item>,
	pub prev: Option<Item>,
}

impl CollectionPage {
	/// `partOf` is taken from the parent here and never changes afterwards
	pub fn new(id: Option<Iri>, parent: &Collection) -> Self {
		CollectionPage {
			base: Collection {
				base: Object::new(CollectionType::CollectionPage, id),
				..Default::default()
			},
			part_of: parent_ref(parent),
			next: None,
			prev: None,
		}
	}

	pub fn part_of(&self) -> Option<&Item> {
		self.part_of.as_ref()
	}
}

crate::setters! {
	CollectionPage {
		next: Option<Item>,
		prev: Option<Item>,
	}
}

crate::shape!(CollectionPage => CollectionPage);

impl Container for CollectionPage {
	fn members(&self) -> &[Item] {
		&self.base.items
	}

	fn total_items(&self) -> Option<u64> {
		self.base.total_items
	}

	fn is_ordered(&self) -> bool {
		false
	}

	// pages are windows over their parent, their totalItems is not theirs to grow
	fn append(&mut self, item: Item) -> Result<()> {
		self.base.items.push(item);
		Ok(())
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedCollectionPage {
	pub base: OrderedCollection,
	pub(crate) part_of: Option<Item>,
	pub next: Option<Item>,
	pub prev: Option<Item>,
	/// index of the first item of this page inside the whole collection
	pub start_index: Option<u64>,
}

impl OrderedCollectionPage {
	/// `partOf` is taken from the parent here and never changes afterwards
	pub fn new(id: Option<Iri>, parent: &OrderedCollection) -> Self {
		OrderedCollectionPage {
			base: OrderedCollection {
				base: Object::new(CollectionType::OrderedCollectionPage, id),
				..Default::default()
			},
			part_of: parent_ref(parent),
			next: None,
			prev: None,
			start_index: None,
		}
	}

	pub fn part_of(&self) -> Option<&Item> {
		self.part_of.as_ref()
	}

	pub fn ordered_items(&self) -> &[Item] {
		&self.base.ordered_items
	}
}

crate::setters! {
	OrderedCollectionPage {
		next: Option<Item>,
		prev: Option<Item>,
		start_index: Option<u64>,
	}
}

crate::shape!(OrderedCollectionPage => OrderedCollectionPage);

impl Container for OrderedCollectionPage {
	fn members(&self) -> &[Item] {
		&self.base.ordered_items
	}

	fn total_items(&self) -> Option<u64> {
		self.base.total_items
	}

	fn is_ordered(&self) -> bool {
		true
	}

	fn append(&mut self, item: Item) -> Result<()> {
		self.base.ordered_items.push(item);
		Ok(())
	}
}
