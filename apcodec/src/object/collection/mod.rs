pub mod page;

use crate::{Base, CollectionType, Error, Iri, Item, ItemCollection, Object, Result};

use page::{page_link, window, CollectionPage, OrderedCollectionPage};

/// anything holding members: collections, ordered collections and their pages
pub trait Container : Base {
	/// embedded members, in storage order
	fn members(&self) -> &[Item];
	/// A non-negative integer specifying the total number of objects contained by the logical view of the collection.
	/// This number might not reflect the actual number of items serialized within the Collection object instance.
	fn total_items(&self) -> Option<u64>;
	fn is_ordered(&self) -> bool;
	fn append(&mut self, item: Item) -> Result<()>;

	/// declared total when present, embedded members otherwise
	fn count(&self) -> u64 {
		self.total_items().unwrap_or(self.members().len() as u64)
	}
}

// open collections keep totalItems in lockstep with appends
fn grow(total: &mut Option<u64>, embedded: usize) -> Result<()> {
	let next = total
		.unwrap_or(embedded as u64)
		.checked_add(1)
		.ok_or(Error::Capacity)?;
	*total = Some(next);
	Ok(())
}

/// unordered collection, callers may sort `items` as they please
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
	pub base: Object,
	/// In a paged Collection, indicates the page that contains the most recently updated member items
	pub current: Option<Item>,
	/// In a paged Collection, indicates the furthest preceeding page of items in the collection
	pub first: Option<Item>,
	/// In a paged Collection, indicates the furthest proceeding page of the collection
	pub last: Option<Item>,
	pub total_items: Option<u64>,
	pub items: ItemCollection,
}

impl Collection {
	pub fn new(id: Option<Iri>) -> Self {
		Collection {
			base: Object::new(CollectionType::Collection, id),
			..Default::default()
		}
	}

	/// `limit` items starting at `offset`, as a page pointing back to this collection
	pub fn page(&self, offset: u64, limit: u64) -> CollectionPage {
		let id = self.base.id.as_ref();
		let mut page = CollectionPage::new(page_link(id, offset), self);
		page.base.items = window(&self.items, offset, limit);
		let end = offset.saturating_add(limit);
		if end < self.items.len() as u64 {
			page.next = page_link(id, end).map(Item::Iri);
		}
		if offset > 0 {
			page.prev = page_link(id, offset.saturating_sub(limit)).map(Item::Iri);
		}
		page
	}
}

crate::setters! {
	Collection {
		current: Option<Item>,
		first: Option<Item>,
		last: Option<Item>,
		total_items: Option<u64>,
		items: ItemCollection,
	}
}

crate::shape!(Collection => Collection);

impl Container for Collection {
	fn members(&self) -> &[Item] {
		&self.items
	}

	fn total_items(&self) -> Option<u64> {
		self.total_items
	}

	fn is_ordered(&self) -> bool {
		false
	}

	fn append(&mut self, item: Item) -> Result<()> {
		grow(&mut self.total_items, self.items.len())?;
		self.items.push(item);
		Ok(())
	}
}

/// strictly ordered collection, members only ever grow at the end
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedCollection {
	pub base: Object,
	pub current: Option<Item>,
	pub first: Option<Item>,
	pub last: Option<Item>,
	pub total_items: Option<u64>,
	pub(crate) ordered_items: ItemCollection,
}

impl OrderedCollection {
	pub fn new(id: Option<Iri>) -> Self {
		OrderedCollection {
			base: Object::new(CollectionType::OrderedCollection, id),
			..Default::default()
		}
	}

	/// builds the collection around already ordered members, `totalItems` is left untouched
	pub fn with_ordered_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
		self.ordered_items = items.into_iter().collect();
		self
	}

	pub fn ordered_items(&self) -> &[Item] {
		&self.ordered_items
	}

	/// link to the first page produced by [`OrderedCollection::page`]
	pub fn first_page_link(&self) -> Option<Iri> {
		page_link(self.base.id.as_ref(), 0)
	}

	/// `limit` items starting at `offset`, as a page pointing back to this collection
	pub fn page(&self, offset: u64, limit: u64) -> OrderedCollectionPage {
		let id = self.base.id.as_ref();
		let mut page = OrderedCollectionPage::new(page_link(id, offset), self);
		page.base.ordered_items = window(&self.ordered_items, offset, limit);
		page.start_index = Some(offset);
		let end = offset.saturating_add(limit);
		if end < self.ordered_items.len() as u64 {
			page.next = page_link(id, end).map(Item::Iri);
		}
		if offset > 0 {
			page.prev = page_link(id, offset.saturating_sub(limit)).map(Item::Iri);
		}
		page
	}
}

crate::setters! {
	OrderedCollection {
		current: Option<Item>,
		first: Option<Item>,
		last: Option<Item>,
		total_items: Option<u64>,
	}
}

crate::shape!(OrderedCollection => OrderedCollection);

impl Container for OrderedCollection {
	fn members(&self) -> &[Item] {
		&self.ordered_items
	}

	fn total_items(&self) -> Option<u64> {
		self.total_items
	}

	fn is_ordered(&self) -> bool {
		true
	}

	fn append(&mut self, item: Item) -> Result<()> {
		grow(&mut self.total_items, self.ordered_items.len())?;
		self.ordered_items.push(item);
		Ok(())
	}
}
