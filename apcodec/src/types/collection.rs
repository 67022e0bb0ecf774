use super::Family;

crate::strenum! {
	pub enum CollectionType {
		Collection,
		CollectionPage,
		OrderedCollection,
		OrderedCollectionPage;
	};
}

impl CollectionType {
	pub fn family(&self) -> Family {
		match self {
			CollectionType::Collection => Family::Collection,
			CollectionType::CollectionPage => Family::CollectionPage,
			CollectionType::OrderedCollection => Family::OrderedCollection,
			CollectionType::OrderedCollectionPage => Family::OrderedCollectionPage,
		}
	}
}
