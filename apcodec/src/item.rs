use crate::{Base, Error, Family, Iri, Record, Result, TypeTag};

/// ActivityStreams value: a bare reference, an embedded record, or several of them
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
	Iri(Iri),
	Record(Box<Record>),
	Items(Vec<Item>),
}

pub type ItemCollection = Vec<Item>;

impl Item {
	/// collapses a decoded list the same way the encoder collapses it: nothing, one item, or many
	pub fn from_items(mut items: Vec<Item>) -> Option<Item> {
		match items.len() {
			0 => None,
			1 => items.pop(),
			_ => Some(Item::Items(items)),
		}
	}

	pub fn link(iri: Iri) -> Self {
		Item::Iri(iri)
	}

	pub fn record(record: impl Into<Record>) -> Self {
		Item::Record(Box::new(record.into()))
	}

	/// type tag of the embedded record, nothing for references and lists
	pub fn kind(&self) -> Option<&TypeTag> {
		match self {
			Item::Record(r) => Some(r.kind()),
			Item::Iri(_) | Item::Items(_) => None,
		}
	}

	pub fn family(&self) -> Option<Family> {
		match self {
			Item::Record(r) => Some(r.family()),
			Item::Iri(_) | Item::Items(_) => None,
		}
	}

	/// what this item points to: the iri itself, or the id of an embedded record
	pub fn reference(&self) -> Option<&Iri> {
		match self {
			Item::Iri(iri) => Some(iri),
			Item::Record(r) => r.reference(),
			Item::Items(_) => None,
		}
	}

	/// true for bare references and embedded Link records
	pub fn is_link(&self) -> bool {
		match self {
			Item::Iri(_) => true,
			Item::Record(r) => matches!(**r, Record::Link(_)),
			Item::Items(_) => false,
		}
	}

	pub fn is_iri(&self) -> bool {
		matches!(self, Item::Iri(_))
	}

	/// true only for embedded records that are not Links
	pub fn is_object(&self) -> bool {
		match self {
			Item::Record(r) => !matches!(**r, Record::Link(_)),
			Item::Iri(_) | Item::Items(_) => false,
		}
	}

	/// true for item lists and embedded collection records
	pub fn is_collection(&self) -> bool {
		match self {
			Item::Items(_) => true,
			Item::Record(r) => r.family().is_collection(),
			Item::Iri(_) => false,
		}
	}

	pub fn as_record(&self) -> Option<&Record> {
		match self {
			Item::Record(r) => Some(r),
			Item::Iri(_) | Item::Items(_) => None,
		}
	}

	pub fn as_record_mut(&mut self) -> Option<&mut Record> {
		match self {
			Item::Record(r) => Some(r),
			Item::Iri(_) | Item::Items(_) => None,
		}
	}

	pub fn into_record(self) -> Option<Record> {
		match self {
			Item::Record(r) => Some(*r),
			Item::Iri(_) | Item::Items(_) => None,
		}
	}

	/// embedded record, or the shape error a caller probing for `expected` should get
	pub fn try_record(&self, expected: Family) -> Result<&Record> {
		match self {
			Item::Record(r) => Ok(r),
			Item::Iri(_) => Err(Error::mismatch(expected, Family::Link)),
			Item::Items(_) => Err(Error::mismatch(expected, Family::Collection)),
		}
	}

	pub fn try_record_mut(&mut self, expected: Family) -> Result<&mut Record> {
		match self {
			Item::Record(r) => Ok(r),
			Item::Iri(_) => Err(Error::mismatch(expected, Family::Link)),
			Item::Items(_) => Err(Error::mismatch(expected, Family::Collection)),
		}
	}

	/// number of contained items (references count as items)
	pub fn len(&self) -> usize {
		match self {
			Item::Iri(_) | Item::Record(_) => 1,
			Item::Items(v) => v.len(),
		}
	}

	/// true only for an empty list
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// itself, or the first element of a list
	pub fn first(&self) -> Option<&Item> {
		match self {
			Item::Iri(_) | Item::Record(_) => Some(self),
			Item::Items(v) => v.first()?.first(),
		}
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Item> {
		match self {
			Item::Items(v) => v.iter(),
			Item::Iri(_) | Item::Record(_) => std::slice::from_ref(self).iter(),
		}
	}

	pub fn flat(self) -> Vec<Item> {
		match self {
			Item::Iri(_) | Item::Record(_) => vec![self],
			// AS disallows arrays of arrays, decoder already flattened them
			Item::Items(v) => v,
		}
	}

	pub fn all_ids(&self) -> Vec<String> {
		self.iter()
			.filter_map(|x| Some(x.reference()?.to_string()))
			.collect()
	}

	/// logical number of members: list length, or collection record count
	pub fn count(&self) -> Result<u64> {
		match self {
			Item::Items(v) => Ok(v.len() as u64),
			Item::Iri(_) => Err(Error::mismatch(Family::Collection, Family::Link)),
			Item::Record(r) => Ok(r.as_container()?.count()),
		}
	}

	/// appends to a list or to a collection record, references can't hold anything
	pub fn append(&mut self, item: Item) -> Result<()> {
		match self {
			Item::Items(v) => {
				v.push(item);
				Ok(())
			},
			Item::Iri(_) => Err(Error::mismatch(Family::Collection, Family::Link)),
			Item::Record(r) => r.as_container_mut()?.append(item),
		}
	}
}

impl From<Iri> for Item {
	fn from(value: Iri) -> Self {
		Item::Iri(value)
	}
}

impl From<Record> for Item {
	fn from(value: Record) -> Self {
		Item::Record(Box::new(value))
	}
}

impl From<Vec<Item>> for Item {
	fn from(value: Vec<Item>) -> Self {
		Item::Items(value)
	}
}

impl<'a> IntoIterator for &'a Item {
	type Item = &'a Item;
	type IntoIter = std::slice::Iter<'a, Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod test {
	use crate::{Activity, ActivityType, Collection, Family, Iri, Item, Link, Object, ObjectType};

	fn iri(s: &str) -> Iri {
		Iri::parse(s).expect("valid iri")
	}

	#[test]
	fn capability_queries_follow_shape() {
		let link = Item::from(iri("https://example.net/1"));
		assert!(link.is_link() && link.is_iri() && !link.is_object() && !link.is_collection());
		assert_eq!(link.kind(), None);
		assert_eq!(link.reference(), Some(&iri("https://example.net/1")));

		let note = Item::record(Object::new(ObjectType::Note, Some(iri("https://example.net/2"))));
		assert!(note.is_object() && !note.is_link());
		assert_eq!(note.kind().map(|t| t.as_str()), Some("Note"));

		let mention = Item::record(Link::new("Mention", None));
		assert!(mention.is_link() && !mention.is_object());

		let list = Item::Items(vec![link.clone(), note.clone()]);
		assert!(list.is_collection());
		assert_eq!(list.all_ids(), vec!["https://example.net/1", "https://example.net/2"]);
		assert_eq!(list.reference(), None);

		let coll = Item::record(Collection::new(None));
		assert!(coll.is_collection() && coll.is_object());
	}

	#[test]
	fn from_items_collapses_like_the_encoder() {
		assert_eq!(Item::from_items(vec![]), None);
		let one = Item::from(iri("https://example.net/1"));
		assert_eq!(Item::from_items(vec![one.clone()]), Some(one.clone()));
		let two = Item::from_items(vec![one.clone(), one.clone()]).expect("two items");
		assert_eq!(two.len(), 2);
	}

	#[test]
	fn probing_wrong_shapes_returns_errors() {
		let link = Item::from(iri("https://example.net/1"));
		assert!(matches!(
			link.try_record(Family::Activity),
			Err(crate::Error::ShapeMismatch { expected: Family::Activity, found: Family::Link })
		));

		let note = Item::record(Object::new(ObjectType::Note, None));
		let err = note.as_record().expect("record").as_activity().expect_err("not an activity");
		assert!(matches!(err, crate::Error::ShapeMismatch { expected: Family::Activity, found: Family::Object }));

		let follow = Item::record(Activity::new(ActivityType::Follow, None));
		assert!(follow.as_record().expect("record").as_activity().is_ok());
		assert!(follow.as_record().expect("record").as_intransitive().is_ok());
	}

	#[test]
	fn lists_and_collections_accept_appends() {
		let mut list = Item::Items(vec![]);
		list.append(Item::from(iri("https://example.net/1"))).expect("lists grow");
		assert_eq!(list.count().expect("countable"), 1);

		let mut coll = Item::record(Collection::new(None));
		coll.append(Item::from(iri("https://example.net/1"))).expect("collections grow");
		assert_eq!(coll.count().expect("countable"), 1);

		let mut link = Item::from(iri("https://example.net/1"));
		assert!(link.append(Item::from(iri("https://example.net/2"))).is_err());
	}
}
