use crate::{
	Activity, Actor, AsObject, Base, Collection, CollectionPage, Container, Error, Extension, Family,
	IntransitiveActivity, Iri, Item, Link, Object, OrderedCollection, OrderedCollectionPage, Place,
	Profile, Question, Relationship, Result, Tombstone, TypeTag,
};

/// every record shape an [`Item`] can embed
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
	Object(Object),
	Link(Link),
	Activity(Activity),
	IntransitiveActivity(IntransitiveActivity),
	Question(Question),
	Actor(Actor),
	Collection(Collection),
	OrderedCollection(OrderedCollection),
	CollectionPage(CollectionPage),
	OrderedCollectionPage(OrderedCollectionPage),
	Place(Place),
	Profile(Profile),
	Relationship(Relationship),
	Tombstone(Tombstone),
	Extension(Extension),
}

/// runs `$body` with `$x` bound to whatever shape `$rec` holds
macro_rules! each_record {
	($rec:expr, $x:ident => $body:expr) => {
		match $rec {
			$crate::Record::Object($x) => $body,
			$crate::Record::Link($x) => $body,
			$crate::Record::Activity($x) => $body,
			$crate::Record::IntransitiveActivity($x) => $body,
			$crate::Record::Question($x) => $body,
			$crate::Record::Actor($x) => $body,
			$crate::Record::Collection($x) => $body,
			$crate::Record::OrderedCollection($x) => $body,
			$crate::Record::CollectionPage($x) => $body,
			$crate::Record::OrderedCollectionPage($x) => $body,
			$crate::Record::Place($x) => $body,
			$crate::Record::Profile($x) => $body,
			$crate::Record::Relationship($x) => $body,
			$crate::Record::Tombstone($x) => $body,
			$crate::Record::Extension($x) => $body,
		}
	};
}

pub(crate) use each_record;

macro_rules! record_from {
	($($variant:ident),*) => {
		$(
			impl From<$variant> for Record {
				fn from(value: $variant) -> Self {
					Record::$variant(value)
				}
			}
		)*
	};
}

record_from!(
	Object, Link, Activity, IntransitiveActivity, Question, Actor, Collection, OrderedCollection,
	CollectionPage, OrderedCollectionPage, Place, Profile, Relationship, Tombstone, Extension
);

/// `as_<family>()` and `as_<family>_mut()` for families matched only by their own variant
macro_rules! downcast {
	($($variant:ident),*) => {
		paste::paste! {
			impl Record {
				$(
					pub fn [< as_ $variant:snake >](&self) -> Result<&$variant> {
						match self {
							Record::$variant(x) => Ok(x),
							other => Err(Error::mismatch(Family::$variant, other.family())),
						}
					}

					pub fn [< as_ $variant:snake _mut >](&mut self) -> Result<&mut $variant> {
						match self {
							Record::$variant(x) => Ok(x),
							other => Err(Error::mismatch(Family::$variant, other.family())),
						}
					}
				)*
			}
		}
	};
}

downcast!(
	Link, Activity, Question, Actor, CollectionPage, OrderedCollectionPage, Place, Profile,
	Relationship, Tombstone, Extension
);

impl Record {
	/// blank record of the given shape, tagged with `kind`
	pub fn empty(family: Family, kind: TypeTag) -> Record {
		let mut record = match family {
			Family::Object => Record::Object(Object::default()),
			Family::Link => Record::Link(Link::default()),
			Family::Activity => Record::Activity(Activity::default()),
			Family::IntransitiveActivity => Record::IntransitiveActivity(IntransitiveActivity::default()),
			Family::Question => Record::Question(Question::default()),
			Family::Actor => Record::Actor(Actor::default()),
			Family::Collection => Record::Collection(Collection::default()),
			Family::OrderedCollection => Record::OrderedCollection(OrderedCollection::default()),
			Family::CollectionPage => Record::CollectionPage(CollectionPage::default()),
			Family::OrderedCollectionPage => Record::OrderedCollectionPage(OrderedCollectionPage::default()),
			Family::Place => Record::Place(Place::default()),
			Family::Profile => Record::Profile(Profile::default()),
			Family::Relationship => Record::Relationship(Relationship::default()),
			Family::Tombstone => Record::Tombstone(Tombstone::default()),
			Family::Extension => Record::Extension(Extension::default()),
		};
		if let Record::Link(l) = &mut record {
			l.kind = kind;
		} else if let Ok(o) = record.as_object_mut() {
			o.kind = kind;
		}
		record
	}

	/// what an item embedding this record points to: its id, or the href for anonymous Links
	pub fn reference(&self) -> Option<&Iri> {
		match self {
			Record::Link(l) => l.id.as_ref().or(l.href.as_ref()),
			other => other.id(),
		}
	}

	/// Object field set of any record except Links
	pub fn as_object(&self) -> Result<&Object> {
		match self {
			Record::Link(_) => Err(Error::mismatch(Family::Object, Family::Link)),
			Record::Object(x) => Ok(x),
			Record::Activity(x) => Ok(x.as_object()),
			Record::IntransitiveActivity(x) => Ok(x.as_object()),
			Record::Question(x) => Ok(x.as_object()),
			Record::Actor(x) => Ok(x.as_object()),
			Record::Collection(x) => Ok(x.as_object()),
			Record::OrderedCollection(x) => Ok(x.as_object()),
			Record::CollectionPage(x) => Ok(x.as_object()),
			Record::OrderedCollectionPage(x) => Ok(x.as_object()),
			Record::Place(x) => Ok(x.as_object()),
			Record::Profile(x) => Ok(x.as_object()),
			Record::Relationship(x) => Ok(x.as_object()),
			Record::Tombstone(x) => Ok(x.as_object()),
			Record::Extension(x) => Ok(x.as_object()),
		}
	}

	pub fn as_object_mut(&mut self) -> Result<&mut Object> {
		match self {
			Record::Link(_) => Err(Error::mismatch(Family::Object, Family::Link)),
			Record::Object(x) => Ok(x),
			Record::Activity(x) => Ok(x.as_object_mut()),
			Record::IntransitiveActivity(x) => Ok(x.as_object_mut()),
			Record::Question(x) => Ok(x.as_object_mut()),
			Record::Actor(x) => Ok(x.as_object_mut()),
			Record::Collection(x) => Ok(x.as_object_mut()),
			Record::OrderedCollection(x) => Ok(x.as_object_mut()),
			Record::CollectionPage(x) => Ok(x.as_object_mut()),
			Record::OrderedCollectionPage(x) => Ok(x.as_object_mut()),
			Record::Place(x) => Ok(x.as_object_mut()),
			Record::Profile(x) => Ok(x.as_object_mut()),
			Record::Relationship(x) => Ok(x.as_object_mut()),
			Record::Tombstone(x) => Ok(x.as_object_mut()),
			Record::Extension(x) => Ok(x.as_object_mut()),
		}
	}

	/// activity fields shared by every activity, questions and transitive ones included
	pub fn as_intransitive(&self) -> Result<&IntransitiveActivity> {
		match self {
			Record::IntransitiveActivity(x) => Ok(x),
			Record::Activity(x) => Ok(&x.base),
			Record::Question(x) => Ok(&x.base),
			other => Err(Error::mismatch(Family::IntransitiveActivity, other.family())),
		}
	}

	pub fn as_intransitive_mut(&mut self) -> Result<&mut IntransitiveActivity> {
		match self {
			Record::IntransitiveActivity(x) => Ok(x),
			Record::Activity(x) => Ok(&mut x.base),
			Record::Question(x) => Ok(&mut x.base),
			other => Err(Error::mismatch(Family::IntransitiveActivity, other.family())),
		}
	}

	/// collection fields, pages included
	pub fn as_collection(&self) -> Result<&Collection> {
		match self {
			Record::Collection(x) => Ok(x),
			Record::CollectionPage(x) => Ok(&x.base),
			other => Err(Error::mismatch(Family::Collection, other.family())),
		}
	}

	pub fn as_collection_mut(&mut self) -> Result<&mut Collection> {
		match self {
			Record::Collection(x) => Ok(x),
			Record::CollectionPage(x) => Ok(&mut x.base),
			other => Err(Error::mismatch(Family::Collection, other.family())),
		}
	}

	pub fn as_ordered_collection(&self) -> Result<&OrderedCollection> {
		match self {
			Record::OrderedCollection(x) => Ok(x),
			Record::OrderedCollectionPage(x) => Ok(&x.base),
			other => Err(Error::mismatch(Family::OrderedCollection, other.family())),
		}
	}

	pub fn as_ordered_collection_mut(&mut self) -> Result<&mut OrderedCollection> {
		match self {
			Record::OrderedCollection(x) => Ok(x),
			Record::OrderedCollectionPage(x) => Ok(&mut x.base),
			other => Err(Error::mismatch(Family::OrderedCollection, other.family())),
		}
	}

	/// any of the four collection shapes, for counting and appending
	pub fn as_container(&self) -> Result<&dyn Container> {
		match self {
			Record::Collection(x) => Ok(x),
			Record::OrderedCollection(x) => Ok(x),
			Record::CollectionPage(x) => Ok(x),
			Record::OrderedCollectionPage(x) => Ok(x),
			other => Err(Error::mismatch(Family::Collection, other.family())),
		}
	}

	pub fn as_container_mut(&mut self) -> Result<&mut dyn Container> {
		match self {
			Record::Collection(x) => Ok(x),
			Record::OrderedCollection(x) => Ok(x),
			Record::CollectionPage(x) => Ok(x),
			Record::OrderedCollectionPage(x) => Ok(x),
			other => Err(Error::mismatch(Family::Collection, other.family())),
		}
	}

	/// raw member storage, bypassing the append bookkeeping
	pub(crate) fn members_mut(&mut self) -> Option<&mut Vec<Item>> {
		match self {
			Record::Collection(x) => Some(&mut x.items),
			Record::CollectionPage(x) => Some(&mut x.base.items),
			Record::OrderedCollection(x) => Some(&mut x.ordered_items),
			Record::OrderedCollectionPage(x) => Some(&mut x.base.ordered_items),
			_ => None,
		}
	}
}

impl Base for Record {
	fn id(&self) -> Option<&Iri> {
		each_record!(self, x => x.id())
	}

	fn kind(&self) -> &TypeTag {
		each_record!(self, x => x.kind())
	}

	fn family(&self) -> Family {
		each_record!(self, x => x.family())
	}
}
