mod macros;
pub(crate) use macros::{strenum, setters, shape};

mod error;
pub use error::{Error, Result};

mod primitive;
pub use primitive::{format_timestamp, parse_timestamp, Duration, Iri, LangMap, LangRef, MimeType, PUBLIC};

mod types;
pub use types::{
	AcceptType, ActivityType, ActorType, BaseType, CollectionType, DocumentType, Family, IgnoreType,
	IntransitiveActivityType, LinkType, ObjectType, OfferType, RejectType, TypeTag,
};

mod base;
pub use base::{AsObject, Base};

mod item;
pub use item::{Item, ItemCollection};

mod object;
pub use object::{
	Object, Source,
	activity::{Activity, Closed, IntransitiveActivity, Question},
	actor::{Actor, Endpoints, PublicKey},
	collection::{
		Collection, Container, OrderedCollection,
		page::{CollectionPage, OrderedCollectionPage},
	},
	extension::Extension,
	link::Link,
	place::Place,
	profile::Profile,
	relationship::Relationship,
	tombstone::Tombstone,
};

mod record;
pub use record::Record;

mod registry;
pub use registry::{ActivityStreams, Extended, TypeRegistry};

mod decode;
pub use decode::{decode, Decoder, TypePolicy};

mod encode;
pub use encode::{encode, Encode, Encoder};

mod target;
pub use target::{dedup, dedup_in_place, Recipients};

mod flatten;
pub use flatten::{flatten, flatten_properties};

pub mod jsonld;

mod config;
pub use config::{Config, DecodeConfig, EncodeConfig};
