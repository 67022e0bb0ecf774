use super::{ActivityType, CollectionType, Family};

crate::strenum! {
	pub enum ObjectType {
		Object,
		Article,
		Event,
		Note,
		Place,
		Profile,
		Relationship,
		Tombstone;

		Activity(ActivityType),
		Actor(ActorType),
		Collection(CollectionType),
		Document(DocumentType)
	};

	pub enum ActorType {
		Application,
		Group,
		Organization,
		Person,
		Service;
	};

	pub enum DocumentType {
		Document,
		Audio,
		Image,
		Page,
		Video;
	};
}

impl ObjectType {
	pub fn family(&self) -> Family {
		match self {
			ObjectType::Place => Family::Place,
			ObjectType::Profile => Family::Profile,
			ObjectType::Relationship => Family::Relationship,
			ObjectType::Tombstone => Family::Tombstone,
			ObjectType::Activity(x) => x.family(),
			ObjectType::Actor(_) => Family::Actor,
			ObjectType::Collection(x) => x.family(),
			ObjectType::Object
			| ObjectType::Article
			| ObjectType::Event
			| ObjectType::Note
			| ObjectType::Document(_) => Family::Object,
		}
	}
}
