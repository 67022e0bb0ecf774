use crate::{Iri, Item, ItemCollection, LangMap, Object, TypeTag};

/// Application, Group, Organization, Person and Service all share this shape
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Actor {
	pub base: Object,
	pub inbox: Option<Item>,
	pub outbox: Option<Item>,
	pub following: Option<Item>,
	pub followers: Option<Item>,
	pub liked: Option<Item>,
	pub preferred_username: LangMap,
	pub endpoints: Option<Endpoints>,
	pub streams: ItemCollection,
	pub public_key: Option<PublicKey>,
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	pub manually_approves_followers: Option<bool>,
}

impl Actor {
	pub fn new(kind: impl Into<TypeTag>, id: Option<Iri>) -> Self {
		Actor {
			base: Object::new(kind, id),
			..Default::default()
		}
	}
}

crate::setters! {
	Actor {
		inbox: Option<Item>,
		outbox: Option<Item>,
		following: Option<Item>,
		followers: Option<Item>,
		liked: Option<Item>,
		preferred_username: LangMap,
		endpoints: Option<Endpoints>,
		streams: ItemCollection,
		public_key: Option<PublicKey>,
	}
}

crate::shape!(Actor => Actor);

/// useful server endpoints for an actor, usually only `sharedInbox` is there
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Endpoints {
	pub proxy_url: Option<Iri>,
	pub oauth_authorization_endpoint: Option<Iri>,
	pub oauth_token_endpoint: Option<Iri>,
	pub provide_client_key: Option<Iri>,
	pub sign_client_key: Option<Iri>,
	pub upload_media: Option<Iri>,
	pub shared_inbox: Option<Iri>,
}

// not part of ActivityStreams, comes from https://w3id.org/security/v1
/// key used to verify http signatures of this actor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicKey {
	pub id: Option<Iri>,
	pub owner: Option<Iri>,
	pub public_key_pem: String,
}
