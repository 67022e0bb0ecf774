use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::config::EncodeConfig;
use crate::jsonld::LD;
use crate::record::each_record;
use crate::{
	format_timestamp, Activity, Actor, Closed, Collection, CollectionPage, Duration, Endpoints,
	Extension, IntransitiveActivity, Iri, Item, LangMap, Link, Object, OrderedCollection,
	OrderedCollectionPage, Place, Profile, PublicKey, Question, Record, Relationship, Source,
	Tombstone,
};

/// anything that can be written as a JSON value
pub trait Encode {
	fn to_json(&self) -> Value;
}

impl Encode for Item {
	fn to_json(&self) -> Value {
		match self {
			Item::Iri(iri) => Value::String(iri.to_string()),
			Item::Record(record) => record.to_json(),
			Item::Items(items) => Value::Array(items.iter().map(Encode::to_json).collect()),
		}
	}
}

impl Encode for Record {
	fn to_json(&self) -> Value {
		let mut map = Map::new();
		each_record!(self, x => x.encode_fields(&mut map));
		Value::Object(map)
	}
}

/// writes a record's own members, after the ones of the shape it is composed on
pub(crate) trait EncodeFields {
	fn encode_fields(&self, map: &mut Map<String, Value>);
}

pub(crate) trait InsertValue {
	fn insert_item(&mut self, k: &str, v: Option<&Item>);
	/// `compact` lists with a single member are written as that member
	fn insert_items(&mut self, k: &str, v: &[Item], compact: bool);
	fn insert_iri(&mut self, k: &str, v: Option<&Iri>);
	fn insert_lang(&mut self, k: &str, v: &LangMap);
	fn insert_str(&mut self, k: &str, v: Option<&str>);
	fn insert_float(&mut self, k: &str, f: Option<f64>);
	fn insert_u64(&mut self, k: &str, n: Option<u64>);
	fn insert_bool(&mut self, k: &str, b: Option<bool>);
	fn insert_timestr(&mut self, k: &str, t: Option<&DateTime<Utc>>);
	fn insert_duration(&mut self, k: &str, d: &Duration);
}

impl InsertValue for Map<String, Value> {
	fn insert_item(&mut self, k: &str, v: Option<&Item>) {
		match v {
			None => {},
			Some(Item::Items(items)) => self.insert_items(k, items, true),
			Some(item) => {
				self.insert(k.to_string(), item.to_json());
			},
		}
	}

	fn insert_items(&mut self, k: &str, v: &[Item], compact: bool) {
		match v {
			[] => {},
			[single] if compact => {
				self.insert(k.to_string(), single.to_json());
			},
			items => {
				self.insert(
					k.to_string(),
					Value::Array(items.iter().map(Encode::to_json).collect()),
				);
			},
		}
	}

	fn insert_iri(&mut self, k: &str, v: Option<&Iri>) {
		self.insert_str(k, v.map(Iri::as_str));
	}

	fn insert_lang(&mut self, k: &str, v: &LangMap) {
		if let Some(value) = v.to_json() {
			self.insert(k.to_string(), value);
		}
	}

	fn insert_str(&mut self, k: &str, v: Option<&str>) {
		if let Some(v) = v {
			self.insert(
				k.to_string(),
				Value::String(v.to_string()),
			);
		}
	}

	fn insert_float(&mut self, k: &str, v: Option<f64>) {
		if let Some(v) = v {
			if let Some(n) = serde_json::Number::from_f64(v) {
				self.insert(
					k.to_string(),
					Value::Number(n),
				);
			}
		}
	}

	fn insert_u64(&mut self, k: &str, n: Option<u64>) {
		if let Some(n) = n {
			self.insert(k.to_string(), Value::Number(n.into()));
		}
	}

	fn insert_bool(&mut self, k: &str, b: Option<bool>) {
		if let Some(b) = b {
			self.insert(k.to_string(), Value::Bool(b));
		}
	}

	fn insert_timestr(&mut self, k: &str, t: Option<&DateTime<Utc>>) {
		if let Some(t) = t {
			self.insert(
				k.to_string(),
				Value::String(format_timestamp(t)),
			);
		}
	}

	fn insert_duration(&mut self, k: &str, d: &Duration) {
		if !d.is_zero() {
			self.insert(k.to_string(), Value::String(d.to_string()));
		}
	}
}

impl EncodeFields for Object {
	fn encode_fields(&self, map: &mut Map<String, Value>) {
		map.insert_iri("id", self.id.as_ref());
		if !self.kind.is_empty() {
			map.insert_str("type", Some(self.kind.as_str()));
		}
		map.insert_lang("name", &self.name);
		map.insert_lang("content", &self.content);
		map.insert_lang("summary", &self.summary);
		map.insert_items("attachment", &self.attachment, true);
		map.insert_item("attributedTo", self.attributed_to.as_ref());
		map.insert_items("audience", &self.audience, false);
		map.insert_item("context", self.context.as_ref());
		map.insert_str("mediaType", self.media_type.as_ref().map(|m| m.as_str()));
		map.insert_timestr("published", self.published.as_ref());
		map.insert_timestr("updated", self.updated.as_ref());
		map.insert_timestr("startTime", self.start_time.as_ref());
		map.insert_timestr("endTime", self.end_time.as_ref());
		map.insert_duration("duration", &self.duration);
		map.insert_item("icon", self.icon.as_ref());
		map.insert_item("image", self.image.as_ref());
		map.insert_item("preview", self.preview.as_ref());
		map.insert_item("location", self.location.as_ref());
		map.insert_item("generator", self.generator.as_ref());
		map.insert_item("inReplyTo", self.in_reply_to.as_ref());
		map.insert_item("replies", self.replies.as_ref());
		map.insert_items("tag", &self.tag, true);
		map.insert_item("url", self.url.as_ref());
		map.insert_items("to", &self.to, false);
		map.insert_items("bto", &self.bto, false);
		map.insert_items("cc", &self.cc, false);
		map.insert_items("bcc", &self.bcc, false);
		map.insert_item("likes", self.likes.as_ref());
		map.insert_item("shares", self.shares.as_ref());
		if let Some(source) = &self.source {
			map.insert("source".to_string(), source.to_json());
		}
		#[cfg(feature = "activitypub-miscellaneous-terms")]
		map.insert_bool("sensitive", self.sensitive);
	}
}

impl Encode for Source {
	fn to_json(&self) -> Value {
		let mut map = Map::new();
		map.insert_lang("content", &self.content);
		map.insert_str("mediaType", self.media_type.as_ref().map(|m| m.as_str()));
		Value::Object(map)
	}
}

impl EncodeFields for Link {
	fn encode_fields(&self, map: &mut Map<String, Value>) {
		map.insert_iri("id", self.id.as_ref());
		if !self.kind.is_empty() {
			map.insert_str("type", Some(self.kind.as_str()));
		}
		map.insert_lang("name", &self.name);
		match self.rel.as_slice() {
			[] => {},
			[rel] => map.insert_str("rel", Some(rel.as_str())),
			rels => {
				map.insert(
					"rel".to_string(),
					Value::Array(rels.iter().map(|r| Value::String(r.clone())).collect()),
				);
			},
		}
		map.insert_str("mediaType", self.media_type.as_ref().map(|m| m.as_str()));
		map.insert_u64("height", self.height);
		map.insert_u64("width", self.width);
		map.insert_item("preview", self.preview.as_ref());
		map.insert_iri("href", self.href.as_ref());
		map.insert_str("hreflang", self.href_lang.as_ref().map(|l| l.as_str()));
	}
}

impl EncodeFields for IntransitiveActivity {
	fn encode_fields(&self, map: &mut Map<String, Value>) {
		self.base.encode_fields(map);
		map.insert_item("actor", self.actor.as_ref());
		map.insert_item("target", self.target.as_ref());
		map.insert_item("result", self.result.as_ref());
		map.insert_item("origin", self.origin.as_ref());
		map.insert_item("instrument", self.instrument.as_ref());
	}
}

impl EncodeFields for Activity {
	fn encode_fields(&self, map: &mut Map<String, Value>) {
		self.base.encode_fields(map);
		map.insert_item("object", self.object.as_ref());
	}
}

impl EncodeFields for Question {
	fn encode_fields(&self, map: &mut Map<String, Value>) {
		self.base.encode_fields(map);
		map.insert_items("oneOf", &self.one_of, false);
		map.insert_items("anyOf", &self.any_of, false);
		match &self.closed {
			None => {},
			Some(Closed::Flag(b)) => map.insert_bool("closed", Some(*b)),
			Some(Closed::At(t)) => map.insert_timestr("closed", Some(t)),
			Some(Closed::Item(item)) => map.insert_item("closed", Some(item)),
		}
	}
}

impl EncodeFields for Actor {
	fn encode_fields(&self, map: &mut Map<String, Value>) {
		self.base.encode_fields(map);
		map.insert_item("inbox", self.inbox.as_ref());
		map.insert_item("outbox", self.outbox.as_ref());
		map.insert_item("following", self.following.as_ref());
		map.insert_item("followers", self.followers.as_ref());
		map.insert_item("liked", self.liked.as_ref());
		map.insert_lang("preferredUsername", &self.preferred_username);
		if let Some(endpoints) = &self.endpoints {
			map.insert("endpoints".to_string(), endpoints.to_json());
		}
		map.insert_items("streams", &self.streams, false);
		if let Some(key) = &self.public_key {
			map.insert("publicKey".to_string(), key.to_json());
		}
		#[cfg(feature = "activitypub-miscellaneous-terms")]
		map.insert_bool("manuallyApprovesFollowers", self.manually_approves_followers);
	}
}

impl Encode for Endpoints {
	fn to_json(&self) -> Value {
		let mut map = Map::new();
		map.insert_iri("proxyUrl", self.proxy_url.as_ref());
		map.insert_iri("oauthAuthorizationEndpoint", self.oauth_authorization_endpoint.as_ref());
		map.insert_iri("oauthTokenEndpoint", self.oauth_token_endpoint.as_ref());
		map.insert_iri("provideClientKey", self.provide_client_key.as_ref());
		map.insert_iri("signClientKey", self.sign_client_key.as_ref());
		map.insert_iri("uploadMedia", self.upload_media.as_ref());
		map.insert_iri("sharedInbox", self.shared_inbox.as_ref());
		Value::Object(map)
	}
}

impl Encode for PublicKey {
	fn to_json(&self) -> Value {
		let mut map = Map::new();
		map.insert_iri("id", self.id.as_ref());
		map.insert_iri("owner", self.owner.as_ref());
		map.insert_str("publicKeyPem", Some(self.public_key_pem.as_str()));
		Value::Object(map)
	}
}

impl EncodeFields for Collection {
	fn encode_fields(&self, map: &mut Map<String, Value>) {
		self.base.encode_fields(map);
		map.insert_item("current", self.current.as_ref());
		map.insert_item("first", self.first.as_ref());
		map.insert_item("last", self.last.as_ref());
		map.insert_u64("totalItems", self.total_items);
		map.insert_items("items", &self.items, false);
	}
}

impl EncodeFields for OrderedCollection {
	fn encode_fields(&self, map: &mut Map<String, Value>) {
		self.base.encode_fields(map);
		map.insert_item("current", self.current.as_ref());
		map.insert_item("first", self.first.as_ref());
		map.insert_item("last", self.last.as_ref());
		map.insert_u64("totalItems", self.total_items);
		map.insert_items("orderedItems", &self.ordered_items, false);
	}
}

impl EncodeFields for CollectionPage {
	fn encode_fields(&self, map: &mut Map<String, Value>) {
		self.base.encode_fields(map);
		map.insert_item("partOf", self.part_of.as_ref());
		map.insert_item("next", self.next.as_ref());
		map.insert_item("prev", self.prev.as_ref());
	}
}

impl EncodeFields for OrderedCollectionPage {
	fn encode_fields(&self, map: &mut Map<String, Value>) {
		self.base.encode_fields(map);
		map.insert_item("partOf", self.part_of.as_ref());
		map.insert_item("next", self.next.as_ref());
		map.insert_item("prev", self.prev.as_ref());
		map.insert_u64("startIndex", self.start_index);
	}
}

impl EncodeFields for Place {
	fn encode_fields(&self, map: &mut Map<String, Value>) {
		self.base.encode_fields(map);
		map.insert_float("accuracy", self.accuracy);
		map.insert_float("altitude", self.altitude);
		map.insert_float("latitude", self.latitude);
		map.insert_float("longitude", self.longitude);
		map.insert_float("radius", self.radius);
		map.insert_str("units", self.units.as_deref());
	}
}

impl EncodeFields for Profile {
	fn encode_fields(&self, map: &mut Map<String, Value>) {
		self.base.encode_fields(map);
		map.insert_item("describes", self.describes.as_ref());
	}
}

impl EncodeFields for Relationship {
	fn encode_fields(&self, map: &mut Map<String, Value>) {
		self.base.encode_fields(map);
		map.insert_item("subject", self.subject.as_ref());
		map.insert_item("object", self.object.as_ref());
		map.insert_item("relationship", self.relationship.as_ref());
	}
}

impl EncodeFields for Tombstone {
	fn encode_fields(&self, map: &mut Map<String, Value>) {
		self.base.encode_fields(map);
		map.insert_str("formerType", self.former_type.as_ref().map(|t| t.as_str()));
		map.insert_timestr("deleted", self.deleted.as_ref());
	}
}

impl EncodeFields for Extension {
	fn encode_fields(&self, map: &mut Map<String, Value>) {
		self.base.encode_fields(map);
		for (k, v) in &self.fields {
			if !map.contains_key(k) {
				map.insert(k.clone(), v.clone());
			}
		}
	}
}

/// writes [`Item`] graphs as JSON documents
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
	ld_context: bool,
	pretty: bool,
}

impl Encoder {
	pub fn new() -> Self {
		Encoder::default()
	}

	pub fn from_config(cfg: &EncodeConfig) -> Self {
		Encoder {
			ld_context: cfg.ld_context,
			pretty: cfg.pretty,
		}
	}

	pub fn with_ld_context(mut self, ld_context: bool) -> Self {
		self.ld_context = ld_context;
		self
	}

	pub fn with_pretty(mut self, pretty: bool) -> Self {
		self.pretty = pretty;
		self
	}

	pub fn to_value(&self, item: &Item) -> Value {
		let value = item.to_json();
		if self.ld_context {
			value.ld_context()
		} else {
			value
		}
	}

	pub fn encode(&self, item: &Item) -> Vec<u8> {
		let value = self.to_value(item);
		if self.pretty {
			format!("{value:#}").into_bytes()
		} else {
			value.to_string().into_bytes()
		}
	}
}

/// compact JSON without `@context`
pub fn encode(item: &Item) -> Vec<u8> {
	Encoder::new().encode(item)
}
