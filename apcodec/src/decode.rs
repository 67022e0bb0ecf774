use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::config::DecodeConfig;
use crate::record::each_record;
use crate::{
	parse_timestamp, Activity, ActivityStreams, Actor, Closed, Collection, CollectionPage, Duration,
	Endpoints, Error, Extended, Extension, IntransitiveActivity, Iri, Item, ItemCollection, LangMap,
	LangRef, Link, MimeType, Object, OrderedCollection, OrderedCollectionPage, Place, Profile,
	PublicKey, Question, Record, Relationship, Result, Source, Tombstone, TypeRegistry, TypeTag,
};

/// what happens to type tags the registry doesn't know
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypePolicy {
	/// a root record fails with [`Error::UnrecognizedType`], nested ones are dropped
	#[default]
	Strict,
	/// the record is kept as an [`Extension`]
	Lenient,
}

/// turns JSON documents into [`Item`] graphs, resolving type tags through its registry
#[derive(Debug, Clone)]
pub struct Decoder<R = ActivityStreams> {
	registry: R,
	types: TypePolicy,
	normalize_public: bool,
	language_maps: bool,
}

impl Decoder {
	pub fn new() -> Self {
		Decoder {
			registry: ActivityStreams,
			types: TypePolicy::Strict,
			normalize_public: true,
			language_maps: true,
		}
	}
}

impl Default for Decoder {
	fn default() -> Self {
		Decoder::new()
	}
}

impl Decoder<Extended> {
	pub fn from_config(cfg: &DecodeConfig) -> Self {
		let registry = cfg.terms
			.iter()
			.fold(Extended::new(ActivityStreams), |r, (tag, family)| r.with_term(tag.as_str(), *family));
		Decoder {
			registry,
			types: cfg.types,
			normalize_public: cfg.normalize_public,
			language_maps: cfg.language_maps,
		}
	}
}

impl<R: TypeRegistry> Decoder<R> {
	pub fn with_registry<S: TypeRegistry>(self, registry: S) -> Decoder<S> {
		Decoder {
			registry,
			types: self.types,
			normalize_public: self.normalize_public,
			language_maps: self.language_maps,
		}
	}

	pub fn with_types(mut self, types: TypePolicy) -> Self {
		self.types = types;
		self
	}

	pub fn strict(self) -> Self {
		self.with_types(TypePolicy::Strict)
	}

	pub fn lenient(self) -> Self {
		self.with_types(TypePolicy::Lenient)
	}

	pub fn with_public_normalization(mut self, normalize: bool) -> Self {
		self.normalize_public = normalize;
		self
	}

	pub fn with_language_maps(mut self, language_maps: bool) -> Self {
		self.language_maps = language_maps;
		self
	}

	pub fn registry(&self) -> &R {
		&self.registry
	}

	pub fn types(&self) -> TypePolicy {
		self.types
	}

	pub fn decode(&self, raw: &[u8]) -> Result<Item> {
		let value : Value = serde_json::from_slice(raw)?;
		self.decode_value(&value)
	}

	pub fn decode_str(&self, raw: &str) -> Result<Item> {
		let value : Value = serde_json::from_str(raw)?;
		self.decode_value(&value)
	}

	/// a document root must be a record, a reference or a list of them
	pub fn decode_value(&self, value: &Value) -> Result<Item> {
		match value {
			Value::Object(map) => Ok(Item::from(self.record(map)?)),
			Value::String(s) => self
				.reference(s)
				.map(Item::Iri)
				.ok_or_else(|| Error::MalformedInput(format!("'{s}' is not an absolute IRI"))),
			Value::Array(arr) => {
				let mut items = Vec::with_capacity(arr.len());
				for value in arr {
					match value {
						// every element of a root list is a root itself
						Value::Object(map) => match self.record(map) {
							Ok(record) => items.push(Item::from(record)),
							Err(e @ Error::UnrecognizedType(_)) => return Err(e),
							Err(e) => tracing::debug!("ignoring list element: {e}"),
						},
						other => self.element("items", other, &mut items)?,
					}
				}
				if items.is_empty() && !arr.is_empty() {
					return Err(Error::MalformedInput("no element of the list could be decoded".to_string()));
				}
				Ok(Item::from_items(items).unwrap_or(Item::Items(Vec::new())))
			},
			other => Err(Error::MalformedInput(format!(
				"expected an object, a reference or an array, found {}", kind_of(other)
			))),
		}
	}

	fn reference(&self, s: &str) -> Option<Iri> {
		if self.normalize_public && (s == "as:Public" || s == "Public") {
			return Some(Iri::public());
		}
		Iri::parse(s).ok()
	}

	// anomalies make the field absent, unknown nested types included
	fn item(&self, key: &str, value: &Value) -> Result<Option<Item>> {
		match value {
			Value::String(s) => {
				let iri = self.reference(s);
				if iri.is_none() {
					tracing::debug!("ignoring '{key}': '{s}' is not a reference");
				}
				Ok(iri.map(Item::Iri))
			},
			Value::Object(map) => match self.record(map) {
				Ok(record) => Ok(Some(Item::from(record))),
				Err(e) => {
					tracing::debug!("ignoring '{key}': {e}");
					Ok(None)
				},
			},
			Value::Array(arr) => Ok(Item::from_items(self.elements(key, arr)?)),
			Value::Null => Ok(None),
			other => {
				tracing::warn!("discarding {} in '{key}', expected an object or a reference", kind_of(other));
				Ok(None)
			},
		}
	}

	fn elements(&self, key: &str, arr: &[Value]) -> Result<Vec<Item>> {
		let mut out = Vec::with_capacity(arr.len());
		for value in arr {
			self.element(key, value, &mut out)?;
		}
		Ok(out)
	}

	// arrays of arrays flatten one level, anything deeper is dropped
	fn element(&self, key: &str, value: &Value, out: &mut Vec<Item>) -> Result<()> {
		match value {
			Value::Array(inner) => {
				for v in inner {
					if v.is_array() {
						tracing::debug!("ignoring list nested too deep in '{key}'");
						continue;
					}
					out.extend(self.item(key, v)?);
				}
			},
			other => out.extend(self.item(key, other)?),
		}
		Ok(())
	}

	fn record(&self, map: &Map<String, Value>) -> Result<Record> {
		let tag = self.type_tag(map.get("type"))?;
		let mut record = match self.registry.resolve(tag.as_str()) {
			Ok(record) => record,
			Err(Error::UnrecognizedType(t)) if self.types == TypePolicy::Lenient => {
				tracing::debug!("unknown type '{t}', keeping it as an extension");
				Record::Extension(Extension::new(tag, None))
			},
			Err(e) => return Err(e),
		};
		let mut fields = Fields::new(self, map);
		each_record!(&mut record, x => x.decode_fields(&mut fields))?;
		if let Record::Extension(ext) = &mut record {
			ext.fields = fields.leftovers();
		}
		Ok(record)
	}

	// multiple types: the first one we can build wins, otherwise the first one given
	fn type_tag(&self, value: Option<&Value>) -> Result<TypeTag> {
		match value {
			None | Some(Value::Null) => Ok(TypeTag::default()),
			Some(Value::String(s)) => Ok(TypeTag::from(s.as_str())),
			Some(Value::Array(tags)) => {
				let tags : Vec<&str> = tags.iter().filter_map(Value::as_str).collect();
				tags.iter()
					.find(|t| self.registry.family(t).is_some())
					.or(tags.first())
					.map(|t| TypeTag::from(*t))
					.ok_or_else(|| Error::MalformedInput("type list holds no strings".to_string()))
			},
			Some(other) => Err(Error::MalformedInput(format!("unreadable type: {}", kind_of(other)))),
		}
	}
}

/// decodes with the standard vocabulary, strict about unknown types
pub fn decode(raw: &[u8]) -> Result<Item> {
	Decoder::new().decode(raw)
}

fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

/// typed reads over one JSON object, remembering which members were used
pub(crate) struct Fields<'a, R> {
	decoder: &'a Decoder<R>,
	map: &'a Map<String, Value>,
	seen: Vec<&'static str>,
}

impl<'a, R: TypeRegistry> Fields<'a, R> {
	fn new(decoder: &'a Decoder<R>, map: &'a Map<String, Value>) -> Self {
		Fields { decoder, map, seen: Vec::new() }
	}

	fn get(&mut self, key: &'static str) -> Option<&'a Value> {
		self.seen.push(key);
		self.map.get(key).filter(|v| !v.is_null())
	}

	fn skip(&mut self, key: &'static str) {
		self.seen.push(key);
	}

	/// members nobody read, `@context` excluded
	fn leftovers(self) -> Map<String, Value> {
		self.map
			.iter()
			.filter(|(k, _)| k.as_str() != "@context" && !self.seen.iter().any(|s| *s == k.as_str()))
			.map(|(k, v)| (k.clone(), v.clone()))
			.collect()
	}

	fn nested(&mut self, key: &'static str) -> Option<Fields<'a, R>> {
		match self.get(key)? {
			Value::Object(map) => Some(Fields::new(self.decoder, map)),
			other => {
				tracing::debug!("ignoring '{key}': expected an object, found {}", kind_of(other));
				None
			},
		}
	}

	fn item(&mut self, key: &'static str) -> Result<Option<Item>> {
		match self.get(key) {
			Some(value) => self.decoder.item(key, value),
			None => Ok(None),
		}
	}

	fn items(&mut self, key: &'static str) -> Result<ItemCollection> {
		Ok(self.item(key)?.map(Item::flat).unwrap_or_default())
	}

	fn str(&mut self, key: &'static str) -> Option<&'a str> {
		match self.get(key)? {
			Value::String(s) => Some(s.as_str()),
			other => {
				tracing::debug!("ignoring '{key}': expected a string, found {}", kind_of(other));
				None
			},
		}
	}

	fn iri(&mut self, key: &'static str) -> Option<Iri> {
		let s = self.str(key)?;
		let iri = self.decoder.reference(s);
		if iri.is_none() {
			tracing::debug!("ignoring '{key}': '{s}' is not a reference");
		}
		iri
	}

	fn strings(&mut self, key: &'static str) -> Vec<String> {
		match self.get(key) {
			None => Vec::new(),
			Some(Value::String(s)) => vec![s.clone()],
			Some(Value::Array(arr)) => arr.iter().filter_map(|v| Some(v.as_str()?.to_string())).collect(),
			Some(other) => {
				tracing::debug!("ignoring '{key}': expected strings, found {}", kind_of(other));
				Vec::new()
			},
		}
	}

	fn lang(&mut self, key: &'static str, companion: &'static str) -> LangMap {
		let mut out = match self.get(key) {
			None => LangMap::new(),
			Some(value) => LangMap::from_json(value).unwrap_or_else(|| {
				tracing::debug!("ignoring '{key}': expected text, found {}", kind_of(value));
				LangMap::new()
			}),
		};
		if self.decoder.language_maps {
			if let Some(value) = self.get(companion) {
				match LangMap::from_json(value) {
					Some(map) => out.merge(map),
					None => tracing::debug!("ignoring '{companion}': expected a language map, found {}", kind_of(value)),
				}
			}
		}
		out
	}

	fn lang_ref(&mut self, key: &'static str) -> Option<LangRef> {
		match LangRef::parse(self.str(key)?) {
			Ok(lang) if !lang.is_none() => Some(lang),
			Ok(_) => None,
			Err(e) => {
				tracing::debug!("ignoring '{key}': {e}");
				None
			},
		}
	}

	fn mime(&mut self, key: &'static str) -> Option<MimeType> {
		match MimeType::parse(self.str(key)?) {
			Ok(mime) => Some(mime),
			Err(e) => {
				tracing::debug!("ignoring '{key}': {e}");
				None
			},
		}
	}

	fn time(&mut self, key: &'static str) -> Option<DateTime<Utc>> {
		let s = self.str(key)?;
		let time = parse_timestamp(s);
		if time.is_none() {
			tracing::debug!("ignoring '{key}': '{s}' is not a timestamp");
		}
		time
	}

	fn duration(&mut self, key: &'static str) -> Duration {
		let Some(s) = self.str(key) else { return Duration::default() };
		Duration::parse(s).unwrap_or_else(|e| {
			tracing::debug!("ignoring '{key}': {e}");
			Duration::default()
		})
	}

	fn tag(&mut self, key: &'static str) -> Option<TypeTag> {
		self.str(key)
			.filter(|s| !s.is_empty())
			.map(TypeTag::from)
	}

	fn u64(&mut self, key: &'static str) -> Option<u64> {
		let value = self.get(key)?;
		let n = value.as_u64();
		if n.is_none() {
			tracing::debug!("ignoring '{key}': expected a non-negative integer, found {value}");
		}
		n
	}

	fn f64(&mut self, key: &'static str) -> Option<f64> {
		let value = self.get(key)?;
		let n = value.as_f64();
		if n.is_none() {
			tracing::debug!("ignoring '{key}': expected a number, found {}", kind_of(value));
		}
		n
	}

	fn bool(&mut self, key: &'static str) -> Option<bool> {
		let value = self.get(key)?;
		let b = value.as_bool();
		if b.is_none() {
			tracing::debug!("ignoring '{key}': expected a boolean, found {}", kind_of(value));
		}
		b
	}

	fn closed(&mut self, key: &'static str) -> Result<Option<Closed>> {
		let Some(value) = self.get(key) else { return Ok(None) };
		Ok(match value {
			Value::Bool(b) => Some(Closed::Flag(*b)),
			Value::String(s) => match parse_timestamp(s) {
				Some(t) => Some(Closed::At(t)),
				None => self.decoder.item(key, value)?.map(Closed::Item),
			},
			_ => self.decoder.item(key, value)?.map(Closed::Item),
		})
	}
}

/// fills a blank record from a JSON object; composed shapes read their base first
pub(crate) trait DecodeFields {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()>;
}

impl DecodeFields for Object {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()> {
		self.id = f.iri("id");
		f.skip("type");
		self.name = f.lang("name", "nameMap");
		self.content = f.lang("content", "contentMap");
		self.summary = f.lang("summary", "summaryMap");
		self.attachment = f.items("attachment")?;
		self.attributed_to = f.item("attributedTo")?;
		self.audience = f.items("audience")?;
		self.context = f.item("context")?;
		self.media_type = f.mime("mediaType");
		self.published = f.time("published");
		self.updated = f.time("updated");
		self.start_time = f.time("startTime");
		self.end_time = f.time("endTime");
		self.duration = f.duration("duration");
		self.icon = f.item("icon")?;
		self.image = f.item("image")?;
		self.preview = f.item("preview")?;
		self.location = f.item("location")?;
		self.generator = f.item("generator")?;
		self.in_reply_to = f.item("inReplyTo")?;
		self.replies = f.item("replies")?;
		self.tag = f.items("tag")?;
		self.url = f.item("url")?;
		self.to = f.items("to")?;
		self.bto = f.items("bto")?;
		self.cc = f.items("cc")?;
		self.bcc = f.items("bcc")?;
		self.likes = f.item("likes")?;
		self.shares = f.item("shares")?;
		self.source = f.nested("source").map(|mut s| Source {
			content: s.lang("content", "contentMap"),
			media_type: s.mime("mediaType"),
		});
		#[cfg(feature = "activitypub-miscellaneous-terms")]
		{
			self.sensitive = f.bool("sensitive");
		}
		Ok(())
	}
}

impl DecodeFields for Link {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()> {
		self.id = f.iri("id");
		f.skip("type");
		self.name = f.lang("name", "nameMap");
		self.rel = f.strings("rel");
		self.media_type = f.mime("mediaType");
		self.height = f.u64("height");
		self.width = f.u64("width");
		self.preview = f.item("preview")?;
		self.href = f.iri("href");
		self.href_lang = f.lang_ref("hreflang");
		Ok(())
	}
}

impl DecodeFields for IntransitiveActivity {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()> {
		self.base.decode_fields(f)?;
		self.actor = f.item("actor")?;
		self.target = f.item("target")?;
		self.result = f.item("result")?;
		self.origin = f.item("origin")?;
		self.instrument = f.item("instrument")?;
		Ok(())
	}
}

impl DecodeFields for Activity {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()> {
		self.base.decode_fields(f)?;
		self.object = f.item("object")?;
		Ok(())
	}
}

impl DecodeFields for Question {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()> {
		self.base.decode_fields(f)?;
		self.one_of = f.items("oneOf")?;
		self.any_of = f.items("anyOf")?;
		self.closed = f.closed("closed")?;
		Ok(())
	}
}

impl DecodeFields for Actor {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()> {
		self.base.decode_fields(f)?;
		self.inbox = f.item("inbox")?;
		self.outbox = f.item("outbox")?;
		self.following = f.item("following")?;
		self.followers = f.item("followers")?;
		self.liked = f.item("liked")?;
		self.preferred_username = f.lang("preferredUsername", "preferredUsernameMap");
		self.endpoints = f.nested("endpoints").map(|mut e| Endpoints {
			proxy_url: e.iri("proxyUrl"),
			oauth_authorization_endpoint: e.iri("oauthAuthorizationEndpoint"),
			oauth_token_endpoint: e.iri("oauthTokenEndpoint"),
			provide_client_key: e.iri("provideClientKey"),
			sign_client_key: e.iri("signClientKey"),
			upload_media: e.iri("uploadMedia"),
			shared_inbox: e.iri("sharedInbox"),
		});
		self.streams = f.items("streams")?;
		self.public_key = f.nested("publicKey").map(|mut k| PublicKey {
			id: k.iri("id"),
			owner: k.iri("owner"),
			public_key_pem: k.str("publicKeyPem").unwrap_or_default().to_string(),
		});
		#[cfg(feature = "activitypub-miscellaneous-terms")]
		{
			self.manually_approves_followers = f.bool("manuallyApprovesFollowers");
		}
		Ok(())
	}
}

impl DecodeFields for Collection {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()> {
		self.base.decode_fields(f)?;
		self.current = f.item("current")?;
		self.first = f.item("first")?;
		self.last = f.item("last")?;
		self.total_items = f.u64("totalItems");
		self.items = f.items("items")?;
		Ok(())
	}
}

impl DecodeFields for OrderedCollection {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()> {
		self.base.decode_fields(f)?;
		self.current = f.item("current")?;
		self.first = f.item("first")?;
		self.last = f.item("last")?;
		self.total_items = f.u64("totalItems");
		self.ordered_items = f.items("orderedItems")?;
		Ok(())
	}
}

impl DecodeFields for CollectionPage {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()> {
		self.base.decode_fields(f)?;
		self.part_of = f.item("partOf")?;
		self.next = f.item("next")?;
		self.prev = f.item("prev")?;
		Ok(())
	}
}

impl DecodeFields for OrderedCollectionPage {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()> {
		self.base.decode_fields(f)?;
		self.part_of = f.item("partOf")?;
		self.next = f.item("next")?;
		self.prev = f.item("prev")?;
		self.start_index = f.u64("startIndex");
		Ok(())
	}
}

impl DecodeFields for Place {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()> {
		self.base.decode_fields(f)?;
		self.accuracy = f.f64("accuracy");
		self.altitude = f.f64("altitude");
		self.latitude = f.f64("latitude");
		self.longitude = f.f64("longitude");
		self.radius = f.f64("radius");
		self.units = f.str("units").map(str::to_string);
		Ok(())
	}
}

impl DecodeFields for Profile {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()> {
		self.base.decode_fields(f)?;
		self.describes = f.item("describes")?;
		Ok(())
	}
}

impl DecodeFields for Relationship {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()> {
		self.base.decode_fields(f)?;
		self.subject = f.item("subject")?;
		self.object = f.item("object")?;
		self.relationship = f.item("relationship")?;
		Ok(())
	}
}

impl DecodeFields for Tombstone {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()> {
		self.base.decode_fields(f)?;
		self.former_type = f.tag("formerType");
		self.deleted = f.time("deleted");
		Ok(())
	}
}

// everything else is picked up by `Fields::leftovers`
impl DecodeFields for Extension {
	fn decode_fields<R: TypeRegistry>(&mut self, f: &mut Fields<'_, R>) -> Result<()> {
		self.base.decode_fields(f)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{ActivityType, Base, Family, PUBLIC};

	fn iri(s: &str) -> Iri {
		Iri::parse(s).expect("valid iri")
	}

	fn decode_json(value: serde_json::Value) -> Result<Item> {
		Decoder::new().decode_value(&value)
	}

	#[test]
	fn follow_dispatches_to_activity() {
		let item = decode(br#"{"type":"Follow","actor":"https://a","object":"https://b"}"#)
			.expect("valid follow");
		assert_eq!(item.family(), Some(Family::Activity));
		assert_eq!(item.kind().map(|k| k.as_str()), Some("Follow"));
		let record = item.as_record().expect("embedded record");
		let follow = record.as_activity().expect("follow is an activity");
		assert_eq!(follow.base.actor, Some(Item::Iri(iri("https://a"))));
		assert_eq!(follow.object, Some(Item::Iri(iri("https://b"))));
		assert_eq!(*record.kind(), ActivityType::Follow);
	}

	#[test]
	fn unknown_type_fails_when_strict() {
		assert!(matches!(
			decode(br#"{"type":"Bogus"}"#),
			Err(Error::UnrecognizedType(t)) if t == "Bogus"
		));
		// and for records at the root of a list
		assert!(matches!(
			decode(br#"[{"type":"Note"},{"type":"Bogus"}]"#),
			Err(Error::UnrecognizedType(t)) if t == "Bogus"
		));
	}

	#[test]
	fn unknown_nested_types_are_dropped_when_strict() {
		let item = decode(br#"{"type":"Create","actor":"https://example.net/alice","object":{"type":"Bogus"}}"#)
			.expect("only the nested record is unknown");
		let create = item.as_record().expect("record").as_activity().expect("activity");
		assert!(create.object.is_none());
		assert!(create.base.actor.is_some());
	}

	#[test]
	fn custom_emoji_tags_do_not_break_notes() {
		let item = decode_json(serde_json::json!({
			"id": "https://example.net/notes/1",
			"type": "Note",
			"content": "hello :blob:",
			"tag": [
				{ "type": "Emoji", "name": ":blob:", "icon": { "type": "Image", "url": "https://example.net/blob.png" } },
				{ "type": "Mention", "href": "https://example.net/users/bob", "name": "@bob" },
			],
		})).expect("note with custom emoji");
		let note = item.as_record().expect("record").as_object().expect("object");
		assert_eq!(note.id, Some(iri("https://example.net/notes/1")));
		assert_eq!(note.tag.len(), 1);
		assert!(note.tag[0].is_link());
	}

	#[test]
	fn unknown_type_is_kept_when_lenient() {
		let item = Decoder::new()
			.lenient()
			.decode(br#"{"id":"https://example.net/e/1","type":"Emoji","name":":blob:","icon":{"type":"Image","url":"https://example.net/blob.png"},"custom":[1,2]}"#)
			.expect("lenient decode");
		let ext = item.as_record().expect("record").as_extension().expect("extension record");
		assert_eq!(ext.base.kind.as_str(), "Emoji");
		assert_eq!(ext.base.id, Some(iri("https://example.net/e/1")));
		assert_eq!(ext.base.name.first(), Some(":blob:"));
		assert!(ext.base.icon.is_some());
		assert_eq!(ext.field("custom"), Some(&serde_json::json!([1, 2])));
		assert_eq!(ext.fields.len(), 1);
	}

	#[test]
	fn registry_terms_extend_the_vocabulary() {
		let decoder = Decoder::new().with_registry(Extended::new(ActivityStreams).with_term("Emoji", crate::Family::Object));
		let item = decoder.decode(br#"{"type":"Emoji","name":":blob:"}"#).expect("extra term");
		assert_eq!(item.family(), Some(Family::Object));
		assert_eq!(item.kind().map(|k| k.as_str()), Some("Emoji"));
	}

	#[test]
	fn missing_type_is_a_generic_object() {
		let item = decode_json(serde_json::json!({ "content": "hello" })).expect("untyped object");
		let object = item.as_record().expect("record").as_object().expect("object");
		assert!(object.kind.is_empty());
		assert_eq!(object.content.first(), Some("hello"));
	}

	#[test]
	fn top_level_garbage_is_malformed() {
		assert!(matches!(decode(b"{not json"), Err(Error::MalformedInput(_))));
		assert!(matches!(decode(b"42"), Err(Error::MalformedInput(_))));
		assert!(matches!(decode(b"\"not a reference\""), Err(Error::MalformedInput(_))));
		assert!(matches!(decode(br#"{"type":3}"#), Err(Error::MalformedInput(_))));
		assert_eq!(decode(b"\"https://example.net/x\"").expect("bare reference"), Item::Iri(iri("https://example.net/x")));
	}

	#[test]
	fn arrays_collapse_by_length() {
		assert_eq!(decode(b"[]").expect("empty list"), Item::Items(vec![]));
		assert_eq!(
			decode(br#"["https://example.net/1"]"#).expect("single element"),
			Item::Iri(iri("https://example.net/1"))
		);
		let two = decode(br#"["https://example.net/1",["https://example.net/2"]]"#).expect("nested list");
		assert_eq!(two, Item::Items(vec![
			Item::Iri(iri("https://example.net/1")),
			Item::Iri(iri("https://example.net/2")),
		]));
		// only one level is spliced
		let deep = decode(br#"["https://example.net/1",[["https://example.net/2"]]]"#).expect("deep list");
		assert_eq!(deep, Item::Iri(iri("https://example.net/1")));
	}

	#[test]
	fn undecodable_root_lists_are_malformed() {
		assert!(matches!(decode(b"[1, true]"), Err(Error::MalformedInput(_))));
		assert!(matches!(decode(br#"["not a reference", {"type": 3}]"#), Err(Error::MalformedInput(_))));
		let partial = decode(br#"[1, "https://example.net/1"]"#).expect("one good element");
		assert_eq!(partial, Item::Iri(iri("https://example.net/1")));
	}

	#[test]
	fn fields_accept_single_values_and_arrays() {
		let item = decode_json(serde_json::json!({
			"type": "Note",
			"to": "https://example.net/alice",
			"cc": ["https://example.net/bob", "https://example.net/carl"],
			"tag": [],
		})).expect("note");
		let note = item.as_record().expect("record").as_object().expect("object");
		assert_eq!(note.to, vec![Item::Iri(iri("https://example.net/alice"))]);
		assert_eq!(note.cc.len(), 2);
		assert!(note.tag.is_empty());
	}

	#[test]
	fn broken_fields_are_dropped() {
		let item = decode_json(serde_json::json!({
			"type": "Note",
			"id": "https://example.net/notes/1",
			"published": "yesterday",
			"duration": "five seconds",
			"mediaType": "html",
			"inReplyTo": 12,
			"attributedTo": "not a reference",
			"to": [true, "https://example.net/alice"],
			"sensitive": "yes",
		})).expect("lenient fields");
		let note = item.as_record().expect("record").as_object().expect("object");
		assert_eq!(note.id, Some(iri("https://example.net/notes/1")));
		assert!(note.published.is_none());
		assert!(note.duration.is_zero());
		assert!(note.media_type.is_none());
		assert!(note.in_reply_to.is_none());
		assert!(note.attributed_to.is_none());
		assert_eq!(note.to, vec![Item::Iri(iri("https://example.net/alice"))]);
	}

	#[test]
	fn nested_broken_records_are_dropped() {
		let item = decode_json(serde_json::json!({
			"type": "Create",
			"object": { "type": 7 },
		})).expect("activity");
		assert!(item.as_record().expect("record").as_activity().expect("activity").object.is_none());
	}

	#[test]
	fn public_shorthands_are_normalized() {
		let item = decode_json(serde_json::json!({
			"type": "Note",
			"to": ["as:Public", "Public", "https://example.net/alice"],
		})).expect("note");
		let note = item.as_record().expect("record").as_object().expect("object");
		assert_eq!(note.to[0], Item::Iri(iri(PUBLIC)));
		assert_eq!(note.to[1], Item::Iri(iri(PUBLIC)));

		let raw = Decoder::new()
			.with_public_normalization(false)
			.decode_value(&serde_json::json!({ "type": "Note", "to": "as:Public" }))
			.expect("note");
		assert!(raw.as_record().expect("record").as_object().expect("object").to.is_empty());
	}

	#[test]
	fn language_companions_are_merged() {
		let item = decode_json(serde_json::json!({
			"type": "Note",
			"content": "<p>hi</p>",
			"contentMap": { "en": "<p>hi</p>", "it": "<p>ciao</p>" },
		})).expect("note");
		let note = item.as_record().expect("record").as_object().expect("object");
		assert_eq!(note.content.len(), 3);
		assert_eq!(note.content.get(&LangRef::parse("it").expect("tag")), Some("<p>ciao</p>"));

		let item = Decoder::new()
			.with_language_maps(false)
			.decode_value(&serde_json::json!({ "type": "Note", "contentMap": { "en": "hi" } }))
			.expect("note");
		assert!(item.as_record().expect("record").as_object().expect("object").content.is_empty());
	}

	#[test]
	fn multiple_types_pick_a_known_one() {
		let item = decode_json(serde_json::json!({
			"type": ["schema:Thing", "Person"],
			"id": "https://example.net/users/alice",
			"inbox": "https://example.net/users/alice/inbox",
		})).expect("actor");
		assert_eq!(item.family(), Some(Family::Actor));
		assert_eq!(item.kind().map(|k| k.as_str()), Some("Person"));
	}

	#[test]
	fn actor_sub_records() {
		let item = decode_json(serde_json::json!({
			"@context": ["https://www.w3.org/ns/activitystreams", "https://w3id.org/security/v1"],
			"type": "Person",
			"id": "https://example.net/users/alice",
			"preferredUsername": "alice",
			"endpoints": { "sharedInbox": "https://example.net/inbox" },
			"publicKey": {
				"id": "https://example.net/users/alice#main-key",
				"owner": "https://example.net/users/alice",
				"publicKeyPem": "-----BEGIN PUBLIC KEY-----",
			},
			"manuallyApprovesFollowers": true,
		})).expect("actor");
		let actor = item.as_record().expect("record").as_actor().expect("actor");
		assert_eq!(actor.preferred_username.first(), Some("alice"));
		assert_eq!(
			actor.endpoints.as_ref().and_then(|e| e.shared_inbox.clone()),
			Some(iri("https://example.net/inbox"))
		);
		let key = actor.public_key.as_ref().expect("public key");
		assert_eq!(key.owner, Some(iri("https://example.net/users/alice")));
		assert_eq!(key.public_key_pem, "-----BEGIN PUBLIC KEY-----");
		#[cfg(feature = "activitypub-miscellaneous-terms")]
		assert_eq!(actor.manually_approves_followers, Some(true));
	}

	#[test]
	fn question_closed_forms() {
		let closed = |value: serde_json::Value| {
			let item = decode_json(serde_json::json!({ "type": "Question", "closed": value })).expect("question");
			item.as_record().expect("record").as_question().expect("question").closed.clone()
		};
		assert_eq!(closed(serde_json::json!(true)), Some(Closed::Flag(true)));
		assert!(matches!(closed(serde_json::json!("2024-01-01T00:00:00Z")), Some(Closed::At(_))));
		assert_eq!(
			closed(serde_json::json!("https://example.net/notes/1")),
			Some(Closed::Item(Item::Iri(iri("https://example.net/notes/1"))))
		);
	}

	#[test]
	fn links_keep_their_shape() {
		let item = decode_json(serde_json::json!({
			"type": "Mention",
			"href": "https://example.net/users/alice",
			"name": "@alice",
			"rel": "me",
			"hreflang": "en",
		})).expect("mention");
		assert!(item.is_link());
		let link = item.as_record().expect("record").as_link().expect("link");
		assert_eq!(link.rel, vec!["me".to_string()]);
		assert_eq!(link.href_lang.as_ref().map(|l| l.as_str()), Some("en"));
		assert_eq!(item.reference(), Some(&iri("https://example.net/users/alice")));
	}

	#[test]
	fn collections_read_their_members() {
		let item = decode_json(serde_json::json!({
			"type": "OrderedCollectionPage",
			"id": "https://example.net/outbox?page=2",
			"partOf": "https://example.net/outbox",
			"totalItems": 100,
			"startIndex": 20,
			"orderedItems": ["https://example.net/1", "https://example.net/2"],
		})).expect("page");
		let record = item.as_record().expect("record");
		let page = record.as_ordered_collection_page().expect("page");
		assert_eq!(page.part_of(), Some(&Item::Iri(iri("https://example.net/outbox"))));
		assert_eq!(page.start_index, Some(20));
		assert_eq!(page.ordered_items().len(), 2);
		assert_eq!(item.count().expect("countable"), 100);
	}
}
