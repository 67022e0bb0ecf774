use std::collections::HashMap;

use crate::{BaseType, Error, Family, Record, Result, TypeTag};

/// maps type tags onto record shapes, handed to the decoder
pub trait TypeRegistry : Send + Sync {
	/// shape built for a non-empty `tag`, if this registry knows it
	fn family(&self, tag: &str) -> Option<Family>;

	/// blank record for `tag`; the empty tag is a generic Object
	fn resolve(&self, tag: &str) -> Result<Record> {
		if tag.is_empty() {
			return Ok(Record::empty(Family::Object, TypeTag::default()));
		}
		match self.family(tag) {
			Some(family) => Ok(Record::empty(family, TypeTag::from(tag))),
			None => Err(Error::UnrecognizedType(tag.to_string())),
		}
	}
}

/// the standard ActivityStreams vocabulary
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityStreams;

impl TypeRegistry for ActivityStreams {
	fn family(&self, tag: &str) -> Option<Family> {
		BaseType::try_from(tag).ok().map(|t| t.family())
	}
}

/// another registry plus extra terms, which take precedence
#[derive(Debug, Clone, Default)]
pub struct Extended<R = ActivityStreams> {
	inner: R,
	terms: HashMap<String, Family>,
}

impl<R: TypeRegistry> Extended<R> {
	pub fn new(inner: R) -> Self {
		Extended { inner, terms: HashMap::new() }
	}

	pub fn with_term(mut self, tag: impl Into<String>, family: Family) -> Self {
		self.terms.insert(tag.into(), family);
		self
	}

	pub fn terms(&self) -> impl Iterator<Item = (&str, Family)> {
		self.terms.iter().map(|(t, f)| (t.as_str(), *f))
	}
}

impl<R: TypeRegistry> TypeRegistry for Extended<R> {
	fn family(&self, tag: &str) -> Option<Family> {
		self.terms
			.get(tag)
			.copied()
			.or_else(|| self.inner.family(tag))
	}
}

impl<R: TypeRegistry + ?Sized> TypeRegistry for std::sync::Arc<R> {
	fn family(&self, tag: &str) -> Option<Family> {
		(**self).family(tag)
	}
}
