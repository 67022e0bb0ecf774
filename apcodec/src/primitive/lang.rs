use crate::{Error, Result};

/// BCP47-style language tag, or the "no language" sentinel
///
/// tags compare case-insensitively but keep the spelling they were created with
#[derive(Debug, Clone, Default)]
pub struct LangRef(String);

impl LangRef {
	fn folded(&self) -> impl Iterator<Item = u8> + '_ {
		self.0.bytes().map(|b| b.to_ascii_lowercase())
	}
}

impl PartialEq for LangRef {
	fn eq(&self, other: &Self) -> bool {
		self.0.eq_ignore_ascii_case(&other.0)
	}
}

impl Eq for LangRef {}

impl std::hash::Hash for LangRef {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		for b in self.folded() {
			state.write_u8(b);
		}
		state.write_u8(0xff);
	}
}

impl PartialOrd for LangRef {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for LangRef {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.folded().cmp(other.folded())
	}
}

impl LangRef {
	/// key used for the sentinel inside a language map
	pub const NONE_KEY: &'static str = "@none";

	pub fn none() -> Self {
		LangRef(String::new())
	}

	pub fn is_none(&self) -> bool {
		self.0.is_empty()
	}

	pub fn parse(value: &str) -> Result<Self> {
		if value.is_empty() || value == Self::NONE_KEY || value == "-" {
			return Ok(LangRef::none());
		}
		let mut subtags = value.split('-');
		let primary = subtags.next().unwrap_or_default();
		let primary_ok = (1..=8).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic());
		let rest_ok = subtags.all(|s| (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric()));
		if primary_ok && rest_ok {
			Ok(LangRef(value.to_string()))
		} else {
			Err(Error::MalformedInput(format!("'{value}' is not a language tag")))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// how this tag is spelled as a language map key
	pub fn key(&self) -> &str {
		if self.is_none() { Self::NONE_KEY } else { &self.0 }
	}
}

impl std::str::FromStr for LangRef {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		LangRef::parse(s)
	}
}

impl std::fmt::Display for LangRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.key())
	}
}

/// natural language value: ordered (language, text) pairs, at most one per language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangMap(Vec<(LangRef, String)>);

impl LangMap {
	pub fn new() -> Self {
		LangMap(Vec::new())
	}

	/// single text without language
	pub fn text(value: impl Into<String>) -> Self {
		LangMap(vec![(LangRef::none(), value.into())])
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn get(&self, lang: &LangRef) -> Option<&str> {
		self.0
			.iter()
			.find(|(l, _)| l == lang)
			.map(|(_, t)| t.as_str())
	}

	/// text without language if present, otherwise the first one
	pub fn first(&self) -> Option<&str> {
		self.get(&LangRef::none())
			.or_else(|| self.0.first().map(|(_, t)| t.as_str()))
	}

	/// replaces the text for `lang`, or appends it
	pub fn set(&mut self, lang: LangRef, value: impl Into<String>) {
		let value = value.into();
		match self.0.iter_mut().find(|(l, _)| *l == lang) {
			Some((_, t)) => *t = value,
			None => self.0.push((lang, value)),
		}
	}

	pub fn with(mut self, lang: LangRef, value: impl Into<String>) -> Self {
		self.set(lang, value);
		self
	}

	pub fn remove(&mut self, lang: &LangRef) -> Option<String> {
		let pos = self.0.iter().position(|(l, _)| l == lang)?;
		Some(self.0.remove(pos).1)
	}

	pub fn merge(&mut self, other: LangMap) {
		for (lang, text) in other.0 {
			self.set(lang, text);
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = (&LangRef, &str)> {
		self.0.iter().map(|(l, t)| (l, t.as_str()))
	}

	/// bare string for a single untagged text, map keyed by language otherwise
	pub fn to_json(&self) -> Option<serde_json::Value> {
		match self.0.as_slice() {
			[] => None,
			[(lang, text)] if lang.is_none() => Some(serde_json::Value::String(text.clone())),
			pairs => Some(serde_json::Value::Object(
				pairs
					.iter()
					.map(|(l, t)| (l.key().to_string(), serde_json::Value::String(t.clone())))
					.collect()
			)),
		}
	}

	/// reads either form written by [`LangMap::to_json`], skipping unusable pairs
	pub fn from_json(value: &serde_json::Value) -> Option<Self> {
		match value {
			serde_json::Value::String(s) => Some(LangMap::text(s.as_str())),
			serde_json::Value::Object(map) => {
				let mut out = LangMap::new();
				for (key, text) in map {
					let Some(text) = text.as_str() else {
						tracing::debug!("skipping non-string text for language '{key}'");
						continue;
					};
					match LangRef::parse(key) {
						Ok(lang) => out.set(lang, text),
						Err(e) => tracing::debug!("skipping language map entry: {e}"),
					}
				}
				Some(out)
			},
			_ => None,
		}
	}
}

impl From<&str> for LangMap {
	fn from(value: &str) -> Self {
		LangMap::text(value)
	}
}

impl FromIterator<(LangRef, String)> for LangMap {
	fn from_iter<T: IntoIterator<Item = (LangRef, String)>>(iter: T) -> Self {
		let mut out = LangMap::new();
		for (lang, text) in iter {
			out.set(lang, text);
		}
		out
	}
}
