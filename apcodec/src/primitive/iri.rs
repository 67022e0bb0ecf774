use crate::{Error, Result};

/// the special collection addressing everyone
pub const PUBLIC : &str = "https://www.w3.org/ns/activitystreams#Public";

/// absolute reference to a remote or local entity: scheme and host are always present
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(String);

impl Iri {
	pub fn parse(value: &str) -> Result<Self> {
		match authority(value) {
			Some(_) => Ok(Iri(value.to_string())),
			None => Err(Error::MalformedInput(format!("'{value}' is not an absolute IRI"))),
		}
	}

	pub fn public() -> Self {
		Iri(PUBLIC.to_string())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}

	pub fn scheme(&self) -> &str {
		self.0.split_once(':').map(|(s, _)| s).unwrap_or_default()
	}

	pub fn host(&self) -> &str {
		authority(&self.0).map(|(_, host)| host).unwrap_or_default()
	}

	pub fn is_public(&self) -> bool {
		self.0 == PUBLIC
	}
}

// (scheme, host)
fn authority(value: &str) -> Option<(&str, &str)> {
	if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
		return None;
	}
	let (scheme, rest) = value.split_once(':')?;
	let mut chars = scheme.chars();
	if !chars.next()?.is_ascii_alphabetic() {
		return None;
	}
	if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
		return None;
	}
	let rest = rest.strip_prefix("//")?;
	let authority = rest
		.split(['/', '?', '#'])
		.next()
		.unwrap_or_default();
	let hostport = authority.rsplit_once('@').map(|(_, h)| h).unwrap_or(authority);
	let host = if hostport.starts_with('[') {
		&hostport[..hostport.find(']')? + 1]
	} else {
		hostport.split(':').next().unwrap_or_default()
	};
	if host.is_empty() {
		return None;
	}
	Some((scheme, host))
}

impl std::str::FromStr for Iri {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Iri::parse(s)
	}
}

impl TryFrom<&str> for Iri {
	type Error = Error;

	fn try_from(value: &str) -> Result<Self> {
		Iri::parse(value)
	}
}

impl TryFrom<String> for Iri {
	type Error = Error;

	fn try_from(value: String) -> Result<Self> {
		match authority(&value) {
			Some(_) => Ok(Iri(value)),
			None => Err(Error::MalformedInput(format!("'{value}' is not an absolute IRI"))),
		}
	}
}

impl std::fmt::Display for Iri {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Iri {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for Iri {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for Iri {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

#[cfg(test)]
mod test {
	use super::Iri;

	#[test]
	fn absolute_iris_parse() {
		let iri = Iri::parse("https://example.net/users/alice?page=1#main").expect("valid iri");
		assert_eq!(iri.scheme(), "https");
		assert_eq!(iri.host(), "example.net");

		let iri = Iri::parse("http://user@[::1]:8080/x").expect("valid iri");
		assert_eq!(iri.host(), "[::1]");

		let iri = Iri::parse("https://bücher.example/ä").expect("valid iri");
		assert_eq!(iri.host(), "bücher.example");
	}

	#[test]
	fn relative_or_hostless_strings_are_not_iris() {
		assert!(Iri::parse("/users/alice").is_err());
		assert!(Iri::parse("as:Public").is_err());
		assert!(Iri::parse("hello world").is_err());
		assert!(Iri::parse("https://").is_err());
		assert!(Iri::parse("https:///path").is_err());
		assert!(Iri::parse("1http://example.net").is_err());
		assert!(Iri::parse("").is_err());
	}
}
