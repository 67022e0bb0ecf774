use crate::{Error, Result};

/// media type like `text/html` or `image/png; charset=binary`, parameters are kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MimeType(String);

impl MimeType {
	pub fn parse(value: &str) -> Result<Self> {
		let value = value.trim();
		let essence = value.split(';').next().unwrap_or_default().trim();
		match essence.split_once('/') {
			Some((t, s)) if is_token(t) && is_token(s) => Ok(MimeType(value.to_string())),
			_ => Err(Error::MalformedInput(format!("'{value}' is not a media type"))),
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// `type/subtype` without parameters
	pub fn essence(&self) -> &str {
		self.0.split(';').next().unwrap_or_default().trim()
	}

	pub fn top_level(&self) -> &str {
		self.essence().split('/').next().unwrap_or_default()
	}

	pub fn subtype(&self) -> &str {
		self.essence().split('/').nth(1).unwrap_or_default()
	}
}

fn is_token(s: &str) -> bool {
	!s.is_empty()
		&& s.chars().all(|c| c.is_ascii_alphanumeric() || "!#$&-^_.+".contains(c))
}

impl std::str::FromStr for MimeType {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		MimeType::parse(s)
	}
}

impl std::fmt::Display for MimeType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod test {
	use super::MimeType;

	#[test]
	fn media_types_split_into_parts() {
		let m = MimeType::parse("text/html; charset=utf-8").expect("valid media type");
		assert_eq!(m.essence(), "text/html");
		assert_eq!(m.top_level(), "text");
		assert_eq!(m.subtype(), "html");
		assert_eq!(m.as_str(), "text/html; charset=utf-8");
	}

	#[test]
	fn garbage_is_not_a_media_type() {
		assert!(MimeType::parse("html").is_err());
		assert!(MimeType::parse("text/").is_err());
		assert!(MimeType::parse("te xt/html").is_err());
	}
}
