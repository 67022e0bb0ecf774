use crate::Family;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("malformed input: {0}")]
	MalformedInput(String),

	#[error("unrecognized type '{0}'")]
	UnrecognizedType(String),

	#[error("wrong shape: expected {expected:?}, got {found:?}")]
	ShapeMismatch {
		expected: Family,
		found: Family,
	},

	#[error("collection cannot hold more items")]
	Capacity,
}

impl Error {
	pub(crate) fn mismatch(expected: Family, found: Family) -> Self {
		Error::ShapeMismatch { expected, found }
	}
}

impl From<serde_json::Error> for Error {
	fn from(value: serde_json::Error) -> Self {
		Error::MalformedInput(value.to_string())
	}
}

pub type Result<T> = std::result::Result<T, Error>;
