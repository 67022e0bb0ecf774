mod iri;
mod lang;
mod mime;
mod time;

pub use iri::{Iri, PUBLIC};
pub use lang::{LangMap, LangRef};
pub use mime::MimeType;
pub use time::{format_timestamp, parse_timestamp, Duration};
