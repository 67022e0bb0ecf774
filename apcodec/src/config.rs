use std::collections::BTreeMap;

use crate::{Family, TypePolicy};

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub decode: DecodeConfig,

	#[serde(default)]
	pub encode: EncodeConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct DecodeConfig {
	/// what to do with type tags the registry doesn't know
	#[serde(default)]
	pub types: TypePolicy,

	/// read "as:Public" and "Public" as the full public collection IRI
	#[serde_inline_default(true)]
	pub normalize_public: bool,

	/// merge nameMap, contentMap and summaryMap into their plain fields
	#[serde_inline_default(true)]
	pub language_maps: bool,

	/// extra vocabulary, type tag to record shape
	#[serde(default)]
	pub terms: BTreeMap<String, Family>,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct EncodeConfig {
	/// put an "@context" on root documents
	#[serde_inline_default(false)]
	pub ld_context: bool,

	#[serde_inline_default(false)]
	pub pretty: bool,
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn empty_config_uses_defaults() {
		let cfg : Config = toml::from_str("").expect("empty config parses");
		assert_eq!(cfg.decode.types, TypePolicy::Strict);
		assert!(cfg.decode.normalize_public);
		assert!(cfg.decode.language_maps);
		assert!(cfg.decode.terms.is_empty());
		assert!(!cfg.encode.ld_context);
		assert!(!cfg.encode.pretty);
	}

	#[test]
	fn partial_sections_keep_other_defaults() {
		let cfg : Config = toml::from_str(r#"
			[decode]
			types = "lenient"

			[decode.terms]
			Emoji = "Object"

			[encode]
			pretty = true
		"#).expect("config parses");
		assert_eq!(cfg.decode.types, TypePolicy::Lenient);
		assert!(cfg.decode.normalize_public);
		assert_eq!(cfg.decode.terms.get("Emoji"), Some(&Family::Object));
		assert!(cfg.encode.pretty);
		assert!(!cfg.encode.ld_context);
	}

	#[test]
	fn missing_file_falls_back_to_defaults() {
		let cfg = Config::load(Some(&std::path::PathBuf::from("/nonexistent/apcodec.toml")));
		assert_eq!(cfg.decode.types, TypePolicy::Strict);
	}

	#[test]
	fn default_config_serializes() {
		let text = toml::to_string(&Config::default()).expect("config serializes");
		assert!(text.contains("types = \"strict\""));
	}
}
