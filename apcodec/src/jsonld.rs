use serde_json::{Map, Value};

pub const ACTIVITYSTREAMS_CONTEXT : &str = "https://www.w3.org/ns/activitystreams";
pub const SECURITY_CONTEXT : &str = "https://w3id.org/security/v1";

pub trait LD {
	fn ld_context(self) -> Self;
}

impl LD for Value {
	fn ld_context(self) -> Self {
		let obj = match self {
			Value::Object(obj) => obj,
			other => {
				tracing::warn!("cannot add @context to json value different than object");
				return other;
			},
		};
		let mut ctx = vec![Value::String(ACTIVITYSTREAMS_CONTEXT.into())];
		if obj.contains_key("publicKey") {
			ctx.push(Value::String(SECURITY_CONTEXT.into()));
		}
		#[cfg(feature = "activitypub-miscellaneous-terms")]
		{
			let mut terms = Map::new();
			terms.insert("sensitive".to_string(), Value::String("as:sensitive".into()));
			terms.insert("Hashtag".to_string(), Value::String("as:Hashtag".into()));
			terms.insert("manuallyApprovesFollowers".to_string(), Value::String("as:manuallyApprovesFollowers".into()));
			ctx.push(Value::Object(terms));
		}

		let mut out = Map::new();
		out.insert("@context".to_string(), Value::Array(ctx));
		for (k, v) in obj {
			if k != "@context" {
				out.insert(k, v);
			}
		}
		Value::Object(out)
	}
}

/// adds an `@context` in front of a document root
pub fn with_context(value: Value) -> Value {
	value.ld_context()
}
