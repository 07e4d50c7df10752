use std::collections::BTreeMap;

use crate::{Object, SerializeError};

/// namespace uri of the activitystreams vocabulary, as used for aliasing
pub const AS_VOCABULARY: &str = "https://www.w3.org/TR/activitystreams-vocabulary";
/// public json-ld context document for activitystreams
pub const AS_CONTEXT: &str = "https://www.w3.org/ns/activitystreams";

/// namespace uri -> alias under which a document imported it
pub type AliasMap = BTreeMap<String, String>;
/// namespace uri -> alias, as required to serialize something
pub type Context = BTreeMap<String, String>;

/// alias of `namespace`, empty when it is not aliased
pub fn alias_of<'a>(aliases: &'a AliasMap, namespace: &str) -> &'a str {
	aliases.get(namespace).map(String::as_str).unwrap_or_default()
}

pub fn qualify(name: &str, alias: &str) -> String {
	if alias.is_empty() {
		name.to_string()
	} else {
		format!("{alias}:{name}")
	}
}

/// removes the `alias:` prefix from `name`, if it has one
pub fn strip_alias<'a>(name: &'a str, alias: &str) -> &'a str {
	if alias.is_empty() {
		return name;
	}
	name.strip_prefix(alias)
		.and_then(|x| x.strip_prefix(':'))
		.unwrap_or(name)
}

/// merges `from` into `into`, keeping whatever `into` already had
pub fn merge(into: &mut Context, from: Context) {
	for (k, v) in from {
		into.entry(k).or_insert(v);
	}
}

fn namespace(uri: &str) -> &str {
	match uri.trim_end_matches('#') {
		"https://www.w3.org/ns/activitystreams" | "http://www.w3.org/ns/activitystreams" => AS_VOCABULARY,
		_ => uri,
	}
}

fn is_namespace(uri: &str) -> bool {
	url::Url::parse(uri).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Reads the alias map out of a `@context` value. Plain strings import a namespace without alias,
/// maps alias every namespace they bind and arrays are the union of their entries, first one
/// winning.
pub fn alias_map(context: &serde_json::Value) -> AliasMap {
	let mut out = AliasMap::new();
	match context {
		serde_json::Value::Array(arr) => {
			for entry in arr {
				merge(&mut out, alias_map(entry));
			}
		},
		serde_json::Value::String(uri) => {
			if is_namespace(uri) {
				out.insert(namespace(uri).to_string(), String::new());
			}
		},
		serde_json::Value::Object(map) => {
			for (alias, uri) in map {
				let Some(uri) = uri.as_str() else { continue };
				// term definitions like `"sensitive": "as:sensitive"` are not namespaces
				if !is_namespace(uri) {
					continue;
				}
				out.entry(namespace(uri).to_string()).or_insert_with(|| alias.clone());
			}
		},
		_ => {},
	}
	out
}

/// Builds a `@context` value: namespaces without alias are listed by uri, aliased ones are
/// collected in a trailing map.
pub fn context_value(ctx: &Context) -> serde_json::Value {
	let mut uris = Vec::new();
	let mut aliases = serde_json::Map::new();
	for (namespace, alias) in ctx {
		let uri = if namespace == AS_VOCABULARY { AS_CONTEXT } else { namespace.as_str() };
		if alias.is_empty() {
			uris.push(serde_json::Value::String(uri.to_string()));
		} else {
			aliases.insert(alias.clone(), serde_json::Value::String(uri.to_string()));
		}
	}
	if !aliases.is_empty() {
		uris.push(serde_json::Value::Object(aliases));
	}
	match uris.len() {
		1 => uris.swap_remove(0),
		_ => serde_json::Value::Array(uris),
	}
}

/// sets `@context` on a json value, which must be an object
pub fn with_context(mut value: serde_json::Value, ctx: &Context) -> serde_json::Value {
	if let Some(obj) = value.as_object_mut() {
		obj.insert("@context".to_string(), context_value(ctx));
	} else {
		tracing::warn!("cannot add @context to json value different than object");
	}
	value
}

fn strip_nested_context(value: &mut serde_json::Value) {
	match value {
		serde_json::Value::Object(map) => {
			map.remove("@context");
			for v in map.values_mut() {
				strip_nested_context(v);
			}
		},
		serde_json::Value::Array(arr) => {
			for v in arr.iter_mut() {
				strip_nested_context(v);
			}
		},
		_ => {},
	}
}

pub trait LD {
	/// serializes as a top level json-ld document, with its own `@context`
	fn ld_serialize(&self) -> Result<serde_json::Value, SerializeError>;
}

impl LD for Object {
	fn ld_serialize(&self) -> Result<serde_json::Value, SerializeError> {
		let mut out = self.serialize()?;
		for v in out.values_mut() {
			strip_nested_context(v);
		}
		Ok(with_context(serde_json::Value::Object(out), &self.jsonld_context()))
	}
}
