use std::collections::HashMap;

use crate::{jsonld::AliasMap, DeserializeError, Object, TypeDef, TypeKind};

/// how many embedded objects may be nested inside each other before giving up
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Looks up object deserializers by vocabulary type.
///
/// Properties only depend on this to attempt typed deserialization of embedded maps; which kinds
/// exist and how they are dispatched is up to the implementor.
pub trait Resolver {
	fn definition(&self, kind: TypeKind) -> Option<&'static TypeDef>;

	fn max_depth(&self) -> usize { DEFAULT_MAX_DEPTH }

	fn deserialize(
		&self,
		kind: TypeKind,
		map: &serde_json::Map<String, serde_json::Value>,
		scope: Scope<'_>,
	) -> Result<Object, DeserializeError> {
		let def = self.definition(kind).ok_or(DeserializeError::Unregistered(kind))?;
		Object::deserialize(def, map, scope)
	}
}

/// Everything recursive deserialization needs to carry along: the alias map of the document
/// being read, the resolver for embedded objects and the current nesting depth.
#[derive(Clone, Copy)]
pub struct Scope<'a> {
	aliases: &'a AliasMap,
	resolver: &'a dyn Resolver,
	depth: usize,
}

impl<'a> Scope<'a> {
	pub fn new(aliases: &'a AliasMap, resolver: &'a dyn Resolver) -> Self {
		Scope { aliases, resolver, depth: 0 }
	}

	pub fn aliases(&self) -> &'a AliasMap {
		self.aliases
	}

	pub fn resolver(&self) -> &'a dyn Resolver {
		self.resolver
	}

	pub fn depth(&self) -> usize {
		self.depth
	}

	/// alias of the activitystreams namespace, empty if it was not imported under one
	pub fn alias(&self) -> &'a str {
		crate::jsonld::alias_of(self.aliases, crate::jsonld::AS_VOCABULARY)
	}

	pub(crate) fn nested(self) -> Self {
		Scope { depth: self.depth + 1, ..self }
	}
}

/// Maps vocabulary types to their definitions. Build one at startup and pass it around by
/// reference.
#[derive(Debug, Clone)]
pub struct Registry {
	types: HashMap<TypeKind, &'static TypeDef>,
	max_depth: usize,
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

impl Registry {
	/// registry with every builtin activitystreams type
	pub fn new() -> Self {
		let mut registry = Self::empty();
		for def in crate::vocabulary::types::ALL {
			registry.register(*def);
		}
		registry
	}

	pub fn empty() -> Self {
		Registry { types: HashMap::new(), max_depth: DEFAULT_MAX_DEPTH }
	}

	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	/// adds a type definition, returning the one previously registered for the same kind
	pub fn register(&mut self, def: &'static TypeDef) -> Option<&'static TypeDef> {
		self.types.insert(def.kind, def)
	}

	pub fn is_registered(&self, kind: TypeKind) -> bool {
		self.types.contains_key(&kind)
	}

	/// Deserializes a whole document: aliases are read from its `@context`, and the first of its
	/// types known to this registry decides how it is read.
	pub fn resolve(&self, value: &serde_json::Value) -> Result<Object, DeserializeError> {
		let map = value.as_object().ok_or(DeserializeError::NotAnObject)?;
		let aliases = map
			.get("@context")
			.map(crate::jsonld::alias_map)
			.unwrap_or_default();
		self.resolve_with(map, &aliases)
	}

	/// same as [Registry::resolve], but with an explicit alias map
	pub fn resolve_with(
		&self,
		map: &serde_json::Map<String, serde_json::Value>,
		aliases: &AliasMap,
	) -> Result<Object, DeserializeError> {
		let scope = Scope::new(aliases, self);
		let prefix = scope.alias();
		let names: Vec<&str> = match map.get("type") {
			None => return Err(DeserializeError::MissingType),
			Some(serde_json::Value::String(x)) => vec![x.as_str()],
			Some(serde_json::Value::Array(arr)) => arr.iter().filter_map(|x| x.as_str()).collect(),
			Some(_) => return Err(DeserializeError::UnrecognizedType),
		};

		for name in names {
			let name = crate::jsonld::strip_alias(name, prefix);
			let Ok(kind) = TypeKind::try_from(name) else { continue };
			if self.is_registered(kind) {
				tracing::debug!("resolving document as {kind}");
				return self.deserialize(kind, map, scope);
			}
		}

		Err(DeserializeError::NoMatchingType)
	}
}

impl Resolver for Registry {
	fn definition(&self, kind: TypeKind) -> Option<&'static TypeDef> {
		self.types.get(&kind).copied()
	}

	fn max_depth(&self) -> usize {
		self.max_depth
	}
}
