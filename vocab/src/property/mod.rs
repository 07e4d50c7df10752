mod functional;
pub use functional::{FunctionalProperty, Slot};

mod non_functional;
pub use non_functional::NonFunctionalProperty;

use crate::{jsonld::Context, DeserializeError, Kind, Scope, SerializeError};

/// Static description of a vocabulary property.
///
/// Every property behaves the same, what changes is its name and which kinds it accepts: their
/// order decides both deserialization priority and kind index.
pub struct PropertyDef {
	pub name: &'static str,
	/// functional properties hold at most one value, others hold a list
	pub functional: bool,
	pub kinds: &'static [Kind],
	/// accepts a language map under the `<name>Map` companion key
	pub lang_map: bool,
	/// json-ld keywords (`id`, `type`) are never alias-qualified
	pub keyword: bool,
}

impl PropertyDef {
	pub const fn functional(name: &'static str, kinds: &'static [Kind]) -> Self {
		PropertyDef { name, functional: true, kinds, lang_map: false, keyword: false }
	}

	pub const fn non_functional(name: &'static str, kinds: &'static [Kind]) -> Self {
		PropertyDef { name, functional: false, kinds, lang_map: false, keyword: false }
	}

	pub const fn with_lang_map(self) -> Self {
		PropertyDef { lang_map: true, ..self }
	}

	pub const fn keyword(self) -> Self {
		PropertyDef { keyword: true, ..self }
	}

	/// key this property is found under, given the namespace alias
	pub fn key(&self, alias: &str) -> String {
		if self.keyword {
			self.name.to_string()
		} else {
			crate::jsonld::qualify(self.name, alias)
		}
	}

	pub fn map_key(&self, alias: &str) -> String {
		format!("{}Map", self.key(alias))
	}

	pub fn position(&self, kind: Kind) -> Option<usize> {
		self.kinds.iter().position(|k| *k == kind)
	}

	pub fn accepts(&self, kind: Kind) -> bool {
		self.position(kind).is_some()
	}

	/// key this property reads from `map`, falling back to the language map if allowed
	pub fn lookup_key(&self, map: &serde_json::Map<String, serde_json::Value>, alias: &str) -> Option<String> {
		let key = self.key(alias);
		if map.contains_key(&key) {
			return Some(key);
		}
		if self.lang_map {
			let key = self.map_key(alias);
			if map.contains_key(&key) {
				return Some(key);
			}
		}
		None
	}

	pub(crate) fn lookup<'m>(
		&self,
		map: &'m serde_json::Map<String, serde_json::Value>,
		alias: &str,
	) -> Option<&'m serde_json::Value> {
		map.get(&self.lookup_key(map, alias)?)
	}
}

impl PartialEq for PropertyDef {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
	}
}

impl std::fmt::Debug for PropertyDef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "PropertyDef({})", self.name)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum Property {
	Functional(FunctionalProperty),
	NonFunctional(NonFunctionalProperty),
}

impl From<FunctionalProperty> for Property {
	fn from(value: FunctionalProperty) -> Self {
		Property::Functional(value)
	}
}

impl From<NonFunctionalProperty> for Property {
	fn from(value: NonFunctionalProperty) -> Self {
		Property::NonFunctional(value)
	}
}

impl Property {
	/// empty property of the right shape for `def`
	pub fn new(def: &'static PropertyDef) -> Self {
		if def.functional {
			Property::Functional(FunctionalProperty::new(def))
		} else {
			Property::NonFunctional(NonFunctionalProperty::new(def))
		}
	}

	pub fn deserialize(
		def: &'static PropertyDef,
		map: &serde_json::Map<String, serde_json::Value>,
		scope: Scope<'_>,
	) -> Result<Option<Self>, DeserializeError> {
		if def.functional {
			Ok(FunctionalProperty::deserialize(def, map, scope)?.map(Property::Functional))
		} else {
			Ok(NonFunctionalProperty::deserialize(def, map, scope)?.map(Property::NonFunctional))
		}
	}

	pub fn def(&self) -> &'static PropertyDef {
		match self {
			Property::Functional(x) => x.def(),
			Property::NonFunctional(x) => x.def(),
		}
	}

	pub fn name(&self) -> String {
		match self {
			Property::Functional(x) => x.name(),
			Property::NonFunctional(x) => x.name(),
		}
	}

	pub fn alias(&self) -> &str {
		match self {
			Property::Functional(x) => x.alias(),
			Property::NonFunctional(x) => x.alias(),
		}
	}

	pub(crate) fn set_alias(&mut self, alias: &str) {
		match self {
			Property::Functional(x) => x.set_alias(alias),
			Property::NonFunctional(x) => x.set_alias(alias),
		}
	}

	pub fn serialize(&self) -> Result<Option<serde_json::Value>, SerializeError> {
		match self {
			Property::Functional(x) => x.serialize(),
			Property::NonFunctional(x) => x.serialize(),
		}
	}

	pub fn less_than(&self, other: &Self) -> bool {
		match (self, other) {
			(Property::Functional(a), Property::Functional(b)) => a.less_than(b),
			(Property::NonFunctional(a), Property::NonFunctional(b)) => a.less_than(b),
			_ => false,
		}
	}

	pub fn jsonld_context(&self) -> Context {
		match self {
			Property::Functional(x) => x.jsonld_context(),
			Property::NonFunctional(x) => x.jsonld_context(),
		}
	}

	pub fn as_functional(&self) -> Option<&FunctionalProperty> {
		match self {
			Property::Functional(x) => Some(x),
			Property::NonFunctional(_) => None,
		}
	}

	pub fn as_functional_mut(&mut self) -> Option<&mut FunctionalProperty> {
		match self {
			Property::Functional(x) => Some(x),
			Property::NonFunctional(_) => None,
		}
	}

	pub fn as_non_functional(&self) -> Option<&NonFunctionalProperty> {
		match self {
			Property::NonFunctional(x) => Some(x),
			Property::Functional(_) => None,
		}
	}

	pub fn as_non_functional_mut(&mut self) -> Option<&mut NonFunctionalProperty> {
		match self {
			Property::NonFunctional(x) => Some(x),
			Property::Functional(_) => None,
		}
	}
}
