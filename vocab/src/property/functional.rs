use crate::{
	jsonld::{self, Context},
	macros::{literal_accessors, type_accessors},
	DeserializeError, Iri, Kind, Literal, Object, PropertyDef, Scope, SerializeError, SetTypeError, TypeKind,
};

/// What a single property value holds. Typed variants carry the position of their kind inside
/// the property's declared kinds.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Slot {
	#[default]
	Empty,
	Object(usize, Box<Object>),
	Literal(usize, Literal),
	Iri(Iri),
	Unknown(serde_json::Value),
}

impl Slot {
	/// Reads one value for `def`: schemed strings become IRIs, maps are offered to every declared
	/// object kind in order, then every declared literal kind gets a try. Whatever is left is kept
	/// verbatim as unknown, so this only fails for structural errors inside embedded objects.
	pub(crate) fn read(
		def: &'static PropertyDef,
		value: &serde_json::Value,
		scope: Scope<'_>,
	) -> Result<Slot, DeserializeError> {
		if let Some(iri) = value.as_str().and_then(Iri::parse) {
			return Ok(Slot::Iri(iri));
		}

		if let Some(map) = value.as_object() {
			for (index, kind) in def.kinds.iter().enumerate() {
				let Kind::Type(kind) = kind else { continue };
				match scope.resolver().deserialize(*kind, map, scope.nested()) {
					Ok(obj) => return Ok(Slot::Object(index, Box::new(obj))),
					Err(e) if e.is_mismatch() => continue,
					Err(e) => return Err(e),
				}
			}
		}

		for (index, kind) in def.kinds.iter().enumerate() {
			let Kind::Value(kind) = kind else { continue };
			if let Some(literal) = Literal::deserialize(*kind, value) {
				return Ok(Slot::Literal(index, literal));
			}
		}

		tracing::debug!("keeping unrecognized value of '{}' as unknown", def.name);
		Ok(Slot::Unknown(value.clone()))
	}
}

/// A property holding at most one value, among the kinds its definition allows, an IRI, or
/// an opaque unknown value. Setting any value replaces whatever was there before.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionalProperty {
	def: &'static PropertyDef,
	alias: String,
	slot: Slot,
}

impl FunctionalProperty {
	pub fn new(def: &'static PropertyDef) -> Self {
		FunctionalProperty { def, alias: String::new(), slot: Slot::Empty }
	}

	/// Reads this property out of `map`. Returns `Ok(None)` when the key is not there at all,
	/// which is different from being there but unrecognized.
	pub fn deserialize(
		def: &'static PropertyDef,
		map: &serde_json::Map<String, serde_json::Value>,
		scope: Scope<'_>,
	) -> Result<Option<Self>, DeserializeError> {
		match def.lookup(map, scope.alias()) {
			Some(value) => Ok(Some(Self::from_value(def, value, scope)?)),
			None => Ok(None),
		}
	}

	/// reads a bare value, already extracted from its parent map
	pub fn from_value(
		def: &'static PropertyDef,
		value: &serde_json::Value,
		scope: Scope<'_>,
	) -> Result<Self, DeserializeError> {
		Ok(FunctionalProperty {
			def,
			alias: scope.alias().to_string(),
			slot: Slot::read(def, value, scope)?,
		})
	}

	pub fn def(&self) -> &'static PropertyDef {
		self.def
	}

	pub fn alias(&self) -> &str {
		&self.alias
	}

	pub(crate) fn set_alias(&mut self, alias: &str) {
		self.alias = alias.to_string();
	}

	pub fn slot(&self) -> &Slot {
		&self.slot
	}

	/// key this property serializes under: language maps go to their companion key
	pub fn name(&self) -> String {
		if self.def.lang_map && matches!(self.slot, Slot::Literal(_, Literal::LangString(_))) {
			self.def.map_key(&self.alias)
		} else {
			self.def.key(&self.alias)
		}
	}

	pub fn clear(&mut self) {
		self.slot = Slot::Empty;
	}

	pub fn has_any(&self) -> bool {
		matches!(self.slot, Slot::Object(..) | Slot::Literal(..) | Slot::Iri(_))
	}

	pub fn is_kind(&self, kind: Kind) -> bool {
		match self.slot {
			Slot::Object(index, _) | Slot::Literal(index, _) => self.def.kinds.get(index) == Some(&kind),
			_ => false,
		}
	}

	pub fn is_iri(&self) -> bool {
		matches!(self.slot, Slot::Iri(_))
	}

	pub fn is_unknown(&self) -> bool {
		matches!(self.slot, Slot::Unknown(_))
	}

	/// embedded object, whatever its kind
	pub fn get_type(&self) -> Option<&Object> {
		match &self.slot {
			Slot::Object(_, x) => Some(x),
			_ => None,
		}
	}

	pub fn get_kind(&self, kind: TypeKind) -> Option<&Object> {
		self.get_type().filter(|x| x.kind() == kind)
	}

	pub fn get_literal(&self) -> Option<&Literal> {
		match &self.slot {
			Slot::Literal(_, x) => Some(x),
			_ => None,
		}
	}

	pub fn get_iri(&self) -> Option<&Iri> {
		match &self.slot {
			Slot::Iri(x) => Some(x),
			_ => None,
		}
	}

	pub fn get_unknown(&self) -> Option<&serde_json::Value> {
		match &self.slot {
			Slot::Unknown(x) => Some(x),
			_ => None,
		}
	}

	/// sets an embedded object, failing if this property doesn't accept its kind
	pub fn set_type(&mut self, value: Object) -> Result<(), SetTypeError> {
		let kind = Kind::Type(value.kind());
		let index = self.def.position(kind)
			.ok_or(SetTypeError::IllegalKind { property: self.def.name, kind })?;
		self.slot = Slot::Object(index, Box::new(value));
		Ok(())
	}

	pub fn set_literal(&mut self, value: Literal) -> Result<(), SetTypeError> {
		let kind = Kind::Value(value.kind());
		let index = self.def.position(kind)
			.ok_or(SetTypeError::IllegalKind { property: self.def.name, kind })?;
		self.slot = Slot::Literal(index, value);
		Ok(())
	}

	pub fn set_iri(&mut self, value: Iri) {
		self.slot = Slot::Iri(value);
	}

	pub fn set_unknown(&mut self, value: serde_json::Value) {
		self.slot = Slot::Unknown(value);
	}

	type_accessors! {
		Object, Link, Mention, Activity, IntransitiveActivity, Question, Create, Like, Note,
		Article, Document, Image, Place, Person, Collection, OrderedCollection, CollectionPage,
		OrderedCollectionPage,
	}

	literal_accessors! {
		String => xsd_string: String,
		LangString => rdf_lang_string: std::collections::BTreeMap<String, String>,
		Boolean => xsd_boolean: bool,
		Float => xsd_float: f64,
		NonNegativeInteger => xsd_non_negative_integer: u64,
		DateTime => xsd_date_time: chrono::DateTime<chrono::FixedOffset>,
		Duration => xsd_duration: chrono::TimeDelta,
	}

	/// Arbitrary but stable rank of the held kind: its declared position, -2 for IRIs and -1 when
	/// nothing (or only an unknown value) is held.
	pub fn kind_index(&self) -> i32 {
		match self.slot {
			Slot::Object(index, _) | Slot::Literal(index, _) => index as i32,
			Slot::Iri(_) => -2,
			Slot::Empty | Slot::Unknown(_) => -1,
		}
	}

	/// orders by kind index first, then by the held values themselves
	pub fn less_than(&self, other: &Self) -> bool {
		let (a, b) = (self.kind_index(), other.kind_index());
		if a != b {
			return a < b;
		}
		match (&self.slot, &other.slot) {
			(Slot::Object(_, x), Slot::Object(_, y)) => x.less_than(y),
			(Slot::Literal(_, x), Slot::Literal(_, y)) => x.less_than(y),
			(Slot::Iri(x), Slot::Iri(y)) => x.as_str() < y.as_str(),
			_ => false,
		}
	}

	/// None when there's nothing worth emitting for this property
	pub fn serialize(&self) -> Result<Option<serde_json::Value>, SerializeError> {
		Ok(match &self.slot {
			Slot::Object(_, x) => Some(serde_json::Value::Object(x.serialize()?)),
			Slot::Literal(_, x) => Some(x.serialize()?),
			Slot::Iri(x) => Some(serde_json::Value::String(x.as_str().to_string())),
			Slot::Unknown(serde_json::Value::Null) | Slot::Empty => None,
			Slot::Unknown(x) => Some(x.clone()),
		})
	}

	pub fn jsonld_context(&self) -> Context {
		let mut ctx = Context::from([(jsonld::AS_VOCABULARY.to_string(), self.alias.clone())]);
		if let Slot::Object(_, x) = &self.slot {
			jsonld::merge(&mut ctx, x.jsonld_context());
		}
		ctx
	}
}
