use crate::{
	jsonld::{self, Context},
	DeserializeError, FunctionalProperty, NonFunctionalProperty, Property, PropertyDef, Scope, SerializeError,
	SetTypeError, TypeKind,
};

/// Static description of a vocabulary type: which properties it declares, in which order, and
/// where it sits in the type hierarchy.
pub struct TypeDef {
	pub kind: TypeKind,
	pub properties: &'static [&'static PropertyDef],
	/// types this one extends
	pub extends: &'static [TypeKind],
	/// types extending this one
	pub extended_by: &'static [TypeKind],
	pub disjoint_with: &'static [TypeKind],
}

impl TypeDef {
	pub fn name(&self) -> &str {
		self.kind.as_ref()
	}

	pub fn position(&self, property: &str) -> Option<usize> {
		self.properties.iter().position(|p| p.name == property)
	}

	/// whether this type extends `other`
	pub fn extends(&self, other: TypeKind) -> bool {
		self.extends.contains(&other)
	}

	/// whether `other` extends this type, false if they are the same
	pub fn is_extended_by(&self, other: TypeKind) -> bool {
		self.extended_by.contains(&other)
	}

	/// whether `other` is this type or extends it
	pub fn is_or_extends(&self, other: TypeKind) -> bool {
		self.kind == other || self.is_extended_by(other)
	}

	pub fn is_disjoint_with(&self, other: TypeKind) -> bool {
		self.disjoint_with.contains(&other)
	}

	/// keys of `map` read by some declared property
	fn read_keys(&self, map: &serde_json::Map<String, serde_json::Value>, alias: &str) -> Vec<String> {
		self.properties.iter().filter_map(|p| p.lookup_key(map, alias)).collect()
	}
}

impl PartialEq for TypeDef {
	fn eq(&self, other: &Self) -> bool {
		self.kind == other.kind
	}
}

impl std::fmt::Debug for TypeDef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "TypeDef({})", self.kind)
	}
}

/// An instance of some vocabulary type: one optional slot per declared property, plus every
/// key that was not recognized, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
	def: &'static TypeDef,
	alias: String,
	properties: Vec<Option<Property>>,
	unknown: serde_json::Map<String, serde_json::Value>,
}

impl Object {
	/// empty object, with just its `type` filled in
	pub fn new(def: &'static TypeDef) -> Self {
		let mut obj = Object {
			def,
			alias: String::new(),
			properties: vec![None; def.properties.len()],
			unknown: serde_json::Map::new(),
		};
		if let Some(types) = obj.non_functional_entry("type") {
			if let Err(e) = types.append_literal(crate::Literal::String(def.name().to_string())) {
				tracing::warn!("could not set type on new {}: {e}", def.kind);
			}
		}
		obj
	}

	/// Reads an object of type `def` out of `map`. The map must list this type, then every
	/// declared property is read in order and the first failure aborts the whole object.
	pub fn deserialize(
		def: &'static TypeDef,
		map: &serde_json::Map<String, serde_json::Value>,
		scope: Scope<'_>,
	) -> Result<Self, DeserializeError> {
		let alias = scope.alias();
		match map.get("type") {
			None => return Err(DeserializeError::MissingType),
			Some(serde_json::Value::String(x)) => {
				let name = jsonld::strip_alias(x, alias);
				if name != def.name() {
					return Err(DeserializeError::WrongType { expected: def.kind, found: name.to_string() });
				}
			},
			Some(serde_json::Value::Array(arr)) => {
				let listed = arr
					.iter()
					.filter_map(|x| x.as_str())
					.any(|x| jsonld::strip_alias(x, alias) == def.name());
				if !listed {
					return Err(DeserializeError::TypeNotListed(def.kind));
				}
			},
			Some(_) => return Err(DeserializeError::UnrecognizedType),
		}

		let max_depth = scope.resolver().max_depth();
		if scope.depth() > max_depth {
			return Err(DeserializeError::TooDeep(max_depth));
		}

		let mut properties = Vec::with_capacity(def.properties.len());
		for prop in def.properties {
			properties.push(Property::deserialize(prop, map, scope)?);
		}

		let read = def.read_keys(map, alias);
		let unknown = map
			.iter()
			.filter(|(k, _)| !read.contains(k))
			.map(|(k, v)| (k.clone(), v.clone()))
			.collect();

		Ok(Object { def, alias: alias.to_string(), properties, unknown })
	}

	pub fn def(&self) -> &'static TypeDef {
		self.def
	}

	pub fn kind(&self) -> TypeKind {
		self.def.kind
	}

	pub fn type_name(&self) -> &str {
		self.def.name()
	}

	pub fn alias(&self) -> &str {
		&self.alias
	}

	/// `type` first, then every property with something to say, then unknown keys which
	/// don't collide with anything already emitted
	pub fn serialize(&self) -> Result<serde_json::Map<String, serde_json::Value>, SerializeError> {
		let mut out = serde_json::Map::new();
		out.insert(
			"type".to_string(),
			serde_json::Value::String(jsonld::qualify(self.def.name(), &self.alias)),
		);
		for prop in self.properties.iter().flatten() {
			if let Some(value) = prop.serialize()? {
				out.insert(prop.name(), value);
			}
		}
		for (k, v) in &self.unknown {
			if !out.contains_key(k) {
				out.insert(k.clone(), v.clone());
			}
		}
		Ok(out)
	}

	/// Compares declared properties in order, absent ones first. Two present properties where
	/// neither is less than the other count as equal and the next one is compared. Ties end up
	/// decided by how many unknown keys each holds.
	pub fn less_than(&self, other: &Self) -> bool {
		for (lhs, rhs) in self.properties.iter().zip(other.properties.iter()) {
			match (lhs, rhs) {
				(Some(lhs), Some(rhs)) => {
					if lhs.less_than(rhs) {
						return true;
					} else if rhs.less_than(lhs) {
						return false;
					}
				},
				(None, Some(_)) => return true,
				(Some(_), None) => return false,
				(None, None) => {},
			}
		}
		self.unknown.len() < other.unknown.len()
	}

	pub fn jsonld_context(&self) -> Context {
		let mut ctx = Context::from([(jsonld::AS_VOCABULARY.to_string(), self.alias.clone())]);
		for prop in self.properties.iter().flatten() {
			jsonld::merge(&mut ctx, prop.jsonld_context());
		}
		ctx
	}

	pub fn extends(&self, other: TypeKind) -> bool {
		self.def.extends(other)
	}

	pub fn is_extended_by(&self, other: TypeKind) -> bool {
		self.def.is_extended_by(other)
	}

	pub fn is_or_extends(&self, other: TypeKind) -> bool {
		self.def.is_or_extends(other)
	}

	pub fn is_disjoint_with(&self, other: TypeKind) -> bool {
		self.def.is_disjoint_with(other)
	}

	pub fn property(&self, name: &str) -> Option<&Property> {
		self.properties.get(self.def.position(name)?)?.as_ref()
	}

	pub fn property_mut(&mut self, name: &str) -> Option<&mut Property> {
		self.properties.get_mut(self.def.position(name)?)?.as_mut()
	}

	pub fn functional(&self, name: &str) -> Option<&FunctionalProperty> {
		self.property(name)?.as_functional()
	}

	pub fn functional_mut(&mut self, name: &str) -> Option<&mut FunctionalProperty> {
		self.property_mut(name)?.as_functional_mut()
	}

	pub fn non_functional(&self, name: &str) -> Option<&NonFunctionalProperty> {
		self.property(name)?.as_non_functional()
	}

	pub fn non_functional_mut(&mut self, name: &str) -> Option<&mut NonFunctionalProperty> {
		self.property_mut(name)?.as_non_functional_mut()
	}

	/// declared property `name`, created empty if absent
	pub fn entry(&mut self, name: &str) -> Option<&mut Property> {
		let index = self.def.position(name)?;
		let def = self.def.properties[index];
		let alias = &self.alias;
		let slot = self.properties.get_mut(index)?;
		Some(slot.get_or_insert_with(|| {
			let mut prop = Property::new(def);
			prop.set_alias(alias);
			prop
		}))
	}

	pub fn functional_entry(&mut self, name: &str) -> Option<&mut FunctionalProperty> {
		self.entry(name)?.as_functional_mut()
	}

	pub fn non_functional_entry(&mut self, name: &str) -> Option<&mut NonFunctionalProperty> {
		self.entry(name)?.as_non_functional_mut()
	}

	/// Replaces a declared property, returning the previous one. Fails if this type doesn't
	/// declare it.
	pub fn set_property(&mut self, property: impl Into<Property>) -> Result<Option<Property>, SetTypeError> {
		let property = property.into();
		let name = property.def().name;
		let index = self
			.def
			.properties
			.iter()
			.position(|p| *p == property.def())
			.ok_or(SetTypeError::Undeclared { property: name, kind: self.def.kind })?;
		Ok(self.properties[index].replace(property))
	}

	pub fn remove_property(&mut self, name: &str) -> Option<Property> {
		self.properties.get_mut(self.def.position(name)?)?.take()
	}

	pub fn unknown_properties(&self) -> &serde_json::Map<String, serde_json::Value> {
		&self.unknown
	}

	pub fn unknown_properties_mut(&mut self) -> &mut serde_json::Map<String, serde_json::Value> {
		&mut self.unknown
	}
}

#[cfg(test)]
mod test {
	use super::Object;
	use crate::{
		jsonld::{AliasMap, AS_VOCABULARY},
		vocabulary::{properties, types},
		DeserializeError, FunctionalProperty, Iri, Registry, Scope, SetTypeError, TypeKind,
	};

	fn read(def: &'static super::TypeDef, doc: &serde_json::Value) -> Result<Object, DeserializeError> {
		let registry = Registry::new();
		let aliases = AliasMap::new();
		Object::deserialize(def, doc.as_object().unwrap(), Scope::new(&aliases, &registry))
	}

	#[test]
	fn question_keeps_unknown_properties() {
		let doc = serde_json::json!({
			"type": "Question",
			"name": "What is the answer?",
			"closed": "2016-05-10T00:00:00Z",
			"foo": "bar",
		});
		let question = read(&types::QUESTION, &doc).expect("failed deserializing question");
		assert_eq!(question.kind(), TypeKind::Question);
		assert_eq!(
			question.unknown_properties(),
			serde_json::json!({ "foo": "bar" }).as_object().unwrap(),
		);
		let closed = question.non_functional("closed").expect("closed not read");
		assert!(closed.at(0).unwrap().is_xsd_date_time());

		let out = question.serialize().unwrap();
		assert_eq!(serde_json::Value::Object(out), doc);
	}

	#[test]
	fn type_must_match() {
		assert_eq!(
			read(&types::QUESTION, &serde_json::json!({ "type": "Note" })).err(),
			Some(DeserializeError::WrongType { expected: TypeKind::Question, found: "Note".into() }),
		);
		assert_eq!(
			read(&types::QUESTION, &serde_json::json!({ "type": ["Note", "Article"] })).err(),
			Some(DeserializeError::TypeNotListed(TypeKind::Question)),
		);
		assert_eq!(
			read(&types::QUESTION, &serde_json::json!({ "name": "untyped" })).err(),
			Some(DeserializeError::MissingType),
		);
		assert_eq!(
			read(&types::QUESTION, &serde_json::json!({ "type": { "nested": true } })).err(),
			Some(DeserializeError::UnrecognizedType),
		);
	}

	#[test]
	fn multi_typed_objects_are_accepted() {
		let doc = serde_json::json!({ "type": ["https://example.com/ns#Poll", "Question"], "oneOf": [] });
		// empty lists are kept as such
		let question = read(&types::QUESTION, &doc).expect("multi typed question refused");
		assert_eq!(question.non_functional("type").map(|x| x.len()), Some(2));
		assert_eq!(serde_json::Value::Object(question.serialize().unwrap()), doc);
	}

	#[test]
	fn companion_keys_are_not_unknown() {
		let doc = serde_json::json!({
			"type": "Note",
			"contentMap": { "en": "hello", "it": "ciao" },
			"@context": "https://www.w3.org/ns/activitystreams",
		});
		let note = read(&types::NOTE, &doc).unwrap();
		assert!(note.non_functional("content").is_some());
		assert_eq!(note.unknown_properties().len(), 1);
		assert!(note.unknown_properties().contains_key("@context"));
		assert_eq!(serde_json::Value::Object(note.serialize().unwrap()), doc);
	}

	#[test]
	fn unread_companion_keys_are_kept() {
		let doc = serde_json::json!({
			"type": "Note",
			"content": "hello",
			"contentMap": { "it": "ciao" },
		});
		let note = read(&types::NOTE, &doc).unwrap();
		assert!(note.non_functional("content").unwrap().at(0).unwrap().is_xsd_string());
		assert_eq!(note.unknown_properties().get("contentMap"), Some(&serde_json::json!({ "it": "ciao" })));
		assert_eq!(serde_json::Value::Object(note.serialize().unwrap()), doc);
	}

	#[test]
	fn known_properties_win_over_unknown() {
		let mut note = Object::new(&types::NOTE);
		note.unknown_properties_mut().insert("name".into(), serde_json::json!("stale"));
		note.unknown_properties_mut().insert("sensitive".into(), serde_json::json!(true));
		note.non_functional_entry("name")
			.unwrap()
			.append_literal(crate::Literal::String("fresh".into()))
			.unwrap();
		let out = note.serialize().unwrap();
		assert_eq!(out.get("name"), Some(&serde_json::json!("fresh")));
		assert_eq!(out.get("sensitive"), Some(&serde_json::json!(true)));
		assert_eq!(out.get("type"), Some(&serde_json::json!("Note")));
	}

	#[test]
	fn new_objects_carry_their_type() {
		let person = Object::new(&types::PERSON);
		assert_eq!(serde_json::Value::Object(person.serialize().unwrap()), serde_json::json!({ "type": "Person" }));
		assert!(person.functional("preferredUsername").is_none());
	}

	#[test]
	fn less_than_walks_properties_in_order() {
		let mut a = Object::new(&types::NOTE);
		let mut b = Object::new(&types::NOTE);
		assert!(!a.less_than(&b));
		assert!(!b.less_than(&a));

		// absent sorts first
		b.functional_entry("id").unwrap().set_iri(Iri::parse("https://example.com/b").unwrap());
		assert!(a.less_than(&b));
		assert!(!b.less_than(&a));

		a.functional_entry("id").unwrap().set_iri(Iri::parse("https://example.com/a").unwrap());
		assert!(a.less_than(&b));
		assert!(!b.less_than(&a));

		// equal properties fall through to the unknown count
		a.functional_entry("id").unwrap().set_iri(Iri::parse("https://example.com/b").unwrap());
		b.unknown_properties_mut().insert("foo".into(), serde_json::json!("bar"));
		assert!(a.less_than(&b));
		assert!(!b.less_than(&a));
	}

	#[test]
	fn questions_compare_properties_by_name() {
		let mut by_actor = Object::new(&types::QUESTION);
		by_actor.non_functional_entry("actor").unwrap().append_iri(Iri::parse("https://example.com/alice").unwrap());
		let mut by_altitude = Object::new(&types::QUESTION);
		by_altitude.functional_entry("altitude").unwrap().set_xsd_float(12.5).unwrap();

		// actor comes first, and absent sorts before present
		assert!(by_altitude.less_than(&by_actor));
		assert!(!by_actor.less_than(&by_altitude));
	}

	#[test]
	fn set_property_requires_declaration() {
		let mut note = Object::new(&types::NOTE);
		let mut total = FunctionalProperty::new(&properties::TOTAL_ITEMS);
		total.set_xsd_non_negative_integer(3).unwrap();
		assert_eq!(
			note.set_property(total.clone()).err(),
			Some(SetTypeError::Undeclared { property: "totalItems", kind: TypeKind::Note }),
		);

		let mut collection = Object::new(&types::COLLECTION);
		assert!(collection.set_property(total).unwrap().is_none());
		assert_eq!(
			collection.functional("totalItems").and_then(|x| x.get_xsd_non_negative_integer()),
			Some(&3),
		);
		assert!(collection.remove_property("totalItems").is_some());
		assert!(collection.functional("totalItems").is_none());
		assert!(collection.remove_property("orderedItems").is_none());
	}

	#[test]
	fn hierarchy_lookups() {
		let question = Object::new(&types::QUESTION);
		assert!(question.extends(TypeKind::IntransitiveActivity));
		assert!(question.is_or_extends(TypeKind::Question));
		assert!(!question.is_extended_by(TypeKind::Activity));
		assert!(question.is_disjoint_with(TypeKind::Mention));
		assert!(!question.is_disjoint_with(TypeKind::Note));

		let object = Object::new(&types::OBJECT);
		assert!(object.is_or_extends(TypeKind::Question));
		assert!(!object.extends(TypeKind::Question));
	}

	#[test]
	fn aliased_documents_keep_their_alias() {
		let registry = Registry::new();
		let aliases = AliasMap::from([(AS_VOCABULARY.to_string(), "as".to_string())]);
		let doc = serde_json::json!({
			"type": "as:Note",
			"as:name": "aliased",
			"id": "https://example.com/note",
		});
		let note = Object::deserialize(&types::NOTE, doc.as_object().unwrap(), Scope::new(&aliases, &registry)).unwrap();
		assert_eq!(note.alias(), "as");
		assert!(note.unknown_properties().is_empty());
		assert!(note.functional("id").unwrap().is_iri());
		assert_eq!(serde_json::Value::Object(note.serialize().unwrap()), doc);
		assert_eq!(note.jsonld_context().get(AS_VOCABULARY).map(String::as_str), Some("as"));
	}
}
