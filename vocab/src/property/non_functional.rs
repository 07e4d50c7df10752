use crate::{
	jsonld::{self, Context},
	DeserializeError, FunctionalProperty, Iri, Literal, Object, PropertyDef, Scope, SerializeError, SetTypeError,
};

/// A property holding an ordered list of values. Each element follows the same rules as a
/// [FunctionalProperty] of the same definition.
#[derive(Debug, Clone, PartialEq)]
pub struct NonFunctionalProperty {
	def: &'static PropertyDef,
	alias: String,
	items: Vec<FunctionalProperty>,
}

impl NonFunctionalProperty {
	pub fn new(def: &'static PropertyDef) -> Self {
		NonFunctionalProperty { def, alias: String::new(), items: Vec::new() }
	}

	/// arrays become one element per entry, anything else a single element
	pub fn deserialize(
		def: &'static PropertyDef,
		map: &serde_json::Map<String, serde_json::Value>,
		scope: Scope<'_>,
	) -> Result<Option<Self>, DeserializeError> {
		let Some(value) = def.lookup(map, scope.alias()) else { return Ok(None) };
		let items = match value {
			serde_json::Value::Array(arr) => arr
				.iter()
				.map(|x| FunctionalProperty::from_value(def, x, scope))
				.collect::<Result<Vec<_>, _>>()?,
			_ => vec![FunctionalProperty::from_value(def, value, scope)?],
		};
		Ok(Some(NonFunctionalProperty { def, alias: scope.alias().to_string(), items }))
	}

	pub fn def(&self) -> &'static PropertyDef {
		self.def
	}

	pub fn alias(&self) -> &str {
		&self.alias
	}

	pub(crate) fn set_alias(&mut self, alias: &str) {
		self.alias = alias.to_string();
		for item in self.items.iter_mut() {
			item.set_alias(alias);
		}
	}

	pub fn name(&self) -> String {
		match self.items.as_slice() {
			[single] => single.name(),
			_ => self.def.key(&self.alias),
		}
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn at(&self, index: usize) -> Option<&FunctionalProperty> {
		self.items.get(index)
	}

	pub fn at_mut(&mut self, index: usize) -> Option<&mut FunctionalProperty> {
		self.items.get_mut(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, FunctionalProperty> {
		self.items.iter()
	}

	pub fn clear(&mut self) {
		self.items.clear();
	}

	fn element(&self) -> FunctionalProperty {
		let mut item = FunctionalProperty::new(self.def);
		item.set_alias(&self.alias);
		item
	}

	pub fn append_type(&mut self, value: Object) -> Result<(), SetTypeError> {
		let mut item = self.element();
		item.set_type(value)?;
		self.items.push(item);
		Ok(())
	}

	pub fn append_literal(&mut self, value: Literal) -> Result<(), SetTypeError> {
		let mut item = self.element();
		item.set_literal(value)?;
		self.items.push(item);
		Ok(())
	}

	pub fn append_iri(&mut self, value: Iri) {
		let mut item = self.element();
		item.set_iri(value);
		self.items.push(item);
	}

	pub fn prepend_type(&mut self, value: Object) -> Result<(), SetTypeError> {
		let mut item = self.element();
		item.set_type(value)?;
		self.items.insert(0, item);
		Ok(())
	}

	pub fn prepend_literal(&mut self, value: Literal) -> Result<(), SetTypeError> {
		let mut item = self.element();
		item.set_literal(value)?;
		self.items.insert(0, item);
		Ok(())
	}

	pub fn prepend_iri(&mut self, value: Iri) {
		let mut item = self.element();
		item.set_iri(value);
		self.items.insert(0, item);
	}

	/// Inserts an element built elsewhere. It must share this property's definition.
	pub fn insert(&mut self, index: usize, item: FunctionalProperty) -> Result<(), SetTypeError> {
		if item.def() != self.def {
			tracing::warn!("refusing to insert '{}' element into '{}'", item.def().name, self.def.name);
			return Err(SetTypeError::ForeignElement { property: self.def.name, found: item.def().name });
		}
		self.items.insert(index.min(self.items.len()), item);
		Ok(())
	}

	pub fn remove(&mut self, index: usize) -> Option<FunctionalProperty> {
		if index < self.items.len() {
			Some(self.items.remove(index))
		} else {
			None
		}
	}

	pub fn swap(&mut self, i: usize, j: usize) {
		self.items.swap(i, j);
	}

	/// whether element `i` sorts before element `j`
	pub fn less(&self, i: usize, j: usize) -> bool {
		match (self.items.get(i), self.items.get(j)) {
			(Some(a), Some(b)) => a.less_than(b),
			_ => false,
		}
	}

	/// element-wise over the common prefix, then shorter lists first
	pub fn less_than(&self, other: &Self) -> bool {
		for (a, b) in self.items.iter().zip(other.items.iter()) {
			if a.less_than(b) {
				return true;
			} else if b.less_than(a) {
				return false;
			}
		}
		self.items.len() < other.items.len()
	}

	/// A single element is emitted as is, anything else becomes an array. Elements with nothing
	/// to emit keep their place in arrays as `null`.
	pub fn serialize(&self) -> Result<Option<serde_json::Value>, SerializeError> {
		if let [single] = self.items.as_slice() {
			return single.serialize();
		}
		let mut values = Vec::with_capacity(self.items.len());
		for item in &self.items {
			values.push(item.serialize()?.unwrap_or(serde_json::Value::Null));
		}
		Ok(Some(serde_json::Value::Array(values)))
	}

	pub fn jsonld_context(&self) -> Context {
		let mut ctx = Context::from([(jsonld::AS_VOCABULARY.to_string(), self.alias.clone())]);
		for item in &self.items {
			jsonld::merge(&mut ctx, item.jsonld_context());
		}
		ctx
	}
}

impl<'a> IntoIterator for &'a NonFunctionalProperty {
	type Item = &'a FunctionalProperty;
	type IntoIter = std::slice::Iter<'a, FunctionalProperty>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

#[cfg(test)]
mod test {
	use super::NonFunctionalProperty;
	use crate::{
		jsonld::AliasMap,
		vocabulary::{properties, types},
		FunctionalProperty, Iri, Literal, Object, Registry, Scope, SetTypeError,
	};

	fn read(def: &'static crate::PropertyDef, doc: serde_json::Value) -> Option<NonFunctionalProperty> {
		let registry = Registry::new();
		let aliases = AliasMap::new();
		NonFunctionalProperty::deserialize(def, doc.as_object().unwrap(), Scope::new(&aliases, &registry))
			.expect("property deserialization failed")
	}

	#[test]
	fn arrays_deserialize_element_by_element() {
		let doc = serde_json::json!({
			"oneOf": [
				{ "type": "Note", "name": "Option A" },
				"https://example.com/option/b",
				17,
			],
		});
		let prop = read(&properties::ONE_OF, doc.clone()).expect("oneOf not found");
		assert_eq!(prop.len(), 3);
		assert!(prop.at(0).unwrap().is_note());
		assert!(prop.at(1).unwrap().is_iri());
		assert!(prop.at(2).unwrap().is_unknown());
		assert_eq!(prop.serialize().unwrap(), doc.get("oneOf").cloned());
	}

	#[test]
	fn single_values_stay_single() {
		let prop = read(&properties::TO, serde_json::json!({ "to": "https://example.com/followers" })).unwrap();
		assert_eq!(prop.len(), 1);
		assert_eq!(prop.serialize().unwrap(), Some(serde_json::json!("https://example.com/followers")));

		let empty = read(&properties::TO, serde_json::json!({ "to": [] })).unwrap();
		assert!(empty.is_empty());
		assert_eq!(empty.serialize().unwrap(), Some(serde_json::json!([])));
	}

	#[test]
	fn null_elements_keep_their_place() {
		let doc = serde_json::json!({ "to": [null, "https://a.example"] });
		let prop = read(&properties::TO, doc.clone()).unwrap();
		assert_eq!(prop.len(), 2);
		assert!(prop.at(0).unwrap().is_unknown());
		assert_eq!(prop.serialize().unwrap(), doc.get("to").cloned());

		// a lone null has nothing to say, like a functional property
		let single = read(&properties::TO, serde_json::json!({ "to": null })).unwrap();
		assert_eq!(single.len(), 1);
		assert_eq!(single.serialize().unwrap(), None);
	}

	#[test]
	fn content_map_is_a_companion_key() {
		let prop = read(&properties::CONTENT, serde_json::json!({ "contentMap": { "en": "hi", "it": "ciao" } }))
			.expect("contentMap ignored");
		assert_eq!(prop.len(), 1);
		assert!(prop.at(0).unwrap().is_rdf_lang_string());
		assert_eq!(prop.name(), "contentMap");

		let prop = read(&properties::CONTENT, serde_json::json!({ "content": "hi", "contentMap": { "en": "hi" } })).unwrap();
		assert!(prop.at(0).unwrap().is_xsd_string());
		assert_eq!(prop.name(), "content");
	}

	#[test]
	fn append_prepend_remove_swap() {
		let mut prop = NonFunctionalProperty::new(&properties::TO);
		prop.append_iri(Iri::parse("https://example.com/b").unwrap());
		prop.prepend_iri(Iri::parse("https://example.com/a").unwrap());
		prop.append_type(Object::new(&types::PERSON)).unwrap();
		assert!(prop.append_literal(Literal::Boolean(true)).is_err());
		assert_eq!(prop.len(), 3);

		assert_eq!(prop.at(0).and_then(|x| x.get_iri()).map(Iri::as_str), Some("https://example.com/a"));
		assert!(prop.less(0, 1));
		assert!(!prop.less(1, 0));
		// iris rank before typed values
		assert!(prop.less(1, 2));

		prop.swap(0, 1);
		assert!(prop.less(1, 0));

		let removed = prop.remove(2).expect("nothing removed");
		assert!(removed.is_person());
		assert!(prop.remove(5).is_none());
		assert_eq!(prop.len(), 2);
	}

	#[test]
	fn insert_requires_same_definition() {
		let mut prop = NonFunctionalProperty::new(&properties::TAG);
		let mut foreign = FunctionalProperty::new(&properties::PART_OF);
		foreign.set_iri(Iri::parse("https://example.com").unwrap());
		assert_eq!(
			prop.insert(0, foreign).err(),
			Some(SetTypeError::ForeignElement { property: "tag", found: "partOf" }),
		);

		let mut own = FunctionalProperty::new(&properties::TAG);
		own.set_mention(Object::new(&types::MENTION)).unwrap();
		prop.insert(10, own).unwrap();
		assert!(prop.at(0).unwrap().is_mention());
	}

	#[test]
	fn less_than_compares_prefix_then_length() {
		let mut short = NonFunctionalProperty::new(&properties::CC);
		short.append_iri(Iri::parse("https://example.com/a").unwrap());
		let mut long = short.clone();
		long.append_iri(Iri::parse("https://example.com/b").unwrap());
		assert!(short.less_than(&long));
		assert!(!long.less_than(&short));

		let mut other = NonFunctionalProperty::new(&properties::CC);
		other.append_iri(Iri::parse("https://example.com/z").unwrap());
		assert!(long.less_than(&other));
		assert!(!other.less_than(&long));
	}
}
