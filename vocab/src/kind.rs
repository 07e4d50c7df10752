use crate::strenum;

strenum! {
	pub enum TypeKind {
		Object,
		Link,
		Mention,
		Activity,
		IntransitiveActivity,
		Question,
		Create,
		Like,
		Note,
		Article,
		Document,
		Image,
		Place,
		Person,
		Collection,
		OrderedCollection,
		CollectionPage,
		OrderedCollectionPage;
	};
}

/// literal value kinds, named after their xsd/rdf datatypes
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum ValueKind {
	String,
	LangString,
	Boolean,
	Float,
	NonNegativeInteger,
	DateTime,
	Duration,
}

impl AsRef<str> for ValueKind {
	fn as_ref(&self) -> &str {
		match self {
			ValueKind::String => "xsd:string",
			ValueKind::LangString => "rdf:langString",
			ValueKind::Boolean => "xsd:boolean",
			ValueKind::Float => "xsd:float",
			ValueKind::NonNegativeInteger => "xsd:nonNegativeInteger",
			ValueKind::DateTime => "xsd:dateTime",
			ValueKind::Duration => "xsd:duration",
		}
	}
}

/// one alternative a property may hold: either a vocabulary type or a literal
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Kind {
	Type(TypeKind),
	Value(ValueKind),
}

impl AsRef<str> for Kind {
	fn as_ref(&self) -> &str {
		match self {
			Kind::Type(x) => x.as_ref(),
			Kind::Value(x) => x.as_ref(),
		}
	}
}

impl std::fmt::Display for Kind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_ref())
	}
}

impl From<TypeKind> for Kind {
	fn from(value: TypeKind) -> Self {
		Kind::Type(value)
	}
}

impl From<ValueKind> for Kind {
	fn from(value: ValueKind) -> Self {
		Kind::Value(value)
	}
}
