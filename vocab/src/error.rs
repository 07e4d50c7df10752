use crate::{Kind, TypeKind};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeserializeError {
	#[error("no \"type\" property in map")]
	MissingType,

	#[error("\"type\" property is not of \"{expected}\" type: {found}")]
	WrongType { expected: TypeKind, found: String },

	#[error("could not find a \"type\" property of value \"{0}\"")]
	TypeNotListed(TypeKind),

	#[error("\"type\" property is neither a string nor an array of strings")]
	UnrecognizedType,

	#[error("no registered vocabulary type matches \"type\" property")]
	NoMatchingType,

	#[error("no deserializer registered for {0}")]
	Unregistered(TypeKind),

	#[error("document is not a json object")]
	NotAnObject,

	#[error("objects nested deeper than {0} levels")]
	TooDeep(usize),
}

impl DeserializeError {
	/// true when the error only means "this map is not of the requested kind", so that other
	/// candidate kinds may still be attempted
	pub fn is_mismatch(&self) -> bool {
		!matches!(self, DeserializeError::TooDeep(_))
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SerializeError {
	#[error("float {0} can't be represented in json")]
	NonFiniteFloat(f64),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetTypeError {
	#[error("illegal type to set on {property} property: {kind}")]
	IllegalKind { property: &'static str, kind: Kind },

	#[error("{property} is not a property of {kind}")]
	Undeclared { property: &'static str, kind: TypeKind },

	#[error("cannot insert a {found} element into {property}")]
	ForeignElement { property: &'static str, found: &'static str },
}
