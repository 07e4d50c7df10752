//! # apvocab
//! > the activitystreams vocabulary as generic, table driven properties
//!
//! every activitystreams property is one of two generic engines ([FunctionalProperty] and
//! [NonFunctionalProperty]) configured by a static [PropertyDef], and every type is one generic
//! [Object] configured by a static [TypeDef]. the builtin tables live in [vocabulary]
//!
//! ```rust
//! let registry = apvocab::Registry::new();
//! let doc = serde_json::json!({
//! 	"type": "Question",
//! 	"name": "what is the answer?",
//! 	"oneOf": [ { "type": "Note", "name": "42" }, { "type": "Note", "name": "43" } ],
//! 	"foo": "bar",
//! });
//! let question = registry.resolve(&doc).unwrap();
//! assert!(question.non_functional("oneOf").unwrap().at(0).unwrap().is_note());
//! assert_eq!(question.unknown_properties().get("foo"), Some(&serde_json::json!("bar")));
//! assert_eq!(serde_json::Value::Object(question.serialize().unwrap()), doc);
//! ```

mod macros;
pub(crate) use macros::strenum;
pub use macros::TypeValueError;

mod kind;
pub use kind::{Kind, TypeKind, ValueKind};

mod error;
pub use error::{DeserializeError, SerializeError, SetTypeError};

mod iri;
pub use iri::Iri;

mod literal;
pub use literal::Literal;

mod registry;
pub use registry::{Registry, Resolver, Scope, DEFAULT_MAX_DEPTH};

mod property;
pub use property::{FunctionalProperty, NonFunctionalProperty, Property, PropertyDef, Slot};

mod object;
pub use object::{Object, TypeDef};

pub mod jsonld;
pub use jsonld::LD;

pub mod vocabulary;
