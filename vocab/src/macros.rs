#[derive(Debug, thiserror::Error)]
#[error("invalid type value")]
pub struct TypeValueError;

/// closed string enums: flat variants match their own name, deep ones delegate to an inner enum
macro_rules! strenum {
	( $(pub enum $enum_name:ident { $($flat:ident),* ; $($deep:ident($inner:ident)),* };)+ ) => {
		$(
			#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
			pub enum $enum_name {
				$($flat,)*
				$($deep($inner),)*
			}

			impl $enum_name {
				pub const ALL: &'static [$enum_name] = &[ $($enum_name::$flat,)* ];
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					match self {
						$(Self::$flat => stringify!($flat),)*
						$(Self::$deep(x) => x.as_ref(),)*
					}
				}
			}

			impl std::fmt::Display for $enum_name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(self.as_ref())
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::macros::TypeValueError;

				fn try_from(value:&str) -> Result<Self, Self::Error> {
					match value {
						$(stringify!($flat) => Ok(Self::$flat),)*
						_ => {
							$(
								if let Ok(x) = $inner::try_from(value) {
									return Ok(Self::$deep(x));
								}
							)*
							Err($crate::macros::TypeValueError)
						},
					}
				}
			}
		)*
	};
}

pub(crate) use strenum;

/// generates `is_x`, `get_x` and `set_x` for every vocabulary type a property may hold
macro_rules! type_accessors {
	( $($kind:ident),* $(,)? ) => {
		paste::paste! {
			$(
				pub fn [< is_ $kind:snake >](&self) -> bool {
					self.is_kind($crate::Kind::Type($crate::TypeKind::$kind))
				}

				pub fn [< get_ $kind:snake >](&self) -> Option<&$crate::Object> {
					self.get_kind($crate::TypeKind::$kind)
				}

				pub fn [< set_ $kind:snake >](&mut self, value: $crate::Object) -> Result<(), $crate::SetTypeError> {
					if value.kind() != $crate::TypeKind::$kind {
						return Err($crate::SetTypeError::IllegalKind {
							property: self.def().name,
							kind: $crate::Kind::Type(value.kind()),
						});
					}
					self.set_type(value)
				}
			)*
		}
	};
}

pub(crate) use type_accessors;

/// same as `type_accessors`, but for xsd/rdf literal values
macro_rules! literal_accessors {
	( $($variant:ident => $name:ident : $t:ty),* $(,)? ) => {
		paste::paste! {
			$(
				pub fn [< is_ $name >](&self) -> bool {
					self.is_kind($crate::Kind::Value($crate::ValueKind::$variant))
				}

				pub fn [< get_ $name >](&self) -> Option<&$t> {
					match self.get_literal() {
						Some($crate::Literal::$variant(x)) => Some(x),
						_ => None,
					}
				}

				pub fn [< set_ $name >](&mut self, value: $t) -> Result<(), $crate::SetTypeError> {
					self.set_literal($crate::Literal::$variant(value))
				}
			)*
		}
	};
}

pub(crate) use literal_accessors;
