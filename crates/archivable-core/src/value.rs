// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dynamic column values.
//!
//! [`Value`] is the currency exchanged between entities, queries and stores
//! whenever a field is addressed by name rather than through a typed
//! accessor: query conditions, partial updates, unique-constraint checks.
//!
//! # Conversions
//!
//! | Rust Type | Value Variant |
//! |-----------|---------------|
//! | `bool` | `Bool` |
//! | `i16`, `i32`, `i64`, `u16`, `u32` | `Int` |
//! | `String`, `&str` | `Text` |
//! | `Uuid` (feature `uuid`) | `Uuid` |
//! | `Option<T>` | `Null` or the inner variant |

use std::fmt;

/// A single column value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// SQL `NULL`.
    Null,

    /// Boolean value.
    Bool(bool),

    /// Any integer column, widened to 64 bits.
    Int(i64),

    /// Text column.
    Text(String),

    /// UUID column.
    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid)
}

impl Value {
    /// Check if this value is `NULL`.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the variant, used in conversion errors.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            #[cfg(feature = "uuid")]
            Self::Uuid(_) => "uuid"
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "'{}'", v),
            #[cfg(feature = "uuid")]
            Self::Uuid(v) => write!(f, "'{}'", v)
        }
    }
}

/// Error converting a [`Value`] or addressing a field by name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The value has a different type than the field.
    #[error("expected {expected} value, found {found}")]
    TypeMismatch {
        /// Type the field expects.
        expected: &'static str,
        /// Type of the supplied value.
        found:    &'static str
    },

    /// Integer does not fit the field's type.
    #[error("integer {0} is out of range for the field type")]
    OutOfRange(i64),

    /// The entity has no field with this name.
    #[error("unknown field `{0}`")]
    UnknownField(String)
}

/// Conversion from a [`Value`] back into a typed field.
///
/// Used by generated `Model::set_field_value` implementations.
pub trait FromValue: Sized {
    /// Convert the value, failing on a type mismatch.
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

#[cfg(feature = "uuid")]
impl From<uuid::Uuid> for Value {
    fn from(v: uuid::Uuid) -> Self {
        Self::Uuid(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

macro_rules! int_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::Int(i64::from(v))
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, ValueError> {
                    match value {
                        Value::Int(v) => <$ty>::try_from(v).map_err(|_| ValueError::OutOfRange(v)),
                        other => Err(ValueError::TypeMismatch {
                            expected: "int",
                            found:    other.type_name()
                        })
                    }
                }
            }
        )*
    };
}

int_value!(i8, i16, i32, i64, u8, u16, u32);

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(v) => Ok(v),
            other => Err(ValueError::TypeMismatch {
                expected: "bool",
                found:    other.type_name()
            })
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Text(v) => Ok(v),
            other => Err(ValueError::TypeMismatch {
                expected: "text",
                found:    other.type_name()
            })
        }
    }
}

#[cfg(feature = "uuid")]
impl FromValue for uuid::Uuid {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Uuid(v) => Ok(v),
            other => Err(ValueError::TypeMismatch {
                expected: "uuid",
                found:    other.type_name()
            })
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some)
        }
    }
}
