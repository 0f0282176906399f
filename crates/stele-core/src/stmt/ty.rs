use super::Value;
use crate::{Error, Result};

use std::fmt;

/// A database-level column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Boolean,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Text,
    Blob,
    Uuid,
    Timestamp,
    /// An ordered collection of a single element type
    List(Box<Type>),
    /// An unordered collection of a single element type
    Set(Box<Type>),
    /// Key/value pairs
    Map(Box<Type>, Box<Type>),
}

impl Type {
    pub fn list(item: impl Into<Self>) -> Self {
        Self::List(Box::new(item.into()))
    }

    pub fn set(item: impl Into<Self>) -> Self {
        Self::Set(Box::new(item.into()))
    }

    pub fn map(key: impl Into<Self>, value: impl Into<Self>) -> Self {
        Self::Map(Box::new(key.into()), Box::new(value.into()))
    }

    /// Converts `value` to this type.
    ///
    /// This is the conversion kernel used for every bound value: the identity
    /// when the value already has this type, null pass-through, lossless
    /// numeric widening, and element-wise conversion for collections.
    /// Anything else fails with a type-conversion error.
    pub fn cast(&self, value: Value) -> Result<Value> {
        // Null values are passed through
        if value.is_null() {
            return Ok(Value::Null);
        }

        Ok(match (value, self) {
            (v @ Value::Bool(_), Type::Boolean) => v,
            (v @ Value::TinyInt(_), Type::TinyInt) => v,
            (v @ Value::SmallInt(_), Type::SmallInt) => v,
            (v @ Value::Int(_), Type::Int) => v,
            (v @ Value::BigInt(_), Type::BigInt) => v,
            (v @ Value::Float(_), Type::Float) => v,
            (v @ Value::Double(_), Type::Double) => v,
            (v @ Value::Text(_), Type::Text) => v,
            (v @ Value::Blob(_), Type::Blob) => v,
            (v @ Value::Uuid(_), Type::Uuid) => v,
            (v @ Value::Timestamp(_), Type::Timestamp) => v,

            // Lossless integer widening
            (Value::TinyInt(v), Type::SmallInt) => Value::SmallInt(v as i16),
            (Value::TinyInt(v), Type::Int) => Value::Int(v as i32),
            (Value::TinyInt(v), Type::BigInt) => Value::BigInt(v as i64),
            (Value::SmallInt(v), Type::Int) => Value::Int(v as i32),
            (Value::SmallInt(v), Type::BigInt) => Value::BigInt(v as i64),
            (Value::Int(v), Type::BigInt) => Value::BigInt(v as i64),
            (Value::Float(v), Type::Double) => Value::Double(v as f64),

            // Timestamps are wire-encoded as 64-bit epoch milliseconds
            (Value::Int(v), Type::Timestamp) => Value::Timestamp(v as i64),
            (Value::BigInt(v), Type::Timestamp) => Value::Timestamp(v),

            // Collections convert element-wise
            (Value::List(items), Type::List(item)) => Value::List(
                items
                    .into_iter()
                    .map(|i| item.cast(i))
                    .collect::<Result<_>>()?,
            ),
            (Value::Set(items), Type::Set(item)) => Value::Set(
                items
                    .into_iter()
                    .map(|i| item.cast(i))
                    .collect::<Result<_>>()?,
            ),
            (Value::Map(entries), Type::Map(key, value)) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| Ok((key.cast(k)?, value.cast(v)?)))
                    .collect::<Result<_>>()?,
            ),

            (value, _) => return Err(Error::type_conversion(value, self.clone())),
        })
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => f.write_str("boolean"),
            Type::TinyInt => f.write_str("tinyint"),
            Type::SmallInt => f.write_str("smallint"),
            Type::Int => f.write_str("int"),
            Type::BigInt => f.write_str("bigint"),
            Type::Float => f.write_str("float"),
            Type::Double => f.write_str("double"),
            Type::Text => f.write_str("text"),
            Type::Blob => f.write_str("blob"),
            Type::Uuid => f.write_str("uuid"),
            Type::Timestamp => f.write_str("timestamp"),
            Type::List(item) => write!(f, "list<{item}>"),
            Type::Set(item) => write!(f, "set<{item}>"),
            Type::Map(key, value) => write!(f, "map<{key}, {value}>"),
        }
    }
}
