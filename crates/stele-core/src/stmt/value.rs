use uuid::Uuid;

/// A database-level value, as bound to a statement placeholder.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    TinyInt(i8),

    /// Signed 16-bit integer
    SmallInt(i16),

    /// Signed 32-bit integer
    Int(i32),

    /// Signed 64-bit integer
    BigInt(i64),

    /// 32-bit floating point number
    Float(f32),

    /// 64-bit floating point number
    Double(f64),

    /// UTF-8 string
    Text(String),

    /// Raw bytes
    Blob(Vec<u8>),

    /// Universally unique identifier
    Uuid(Uuid),

    /// Milliseconds since the unix epoch
    Timestamp(i64),

    /// An ordered collection of values of one type
    List(Vec<Value>),

    /// An unordered collection of distinct values of one type
    Set(Vec<Value>),

    /// Key/value pairs
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Returns a `Value` representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::TinyInt(v) => Some(*v as i64),
            Self::SmallInt(v) => Some(*v as i64),
            Self::Int(v) => Some(*v as i64),
            Self::BigInt(v) => Some(*v),
            _ => None,
        }
    }

    /// The CQL name for this value's shape, used in diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::TinyInt(_) => "tinyint",
            Self::SmallInt(_) => "smallint",
            Self::Int(_) => "int",
            Self::BigInt(_) => "bigint",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Text(_) => "text",
            Self::Blob(_) => "blob",
            Self::Uuid(_) => "uuid",
            Self::Timestamp(_) => "timestamp",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i8> for Value {
    fn from(src: i8) -> Self {
        Self::TinyInt(src)
    }
}

impl From<i16> for Value {
    fn from(src: i16) -> Self {
        Self::SmallInt(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::Int(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::BigInt(src)
    }
}

impl From<f32> for Value {
    fn from(src: f32) -> Self {
        Self::Float(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::Double(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::Text(src.to_owned())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::Text(src)
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Blob(src)
    }
}

impl From<Uuid> for Value {
    fn from(src: Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
