use crate::any_value::AnyValue;
use std::fmt;

/// Runtime type tag of a value stored in a [`Bundle`](crate::Bundle)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    String,
    /// A catch-all payload, tagged with its Rust type name
    Other(&'static str),
}

impl Kind {
    /// True for the eight kinds that have typed accessors
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Kind::String | Kind::Other(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Boolean => "boolean",
            Kind::Byte => "byte",
            Kind::Char => "char",
            Kind::Double => "double",
            Kind::Float => "float",
            Kind::Int => "int",
            Kind::Long => "long",
            Kind::Short => "short",
            Kind::String => "string",
            Kind::Other(type_name) => type_name,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tagged value held by a bundle
///
/// Floating point payloads are kept exactly as stored.
#[derive(Debug, Clone)]
pub enum BundleValue {
    Boolean(bool),
    Byte(i8),
    Char(char),
    Double(f64),
    Float(f32),
    Int(i32),
    Long(i64),
    Short(i16),
    String(String),
    Other(AnyValue),
}

impl BundleValue {
    /// Wrap an arbitrary payload as a catch-all value
    pub fn other<T: 'static + Send + Sync>(value: T) -> Self {
        BundleValue::Other(AnyValue::new(value))
    }

    pub fn kind(&self) -> Kind {
        match self {
            BundleValue::Boolean(_) => Kind::Boolean,
            BundleValue::Byte(_) => Kind::Byte,
            BundleValue::Char(_) => Kind::Char,
            BundleValue::Double(_) => Kind::Double,
            BundleValue::Float(_) => Kind::Float,
            BundleValue::Int(_) => Kind::Int,
            BundleValue::Long(_) => Kind::Long,
            BundleValue::Short(_) => Kind::Short,
            BundleValue::String(_) => Kind::String,
            BundleValue::Other(any) => Kind::Other(any.type_name()),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for BundleValue {
                fn from(value: $ty) -> Self {
                    BundleValue::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    bool => Boolean,
    i8 => Byte,
    char => Char,
    f64 => Double,
    f32 => Float,
    i32 => Int,
    i64 => Long,
    i16 => Short,
    String => String,
    AnyValue => Other,
}

impl From<&str> for BundleValue {
    fn from(value: &str) -> Self {
        BundleValue::String(value.to_string())
    }
}
