use crate::bundle::Bundle;
use crate::error::{RequireError, RequireResult};
use crate::value::{BundleValue, Kind};
use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// A primitive kind that has soft and strict accessors
///
/// Implemented for `bool`, `i8`, `char`, `f64`, `f32`, `i32`, `i64` and `i16`
/// (boolean, byte, char, double, float, int, long and short). Matching is by
/// tag only: an `i32` is never read back as an `i8` or `i64`. `Default` is
/// the fallback the bundle's type-committed getters return.
pub trait Primitive: sealed::Sealed + Copy + PartialEq + Debug + Default + 'static {
    const KIND: Kind;

    /// Extracts the payload if `value` is tagged with this kind
    fn from_value(value: &BundleValue) -> Option<Self>;

    /// Type-committed read through the bundle's own getter
    fn read(bundle: &Bundle, key: &str) -> Self;
}

macro_rules! impl_primitive {
    ($($ty:ty => $variant:ident, $getter:ident;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const KIND: Kind = Kind::$variant;

                fn from_value(value: &BundleValue) -> Option<Self> {
                    match value {
                        BundleValue::$variant(v) => Some(*v),
                        _ => None,
                    }
                }

                fn read(bundle: &Bundle, key: &str) -> Self {
                    bundle.$getter(key)
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Boolean, get_boolean;
    i8 => Byte, get_byte;
    char => Char, get_char;
    f64 => Double, get_double;
    f32 => Float, get_float;
    i32 => Int, get_int;
    i64 => Long, get_long;
    i16 => Short, get_short;
}

enum Lookup<T> {
    Absent,
    Mismatch(Kind),
    Present(T),
}

fn lookup<T: Primitive>(bundle: &Bundle, key: &str) -> Lookup<T> {
    match bundle.kind_of(key) {
        None => Lookup::Absent,
        Some(kind) if kind != T::KIND => Lookup::Mismatch(kind),
        Some(_) => Lookup::Present(T::read(bundle, key)),
    }
}

/// Returns the value at `key` if it is tagged as `T`, otherwise `None`
///
/// Never fails: a missing key and a value of another kind both give `None`.
///
/// ```
/// use sovran_bundle::{get_or_none, Bundle};
///
/// let mut bundle = Bundle::new();
/// bundle.put_int("count", 3);
///
/// assert_eq!(get_or_none::<i32>(&bundle, "count"), Some(3));
/// assert_eq!(get_or_none::<i64>(&bundle, "count"), None);
/// assert_eq!(get_or_none::<i32>(&bundle, "missing"), None);
/// ```
pub fn get_or_none<T: Primitive>(bundle: &Bundle, key: &str) -> Option<T> {
    match lookup::<T>(bundle, key) {
        Lookup::Present(value) => Some(value),
        Lookup::Absent | Lookup::Mismatch(_) => None,
    }
}

/// Returns the value at `key` if it is tagged as `T`
///
/// # Errors
///
/// - Returns `RequireError::Argument` if the key doesn't exist
/// - Returns `RequireError::State` if the key holds a value of another kind
///
/// ```
/// use sovran_bundle::{require, Bundle, RequireError};
///
/// let mut bundle = Bundle::new();
/// bundle.put_string("name", "sensor");
///
/// assert!(matches!(require::<bool>(&bundle, "missing"), Err(RequireError::Argument { .. })));
/// assert!(matches!(require::<bool>(&bundle, "name"), Err(RequireError::State { .. })));
/// ```
pub fn require<T: Primitive>(bundle: &Bundle, key: &str) -> RequireResult<T> {
    match lookup::<T>(bundle, key) {
        Lookup::Present(value) => Ok(value),
        Lookup::Absent => Err(RequireError::Argument {
            key: key.to_string(),
        }),
        Lookup::Mismatch(found) => Err(RequireError::State {
            key: key.to_string(),
            expected: T::KIND,
            found,
        }),
    }
}

/// Named soft and strict accessors for each primitive kind
///
/// # Examples
///
/// ```
/// use sovran_bundle::{Bundle, BundleExt, RequireError};
///
/// fn main() -> Result<(), RequireError> {
///     let mut bundle = Bundle::new();
///     bundle.put_boolean("enabled", true);
///     bundle.put_double("threshold", 0.25);
///
///     assert!(bundle.require_boolean("enabled")?);
///     assert_eq!(bundle.require_double("threshold")?, 0.25);
///     assert_eq!(bundle.get_float_or_none("threshold"), None);
///
///     match bundle.require_int("retries") {
///         Err(RequireError::Argument { key }) => println!("{} was never set", key),
///         Err(RequireError::State { found, .. }) => println!("retries is a {}", found),
///         Ok(retries) => println!("retries: {}", retries),
///     }
///     Ok(())
/// }
/// ```
pub trait BundleExt {
    fn get_or_none<T: Primitive>(&self, key: &str) -> Option<T>;

    fn require<T: Primitive>(&self, key: &str) -> RequireResult<T>;

    fn get_boolean_or_none(&self, key: &str) -> Option<bool> {
        self.get_or_none(key)
    }

    fn require_boolean(&self, key: &str) -> RequireResult<bool> {
        self.require(key)
    }

    fn get_byte_or_none(&self, key: &str) -> Option<i8> {
        self.get_or_none(key)
    }

    fn require_byte(&self, key: &str) -> RequireResult<i8> {
        self.require(key)
    }

    fn get_char_or_none(&self, key: &str) -> Option<char> {
        self.get_or_none(key)
    }

    fn require_char(&self, key: &str) -> RequireResult<char> {
        self.require(key)
    }

    fn get_double_or_none(&self, key: &str) -> Option<f64> {
        self.get_or_none(key)
    }

    fn require_double(&self, key: &str) -> RequireResult<f64> {
        self.require(key)
    }

    fn get_float_or_none(&self, key: &str) -> Option<f32> {
        self.get_or_none(key)
    }

    fn require_float(&self, key: &str) -> RequireResult<f32> {
        self.require(key)
    }

    fn get_int_or_none(&self, key: &str) -> Option<i32> {
        self.get_or_none(key)
    }

    fn require_int(&self, key: &str) -> RequireResult<i32> {
        self.require(key)
    }

    fn get_long_or_none(&self, key: &str) -> Option<i64> {
        self.get_or_none(key)
    }

    fn require_long(&self, key: &str) -> RequireResult<i64> {
        self.require(key)
    }

    fn get_short_or_none(&self, key: &str) -> Option<i16> {
        self.get_or_none(key)
    }

    fn require_short(&self, key: &str) -> RequireResult<i16> {
        self.require(key)
    }
}

impl BundleExt for Bundle {
    fn get_or_none<T: Primitive>(&self, key: &str) -> Option<T> {
        get_or_none(self, key)
    }

    fn require<T: Primitive>(&self, key: &str) -> RequireResult<T> {
        require(self, key)
    }
}
