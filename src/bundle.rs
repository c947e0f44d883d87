use crate::accessor::Primitive;
use crate::any_value::AnyValue;
use crate::value::{BundleValue, Kind};
use std::any::Any;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A mutable, string-keyed container of tagged values
///
/// `Bundle` holds primitives, strings and arbitrary payloads side by side under
/// string keys. Nothing ties a key to a kind: a `put_*` call replaces whatever
/// was stored before. The typed `get_*` getters here are type-committed and
/// fall back to a default on mismatch; use [`BundleExt`](crate::BundleExt) for
/// lookups that report what went wrong.
///
/// `Bundle` does no locking. Share it behind your own synchronization if it
/// must be touched from more than one thread.
///
/// # Examples
///
/// ```
/// use sovran_bundle::{Bundle, Kind};
///
/// let mut bundle = Bundle::new();
/// bundle.put_int("retries", 3);
/// bundle.put_string("name", "sensor");
///
/// assert_eq!(bundle.kind_of("retries"), Some(Kind::Int));
/// assert_eq!(bundle.get_int("retries"), 3);
/// assert_eq!(bundle.get_string("name"), Some("sensor"));
///
/// // Type-committed getters fall back to the default value
/// assert_eq!(bundle.get_long("retries"), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Bundle {
    items: HashMap<String, BundleValue>,
}

impl Bundle {
    /// Creates a new, empty Bundle
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Stores a tagged value, replacing any previous value under `key`
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<BundleValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(previous) = self.items.get(&key) {
            if previous.kind() != value.kind() {
                debug!(
                    key = %key,
                    previous = %previous.kind(),
                    replacement = %value.kind(),
                    "replacing bundle value with a different kind"
                );
            }
        }
        self.items.insert(key, value);
    }

    pub fn put_boolean(&mut self, key: impl Into<String>, value: bool) {
        self.put(key, value);
    }

    pub fn put_byte(&mut self, key: impl Into<String>, value: i8) {
        self.put(key, value);
    }

    pub fn put_char(&mut self, key: impl Into<String>, value: char) {
        self.put(key, value);
    }

    pub fn put_double(&mut self, key: impl Into<String>, value: f64) {
        self.put(key, value);
    }

    pub fn put_float(&mut self, key: impl Into<String>, value: f32) {
        self.put(key, value);
    }

    pub fn put_int(&mut self, key: impl Into<String>, value: i32) {
        self.put(key, value);
    }

    pub fn put_long(&mut self, key: impl Into<String>, value: i64) {
        self.put(key, value);
    }

    pub fn put_short(&mut self, key: impl Into<String>, value: i16) {
        self.put(key, value);
    }

    pub fn put_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.put(key, BundleValue::String(value.into()));
    }

    /// Stores an arbitrary payload under the catch-all kind
    pub fn put_value<T: 'static + Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.put(key, AnyValue::new(value));
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Returns the runtime type tag of the value at `key`, if any
    pub fn kind_of(&self, key: &str) -> Option<Kind> {
        self.items.get(key).map(BundleValue::kind)
    }

    /// Borrows the tagged value at `key` without committing to a kind
    pub fn value(&self, key: &str) -> Option<&BundleValue> {
        self.items.get(key)
    }

    /// Removes a value, returning it if the key was present
    pub fn remove(&mut self, key: &str) -> Option<BundleValue> {
        self.items.remove(key)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns all keys, in no particular order
    pub fn keys(&self) -> Vec<&str> {
        self.items.keys().map(String::as_str).collect()
    }

    pub fn get_boolean(&self, key: &str) -> bool {
        self.committed(key)
    }

    pub fn get_byte(&self, key: &str) -> i8 {
        self.committed(key)
    }

    pub fn get_char(&self, key: &str) -> char {
        self.committed(key)
    }

    pub fn get_double(&self, key: &str) -> f64 {
        self.committed(key)
    }

    pub fn get_float(&self, key: &str) -> f32 {
        self.committed(key)
    }

    pub fn get_int(&self, key: &str) -> i32 {
        self.committed(key)
    }

    pub fn get_long(&self, key: &str) -> i64 {
        self.committed(key)
    }

    pub fn get_short(&self, key: &str) -> i16 {
        self.committed(key)
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.value(key)? {
            BundleValue::String(s) => Some(s.as_str()),
            other => {
                type_warning(key, Kind::String, other.kind());
                None
            }
        }
    }

    /// Gets a catch-all payload by its concrete type
    pub fn get_value<T: 'static>(&self, key: &str) -> Option<&T> {
        match self.value(key)? {
            BundleValue::Other(any) => any.downcast_ref::<T>(),
            _ => None,
        }
    }

    // Missing keys are silent; a stored value of another kind is worth a warning.
    fn committed<T: Primitive>(&self, key: &str) -> T {
        let Some(value) = self.items.get(key) else {
            return T::default();
        };
        match T::from_value(value) {
            Some(v) => v,
            None => {
                type_warning(key, T::KIND, value.kind());
                T::default()
            }
        }
    }
}

fn type_warning(key: &str, expected: Kind, found: Kind) {
    warn!(
        key = %key,
        expected = %expected,
        found = %found,
        "bundle value has unexpected type, returning default"
    );
}

impl<K, V> FromIterator<(K, V)> for Bundle
where
    K: Into<String>,
    V: Into<BundleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bundle = Bundle::new();
        bundle.extend(iter);
        bundle
    }
}

impl<K, V> Extend<(K, V)> for Bundle
where
    K: Into<String>,
    V: Into<BundleValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}
