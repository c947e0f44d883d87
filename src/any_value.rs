use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A shared, type-erased value for payloads the accessors do not model
#[derive(Clone)]
pub struct AnyValue {
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

impl AnyValue {
    /// Wraps `value`, remembering its type name for error messages and logs
    pub fn new<T: 'static + Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            value: Arc::new(value),
        }
    }

    /// Borrows the payload as `T`, or `None` if it was stored as another type
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Name of the stored type, as reported by `std::any::type_name`
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
