//! Opaque carriers for backend-native objects and values.
//!
//! The bridge layer never inspects native types directly; it passes them
//! around type-erased and lets each backend downcast back to its own types.

use discord_bridge_types::TypeTag;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A shared, type-erased reference to a native library object.
///
/// Cloning is cheap. The native object stays owned by the backend session;
/// wrappers only hold an additional reference to it.
#[derive(Clone)]
pub struct NativeHandle {
    inner: Arc<dyn Any + Send + Sync>,
    tag: TypeTag,
}

impl NativeHandle {
    /// Wraps a native object.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wraps an already shared native object without copying it.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            inner: value,
            tag: TypeTag::of::<T>(),
        }
    }

    /// Returns the concrete native type.
    pub fn type_tag(&self) -> TypeTag {
        self.tag
    }

    /// Returns the concrete native type name.
    pub fn type_name(&self) -> &'static str {
        self.tag.name()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Returns a typed shared reference to the native object.
    pub fn downcast_arc<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }

    /// Returns true if both handles point at the same native object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }
}

impl fmt::Debug for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeHandle({})", self.tag.name())
    }
}

/// An owned, type-erased native value such as a backend enum constant.
pub struct NativeValue {
    inner: Box<dyn Any + Send + Sync>,
    tag: TypeTag,
}

impl NativeValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Box::new(value),
            tag: TypeTag::of::<T>(),
        }
    }

    /// Returns the concrete type of the wrapped value.
    pub fn type_tag(&self) -> TypeTag {
        self.tag
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Unwraps back to the concrete type, or returns `self` unchanged.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let tag = self.tag;
        match self.inner.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(inner) => Err(Self { inner, tag }),
        }
    }
}

impl fmt::Debug for NativeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeValue({})", self.tag.name())
    }
}
