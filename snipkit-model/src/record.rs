use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use crate::field::FieldValue;

/// A structured value whose fields can be looked up by name.
///
/// Lookups may borrow from the record or build the value on the fly, which
/// is why they hand back a [`Cow`]. A missing field is `None`; a field that
/// is present but null is `Some(FieldValue::Null)`.
pub trait Record {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>>;
}

impl<S: std::hash::BuildHasher> Record for HashMap<String, FieldValue, S> {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl Record for BTreeMap<String, FieldValue> {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Rc<R> {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Arc<R> {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        (**self).field(name)
    }
}

#[cfg(feature = "serde")]
impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        self.get(name).map(|value| Cow::Owned(FieldValue::from(value)))
    }
}

/// Only JSON objects have fields; every other JSON value reports none.
#[cfg(feature = "serde")]
impl Record for serde_json::Value {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        self.as_object().and_then(|map| map.field(name))
    }
}
