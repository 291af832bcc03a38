use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

/// Shape of a watched prop, reduced to what the emptiness rule needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WatchedValue {
    /// No value at all (`None`, JSON `null`, or an unknown prop name).
    Absent,
    /// Anything with a length: lists, strings.
    Sequence { len: usize },
    /// Key/value collections. `length` holds a numeric `length` entry when the
    /// mapping carries one.
    Mapping { keys: usize, length: Option<f64> },
    /// Numbers, booleans and other scalars.
    Primitive,
}

impl WatchedValue {
    /// A value is empty iff it is absent, a zero-length sequence, a mapping
    /// with no keys, or a mapping whose `length` entry is exactly 0.
    ///
    /// The last rule deliberately treats `{"length": 0, ...}` as empty even
    /// when other keys are present. Primitives are never empty.
    pub fn is_empty(&self) -> bool {
        match *self {
            WatchedValue::Absent => true,
            WatchedValue::Sequence { len } => len == 0,
            WatchedValue::Mapping { keys, length } => keys == 0 || length == Some(0.0),
            WatchedValue::Primitive => false,
        }
    }
}

// ── Watch ─────────────────────────────────────────────────────────────────

/// Values that can be observed by a [`LoadingGate`](super::LoadingGate).
pub trait Watch {
    fn watch(&self) -> WatchedValue;
}

impl<T: Watch + ?Sized> Watch for &T {
    fn watch(&self) -> WatchedValue {
        (**self).watch()
    }
}

impl<T: Watch + ?Sized> Watch for Box<T> {
    fn watch(&self) -> WatchedValue {
        (**self).watch()
    }
}

impl<T: Watch> Watch for Option<T> {
    fn watch(&self) -> WatchedValue {
        self.as_ref().map_or(WatchedValue::Absent, Watch::watch)
    }
}

impl<T> Watch for [T] {
    fn watch(&self) -> WatchedValue {
        WatchedValue::Sequence { len: self.len() }
    }
}

impl<T> Watch for Vec<T> {
    fn watch(&self) -> WatchedValue {
        WatchedValue::Sequence { len: self.len() }
    }
}

impl<T> Watch for VecDeque<T> {
    fn watch(&self) -> WatchedValue {
        WatchedValue::Sequence { len: self.len() }
    }
}

impl Watch for str {
    fn watch(&self) -> WatchedValue {
        WatchedValue::Sequence { len: self.len() }
    }
}

impl Watch for String {
    fn watch(&self) -> WatchedValue {
        WatchedValue::Sequence { len: self.len() }
    }
}

impl<K, V, S: BuildHasher> Watch for HashMap<K, V, S> {
    fn watch(&self) -> WatchedValue {
        WatchedValue::Mapping { keys: self.len(), length: None }
    }
}

impl<K, V> Watch for BTreeMap<K, V> {
    fn watch(&self) -> WatchedValue {
        WatchedValue::Mapping { keys: self.len(), length: None }
    }
}

impl Watch for Map<String, Value> {
    fn watch(&self) -> WatchedValue {
        WatchedValue::Mapping {
            keys: self.len(),
            length: self.get("length").and_then(Value::as_f64),
        }
    }
}

impl Watch for Value {
    fn watch(&self) -> WatchedValue {
        match self {
            Value::Null => WatchedValue::Absent,
            Value::Array(items) => items.watch(),
            Value::String(s) => s.watch(),
            Value::Object(map) => map.watch(),
            Value::Bool(_) | Value::Number(_) => WatchedValue::Primitive,
        }
    }
}

macro_rules! impl_watch_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Watch for $t {
                fn watch(&self) -> WatchedValue {
                    WatchedValue::Primitive
                }
            }
        )*
    };
}

impl_watch_primitive!(bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

// ── WatchedProps ──────────────────────────────────────────────────────────

/// Props that expose named fields to a gate.
///
/// Typed props implement this by matching on the name:
///
/// ```rust,ignore
/// impl WatchedProps for FeedProps {
///     fn watched(&self, name: &str) -> WatchedValue {
///         match name {
///             "contacts" => self.contacts.watch(),
///             _ => WatchedValue::Absent,
///         }
///     }
/// }
/// ```
///
/// Unknown names must report [`WatchedValue::Absent`].
pub trait WatchedProps {
    fn watched(&self, name: &str) -> WatchedValue;
}

impl<P: WatchedProps + ?Sized> WatchedProps for &P {
    fn watched(&self, name: &str) -> WatchedValue {
        (**self).watched(name)
    }
}

impl WatchedProps for Map<String, Value> {
    fn watched(&self, name: &str) -> WatchedValue {
        self.get(name).watch()
    }
}

impl WatchedProps for Value {
    fn watched(&self, name: &str) -> WatchedValue {
        self.get(name).watch()
    }
}

impl<V: Watch, S: BuildHasher> WatchedProps for HashMap<String, V, S> {
    fn watched(&self, name: &str) -> WatchedValue {
        self.get(name).watch()
    }
}

impl<V: Watch> WatchedProps for BTreeMap<String, V> {
    fn watched(&self, name: &str) -> WatchedValue {
        self.get(name).watch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty(v: &Value) -> bool {
        v.watch().is_empty()
    }

    // ── JSON shapes ───────────────────────────────────────────────────────

    #[test]
    fn null_and_missing_are_empty() {
        assert!(empty(&Value::Null));
        assert!(json!({ "other": 1 }).watched("contacts").is_empty());
    }

    #[test]
    fn empty_collections_are_empty() {
        assert!(empty(&json!([])));
        assert!(empty(&json!({})));
        assert!(empty(&json!("")));
    }

    #[test]
    fn populated_collections_are_not_empty() {
        assert!(!empty(&json!([1, 2, 3])));
        assert!(!empty(&json!({ "a": 1 })));
        assert!(!empty(&json!("x")));
    }

    #[test]
    fn primitives_are_never_empty() {
        assert!(!empty(&json!(0)));
        assert!(!empty(&json!(false)));
        assert!(!empty(&json!(-1.5)));
    }

    #[test]
    fn mapping_with_zero_length_entry_is_empty() {
        assert!(empty(&json!({ "length": 0 })));
        assert!(empty(&json!({ "length": 0.0, "items": [1] })));
    }

    #[test]
    fn mapping_with_non_numeric_or_nonzero_length_is_not_empty() {
        assert!(!empty(&json!({ "length": "0" })));
        assert!(!empty(&json!({ "length": 2 })));
        assert!(!empty(&json!({ "length": null })));
    }

    // ── Rust shapes ───────────────────────────────────────────────────────

    #[test]
    fn option_vec_and_str() {
        assert!(None::<Vec<u8>>.watch().is_empty());
        assert!(Some(Vec::<u8>::new()).watch().is_empty());
        assert!(!Some(vec![1u8]).watch().is_empty());
        assert!("".watch().is_empty());
        assert!(!String::from("x").watch().is_empty());
    }

    #[test]
    fn maps_report_key_count() {
        let mut m: HashMap<String, u32> = HashMap::new();
        assert_eq!(m.watch(), WatchedValue::Mapping { keys: 0, length: None });
        m.insert("length".into(), 0);
        // Only JSON mappings carry the `length` rule.
        assert!(!m.watch().is_empty());
    }

    #[test]
    fn hashmap_props_lookup_by_name() {
        let mut props: HashMap<String, Vec<u32>> = HashMap::new();
        props.insert("contacts".into(), vec![]);
        assert!(props.watched("contacts").is_empty());
        props.insert("contacts".into(), vec![7]);
        assert!(!props.watched("contacts").is_empty());
        assert_eq!(props.watched("missing"), WatchedValue::Absent);
    }
}
