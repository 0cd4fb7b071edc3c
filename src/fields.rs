//! # Field mappings
//! The input to every entry constructor is a [`Fields`] map. BibTeX field keys are
//! case-insensitive, so keys are compared ASCII-case-insensitively: `Author` and `author` refer
//! to the same field.
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use unicase::Ascii;

use crate::value::FieldValue;

/// Build a [`Fields`] map from `key => value` pairs.
///
/// Any value implementing `Into<FieldValue>` is accepted.
/// ```
/// use bibtex_record::{fields, FieldValue};
///
/// let fields = fields! {
///     "author" => "Robert Martin",
///     "year" => 2008,
///     "note" => None::<&str>,
/// };
/// assert_eq!(fields.get("AUTHOR"), Some(&FieldValue::from("Robert Martin")));
/// assert_eq!(fields.len(), 3);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert($key, $value);
        )+
        fields
    }};
}

/// A case-insensitive key, so that owned keys can be looked up with a `&str`.
trait FieldKey {
    fn key(&self) -> Ascii<&str>;
}

impl FieldKey for Ascii<String> {
    fn key(&self) -> Ascii<&str> {
        Ascii::new(self.as_str())
    }
}

impl FieldKey for &str {
    fn key(&self) -> Ascii<&str> {
        Ascii::new(*self)
    }
}

impl<'a> Borrow<dyn FieldKey + 'a> for Ascii<String> {
    fn borrow(&self) -> &(dyn FieldKey + 'a) {
        self
    }
}

impl PartialEq for dyn FieldKey + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for dyn FieldKey + '_ {}

impl PartialOrd for dyn FieldKey + '_ {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for dyn FieldKey + '_ {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// A case-insensitive mapping from field name to raw value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(BTreeMap<Ascii<String>, FieldValue>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the value previously stored under a matching key.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<FieldValue>
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.0.insert(Ascii::new(key.into()), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(&key as &dyn FieldKey)
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.0.remove(&key as &dyn FieldKey)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(&key as &dyn FieldKey)
    }

    /// The field names, in case-insensitive order, with their original casing.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut fields = Self::new();
        fields.extend(iter);
        fields
    }
}

impl<K, V> Extend<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Fields {
    type Item = (String, FieldValue);
    type IntoIter = std::vec::IntoIter<(String, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0
            .into_iter()
            .map(|(k, v)| (k.into_inner(), v))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

struct FieldsVisitor;

impl<'de> Visitor<'de> for FieldsVisitor {
    type Value = Fields;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("fields map")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut fields = Fields::new();

        while let Some((key, value)) = access.next_entry::<String, FieldValue>()? {
            fields.insert(key, value);
        }

        Ok(fields)
    }
}

impl<'de> Deserialize<'de> for Fields {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FieldsVisitor)
    }
}

impl Serialize for Fields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
