//! User-defined params attached to menu entries.
//!
//! Keys are lower-cased on the way in (recursively, including maps nested
//! in arrays), so templates can look params up without caring how the site
//! author capitalised them.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::ParamsError;
use crate::utils::cast;

/// Open string-keyed map of user values with lower-cased keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a param. The key is matched case-insensitively.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(&key.to_lowercase())
    }

    /// Insert a param, lower-casing the key and any nested map keys.
    pub fn insert(&mut self, key: &str, mut value: Value) {
        prepare(&mut value);
        self.0.insert(key.to_lowercase(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<&Value> for Params {
    type Error = ParamsError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        to_params_and_prepare(value)
    }
}

/// Convert an arbitrary value into [`Params`].
///
/// Maps convert and `null` is empty; every other shape is an error naming
/// the shape.
pub fn to_params_and_prepare(value: &Value) -> Result<Params, ParamsError> {
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Params::new()),
        _ => return Err(ParamsError::NotAMap(cast::kind(value))),
    };

    let mut params = Params::new();
    for (key, value) in map {
        params.insert(key, value.clone());
    }
    Ok(params)
}

fn prepare(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let lowered: Map<String, Value> = std::mem::take(map)
                .into_iter()
                .map(|(k, mut v)| {
                    prepare(&mut v);
                    (k.to_lowercase(), v)
                })
                .collect();
            *map = lowered;
        }
        Value::Array(items) => items.iter_mut().for_each(prepare),
        _ => {}
    }
}
