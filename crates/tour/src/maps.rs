//! Associative containers: insert, lookup, existence check, delete, and
//! literal construction on a `HashMap<String, i64>`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Transcript;

/// A single key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    pub key: String,
    pub value: i64,
}

impl MapEntry {
    pub fn new(key: impl Into<String>, value: i64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Inputs for the maps lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapsInput {
    /// Pairs inserted one at a time into an empty map.
    pub entries: Vec<MapEntry>,
    /// Key looked up and reported by value.
    pub lookup: String,
    /// Key that is not expected to be present; reported by its zero value.
    pub missing: String,
    /// Key removed from the map, then checked for presence.
    pub remove: String,
    /// Pairs used to build a second map in one expression.
    pub literal: Vec<MapEntry>,
}

impl Default for MapsInput {
    fn default() -> Self {
        Self {
            entries: vec![MapEntry::new("k1", 7), MapEntry::new("k2", 13)],
            lookup: "k1".to_string(),
            missing: "k3".to_string(),
            remove: "k2".to_string(),
            literal: vec![MapEntry::new("foo", 1), MapEntry::new("bar", 2)],
        }
    }
}

/// Looks up `key`, returning the zero value and `false` when it is absent.
///
/// Absence is a normal outcome, not an error.
///
/// ```
/// use std::collections::HashMap;
/// use tour::maps::lookup;
///
/// let m = HashMap::from([("k1".to_string(), 7)]);
/// assert_eq!(lookup(&m, "k1"), (7, true));
/// assert_eq!(lookup(&m, "k2"), (0, false));
/// ```
pub fn lookup(map: &HashMap<String, i64>, key: &str) -> (i64, bool) {
    match map.get(key) {
        Some(&value) => (value, true),
        None => (i64::default(), false),
    }
}

/// Renders a map as `map[k:v k:v]` with keys in sorted order.
///
/// `HashMap` iteration order is unspecified; sorting keeps the output stable.
pub fn render(map: &HashMap<String, i64>) -> String {
    let mut pairs: Vec<(&String, &i64)> = map.iter().collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let body = pairs
        .into_iter()
        .map(|(key, value)| format!("{key}:{value}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("map[{body}]")
}

/// Outcome of a single [`lookup`], kept with the key it was made for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyLookup {
    pub key: String,
    pub value: i64,
    pub present: bool,
}

impl KeyLookup {
    fn of(map: &HashMap<String, i64>, key: &str) -> Self {
        let (value, present) = lookup(map, key);
        Self {
            key: key.to_string(),
            value,
            present,
        }
    }
}

/// Result of running the maps lesson.
///
/// Map snapshots are stored pre-rendered so the report serializes with a
/// stable key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapsReport {
    pub input: MapsInput,
    /// Contents after all inserts.
    pub filled: String,
    /// Value found for `input.lookup`.
    pub looked_up: i64,
    /// Zero placeholder returned for `input.missing`.
    pub missing_value: i64,
    /// Full lookup of `input.missing`, value and presence together.
    pub missing: KeyLookup,
    /// Entry count after all inserts.
    pub len_before_remove: usize,
    /// Contents after removing `input.remove`.
    pub after_remove: String,
    /// Entry count after removing `input.remove`.
    pub len_after_remove: usize,
    /// Whether `input.remove` is still present after removal.
    pub removed_present: bool,
    /// Value returned for `input.remove` after removal.
    pub removed_value: i64,
    /// Contents of the map built from `input.literal`.
    pub literal: String,
    /// Entry count of the map built from `input.literal`.
    pub literal_len: usize,
    /// Lookups of every `input.literal` key against the built map.
    pub literal_lookups: Vec<KeyLookup>,
}

impl MapsReport {
    pub fn transcript(&self) -> Transcript {
        let mut out = Transcript::new();
        out.line(format!("map: {}", self.filled));
        out.line(format!("v1: {}", self.looked_up));
        out.line(format!("v3: {}", self.missing_value));
        out.line(format!("len: {}", self.len_before_remove));
        out.line(format!("map: {}", self.after_remove));
        out.line(format!("prs: {}", self.removed_present));
        out.line(format!("map: {}", self.literal));
        out
    }
}

/// Runs the maps lesson.
pub fn run(input: &MapsInput) -> MapsReport {
    let mut m: HashMap<String, i64> = HashMap::new();
    for entry in &input.entries {
        m.insert(entry.key.clone(), entry.value);
    }
    tracing::debug!(entries = m.len(), "map filled");

    let filled = render(&m);
    let (looked_up, _) = lookup(&m, &input.lookup);
    let missing = KeyLookup::of(&m, &input.missing);
    let len_before_remove = m.len();

    let removed = m.remove(&input.remove);
    tracing::debug!(key = %input.remove, removed = removed.is_some(), "map entry removed");

    let after_remove = render(&m);
    let len_after_remove = m.len();
    let (removed_value, removed_present) = lookup(&m, &input.remove);

    let n: HashMap<String, i64> = input
        .literal
        .iter()
        .map(|entry| (entry.key.clone(), entry.value))
        .collect();
    let literal_lookups = input
        .literal
        .iter()
        .map(|entry| KeyLookup::of(&n, &entry.key))
        .collect();

    MapsReport {
        input: input.clone(),
        filled,
        looked_up,
        missing_value: missing.value,
        missing,
        len_before_remove,
        after_remove,
        len_after_remove,
        removed_present,
        removed_value,
        literal: render(&n),
        literal_len: n.len(),
        literal_lookups,
    }
}
