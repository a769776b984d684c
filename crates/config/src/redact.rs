//! Display-safe configuration listing.
//!
//! Responsibilities:
//! - Derive `ConfigListing` from a snapshot for untrusted viewers (status pages, CLI output).
//! - Mask sensitive values and omit empty ones.
//! - Serialize the listing as an ordered JSON object.
//!
//! Does NOT handle:
//! - Resolving values (see `snapshot`).
//! - Deciding which fields are sensitive (declared in `schema`).
//!
//! Invariants:
//! - Entries appear in schema order.
//! - Fields whose display string is empty (absent, `""`, `"undefined"`) are omitted.
//! - Every non-empty sensitive value is replaced by `REDACTION_MASK`, whatever its
//!   length or content; no prefix, suffix or length hint is emitted.
//! - Listing is a pure read: repeated calls on one snapshot yield identical output.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::constants::REDACTION_MASK;
use crate::snapshot::ConfigSnapshot;

/// Ordered mapping from display key to display string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigListing {
    entries: Vec<(&'static str, String)>,
}

impl ConfigListing {
    /// The display string for `key`, if listed.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entries in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ConfigListing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Build the display-safe listing of `snapshot`.
pub fn list_config(snapshot: &ConfigSnapshot) -> ConfigListing {
    let entries = snapshot
        .iter()
        .filter_map(|(spec, value)| {
            let display = value.display_string();
            if display.is_empty() {
                None
            } else if spec.sensitive {
                Some((spec.key, REDACTION_MASK.to_string()))
            } else {
                Some((spec.key, display))
            }
        })
        .collect();
    ConfigListing { entries }
}
