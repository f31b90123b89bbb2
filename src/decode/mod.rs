//! Response body decoding
//!
//! A page body is either a bare JSON array of items or an object wrapping
//! the items under one of several recognized keys. Parsing is strict;
//! item extraction is shape-sniffing, never schema validation.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Envelope keys that may hold a page's items, in priority order
const ITEM_KEYS: [&str; 3] = ["content", "data", "properties"];

/// Decoded top-level structure of a page response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    /// The body is the items
    Items(Vec<Value>),
    /// The items sit under a recognized wrapper key
    Wrapper(Map<String, Value>),
    /// Any other JSON shape; yields no items
    Other(Value),
}

impl Envelope {
    /// Extract the page's items
    ///
    /// An object is sniffed under `content`, `data`, `properties` in that
    /// order; a `null` entry falls through to the next key. A recognized
    /// key holding a non-array yields no items, which ends pagination.
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Envelope::Items(items) => items,
            Envelope::Wrapper(map) => {
                for key in ITEM_KEYS {
                    match map.get(key) {
                        Some(Value::Array(items)) => return items.clone(),
                        Some(Value::Null) | None => {}
                        Some(_) => return Vec::new(),
                    }
                }
                Vec::new()
            }
            Envelope::Other(_) => Vec::new(),
        }
    }
}

/// Parse a page body as JSON
///
/// Called only on 2xx bodies; failure is fatal and never retried.
pub fn parse_envelope(body: &str) -> Result<Envelope> {
    serde_json::from_str(body).map_err(|e| Error::invalid_json(e.to_string()))
}
