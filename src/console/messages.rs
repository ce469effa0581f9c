//! Key → text message tables.
//!
//! Tables are flat JSON objects. Each game merges its own table over the
//! shared one, and a user-supplied file can be laid over either:
//!
//! ```
//! use parlor::console::Messages;
//!
//! let base = Messages::from_json(r#"{"hello": "Hi {name}!"}"#).unwrap();
//! let overlay = Messages::from_json(r#"{"bye": "See you"}"#).unwrap();
//! let messages = base.merge(overlay);
//!
//! assert_eq!(messages.render("hello", &[("name", &"Ada")]), "Hi Ada!");
//! assert_eq!(messages.get("bye"), "See you");
//! ```

use std::fmt::Display;
use std::path::Path;

use log::warn;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::GameError;

const COMMON: &str = include_str!("../../messages/common.json");

/// Display text looked up by key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Messages {
    table: FxHashMap<String, String>,
}

impl Messages {
    /// Parse a table from a JSON object of strings.
    pub fn from_json(text: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a table from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// The table every game starts from (scoreboard, prompts, farewells).
    pub fn common() -> Result<Self, GameError> {
        Self::from_json(COMMON)
    }

    /// Lay `overlay` over this table; its entries win.
    #[must_use]
    pub fn merge(mut self, overlay: Messages) -> Self {
        self.table.extend(overlay.table);
        self
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether `key` has an entry.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// Look up `key`, falling back to the key itself.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        match self.table.get(key) {
            Some(text) => text,
            None => {
                warn!("no message for key '{key}'");
                key
            }
        }
    }

    /// Look up `key` and substitute `{name}` placeholders.
    ///
    /// One left-to-right pass over the template: substituted values are
    /// never scanned again, and unknown placeholders are kept verbatim.
    pub fn render(&self, key: &str, vars: &[(&str, &dyn Display)]) -> String {
        let template = self.get(key);
        let mut text = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            text.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let var = after.find('}').and_then(|close| {
                let name = &after[..close];
                vars.iter().find(|(n, _)| *n == name).map(|(_, value)| (close, value))
            });

            match var {
                Some((close, value)) => {
                    text.push_str(&value.to_string());
                    rest = &after[close + 1..];
                }
                None => {
                    text.push('{');
                    rest = after;
                }
            }
        }
        text.push_str(rest);
        text
    }

    /// Fail with the first key that has no entry.
    pub fn require(&self, keys: &[&str]) -> Result<(), GameError> {
        match keys.iter().find(|key| !self.contains(key)) {
            Some(missing) => Err(GameError::MissingMessage((*missing).to_string())),
            None => Ok(()),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Messages {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
