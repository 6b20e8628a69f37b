//! Trac ticket records as consumed by the label pipeline.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;

use crate::error::RecordError;

/// Trac ticket number.
pub type TicketId = u64;

/// Tickets keyed by id, iterated in ascending id order.
pub type Tickets = BTreeMap<TicketId, Ticket>;

/// A Trac ticket: its current attributes and its change history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Field name -> current value (multi-valued fields are comma-joined)
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    /// Field changes, oldest first
    #[serde(default)]
    pub changelog: Vec<ChangeEvent>,
}

/// One field change from a ticket's changelog.
///
/// All three keys are required; an entry missing any of them fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Changed field name
    pub field: String,
    /// Value before the change
    pub oldvalue: String,
    /// Value after the change
    pub newvalue: String,
}

impl Ticket {
    /// Build a ticket from attribute pairs with an empty changelog.
    pub fn with_attributes<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            changelog: Vec::new(),
        }
    }

    /// Append a change event.
    #[must_use]
    pub fn with_change(
        mut self,
        field: impl Into<String>,
        oldvalue: impl Into<String>,
        newvalue: impl Into<String>,
    ) -> Self {
        self.changelog.push(ChangeEvent {
            field: field.into(),
            oldvalue: oldvalue.into(),
            newvalue: newvalue.into(),
        });
        self
    }

    /// Current value of an attribute, if present.
    #[must_use]
    pub fn attribute(&self, field: &str) -> Option<&str> {
        self.attributes.get(field).map(String::as_str)
    }
}

/// Parse a ticket dump (`{"<id>": {"attributes": .., "changelog": ..}}`).
pub fn parse_tickets(json: &str) -> Result<Tickets, RecordError> {
    Ok(serde_json::from_str(json)?)
}

/// Read a ticket dump from any reader.
pub fn read_tickets<R: Read>(reader: R) -> Result<Tickets, RecordError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a ticket dump from a file.
pub fn load_tickets(path: impl AsRef<Path>) -> Result<Tickets, RecordError> {
    let file = std::fs::File::open(path)?;
    read_tickets(std::io::BufReader::new(file))
}
