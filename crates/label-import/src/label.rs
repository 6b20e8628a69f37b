//! Labels built from normalized ticket values.

use serde::Serialize;
use std::fmt;

use crate::category::Category;
use crate::collector;
use crate::record::Ticket;
use crate::spec::LabelSpec;

/// A label to import into the target tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    /// Normalized title (e.g. "P3", "closed:fixed")
    pub title: String,
    /// Category the label was extracted for
    pub category: Category,
    /// Display color (hex) of the category
    pub color: &'static str,
}

impl Label {
    /// Create a label, normalizing `raw` through the spec's rename table.
    #[must_use]
    pub fn new(spec: &LabelSpec, raw: &str) -> Self {
        Self {
            title: spec.normalize(raw).to_string(),
            category: spec.category,
            color: spec.color,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Build the labels one spec yields for a ticket.
///
/// Values that normalize to the empty string are dropped. Repeated titles
/// are not filtered here.
#[must_use]
pub fn labels_for(spec: &LabelSpec, ticket: &Ticket) -> Vec<Label> {
    collector::collect(spec, ticket)
        .into_iter()
        .map(|raw| Label::new(spec, raw))
        .filter(|label| !label.title.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{PRIORITY, RESOLUTION, STATUS};

    fn titles(labels: &[Label]) -> Vec<&str> {
        labels.iter().map(|l| l.title.as_str()).collect()
    }

    #[test]
    fn test_new_normalizes_and_carries_category() {
        let label = Label::new(&PRIORITY, "Critical");
        assert_eq!(label.title, "P2");
        assert_eq!(label.category, Category::Priority);
        assert_eq!(label.color, "#D9534F");
        assert_eq!(label.to_string(), "P2");
    }

    #[test]
    fn test_labels_for_keeps_repeats() {
        let ticket = Ticket::with_attributes([("priority", "Major")]).with_change(
            "priority",
            "Minor",
            "Major",
        );
        assert_eq!(titles(&labels_for(&PRIORITY, &ticket)), vec!["P3", "P5", "P3"]);
    }

    #[test]
    fn test_labels_for_drops_empty_values() {
        let ticket = Ticket::with_attributes([("resolution", "")])
            .with_change("resolution", "", "fixed")
            .with_change("resolution", "fixed", "");
        assert_eq!(
            titles(&labels_for(&RESOLUTION, &ticket)),
            vec!["closed:fixed", "closed:fixed"]
        );
    }

    #[test]
    fn test_labels_for_unmapped_value_passes_through() {
        let ticket = Ticket::with_attributes([("status", "needinfo")]);
        let labels = labels_for(&STATUS, &ticket);
        assert_eq!(titles(&labels), vec!["needinfo"]);
        assert_eq!(labels[0].color, "#0033CC");
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(Label::new(&RESOLUTION, "wontfix")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "closed:wontfix",
                "category": "resolution",
                "color": "#7F8C8D",
            })
        );
    }
}
