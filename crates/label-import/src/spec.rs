//! Per-category label rules.
//!
//! Every category is described by a [`LabelSpec`] value: its display color,
//! the ticket attribute it reads, and a fixed rename table mapping raw Trac
//! values to label titles. Categories differ only in this data, so the
//! pipeline iterates a table of specs instead of dispatching on types.

use crate::category::Category;

/// Extraction and normalization rule for one label category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSpec {
    /// Category this rule produces
    pub category: Category,
    /// Display color (hex) shared by every label of the category
    pub color: &'static str,
    /// Ticket attribute (and changelog field) the values come from
    pub source_field: &'static str,
    /// Raw value -> normalized title; values not listed pass through
    pub renames: &'static [(&'static str, &'static str)],
}

impl LabelSpec {
    /// Normalize a raw value through the rename table.
    ///
    /// Values without an entry are returned unchanged, including the empty
    /// string. Filtering happens in the pipeline, never here.
    #[must_use]
    pub fn normalize<'a>(&self, raw: &'a str) -> &'a str {
        self.renames
            .iter()
            .find(|(from, _)| *from == raw)
            .map_or(raw, |(_, to)| *to)
    }

    /// Look up the rule for a category.
    #[must_use]
    pub const fn for_category(category: Category) -> &'static Self {
        match category {
            Category::Priority => &PRIORITY,
            Category::Resolution => &RESOLUTION,
            Category::Version => &VERSION,
            Category::Component => &COMPONENT,
            Category::Type => &TYPE,
            Category::Status => &STATUS,
        }
    }
}

/// Normalize `raw` with the rule for `category`.
#[must_use]
pub fn normalize(category: Category, raw: &str) -> &str {
    LabelSpec::for_category(category).normalize(raw)
}

pub const PRIORITY: LabelSpec = LabelSpec {
    category: Category::Priority,
    color: "#D9534F",
    source_field: "priority",
    renames: &[
        ("Fatal", "P1"),
        ("Critical", "P2"),
        ("Major", "P3"),
        ("Medium", "P4"),
        ("Minor", "P5"),
        ("Cosmetic", "P6"),
    ],
};

pub const RESOLUTION: LabelSpec = LabelSpec {
    category: Category::Resolution,
    color: "#7F8C8D",
    source_field: "resolution",
    renames: &[
        ("fixed", "closed:fixed"),
        ("invalid", "closed:invalid"),
        ("wontfix", "closed:wontfix"),
        ("duplicate", "closed:duplicate"),
        ("worksforme", "closed:worksforme"),
    ],
};

pub const VERSION: LabelSpec = LabelSpec {
    category: Category::Version,
    color: "#5CB85C",
    source_field: "version",
    renames: &[],
};

pub const COMPONENT: LabelSpec = LabelSpec {
    category: Category::Component,
    color: "#428BCA",
    source_field: "component",
    renames: &[],
};

pub const TYPE: LabelSpec = LabelSpec {
    category: Category::Type,
    color: "#D10069",
    source_field: "type",
    renames: &[],
};

pub const STATUS: LabelSpec = LabelSpec {
    category: Category::Status,
    color: "#0033CC",
    source_field: "status",
    renames: &[
        ("new", "opened"),
        ("assigned", "opened"),
        ("accepted", "opened"),
        ("active", "opened"),
        ("reopened", "opened"),
        ("defer", "closed"),
        ("fixed", "closed"),
        ("review", "closed"),
        ("tested", "closed"),
        ("closed", "closed"),
    ],
};

/// All known rules, in category declaration order.
pub const ALL_SPECS: [&LabelSpec; 6] = [
    &PRIORITY,
    &RESOLUTION,
    &VERSION,
    &COMPONENT,
    &TYPE,
    &STATUS,
];
