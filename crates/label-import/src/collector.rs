//! Raw value collection from a ticket's attributes and history.

use crate::record::Ticket;
use crate::spec::LabelSpec;

/// Collect every raw value a ticket's field holds or has held.
///
/// Yields the comma-separated parts of the current attribute (nothing if the
/// attribute is absent), then `oldvalue` and `newvalue` of every changelog
/// event for the field, in changelog order. Duplicates and stale values are
/// kept; the label set deduplicates downstream.
#[must_use]
pub fn collect<'t>(spec: &LabelSpec, ticket: &'t Ticket) -> Vec<&'t str> {
    let current = ticket
        .attribute(spec.source_field)
        .into_iter()
        .flat_map(|value| value.split(','));

    let history = ticket
        .changelog
        .iter()
        .filter(|change| change.field == spec.source_field)
        .flat_map(|change| [change.oldvalue.as_str(), change.newvalue.as_str()]);

    current.chain(history).collect()
}
