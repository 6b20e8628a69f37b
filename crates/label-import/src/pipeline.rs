//! Label extraction pipeline.
//!
//! [`LabelPipeline`] applies the configured [`LabelSpec`](crate::spec::LabelSpec)
//! rules to each ticket, caches every ticket's [`LabelSet`], merges them into
//! a single catalog and hands each distinct label to a [`LabelClient`].

use std::collections::HashMap;
use tracing::{debug, info};

use crate::client::LabelClient;
use crate::config::PipelineConfig;
use crate::error::LabelError;
use crate::label::labels_for;
use crate::record::{Ticket, TicketId};
use crate::set::LabelSet;

/// Extracts labels from tickets and drives their creation.
#[derive(Debug, Default)]
pub struct LabelPipeline {
    config: PipelineConfig,
    /// Per-ticket label sets, computed once per ticket id
    ticket_labels: HashMap<TicketId, LabelSet>,
}

impl LabelPipeline {
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            ticket_labels: HashMap::new(),
        }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Build the label set for one ticket from every configured category.
    ///
    /// Not cached; see [`collect_labels`](Self::collect_labels).
    #[must_use]
    pub fn ticket_labels(&self, ticket: &Ticket) -> LabelSet {
        Self::extract(&self.config, ticket)
    }

    /// Merge the label sets of all tickets into one catalog.
    ///
    /// Each ticket's set is computed on first sight of its id and reused on
    /// later calls. Tickets are merged in iteration order, so for labels
    /// sharing a title the last ticket's label wins.
    pub fn collect_labels<'a, I>(&mut self, tickets: I) -> LabelSet
    where
        I: IntoIterator<Item = (&'a TicketId, &'a Ticket)>,
        I::IntoIter: ExactSizeIterator,
    {
        let tickets = tickets.into_iter();
        info!(tickets = tickets.len(), "Labels: processing tickets");

        let mut labels = LabelSet::new();
        for (id, ticket) in tickets {
            let config = &self.config;
            let ticket_set = self.ticket_labels.entry(*id).or_insert_with(|| {
                let set = Self::extract(config, ticket);
                debug!(ticket = id, labels = set.len(), "Extracted ticket labels");
                set
            });
            labels.add_many(ticket_set.values().cloned());
        }

        labels
    }

    /// Create every distinct label of the tickets through `client`.
    ///
    /// Calls are issued one at a time in catalog order. The first failure
    /// aborts the remaining calls and is returned. Returns the number of
    /// labels created.
    pub fn create_labels<'a, I, C>(
        &mut self,
        tickets: I,
        mut client: C,
    ) -> Result<usize, LabelError>
    where
        I: IntoIterator<Item = (&'a TicketId, &'a Ticket)>,
        I::IntoIter: ExactSizeIterator,
        C: LabelClient,
    {
        let labels = self.collect_labels(tickets);
        info!(
            labels = labels.len(),
            client = client.name(),
            "Labels: creating labels"
        );

        for label in labels.values() {
            debug!(title = %label.title, category = %label.category, "Creating label");
            client
                .create_label(label)
                .map_err(|source| LabelError::Client {
                    title: label.title.clone(),
                    source,
                })?;
        }

        Ok(labels.len())
    }

    /// Cached label set of a ticket, once it has been collected.
    #[must_use]
    pub fn ticket_label_set(&self, id: TicketId) -> Option<&LabelSet> {
        self.ticket_labels.get(&id)
    }

    fn extract(config: &PipelineConfig, ticket: &Ticket) -> LabelSet {
        let mut labels = LabelSet::new();
        for spec in config.specs() {
            labels.add_many(labels_for(spec, ticket));
        }
        labels
    }
}
