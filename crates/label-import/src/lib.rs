//! Label extraction for Trac to GitLab migrations.
//!
//! This crate turns the categorical metadata of Trac tickets (priority,
//! resolution, component, type, ...) into a deduplicated catalog of labels
//! ready to be created in the target tracker.
//!
//! # Usage
//!
//! ```no_run
//! use label_import::{load_tickets, DryRunClient, LabelPipeline, PipelineConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let tickets = load_tickets("tickets.json")?;
//! let mut pipeline = LabelPipeline::new(PipelineConfig::from_env()?);
//!
//! let catalog = pipeline.collect_labels(&tickets);
//! println!("{} labels", catalog.len());
//!
//! pipeline.create_labels(&tickets, DryRunClient::new())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`LabelSpec`] holds the per-category rule: color, source field and the
//!   rename table applied to raw values
//! - [`collect`] gathers a field's current and historical values
//! - [`LabelSet`] deduplicates labels by title
//! - [`LabelPipeline`] applies the configured specs, caches per-ticket sets
//!   and drives a [`LabelClient`]

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod category;
pub mod client;
pub mod collector;
pub mod config;
pub mod error;
pub mod label;
pub mod pipeline;
pub mod record;
pub mod set;
pub mod spec;

pub use category::Category;
pub use client::{DryRunClient, JsonLinesClient, LabelClient};
pub use collector::collect;
pub use config::PipelineConfig;
pub use error::{ClientError, ConfigError, LabelError, RecordError};
pub use label::{labels_for, Label};
pub use pipeline::LabelPipeline;
pub use record::{
    load_tickets, parse_tickets, read_tickets, ChangeEvent, Ticket, TicketId, Tickets,
};
pub use set::LabelSet;
pub use spec::{normalize, LabelSpec};
