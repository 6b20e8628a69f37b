//! Target tracker client seam and bundled clients.

use std::io::Write;
use tracing::info;

use crate::error::ClientError;
use crate::label::Label;

/// Client that persists labels in the target tracker.
///
/// Called once per distinct label. Whether creating an existing label is
/// harmless is up to the implementation.
pub trait LabelClient {
    /// Get the name of this client.
    fn name(&self) -> &'static str;

    /// Create a label in the target tracker.
    fn create_label(&mut self, label: &Label) -> Result<(), ClientError>;
}

impl<C: LabelClient + ?Sized> LabelClient for &mut C {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn create_label(&mut self, label: &Label) -> Result<(), ClientError> {
        (**self).create_label(label)
    }
}

/// Client that only logs the labels it would create.
#[derive(Debug, Default)]
pub struct DryRunClient {
    created: usize,
}

impl DryRunClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of labels seen so far.
    #[must_use]
    pub const fn created(&self) -> usize {
        self.created
    }
}

impl LabelClient for DryRunClient {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    fn create_label(&mut self, label: &Label) -> Result<(), ClientError> {
        self.created += 1;
        info!(
            title = %label.title,
            category = %label.category,
            color = label.color,
            "Would create label"
        );
        Ok(())
    }
}

/// Client that writes each label as one JSON object per line.
#[derive(Debug)]
pub struct JsonLinesClient<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesClient<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> std::io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> LabelClient for JsonLinesClient<W> {
    fn name(&self) -> &'static str {
        "json-lines"
    }

    fn create_label(&mut self, label: &Label) -> Result<(), ClientError> {
        serde_json::to_writer(&mut self.writer, label)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
