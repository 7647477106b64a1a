//! Per-epoch output of the pheromone field.

use super::pheromone::PheromoneField;
use crate::error::AcoError;
use std::fmt::Write as _;
use std::io::Write;

/// Receives the pheromone field at the end of every epoch.
///
/// Called after evaporation and reinforcement. Returning an error aborts
/// the run.
pub trait EpochObserver {
    /// `epoch` is 0-based.
    fn on_epoch(&mut self, epoch: usize, field: &PheromoneField) -> Result<(), AcoError>;
}

/// Discards every epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl EpochObserver for NoopObserver {
    fn on_epoch(&mut self, _epoch: usize, _field: &PheromoneField) -> Result<(), AcoError> {
        Ok(())
    }
}

/// Renders the field as one line: `n * n` values, row-major, separated by
/// single spaces, without a trailing newline.
///
/// Values use the shortest representation that round-trips, so equal
/// fields always render to equal bytes.
pub fn format_field(field: &PheromoneField) -> String {
    let mut line = String::with_capacity(field.values().len() * 8);
    for (i, v) in field.values().iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(line, "{v}");
    }
    line
}

/// Writes one [`format_field`] line per epoch to `W`.
///
/// # Examples
///
/// ```
/// use u_aco::aco::{EpochObserver, PheromoneField, PheromoneLog};
///
/// let mut log = PheromoneLog::new(Vec::new());
/// log.on_epoch(0, &PheromoneField::uniform(2, 0.25)).unwrap();
/// assert_eq!(log.into_inner(), b"0.25 0.25 0.25 0.25\n");
/// ```
#[derive(Debug)]
pub struct PheromoneLog<W: Write> {
    writer: W,
}

impl<W: Write> PheromoneLog<W> {
    /// Logs to `writer`, flushing after every line.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EpochObserver for PheromoneLog<W> {
    fn on_epoch(&mut self, _epoch: usize, field: &PheromoneField) -> Result<(), AcoError> {
        writeln!(self.writer, "{}", format_field(field))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps a copy of the field after every epoch.
#[derive(Debug, Clone, Default)]
pub struct FieldHistory {
    snapshots: Vec<PheromoneField>,
}

impl FieldHistory {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots in epoch order.
    pub fn snapshots(&self) -> &[PheromoneField] {
        &self.snapshots
    }

    /// Consumes the history, returning the snapshots in epoch order.
    pub fn into_snapshots(self) -> Vec<PheromoneField> {
        self.snapshots
    }
}

impl EpochObserver for FieldHistory {
    fn on_epoch(&mut self, _epoch: usize, field: &PheromoneField) -> Result<(), AcoError> {
        self.snapshots.push(field.clone());
        Ok(())
    }
}
