//! Daily report rendering
//!
//! Reporters observe the library after each simulated day. The core never
//! formats anything itself; it hands a snapshot and the day's events to a
//! `DayReporter`.

use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::report::{LibraryEvent, LibrarySnapshot};
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{LoanStatus, OutputFormat, SimulationConfig};

/// Observer of post-day library state
pub trait DayReporter {
    /// Report one processed day
    fn report_day(&mut self, snapshot: &LibrarySnapshot, events: &[LibraryEvent]) -> SimulationResult<()>;

    /// Flush any buffered output at the end of a run
    fn finish(&mut self) -> SimulationResult<()> {
        Ok(())
    }
}

/// Human-readable report, one block of sections per day
pub struct TextReporter<W: Write> {
    writer: W,
    show_events: bool,
}

impl<W: Write> fmt::Debug for TextReporter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextReporter").field("show_events", &self.show_events).finish()
    }
}

impl<W: Write> TextReporter<W> {
    /// Create a text reporter writing to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer, show_events: true }
    }

    /// Set whether the day's events are listed before the state sections
    pub fn with_events(mut self, show_events: bool) -> Self {
        self.show_events = show_events;
        self
    }

    /// Consume the reporter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_list(&mut self, heading: &str, items: &[String], empty: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", heading)?;
        if items.is_empty() {
            writeln!(self.writer, " - {}", empty)?;
        }
        for item in items {
            writeln!(self.writer, " - {}", item)?;
        }
        writeln!(self.writer)
    }

    fn write_day(&mut self, snapshot: &LibrarySnapshot, events: &[LibraryEvent]) -> io::Result<()> {
        writeln!(self.writer, "=== Day {} ===", snapshot.day)?;
        writeln!(self.writer)?;

        if self.show_events && !events.is_empty() {
            let lines: Vec<String> = events.iter().map(ToString::to_string).collect();
            self.write_list("Events:", &lines, "")?;
        }

        self.write_list("Available books:", &snapshot.available_books, "No books available")?;

        writeln!(self.writer, "Active readers:")?;
        if snapshot.active_readers.is_empty() {
            writeln!(self.writer, " - No active readers")?;
        }
        for reader in &snapshot.active_readers {
            writeln!(self.writer, " - {} borrowed:", reader.id)?;
            for loan in &reader.loans {
                let marker = match loan.status {
                    LoanStatus::Lost => " - WILL BE LOST",
                    LoanStatus::Late => " - WILL BE LATE",
                    LoanStatus::OnTime => "",
                };
                writeln!(self.writer, "     * {} (due day {}){}", loan.title, loan.return_due_day, marker)?;
            }
        }
        writeln!(self.writer)?;

        self.write_list("Lost books:", &snapshot.lost_books, "No lost books")?;
        self.write_list(
            "Books returned late (all time):",
            &snapshot.late_returned_books,
            "No late returns",
        )
    }
}

impl<W: Write> DayReporter for TextReporter<W> {
    fn report_day(&mut self, snapshot: &LibrarySnapshot, events: &[LibraryEvent]) -> SimulationResult<()> {
        self.write_day(snapshot, events)
            .map_err(|e| SimulationError::report_error(format!("Failed to write day {}: {}", snapshot.day, e)))
    }

    fn finish(&mut self) -> SimulationResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// One JSON line per day
#[derive(Debug, Serialize)]
struct DayRecord<'a> {
    #[serde(flatten)]
    snapshot: &'a LibrarySnapshot,
    events: &'a [LibraryEvent],
}

/// Machine-readable report: each day serialized as one JSON object per line
pub struct JsonLinesReporter<W: Write> {
    writer: W,
}

impl<W: Write> fmt::Debug for JsonLinesReporter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonLinesReporter").finish()
    }
}

impl<W: Write> JsonLinesReporter<W> {
    /// Create a JSON lines reporter writing to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the reporter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DayReporter for JsonLinesReporter<W> {
    fn report_day(&mut self, snapshot: &LibrarySnapshot, events: &[LibraryEvent]) -> SimulationResult<()> {
        let line = serde_json::to_string(&DayRecord { snapshot, events })?;
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn finish(&mut self) -> SimulationResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every snapshot in memory, for callers that inspect a run afterwards
#[derive(Debug, Default)]
pub struct SnapshotCollector {
    /// Snapshots in day order
    pub snapshots: Vec<LibrarySnapshot>,
    /// Events per day, aligned with `snapshots`
    pub events: Vec<Vec<LibraryEvent>>,
}

impl SnapshotCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }
}

impl DayReporter for SnapshotCollector {
    fn report_day(&mut self, snapshot: &LibrarySnapshot, events: &[LibraryEvent]) -> SimulationResult<()> {
        self.snapshots.push(snapshot.clone());
        self.events.push(events.to_vec());
        Ok(())
    }
}

/// Build the reporter selected by the configuration.
///
/// Writes to `report_output` when set, stdout otherwise.
pub fn create_reporter(config: &SimulationConfig) -> SimulationResult<Box<dyn DayReporter>> {
    let format = config
        .get_output_format()
        .map_err(SimulationError::configuration_error)?;

    let writer: Box<dyn Write> = match &config.report_output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SimulationError::report_error(format!("Failed to create report output file '{}': {}", path, e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };

    Ok(match format {
        OutputFormat::Text => Box::new(TextReporter::new(writer).with_events(config.show_events)),
        OutputFormat::Json => Box::new(JsonLinesReporter::new(writer)),
    })
}
