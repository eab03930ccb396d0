// src/report.rs
//
// Operator-facing output. The fill core reports outcomes through a sink
// trait; rendering is entirely a presentation concern layered here.

use std::io::{self, Write};

use crate::fill::{Outcome, RunResult};

/// Sink for per-field and summary reporting.
/// Frontends implement this; the fill core calls it as the run progresses.
pub trait ReportSink {
    /// Called once at the start with the number of discovered candidates.
    fn begin(&mut self, _total: usize) {}

    /// Called once per candidate, in scan order.
    fn field_done(&mut self, _name: &str, _outcome: &Outcome) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once after the run with the final counts.
    fn finish(&mut self, _result: &RunResult) {}
}

/// A no-op sink you can pass when you don't care.
pub struct NullReport;
impl ReportSink for NullReport {}

/// Line-per-field console report in the upstream console-filler format.
/// `quiet` keeps the summary and reminder but drops per-field lines.
pub struct ConsoleReport<W: Write> {
    out: W,
    quiet: bool,
}

impl ConsoleReport<io::Stdout> {
    pub fn stdout(quiet: bool) -> Self {
        Self { out: io::stdout(), quiet }
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W, quiet: bool) -> Self {
        Self { out, quiet }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleReport<W> {
    fn begin(&mut self, total: usize) {
        let _ = writeln!(self.out, "Found {total} columns on the page");
    }

    fn field_done(&mut self, name: &str, outcome: &Outcome) {
        if self.quiet {
            return;
        }
        let _ = match outcome {
            Outcome::Updated { overwrote: false } => writeln!(self.out, "[OK] {name}"),
            Outcome::Updated { overwrote: true } => {
                writeln!(self.out, "[OK] {name} (overwrote existing description)")
            }
            Outcome::Skipped => writeln!(self.out, "[SKIP] {name} - not in mapping"),
            Outcome::Failed(msg) => writeln!(self.out, "[ERROR] {name} - {msg}"),
        };
    }

    fn log(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{msg}");
    }

    fn finish(&mut self, result: &RunResult) {
        let _ = writeln!(self.out, "\n=== SUMMARY ===");
        let _ = writeln!(self.out, "Updated: {}", result.updated);
        let _ = writeln!(self.out, "Skipped: {}", result.skipped);
        let _ = writeln!(self.out, "Failed:  {}", result.failed);
        let _ = writeln!(self.out, "Total:   {}", result.total);
        let _ = writeln!(
            self.out,
            "\n[IMPORTANT] Nothing has been saved: review the page and click SAVE manually."
        );
    }
}
