//! Byte-progress formatting and throttled console readout.

use std::io::Write;
use std::time::{Duration, Instant};

const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Formats a byte count with binary units, e.g. `3.42 MiB`.
pub fn human_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}

const PRINT_INTERVAL: Duration = Duration::from_millis(500);

/// Inline progress line for one transfer, throttled so large files don't
/// flood the console.
pub(crate) struct ProgressLine {
    label: String,
    total: u64,
    received: u64,
    last_print: Option<Instant>,
}

impl ProgressLine {
    pub(crate) fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            total: 0,
            received: 0,
            last_print: None,
        }
    }

    /// Records the declared content length (0 = unknown).
    pub(crate) fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    pub(crate) fn add(&mut self, bytes: u64) {
        self.received += bytes;
        let due = self
            .last_print
            .map_or(true, |t| t.elapsed() >= PRINT_INTERVAL);
        if due {
            self.print();
            self.last_print = Some(Instant::now());
        }
    }

    /// Prints the final state and terminates the line.
    pub(crate) fn finish(&mut self) {
        self.print();
        println!();
    }

    fn print(&self) {
        if self.total > 0 {
            let pct = (self.received as f64 / self.total as f64 * 100.0).min(100.0);
            print!(
                "\r  {}: {} / {} ({:.1}%)",
                self.label,
                human_bytes(self.received),
                human_bytes(self.total),
                pct
            );
        } else {
            print!("\r  {}: {}", self.label, human_bytes(self.received));
        }
        let _ = std::io::stdout().flush();
    }
}
