//! Terminal spinner behind the core `ProgressReporter` port.
//!
//! Each creation stage gets its own spinner on stderr. indicatif stops the
//! ticker thread and restores the cursor when a bar is finished, and the
//! core's `ProgressScope` guarantees `finish` is called on every exit path.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use stackgen_core::application::ports::{ProgressHandle, ProgressOutcome, ProgressReporter};

const TICK: Duration = Duration::from_millis(80);

/// Spinner-based reporter. Draws nothing when hidden.
#[derive(Debug, Clone, Copy)]
pub struct SpinnerReporter {
    visible: bool,
    color: bool,
}

impl SpinnerReporter {
    pub fn new(visible: bool, color: bool) -> Self {
        Self { visible, color }
    }

    fn spinner_style(&self) -> ProgressStyle {
        let template = if self.color {
            "{spinner:.cyan} {msg}"
        } else {
            "{spinner} {msg}"
        };
        ProgressStyle::default_spinner()
            .template(template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl ProgressReporter for SpinnerReporter {
    fn start(&self, message: &str) -> Box<dyn ProgressHandle> {
        let bar = if self.visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(self.spinner_style());
        bar.set_message(format!("{message}..."));
        bar.enable_steady_tick(TICK);

        Box::new(Spinner {
            bar,
            color: self.color,
        })
    }
}

struct Spinner {
    bar: ProgressBar,
    color: bool,
}

impl Spinner {
    fn marker(&self, symbol: &'static str, ok: bool) -> String {
        match (self.color, ok) {
            (false, _) => symbol.to_string(),
            (true, true) => style(symbol).green().bold().to_string(),
            (true, false) => style(symbol).red().bold().to_string(),
        }
    }
}

impl ProgressHandle for Spinner {
    fn finish(&mut self, outcome: ProgressOutcome) {
        let line = match outcome {
            ProgressOutcome::Succeeded(message) => {
                format!("{} {message}", self.marker("\u{2713}", true))
            }
            ProgressOutcome::Failed(message) => {
                format!("{} {message}", self.marker("\u{2717}", false))
            }
            ProgressOutcome::Abandoned => return self.bar.finish_and_clear(),
        };
        // Drop the spinner glyph from the final line.
        if let Ok(plain) = ProgressStyle::with_template("{msg}") {
            self.bar.set_style(plain);
        }
        self.bar.finish_with_message(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackgen_core::application::ports::ProgressScope;

    #[test]
    fn hidden_spinner_finishes_on_every_path() {
        let reporter = SpinnerReporter::new(false, false);

        let ok = ProgressScope::start(&reporter, "Checking requirements");
        ok.succeed("Requirements satisfied");

        let failed = ProgressScope::start(&reporter, "Generating frontend");
        failed.fail("npm install failed");

        // Dropped without a verdict: abandoned, must not panic.
        let _abandoned = ProgressScope::start(&reporter, "Initialising git");
    }

    #[test]
    fn abandoning_a_handle_does_not_panic() {
        let reporter = SpinnerReporter::new(false, true);
        let mut handle = reporter.start("Scaffolding");
        handle.finish(ProgressOutcome::Abandoned);
    }
}
