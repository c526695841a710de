//! Streaming console renderer

use crate::output::formatter::{OutcomeFormatter, WAITING_MESSAGE};
use consult_application::{OutputRenderer, SessionSnapshot};
use consult_domain::SessionStatus;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

/// Writes the growing document to a terminal as fragments arrive.
///
/// Every snapshot carries the full document; only the part not yet written
/// is printed, so the output reads as one continuous text. A spinner is shown
/// on stderr until the first fragment arrives.
pub struct ConsoleRenderer<W: Write + Send = io::Stdout> {
    state: Mutex<ConsoleState<W>>,
    show_progress: bool,
}

struct ConsoleState<W> {
    out: W,
    printed: usize,
    spinner: Option<ProgressBar>,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn new(show_progress: bool) -> Self {
        Self::with_writer(io::stdout(), show_progress)
    }
}

impl<W: Write + Send> ConsoleRenderer<W> {
    pub fn with_writer(out: W, show_progress: bool) -> Self {
        Self {
            state: Mutex::new(ConsoleState {
                out,
                printed: 0,
                spinner: None,
            }),
            show_progress,
        }
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        match self.state.into_inner() {
            Ok(state) => state.out,
            Err(poisoned) => poisoned.into_inner().out,
        }
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

impl<W: Write> ConsoleState<W> {
    fn start_spinner(&mut self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(spinner_style());
        pb.set_message(WAITING_MESSAGE);
        pb.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(pb);
    }

    fn stop_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    /// Print the part of `document` not written yet.
    fn write_new(&mut self, document: &str) -> io::Result<()> {
        let fresh = match document.get(self.printed..) {
            Some(rest) => rest,
            None => {
                // Shorter than what we printed: a new document started.
                self.printed = 0;
                document
            }
        };
        if !fresh.is_empty() {
            self.out.write_all(fresh.as_bytes())?;
            self.out.flush()?;
        }
        self.printed = document.len();
        Ok(())
    }

    fn finish(&mut self, snapshot: &SessionSnapshot<'_>) -> io::Result<()> {
        self.write_new(snapshot.document)?;
        if !snapshot.document.is_empty() && !snapshot.document.ends_with('\n') {
            writeln!(self.out)?;
        }
        if let Some(line) = OutcomeFormatter::status_line(snapshot.status, snapshot.failure) {
            writeln!(self.out, "\n{}", line)?;
        }
        self.out.flush()
    }
}

impl<W: Write + Send> OutputRenderer for ConsoleRenderer<W> {
    fn render(&self, snapshot: &SessionSnapshot<'_>) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };

        // Terminal write failures (e.g. a closed pipe) must not disturb the session.
        let _ = match snapshot.status {
            SessionStatus::Requesting => {
                state.stop_spinner();
                state.printed = 0;
                if self.show_progress {
                    state.start_spinner();
                }
                Ok(())
            }
            SessionStatus::Streaming => {
                state.stop_spinner();
                state.write_new(snapshot.document)
            }
            SessionStatus::Complete | SessionStatus::Failed | SessionStatus::Cancelled => {
                state.stop_spinner();
                state.finish(snapshot)
            }
        };
    }
}
