//! Build event sinks for the terminal and for NDJSON streams.

use std::cell::RefCell;
use std::io::{self, Write};

use emproj::{BuildEvent, BuildEventSink, Verbosity};

use super::json::{events::BuildProgressEvent, write_event};

/// Icon set for progress lines
#[derive(Debug, Clone, Copy)]
pub struct Icons {
    pub build: &'static str,
    pub ok: &'static str,
    pub fail: &'static str,
}

impl Icons {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                build: "🔨",
                ok: "✓",
                fail: "✗",
            }
        } else {
            Self {
                build: "[BUILD]",
                ok: "[OK]",
                fail: "[FAIL]",
            }
        }
    }
}

/// Human-readable progress on stderr, gated by verbosity
///
/// - Quiet: nothing
/// - Normal: project start and summary
/// - Verbose: one line per compiled unit
/// - Debug: the full compiler command line as well
pub struct ConsoleEventSink<W: Write = io::Stderr> {
    out: RefCell<W>,
    verbosity: Verbosity,
    icons: Icons,
}

impl ConsoleEventSink {
    pub fn stderr(verbosity: Verbosity, unicode: bool) -> Self {
        Self::new(io::stderr(), verbosity, unicode)
    }
}

impl<W: Write> ConsoleEventSink<W> {
    pub fn new(out: W, verbosity: Verbosity, unicode: bool) -> Self {
        Self {
            out: RefCell::new(out),
            verbosity,
            icons: Icons::new(unicode),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn line(&self, args: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.out.borrow_mut(), "{}", args);
    }
}

impl<W: Write> BuildEventSink for ConsoleEventSink<W> {
    fn on_event(&self, event: BuildEvent) {
        if self.verbosity == Verbosity::Quiet {
            return;
        }

        match event {
            BuildEvent::Started {
                project,
                source_dir,
                output_dir,
            } => {
                self.line(format_args!(
                    "{} Building {} with Emscripten",
                    self.icons.build, project
                ));
                if self.verbosity >= Verbosity::Verbose {
                    self.line(format_args!("  Source: {}", source_dir.display()));
                    self.line(format_args!("  Output: {}", output_dir.display()));
                }
            }
            BuildEvent::UnitStarted { command, .. } => {
                if self.verbosity >= Verbosity::Debug {
                    self.line(format_args!("  $ {}", command));
                }
            }
            BuildEvent::UnitCompiled { source, wasm, .. } => {
                if self.verbosity >= Verbosity::Verbose {
                    self.line(format_args!(
                        "  {} {} -> {}",
                        self.icons.ok,
                        source.display(),
                        wasm.display()
                    ));
                }
            }
            BuildEvent::Completed {
                project,
                compiled,
                duration_ms,
            } => {
                self.line(format_args!(
                    "{} {}: compiled {} file{} in {} ms",
                    self.icons.ok,
                    project,
                    compiled,
                    if compiled == 1 { "" } else { "s" },
                    duration_ms
                ));
            }
            BuildEvent::Failed { project, .. } => {
                self.line(format_args!("{} {}: build aborted", self.icons.fail, project));
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }
}

/// NDJSON build events on stdout
pub struct JsonEventSink<W: Write = io::Stdout> {
    out: RefCell<W>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonEventSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> BuildEventSink for JsonEventSink<W> {
    fn on_event(&self, event: BuildEvent) {
        let _ = write_event(
            &mut *self.out.borrow_mut(),
            &BuildProgressEvent::from(&event),
        );
    }
}
