/// Output writing: payload destination, error reporting, debug timers.
use std::fs;
use std::io::{self, Write};

use crate::payload::PayloadError;

/// Label used in errors when the destination is standard output.
const STDOUT_LABEL: &str = "<stdout>";

/// Output context passed through the build pipeline.
pub struct OutputCtx {
    /// When true, print stage timings and notes to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from the scanned flags' `--debug` state.
    #[must_use]
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Print a one-line diagnostic to stderr when `--debug` is set.
    pub fn note(&self, message: impl AsRef<str>) {
        if self.debug {
            eprintln!("[debug] {}", message.as_ref());
        }
    }
}

// --- Payload output ---

/// Write the encoded payload plus a trailing newline to `out_file`, or to
/// stdout when `out_file` is `None` or empty.
///
/// The file is created or truncated.
///
/// # Errors
///
/// Returns `PayloadError::FileWriteError` on any I/O failure.
pub fn write_payload(
    encoded: &str,
    out_file: Option<&str>,
    ctx: &OutputCtx,
) -> Result<(), PayloadError> {
    match out_file.filter(|p| !p.is_empty()) {
        Some(path) => {
            ctx.note(format!("writing {} bytes to {path}", encoded.len() + 1));
            fs::write(path, format!("{encoded}\n")).map_err(|source| {
                PayloadError::FileWriteError {
                    path: path.to_owned(),
                    source,
                }
            })
        }
        None => {
            ctx.note("writing to stdout");
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_line(&mut out, encoded).map_err(|source| PayloadError::FileWriteError {
                path: STDOUT_LABEL.to_owned(),
                source,
            })
        }
    }
}

fn write_line<W: Write>(out: &mut W, encoded: &str) -> io::Result<()> {
    writeln!(out, "{encoded}")?;
    out.flush()
}

// --- Error output ---

/// Write a human-readable error to stderr.
pub fn write_error(err: &PayloadError) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {err}");
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}
