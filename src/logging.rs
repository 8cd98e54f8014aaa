//! Log setup for the terminal binary.
//!
//! The alternate screen owns stdout and stderr while the program runs, so logs
//! only go to a file. Without `LIFE_LOG_PATH` no subscriber is installed and
//! events are discarded.
//!
//! ```bash
//! LIFE_LOG_PATH=/tmp/life.log RUST_LOG=tui_life_engine=debug cargo run
//! ```

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a file-backed subscriber when `log_path` is set.
///
/// Reads `RUST_LOG`; defaults to `info`.
pub fn init(log_path: Option<&str>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .compact(),
        )
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(())
}

/// Log a failed terminal restore. Returns `true` when the restore succeeded.
pub fn report_restore(result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "failed to restore terminal");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce() -> bool) -> (bool, String) {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let ok = tracing::subscriber::with_default(subscriber, f);
        let text = String::from_utf8_lossy(&out.0.lock().unwrap()).into_owned();
        (ok, text)
    }

    #[test]
    fn failed_restore_is_logged() {
        let (ok, text) = capture(|| report_restore(Err(anyhow::anyhow!("tty gone"))));
        assert!(!ok);
        assert!(text.contains("WARN"), "{text}");
        assert!(text.contains("failed to restore terminal"), "{text}");
        assert!(text.contains("tty gone"), "{text}");
    }

    #[test]
    fn successful_restore_logs_nothing() {
        let (ok, text) = capture(|| report_restore(Ok(())));
        assert!(ok);
        assert!(text.is_empty(), "{text}");
    }

    #[test]
    fn no_log_path_installs_nothing() {
        assert!(init(None).is_ok());
    }
}
