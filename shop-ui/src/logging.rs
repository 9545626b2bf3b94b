//! Process-wide log output.
//!
//! Two sinks share one reloadable level filter: stdout, which can be muted,
//! and an append-only log file that can be attached at any time, even before
//! [`init_default_logging`] runs.

use std::{
    fmt,
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{
        OnceLock, PoisonError, RwLock, RwLockReadGuard,
        atomic::{AtomicBool, Ordering},
    },
};

use anyhow::{Context as _, Result, bail};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    Layer, // for .with_filter() on the stdout layer
    Registry,
    filter::filter_fn,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "info,shop_ui=debug";

static LEVEL: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();
static STDOUT_ENABLED: AtomicBool = AtomicBool::new(true);
static LOG_FILE: RwLock<Option<File>> = RwLock::new(None);

/// `2024-05-01 14:03:07.125  INFO shop_core::calculations::pricing: order priced ...`
struct ShopLogFormat;

fn level_color(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "1;31",
        Level::WARN => "1;33",
        Level::INFO => "1;32",
        Level::DEBUG => "1;34",
        Level::TRACE => "1;35",
    }
}

/// Writes `text`, wrapped in the SGR `code` when the writer accepts ANSI.
fn paint(
    writer: &mut Writer<'_>,
    code: &str,
    text: impl fmt::Display,
) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "\x1b[{code}m{text}\x1b[0m")
    } else {
        write!(writer, "{text}")
    }
}

impl<S, N> FormatEvent<S, N> for ShopLogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        paint(&mut writer, "2", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))?;
        writer.write_char(' ')?;
        paint(
            &mut writer,
            level_color(meta.level()),
            format_args!("{:>5}", meta.level()),
        )?;
        writer.write_char(' ')?;
        paint(&mut writer, "36", meta.target())?;
        writer.write_str(": ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Hands the fmt layer a read guard on [`LOG_FILE`]. Output is dropped while
/// no file is attached.
struct LogFileWriter;

struct LogFileGuard(RwLockReadGuard<'static, Option<File>>);

impl Write for LogFileGuard {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match self.0.as_ref() {
            Some(mut file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.0.as_ref() {
            Some(mut file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for LogFileWriter {
    type Writer = LogFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileGuard(LOG_FILE.read().unwrap_or_else(PoisonError::into_inner))
    }
}

/// Replaces the active log filter.
///
/// Accepts a bare level ("warn", "debug", ...) or any `EnvFilter` directive.
pub fn set_log_level(directives: &str) -> Result<()> {
    let Some(handle) = LEVEL.get() else {
        bail!("logging not yet initialized");
    };
    let filter = EnvFilter::try_new(directives)
        .with_context(|| format!("invalid log filter '{directives}'"))?;
    handle.reload(filter).context("log filter reload failed")
}

/// Mutes or unmutes stdout. The log file is unaffected.
pub fn set_stdout_enabled(enabled: bool) {
    STDOUT_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Starts appending log output to `path`, replacing any file already attached.
/// The parent directory must exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    *LOG_FILE.write().unwrap_or_else(PoisonError::into_inner) = Some(file);
    Ok(())
}

/// Installs the global subscriber. Later calls are no-ops.
///
/// The level comes from `RUST_LOG` when set, otherwise `info,shop_ui=debug`.
/// Stdout is colored only when attached to a terminal.
pub fn init_default_logging() {
    if LEVEL.get().is_some() {
        return;
    }

    let initial =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let (level_layer, level_handle) = reload::Layer::new(initial);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(ShopLogFormat)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(filter_fn(|_| STDOUT_ENABLED.load(Ordering::Relaxed)));

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(ShopLogFormat)
        .with_ansi(false)
        .with_writer(LogFileWriter);

    if tracing_subscriber::registry()
        .with(level_layer)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        let _ = LEVEL.set(level_handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_filter_and_log_file_after_init() {
        init_default_logging();

        assert!(set_log_level("debug").is_ok());
        assert!(set_log_level("shop_ui=verbose").is_err());
        set_stdout_enabled(false);

        let path = std::env::temp_dir().join(format!("shop-ui-test-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);
        enable_file_logging(&path).unwrap();

        tracing::info!(marker = "file-logging-check", "written to file");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("file-logging-check"), "log file was: {contents}");
        assert!(contents.contains(" INFO shop_ui::logging::tests: "));
        assert!(!contents.contains('\x1b'));

        set_stdout_enabled(true);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn enable_file_logging_reports_missing_directory() {
        let path = Path::new("/nonexistent-shop-ui-dir/run.log");

        let err = enable_file_logging(path).unwrap_err();

        assert!(err.to_string().contains("cannot open log file"));
    }

    #[test]
    fn every_level_has_a_color() {
        for level in [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE] {
            assert!(level_color(&level).starts_with("1;"));
        }
    }
}
