//! Logging setup.
//!
//! Two layers share one registry:
//! - console: INFO records only, bare message, coloured by event category;
//! - file: everything else down to DEBUG, timestamped, written through a size-rotated file.

use anyhow::{Context, Result};
use goosino_execution::casino::logging;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Size at which the log file is rotated.
pub const MAX_LOG_BYTES: u64 = 5 * 1024 * 1024;
/// Rotated files kept next to the live one (`sim.log.1` is the newest).
pub const LOG_BACKUPS: usize = 5;

const RESET: &str = "\x1b[0m";

/// Install the console and file layers as the global subscriber.
pub fn init(log_file: &Path) -> Result<()> {
    let writer = RotatingFileWriter::open(log_file, MAX_LOG_BYTES, LOG_BACKUPS)
        .with_context(|| format!("Could not open log file {}", log_file.display()))?;
    let ansi = io::stdout().is_terminal();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(ConsoleFormat { ansi })
                .with_writer(io::stdout)
                .with_filter(filter_fn(is_console_record)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(FileFormat)
                .with_ansi(false)
                .with_writer(Mutex::new(writer))
                .with_filter(filter_fn(is_file_record)),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}

pub fn is_console_record(metadata: &Metadata<'_>) -> bool {
    *metadata.level() == Level::INFO
}

pub fn is_file_record(metadata: &Metadata<'_>) -> bool {
    let level = *metadata.level();
    level != Level::INFO && level <= Level::DEBUG
}

/// ANSI colour code for an event category.
pub fn color_for(target: &str) -> Option<&'static str> {
    match target {
        logging::BET => Some("34"),
        logging::WHEEL => Some("33"),
        logging::WIN => Some("32"),
        logging::LOSS => Some("31"),
        logging::GOOSE => Some("35"),
        logging::ENTITY => Some("36"),
        logging::KILL => Some("1;31"),
        _ => None,
    }
}

/// Message-only console lines.
pub struct ConsoleFormat {
    pub ansi: bool,
}

impl<S, N> FormatEvent<S, N> for ConsoleFormat
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
        let color = if self.ansi {
            color_for(event.metadata().target())
        } else {
            None
        };
        if let Some(code) = color {
            write!(writer, "\x1b[{code}m")?;
        }
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        if color.is_some() {
            writer.write_str(RESET)?;
        }
        writeln!(writer)
    }
}

/// `[2024-01-01 12:00:00] LEVEL: message` lines.
pub struct FileFormat;

impl<S, N> FormatEvent<S, N> for FileFormat
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
        write!(
            writer,
            "[{}] {}: ",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Append-only file that moves itself aside once it would grow past `max_bytes`.
///
/// On rotation `path.N` becomes `path.N+1` (the oldest is dropped), the live file becomes
/// `path.1`, and writing continues in a fresh file.
#[derive(Debug)]
pub struct RotatingFileWriter {
    path: PathBuf,
    file: File,
    written: u64,
    max_bytes: u64,
    backups: usize,
}

impl RotatingFileWriter {
    pub fn open(path: &Path, max_bytes: u64, backups: usize) -> io::Result<Self> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path: path.to_path_buf(),
            file,
            written,
            max_bytes,
            backups,
        })
    }

    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.backups > 0 {
            for index in (1..self.backups).rev() {
                let from = self.backup_path(index);
                if from.exists() {
                    fs::rename(&from, self.backup_path(index + 1))?;
                }
            }
            fs::rename(&self.path, self.backup_path(1))?;
        }
        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 >= self.max_bytes {
            self.rotate()?;
        }
        let written = self.file.write(buf)?;
        self.written += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tracing::{debug, info, trace, warn};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    // ========================================================================
    // Formatting and routing
    // ========================================================================

    #[test]
    fn test_console_gets_info_only_without_decoration() {
        let buffer = Buffer::default();
        let sink = buffer.clone();
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .event_format(ConsoleFormat { ansi: false })
                .with_writer(move || sink.clone())
                .with_filter(filter_fn(is_console_record)),
        );
        tracing::subscriber::with_default(subscriber, || {
            info!(target: logging::BET, "Player Alex bet 10 on red");
            debug!("hidden debug");
            warn!("hidden warning");
        });
        assert_eq!(buffer.contents(), "Player Alex bet 10 on red\n");
    }

    #[test]
    fn test_console_colours_by_category() {
        let buffer = Buffer::default();
        let sink = buffer.clone();
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .event_format(ConsoleFormat { ansi: true })
                .with_writer(move || sink.clone())
                .with_filter(filter_fn(is_console_record)),
        );
        tracing::subscriber::with_default(subscriber, || {
            info!(target: logging::WIN, "won");
            info!("plain");
        });
        assert_eq!(buffer.contents(), "\x1b[32mwon\x1b[0m\nplain\n");
    }

    #[test]
    fn test_file_gets_everything_but_info() {
        let buffer = Buffer::default();
        let sink = buffer.clone();
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .event_format(FileFormat)
                .with_ansi(false)
                .with_writer(move || sink.clone())
                .with_filter(filter_fn(is_file_record)),
        );
        tracing::subscriber::with_default(subscriber, || {
            info!("console only");
            warn!("Skipping event");
            debug!(event = "bet", "Selected event");
            trace!("too chatty");
        });

        let contents = buffer.contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2, "unexpected output: {contents}");
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] WARN: Skipping event"));
        assert!(lines[1].contains("] DEBUG: Selected event event=\"bet\""));
    }

    #[test]
    fn test_color_table() {
        assert_eq!(color_for(logging::BET), Some("34"));
        assert_eq!(color_for(logging::KILL), Some("1;31"));
        assert_eq!(color_for("goosino_execution::casino"), None);
    }

    // ========================================================================
    // Rotation
    // ========================================================================

    #[test]
    fn test_rotates_past_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.log");
        let mut writer = RotatingFileWriter::open(&path, 32, 2).unwrap();

        writer.write_all(b"first line of twenty\n").unwrap();
        assert!(!writer.backup_path(1).exists());
        writer.write_all(b"second line of twenty\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(
            fs::read_to_string(writer.backup_path(1)).unwrap(),
            "first line of twenty\n"
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "second line of twenty\n");
    }

    #[test]
    fn test_keeps_bounded_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.log");
        let mut writer = RotatingFileWriter::open(&path, 10, 2).unwrap();
        for line in ["aaaaaaaa\n", "bbbbbbbb\n", "cccccccc\n", "dddddddd\n"] {
            writer.write_all(line.as_bytes()).unwrap();
        }
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "dddddddd\n");
        assert_eq!(fs::read_to_string(writer.backup_path(1)).unwrap(), "cccccccc\n");
        assert_eq!(fs::read_to_string(writer.backup_path(2)).unwrap(), "bbbbbbbb\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn test_reopen_appends_and_counts_existing_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sim.log");
        {
            let mut writer = RotatingFileWriter::open(&path, 16, 1).unwrap();
            writer.write_all(b"0123456789\n").unwrap();
        }
        let mut writer = RotatingFileWriter::open(&path, 16, 1).unwrap();
        writer.write_all(b"abcdefghij\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(writer.backup_path(1)).unwrap(), "0123456789\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "abcdefghij\n");
    }
}
