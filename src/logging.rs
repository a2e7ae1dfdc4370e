//! Structured JSONL logging plus human-readable stderr output.
//!
//! - **JSONL to file** (~/.composebook/logs/composebook.jsonl) - one JSON object per line
//! - **Compact to stderr** - for developers watching a terminal
//!
//! # Usage
//!
//! ```rust,ignore
//! use composebook::logging;
//!
//! // Keep the guard alive for the duration of the program
//! let _guard = logging::init();
//!
//! tracing::info!(event_type = "session", action = "select", "Story selected");
//! ```
//!
//! # JSONL Output Format
//!
//! ```json
//! {"timestamp":"2026-01-05T10:30:45.123Z","level":"INFO","target":"composebook::storybook::registry","fields":{"event_type":"registry","story_id":"button.primary","message":"Story registered"}}
//! ```

use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::OnceLock;

use parking_lot::Mutex;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "composebook.jsonl";
const MAX_LOG_LINES: usize = 50;

static LOG_BUFFER: OnceLock<Mutex<VecDeque<String>>> = OnceLock::new();

/// Guard that must be kept alive for the duration of the program.
/// Dropping it flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the dual-output logging system.
///
/// When the log file cannot be opened only the stderr layer is installed.
pub fn init() -> LoggingGuard {
    let log_dir = get_log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }
    let log_path = log_dir.join(LOG_FILE_NAME);

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file: {}", e);
            None
        }
    };

    let (json_layer, file_guard) = match file {
        Some(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // Default to info, RUST_LOG overrides
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init();
    if let Err(e) = installed {
        eprintln!("[LOGGING] Subscriber already installed: {}", e);
    }

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Log directory (~/.composebook/logs/), falling back to the temp dir
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".composebook").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("composebook-logs"))
}

/// Path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}

fn buffer() -> &'static Mutex<VecDeque<String>> {
    LOG_BUFFER.get_or_init(|| Mutex::new(VecDeque::with_capacity(MAX_LOG_LINES)))
}

fn add_to_buffer(category: &str, message: &str) {
    let mut buf = buffer().lock();
    if buf.len() >= MAX_LOG_LINES {
        buf.pop_front();
    }
    buf.push_back(format!("[{}] {}", category, message));
}

/// Log a categorized message and keep it in the in-memory buffer.
///
/// Prefer tracing macros with structured fields where no host log panel
/// needs the line.
pub fn log(category: &str, message: &str) {
    add_to_buffer(category, message);
    tracing::info!(category = category, "{}", message);
}

/// Buffered log lines, oldest first
pub fn get_recent_logs() -> Vec<String> {
    buffer().lock().iter().cloned().collect()
}

/// The last `n` buffered lines, newest first
pub fn get_last_logs(n: usize) -> Vec<String> {
    buffer().lock().iter().rev().take(n).cloned().collect()
}

/// Log a session action (select, reset, theme change) against a story
pub fn log_session_event(story_id: &str, action: &str, details: Option<&str>) {
    let msg = match details {
        Some(d) => format!("{} {} - {}", action, story_id, d),
        None => format!("{} {}", action, story_id),
    };
    add_to_buffer("SESSION", &msg);

    tracing::info!(
        event_type = "session",
        story_id = story_id,
        action = action,
        details = details,
        "{}",
        msg
    );
}

/// Log a control edit, successful or rejected
pub fn log_control_edit(story_id: &str, key: &str, value: &str, accepted: bool) {
    add_to_buffer(
        "CONTROL",
        &format!("{}.{} = {} (accepted={})", story_id, key, value, accepted),
    );

    if accepted {
        tracing::info!(
            event_type = "control_edit",
            story_id = story_id,
            key = key,
            value = value,
            "Control {} set to {}",
            key,
            value
        );
    } else {
        tracing::warn!(
            event_type = "control_edit",
            story_id = story_id,
            key = key,
            value = value,
            "Control {} rejected {}",
            key,
            value
        );
    }
}

pub use tracing;
