use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// Global log file path
static LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Initialize logger and create a session log file under `<dir>/logs`
pub fn init_logger(dir: &Path) -> std::io::Result<PathBuf> {
    let log_dir = dir.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let session_file = log_dir.join(format!(
        "session-{}.log",
        Local::now().format("%Y%m%d-%H%M%S")
    ));

    if let Ok(mut log_path) = LOG_FILE.lock() {
        *log_path = Some(session_file.clone());
    }

    Ok(session_file)
}

/// Log a message to the session file. No-op until `init_logger` ran.
pub fn log_to_file(message: &str) {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let log_line = format!("[{}] {}\n", timestamp, message);

    let Ok(guard) = LOG_FILE.lock() else {
        return;
    };
    if let Some(path) = guard.as_ref() {
        let _ = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut f| f.write_all(log_line.as_bytes()));
    }
}
