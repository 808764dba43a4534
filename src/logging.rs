use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;

use crate::client::ApiRequest;
use crate::error::GraphError;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// Start logging to a timestamped file under the user cache directory.
/// Until this is called every log function is a no-op.
pub fn init_logging() -> std::io::Result<PathBuf> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("stackblitz-graph")
        .join("logs");
    init_logging_in(&log_dir)
}

pub fn init_logging_in(log_dir: &Path) -> std::io::Result<PathBuf> {
    create_dir_all(log_dir)?;

    let log_file = log_dir.join(format!("sbgraph-{}.log", Local::now().format("%Y%m%d-%H%M%S")));

    if let Ok(mut slot) = LOG_FILE.lock() {
        *slot = Some(log_file.clone());
    }

    log_info(&format!("Logging initialized to: {}", log_file.display()));

    Ok(log_file)
}

pub fn log_error(message: &str) {
    log_with_level("ERROR", message);
}

pub fn log_info(message: &str) {
    log_with_level("INFO", message);
}

pub fn log_debug(message: &str) {
    log_with_level("DEBUG", message);
}

/// One DEBUG line per outbound call. Credential header values are masked.
pub fn log_request(operation: &str, request: &ApiRequest) {
    let headers: Vec<String> = request
        .options
        .headers
        .iter()
        .map(|(name, value)| {
            if is_credential_header(name) {
                format!("{}: <redacted>", name)
            } else {
                format!("{}: {}", name, value)
            }
        })
        .collect();

    log_debug(&format!(
        "{}: {} {} query={:?} headers=[{}] body={} timeout={}s",
        operation,
        request.method,
        request.path(),
        request.query,
        headers.join(", "),
        if request.body.is_some() { "json" } else { "none" },
        request.options.timeout.as_secs()
    ));
}

pub fn log_request_failure(operation: &str, request: &ApiRequest, error: &GraphError) {
    log_error(&format!("{}: {} {} failed: {}", operation, request.method, request.path(), error));
}

fn is_credential_header(name: &str) -> bool {
    name.eq_ignore_ascii_case("authorization") || name.eq_ignore_ascii_case("cookie")
}

pub fn log_panic_info(info: &std::panic::PanicHookInfo<'_>) {
    let mut message = String::from("PANIC: ");

    if let Some(location) = info.location() {
        message.push_str(&format!(
            "at {}:{}:{} - ",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    if let Some(s) = info.payload().downcast_ref::<&str>() {
        message.push_str(s);
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        message.push_str(s);
    } else {
        message.push_str("Unknown panic payload");
    }

    log_error(&message);

    let backtrace = std::backtrace::Backtrace::capture();
    log_debug(&format!("Backtrace:\n{}", backtrace));
}

fn log_with_level(level: &str, message: &str) {
    let Some(log_file) = get_log_file_path() else {
        return;
    };

    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_file) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {} - {}", timestamp, level, message);
    }
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|slot| slot.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Method;
    use crate::config::SourceConfig;

    #[test]
    fn test_request_log_masks_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = init_logging_in(dir.path()).unwrap();
        assert_eq!(get_log_file_path(), Some(log_file.clone()));

        let options = SourceConfig::default()
            .with_api_key("sb-secret".to_string())
            .with_header("X-Client", "sbgraph")
            .request_options();
        let request = ApiRequest::new(Method::Delete, ["projects", "p1"], options);
        log_request("deleteProject", &request);
        log_request_failure("deleteProject", &request, &GraphError::ApiError("boom".to_string()));

        let contents = std::fs::read_to_string(&log_file).unwrap();
        assert!(contents.contains("deleteProject: DELETE /projects/p1"));
        assert!(contents.contains("Authorization: <redacted>"));
        assert!(contents.contains("X-Client: sbgraph"));
        assert!(contents.contains("ERROR - deleteProject: DELETE /projects/p1 failed"));
        assert!(!contents.contains("sb-secret"));
    }
}
