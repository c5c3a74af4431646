//! Logging setup
//!
//! Quiet by default so command output stays readable; `--log-level`
//! or `VERANDA_LOG` raises verbosity, `--log-dir` adds a daily
//! rolling file.

use std::path::Path;

use tracing_subscriber::EnvFilter;

pub fn init(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_new(log_level.unwrap_or("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "veranda");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
