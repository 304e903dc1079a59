pub mod actuators;
pub mod constants;
pub mod datasets;
pub mod error;
pub mod joints;
pub mod scene;
pub mod validation;

use std::path::Path;

use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub use error::{ConfigError, Result};
pub use joints::{joint, joint_index, JointGroup, JointSpec};
pub use scene::{resolve_scene_path, task_to_xml, SceneConfig, Task};
pub use validation::{table, try_table, validate, RobotTable};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Console logging to stderr, filtered by `RUST_LOG` (default `info`).
pub fn initialize_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_timer(UtcTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Console logging plus a daily-rolling file under `log_dir`. Keep the
/// returned guard alive or buffered file output is lost.
pub fn initialize_file_and_console_logging(log_dir: &Path) -> eyre::Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(log_dir, "taks-t1.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_timer(UtcTime::new(format_description!(
                    "[hour]:[minute]:[second].[subsecond digits:3]"
                )))
                .with_writer(std::io::stderr),
        )
        .with(
            fmt::layer()
                .with_timer(UtcTime::new(format_description!(
                    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z"
                )))
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to install logger: {}", e))?;

    Ok(guard)
}
