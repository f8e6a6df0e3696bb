//! Store log bootstrap.
//!
//! Routes the `event=... module=repo` lines emitted by repositories into
//! rotated files under one directory. Lines carry ids and counts only, never
//! titles or descriptions.
//!
//! # Invariants
//! - At most one log sink per process; the first `init_logging` wins.
//! - Repeating `init_logging` with the same level and directory is a no-op.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{info, LevelFilter};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "todo_store";
const ROTATE_AT_BYTES: u64 = 4 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 3;
const STORE_BACKEND: &str = "memory";

static STORE_LOG: OnceCell<StoreLog> = OnceCell::new();

struct StoreLog {
    level: LevelFilter,
    dir: PathBuf,
    handle: LoggerHandle,
}

impl StoreLog {
    fn check_same(&self, level: LevelFilter, dir: &Path) -> Result<(), String> {
        if self.dir != dir {
            return Err(format!(
                "store log already writes to `{}`; refusing `{}`",
                self.dir.display(),
                dir.display()
            ));
        }
        if self.level != level {
            return Err(format!(
                "store log already runs at `{}`; refusing `{}`",
                self.level, level
            ));
        }
        Ok(())
    }
}

/// Starts the store log at `level` (trace|debug|info|warn|error|off) in the
/// absolute directory `log_dir`.
///
/// # Errors
/// - Unknown level, relative directory, or directory creation failure.
/// - A store log is already running with another level or directory.
/// - The `flexi_logger` backend fails to start.
pub fn init_logging(level: &str, log_dir: impl AsRef<Path>) -> Result<(), String> {
    let level: LevelFilter = level
        .trim()
        .parse()
        .map_err(|_| format!("unsupported log level `{}`", level.trim()))?;
    let dir = log_dir.as_ref();
    if !dir.is_absolute() {
        return Err(format!(
            "log directory must be absolute, got `{}`",
            dir.display()
        ));
    }

    if let Some(active) = STORE_LOG.get() {
        return active.check_same(level, dir);
    }
    STORE_LOG
        .get_or_try_init(|| start(level, dir))?
        .check_same(level, dir)
}

/// Level and directory of the running store log, if any.
pub fn logging_status() -> Option<(LevelFilter, PathBuf)> {
    STORE_LOG.get().map(|log| (log.level, log.dir.clone()))
}

/// `Debug` in debug builds, `Info` in release builds.
pub fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Writes buffered log lines to disk. No-op before `init_logging`.
pub fn flush_logs() {
    if let Some(log) = STORE_LOG.get() {
        log.handle.flush();
    }
}

fn start(level: LevelFilter, dir: &Path) -> Result<StoreLog, String> {
    std::fs::create_dir_all(dir)
        .map_err(|err| format!("cannot create log directory `{}`: {err}", dir.display()))?;

    let spec = LogSpecification::builder().default(level).build();
    let handle = Logger::with(spec)
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_BASENAME))
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start store log: {err}"))?;

    info!(
        "event=store_log_init module=core status=ok backend={} level={} version={}",
        STORE_BACKEND,
        level,
        env!("CARGO_PKG_VERSION")
    );

    Ok(StoreLog {
        level,
        dir: dir.to_path_buf(),
        handle,
    })
}
