//! Logger setup
//!
//! The terminal is busy drawing the game, so log records go to a file.

use std::any::Any;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::panic::{self, Location};
use std::path::Path;

use anyhow::Context;
use env_logger::{Builder, Env, Target};

/// Route `log` output to `path` (appending), `info` and above by default
pub fn init(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                buf.timestamp(),
                record.target(),
                record.level(),
                record.args()
            )
        })
        .try_init()
        .context("installing logger")?;

    log::info!("Logger has been set up.");
    Ok(())
}

/// Send panics to the log file before the default hook prints them.
///
/// The default message lands on the alternate screen, which is gone by the
/// time the terminal is restored.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        log::error!("{}", describe_panic(info.payload(), info.location()));
        log::logger().flush();
        previous(info);
    }));
}

/// One-line description of a panic payload and where it was raised
pub fn describe_panic(payload: &(dyn Any + Send), location: Option<&Location<'_>>) -> String {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string payload"
    };
    match location {
        Some(loc) => format!("Panic at {}:{}: {}", loc.file(), loc.line(), message),
        None => format!("Panic: {}", message),
    }
}
