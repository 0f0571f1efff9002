//! Configuration file watcher for hot reload.
//!
//! File events are debounced so an editor's truncate-then-write lands as
//! a single reload. Each reload is converted right away, and a conversion
//! equal to the last one sent is dropped.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify_debouncer_full::notify::{self, RecommendedWatcher, RecursiveMode};
use notify_debouncer_full::{new_debouncer, DebounceEventResult, Debouncer, RecommendedCache};
use tokio::sync::mpsc;

use crate::auth::AuthArguments;
use crate::config::loader::load_config;
use crate::extension::HeadersSetterConfig;

/// Quiet period before a burst of file events is acted on.
pub const DEBOUNCE_TIMEOUT: Duration = Duration::from_millis(250);

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<HeadersSetterConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for converted configurations.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<HeadersSetterConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file. The returned debouncer must be kept alive.
    ///
    /// The file's current contents are the baseline: only configurations
    /// that differ from it are sent.
    pub fn run(self) -> Result<Debouncer<RecommendedWatcher, RecommendedCache>, notify::Error> {
        let tx = self.update_tx;
        let path = self.path.clone();
        let mut last = load_config(&path).ok().map(|args| args.convert());

        let mut debouncer = new_debouncer(DEBOUNCE_TIMEOUT, None, move |res: DebounceEventResult| {
            match res {
                Ok(events) => {
                    if events.iter().any(|e| e.kind.is_modify() || e.kind.is_create()) {
                        if let Some(config) = reload(&path, &mut last) {
                            let _ = tx.send(config);
                        }
                    }
                }
                Err(errors) => {
                    for e in errors {
                        tracing::error!("Watch error: {:?}", e);
                    }
                }
            }
        })?;

        debouncer.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(debouncer)
    }
}

/// Load and convert `path`, returning the result only if it is valid and
/// differs from `last`.
fn reload(path: &Path, last: &mut Option<HeadersSetterConfig>) -> Option<HeadersSetterConfig> {
    tracing::info!("Config file change detected, reloading...");

    let config = match load_config(path) {
        Ok(args) => args.convert(),
        Err(e) => {
            tracing::error!("Failed to reload config: {}. Keeping current configuration.", e);
            return None;
        }
    };

    if last.as_ref() == Some(&config) {
        tracing::debug!("Configuration unchanged, skipping");
        return None;
    }

    *last = Some(config.clone());
    Some(config)
}
