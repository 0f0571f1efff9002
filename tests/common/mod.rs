//! Shared utilities for integration tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Write `content` to a fresh file under the system temp dir.
pub fn write_config(content: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "otelcol-auth-headers-{}-{}",
        std::process::id(),
        n
    ));
    std::fs::create_dir_all(&dir).unwrap();

    let path = dir.join("headers.toml");
    std::fs::write(&path, content).unwrap();
    path
}

/// Remove a file created by [`write_config`] together with its directory.
pub fn cleanup(path: &PathBuf) {
    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}
