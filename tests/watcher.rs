//! Hot reload through the config watcher.

use std::time::Duration;

use otelcol_auth_headers::config::watcher::ConfigWatcher;
use otelcol_auth_headers::extension::HeadersSetterConfig;
use tokio::sync::mpsc::UnboundedReceiver;

mod common;

const TWO_HEADERS: &str = r#"
[[header]]
key = "Authorization"
value = "Bearer abc"

[[header]]
key = "X-Tenant"
from_context = "tenant_id"
"#;

const THREE_HEADERS: &str = r#"
[[header]]
key = "Authorization"
value = "Bearer def"

[[header]]
key = "X-Tenant"
from_context = "tenant_id"

[[header]]
key = "X-Source"
value = "collector"
"#;

async fn next_update(updates: &mut UnboundedReceiver<HeadersSetterConfig>) -> HeadersSetterConfig {
    tokio::time::timeout(Duration::from_secs(10), updates.recv())
        .await
        .expect("no reload within timeout")
        .expect("channel closed")
}

#[tokio::test]
async fn test_reload_publishes_each_change_once() {
    let path = common::write_config(
        r#"
        [[header]]
        key = "X-Tenant"
        from_context = "tenant_id"
        "#,
    );

    let (watcher, mut updates) = ConfigWatcher::new(&path);
    let _watcher = watcher.run().unwrap();

    // Rapid rewrites of the same content collapse into one update.
    for _ in 0..5 {
        std::fs::write(&path, TWO_HEADERS).unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    let update = next_update(&mut updates).await;
    assert_eq!(update.headers.len(), 2);
    assert_eq!(update.headers[0].value.as_deref(), Some("Bearer abc"));

    std::fs::write(&path, THREE_HEADERS).unwrap();

    let update = next_update(&mut updates).await;
    assert_eq!(update.headers.len(), 3);
    assert_eq!(update.headers[0].value.as_deref(), Some("Bearer def"));

    // No empty or repeated configuration trails behind.
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(updates.try_recv().is_err());

    common::cleanup(&path);
}
