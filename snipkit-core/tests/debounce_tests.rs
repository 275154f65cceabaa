mod common;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use snipkit_core::{DebounceConfig, Debouncer};

fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) + Send + Sync + 'static)
{
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |value| sink.lock().push(value))
}

#[tokio::test(start_paused = true)]
async fn burst_delivers_only_last_argument() {
    common::init_tracing();
    let (seen, callback) = recorder();
    let debouncer = Debouncer::new(Duration::from_millis(100), callback);

    debouncer.call(1);
    tokio::time::sleep(Duration::from_millis(40)).await;
    debouncer.call(2);
    tokio::time::sleep(Duration::from_millis(40)).await;
    debouncer.call(3);
    assert!(debouncer.is_pending());
    assert!(seen.lock().is_empty());

    tokio::time::sleep(Duration::from_millis(150)).await;
    tokio::task::yield_now().await;

    assert_eq!(*seen.lock(), vec![3]);
    assert!(!debouncer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn quiet_periods_separate_invocations() {
    let (seen, callback) = recorder();
    let debouncer = Debouncer::new(Duration::from_millis(50), callback);

    debouncer.call(1);
    tokio::time::sleep(Duration::from_millis(80)).await;
    debouncer.call(2);
    tokio::time::sleep(Duration::from_millis(80)).await;

    assert_eq!(*seen.lock(), vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn cancel_drops_pending_call() {
    let (seen, callback) = recorder();
    let debouncer = Debouncer::new(Duration::from_millis(50), callback);

    debouncer.call(7);
    debouncer.cancel();
    assert!(!debouncer.is_pending());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(seen.lock().is_empty());

    // Cancelling with nothing pending is a no-op.
    debouncer.cancel();
}

#[tokio::test(start_paused = true)]
async fn config_supplies_delay() {
    let (seen, callback) = recorder();
    let config = DebounceConfig { delay_ms: 500 };
    let debouncer = Debouncer::from_config(&config, callback);
    assert_eq!(debouncer.delay(), Duration::from_millis(500));

    debouncer.call(1);
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(seen.lock().is_empty());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(*seen.lock(), vec![1]);
}
