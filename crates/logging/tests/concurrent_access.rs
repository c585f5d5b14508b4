//! Integration tests for sharing one logger across threads.
//!
//! The threshold is relaxed shared state: these tests only rely on values
//! that every thread observes after the writes are joined.

use std::sync::Arc;
use std::thread;

use logging::{Logger, Severity};
use logging_sink::RecordingSink;

/// Verifies contexts on many threads all reach the shared sink.
#[test]
fn contexts_on_threads_share_logger_and_sink() {
    let sink = Arc::new(RecordingSink::new());
    let logger = Arc::new(Logger::with_sink(Arc::clone(&sink)).with_level(Severity::Info));

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let ctx = logger.context(format!("worker-{worker}"));
                for step in 0..10 {
                    ctx.info(&[&step]);
                    ctx.debug(&[&step]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let records = sink.drain();
    assert_eq!(records.len(), 80);
    assert!(records.iter().all(|r| r.arguments[0].starts_with("worker-")));
}

/// Verifies a level written on one thread is visible after join.
#[test]
fn level_set_on_another_thread_is_visible_after_join() {
    let logger = Arc::new(Logger::with_sink(RecordingSink::new()));
    let writer = Arc::clone(&logger);
    thread::spawn(move || writer.set_level(Severity::Error))
        .join()
        .unwrap();
    assert_eq!(logger.level(), Severity::Error);
}
