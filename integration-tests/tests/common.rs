use integration_tests::harness::{CapturedEvent, init_test_tracing};
use std::sync::{Arc, Mutex, OnceLock};

static EVENTS: OnceLock<Arc<Mutex<Vec<CapturedEvent>>>> = OnceLock::new();

/// Events recorded by every test in this binary so far.
#[allow(dead_code)]
pub fn captured_events() -> Vec<CapturedEvent> {
    let events = EVENTS.get_or_init(|| {
        let events = Arc::new(Mutex::new(Vec::new()));
        init_test_tracing(events.clone());
        events
    });
    events.lock().unwrap().clone()
}

/// Install the capture layer before the code under test runs.
#[allow(dead_code)]
pub fn capture_events() {
    let _ = captured_events();
}
