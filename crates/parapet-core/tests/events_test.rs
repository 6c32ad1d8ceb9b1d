//! Event dispatcher tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use parapet_core::events::{
    EventDispatcher, ScanEventHandler, ScanProgressEvent, ScanStartedEvent,
};

#[derive(Default)]
struct RecordingHandler {
    started: Mutex<Vec<ScanStartedEvent>>,
    progress: Mutex<Vec<ScanProgressEvent>>,
}

impl ScanEventHandler for RecordingHandler {
    fn on_scan_started(&self, event: &ScanStartedEvent) {
        self.started.lock().unwrap().push(event.clone());
    }
    fn on_scan_progress(&self, event: &ScanProgressEvent) {
        self.progress.lock().unwrap().push(event.clone());
    }
}

struct PanickingHandler;

impl ScanEventHandler for PanickingHandler {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {
        panic!("handler bug");
    }
}

struct CountingHandler {
    count: AtomicUsize,
}

impl ScanEventHandler for CountingHandler {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn events_reach_registered_handlers() {
    let handler = Arc::new(RecordingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(handler.clone());

    dispatcher.emit_scan_started(&ScanStartedEvent {
        root: Some(PathBuf::from("/project")),
        file_count: 3,
    });
    dispatcher.emit_scan_progress(&ScanProgressEvent {
        processed: 1,
        total: 3,
    });

    assert_eq!(handler.started.lock().unwrap().len(), 1);
    let progress = handler.progress.lock().unwrap();
    assert_eq!(progress.len(), 1);
    assert_eq!(progress[0].processed, 1);
    assert_eq!(progress[0].total, 3);
}

#[test]
fn empty_dispatcher_is_a_no_op() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_scan_started(&ScanStartedEvent {
        root: None,
        file_count: 0,
    });
}

#[test]
fn panicking_handler_does_not_starve_later_handlers() {
    let counting = Arc::new(CountingHandler {
        count: AtomicUsize::new(0),
    });
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counting.clone());

    dispatcher.emit_scan_started(&ScanStartedEvent {
        root: None,
        file_count: 1,
    });

    assert_eq!(counting.count.load(Ordering::SeqCst), 1);
}
