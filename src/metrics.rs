use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Usage counters for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub books_created: Arc<AtomicUsize>,
    pub books_updated: Arc<AtomicUsize>,
    pub books_deleted: Arc<AtomicUsize>,
    pub tasks_completed: Arc<AtomicUsize>,
    pub tasks_rejected: Arc<AtomicUsize>,
    pub notifications_sent: Arc<AtomicUsize>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            books_created: Arc::new(AtomicUsize::new(0)),
            books_updated: Arc::new(AtomicUsize::new(0)),
            books_deleted: Arc::new(AtomicUsize::new(0)),
            tasks_completed: Arc::new(AtomicUsize::new(0)),
            tasks_rejected: Arc::new(AtomicUsize::new(0)),
            notifications_sent: Arc::new(AtomicUsize::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_books_created(&self) {
        self.books_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_books_updated(&self) {
        self.books_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_books_deleted(&self) {
        self.books_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_tasks_completed(&self) {
        self.tasks_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_tasks_rejected(&self) {
        self.tasks_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_notifications_sent(&self) {
        self.notifications_sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            books_created: self.books_created.load(Ordering::Relaxed),
            books_updated: self.books_updated.load(Ordering::Relaxed),
            books_deleted: self.books_deleted.load(Ordering::Relaxed),
            tasks_completed: self.tasks_completed.load(Ordering::Relaxed),
            tasks_rejected: self.tasks_rejected.load(Ordering::Relaxed),
            notifications_sent: self.notifications_sent.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub books_created: usize,
    pub books_updated: usize,
    pub books_deleted: usize,
    pub tasks_completed: usize,
    pub tasks_rejected: usize,
    pub notifications_sent: usize,
    pub uptime_seconds: u64,
}
