//! Request counters and their Prometheus text exposition.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide routing counters. Lock-free; shared behind `Arc`.
#[derive(Debug, Default)]
pub struct RouteMetrics {
    requests: AtomicU64,
    rejected: AtomicU64,
    failed: AtomicU64,
    routes: AtomicU64,
    recipients: AtomicU64,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub rejected: u64,
    pub failed: u64,
    pub routes: u64,
    pub recipients: u64,
}

impl RouteMetrics {
    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_routed(&self, routes: usize, recipients: usize) {
        self.routes.fetch_add(routes as u64, Ordering::Relaxed);
        self.recipients.fetch_add(recipients as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            routes: self.routes.load(Ordering::Relaxed),
            recipients: self.recipients.load(Ordering::Relaxed),
        }
    }
}

/// Render a snapshot into Prometheus text format.
pub fn render_prometheus(s: &MetricsSnapshot) -> String {
    let counters = [
        ("msgroute_requests_total", "Routing requests received.", s.requests),
        ("msgroute_rejected_total", "Requests rejected with a client error.", s.rejected),
        ("msgroute_failed_total", "Requests failed with a server error.", s.failed),
        ("msgroute_routes_total", "Routes produced.", s.routes),
        ("msgroute_recipients_total", "Recipients routed.", s.recipients),
    ];

    let mut out = String::new();
    for (name, help, value) in counters {
        out.push_str(&format!("# HELP {name} {help}\n"));
        out.push_str(&format!("# TYPE {name} counter\n"));
        out.push_str(&format!("{name} {value}\n"));
    }
    out
}
