//! Best-effort startup performance reporting
//!
//! A report hook receives each metric once. The hook is optional and fenced:
//! if it panics the panic is logged and swallowed so the UI is never affected.

use serde::Serialize;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricName {
    /// Process start until the tree is mounted
    Mount,
    /// Process start until the first frame is painted
    FirstPaint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub name: MetricName,
    pub value_ms: f64,
}

impl Metric {
    pub fn since(name: MetricName, start: Instant) -> Self {
        Self {
            name,
            value_ms: start.elapsed().as_secs_f64() * 1000.0,
        }
    }
}

/// Callback receiving each metric; may borrow from its caller for `'a`
pub type ReportHook<'a> = dyn Fn(&Metric) + 'a;

/// Hook that writes each metric to the log
pub fn log_hook() -> Box<ReportHook<'static>> {
    Box::new(|metric: &Metric| {
        info!(metric = ?metric.name, value_ms = metric.value_ms, "Performance metric");
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

/// Deliver `metric` to `hook`. Returns true if the hook ran to completion.
pub fn report(hook: Option<&ReportHook<'_>>, metric: &Metric) -> bool {
    let Some(hook) = hook else {
        return false;
    };
    match panic::catch_unwind(AssertUnwindSafe(|| hook(metric))) {
        Ok(()) => true,
        Err(payload) => {
            warn!(
                metric = ?metric.name,
                error = panic_message(payload.as_ref()),
                "Performance report hook failed"
            );
            false
        }
    }
}
