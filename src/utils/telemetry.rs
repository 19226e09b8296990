// file: src/utils/telemetry.rs
// description: Health reporting and operation timing for the answer pipeline
// reference: Production observability practices

use crate::models::Platform;
use crate::store::DocumentationStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    fn icon(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "✓",
            HealthStatus::Degraded => "⚠",
            HealthStatus::Unhealthy => "✗",
        }
    }
}

/// Health check result for a component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub component: String,
    pub status: HealthStatus,
    pub message: Option<String>,
    pub response_time_ms: u64,
}

impl HealthCheck {
    pub fn healthy(component: &str, message: Option<String>, response_time: Duration) -> Self {
        Self {
            component: component.to_string(),
            status: HealthStatus::Healthy,
            message,
            response_time_ms: response_time.as_millis() as u64,
        }
    }

    pub fn degraded(component: &str, message: String, response_time: Duration) -> Self {
        Self {
            component: component.to_string(),
            status: HealthStatus::Degraded,
            message: Some(message),
            response_time_ms: response_time.as_millis() as u64,
        }
    }

    pub fn unhealthy(component: &str, message: String, response_time: Duration) -> Self {
        Self {
            component: component.to_string(),
            status: HealthStatus::Unhealthy,
            message: Some(message),
            response_time_ms: response_time.as_millis() as u64,
        }
    }
}

/// Document counts per platform. A platform with no documents degrades the
/// store; a failing count makes it unhealthy.
pub async fn check_store(store: &dyn DocumentationStore) -> Vec<HealthCheck> {
    let mut checks = Vec::with_capacity(Platform::ALL.len());

    for platform in Platform::ALL {
        let component = format!("store/{}", platform);
        let start = Instant::now();

        let check = match store.count(Some(platform)).await {
            Ok(0) => HealthCheck::degraded(&component, "no documents loaded".to_string(), start.elapsed()),
            Ok(count) => HealthCheck::healthy(
                &component,
                Some(format!("{} documents", count)),
                start.elapsed(),
            ),
            Err(e) => HealthCheck::unhealthy(&component, e.to_string(), start.elapsed()),
        };

        debug!("Health check {}: {:?}", component, check.status);
        checks.push(check);
    }

    checks
}

/// Overall system health report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub overall_status: HealthStatus,
    pub checks: Vec<HealthCheck>,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthReport {
    pub fn new(checks: Vec<HealthCheck>, version: String) -> Self {
        let overall_status = if checks.iter().any(|c| c.status == HealthStatus::Unhealthy) {
            HealthStatus::Unhealthy
        } else if checks.iter().any(|c| c.status == HealthStatus::Degraded) {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };

        Self {
            overall_status,
            checks,
            timestamp: Utc::now(),
            version,
        }
    }

    pub fn format(&self) -> String {
        let mut output = format!(
            "{} Store Health: {:?}\n\
             Version: {}\n\
             Timestamp: {}\n\n",
            self.overall_status.icon(),
            self.overall_status,
            self.version,
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        );

        for check in &self.checks {
            output.push_str(&format!(
                "{} {} ({:?}) - {}ms",
                check.status.icon(),
                check.component,
                check.status,
                check.response_time_ms
            ));

            if let Some(ref msg) = check.message {
                output.push_str(&format!("\n  {}", msg));
            }

            output.push('\n');
        }

        output
    }
}

/// Operation timer for performance tracking
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        debug!("Starting operation: {}", operation);
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        info!(
            "Completed operation: {} in {:.3}s",
            self.operation,
            elapsed.as_secs_f64()
        );
        elapsed
    }

    pub fn checkpoint(&self, message: &str) {
        debug!(
            "Operation checkpoint [{}]: {} at {:.3}s",
            self.operation,
            message,
            self.elapsed().as_secs_f64()
        );
    }

    pub fn warn_if_slow(&self, threshold: Duration, message: &str) {
        let elapsed = self.elapsed();
        if elapsed > threshold {
            warn!(
                "Slow operation [{}]: {} took {:.2}s (threshold: {:.2}s)",
                self.operation,
                message,
                elapsed.as_secs_f64(),
                threshold.as_secs_f64()
            );
        }
    }
}
