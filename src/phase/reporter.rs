//! Phase lifecycle notifications and the uniform operation result.

use serde::Serialize;

/// Uniform result of every phase operation.
///
/// Failures carry a message the presentation layer can display directly;
/// successes are silent unless the operation has something to report (e.g.
/// which build projects completed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PhaseResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn ok_with(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Fire-and-forget phase lifecycle notifications for the presentation layer.
///
/// Implementations are infallible by contract: nothing about a phase's
/// outcome may depend on whether a notification was delivered.
pub trait PhaseReporter {
    fn report_start(&self, phase: &str);
    fn report_complete(&self, phase: &str);
    fn report_error(&self, phase: &str, message: &str);
}

impl<T: PhaseReporter + ?Sized> PhaseReporter for &T {
    fn report_start(&self, phase: &str) {
        (**self).report_start(phase);
    }

    fn report_complete(&self, phase: &str) {
        (**self).report_complete(phase);
    }

    fn report_error(&self, phase: &str, message: &str) {
        (**self).report_error(phase, message);
    }
}

/// Default reporter emitting structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl PhaseReporter for TracingReporter {
    fn report_start(&self, phase: &str) {
        tracing::info!(phase, "phase started");
    }

    fn report_complete(&self, phase: &str) {
        tracing::info!(phase, "phase complete");
    }

    fn report_error(&self, phase: &str, message: &str) {
        tracing::error!(phase, error = message, "phase error");
    }
}
