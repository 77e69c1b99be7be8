// Start of file: /src/exceptions/report.rs

// * Decides which exceptions reach the error log, and writes them there.

use std::collections::HashSet;

use tracing::error;

use crate::exceptions::exception::{AppException, ExceptionKind};

/// Kinds raised as part of normal request flow; they are answered, never logged.
pub const DONT_REPORT: &[ExceptionKind] = &[
    ExceptionKind::Unauthenticated,
    ExceptionKind::Unauthorized,
    ExceptionKind::Http,
    ExceptionKind::ModelNotFound,
    ExceptionKind::TokenMismatch,
    ExceptionKind::Validation,
    ExceptionKind::UnsupportedImage,
    ExceptionKind::OAuthServer,
    ExceptionKind::InvalidJson,
];

/// Sink for reportable exceptions.
pub trait Reporter: Send + Sync + 'static {
    fn report(&self, exception: &AppException);
}

/// Writes reportable exceptions to the `tracing` error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, exception: &AppException) {
        match exception {
            AppException::Unclassified(source) => {
                error!(kind = %exception.kind(), error = ?source, "Unhandled exception: {:#}", source);
            }
            other => {
                error!(kind = %other.kind(), error = ?other, "Unhandled exception: {}", other);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportPolicy {
    dont_report: HashSet<ExceptionKind>,
}

impl ReportPolicy {
    pub fn new(dont_report: impl IntoIterator<Item = ExceptionKind>) -> Self {
        Self {
            dont_report: dont_report.into_iter().collect(),
        }
    }

    pub fn should_report(&self, exception: &AppException) -> bool {
        !self.dont_report.contains(&exception.kind())
    }
}

impl Default for ReportPolicy {
    fn default() -> Self {
        Self::new(DONT_REPORT.iter().copied())
    }
}


// End of file: /src/exceptions/report.rs
