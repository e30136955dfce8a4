//! Run metrics and traces.
//!
//! Only the verbose classification path collects these; `Classifier::classify`
//! never allocates a trace.

use std::time::Duration;

/// Which rules a single cascade run looked at.
#[derive(Debug, Default, Clone)]
pub struct CascadeTrace {
    /// Rules whose required signals were present, in cascade order.
    pub active: Vec<&'static str>,
    /// Rules whose guard was evaluated.
    pub attempted: Vec<&'static str>,
    /// Rule that produced the record; `None` when the cascade fell back.
    pub fired: Option<&'static str>,
}

/// Timings for one verbose classification.
#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    pub total: Duration,
    pub normalize: Duration,
    pub probe: Duration,
    pub cascade: Duration,
}
