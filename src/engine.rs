//! Classification engine.
//!
//! The engine turns one normalized location string into one
//! [`StructuredLocation`](crate::StructuredLocation). It knows nothing about
//! provinces or seas by itself; the location rules live under
//! `src/rules/location/` and are handed to the engine as an ordered `Vec<Rule>`.
//!
//! ## How the parts work together
//!
//! ```text
//! rules (ordered) ──┐
//!                   │  CompiledRules::new            (compiled_rules.rs)
//!                   └──────────────┬──────────────
//!                                  │
//! normalized ── Probe::scan ───────┼─ trailing parenthetical + SignalMask
//!              (probe.rs)          │
//!                                  v
//!                        Cascade::run (cascade.rs)
//!                          - skip rules whose signals are missing
//!                          - first guard returning true wins
//!                          - production builds the record
//!                                  │
//!                                  v
//!                         StructuredLocation
//! ```
//!
//! Unlike a saturation parser there is no fixpoint: exactly one rule fires per
//! input and the rule order *is* the precedence. The last rule of the default
//! set is an unconditional fallback, and the cascade itself falls back to a
//! detail-only record if a custom rule set runs out, so `run` is total.
//!
//! ## Responsibilities by module
//!
//! - `compiled_rules.rs`: `SignalMask` bits and per-rule metadata.
//! - `probe.rs`: one-shot scan of the normalized input (parenthetical split,
//!   signals).
//! - `cascade.rs`: ordered evaluation, tracing.
//! - `memo.rs`: bounded, thread-safe memo cache used by the classifier.
//! - `metrics.rs`: timing and trace data for verbose runs.
//!
//! ## Debugging
//!
//! Fired rules are emitted as `tracing` events at `TRACE` level under the
//! `epiloc::cascade` target.

#[path = "engine/cascade.rs"]
mod cascade;
#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/memo.rs"]
mod memo;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/probe.rs"]
mod probe;

pub use cascade::Cascade;
pub use compiled_rules::SignalMask;
pub use memo::{MemoCache, MemoStats};
pub use metrics::RunMetrics;
pub use probe::Probe;
