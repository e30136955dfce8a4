//! Ordered rule cascade.
//!
//! This is the operational core of the engine: given a `Probe`, walk the
//! compiled rules in order, skip those whose required signals are missing,
//! and let the first rule whose guard accepts the probe produce the record.
//!
//! ```text
//! rule 0   requires ⊆ signals?  ── no ──> skip
//!            │ yes
//!          guard(probe)?         ── no ──> next rule
//!            │ yes
//!          production(probe) ──> StructuredLocation   (stop)
//! ```
//!
//! Nothing after the winning rule is evaluated. When no rule accepts the
//! probe the whole normalized text becomes a `FALLBACK_DETAIL` record.

use super::compiled_rules::{CompiledRules, RuleIdx};
use super::metrics::CascadeTrace;
use super::probe::Probe;
use crate::{Rule, RuleId, StructuredLocation};

/// Evaluates an ordered rule list against probes.
#[derive(Debug)]
pub struct Cascade<'r> {
    compiled: CompiledRules<'r>,
}

impl<'r> Cascade<'r> {
    pub fn new(rules: &'r [Rule]) -> Self {
        Cascade { compiled: CompiledRules::new(rules) }
    }

    pub fn compiled(&self) -> &CompiledRules<'r> {
        &self.compiled
    }

    /// Classify `probe`; never fails.
    pub fn run(&self, probe: &Probe) -> StructuredLocation {
        match self.first_match(probe, |_| {}) {
            Some((idx, location)) => {
                tracing::trace!(
                    target: "epiloc::cascade",
                    rule = self.compiled.metas[idx].name,
                    id = %location.rule,
                    text = %probe.text,
                    "rule fired"
                );
                location
            }
            None => fallback(probe),
        }
    }

    /// Like [`Cascade::run`], also recording which rules were tried.
    pub fn run_traced(&self, probe: &Probe) -> (StructuredLocation, CascadeTrace) {
        let mut trace = CascadeTrace { active: self.compiled.active_names(probe.signals), ..CascadeTrace::default() };

        let location = match self.first_match(probe, |idx| trace.attempted.push(self.compiled.metas[idx].name)) {
            Some((idx, location)) => {
                trace.fired = Some(self.compiled.metas[idx].name);
                location
            }
            None => fallback(probe),
        };

        (location, trace)
    }

    fn first_match(&self, probe: &Probe, mut on_attempt: impl FnMut(RuleIdx)) -> Option<(RuleIdx, StructuredLocation)> {
        for idx in self.compiled.active(probe.signals) {
            on_attempt(idx);
            let rule = self.compiled.rules[idx];
            if (rule.guard)(probe) {
                return Some((idx, (rule.production)(probe)));
            }
        }
        None
    }
}

fn fallback(probe: &Probe) -> StructuredLocation {
    tracing::trace!(target: "epiloc::cascade", text = %probe.text, "no rule fired, falling back to detail");
    StructuredLocation::detail_only(probe.text.clone(), RuleId::FallbackDetail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SignalMask;

    fn two_rules() -> Vec<Rule> {
        vec![
            rule! {
                name: "first",
                requires: SignalMask::TEXT,
                when: |p| p.text.starts_with('A'),
                prod: |_p| { StructuredLocation::new(RuleId::OnlyProvince) },
            },
            rule! {
                name: "second",
                requires: SignalMask::TEXT,
                when: |p| p.text.len() > 1,
                prod: |_p| { StructuredLocation::new(RuleId::OnlyCountry) },
            },
        ]
    }

    #[test]
    fn earlier_rules_win() {
        let rules = two_rules();
        let cascade = Cascade::new(&rules);

        assert_eq!(cascade.run(&Probe::scan("ABC")).rule, RuleId::OnlyProvince);
        assert_eq!(cascade.run(&Probe::scan("BC")).rule, RuleId::OnlyCountry);
    }

    #[test]
    fn exhausted_cascade_falls_back_to_detail() {
        let rules = two_rules();
        let cascade = Cascade::new(&rules);

        let out = cascade.run(&Probe::scan("B"));
        assert_eq!(out.rule, RuleId::FallbackDetail);
        assert_eq!(out.detail.as_deref(), Some("B"));

        let empty: Vec<Rule> = Vec::new();
        let out = Cascade::new(&empty).run(&Probe::scan("X"));
        assert_eq!(out.rule, RuleId::FallbackDetail);
    }

    #[test]
    fn trace_records_attempts_and_winner() {
        let rules = two_rules();
        let cascade = Cascade::new(&rules);

        let (_, trace) = cascade.run_traced(&Probe::scan("BC"));
        assert_eq!(trace.active, vec!["first", "second"]);
        assert_eq!(trace.attempted, vec!["first", "second"]);
        assert_eq!(trace.fired, Some("second"));

        let (_, trace) = cascade.run_traced(&Probe::scan(""));
        assert!(trace.active.is_empty());
        assert_eq!(trace.fired, None);
    }
}
