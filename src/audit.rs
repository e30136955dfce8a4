//! Rule distribution audit.
//!
//! After a batch run it is useful to see how often each rule fired and a few
//! inputs that hit it; odd buckets (`PAREN_UNKNOWN`, `FALLBACK_*`) are where
//! vocabulary gaps show up.

use crate::{RuleId, StructuredLocation};
use serde::Serialize;
use std::collections::BTreeMap;

/// One rule's share of a batch.
#[derive(Debug, Clone, Serialize)]
pub struct RuleBucket {
    pub rule: RuleId,
    pub count: usize,
    /// Up to `samples_per_rule` (raw input, record) pairs in input order.
    pub samples: Vec<(String, StructuredLocation)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Audit {
    pub total: usize,
    /// Buckets by descending count; ties keep cascade order.
    pub buckets: Vec<RuleBucket>,
}

impl Audit {
    /// Build an audit from inputs and their records, index for index. Extra
    /// items on either side are ignored.
    pub fn build<S: AsRef<str>>(raws: &[S], records: &[StructuredLocation], samples_per_rule: usize) -> Self {
        let mut by_rule: BTreeMap<RuleId, RuleBucket> = BTreeMap::new();
        let mut total = 0;

        for (raw, record) in raws.iter().zip(records) {
            total += 1;
            let bucket =
                by_rule.entry(record.rule).or_insert_with(|| RuleBucket { rule: record.rule, count: 0, samples: Vec::new() });
            bucket.count += 1;
            if bucket.samples.len() < samples_per_rule {
                bucket.samples.push((raw.as_ref().to_string(), record.clone()));
            }
        }

        let mut buckets: Vec<RuleBucket> = by_rule.into_values().collect();
        // Stable sort keeps the BTreeMap (cascade) order among equal counts.
        buckets.sort_by(|a, b| b.count.cmp(&a.count));

        Audit { total, buckets }
    }

    pub fn count(&self, rule: RuleId) -> usize {
        self.buckets.iter().find(|b| b.rule == rule).map_or(0, |b| b.count)
    }
}
