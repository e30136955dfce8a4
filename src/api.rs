use crate::engine::{Cascade, MemoCache, MemoStats, Probe, RunMetrics};
use crate::normalize::normalize_text;
use crate::{Rule, RuleId, StructuredLocation, post_process};
use once_cell::sync::Lazy;
use std::time::Instant;

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::location::rules::get);

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(Classifier::new);

/// Default number of entries kept by each memo cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 250_000;

/// Options for building a [`Classifier`].
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum entries per memo cache. `None` is unbounded, `Some(0)`
    /// disables memoization.
    pub cache_capacity: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Options { cache_capacity: Some(DEFAULT_CACHE_CAPACITY) }
    }
}

/// Snapshot of both memo caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Raw input -> normalized text.
    pub normalized: MemoStats,
    /// Normalized text -> record.
    pub results: MemoStats,
}

/// Extra information returned by [`Classifier::classify_verbose`].
#[derive(Debug, Clone)]
pub struct ClassifyDetails {
    pub normalized: String,
    /// Names of the probe signals that were set.
    pub signals: Vec<&'static str>,
    /// Rules eligible for this input, in cascade order.
    pub active_rules: Vec<&'static str>,
    /// Rules whose guard was evaluated before one fired.
    pub attempted_rules: Vec<&'static str>,
    /// Cascade rule that fired; `None` if the cascade fell through.
    pub fired_rule: Option<&'static str>,
    /// Rule id the cascade assigned, before post-processing.
    pub cascade_rule: RuleId,
    pub metrics: RunMetrics,
}

#[derive(Debug, Clone)]
pub struct ClassifyResultVerbose {
    pub text: String,
    pub location: StructuredLocation,
    pub details: ClassifyDetails,
}

/// Location classifier with its own memo caches.
///
/// Cheap to share: every method takes `&self` and the type is `Send + Sync`.
///
/// # Example
/// ```
/// use epiloc::{Classifier, RuleId};
///
/// let classifier = Classifier::new();
/// let loc = classifier.classify("OSMANIYE- (CORUM) [East 1.5 km]");
/// assert_eq!(loc.province.as_deref(), Some("CORUM"));
/// assert_eq!(loc.rule, RuleId::ProvinceOnlyTrailingDash);
/// ```
#[derive(Debug)]
pub struct Classifier {
    cascade: Cascade<'static>,
    normalized: MemoCache<String>,
    results: MemoCache<StructuredLocation>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self::with_options(&Options::default())
    }

    pub fn with_options(options: &Options) -> Self {
        Classifier {
            cascade: Cascade::new(&DEFAULT_RULES),
            normalized: MemoCache::new("normalized", options.cache_capacity),
            results: MemoCache::new("results", options.cache_capacity),
        }
    }

    /// Memoized [`normalize_text`].
    pub fn normalize(&self, raw: &str) -> String {
        self.normalized.get_or_insert_with(raw, || normalize_text(raw)).0
    }

    /// Classify one raw location string.
    ///
    /// Results are memoized by normalized text, so inputs that differ only in
    /// casing, diacritics or bracketed annotations share one cache entry.
    pub fn classify(&self, raw: &str) -> StructuredLocation {
        let text = self.normalize(raw);
        self.results.get_or_insert_with(&text, || self.cascade.run(&Probe::scan(text.as_str()))).0
    }

    /// Classify without touching the result cache and report how the cascade
    /// got there.
    ///
    /// The record is post-processed as a batch of one, so it matches what
    /// [`Classifier::classify_all`] returns for the same input.
    pub fn classify_verbose(&self, raw: &str) -> ClassifyResultVerbose {
        let start = Instant::now();
        let mut metrics = RunMetrics::default();

        let normalized = normalize_text(raw);
        metrics.normalize = start.elapsed();

        let step = Instant::now();
        let probe = Probe::scan(normalized.as_str());
        metrics.probe = step.elapsed();

        let step = Instant::now();
        let (mut location, trace) = self.cascade.run_traced(&probe);
        metrics.cascade = step.elapsed();

        let cascade_rule = location.rule;
        post_process(std::slice::from_mut(&mut location));
        metrics.total = start.elapsed();

        let details = ClassifyDetails {
            normalized,
            signals: probe.signals.names(),
            active_rules: trace.active,
            attempted_rules: trace.attempted,
            fired_rule: trace.fired,
            cascade_rule,
            metrics,
        };

        ClassifyResultVerbose { text: raw.to_string(), location, details }
    }

    /// Classify a batch, then run [`post_process`] over it. The output is
    /// index-for-index with the input.
    pub fn classify_all<I, S>(&self, raws: I) -> Vec<StructuredLocation>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records: Vec<StructuredLocation> = raws.into_iter().map(|raw| self.classify(raw.as_ref())).collect();
        post_process(&mut records);
        records
    }

    /// Cascade rule names in precedence order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.cascade.compiled().metas.iter().map(|m| m.name).collect()
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats { normalized: self.normalized.stats(), results: self.results.stats() }
    }

    pub fn clear_cache(&self) {
        self.normalized.clear();
        self.results.clear();
    }
}

/// Classify `raw` with the process-wide default [`Classifier`].
///
/// # Example
/// ```
/// use epiloc::{classify, RuleId};
///
/// let loc = classify("MERSIN ACIKLARI-MERSIN (AKDENIZ)");
/// assert_eq!(loc.sea.as_deref(), Some("AKDENIZ"));
/// assert_eq!(loc.province.as_deref(), Some("MERSIN"));
/// assert_eq!(loc.rule, RuleId::ProvinceOffshoreProvinceSea);
/// ```
pub fn classify(raw: &str) -> StructuredLocation {
    DEFAULT_CLASSIFIER.classify(raw)
}

/// Classify and post-process a batch with the process-wide default
/// [`Classifier`].
pub fn classify_all<I, S>(raws: I) -> Vec<StructuredLocation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT_CLASSIFIER.classify_all(raws)
}
