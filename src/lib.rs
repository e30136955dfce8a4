extern crate self as epiloc;

use serde::Serialize;
use std::fmt;

#[macro_use]
mod macros;
mod api;
mod audit;
mod engine;
mod normalize;
mod postprocess;
mod rules;
mod vocab;

pub use api::{
    CacheStats, ClassifyDetails, ClassifyResultVerbose, Classifier, DEFAULT_CACHE_CAPACITY, Options, classify,
    classify_all,
};
pub use audit::{Audit, RuleBucket};
pub use engine::{MemoStats, RunMetrics};
pub use normalize::{normalize_sea, normalize_text};
pub use postprocess::post_process;

use crate::engine::Probe;

// --- Output types -----------------------------------------------------------

/// Identifier of the rule that produced a [`StructuredLocation`].
///
/// Variants are listed in cascade order; the two `Fix*` variants are only
/// assigned by [`post_process`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleId {
    Empty,
    OverrideCyprus,
    OverrideBorder,
    ProvinceOnlyTrailingDash,
    ProvinceEqualsProvince,
    DistrictProvince,
    NeighborhoodDistrictProvince,
    LakeNeighborhoodDistrictProvince,
    MultiSegmentProvince,
    ProvinceOffshoreSea,
    DetailSea,
    ProvinceOffshoreProvinceSea,
    DistrictOffshoreProvinceSea,
    FallbackProvinceNotFoundSea,
    NeighborhoodDistrictProvinceOffshoreSea,
    ParenUnknown,
    OnlySea,
    OnlyCountry,
    OnlyProvince,
    OnlyLakeDetail,
    OnlyIslandDistrict,
    FallbackDetail,
    FixIslandDistrictFromDetail,
    FixIslandDetailFromDistrict,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::Empty => "EMPTY",
            RuleId::OverrideCyprus => "OVERRIDE_CYPRUS",
            RuleId::OverrideBorder => "OVERRIDE_BORDER",
            RuleId::ProvinceOnlyTrailingDash => "PROVINCE_ONLY_TRAILING_DASH",
            RuleId::ProvinceEqualsProvince => "PROVINCE_EQUALS_PROVINCE",
            RuleId::DistrictProvince => "DISTRICT_PROVINCE",
            RuleId::NeighborhoodDistrictProvince => "NEIGHBORHOOD_DISTRICT_PROVINCE",
            RuleId::LakeNeighborhoodDistrictProvince => "LAKE_NEIGHBORHOOD_DISTRICT_PROVINCE",
            RuleId::MultiSegmentProvince => "MULTI_SEGMENT_PROVINCE",
            RuleId::ProvinceOffshoreSea => "PROVINCE_OFFSHORE_SEA",
            RuleId::DetailSea => "DETAIL_SEA",
            RuleId::ProvinceOffshoreProvinceSea => "PROVINCE_OFFSHORE_PROVINCE_SEA",
            RuleId::DistrictOffshoreProvinceSea => "DISTRICT_OFFSHORE_PROVINCE_SEA",
            RuleId::FallbackProvinceNotFoundSea => "FALLBACK_PROVINCE_NOT_FOUND_SEA",
            RuleId::NeighborhoodDistrictProvinceOffshoreSea => "NEIGHBORHOOD_DISTRICT_PROVINCE_OFFSHORE_SEA",
            RuleId::ParenUnknown => "PAREN_UNKNOWN",
            RuleId::OnlySea => "ONLY_SEA",
            RuleId::OnlyCountry => "ONLY_COUNTRY",
            RuleId::OnlyProvince => "ONLY_PROVINCE",
            RuleId::OnlyLakeDetail => "ONLY_LAKE_DETAIL",
            RuleId::OnlyIslandDistrict => "ONLY_ISLAND_DISTRICT",
            RuleId::FallbackDetail => "FALLBACK_DETAIL",
            RuleId::FixIslandDistrictFromDetail => "FIX_ISLAND_DISTRICT_FROM_DETAIL",
            RuleId::FixIslandDetailFromDistrict => "FIX_ISLAND_DETAIL_FROM_DISTRICT",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured decomposition of one raw location string.
///
/// Fields are never `Some("")`: the setters below treat an empty value as
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredLocation {
    pub neighborhood: Option<String>,
    pub district: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
    pub sea: Option<String>,
    pub detail: Option<String>,
    /// Rule that produced (or last corrected) this record.
    pub rule: RuleId,
}

impl StructuredLocation {
    /// A record with every field empty, tagged with `rule`.
    pub fn new(rule: RuleId) -> Self {
        StructuredLocation {
            neighborhood: None,
            district: None,
            province: None,
            country: None,
            sea: None,
            detail: None,
            rule,
        }
    }

    /// Shorthand for a record whose only field is `detail`.
    pub fn detail_only(detail: impl Into<String>, rule: RuleId) -> Self {
        Self::new(rule).detail(detail)
    }

    pub fn neighborhood(mut self, value: impl Into<String>) -> Self {
        self.neighborhood = present(value);
        self
    }

    pub fn district(mut self, value: impl Into<String>) -> Self {
        self.district = present(value);
        self
    }

    pub fn province(mut self, value: impl Into<String>) -> Self {
        self.province = present(value);
        self
    }

    pub fn country(mut self, value: impl Into<String>) -> Self {
        self.country = present(value);
        self
    }

    pub fn sea(mut self, value: impl Into<String>) -> Self {
        self.sea = present(value);
        self
    }

    pub fn detail(mut self, value: impl Into<String>) -> Self {
        self.detail = present(value);
        self
    }

    /// Number of primary anchors (`province`, `country`, `sea`) that are set.
    pub fn anchor_count(&self) -> usize {
        [&self.province, &self.country, &self.sea].iter().filter(|f| f.is_some()).count()
    }

    /// True when every geographic field is absent.
    pub fn is_blank(&self) -> bool {
        self.neighborhood.is_none()
            && self.district.is_none()
            && self.province.is_none()
            && self.country.is_none()
            && self.sea.is_none()
            && self.detail.is_none()
    }
}

fn present(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() { None } else { Some(value) }
}

// --- Rules ------------------------------------------------------------------

pub(crate) type Guard = Box<dyn Fn(&Probe) -> bool + Send + Sync>;
pub(crate) type Production = Box<dyn Fn(&Probe) -> StructuredLocation + Send + Sync>;

/// A cascade rule: a name, the probe signals it needs, a guard deciding
/// whether it fires and a production building the record.
///
/// The production is only called after the guard returned `true`, so it may
/// rely on everything the guard checked.
pub(crate) struct Rule {
    pub name: &'static str,
    /// Signals that must all be present on the probe for the guard to run.
    pub requires: engine::SignalMask,
    pub guard: Guard,
    pub production: Production,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("requires", &self.requires)
            .field("guard", &"<function>")
            .field("production", &"<function>")
            .finish()
    }
}
