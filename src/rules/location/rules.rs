//! The location rule cascade.
//!
//! Order matters: `get()` returns the rules in precedence order and the engine
//! stops at the first guard that accepts the input.
//!
//! | # | rule                    | needs                      |
//! |---|-------------------------|----------------------------|
//! | 1 | empty input             | BLANK                      |
//! | 2 | cyprus override         | CYPRUS                     |
//! | 3 | border override         | BORDER_WORD, COUNTRY_TOKEN |
//! | 4 | province parenthetical  | PAREN_PROVINCE             |
//! | 5 | sea parenthetical       | PAREN_SEA                  |
//! | 6 | unknown parenthetical   | TRAILING_PAREN             |
//! | 7 | bare sea .. bare island | BARE                       |
//! | 8 | fallback detail         | TEXT                       |

use super::helpers::{ends_with_offshore, is_lake_phrase, merge_offshore, split_dash_parts, strip_offshore};
use super::predicates::*;
use crate::engine::{Probe, SignalMask};
use crate::normalize::normalize_sea;
use crate::{Rule, RuleId, StructuredLocation, vocab};

pub fn get() -> Vec<Rule> {
    vec![
        rule! {
            name: "empty input",
            requires: SignalMask::BLANK,
            when: |_p| true,
            prod: |_p| { StructuredLocation::new(RuleId::Empty) },
        },
        // Cyprus names do not follow the district/province grammar at all.
        rule! {
            name: "cyprus override",
            requires: SignalMask::TEXT | SignalMask::CYPRUS,
            when: |_p| true,
            prod: |p| {
                let out = StructuredLocation::new(RuleId::OverrideCyprus).country(vocab::CYPRUS);
                match &p.paren {
                    Some(paren) if paren.names_sea() => out.sea(paren.sea.as_str()),
                    _ => out,
                }
            },
        },
        rule! {
            name: "border override",
            requires: SignalMask::TEXT | SignalMask::BORDER_WORD | SignalMask::COUNTRY_TOKEN,
            when: |_p| true,
            prod: |p| { StructuredLocation::detail_only(p.text.as_str(), RuleId::OverrideBorder) },
        },
        rule! {
            name: "province parenthetical",
            requires: SignalMask::TEXT | SignalMask::PAREN_PROVINCE,
            when: |p| province_paren_has_body(p),
            prod: |p| { province_paren(p) },
        },
        rule! {
            name: "sea parenthetical",
            requires: SignalMask::TEXT | SignalMask::PAREN_SEA,
            when: |p| sea_paren_has_body(p),
            prod: |p| { sea_paren(p) },
        },
        rule! {
            name: "unknown parenthetical",
            requires: SignalMask::TEXT | SignalMask::TRAILING_PAREN,
            when: |_p| true,
            prod: |p| { unknown_paren(p) },
        },
        rule! {
            name: "bare sea",
            requires: SignalMask::TEXT | SignalMask::BARE,
            when: |p| is_bare_sea(p),
            prod: |p| { StructuredLocation::new(RuleId::OnlySea).sea(normalize_sea(&p.text)) },
        },
        rule! {
            name: "bare country",
            requires: SignalMask::TEXT | SignalMask::BARE,
            when: |p| is_bare_country(p),
            prod: |p| { StructuredLocation::new(RuleId::OnlyCountry).country(p.text.as_str()) },
        },
        rule! {
            name: "bare province",
            requires: SignalMask::TEXT | SignalMask::BARE,
            when: |p| is_bare_province(p),
            prod: |p| { StructuredLocation::new(RuleId::OnlyProvince).province(p.text.as_str()) },
        },
        rule! {
            name: "bare lake",
            requires: SignalMask::TEXT | SignalMask::BARE,
            when: |p| is_bare_lake(p),
            prod: |p| { StructuredLocation::detail_only(p.text.as_str(), RuleId::OnlyLakeDetail) },
        },
        rule! {
            name: "bare island district",
            requires: SignalMask::TEXT | SignalMask::BARE,
            when: |p| is_bare_island_district(p),
            prod: |p| { StructuredLocation::new(RuleId::OnlyIslandDistrict).district(p.text.as_str()) },
        },
        rule! {
            name: "fallback detail",
            requires: SignalMask::TEXT,
            when: |_p| true,
            prod: |p| { StructuredLocation::detail_only(p.text.as_str(), RuleId::FallbackDetail) },
        },
    ]
}

/// `... (PROVINCE)`: the parenthetical is a province, `main` holds
/// neighborhood / district / detail segments.
fn province_paren(p: &Probe) -> StructuredLocation {
    let Some(paren) = &p.paren else {
        return unknown_paren(p);
    };
    let province = paren.content.as_str();

    // "X- (IL)": neighborhood directly under the province. Checked before
    // splitting, which would otherwise read X as a district.
    if let Some(left) = paren.main.strip_suffix('-') {
        return StructuredLocation::new(RuleId::ProvinceOnlyTrailingDash).neighborhood(left.trim()).province(province);
    }

    match split_dash_parts(&paren.main).as_slice() {
        [] => unknown_paren(p),
        [only] if *only == province => StructuredLocation::new(RuleId::ProvinceEqualsProvince).province(province),
        [district] => StructuredLocation::new(RuleId::DistrictProvince).district(*district).province(province),
        [neighborhood, district] => StructuredLocation::new(RuleId::NeighborhoodDistrictProvince)
            .neighborhood(*neighborhood)
            .district(*district)
            .province(province),
        [lake, neighborhood, district, ..] if is_lake_phrase(lake) => {
            StructuredLocation::new(RuleId::LakeNeighborhoodDistrictProvince)
                .detail(*lake)
                .neighborhood(*neighborhood)
                .district(*district)
                .province(province)
        }
        [neighborhood, district, rest @ ..] => StructuredLocation::new(RuleId::MultiSegmentProvince)
            .neighborhood(*neighborhood)
            .district(*district)
            .province(province)
            .detail(rest.join("-")),
    }
}

/// `... (SEA)`: the parenthetical is a sea, `main` may name the coast it is
/// offshore of.
fn sea_paren(p: &Probe) -> StructuredLocation {
    let Some(paren) = &p.paren else {
        return unknown_paren(p);
    };
    let sea = paren.sea.as_str();

    match split_dash_parts(&paren.main).as_slice() {
        [] => unknown_paren(p),

        // "IL ACIKLARI (SEA)" or free text.
        [only] => {
            if ends_with_offshore(only) {
                let candidate = strip_offshore(only);
                if vocab::is_province(&candidate) {
                    return StructuredLocation::new(RuleId::ProvinceOffshoreSea).province(candidate).sea(sea);
                }
            }
            StructuredLocation::detail_only(*only, RuleId::DetailSea).sea(sea)
        }

        // "ILCE ACIKLARI-IL (SEA)".
        [left, right] => {
            let left = strip_offshore(left);
            let right = strip_offshore(right);

            if !vocab::is_province(&right) {
                return StructuredLocation::new(RuleId::FallbackProvinceNotFoundSea)
                    .district(left)
                    .detail(right)
                    .sea(sea);
            }

            // "MERSIN ACIKLARI-MERSIN (AKDENIZ)" names the province twice.
            if left == right {
                return StructuredLocation::new(RuleId::ProvinceOffshoreProvinceSea).province(right).sea(sea);
            }

            StructuredLocation::new(RuleId::DistrictOffshoreProvinceSea).district(left).province(right).sea(sea)
        }

        // "MAHALLE-ILCE-IL ACIKLARI (SEA)", with ACIKLARI possibly split off
        // into its own segment.
        [neighborhood, district, tail @ ..] => {
            let tail = merge_offshore(tail);
            let candidate = tail.first().map(|t| strip_offshore(t)).unwrap_or_default();

            let out = StructuredLocation::new(RuleId::NeighborhoodDistrictProvinceOffshoreSea)
                .neighborhood(*neighborhood)
                .district(*district);

            if vocab::is_province(&candidate) {
                out.province(candidate).sea(sea)
            } else {
                StructuredLocation { rule: RuleId::FallbackProvinceNotFoundSea, ..out }.detail(tail.join("-")).sea(sea)
            }
        }
    }
}

/// Parenthetical that could not be attached to anything: the whole text is
/// kept as detail, plus whatever anchor the parenthetical itself names.
/// `(DENIZLI)` names both a province and, through `DENIZ`, a sea.
fn unknown_paren(p: &Probe) -> StructuredLocation {
    let mut out = StructuredLocation::detail_only(p.text.as_str(), RuleId::ParenUnknown);
    if let Some(paren) = &p.paren {
        if p.signals.contains(SignalMask::PAREN_PROVINCE) {
            out = out.province(paren.content.as_str());
        }
        if p.signals.contains(SignalMask::PAREN_SEA) {
            out = out.sea(paren.sea.as_str());
        }
    }
    out
}
