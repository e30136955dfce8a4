//! Collection-wide corrections applied after classification.
//!
//! Two island vocabularies cannot be handled inside the cascade because the
//! cascade decides district vs. detail purely from position in the string.
//! This pass fixes the result afterwards:
//!
//! - an island-like district (`BOZCAADA`) that landed in `detail` while
//!   `district` is empty is moved to `district`;
//! - an island detail (`MIDILLI ADASI`) that landed in `district` while
//!   `detail` is empty is moved to `detail`.
//!
//! Each record is corrected independently; the two checks exclude each other
//! because the first one leaves `detail` empty and `district` set to a name
//! outside the island-detail list.

use crate::{RuleId, StructuredLocation, vocab};

/// Apply both corrections to every record. Returns how many records changed.
pub fn post_process(records: &mut [StructuredLocation]) -> usize {
    let mut fixed = 0;

    for record in records.iter_mut() {
        if fix_island_district(record) || fix_island_detail(record) {
            fixed += 1;
        }
    }

    if fixed > 0 {
        tracing::debug!(target: "epiloc::postprocess", fixed, total = records.len(), "post-processing applied");
    }
    fixed
}

fn fix_island_district(record: &mut StructuredLocation) -> bool {
    let island = match (&record.detail, &record.district) {
        (Some(detail), None) if vocab::is_island_district(detail) => detail.clone(),
        _ => return false,
    };

    tracing::trace!(target: "epiloc::postprocess", value = %island, from = %record.rule, "detail -> district");
    record.district = Some(island);
    record.detail = None;
    record.rule = RuleId::FixIslandDistrictFromDetail;
    true
}

fn fix_island_detail(record: &mut StructuredLocation) -> bool {
    let island = match (&record.district, &record.detail) {
        (Some(district), None) if vocab::is_island_detail(district) => district.clone(),
        _ => return false,
    };

    tracing::trace!(target: "epiloc::postprocess", value = %island, from = %record.rule, "district -> detail");
    record.detail = Some(island);
    record.district = None;
    record.rule = RuleId::FixIslandDetailFromDistrict;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn island_district_moves_out_of_detail() {
        let mut records = vec![
            StructuredLocation::detail_only("BOZCAADA", RuleId::DetailSea).sea("EGE DENIZI"),
            StructuredLocation::detail_only("GOKOVA KORFEZI", RuleId::DetailSea).sea("EGE DENIZI"),
        ];

        assert_eq!(post_process(&mut records), 1);

        assert_eq!(records[0].district.as_deref(), Some("BOZCAADA"));
        assert_eq!(records[0].detail, None);
        assert_eq!(records[0].sea.as_deref(), Some("EGE DENIZI"));
        assert_eq!(records[0].rule, RuleId::FixIslandDistrictFromDetail);

        assert_eq!(records[1].rule, RuleId::DetailSea);
    }

    #[test]
    fn island_detail_moves_out_of_district() {
        let mut records =
            vec![StructuredLocation::new(RuleId::DistrictProvince).district("MIDILLI ADASI").province("BALIKESIR")];

        assert_eq!(post_process(&mut records), 1);

        assert_eq!(records[0].detail.as_deref(), Some("MIDILLI ADASI"));
        assert_eq!(records[0].district, None);
        assert_eq!(records[0].province.as_deref(), Some("BALIKESIR"));
        assert_eq!(records[0].rule, RuleId::FixIslandDetailFromDistrict);
    }

    #[test]
    fn occupied_target_fields_block_the_move() {
        let mut records = vec![
            StructuredLocation::detail_only("BOZCAADA", RuleId::FallbackProvinceNotFoundSea).district("X"),
            StructuredLocation::new(RuleId::FallbackProvinceNotFoundSea).district("SISAM ADASI").detail("Y"),
        ];

        assert_eq!(post_process(&mut records), 0);
        assert_eq!(records[0].detail.as_deref(), Some("BOZCAADA"));
        assert_eq!(records[1].district.as_deref(), Some("SISAM ADASI"));
    }

    #[test]
    fn running_twice_changes_nothing_more() {
        let mut records = vec![
            StructuredLocation::detail_only("GOKCEADA", RuleId::DetailSea),
            StructuredLocation::new(RuleId::DistrictProvince).district("RODOS ADASI"),
        ];

        assert_eq!(post_process(&mut records), 2);
        let snapshot = records.clone();
        assert_eq!(post_process(&mut records), 0);
        assert_eq!(records, snapshot);
    }
}
