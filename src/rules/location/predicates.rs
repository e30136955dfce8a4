use super::helpers::{is_lake_phrase, split_dash_parts};
use crate::engine::Probe;
use crate::vocab;

/// The province parenthetical has something to attach the province to: a
/// trailing hyphen or at least one non-empty segment.
pub fn province_paren_has_body(p: &Probe) -> bool {
    let main = p.main();
    main.ends_with('-') || !split_dash_parts(main).is_empty()
}

/// The sea parenthetical has at least one non-empty segment before it.
pub fn sea_paren_has_body(p: &Probe) -> bool {
    !split_dash_parts(p.main()).is_empty()
}

/// A bare sea name: exact vocabulary entry, or ends with ` DENIZI`.
///
/// The suffix needs the leading space so that `DENIZLI` is not a sea.
pub fn is_bare_sea(p: &Probe) -> bool {
    vocab::is_sea(&p.text) || p.text.ends_with(vocab::SEA_SUFFIX)
}

pub fn is_bare_country(p: &Probe) -> bool {
    vocab::is_country(&p.text)
}

pub fn is_bare_province(p: &Probe) -> bool {
    vocab::is_province(&p.text)
}

pub fn is_bare_lake(p: &Probe) -> bool {
    is_lake_phrase(&p.text)
}

pub fn is_bare_island_district(p: &Probe) -> bool {
    vocab::is_island_district(&p.text)
}
