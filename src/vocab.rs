//! Reference vocabularies.
//!
//! Every entry is stored pre-folded (uppercase ASCII, Turkish letters mapped
//! by [`crate::normalize_text`]), so lookups compare normalized text directly.
//! Both the dotted and the dotless `I` fold to `I`; entries such as `SIIRT`
//! and `IGDIR` depend on that.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Country token that routes a string to the Cyprus override.
pub(crate) const CYPRUS: &str = "KIBRIS";
/// Suffix meaning "offshore of" (`MERSIN ACIKLARI`).
pub(crate) const OFFSHORE: &str = "ACIKLARI";
/// Substring marking a sea name inside a parenthetical.
pub(crate) const SEA_WORD: &str = "DENIZ";
/// Suffix marking a bare sea name; the leading space keeps `DENIZLI` out.
pub(crate) const SEA_SUFFIX: &str = " DENIZI";
/// Textual null marker left behind by tabular loaders.
pub(crate) const NULL_MARKER: &str = "NAN";

pub(crate) static PROVINCES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ADANA", "ADIYAMAN", "AFYONKARAHISAR", "AGRI", "AMASYA", "ANKARA", "ANTALYA", "ARTVIN", "AYDIN",
        "BALIKESIR", "BILECIK", "BINGOL", "BITLIS", "BOLU", "BURDUR", "BURSA", "CANAKKALE", "CANKIRI", "CORUM",
        "DENIZLI", "DIYARBAKIR", "EDIRNE", "ELAZIG", "ERZINCAN", "ERZURUM", "ESKISEHIR", "GAZIANTEP", "GIRESUN",
        "GUMUSHANE", "HAKKARI", "HATAY", "ISPARTA", "MERSIN", "ISTANBUL", "IZMIR", "KARS", "KASTAMONU", "KAYSERI",
        "KIRKLARELI", "KIRSEHIR", "KOCAELI", "KONYA", "KUTAHYA", "MALATYA", "MANISA", "KAHRAMANMARAS", "MARDIN",
        "MUGLA", "MUS", "NEVSEHIR", "NIGDE", "ORDU", "RIZE", "SAKARYA", "SAMSUN", "SIIRT", "SINOP", "SIVAS",
        "TEKIRDAG", "TOKAT", "TRABZON", "TUNCELI", "SANLIURFA", "USAK", "VAN", "YOZGAT", "ZONGULDAK", "AKSARAY",
        "BAYBURT", "KARAMAN", "KIRIKKALE", "BATMAN", "SIRNAK", "BARTIN", "ARDAHAN", "IGDIR", "YALOVA", "KARABUK",
        "KILIS", "OSMANIYE", "DUZCE",
    ]
    .into_iter()
    .collect()
});

pub(crate) static COUNTRIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "IRAN",
        "SURIYE",
        "ERMENISTAN",
        CYPRUS,
        "IRAK",
        "GURCISTAN",
        "AZERBAYCAN",
        "TURKIYE",
        "BULGARISTAN",
        "YUNANISTAN",
    ]
    .into_iter()
    .collect()
});

/// Alias spelling -> canonical sea name. Canonical names map to themselves.
pub(crate) static SEA_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("EGE-DENIZI", "EGE DENIZI"),
        ("DOGU AKDENIZ", "DOGU AKDENIZ"),
        ("AKDENIZ", "AKDENIZ"),
        ("EGE DENIZI", "EGE DENIZI"),
        ("MARMARA DENIZI", "MARMARA DENIZI"),
        ("KARADENIZ", "KARADENIZ"),
    ])
});

/// Every alias and canonical sea name.
pub(crate) static SEAS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SEA_ALIASES.iter().flat_map(|(alias, canonical)| [*alias, *canonical]).collect());

pub(crate) static LAKES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["VAN GOLU", "KUS GOLU", "ULUBAT GOLU", "IZNIK GOLU"].into_iter().collect());

/// Islands (or island-looking names) that are administratively districts.
pub(crate) static ISLAND_DISTRICTS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["BOZCAADA", "GOKCEADA", "ZEYTINADA", "IGNEADA", "KUSADASI"].into_iter().collect());

/// Islands that are always free-text detail, never a district.
pub(crate) static ISLAND_DETAILS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["MIDILLI ADASI", "SISAM ADASI", "GIRIT ADASI", "RODOS ADASI", "KOS ADASI", "SAKIZ ADASI"].into_iter().collect()
});

pub(crate) fn is_province(s: &str) -> bool {
    PROVINCES.contains(s)
}

pub(crate) fn is_country(s: &str) -> bool {
    COUNTRIES.contains(s)
}

pub(crate) fn is_sea(s: &str) -> bool {
    SEAS.contains(s)
}

/// Canonical sea name for `s`, or `s` itself when it is not a known alias.
pub(crate) fn canonical_sea(s: &str) -> &str {
    SEA_ALIASES.get(s).copied().unwrap_or(s)
}

pub(crate) fn is_whitelisted_lake(s: &str) -> bool {
    LAKES.contains(s)
}

pub(crate) fn is_island_district(s: &str) -> bool {
    ISLAND_DISTRICTS.contains(s)
}

pub(crate) fn is_island_detail(s: &str) -> bool {
    ISLAND_DETAILS.contains(s)
}
