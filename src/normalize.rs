//! Text normalization.
//!
//! Location strings arrive in mixed casing, with Turkish diacritics, several
//! dash variants and distance annotations in square brackets. Everything in
//! the engine compares against the canonical form produced here.

use crate::vocab;

/// Canonical form of a raw location string.
///
/// Steps, in order: drop `[...]` annotations, map dash variants to `-`,
/// collapse hyphen runs, fold Turkish letters, uppercase, collapse whitespace
/// and trim. The result is a fixed point: `normalize_text(normalize_text(x))`
/// equals `normalize_text(x)`.
pub fn normalize_text(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let s = regex!(r"\[[^\]]*\]").replace_all(raw, "");
    let s = regex!(r"[–—−]").replace_all(&s, "-");
    let s = regex!(r"-{2,}").replace_all(&s, "-");
    let s = fold_turkish(&s).to_uppercase();
    collapse_whitespace(&s)
}

/// Canonical sea name for a sea candidate (typically a parenthetical's
/// content). Unknown names come back folded but otherwise unchanged.
pub fn normalize_sea(raw: &str) -> String {
    let s = fold_turkish(&raw.trim().to_uppercase());
    let s = regex!(r"-{2,}").replace_all(&s, "-");
    let s = collapse_whitespace(&s);
    vocab::canonical_sea(&s).to_string()
}

/// Map Turkish-specific letters to their closest ASCII letter.
///
/// Lowercase `i` and dotless `ı` both become `I`, the same as `İ` and `I`.
fn fold_turkish(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'Ç' | 'ç' => 'C',
            'Ğ' | 'ğ' => 'G',
            'İ' | 'ı' | 'i' => 'I',
            'Ö' | 'ö' => 'O',
            'Ş' | 'ş' => 'S',
            'Ü' | 'ü' => 'U',
            other => other,
        })
        .collect()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bracketed_annotations() {
        assert_eq!(normalize_text("OSMANIYE- (CORUM) [East 1.5 km]"), "OSMANIYE- (CORUM)");
        assert_eq!(normalize_text("[North 2 km] SINDIRGI (BALIKESIR)"), "SINDIRGI (BALIKESIR)");
    }

    #[test]
    fn folds_turkish_letters_and_uppercases() {
        assert_eq!(normalize_text("Çorum"), "CORUM");
        assert_eq!(normalize_text("Muğla"), "MUGLA");
        assert_eq!(normalize_text("İzmir"), "IZMIR");
        assert_eq!(normalize_text("Iğdır"), "IGDIR");
        assert_eq!(normalize_text("Gümüşhane"), "GUMUSHANE");
        assert_eq!(normalize_text("Van Gölü"), "VAN GOLU");
        assert_eq!(normalize_text("siirt"), "SIIRT");
    }

    #[test]
    fn unifies_dash_variants() {
        assert_eq!(normalize_text("A–B—C−D"), "A-B-C-D");
        assert_eq!(normalize_text("A--B"), "A-B");
        assert_eq!(normalize_text("A---B"), "A-B");
        assert_eq!(normalize_text("A–-B"), "A-B");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize_text("  sındırgı \t (balıkesir)  "), "SINDIRGI (BALIKESIR)");
        assert_eq!(normalize_text("   "), "");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        let inputs = [
            "",
            "   ",
            "nan",
            "OSMANIYE- (CORUM) [East 1.5 km]",
            "Akdeniz -- Mersin açıkları",
            "A---B----C",
            "[[nested]] x ]",
            "[unclosed (ANKARA)",
            "ß and ǆ",
            "ege–denizi ( ege--denizi )",
            "MERSIN ACIKLARI-MERSIN (AKDENIZ)",
            "-[x]-",
        ];

        for input in inputs {
            let once = normalize_text(input);
            assert_eq!(normalize_text(&once), once, "not idempotent for '{input}'");
        }
    }

    #[test]
    fn sea_names_resolve_aliases() {
        assert_eq!(normalize_sea(" ege-denizi "), "EGE DENIZI");
        assert_eq!(normalize_sea("Ege--Denizi"), "EGE DENIZI");
        assert_eq!(normalize_sea("akdeniz"), "AKDENIZ");
        assert_eq!(normalize_sea("marmara   denizi"), "MARMARA DENIZI");
        assert_eq!(normalize_sea("Kızıl Deniz"), "KIZIL DENIZ");
    }
}
