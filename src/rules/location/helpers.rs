use crate::vocab;

/// Split on hyphens, trimming each segment and dropping empty ones.
pub fn split_dash_parts(s: &str) -> Vec<&str> {
    s.split('-').map(str::trim).filter(|p| !p.is_empty()).collect()
}

/// True when `s` ends with the whole word `ACIKLARI`.
pub fn ends_with_offshore(s: &str) -> bool {
    regex!(r"\bACIKLARI\b\s*$").is_match(s)
}

/// Remove a trailing ` ACIKLARI` ("offshore of"). A bare `ACIKLARI` with
/// nothing before it is left alone.
pub fn strip_offshore(s: &str) -> String {
    regex!(r"\s+ACIKLARI\s*$").replace(s.trim(), "").trim().to_string()
}

/// Re-attach an `ACIKLARI` that a hyphen split off its place name:
/// `["MUGLA", "ACIKLARI", ...]` becomes `["MUGLA ACIKLARI", ...]`.
pub fn merge_offshore(parts: &[&str]) -> Vec<String> {
    match parts {
        [head, suffix, rest @ ..] if *suffix == vocab::OFFSHORE => std::iter::once(format!("{head} {suffix}"))
            .chain(rest.iter().map(|p| p.to_string()))
            .collect(),
        _ => parts.iter().map(|p| p.to_string()).collect(),
    }
}

/// Whitelisted lake, or anything with the whole word `GOLU`.
pub fn is_lake_phrase(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    vocab::is_whitelisted_lake(s) || regex!(r"\bGOLU\b").is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_empty_segments() {
        assert_eq!(split_dash_parts("A - B-"), vec!["A", "B"]);
        assert_eq!(split_dash_parts("-"), Vec::<&str>::new());
        assert_eq!(split_dash_parts(""), Vec::<&str>::new());
    }

    #[test]
    fn offshore_suffix_handling() {
        assert!(ends_with_offshore("MERSIN ACIKLARI"));
        assert!(ends_with_offshore("ACIKLARI"));
        assert!(!ends_with_offshore("ACIKLARINDA"));

        assert_eq!(strip_offshore("MERSIN ACIKLARI"), "MERSIN");
        assert_eq!(strip_offshore(" DATCA ACIKLARI "), "DATCA");
        assert_eq!(strip_offshore("ACIKLARI"), "ACIKLARI");
        assert_eq!(strip_offshore("MUGLA"), "MUGLA");
    }

    #[test]
    fn merge_reattaches_split_suffix() {
        assert_eq!(merge_offshore(&["MUGLA", "ACIKLARI", "X"]), vec!["MUGLA ACIKLARI", "X"]);
        assert_eq!(merge_offshore(&["MUGLA", "X"]), vec!["MUGLA", "X"]);
        assert_eq!(merge_offshore(&["MUGLA"]), vec!["MUGLA"]);
    }

    #[test]
    fn lake_phrases() {
        assert!(is_lake_phrase("VAN GOLU"));
        assert!(is_lake_phrase("HAZAR GOLU"));
        assert!(!is_lake_phrase("GOLUCUK"));
        assert!(!is_lake_phrase(""));
    }
}
