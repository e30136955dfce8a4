//! Input probing.
//!
//! A `Probe` is everything the rules need to know about one normalized
//! string, computed once before the cascade runs: the trailing parenthetical
//! split and a `SignalMask` of coarse facts. Guards then test bits and
//! borrow pre-split text instead of re-running the same regexes per rule.

use super::compiled_rules::SignalMask;
use crate::normalize::{normalize_sea, normalize_text};
use crate::vocab;

/// The last `( ... )` segment at the end of an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingParen {
    /// Text before the parenthetical with trailing whitespace removed. A
    /// trailing hyphen is kept.
    pub main: String,
    /// Inner text, normalized.
    pub content: String,
    /// Inner text resolved through the sea alias table.
    pub sea: String,
}

impl TrailingParen {
    /// Split off the trailing parenthetical of a normalized string.
    pub fn extract(text: &str) -> Option<Self> {
        let caps = regex!(r"\(([^()]*)\)\s*$").captures(text)?;
        let whole = caps.get(0)?;
        let inner = caps.get(1).map_or("", |m| m.as_str());

        let content = normalize_text(inner.trim());
        let sea = normalize_sea(&content);

        Some(TrailingParen { main: text[..whole.start()].trim_end().to_string(), content, sea })
    }

    pub fn names_province(&self) -> bool {
        vocab::is_province(&self.content)
    }

    /// Exact sea name or alias, or anything mentioning the sea word.
    pub fn names_sea(&self) -> bool {
        vocab::is_sea(&self.sea) || self.sea.contains(vocab::SEA_WORD)
    }
}

/// A normalized input plus what the scan found in it.
#[derive(Debug, Clone)]
pub struct Probe {
    pub text: String,
    pub signals: SignalMask,
    pub paren: Option<TrailingParen>,
}

impl Probe {
    /// Scan an already normalized string.
    pub fn scan(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut signals = SignalMask::empty();

        if text.is_empty() || text.eq_ignore_ascii_case(vocab::NULL_MARKER) {
            return Probe { text, signals: SignalMask::BLANK, paren: None };
        }
        signals |= SignalMask::TEXT;

        if text.contains(vocab::CYPRUS) {
            signals |= SignalMask::CYPRUS;
        }

        if regex!(r"\bSINIR\b|\bSINIRI\b|\bSINIR BOLGESI\b").is_match(&text) {
            signals |= SignalMask::BORDER_WORD;
        }

        if regex!(r"[A-Z0-9]+").find_iter(&text).any(|m| vocab::is_country(m.as_str())) {
            signals |= SignalMask::COUNTRY_TOKEN;
        }

        let paren = TrailingParen::extract(&text);
        match &paren {
            Some(p) => {
                signals |= SignalMask::TRAILING_PAREN;
                if p.names_province() {
                    signals |= SignalMask::PAREN_PROVINCE;
                }
                if p.names_sea() {
                    signals |= SignalMask::PAREN_SEA;
                }
            }
            None => signals |= SignalMask::BARE,
        }

        Probe { text, signals, paren }
    }

    /// The trailing parenthetical's `main` part, or an empty string.
    pub fn main(&self) -> &str {
        self.paren.as_ref().map_or("", |p| p.main.as_str())
    }
}
