//! Rule compilation and signal metadata.
//!
//! The cascade is an ordered list, so compiling it cannot reorder or bucket
//! rules the way an unordered rule set could. What it does do is pull each
//! rule's required `SignalMask` out into a compact `RuleMeta` vector so that
//! the hot loop can discard rules with a single bit test before touching the
//! boxed guard.
//!
//! ## Invariants
//!
//! - `RuleIdx` is an index into both `CompiledRules::rules` and
//!   `CompiledRules::metas`; the vectors stay aligned and keep input order.

use crate::Rule;

/// Position of a rule in the cascade.
pub(crate) type RuleIdx = usize;

bitflags::bitflags! {
    /// Coarse facts about a normalized input, computed once per input by
    /// `Probe::scan`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SignalMask: u32 {
        /// Empty string or the textual null marker.
        const BLANK            = 1 << 0;
        /// Anything else.
        const TEXT             = 1 << 1;
        /// Contains the Cyprus country token.
        const CYPRUS           = 1 << 2;
        /// Contains a whole-word border phrase.
        const BORDER_WORD      = 1 << 3;
        /// Contains a token that is a known country.
        const COUNTRY_TOKEN    = 1 << 4;
        /// Ends with a `( ... )` segment.
        const TRAILING_PAREN   = 1 << 5;
        /// Does not end with a parenthetical.
        const BARE             = 1 << 6;
        /// Trailing parenthetical names a province.
        const PAREN_PROVINCE   = 1 << 7;
        /// Trailing parenthetical names a sea.
        const PAREN_SEA        = 1 << 8;
    }
}

impl SignalMask {
    /// Names of the set flags, for reports.
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

/// Metadata extracted from a rule.
#[derive(Clone, Copy, Debug)]
pub struct RuleMeta {
    pub name: &'static str,
    pub requires: SignalMask,
}

/// Ordered rule set with extracted metadata.
#[derive(Debug)]
pub struct CompiledRules<'a> {
    pub rules: Vec<&'a Rule>,
    pub metas: Vec<RuleMeta>,
}

impl<'a> CompiledRules<'a> {
    pub fn new(rules: &'a [Rule]) -> Self {
        let rule_refs: Vec<&Rule> = rules.iter().collect();
        let metas = rule_refs.iter().map(|r| RuleMeta { name: r.name, requires: r.requires }).collect();

        CompiledRules { rules: rule_refs, metas }
    }

    /// Indices of the rules whose required signals are all in `signals`,
    /// in cascade order.
    pub fn active(&self, signals: SignalMask) -> impl Iterator<Item = RuleIdx> + '_ {
        self.metas.iter().enumerate().filter(move |(_, meta)| signals.contains(meta.requires)).map(|(idx, _)| idx)
    }

    /// Names of the rules that are eligible for `signals`.
    pub fn active_names(&self, signals: SignalMask) -> Vec<&'static str> {
        self.active(signals).map(|idx| self.metas[idx].name).collect()
    }
}
