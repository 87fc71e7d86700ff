//! Rename conditions and their composition into a single verdict.
//!
//! Each [`Condition`] is an independent heuristic that looks at one symbol and
//! returns an [`Action`]. A [`RenameCondition`] evaluates an ordered list of
//! them and reduces the actions to a boolean with the precedence
//! "forbid beats force beats silence".
//!
//! # Available Conditions
//!
//! | Condition | Verdict | Applies to |
//! |-----------|---------|------------|
//! | [`BaseCondition`] | forbid kept/aliased symbols, constructors | all |
//! | [`WhitelistCondition`] | forbid listed packages and classes | packages, classes |
//! | [`TldExclusionCondition`] | forbid `com`, `org`, ... root packages | packages |
//! | [`AndroidRClassCondition`] | forbid `R` classes and their fields | classes, fields |
//! | [`CollisionCondition`] | force packages named like a class | packages |
//! | [`CommonWordsCondition`] | forbid vocabulary names | all |
//! | [`PatternCondition`] | force obfuscator signatures | all |
//! | [`EntropyCondition`] | force high-entropy names | all |
//! | [`LengthCondition`] | force too short/long/invalid names | all |

mod base;
mod collision;
mod detect;
mod length;
mod scope;
mod words;

use std::fmt;

use log::trace;

pub use base::BaseCondition;
pub use collision::CollisionCondition;
pub use detect::{EntropyCondition, PatternCondition};
pub use length::{is_valid_identifier, LengthCondition};
pub use scope::{AndroidRClassCondition, TldExclusionCondition, WhitelistCondition};
pub use words::{contains_common_pattern, is_camel_case, is_common_term, CommonWordsCondition};

use crate::symbols::{SymbolRef, SymbolSet};

/// The verdict of a single condition for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// The condition has no opinion
    NoAction,
    /// The symbol must be renamed unless another condition forbids it
    ForceRename,
    /// The symbol must keep its name
    ForbidRename,
}

/// The closed set of rename heuristics.
#[derive(Debug, Clone)]
pub enum Condition {
    /// Kept, aliased and VM-special symbols
    Base(BaseCondition),
    /// User whitelist
    Whitelist(WhitelistCondition),
    /// Top-level-domain root packages
    TldExclusion(TldExclusionCondition),
    /// Android resource classes
    AndroidRClass(AndroidRClassCondition),
    /// Package/class name collisions
    CollisionAvoidance(CollisionCondition),
    /// Vocabulary preservation
    CommonWords(CommonWordsCondition),
    /// Obfuscator signature detection
    ObfuscatorPattern(PatternCondition),
    /// Entropy detection
    Entropy(EntropyCondition),
    /// Length and identifier validity
    Length(LengthCondition),
}

impl Condition {
    /// Returns a short stable name of the condition.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Condition::Base(_) => "base",
            Condition::Whitelist(_) => "whitelist",
            Condition::TldExclusion(_) => "tld-exclusion",
            Condition::AndroidRClass(_) => "android-r-class",
            Condition::CollisionAvoidance(_) => "collision-avoidance",
            Condition::CommonWords(_) => "common-words",
            Condition::ObfuscatorPattern(_) => "obfuscator-pattern",
            Condition::Entropy(_) => "entropy",
            Condition::Length(_) => "length",
        }
    }

    /// Collects per-run state from the symbol set.
    ///
    /// Only stateful conditions do anything here.
    pub fn init(&mut self, symbols: &SymbolSet) {
        if let Condition::CollisionAvoidance(cond) = self {
            cond.init(symbols);
        }
    }

    /// Evaluates the condition for one symbol.
    #[must_use]
    pub fn evaluate(&self, symbol: &SymbolRef<'_>) -> Action {
        match self {
            Condition::Base(cond) => cond.evaluate(symbol),
            Condition::Whitelist(cond) => cond.evaluate(symbol),
            Condition::TldExclusion(cond) => cond.evaluate(symbol),
            Condition::AndroidRClass(cond) => cond.evaluate(symbol),
            Condition::CollisionAvoidance(cond) => cond.evaluate(symbol),
            Condition::CommonWords(cond) => cond.evaluate(symbol),
            Condition::ObfuscatorPattern(cond) => cond.evaluate(symbol),
            Condition::Entropy(cond) => cond.evaluate(symbol),
            Condition::Length(cond) => cond.evaluate(symbol),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered composition of conditions into a rename decision.
///
/// # Precedence
///
/// 1. The first [`Action::ForbidRename`] ends evaluation with `false`
/// 2. Otherwise any [`Action::ForceRename`] yields `true`
/// 3. If every condition abstains the symbol keeps its name
///
/// # Example
///
/// ```rust
/// use symscope::deobfuscation::{BaseCondition, Condition, PatternCondition, RenameCondition};
/// use symscope::symbols::{ClassSymbol, SymbolRef};
///
/// let rename = RenameCondition::new(vec![
///     Condition::Base(BaseCondition),
///     Condition::ObfuscatorPattern(PatternCondition::default()),
/// ]);
///
/// let cls = ClassSymbol::new("com.example.a");
/// assert!(rename.decide(&SymbolRef::Class(&cls)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenameCondition {
    conditions: Vec<Condition>,
}

impl RenameCondition {
    /// Creates a composer over the given ordered conditions.
    #[must_use]
    pub fn new(conditions: Vec<Condition>) -> Self {
        RenameCondition { conditions }
    }

    /// Returns the conditions in evaluation order.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Prepares every condition for a run over `symbols`.
    pub fn init(&mut self, symbols: &SymbolSet) {
        for condition in &mut self.conditions {
            condition.init(symbols);
        }
    }

    /// Decides whether a symbol should be renamed.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The symbol to judge.
    ///
    /// # Returns
    ///
    /// `true` if at least one condition forces a rename and none forbids it.
    #[must_use]
    pub fn decide(&self, symbol: &SymbolRef<'_>) -> bool {
        let mut force = false;
        for condition in &self.conditions {
            match condition.evaluate(symbol) {
                Action::ForbidRename => {
                    trace!("{symbol}: rename forbidden by {condition}");
                    return false;
                }
                Action::ForceRename => {
                    trace!("{symbol}: rename forced by {condition}");
                    force = true;
                }
                Action::NoAction => {}
            }
        }
        force
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{ClassSymbol, MethodSymbol};

    #[test]
    fn test_silence_keeps_name() {
        let rename = RenameCondition::new(vec![Condition::Base(BaseCondition)]);
        let cls = ClassSymbol::new("com.example.a");
        assert!(!rename.decide(&SymbolRef::Class(&cls)));
        assert!(!RenameCondition::default().decide(&SymbolRef::Class(&cls)));
    }

    #[test]
    fn test_forbid_beats_force_in_any_order() {
        let cls = ClassSymbol::new("com.example.a");
        let mut kept = MethodSymbol::new("b");
        kept.keep = true;
        let symbol = SymbolRef::Method(&kept, &cls);

        let forward = RenameCondition::new(vec![
            Condition::Base(BaseCondition),
            Condition::Length(LengthCondition::default()),
        ]);
        let backward = RenameCondition::new(vec![
            Condition::Length(LengthCondition::default()),
            Condition::ObfuscatorPattern(PatternCondition::default()),
            Condition::Base(BaseCondition),
        ]);

        assert!(!forward.decide(&symbol));
        assert!(!backward.decide(&symbol));
    }

    #[test]
    fn test_force_renames() {
        let rename = RenameCondition::new(vec![
            Condition::Base(BaseCondition),
            Condition::ObfuscatorPattern(PatternCondition::default()),
        ]);
        let cls = ClassSymbol::new("com.example.a");
        assert!(rename.decide(&SymbolRef::Class(&cls)));
    }

    #[test]
    fn test_condition_names() {
        assert_eq!(Condition::Base(BaseCondition).to_string(), "base");
        assert_eq!(
            Condition::CollisionAvoidance(CollisionCondition::new()).name(),
            "collision-avoidance"
        );
    }
}
