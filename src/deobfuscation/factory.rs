//! Mode-driven assembly of rename conditions and alias providers.

use std::fmt;

use log::info;

use crate::{
    deobfuscation::{
        analyzer::DeobfuscationAnalyzer,
        conditions::{
            AndroidRClassCondition, BaseCondition, CollisionCondition, CommonWordsCondition,
            Condition, EntropyCondition, LengthCondition, PatternCondition, RenameCondition,
            TldExclusionCondition, WhitelistCondition,
        },
        config::DeobfuscationConfig,
        mode::DeobfuscationMode,
        naming::{AliasProvider, IndexAliasProvider, SemanticAliasProvider},
    },
    symbols::SymbolSet,
    Result,
};

/// Builds the components of a rename run for a [`DeobfuscationMode`].
///
/// | Mode | Conditions | Alias provider |
/// |------|------------|----------------|
/// | Conservative | base, whitelist, TLD, R class, collision, common words, pattern | index |
/// | Default | base, whitelist, TLD, R class, collision, length | index |
/// | Enhanced | base, whitelist, TLD, R class, collision, common words, pattern, entropy, length | semantic |
/// | Aggressive | base, R class, collision, pattern, entropy, length | semantic without hint |
///
/// `Auto` has no components of its own. It must be replaced by the analyzer
/// recommendation through [`ModeFactory::resolve`] first; asked directly,
/// the factory builds nothing for it.
///
/// # Example
///
/// ```rust
/// use symscope::deobfuscation::{DeobfuscationMode, ModeFactory};
///
/// let factory = ModeFactory::default();
/// assert!(factory.rename_condition(DeobfuscationMode::Disabled).is_none());
///
/// let provider = factory.alias_provider(DeobfuscationMode::Enhanced).unwrap();
/// assert_eq!(provider.id(), "semantic");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModeFactory {
    config: DeobfuscationConfig,
}

impl ModeFactory {
    /// Creates a factory for a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfig`] if the configuration does not
    /// pass [`DeobfuscationConfig::validate`].
    pub fn new(config: DeobfuscationConfig) -> Result<Self> {
        config.validate()?;
        Ok(ModeFactory { config })
    }

    /// Creates a factory with the configuration preset matching `mode`.
    ///
    /// Conservative uses [`DeobfuscationConfig::conservative`], Aggressive
    /// uses [`DeobfuscationConfig::aggressive`] and every other mode the
    /// default configuration. Presets are always valid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use symscope::deobfuscation::{DeobfuscationMode, ModeFactory};
    ///
    /// let factory = ModeFactory::preset(DeobfuscationMode::Conservative);
    /// assert_eq!(factory.config().min_length, 2);
    /// ```
    #[must_use]
    pub fn preset(mode: DeobfuscationMode) -> Self {
        let config = match mode {
            DeobfuscationMode::Conservative => DeobfuscationConfig::conservative(),
            DeobfuscationMode::Aggressive => DeobfuscationConfig::aggressive(),
            _ => DeobfuscationConfig::new(),
        };
        ModeFactory { config }
    }

    /// Returns the configuration used by this factory.
    #[must_use]
    pub fn config(&self) -> &DeobfuscationConfig {
        &self.config
    }

    /// Builds the ordered condition list of a mode.
    ///
    /// # Returns
    ///
    /// The conditions in evaluation order; empty for
    /// [`DeobfuscationMode::Disabled`] and for an unresolved
    /// [`DeobfuscationMode::Auto`].
    #[must_use]
    pub fn conditions(&self, mode: DeobfuscationMode) -> Vec<Condition> {
        let base = || Condition::Base(BaseCondition);
        let whitelist = || Condition::Whitelist(WhitelistCondition::new(&self.config.whitelist));
        let tld = || Condition::TldExclusion(TldExclusionCondition);
        let r_class = || Condition::AndroidRClass(AndroidRClassCondition);
        let collision = || Condition::CollisionAvoidance(CollisionCondition::new());
        let words = || Condition::CommonWords(CommonWordsCondition);
        let pattern =
            || Condition::ObfuscatorPattern(PatternCondition::new(self.config.pattern_classifier()));
        let entropy =
            || Condition::Entropy(EntropyCondition::new(self.config.entropy_classifier()));
        let length = || {
            Condition::Length(LengthCondition::new(
                self.config.min_length,
                self.config.max_length,
            ))
        };

        match mode {
            DeobfuscationMode::Disabled | DeobfuscationMode::Auto => Vec::new(),
            DeobfuscationMode::Conservative => vec![
                base(),
                whitelist(),
                tld(),
                r_class(),
                collision(),
                words(),
                pattern(),
            ],
            DeobfuscationMode::Default => {
                vec![base(), whitelist(), tld(), r_class(), collision(), length()]
            }
            DeobfuscationMode::Enhanced => vec![
                base(),
                whitelist(),
                tld(),
                r_class(),
                collision(),
                words(),
                pattern(),
                entropy(),
                length(),
            ],
            DeobfuscationMode::Aggressive => {
                vec![base(), r_class(), collision(), pattern(), entropy(), length()]
            }
        }
    }

    /// Builds the rename condition of a mode.
    ///
    /// # Returns
    ///
    /// `None` for [`DeobfuscationMode::Disabled`] and for an unresolved
    /// [`DeobfuscationMode::Auto`]. The returned composer still needs
    /// [`RenameCondition::init`] before use.
    #[must_use]
    pub fn rename_condition(&self, mode: DeobfuscationMode) -> Option<RenameCondition> {
        if !mode.is_enabled() || mode == DeobfuscationMode::Auto {
            return None;
        }
        Some(RenameCondition::new(self.conditions(mode)))
    }

    /// Builds a fresh alias provider for a mode.
    ///
    /// Enhanced and Aggressive use semantic naming unless it is disabled in
    /// the configuration; Aggressive never appends original-name hints.
    ///
    /// # Returns
    ///
    /// `None` for [`DeobfuscationMode::Disabled`] and for an unresolved
    /// [`DeobfuscationMode::Auto`].
    #[must_use]
    pub fn alias_provider(&self, mode: DeobfuscationMode) -> Option<Box<dyn AliasProvider>> {
        let config = &self.config;
        match mode {
            DeobfuscationMode::Disabled | DeobfuscationMode::Auto => None,
            DeobfuscationMode::Enhanced | DeobfuscationMode::Aggressive
                if config.use_semantic_naming =>
            {
                let hint = config.preserve_original_hint && mode != DeobfuscationMode::Aggressive;
                let provider = SemanticAliasProvider::new(
                    config.initial_index,
                    config.max_length,
                    config.dedup_separator.clone(),
                )
                .with_role_prefixes(config.role_prefixes)
                .with_framework_bases(config.framework_bases)
                .with_semantic_tags(config.semantic_tags)
                .with_original_hint(hint);
                Some(Box::new(provider))
            }
            _ => Some(Box::new(IndexAliasProvider::new(
                config.initial_index,
                config.max_length,
                config.dedup_separator.clone(),
            ))),
        }
    }

    /// Builds an analyzer over `symbols` using the configured classifiers.
    #[must_use]
    pub fn analyzer<'a>(&self, symbols: &'a SymbolSet) -> DeobfuscationAnalyzer<'a> {
        DeobfuscationAnalyzer::with_classifier(symbols, self.config.pattern_classifier())
    }

    /// Replaces [`DeobfuscationMode::Auto`] with the analyzer recommendation.
    ///
    /// Every other mode is returned unchanged.
    ///
    /// # Arguments
    ///
    /// * `mode` - The requested mode.
    /// * `symbols` - The symbol set the run will cover.
    #[must_use]
    pub fn resolve(&self, mode: DeobfuscationMode, symbols: &SymbolSet) -> DeobfuscationMode {
        if mode != DeobfuscationMode::Auto {
            return mode;
        }

        let analyzer = self.analyzer(symbols);
        let stats = analyzer.analyze();
        info!("Auto-detecting deobfuscation mode...");
        if let Some(tool) = stats.detected_tool {
            info!("Detected obfuscator: {}", tool.name());
        }
        let selected = stats.recommended_mode();
        info!(
            "Overall obfuscation rate {:.1}%, using {selected} mode",
            stats.overall_rate
        );
        selected
    }

    /// Describes the conditions and the alias provider of a mode.
    #[must_use]
    pub fn describe(&self, mode: DeobfuscationMode) -> String {
        ModeDescription {
            factory: self,
            mode,
        }
        .to_string()
    }
}

/// Human-readable listing of the components one mode is built from.
struct ModeDescription<'a> {
    factory: &'a ModeFactory,
    mode: DeobfuscationMode,
}

impl fmt::Display for ModeDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = self.mode;
        writeln!(f, "Mode: {mode}")?;
        writeln!(f, "Description: {}", mode.description())?;
        writeln!(f)?;
        writeln!(f, "Conditions used:")?;

        match mode {
            DeobfuscationMode::Disabled => writeln!(f, "  - No conditions (disabled)")?,
            DeobfuscationMode::Auto => {
                writeln!(f, "  - Automatically selected based on codebase analysis")?;
            }
            _ => {
                for condition in self.factory.conditions(mode) {
                    writeln!(f, "  - {}", condition_label(&condition))?;
                }
            }
        }

        writeln!(f)?;
        let provider = match self.factory.alias_provider(mode) {
            None if mode == DeobfuscationMode::Auto => "Chosen with the resolved mode",
            None => "None",
            Some(provider) if provider.id() == "semantic" => {
                "Enhanced (semantic naming, type-aware)"
            }
            Some(_) => "Default (index-based naming)",
        };
        writeln!(f, "Alias provider: {provider}")
    }
}

fn condition_label(condition: &Condition) -> &'static str {
    match condition {
        Condition::Base(_) => "Base condition (skip flagged/renamed)",
        Condition::Whitelist(_) => "Whitelist preservation",
        Condition::TldExclusion(_) => "TLD exclusion",
        Condition::AndroidRClass(_) => "Android R class exclusion",
        Condition::CollisionAvoidance(_) => "Name collision avoidance",
        Condition::CommonWords(_) => "Common words preservation",
        Condition::ObfuscatorPattern(_) => "Obfuscator pattern detection",
        Condition::Entropy(_) => "Entropy-based detection",
        Condition::Length(_) => "Length-based detection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{ClassSymbol, FieldSymbol};

    fn names(factory: &ModeFactory, mode: DeobfuscationMode) -> Vec<&'static str> {
        factory.conditions(mode).iter().map(Condition::name).collect()
    }

    #[test]
    fn test_condition_lists() {
        let factory = ModeFactory::default();
        assert!(names(&factory, DeobfuscationMode::Disabled).is_empty());
        assert_eq!(
            names(&factory, DeobfuscationMode::Conservative),
            vec![
                "base",
                "whitelist",
                "tld-exclusion",
                "android-r-class",
                "collision-avoidance",
                "common-words",
                "obfuscator-pattern"
            ]
        );
        assert_eq!(
            names(&factory, DeobfuscationMode::Default),
            vec![
                "base",
                "whitelist",
                "tld-exclusion",
                "android-r-class",
                "collision-avoidance",
                "length"
            ]
        );
        assert_eq!(names(&factory, DeobfuscationMode::Enhanced).len(), 9);
        assert_eq!(
            names(&factory, DeobfuscationMode::Aggressive),
            vec![
                "base",
                "android-r-class",
                "collision-avoidance",
                "obfuscator-pattern",
                "entropy",
                "length"
            ]
        );
    }

    #[test]
    fn test_alias_providers() {
        let factory = ModeFactory::default();
        assert!(factory.alias_provider(DeobfuscationMode::Disabled).is_none());
        let id = |mode| factory.alias_provider(mode).map(|p| p.id());
        assert_eq!(id(DeobfuscationMode::Conservative), Some("index"));
        assert_eq!(id(DeobfuscationMode::Default), Some("index"));
        assert_eq!(id(DeobfuscationMode::Enhanced), Some("semantic"));
        assert_eq!(id(DeobfuscationMode::Aggressive), Some("semantic"));

        let plain = ModeFactory::new(DeobfuscationConfig::new().with_semantic_naming(false))
            .unwrap();
        assert_eq!(
            plain.alias_provider(DeobfuscationMode::Enhanced).map(|p| p.id()),
            Some("index")
        );
    }

    #[test]
    fn test_aggressive_drops_hint() {
        let factory = ModeFactory::default();
        let set = SymbolSet::builder().class(ClassSymbol::new("p.q")).build();
        let cls = &set.classes()[0];

        let mut enhanced = factory.alias_provider(DeobfuscationMode::Enhanced).unwrap();
        let mut aggressive = factory.alias_provider(DeobfuscationMode::Aggressive).unwrap();
        assert_eq!(enhanced.for_class(cls, &set), "C0000q");
        assert_eq!(aggressive.for_class(cls, &set), "C0000");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DeobfuscationConfig::new().with_length_bounds(8, 4);
        assert!(ModeFactory::new(config).is_err());
    }

    #[test]
    fn test_resolve_auto() {
        let factory = ModeFactory::default();
        let obfuscated = SymbolSet::builder()
            .class(ClassSymbol::new("a.a").with_field(FieldSymbol::new("b", None)))
            .build();
        let clean = SymbolSet::builder()
            .class(ClassSymbol::new("com.example.LoginActivity"))
            .build();

        assert_eq!(
            factory.resolve(DeobfuscationMode::Auto, &obfuscated),
            DeobfuscationMode::Aggressive
        );
        assert_eq!(
            factory.resolve(DeobfuscationMode::Auto, &clean),
            DeobfuscationMode::Conservative
        );
        assert_eq!(
            factory.resolve(DeobfuscationMode::Default, &obfuscated),
            DeobfuscationMode::Default
        );
    }

    #[test]
    fn test_describe() {
        let factory = ModeFactory::default();
        let text = factory.describe(DeobfuscationMode::Aggressive);
        assert!(text.starts_with("Mode: aggressive\n"));
        assert!(text.contains("  - Entropy-based detection\n"));
        assert!(!text.contains("Whitelist"));
        assert!(text.ends_with("Alias provider: Enhanced (semantic naming, type-aware)\n"));

        let text = factory.describe(DeobfuscationMode::Disabled);
        assert!(text.contains("  - No conditions (disabled)"));
        assert!(text.ends_with("Alias provider: None\n"));

        let text = factory.describe(DeobfuscationMode::Default);
        assert!(text.ends_with("Alias provider: Default (index-based naming)\n"));
    }

    #[test]
    fn test_unresolved_auto_builds_nothing() {
        let factory = ModeFactory::default();
        assert!(factory.conditions(DeobfuscationMode::Auto).is_empty());
        assert!(factory.rename_condition(DeobfuscationMode::Auto).is_none());
        assert!(factory.alias_provider(DeobfuscationMode::Auto).is_none());

        let text = factory.describe(DeobfuscationMode::Auto);
        assert!(text.contains("  - Automatically selected based on codebase analysis\n"));
        assert!(text.ends_with("Alias provider: Chosen with the resolved mode\n"));
    }

    #[test]
    fn test_presets_follow_mode() {
        let conservative = ModeFactory::preset(DeobfuscationMode::Conservative);
        assert_eq!(conservative.config().min_length, 2);
        assert_eq!(conservative.config().entropy_threshold, 4.0);

        let aggressive = ModeFactory::preset(DeobfuscationMode::Aggressive);
        assert_eq!(aggressive.config().entropy_threshold, 3.0);
        assert_eq!(aggressive.config().entropy_min_length, 2);
        assert!(!aggressive.config().preserve_original_hint);

        let enhanced = ModeFactory::preset(DeobfuscationMode::Enhanced);
        assert_eq!(enhanced.config(), ModeFactory::default().config());
    }
}
