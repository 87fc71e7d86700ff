//! Codebase-wide obfuscation statistics and mode recommendation.
//!
//! The [`DeobfuscationAnalyzer`] classifies every class, field and method name
//! of a [`SymbolSet`] once, counts how many look like obfuscator output and
//! takes a plurality vote over the tools attributed to class names. The
//! resulting [`ObfuscationStats`] drive the `auto` mode.

use std::{cell::OnceCell, fmt};

use log::{debug, info};

use crate::{
    deobfuscation::{
        entropy::shannon_entropy, mode::DeobfuscationMode, patterns::PatternClassifier,
        ObfuscatorTool,
    },
    symbols::SymbolSet,
};

/// Obfuscation counts and rates of one symbol set.
///
/// Rates are percentages in `0.0..=100.0` and stay `0.0` when the matching
/// total is zero. The overall rate is the ratio of all obfuscated names to all
/// counted names, not an average of the per-kind rates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObfuscationStats {
    /// Number of classes
    pub total_classes: usize,
    /// Number of classes with an obfuscated name
    pub obfuscated_classes: usize,
    /// Number of methods, excluding constructors and synthetic methods
    pub total_methods: usize,
    /// Number of counted methods with an obfuscated name
    pub obfuscated_methods: usize,
    /// Number of fields
    pub total_fields: usize,
    /// Number of fields with an obfuscated name
    pub obfuscated_fields: usize,
    /// Percentage of obfuscated classes
    pub class_rate: f64,
    /// Percentage of obfuscated methods
    pub method_rate: f64,
    /// Percentage of obfuscated fields
    pub field_rate: f64,
    /// Percentage of obfuscated names over all counted symbols
    pub overall_rate: f64,
    /// Tool with the most votes among obfuscated class names
    pub detected_tool: Option<ObfuscatorTool>,
}

fn rate(obfuscated: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        obfuscated as f64 / total as f64 * 100.0
    }
}

impl ObfuscationStats {
    fn calculate_rates(&mut self) {
        self.class_rate = rate(self.obfuscated_classes, self.total_classes);
        self.method_rate = rate(self.obfuscated_methods, self.total_methods);
        self.field_rate = rate(self.obfuscated_fields, self.total_fields);

        let total = self.total_classes + self.total_methods + self.total_fields;
        let obfuscated = self.obfuscated_classes + self.obfuscated_methods + self.obfuscated_fields;
        self.overall_rate = rate(obfuscated, total);
    }

    /// Returns `true` if more than half of all names look obfuscated.
    #[must_use]
    pub fn is_heavily_obfuscated(&self) -> bool {
        self.overall_rate > 50.0
    }

    /// Returns `true` if the overall rate is above 10% and at most 50%.
    #[must_use]
    pub fn is_lightly_obfuscated(&self) -> bool {
        self.overall_rate > 10.0 && self.overall_rate <= 50.0
    }

    /// Returns `true` if at most 10% of all names look obfuscated.
    #[must_use]
    pub fn is_minimally_obfuscated(&self) -> bool {
        self.overall_rate <= 10.0
    }

    /// Maps the overall rate to the mode best suited for it.
    ///
    /// | Overall rate | Mode |
    /// |--------------|------|
    /// | > 70% | [`DeobfuscationMode::Aggressive`] |
    /// | > 30% | [`DeobfuscationMode::Enhanced`] |
    /// | > 10% | [`DeobfuscationMode::Default`] |
    /// | otherwise | [`DeobfuscationMode::Conservative`] |
    #[must_use]
    pub fn recommended_mode(&self) -> DeobfuscationMode {
        if self.overall_rate > 70.0 {
            DeobfuscationMode::Aggressive
        } else if self.overall_rate > 30.0 {
            DeobfuscationMode::Enhanced
        } else if self.overall_rate > 10.0 {
            DeobfuscationMode::Default
        } else {
            DeobfuscationMode::Conservative
        }
    }
}

impl fmt::Display for ObfuscationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Deobfuscation Analysis Report ===")?;
        writeln!(f)?;
        if let Some(tool) = self.detected_tool {
            writeln!(f, "Detected Obfuscator: {}", tool.name())?;
            writeln!(f)?;
        }

        let sections = [
            ("Classes", self.total_classes, self.obfuscated_classes, self.class_rate),
            ("Methods", self.total_methods, self.obfuscated_methods, self.method_rate),
            ("Fields", self.total_fields, self.obfuscated_fields, self.field_rate),
        ];
        for (title, total, obfuscated, rate) in sections {
            writeln!(f, "{title}:")?;
            writeln!(f, "  Total: {total}")?;
            writeln!(f, "  Obfuscated: {obfuscated} ({rate:.1}%)")?;
            writeln!(f)?;
        }

        writeln!(f, "Overall Obfuscation Rate: {:.1}%", self.overall_rate)?;
        writeln!(f)?;
        write!(f, "Recommendation: ")?;
        match self.recommended_mode() {
            DeobfuscationMode::Conservative => {
                writeln!(f, "Use CONSERVATIVE deobfuscation mode or disable")
            }
            mode => writeln!(f, "Use {} deobfuscation mode", mode.as_ref().to_uppercase()),
        }
    }
}

/// One-shot analyzer over a symbol set.
///
/// The analysis runs on the first call to [`DeobfuscationAnalyzer::analyze`]
/// (or any accessor) and is cached for the lifetime of the analyzer.
///
/// # Example
///
/// ```rust
/// use symscope::deobfuscation::{DeobfuscationAnalyzer, DeobfuscationMode};
/// use symscope::symbols::{ClassSymbol, FieldSymbol, SymbolSet};
///
/// let set = SymbolSet::builder()
///     .class(ClassSymbol::new("a.a").with_field(FieldSymbol::new("b", None)))
///     .class(ClassSymbol::new("a.b"))
///     .build();
///
/// let analyzer = DeobfuscationAnalyzer::new(&set);
/// assert_eq!(analyzer.analyze().overall_rate, 100.0);
/// assert_eq!(analyzer.recommended_mode(), DeobfuscationMode::Aggressive);
/// ```
#[derive(Debug)]
pub struct DeobfuscationAnalyzer<'a> {
    symbols: &'a SymbolSet,
    classifier: PatternClassifier,
    stats: OnceCell<ObfuscationStats>,
}

impl<'a> DeobfuscationAnalyzer<'a> {
    /// Creates an analyzer using the default classifiers.
    #[must_use]
    pub fn new(symbols: &'a SymbolSet) -> Self {
        Self::with_classifier(symbols, PatternClassifier::default())
    }

    /// Creates an analyzer using a configured classifier.
    ///
    /// # Arguments
    ///
    /// * `symbols` - The symbol set to analyze.
    /// * `classifier` - Classifier for signatures and structural shapes.
    #[must_use]
    pub fn with_classifier(symbols: &'a SymbolSet, classifier: PatternClassifier) -> Self {
        DeobfuscationAnalyzer {
            symbols,
            classifier,
            stats: OnceCell::new(),
        }
    }

    /// Checks if a name is likely obfuscator output.
    ///
    /// A name qualifies if its confidence reaches 50, if it is longer than
    /// three characters with an entropy above 4.0, or if it has a structural
    /// obfuscator shape.
    #[must_use]
    pub fn is_likely_obfuscated(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.classifier.obfuscation_confidence(name) >= 50
            || (shannon_entropy(name) > 4.0 && name.chars().count() > 3)
            || self
                .classifier
                .entropy()
                .has_structural_obfuscator_pattern(name)
    }

    /// Runs the analysis, or returns the cached result of an earlier run.
    pub fn analyze(&self) -> &ObfuscationStats {
        self.stats.get_or_init(|| self.compute())
    }

    /// Returns the tool with the most votes, if any class was attributed.
    pub fn detected_tool(&self) -> Option<ObfuscatorTool> {
        self.analyze().detected_tool
    }

    /// Returns the mode recommended for the analyzed symbol set.
    pub fn recommended_mode(&self) -> DeobfuscationMode {
        self.analyze().recommended_mode()
    }

    /// Renders the human readable analysis report.
    pub fn report(&self) -> String {
        self.analyze().to_string()
    }

    /// Writes the analysis summary to the `info` log level.
    pub fn log_analysis(&self) {
        let stats = self.analyze();
        info!("Deobfuscation analysis:");
        if let Some(tool) = stats.detected_tool {
            info!("  Detected obfuscator: {}", tool.name());
        }
        info!(
            "  Classes: {} total, {} obfuscated ({:.1}%)",
            stats.total_classes, stats.obfuscated_classes, stats.class_rate
        );
        info!(
            "  Methods: {} total, {} obfuscated ({:.1}%)",
            stats.total_methods, stats.obfuscated_methods, stats.method_rate
        );
        info!(
            "  Fields: {} total, {} obfuscated ({:.1}%)",
            stats.total_fields, stats.obfuscated_fields, stats.field_rate
        );
        info!("  Overall obfuscation rate: {:.1}%", stats.overall_rate);
    }

    fn compute(&self) -> ObfuscationStats {
        let mut stats = ObfuscationStats::default();
        // first-seen order is kept so that ties resolve to the earliest tool
        let mut votes: Vec<(ObfuscatorTool, usize)> = Vec::new();

        for cls in self.symbols.classes() {
            stats.total_classes += 1;
            if self.is_likely_obfuscated(&cls.name) {
                stats.obfuscated_classes += 1;
                if let Some(tool) = self.classifier.detect_obfuscator_type(&cls.name) {
                    match votes.iter_mut().find(|(t, _)| *t == tool) {
                        Some((_, count)) => *count += 1,
                        None => votes.push((tool, 1)),
                    }
                }
            }

            for field in &cls.fields {
                stats.total_fields += 1;
                if self.is_likely_obfuscated(&field.name) {
                    stats.obfuscated_fields += 1;
                }
            }

            for method in &cls.methods {
                if method.is_constructor || method.flags.is_synthetic() {
                    continue;
                }
                stats.total_methods += 1;
                if self.is_likely_obfuscated(&method.name) {
                    stats.obfuscated_methods += 1;
                }
            }
        }

        stats.detected_tool = plurality(&votes);
        stats.calculate_rates();
        stats
    }
}

fn plurality(votes: &[(ObfuscatorTool, usize)]) -> Option<ObfuscatorTool> {
    let mut winner: Option<(ObfuscatorTool, usize)> = None;
    for &(tool, count) in votes {
        match winner {
            Some((_, best)) if count <= best => {
                if count == best {
                    debug!("tool vote tie between {tool} and earlier candidate at {count} votes");
                }
            }
            _ => winner = Some((tool, count)),
        }
    }
    winner.map(|(tool, _)| tool)
}
