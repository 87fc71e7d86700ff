//! Configuration for the rename engine.
//!
//! This module provides the tunable knobs shared by the rename conditions,
//! the classifiers and the alias providers of one run.

use crate::{
    deobfuscation::{
        entropy::{
            EntropyClassifier, DEFAULT_CONFUSABLE_CHARS, DEFAULT_ENTROPY_MIN_LENGTH,
            DEFAULT_ENTROPY_THRESHOLD,
        },
        naming::NamingIndex,
        patterns::PatternClassifier,
    },
    error::config_error,
    Result,
};

/// Whitelist entries applied when no other whitelist is configured.
///
/// Support library and AndroidX packages are commonly kept by shrinker rules
/// but still contain short names that look obfuscated.
pub const DEFAULT_WHITELIST: &[&str] = &[
    "android.support.v4.*",
    "android.support.v7.*",
    "android.support.v4.os.*",
    "android.support.annotation.Px",
    "androidx.core.os.*",
    "androidx.annotation.Px",
];

/// Configuration for one rename run.
///
/// Controls the length bounds, entropy detection, whitelist and naming style.
/// The mode decides which conditions participate; this configuration decides
/// how each of them behaves.
#[derive(Debug, Clone, PartialEq)]
pub struct DeobfuscationConfig {
    /// Names shorter than this are force-renamed by the length condition (default: 3).
    pub min_length: usize,

    /// Names longer than this are force-renamed and hinted by hash (default: 64).
    pub max_length: usize,

    /// Whitelisted packages (`prefix.*`) and classes (qualified names).
    pub whitelist: Vec<String>,

    /// Shannon entropy above which a name is considered random (default: 3.5).
    pub entropy_threshold: f64,

    /// Names shorter than this are never judged by entropy (default: 3).
    pub entropy_min_length: usize,

    /// Characters that are visually confusable with each other.
    pub confusable_chars: String,

    /// Use semantic aliases in the modes that support them (default: true).
    ///
    /// When disabled every mode falls back to index-based names.
    pub use_semantic_naming: bool,

    /// Append a hint derived from the original name to semantic aliases (default: true).
    pub preserve_original_hint: bool,

    /// Prefix semantic aliases with structural roles and type codes (default: true).
    pub role_prefixes: bool,

    /// Prefix class aliases with their closest framework base (default: true).
    pub framework_bases: bool,

    /// Tag class aliases with recognized structural patterns (default: true).
    pub semantic_tags: bool,

    /// Separator between a duplicate alias and its counter (default: `_`).
    pub dedup_separator: String,

    /// Starting values of the naming counters.
    pub initial_index: NamingIndex,
}

impl Default for DeobfuscationConfig {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 64,
            whitelist: DEFAULT_WHITELIST.iter().map(|s| (*s).to_string()).collect(),
            entropy_threshold: DEFAULT_ENTROPY_THRESHOLD,
            entropy_min_length: DEFAULT_ENTROPY_MIN_LENGTH,
            confusable_chars: DEFAULT_CONFUSABLE_CHARS.to_string(),
            use_semantic_naming: true,
            preserve_original_hint: true,
            role_prefixes: true,
            framework_bases: true,
            semantic_tags: true,
            dedup_separator: "_".to_string(),
            initial_index: NamingIndex::default(),
        }
    }
}

impl DeobfuscationConfig {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that renames as little as possible.
    ///
    /// Only names of a single character are too short and the entropy bar is
    /// raised to 4.0.
    #[must_use]
    pub fn conservative() -> Self {
        Self {
            min_length: 2,
            entropy_threshold: 4.0,
            entropy_min_length: 4,
            ..Self::default()
        }
    }

    /// Creates a configuration that flags more names as obfuscated.
    ///
    /// Lowers the entropy bar to 3.0, judges entropy from two characters on
    /// and drops original-name hints from aliases.
    #[must_use]
    pub fn aggressive() -> Self {
        Self {
            entropy_threshold: 3.0,
            entropy_min_length: 2,
            preserve_original_hint: false,
            ..Self::default()
        }
    }

    /// Sets the length bounds.
    ///
    /// # Arguments
    ///
    /// * `min_length` - Shortest name that is left alone.
    /// * `max_length` - Longest name that is left alone.
    #[must_use]
    pub fn with_length_bounds(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Replaces the whitelist.
    ///
    /// # Arguments
    ///
    /// * `entries` - Package patterns (`prefix.*`) or qualified class names.
    #[must_use]
    pub fn with_whitelist<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.whitelist = entries.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the entropy detection parameters.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Entropy above which a name is random.
    /// * `min_length` - Shortest name judged by entropy.
    #[must_use]
    pub fn with_entropy(mut self, threshold: f64, min_length: usize) -> Self {
        self.entropy_threshold = threshold;
        self.entropy_min_length = min_length;
        self
    }

    /// Sets the confusable character set.
    #[must_use]
    pub fn with_confusable_chars(mut self, chars: impl Into<String>) -> Self {
        self.confusable_chars = chars.into();
        self
    }

    /// Enables or disables semantic naming.
    #[must_use]
    pub fn with_semantic_naming(mut self, enable: bool) -> Self {
        self.use_semantic_naming = enable;
        self
    }

    /// Enables or disables original-name hints in semantic aliases.
    #[must_use]
    pub fn with_original_hint(mut self, enable: bool) -> Self {
        self.preserve_original_hint = enable;
        self
    }

    /// Sets the separator used to de-duplicate aliases.
    #[must_use]
    pub fn with_dedup_separator(mut self, separator: impl Into<String>) -> Self {
        self.dedup_separator = separator.into();
        self
    }

    /// Seeds the naming counters.
    ///
    /// # Arguments
    ///
    /// * `index` - Counters to continue from, e.g. the final index of a previous run.
    #[must_use]
    pub fn with_initial_index(mut self, index: NamingIndex) -> Self {
        self.initial_index = index;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfig`] if:
    /// - `min_length` is greater than `max_length`
    /// - `max_length` is zero
    /// - the entropy threshold is negative, NaN or infinite
    /// - the de-duplication separator is empty or contains characters outside `[A-Za-z0-9_$]`
    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 {
            return Err(config_error!("max_length must be greater than zero"));
        }
        if self.min_length > self.max_length {
            return Err(config_error!(
                "min_length ({}) exceeds max_length ({})",
                self.min_length,
                self.max_length
            ));
        }
        if !self.entropy_threshold.is_finite() || self.entropy_threshold < 0.0 {
            return Err(config_error!(
                "entropy_threshold must be a finite non-negative number, got {}",
                self.entropy_threshold
            ));
        }
        if self.dedup_separator.is_empty() {
            return Err(config_error!("dedup_separator must not be empty"));
        }
        if !self
            .dedup_separator
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        {
            return Err(config_error!(
                "dedup_separator '{}' contains characters not allowed in identifiers",
                self.dedup_separator
            ));
        }
        Ok(())
    }

    /// Builds the entropy classifier described by this configuration.
    #[must_use]
    pub fn entropy_classifier(&self) -> EntropyClassifier {
        EntropyClassifier::new(
            self.entropy_threshold,
            self.entropy_min_length,
            &self.confusable_chars,
        )
    }

    /// Builds the pattern classifier described by this configuration.
    #[must_use]
    pub fn pattern_classifier(&self) -> PatternClassifier {
        PatternClassifier::new(self.entropy_classifier())
    }
}
