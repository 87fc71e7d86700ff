//! Shannon-entropy and structural-shape classification of names.
//!
//! Random-looking identifiers produced by obfuscators have a flatter
//! character distribution than names written by people. This module measures
//! that distribution and recognizes a handful of shapes (single letters,
//! repeated characters, confusable-only or encoded-looking names) that are
//! obfuscator output regardless of their entropy.

/// Default entropy threshold above which a name is considered random.
pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 3.5;

/// Default minimum name length for an entropy verdict.
pub const DEFAULT_ENTROPY_MIN_LENGTH: usize = 3;

/// Default set of visually confusable characters.
pub const DEFAULT_CONFUSABLE_CHARS: &str = "lI10Oo_";

/// Computes the Shannon entropy of a name in bits.
///
/// Only characters with a code point below 256 take part in the frequency
/// count. Empty input, or input without any such character, yields `0.0`.
///
/// # Arguments
///
/// * `name` - The identifier to measure.
///
/// # Returns
///
/// `-Σ p(c)·log2(p(c))` over the distinct characters of the name.
#[must_use]
pub fn shannon_entropy(name: &str) -> f64 {
    let mut counts = [0u32; 256];
    let mut total = 0u32;
    for c in name.chars() {
        let code = c as u32;
        if code < 256 {
            counts[code as usize] += 1;
            total += 1;
        }
    }

    if total == 0 {
        return 0.0;
    }

    let total = f64::from(total);
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy and structural-shape classifier.
///
/// Holds the configurable threshold, the minimum length for an entropy
/// verdict and the confusable character set.
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyClassifier {
    threshold: f64,
    min_length: usize,
    confusable: Vec<char>,
}

impl Default for EntropyClassifier {
    fn default() -> Self {
        Self::new(
            DEFAULT_ENTROPY_THRESHOLD,
            DEFAULT_ENTROPY_MIN_LENGTH,
            DEFAULT_CONFUSABLE_CHARS,
        )
    }
}

impl EntropyClassifier {
    /// Creates a classifier.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Entropy above which a name is high-entropy.
    /// * `min_length` - Names shorter than this get no entropy verdict.
    /// * `confusable` - Characters considered visually confusable.
    #[must_use]
    pub fn new(threshold: f64, min_length: usize, confusable: &str) -> Self {
        EntropyClassifier {
            threshold,
            min_length,
            confusable: confusable.chars().collect(),
        }
    }

    /// Returns the configured threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the configured minimum length.
    #[must_use]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Computes the Shannon entropy of a name, see [`shannon_entropy`].
    #[must_use]
    pub fn shannon_entropy(&self, name: &str) -> f64 {
        shannon_entropy(name)
    }

    /// Produces the high-entropy verdict for a name.
    ///
    /// # Returns
    ///
    /// `None` when the name is shorter than the minimum length, otherwise
    /// whether its entropy is strictly above the threshold.
    #[must_use]
    pub fn is_high_entropy(&self, name: &str) -> Option<bool> {
        if name.chars().count() < self.min_length {
            return None;
        }
        Some(shannon_entropy(name) > self.threshold)
    }

    /// Checks whether a name has an obfuscator shape independent of entropy.
    ///
    /// A name qualifies if it is a single character, two letters, a run of
    /// one repeated character (length ≥ 3), made only of confusable
    /// characters (length ≥ 3), or looks like an encoded blob.
    #[must_use]
    pub fn has_structural_obfuscator_pattern(&self, name: &str) -> bool {
        let chars: Vec<char> = name.chars().collect();
        match chars.len() {
            0 => false,
            1 => true,
            2 if chars.iter().all(|c| c.is_alphabetic()) => true,
            _ => {
                is_repeated_char(&chars)
                    || self.is_confusable_only(&chars)
                    || looks_encoded(&chars)
            }
        }
    }

    /// Returns `true` if every character of the name is in the confusable set.
    #[must_use]
    pub fn is_confusable(&self, name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| self.confusable.contains(&c))
    }

    fn is_confusable_only(&self, chars: &[char]) -> bool {
        chars.len() >= 3 && chars.iter().all(|c| self.confusable.contains(c))
    }
}

fn is_repeated_char(chars: &[char]) -> bool {
    chars.len() >= 3 && chars.iter().all(|c| *c == chars[0])
}

/// Hex-only with length ≥ 6, or base64-like with more than one of `+/=`.
fn looks_encoded(chars: &[char]) -> bool {
    if chars.len() < 4 {
        return false;
    }
    if chars.len() >= 6 && chars.iter().all(char::is_ascii_hexdigit) {
        return true;
    }
    let special = chars.iter().filter(|c| matches!(c, '+' | '/' | '=')).count();
    special > 1 && chars.len() >= 8
}
