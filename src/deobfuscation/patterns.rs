//! Tool-signature classification of names.
//!
//! [`PatternClassifier`] matches a name against a fixed, ordered library of
//! structural signatures left behind by common Java/Android obfuscators and
//! derives a tool attribution and an additive confidence score from them.
//!
//! # Signature Library
//!
//! | Signature | Example | Tool | Weight |
//! |-----------|---------|------|--------|
//! | Short letters | `a`, `ab`, `a$b` | ProGuard/R8 | 35 |
//! | Confusable only | `lIl1`, `O0o` | Allatori | 50 |
//! | Sequential prefix | `zzA`, `_a` | Zelix KlassMaster | 30 |
//! | Extended chars | `é`, symbols | DexGuard | 45 |
//! | Long hex | `a1b2c3d4`, `_0x1f` | Hash-based | 40 |
//! | Underscore fenced | `__a`, `b__` | - | 25 |
//! | Alternating | `a1b2x`, `ABC123` | - | 12 |
//! | Numeric suffix | `Foo$1` | synthetic | 0 |
//! | Lambda | `Foo$$Lambda$3` | synthetic | 0 |

use std::sync::LazyLock;

use regex::Regex;

use crate::deobfuscation::{
    detection::{ClassificationResult, ObfuscatorTool, Signature},
    entropy::{shannon_entropy, EntropyClassifier},
};

static SHORT_LETTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z]{1,2}|[a-z]\$[a-z]|[A-Z]{1,2})$").expect("short letter signature")
});
static SEQUENTIAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:zz[A-Za-z]|_[A-Za-z]{1,2})$").expect("sequential prefix signature")
});
static EXTENDED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{80}-\x{ff}]|[\x{300}-\x{36f}]|[\p{So}\p{Sk}]").expect("extended char signature")
});
static LONG_HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9a-fA-F]{8,}|_0x[0-9a-fA-F]+)$").expect("long hex signature")
});
static UNDERSCORE_FENCED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:_{2,}[A-Za-z0-9]*|[A-Za-z0-9]*_{2,})$").expect("underscore signature")
});
static ALTERNATING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z][0-9][a-zA-Z][0-9][A-Za-z0-9]*|[A-Z]{3,}[0-9]+)$")
        .expect("alternating signature")
});
static NUMERIC_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\$?[0-9]+$").expect("numeric suffix signature"));
static LAMBDA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\$Lambda\$|-\$\$").expect("lambda signature"));

/// Signature-library classifier.
///
/// The classifier is immutable after construction and can be shared freely.
/// The confusable character set and the entropy threshold used for the
/// `is_high_entropy` flag come from the wrapped [`EntropyClassifier`].
///
/// # Example
///
/// ```rust
/// use symscope::deobfuscation::{ObfuscatorTool, PatternClassifier};
///
/// let classifier = PatternClassifier::default();
/// assert_eq!(classifier.detect_obfuscator_type("a"), Some(ObfuscatorTool::ProGuard));
/// assert_eq!(classifier.detect_obfuscator_type("onClick"), None);
/// assert!(classifier.obfuscation_confidence("a") >= 40);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternClassifier {
    entropy: EntropyClassifier,
}

impl PatternClassifier {
    /// Creates a classifier around the given entropy classifier.
    #[must_use]
    pub fn new(entropy: EntropyClassifier) -> Self {
        PatternClassifier { entropy }
    }

    /// Returns the wrapped entropy classifier.
    #[must_use]
    pub fn entropy(&self) -> &EntropyClassifier {
        &self.entropy
    }

    /// Returns every signature the name matches, in library order.
    ///
    /// # Arguments
    ///
    /// * `name` - The identifier to inspect.
    ///
    /// # Returns
    ///
    /// The matching signatures; empty for an empty name.
    #[must_use]
    pub fn signatures(&self, name: &str) -> Vec<Signature> {
        if name.is_empty() {
            return Vec::new();
        }

        // A Zelix prefix such as `_o` is built from confusable characters too;
        // the prefix shape takes it.
        let sequential = SEQUENTIAL_PREFIX.is_match(name);
        let checks = [
            (Signature::ShortLetters, SHORT_LETTERS.is_match(name)),
            (
                Signature::ConfusableOnly,
                !sequential && self.entropy.is_confusable(name),
            ),
            (Signature::SequentialPrefix, sequential),
            (Signature::ExtendedChars, EXTENDED_CHARS.is_match(name)),
            (Signature::LongHex, LONG_HEX.is_match(name)),
            (Signature::UnderscoreFenced, UNDERSCORE_FENCED.is_match(name)),
            (Signature::AlternatingAlnum, ALTERNATING.is_match(name)),
            (Signature::NumericSuffix, NUMERIC_SUFFIX.is_match(name)),
            (Signature::LambdaSuffix, LAMBDA.is_match(name)),
        ];

        checks
            .into_iter()
            .filter_map(|(signature, matched)| matched.then_some(signature))
            .collect()
    }

    /// Attributes a name to the obfuscator that most likely produced it.
    ///
    /// Signatures are tried in the fixed order ProGuard/R8, Allatori, Zelix
    /// KlassMaster, DexGuard, hash-based; the first match wins.
    ///
    /// # Returns
    ///
    /// The attributed tool, or `None` for empty or unattributable names.
    #[must_use]
    pub fn detect_obfuscator_type(&self, name: &str) -> Option<ObfuscatorTool> {
        self.signatures(name).into_iter().find_map(Signature::tool)
    }

    /// Scores how likely a name is obfuscator output.
    ///
    /// The score adds a length contribution (1 char: 40, 2 chars: 30, up to
    /// 4 chars: 15), the weight of every matched signature and an entropy
    /// bonus (above 4.0: 20, above 3.5: 10), clamped to 100.
    ///
    /// # Returns
    ///
    /// A confidence between 0 and 100; `0` for an empty name.
    #[must_use]
    pub fn obfuscation_confidence(&self, name: &str) -> u32 {
        let signatures = self.signatures(name);
        Self::score(name, &signatures, shannon_entropy(name))
    }

    /// Returns `true` if the name matches any non-synthetic signature.
    #[must_use]
    pub fn matches_obfuscator_pattern(&self, name: &str) -> bool {
        self.signatures(name).iter().any(|s| !s.is_synthetic())
    }

    /// Returns `true` if the name carries a compiler numeric suffix (`$1`, `$$2`).
    #[must_use]
    pub fn is_numeric_suffix(&self, name: &str) -> bool {
        NUMERIC_SUFFIX.is_match(name)
    }

    /// Returns `true` if the name carries a compiler lambda or bridge marker.
    #[must_use]
    pub fn is_lambda(&self, name: &str) -> bool {
        LAMBDA.is_match(name)
    }

    /// Produces the full classification of a name.
    ///
    /// # Arguments
    ///
    /// * `name` - The identifier to classify.
    ///
    /// # Returns
    ///
    /// A [`ClassificationResult`] with attribution, confidence, entropy and
    /// the matched signatures.
    #[must_use]
    pub fn classify(&self, name: &str) -> ClassificationResult {
        let signatures = self.signatures(name);
        let entropy = shannon_entropy(name);

        ClassificationResult {
            tool: signatures.iter().copied().find_map(Signature::tool),
            confidence: Self::score(name, &signatures, entropy),
            is_high_entropy: self.entropy.is_high_entropy(name).unwrap_or(false),
            entropy,
            signatures,
        }
    }

    fn score(name: &str, signatures: &[Signature], entropy: f64) -> u32 {
        let length_score = match name.chars().count() {
            0 => return 0,
            1 => 40,
            2 => 30,
            3 | 4 => 15,
            _ => 0,
        };

        let signature_score: u32 = signatures.iter().map(|s| s.weight()).sum();

        let entropy_score = if entropy > 4.0 {
            20
        } else if entropy > 3.5 {
            10
        } else {
            0
        };

        (length_score + signature_score + entropy_score).min(100)
    }
}
