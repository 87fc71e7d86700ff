//! Detection results and obfuscator identities for name classification.
//!
//! This module provides the tool attribution enum, the named signature
//! library entries and the per-name [`ClassificationResult`] that records
//! which evidence contributed to a confidence score.

use std::fmt;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Obfuscation tools that can be attributed from a single name.
///
/// The string form (`Display`/`FromStr`) is the stable tool id used in
/// reports and logs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
pub enum ObfuscatorTool {
    /// ProGuard or R8 short letter names (`a`, `ab`, `a$b`)
    #[strum(serialize = "proguard")]
    ProGuard,
    /// Allatori confusable-character names (`lIl1`, `O0o`)
    #[strum(serialize = "allatori")]
    Allatori,
    /// Zelix KlassMaster sequential prefixes (`zzA`, `_a`)
    #[strum(serialize = "zelix")]
    Zelix,
    /// DexGuard extended, combining or symbol characters
    #[strum(serialize = "dexguard")]
    DexGuard,
    /// Hash-like hexadecimal names
    #[strum(serialize = "hash-based")]
    HashBased,
}

impl ObfuscatorTool {
    /// Returns the stable identifier of the tool.
    ///
    /// # Returns
    ///
    /// A short lowercase id such as `"proguard"` or `"hash-based"`.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Returns the human-readable name of the tool.
    ///
    /// # Returns
    ///
    /// The display name used in analysis reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ObfuscatorTool::ProGuard => "ProGuard/R8",
            ObfuscatorTool::Allatori => "Allatori",
            ObfuscatorTool::Zelix => "Zelix KlassMaster",
            ObfuscatorTool::DexGuard => "DexGuard",
            ObfuscatorTool::HashBased => "Hash-based obfuscator",
        }
    }
}

/// One entry of the structural signature library.
///
/// Signatures are recognizers over the literal name. Each carries a fixed
/// confidence weight and, for the attributable ones, the tool it identifies.
/// The two synthetic signatures mark compiler output and are only used to
/// skip symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Signature {
    /// One or two letters of the same case, or `a$b`
    ShortLetters,
    /// Only characters from the confusable set
    ConfusableOnly,
    /// `zzX`, `_X` or `_XY`
    SequentialPrefix,
    /// Extended Latin-1, combining marks or symbol characters
    ExtendedChars,
    /// At least 8 hexadecimal digits, or `_0x` followed by hex digits
    LongHex,
    /// Leading or trailing run of two or more underscores
    UnderscoreFenced,
    /// Alternating letter/digit prefix, or capitals followed by digits
    AlternatingAlnum,
    /// Compiler numbered suffix (`$1`, `$$2`)
    NumericSuffix,
    /// Compiler lambda or bridge marker (`$$Lambda$`, `-$$`)
    LambdaSuffix,
}

impl Signature {
    /// Returns the confidence weight contributed when this signature matches.
    #[must_use]
    pub fn weight(self) -> u32 {
        match self {
            Signature::ShortLetters => 35,
            Signature::ConfusableOnly => 50,
            Signature::SequentialPrefix => 30,
            Signature::ExtendedChars => 45,
            Signature::LongHex => 40,
            Signature::UnderscoreFenced => 25,
            Signature::AlternatingAlnum => 12,
            Signature::NumericSuffix | Signature::LambdaSuffix => 0,
        }
    }

    /// Returns the tool this signature attributes, if any.
    #[must_use]
    pub fn tool(self) -> Option<ObfuscatorTool> {
        match self {
            Signature::ShortLetters => Some(ObfuscatorTool::ProGuard),
            Signature::ConfusableOnly => Some(ObfuscatorTool::Allatori),
            Signature::SequentialPrefix => Some(ObfuscatorTool::Zelix),
            Signature::ExtendedChars => Some(ObfuscatorTool::DexGuard),
            Signature::LongHex => Some(ObfuscatorTool::HashBased),
            Signature::UnderscoreFenced
            | Signature::AlternatingAlnum
            | Signature::NumericSuffix
            | Signature::LambdaSuffix => None,
        }
    }

    /// Returns `true` for signatures that denote compiler-generated names.
    #[must_use]
    pub fn is_synthetic(self) -> bool {
        matches!(self, Signature::NumericSuffix | Signature::LambdaSuffix)
    }
}

/// Classification of a single bare name.
///
/// Produced by [`crate::deobfuscation::PatternClassifier::classify`]. The
/// confidence is on a 0-100 scale:
/// - 0-29: Probably an original name
/// - 30-49: Suspicious
/// - 50-100: Likely obfuscator output
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassificationResult {
    /// Tool attributed by the first matching attributable signature
    pub tool: Option<ObfuscatorTool>,
    /// Additive confidence score, clamped to 100
    pub confidence: u32,
    /// Whether the entropy exceeds the configured threshold
    pub is_high_entropy: bool,
    /// Shannon entropy of the name in bits
    pub entropy: f64,
    /// Signatures that matched, in library order
    pub signatures: Vec<Signature>,
}

impl ClassificationResult {
    /// Checks if the confidence meets or exceeds a threshold.
    ///
    /// # Arguments
    ///
    /// * `threshold` - The threshold to compare against.
    ///
    /// # Returns
    ///
    /// `true` if the confidence is greater than or equal to the threshold.
    #[must_use]
    pub fn meets_threshold(&self, threshold: u32) -> bool {
        self.confidence >= threshold
    }

    /// Checks if this is a confident detection (confidence >= 50).
    #[must_use]
    pub fn is_confident(&self) -> bool {
        self.meets_threshold(50)
    }

    /// Returns `true` if a compiler-synthetic signature matched.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.signatures.iter().any(|s| s.is_synthetic())
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tool {
            Some(tool) => write!(f, "{} ({}%", tool.name(), self.confidence)?,
            None => write!(f, "unattributed ({}%", self.confidence)?,
        }
        write!(f, ", entropy {:.2})", self.entropy)
    }
}
