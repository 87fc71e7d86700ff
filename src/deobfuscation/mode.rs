//! Rename modes selectable by the operator.

use std::str::FromStr;

use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::Error;

/// How eagerly symbols are renamed.
///
/// The textual form is the lowercase variant name and is accepted
/// case-insensitively when parsing.
///
/// # Example
///
/// ```rust
/// use symscope::deobfuscation::DeobfuscationMode;
///
/// let mode: DeobfuscationMode = "Enhanced".parse()?;
/// assert_eq!(mode, DeobfuscationMode::Enhanced);
/// assert_eq!(mode.to_string(), "enhanced");
/// # Ok::<(), symscope::Error>(())
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum DeobfuscationMode {
    /// No symbol is renamed
    Disabled,
    /// Only clear obfuscator signatures are renamed
    Conservative,
    /// Length-driven renaming with index-based aliases
    #[default]
    Default,
    /// Signature, entropy and length detection with semantic aliases
    Enhanced,
    /// Every detector, no vocabulary or whitelist protection
    Aggressive,
    /// Picked from a codebase-wide analysis
    Auto,
}

impl DeobfuscationMode {
    /// Returns a one-line human readable description.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            DeobfuscationMode::Disabled => "Deobfuscation disabled",
            DeobfuscationMode::Conservative => {
                "Conservative - minimal renaming, fewer false positives"
            }
            DeobfuscationMode::Default => "Default - balanced detection and preservation",
            DeobfuscationMode::Enhanced => {
                "Enhanced - advanced pattern detection with word preservation"
            }
            DeobfuscationMode::Aggressive => {
                "Aggressive - maximum renaming, may have false positives"
            }
            DeobfuscationMode::Auto => {
                "Auto - automatically selects mode based on obfuscation analysis"
            }
        }
    }

    /// Returns `false` only for [`DeobfuscationMode::Disabled`].
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self != DeobfuscationMode::Disabled
    }
}

impl FromStr for DeobfuscationMode {
    type Err = Error;

    fn from_str(name: &str) -> crate::Result<Self> {
        let wanted = name.trim();
        DeobfuscationMode::iter()
            .find(|mode| mode.as_ref().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownMode(name.to_string()))
    }
}
