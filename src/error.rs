use thiserror::Error;

macro_rules! config_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidConfig {
            message: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidConfig {
            message: format!($fmt, $($arg)*),
        }
    };
}

pub(crate) use config_error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Classification, rename conditions and alias synthesis are total and never fail. Errors only
/// surface at the operator-facing edges of the crate: turning a textual mode selector into a
/// [`crate::deobfuscation::DeobfuscationMode`] and accepting a
/// [`crate::deobfuscation::DeobfuscationConfig`].
///
/// # Error Categories
///
/// ## Operator Input Errors
/// - [`Error::UnknownMode`] - Mode selector string did not name a known mode
///
/// ## Configuration Errors
/// - [`Error::InvalidConfig`] - Configuration values are inconsistent
///
/// # Examples
///
/// ```rust
/// use symscope::{Error, deobfuscation::DeobfuscationMode};
///
/// match "turbo".parse::<DeobfuscationMode>() {
///     Ok(mode) => println!("selected {mode}"),
///     Err(Error::UnknownMode(name)) => eprintln!("no such mode: {name}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested deobfuscation mode does not exist.
    ///
    /// Raised when parsing a mode selector such as `"auto"` or `"aggressive"`
    /// from user input. The associated string is the rejected input.
    #[error("Unknown deobfuscation mode - {0}")]
    UnknownMode(String),

    /// The deobfuscation configuration is invalid.
    ///
    /// Raised by [`crate::deobfuscation::DeobfuscationConfig::validate`] when
    /// length bounds are inverted, the entropy threshold is not a finite
    /// non-negative number, or the de-duplication separator cannot appear in
    /// an identifier.
    ///
    /// # Fields
    ///
    /// * `message` - Description of the offending setting
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// The message to be printed for the InvalidConfig error
        message: String,
    },
}
