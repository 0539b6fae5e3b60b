//! Error types for the DesignWare HDMI CEC driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Argument and configuration validation
//! - [`FrameError`]: Frame construction
//! - [`IoError`]: Runtime command failures
//!
//! The unified [`Error`] enum wraps all domain errors.
//!
//! Transmit outcomes (`Ok`, `Nack`, `MaxRetries`) are not errors of the
//! driver: they are reported through
//! [`TransmitStatus`](super::state::TransmitStatus) on the event path.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and argument validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Logical address outside 0-14 (and not the release sentinel)
    InvalidLogicalAddress,
    /// Register stride shift larger than supported
    InvalidRegisterShift,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidLogicalAddress => "invalid logical address",
            ConfigError::InvalidRegisterShift => "invalid register shift",
        }
    }
}

// =============================================================================
// Frame Errors
// =============================================================================

/// Frame construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Frame has no header byte
    Empty,
    /// Frame longer than 16 bytes
    TooLong,
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FrameError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            FrameError::Empty => "empty frame",
            FrameError::TooLong => "frame longer than 16 bytes",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Runtime command errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// Controller is disabled
    NotEnabled,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::NotEnabled => "controller not enabled",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// ```ignore
/// match cec.transmit(attempts, sft, &frame) {
///     Err(Error::Io(IoError::NotEnabled)) => { /* enable first */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// Frame error
    Frame(FrameError),
    /// I/O error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Frame(e) => write!(f, "frame: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<FrameError> for Error {
    fn from(e: FrameError) -> Self {
        Error::Frame(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for CEC operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for frame construction
pub type FrameResult<T> = core::result::Result<T, FrameError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    extern crate std;
    use std::format;

    use super::*;

    #[test]
    fn config_error_display() {
        let display = format!("{}", ConfigError::InvalidLogicalAddress);
        assert_eq!(display, "invalid logical address");
    }

    #[test]
    fn frame_error_as_str_non_empty() {
        for variant in [FrameError::Empty, FrameError::TooLong] {
            assert!(!variant.as_str().is_empty(), "FrameError::{variant:?} has empty string");
        }
    }

    #[test]
    fn error_display_has_domain_prefix() {
        assert_eq!(
            format!("{}", Error::from(ConfigError::InvalidRegisterShift)),
            "config: invalid register shift"
        );
        assert_eq!(
            format!("{}", Error::from(FrameError::TooLong)),
            "frame: frame longer than 16 bytes"
        );
        assert_eq!(
            format!("{}", Error::from(IoError::NotEnabled)),
            "io: controller not enabled"
        );
    }

    #[test]
    fn question_mark_converts_domain_errors() {
        fn build() -> Result<()> {
            let frame: FrameResult<()> = Err(FrameError::Empty);
            frame?;
            Ok(())
        }

        assert_eq!(build(), Err(Error::Frame(FrameError::Empty)));
    }
}
