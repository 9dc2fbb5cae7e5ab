use thiserror::Error;

/// Result type for kit operations.
///
/// This `Result` type is a standard Rust `Result` type where the error variant is defined by the
/// kit-specific [`Error`] enum.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum representing possible errors that can occur in the Taplytics kit.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// The required `apiKey` kit setting is missing or empty.
    ///
    /// The creation signal leaves the kit untouched, so the host may retry with corrected
    /// settings.
    #[error("failed to initialize Taplytics SDK - an API key is required")]
    MissingApiKey,
}
