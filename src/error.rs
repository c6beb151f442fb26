//! Error handling for the `mathjax-config` crate.
//!
//! The crate exposes a single [`Error`] enum which groups the different
//! categories of failures that can occur while validating a configuration or
//! serializing it into the option document consumed by MathJax. All public,
//! fallible APIs return a [`Result<T, Error>`].
//!
//! Error variants are intentionally coarse‑grained so that downstream users
//! can either pattern‑match to distinguish between *configuration* problems
//! (a delimiter table the MathJax preprocessor could never apply) and
//! *serialization* problems (usually a bug), or simply bubble them up
//! with `?`.

/// Error type for this crate.
#[non_exhaustive]
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A math delimiter pair with an empty opening or closing token.
    ///
    /// The tex2jax preprocessor matches spans between literal opening and
    /// closing tokens; an empty token would match everywhere, so it is
    /// rejected here rather than surfacing as page-wide misbehavior inside
    /// MathJax itself.
    #[error("empty token in math delimiter pair ({0:?}, {1:?})")]
    EmptyDelimiter(String, String),
    /// The same delimiter pair registered more than once across the combined
    /// inline and display tables.
    ///
    /// A duplicate makes the inline/display classification of a matched span
    /// ambiguous.
    #[error("duplicate math delimiter pair ({0:?}, {1:?})")]
    DuplicateDelimiter(String, String),
    /// Failure while serializing the configuration into its JSON document.
    ///
    /// The string payload contains the message reported by the serializer.
    #[error("failed to serialize configuration (detail: {0})")]
    Serialize(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

/// Convenient alias used throughout the crate.
///
/// This corresponds to `core::result::Result<T, mathjax_config::Error>`.
pub type Result<T, E = Error> = core::result::Result<T, E>;
