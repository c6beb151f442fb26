//! This crate produces typed configuration for [MathJax](https://www.mathjax.org).
//! This allows documentation pages to configure client-side math rendering
//! without hand-maintaining a JavaScript options blob.
//!
//! # Usage
//!
//! Add this to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! mathjax-config = "0.1"
//! ```
//!
//! The central type is [`HubConfig`]: an immutable value constructed once,
//! then serialized into the `MathJax.Hub.Config({...})` statement (or a full
//! `<head>` fragment) that the hosting page embeds. The MathJax runtime
//! itself stays external; this crate only owns the configuration contract.
//!
//! # Examples
//!
//! ```
//! let head = mathjax_config::head_content(mathjax_config::HubConfig::default()).unwrap();
//!
//! let config = mathjax_config::HubConfig::builder()
//!     .output(mathjax_config::OutputJax::Svg)
//!     .build()
//!     .unwrap();
//! let script = mathjax_config::config_script(&config).unwrap();
//! assert!(script.starts_with("MathJax.Hub.Config("));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::{
    DelimiterPair, FontPreferences, HubConfig, HubConfigBuilder, InputJax, MenuSettings,
    MessageStyle, OutputJax, TexPreprocessor, ZoomTrigger,
};

pub mod script;
pub use script::{config_script, head_content, head_content_from};

/// MathJax version the stock loader URL pins.
pub const MATHJAX_VERSION: &str = "2.7.9";

#[cfg(test)]
mod tests;
