//! Emission of a [`HubConfig`] into script fragments a host page embeds.
//!
//! MathJax v2 picks its configuration up from a
//! `<script type="text/x-mathjax-config">` block that runs
//! `MathJax.Hub.Config({...})` before the loader script executes. The
//! functions here produce that statement alone ([`config_script`]) or the
//! complete `<head>` fragment including the loader tag ([`head_content`] /
//! [`head_content_from`]).

use crate::config::HubConfig;
use crate::error::Result;

/// Loader URL used by [`head_content`].
///
/// The `TeX-AMS_CHTML` combined file matches the stock [`HubConfig`]: TeX
/// input, CommonHTML output, AMS extensions available.
const MATHJAX_CDN: &str =
    "https://cdn.jsdelivr.net/npm/mathjax@2.7.9/MathJax.js?config=TeX-AMS_CHTML";

/// Render the `MathJax.Hub.Config({...});` statement for a configuration.
///
/// Fails if the delimiter tables are invalid; see
/// [`HubConfig::to_value`].
pub fn config_script(config: impl AsRef<HubConfig>) -> Result<String> {
    let doc = config.as_ref().to_value()?;
    Ok(format!(
        "MathJax.Hub.Config({});\n",
        serde_json::to_string_pretty(&doc)?
    ))
}

/// Render a complete `<head>` fragment: the configuration block followed by
/// the CDN loader tag.
///
/// # Examples
///
/// ```
/// let head = mathjax_config::head_content(mathjax_config::HubConfig::default()).unwrap();
/// assert!(head.contains("text/x-mathjax-config"));
/// assert!(head.contains("MathJax.js"));
/// ```
pub fn head_content(config: impl AsRef<HubConfig>) -> Result<String> {
    head_content_from(config, MATHJAX_CDN)
}

/// Like [`head_content`], but load MathJax from a caller-supplied URL.
///
/// Documentation builds that vendor MathJax point this at a static path such
/// as `mathjax/MathJax.js?config=TeX-AMS_CHTML` instead of the CDN.
pub fn head_content_from(config: impl AsRef<HubConfig>, src: &str) -> Result<String> {
    Ok(format!(
        "<script type=\"text/x-mathjax-config\">\n{config}</script>\n\
         <script async src=\"{src}\"></script>\n",
        config = config_script(config)?,
    ))
}
