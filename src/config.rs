//! Configuration options controlling how MathJax finds and displays math.
//!
//! The central type is [`HubConfig`], constructed either via [`Default`] (which
//! reproduces the stock documentation-page setup) or (more commonly) via the
//! ergonomic [`HubConfig::builder`]. The value is immutable once built and is
//! handed to the emission functions in [`crate::script`]; nothing here mutates
//! page-global state.
//!
//! See the upstream MathJax v2 documentation for the semantics of most fields:
//! <https://docs.mathjax.org/en/v2.7-latest/options/hub.html>. The tex2jax
//! preprocessor options are documented at
//! <https://docs.mathjax.org/en/v2.7-latest/options/preprocessors/tex2jax.html>.
//!
//! # Example
//!
//! Basic usage with the builder pattern:
//! ```
//! let config = mathjax_config::HubConfig::builder()
//!     .output(mathjax_config::OutputJax::Svg)
//!     .message_style(mathjax_config::MessageStyle::Simple)
//!     .build()
//!     .unwrap();
//! let script = mathjax_config::config_script(&config).unwrap();
//! assert!(script.contains("output/SVG"));
//! ```

use crate::error::{Error, Result};
use derive_builder::Builder;
use itertools::Itertools;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// A paired opening and closing token marking a math span in page text.
///
/// Serializes as a two-element array, the shape the tex2jax preprocessor
/// expects (`["$", "$"]`).
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct DelimiterPair(String, String);

impl DelimiterPair {
    /// Create a delimiter pair from its opening and closing tokens.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self(open.into(), close.into())
    }

    /// The opening token.
    pub fn open(&self) -> &str {
        &self.0
    }

    /// The closing token.
    pub fn close(&self) -> &str {
        &self.1
    }
}

impl<O: Into<String>, C: Into<String>> From<(O, C)> for DelimiterPair {
    fn from((open, close): (O, C)) -> Self {
        Self::new(open, close)
    }
}

/// Options for the tex2jax preprocessor, which scans page text for math
/// delimiters before any typesetting happens.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TexPreprocessor {
    /// Delimiter pairs marking inline math spans.
    pub inline_math: Vec<DelimiterPair>,
    /// Delimiter pairs marking display math blocks.
    pub display_math: Vec<DelimiterPair>,
    /// Whether `\$` escapes a literal dollar sign instead of opening a span.
    pub process_escapes: bool,
}

impl Default for TexPreprocessor {
    fn default() -> Self {
        Self {
            inline_math: vec![
                DelimiterPair::new("$", "$"),
                DelimiterPair::new(r"\(", r"\)"),
            ],
            display_math: vec![
                DelimiterPair::new("$$", "$$"),
                DelimiterPair::new(r"\[", r"\]"),
            ],
            process_escapes: true,
        }
    }
}

/// Font preferences for the HTML-based output renderers.
///
/// MathJax v2 reads these from the `HTML-CSS` configuration block for the
/// HTML outputs, CommonHTML included.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontPreferences {
    /// Fonts the renderer may use, in order of preference.
    pub available_fonts: Vec<String>,
}

impl Default for FontPreferences {
    fn default() -> Self {
        Self {
            available_fonts: vec!["TeX".to_owned()],
        }
    }
}

/// Behavior of the MathJax contextual menu and zoom interaction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSettings {
    /// Mouse gesture that triggers the zoomed view of an expression.
    pub zoom: ZoomTrigger,
    /// Whether the platform contextual menu is used for math elements.
    pub mp_context: bool,
    /// Whether mouse interaction opens the MathJax menu.
    pub mp_mouse: bool,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            zoom: ZoomTrigger::DoubleClick,
            mp_context: true,
            mp_mouse: true,
        }
    }
}

/// A complete MathJax Hub configuration.
///
/// [`HubConfig::default`] reproduces the stock setup for TeX source rendered
/// through the CommonHTML output: the tex2jax preprocessor with the usual
/// dollar and backslash delimiters, the TeX web font, double-click zoom, and
/// all status chrome suppressed. Build once, then pass to
/// [`config_script`](crate::config_script) or
/// [`head_content`](crate::head_content); the page's MathJax runtime owns the
/// value from there.
#[non_exhaustive]
#[derive(Clone, Builder, Debug, PartialEq)]
#[builder(default)]
#[builder(setter(into))]
pub struct HubConfig {
    /// Extension modules loaded before typesetting starts.
    extensions: Vec<String>,
    /// Which input grammar the page's math source is written in.
    input: InputJax,
    /// Which output renderer produces the typeset result.
    output: OutputJax,
    /// Delimiter tables and escape handling for the tex2jax preprocessor.
    tex2jax: TexPreprocessor,
    /// Font preferences for the output renderer.
    fonts: FontPreferences,
    /// Contextual menu and zoom behavior.
    menu: MenuSettings,
    /// Extra configuration files loaded alongside this one.
    config_files: Vec<String>,
    /// Whether the "Processing math: 12%" style messages are shown.
    show_processing_messages: bool,
    /// Presentation of MathJax status messages.
    message_style: MessageStyle,
    /// Whether the MathJax menu is reachable from rendered math at all.
    show_math_menu: bool,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["tex2jax.js".to_owned()],
            input: InputJax::Tex,
            output: OutputJax::CommonHtml,
            tex2jax: TexPreprocessor::default(),
            fonts: FontPreferences::default(),
            menu: MenuSettings::default(),
            config_files: Vec::new(),
            show_processing_messages: false,
            message_style: MessageStyle::None,
            show_math_menu: false,
        }
    }
}

impl HubConfig {
    /// Return [`HubConfigBuilder`].
    pub fn builder() -> HubConfigBuilder {
        HubConfigBuilder::default()
    }

    /// The extension modules to load.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// The configured input grammar.
    pub fn input(&self) -> InputJax {
        self.input
    }

    /// The configured output renderer.
    pub fn output(&self) -> OutputJax {
        self.output
    }

    /// The tex2jax preprocessor options.
    pub fn tex2jax(&self) -> &TexPreprocessor {
        &self.tex2jax
    }

    /// The font preferences for the output renderer.
    pub fn fonts(&self) -> &FontPreferences {
        &self.fonts
    }

    /// The menu and zoom behavior.
    pub fn menu(&self) -> &MenuSettings {
        &self.menu
    }

    /// The extra configuration files to load.
    pub fn config_files(&self) -> &[String] {
        &self.config_files
    }

    /// Whether processing-status messages are shown.
    pub fn show_processing_messages(&self) -> bool {
        self.show_processing_messages
    }

    /// How status messages are presented.
    pub fn message_style(&self) -> MessageStyle {
        self.message_style
    }

    /// Whether the MathJax menu is reachable from rendered math.
    pub fn show_math_menu(&self) -> bool {
        self.show_math_menu
    }

    /// Append an extension module to load.
    pub fn add_extension(&mut self, name: String) {
        self.extensions.push(name);
    }

    /// Set the input grammar.
    pub fn set_input(&mut self, input: InputJax) {
        self.input = input;
    }

    /// Set the output renderer.
    pub fn set_output(&mut self, output: OutputJax) {
        self.output = output;
    }

    /// Register an additional inline math delimiter pair.
    pub fn add_inline_delimiters(&mut self, pair: DelimiterPair) {
        self.tex2jax.inline_math.push(pair);
    }

    /// Register an additional display math delimiter pair.
    pub fn add_display_delimiters(&mut self, pair: DelimiterPair) {
        self.tex2jax.display_math.push(pair);
    }

    /// Set whether `\$` escapes are honored in page text.
    pub fn set_process_escapes(&mut self, flag: bool) {
        self.tex2jax.process_escapes = flag;
    }

    /// Replace the renderer font preference list.
    pub fn set_available_fonts(&mut self, fonts: Vec<String>) {
        self.fonts.available_fonts = fonts;
    }

    /// Set the zoom trigger gesture.
    pub fn set_zoom(&mut self, zoom: ZoomTrigger) {
        self.menu.zoom = zoom;
    }

    /// Set whether processing-status messages are shown.
    pub fn set_show_processing_messages(&mut self, flag: bool) {
        self.show_processing_messages = flag;
    }

    /// Set how status messages are presented.
    pub fn set_message_style(&mut self, style: MessageStyle) {
        self.message_style = style;
    }

    /// Set whether the MathJax menu is reachable from rendered math.
    pub fn set_show_math_menu(&mut self, flag: bool) {
        self.show_math_menu = flag;
    }

    /// Check the delimiter tables the tex2jax preprocessor will receive.
    ///
    /// Every pair must carry non-empty opening and closing tokens, and no
    /// pair may appear twice across the combined inline and display tables.
    fn validate(&self) -> Result<()> {
        let pairs = || {
            self.tex2jax
                .inline_math
                .iter()
                .chain(&self.tex2jax.display_math)
        };
        for pair in pairs() {
            if pair.open().is_empty() || pair.close().is_empty() {
                return Err(Error::EmptyDelimiter(
                    pair.open().to_owned(),
                    pair.close().to_owned(),
                ));
            }
        }
        if let Some(dup) = pairs().duplicates().next() {
            return Err(Error::DuplicateDelimiter(
                dup.open().to_owned(),
                dup.close().to_owned(),
            ));
        }
        Ok(())
    }

    /// Assemble the option document passed to `MathJax.Hub.Config`.
    ///
    /// Validates the delimiter tables first, then produces the exact key set
    /// MathJax v2 expects. Key order is fixed, so serializing the same
    /// configuration twice yields byte-identical output.
    pub fn to_value(&self) -> Result<Value> {
        self.validate()?;
        let mut doc = Map::new();
        doc.insert(
            "extensions".to_owned(),
            serde_json::to_value(&self.extensions)?,
        );
        doc.insert(
            "jax".to_owned(),
            Value::Array(vec![
                Value::String(format!("input/{}", self.input)),
                Value::String(format!("output/{}", self.output)),
            ]),
        );
        doc.insert("tex2jax".to_owned(), serde_json::to_value(&self.tex2jax)?);
        doc.insert("HTML-CSS".to_owned(), serde_json::to_value(&self.fonts)?);
        doc.insert("menuSettings".to_owned(), serde_json::to_value(&self.menu)?);
        doc.insert(
            "config".to_owned(),
            serde_json::to_value(&self.config_files)?,
        );
        doc.insert(
            "showProcessingMessages".to_owned(),
            Value::Bool(self.show_processing_messages),
        );
        doc.insert(
            "messageStyle".to_owned(),
            serde_json::to_value(self.message_style)?,
        );
        doc.insert("showMathMenu".to_owned(), Value::Bool(self.show_math_menu));
        Ok(Value::Object(doc))
    }
}

impl AsRef<HubConfig> for HubConfig {
    fn as_ref(&self) -> &HubConfig {
        self
    }
}

impl HubConfigBuilder {
    /// Add (chain) an inline delimiter pair into the accumulated tex2jax
    /// tables.
    ///
    /// Shorthand for manipulating the `tex2jax` section directly. The stock
    /// pairs stay registered; this appends.
    ///
    /// # Examples
    ///
    /// ```
    /// let config = mathjax_config::HubConfig::builder()
    ///     .add_inline_delimiters("\\begin{math}", "\\end{math}")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.tex2jax().inline_math.len(), 3);
    /// ```
    pub fn add_inline_delimiters(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        let pair = DelimiterPair::new(open, close);
        match self.tex2jax.as_mut() {
            Some(tex2jax) => tex2jax.inline_math.push(pair),
            None => {
                let mut tex2jax = TexPreprocessor::default();
                tex2jax.inline_math.push(pair);
                self.tex2jax = Some(tex2jax);
            }
        }
        self
    }

    /// Add (chain) a display delimiter pair into the accumulated tex2jax
    /// tables. The display analog of
    /// [`add_inline_delimiters`](Self::add_inline_delimiters).
    pub fn add_display_delimiters(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        let pair = DelimiterPair::new(open, close);
        match self.tex2jax.as_mut() {
            Some(tex2jax) => tex2jax.display_math.push(pair),
            None => {
                let mut tex2jax = TexPreprocessor::default();
                tex2jax.display_math.push(pair);
                self.tex2jax = Some(tex2jax);
            }
        }
        self
    }
}

/// Input grammar for math source on the page.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InputJax {
    /// TeX / LaTeX notation.
    Tex,
    /// MathML markup.
    MathMl,
    /// AsciiMath notation.
    AsciiMath,
}

impl fmt::Display for InputJax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputJax::Tex => "TeX",
            InputJax::MathMl => "MathML",
            InputJax::AsciiMath => "AsciiMath",
        })
    }
}

/// Output renderer producing the typeset result.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputJax {
    /// The CommonHTML renderer, HTML/CSS output shared across browsers.
    CommonHtml,
    /// The older per-browser HTML-CSS renderer.
    HtmlCss,
    /// SVG output.
    Svg,
    /// The browser's native MathML support.
    NativeMml,
    /// Fast low-fidelity preview, later replaced by a full renderer.
    PreviewHtml,
}

impl fmt::Display for OutputJax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputJax::CommonHtml => "CommonHTML",
            OutputJax::HtmlCss => "HTML-CSS",
            OutputJax::Svg => "SVG",
            OutputJax::NativeMml => "NativeMML",
            OutputJax::PreviewHtml => "PreviewHTML",
        })
    }
}

/// Mouse gesture that opens the zoomed view of an expression.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum ZoomTrigger {
    /// Zoom disabled.
    #[serde(rename = "None")]
    None,
    /// Zoom on hover.
    #[serde(rename = "Hover")]
    Hover,
    /// Zoom on single click.
    #[serde(rename = "Click")]
    Click,
    /// Zoom on double click.
    #[serde(rename = "Double-Click")]
    DoubleClick,
}

impl fmt::Display for ZoomTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ZoomTrigger::None => "None",
            ZoomTrigger::Hover => "Hover",
            ZoomTrigger::Click => "Click",
            ZoomTrigger::DoubleClick => "Double-Click",
        })
    }
}

/// Presentation of MathJax status messages.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum MessageStyle {
    /// No messages.
    #[serde(rename = "none")]
    None,
    /// A plain line of text.
    #[serde(rename = "simple")]
    Simple,
    /// The framed message box.
    #[serde(rename = "normal")]
    Normal,
}

impl fmt::Display for MessageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MessageStyle::None => "none",
            MessageStyle::Simple => "simple",
            MessageStyle::Normal => "normal",
        })
    }
}
