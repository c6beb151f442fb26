use crate::{
    config_script, head_content, head_content_from, DelimiterPair, Error, HubConfig, InputJax,
    MessageStyle, OutputJax, TexPreprocessor, ZoomTrigger,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn default_config_matches_stock_document() {
    let doc = HubConfig::default().to_value().unwrap();
    let expected = json!({
        "extensions": ["tex2jax.js"],
        "jax": ["input/TeX", "output/CommonHTML"],
        "tex2jax": {
            "inlineMath": [["$", "$"], [r"\(", r"\)"]],
            "displayMath": [["$$", "$$"], [r"\[", r"\]"]],
            "processEscapes": true,
        },
        "HTML-CSS": { "availableFonts": ["TeX"] },
        "menuSettings": {
            "zoom": "Double-Click",
            "mpContext": true,
            "mpMouse": true,
        },
        "config": [],
        "showProcessingMessages": false,
        "messageStyle": "none",
        "showMathMenu": false,
    });
    assert_eq!(doc, expected);
}

#[test]
fn stock_document_has_no_extra_keys() {
    let doc = HubConfig::default().to_value().unwrap();
    let keys: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "extensions",
            "jax",
            "tex2jax",
            "HTML-CSS",
            "menuSettings",
            "config",
            "showProcessingMessages",
            "messageStyle",
            "showMathMenu",
        ]
    );
}

#[test]
fn emission_is_deterministic() {
    let config = HubConfig::default();
    assert_eq!(
        config_script(&config).unwrap(),
        config_script(&config).unwrap()
    );
    assert_eq!(head_content(&config).unwrap(), head_content(&config).unwrap());
}

#[test]
fn default_accessors() {
    let config = HubConfig::default();
    assert_eq!(config.input(), InputJax::Tex);
    assert_eq!(config.output(), OutputJax::CommonHtml);
    assert_eq!(
        config.tex2jax().inline_math,
        vec![
            DelimiterPair::new("$", "$"),
            DelimiterPair::new(r"\(", r"\)"),
        ]
    );
    assert_eq!(config.fonts().available_fonts, vec!["TeX".to_owned()]);
    assert_eq!(config.menu().zoom, ZoomTrigger::DoubleClick);
    assert!(config.menu().mp_context);
    assert!(config.menu().mp_mouse);
    assert!(config.config_files().is_empty());
    assert!(!config.show_processing_messages());
    assert_eq!(config.message_style(), MessageStyle::None);
    assert!(!config.show_math_menu());
}

#[test]
fn builder_overrides_reach_the_document() {
    let config = HubConfig::builder()
        .output(OutputJax::Svg)
        .message_style(MessageStyle::Simple)
        .show_math_menu(true)
        .build()
        .unwrap();
    let doc = config.to_value().unwrap();
    assert_eq!(doc["jax"], json!(["input/TeX", "output/SVG"]));
    assert_eq!(doc["messageStyle"], json!("simple"));
    assert_eq!(doc["showMathMenu"], json!(true));
}

#[test]
fn builder_delimiter_chaining_keeps_stock_pairs() {
    let config = HubConfig::builder()
        .add_inline_delimiters(r"\begin{math}", r"\end{math}")
        .add_display_delimiters(r"\begin{displaymath}", r"\end{displaymath}")
        .build()
        .unwrap();
    assert_eq!(config.tex2jax().inline_math.len(), 3);
    assert_eq!(config.tex2jax().display_math.len(), 3);
    assert_eq!(
        config.tex2jax().inline_math[2],
        DelimiterPair::new(r"\begin{math}", r"\end{math}")
    );
}

#[test]
fn mutators_reach_the_document() {
    let mut config = HubConfig::default();
    config.set_output(OutputJax::HtmlCss);
    config.set_zoom(ZoomTrigger::Hover);
    config.set_process_escapes(false);
    let doc = config.to_value().unwrap();
    assert_eq!(doc["jax"][1], json!("output/HTML-CSS"));
    assert_eq!(doc["menuSettings"]["zoom"], json!("Hover"));
    assert_eq!(doc["tex2jax"]["processEscapes"], json!(false));
}

#[test]
fn empty_delimiter_token_is_rejected() {
    let config = HubConfig::builder()
        .tex2jax(TexPreprocessor {
            inline_math: vec![DelimiterPair::new("", "$")],
            display_math: Vec::new(),
            process_escapes: true,
        })
        .build()
        .unwrap();
    assert_eq!(
        config.to_value(),
        Err(Error::EmptyDelimiter("".to_owned(), "$".to_owned()))
    );
}

#[test]
fn duplicate_delimiter_pair_is_rejected() {
    let mut config = HubConfig::default();
    config.add_inline_delimiters(DelimiterPair::new("$", "$"));
    assert_eq!(
        config.to_value(),
        Err(Error::DuplicateDelimiter("$".to_owned(), "$".to_owned()))
    );
}

#[test]
fn duplicates_across_inline_and_display_are_rejected() {
    let mut config = HubConfig::default();
    config.add_display_delimiters(DelimiterPair::new("$", "$"));
    assert_eq!(
        config.to_value(),
        Err(Error::DuplicateDelimiter("$".to_owned(), "$".to_owned()))
    );
}

#[test]
fn config_script_shape() {
    let script = config_script(HubConfig::default()).unwrap();
    assert!(script.starts_with("MathJax.Hub.Config({"));
    assert!(script.ends_with("});\n"));
    assert!(script.contains(r#""showProcessingMessages": false"#));
}

#[test]
fn head_content_wraps_config_and_loader() {
    let head = head_content(HubConfig::default()).unwrap();
    assert!(head.starts_with("<script type=\"text/x-mathjax-config\">"));
    assert!(head.contains("MathJax.Hub.Config("));
    assert!(head.contains("MathJax.js?config=TeX-AMS_CHTML"));
}

#[test]
fn head_content_from_uses_custom_loader() {
    let head = head_content_from(
        HubConfig::default(),
        "mathjax/MathJax.js?config=TeX-AMS_CHTML",
    )
    .unwrap();
    assert!(head.contains("<script async src=\"mathjax/MathJax.js?config=TeX-AMS_CHTML\">"));
    assert!(!head.contains("cdn.jsdelivr.net"));
}

#[test]
fn jax_names_render_like_mathjax_expects() {
    assert_eq!(InputJax::Tex.to_string(), "TeX");
    assert_eq!(InputJax::MathMl.to_string(), "MathML");
    assert_eq!(InputJax::AsciiMath.to_string(), "AsciiMath");
    assert_eq!(OutputJax::CommonHtml.to_string(), "CommonHTML");
    assert_eq!(OutputJax::HtmlCss.to_string(), "HTML-CSS");
    assert_eq!(OutputJax::NativeMml.to_string(), "NativeMML");
    assert_eq!(OutputJax::PreviewHtml.to_string(), "PreviewHTML");
    assert_eq!(ZoomTrigger::DoubleClick.to_string(), "Double-Click");
    assert_eq!(MessageStyle::None.to_string(), "none");
}

#[test]
fn error_messages_name_the_offending_pair() {
    let err = Error::DuplicateDelimiter("$".to_owned(), "$".to_owned());
    assert_eq!(
        err.to_string(),
        r#"duplicate math delimiter pair ("$", "$")"#
    );
}
