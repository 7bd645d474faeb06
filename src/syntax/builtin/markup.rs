//! Markup and data format configurations (XML, HTML, CSS, JSON)

use crate::syntax::registry::LanguageConfig;

const HTML_TAGS: &[&str] = &[
    "html", "head", "body", "div", "span", "p", "a", "img", "script", "style",
    "title", "meta", "link", "br", "hr", "input", "button", "form", "table",
    "tr", "td", "th", "ul", "ol", "li", "h1", "h2", "h3", "h4", "h5", "h6",
];

const CSS_PROPERTIES: &[&str] = &[
    "margin", "padding", "border", "color", "background", "font", "display",
    "position", "width", "height", "top", "right", "bottom", "left", "flex",
    "grid", "animation", "transition", "transform", "media", "import",
];

/// Create XML configuration
pub fn xml_config() -> LanguageConfig {
    LanguageConfig::plain()
        .with_line_comment("<!--")
        .with_block_comment("<!--", "-->")
}

/// Create JSON configuration
pub fn json_config() -> LanguageConfig {
    LanguageConfig::new(["true", "false", "null"])
}

/// Create HTML configuration
pub fn html_config() -> LanguageConfig {
    LanguageConfig::new(HTML_TAGS.iter().copied())
}

/// Create CSS configuration
pub fn css_config() -> LanguageConfig {
    LanguageConfig::new(CSS_PROPERTIES.iter().copied())
}
