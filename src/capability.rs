//! Host capabilities the scanner reads styles and text through.
//!
//! A browser host would back these with `getComputedStyle` and
//! `innerText`. The built-in implementations work on a parsed tree alone,
//! using inline `style` attributes as the only style source.

use markup5ever_rcdom::Handle;

use crate::color::CssColor;
use crate::dom::NodeExt;

pub const COLOR: &str = "color";
pub const BACKGROUND_COLOR: &str = "background-color";

/// Resolves the computed value of a CSS property for a node.
pub trait StyleResolver {
    /// Returns `None` when the value cannot be resolved.
    fn computed_style(&self, node: &Handle, property: &str) -> Option<String>;
}

/// Extracts the rendered text of a node and its descendants.
pub trait TextExtractor {
    fn text(&self, node: &Handle) -> String;
}

/// Computes styles from inline `style` attributes.
///
/// `color` is inherited and falls back to black, `background-color` is not
/// inherited and falls back to `transparent`, as in a browser with no
/// stylesheets.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStyleResolver;

impl InlineStyleResolver {
    fn declared(node: &Handle, property: &str) -> Option<String> {
        let style = node.attribute("style")?;
        let mut value = None;

        // Later declarations override earlier ones.
        for declaration in style.split(';') {
            let Some((name, raw)) = declaration.split_once(':') else {
                continue;
            };
            let name = name.trim().to_ascii_lowercase();
            let raw = raw.trim().trim_end_matches("!important").trim();
            if raw.is_empty() {
                continue;
            }

            if name == property {
                value = Some(raw.to_string());
            } else if property == BACKGROUND_COLOR && name == "background" {
                // Only a shorthand that is nothing but a colour counts.
                if CssColor::parse(raw).is_some() {
                    value = Some(raw.to_string());
                }
            }
        }

        value
    }
}

impl StyleResolver for InlineStyleResolver {
    fn computed_style(&self, node: &Handle, property: &str) -> Option<String> {
        match property {
            COLOR => {
                let mut current = Some(node.clone());
                while let Some(element) = current {
                    match Self::declared(&element, COLOR) {
                        Some(value) if !value.eq_ignore_ascii_case("inherit") => {
                            return Some(value)
                        }
                        _ => current = element.parent_node(),
                    }
                }
                Some("#000000".to_string())
            }
            BACKGROUND_COLOR => Some(
                Self::declared(node, BACKGROUND_COLOR).unwrap_or_else(|| "transparent".to_string()),
            ),
            _ => Self::declared(node, property),
        }
    }
}

/// Concatenates the text nodes under an element, like `textContent`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomTextExtractor;

impl TextExtractor for DomTextExtractor {
    fn text(&self, node: &Handle) -> String {
        node.text_content()
    }
}
