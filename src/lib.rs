//! Accessibility checks for editable rich-text HTML.
//!
//! The checker reports images without alternative text and text whose
//! colours do not contrast enough with their background. Every finding
//! carries a key that resolves back to the node it was reported for.

mod capability;
mod checks;
pub mod color;
pub mod dom;
mod render;
mod report;

use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use capability::{
    DomTextExtractor, InlineStyleResolver, StyleResolver, TextExtractor, BACKGROUND_COLOR, COLOR,
};
pub use render::render_html;
pub use report::{
    ContrastDetail, Finding, FindingCategory, FindingGroup, FindingIndex, Report, ScanResult,
};

use crate::dom::NodeExt;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// WCAG AA minimum for normal text.
pub const DEFAULT_CONTRAST_THRESHOLD: f64 = 4.5;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CheckerOptions {
    /// Text fails when its contrast ratio is at or below this value.
    pub contrast_threshold: f64,
    pub image_heading: String,
    pub contrast_heading: String,
    pub no_warnings_message: String,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
            image_heading: "Images require alternative text. To fix this warning, add an alt \
                            attribute to your img tags. An empty alt attribute may be used, but \
                            only when the image is purely decorative and carries no information."
                .to_string(),
            contrast_heading: "The colours of the foreground and background text do not provide \
                               enough contrast. To fix this warning, change either foreground or \
                               background colour of the text so that it is easier to read."
                .to_string(),
            no_warnings_message: "Congratulations, no accessibility problems found!".to_string(),
        }
    }
}

impl CheckerOptions {
    pub fn validate(&self) -> Result<(), CheckerError> {
        if !self.contrast_threshold.is_finite() || self.contrast_threshold <= 0.0 {
            return Err(CheckerError::ConfigError(format!(
                "contrast_threshold must be a positive number, got {}",
                self.contrast_threshold
            )));
        }
        Ok(())
    }
}

pub struct AccessibilityChecker {
    pub(crate) options: CheckerOptions,
}

impl Default for AccessibilityChecker {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AccessibilityChecker {
    /// Builds a checker without validating `options`; use [`Self::try_new`]
    /// for options that come from callers.
    pub fn new(options: Option<CheckerOptions>) -> Self {
        Self {
            options: options.unwrap_or_default(),
        }
    }

    pub fn try_new(options: CheckerOptions) -> Result<Self, CheckerError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Scans the descendants of `root` using inline styles and text nodes.
    pub fn scan(&self, root: &Handle) -> ScanResult {
        self.scan_with(root, &InlineStyleResolver, &DomTextExtractor)
    }

    /// Scans the descendants of `root` through host-provided capabilities.
    ///
    /// Never fails: anything that cannot be resolved is skipped or treated
    /// as a default.
    pub fn scan_with(
        &self,
        root: &Handle,
        styles: &dyn StyleResolver,
        text: &dyn TextExtractor,
    ) -> ScanResult {
        let images = self.check_image_alt(root);
        let low_contrast = self.check_contrast(root, styles, text);

        let mut report = Report::default();
        let mut index = FindingIndex::default();

        if !images.is_empty() {
            let findings = images
                .into_iter()
                .enumerate()
                .map(|(i, node)| {
                    let key = FindingCategory::ImageMissingAlt.key(i);
                    let label = node.attribute("src").unwrap_or_default();
                    index.insert(key.clone(), node);
                    Finding {
                        key,
                        category: FindingCategory::ImageMissingAlt,
                        label,
                        contrast: None,
                    }
                })
                .collect();

            report.groups.push(FindingGroup {
                heading: self.options.image_heading.clone(),
                category: FindingCategory::ImageMissingAlt,
                findings,
            });
        }

        if !low_contrast.is_empty() {
            let findings = low_contrast
                .into_iter()
                .enumerate()
                .map(|(i, failure)| {
                    let key = FindingCategory::LowContrast.key(i);
                    index.insert(key.clone(), failure.node);
                    Finding {
                        key,
                        category: FindingCategory::LowContrast,
                        label: failure.text,
                        contrast: Some(failure.detail),
                    }
                })
                .collect();

            report.groups.push(FindingGroup {
                heading: self.options.contrast_heading.clone(),
                category: FindingCategory::LowContrast,
                findings,
            });
        }

        if report.groups.is_empty() {
            report.placeholder = Some(self.options.no_warnings_message.clone());
        }

        debug!(
            findings = index.len(),
            groups = report.groups.len(),
            "Accessibility scan finished"
        );

        ScanResult {
            report,
            index,
            document: None,
        }
    }

    /// Parses `html` and scans its `<body>`.
    pub fn check_html(&self, html: &str) -> Result<ScanResult, CheckerError> {
        let dom = dom::parse_html(html)?;
        let root = dom::content_root(&dom);

        let mut result = self.scan(&root);
        result.document = Some(dom.document.clone());
        Ok(result)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckerError> {
        let options: CheckerOptions = serde_json::from_str(json).map_err(|e| {
            CheckerError::ParseError(format!("Failed to parse options JSON: {}", e))
        })?;
        Self::try_new(options)
    }

    pub fn from_json_file(path: &str) -> Result<Self, CheckerError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn options(&self) -> &CheckerOptions {
        &self.options
    }
}
