use markup5ever_rcdom::Handle;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingCategory {
    ImageMissingAlt,
    LowContrast,
}

impl FindingCategory {
    /// Prefix of the keys issued for this category.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            FindingCategory::ImageMissingAlt => "image",
            FindingCategory::LowContrast => "text",
        }
    }

    pub fn key(&self, ordinal: usize) -> String {
        format!("{}_{}", self.key_prefix(), ordinal)
    }
}

/// Contrast measurement attached to a low-contrast finding.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ContrastDetail {
    pub ratio: f64,
    pub foreground: String,
    pub background: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Finding {
    pub key: String,
    pub category: FindingCategory,
    /// Image source for images, rendered text for low-contrast regions.
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<ContrastDetail>,
}

impl Finding {
    pub fn is_image(&self) -> bool {
        self.category == FindingCategory::ImageMissingAlt
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FindingGroup {
    pub heading: String,
    pub category: FindingCategory,
    pub findings: Vec<Finding>,
}

/// Display-ready outcome of a scan.
///
/// Either `groups` is non-empty, or `placeholder` carries the "no warnings"
/// message.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct Report {
    pub groups: Vec<FindingGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Report {
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.groups.iter().flat_map(|group| group.findings.iter())
    }

    pub fn is_clean(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group(&self, category: FindingCategory) -> Option<&FindingGroup> {
        self.groups.iter().find(|group| group.category == category)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Maps finding keys back to the nodes they were reported for.
///
/// Only valid for the scan that produced it.
#[derive(Debug, Clone, Default)]
pub struct FindingIndex {
    nodes: HashMap<String, Handle>,
}

impl FindingIndex {
    pub(crate) fn insert(&mut self, key: String, node: Handle) {
        self.nodes.insert(key, node);
    }

    /// Looks up the node behind a finding key, e.g. after the user clicked
    /// a rendered finding.
    pub fn resolve(&self, key: &str) -> Option<&Handle> {
        self.nodes.get(key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct ScanResult {
    pub report: Report,
    pub index: FindingIndex,
    /// Keeps a document parsed by the checker alive. rcdom clears every
    /// descendant's children once the document node is dropped.
    pub(crate) document: Option<Handle>,
}

impl ScanResult {
    pub fn resolve(&self, key: &str) -> Option<&Handle> {
        self.index.resolve(key)
    }

    /// The parsed document, when the scan started from an HTML string.
    pub fn document(&self) -> Option<&Handle> {
        self.document.as_ref()
    }
}
