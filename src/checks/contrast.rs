use markup5ever_rcdom::Handle;
use tracing::debug;

use crate::capability::{StyleResolver, TextExtractor, BACKGROUND_COLOR, COLOR};
use crate::color::{contrast_ratio, CssColor, WHITE};
use crate::dom::utils::walk_descendants;
use crate::dom::NodeExt;
use crate::report::ContrastDetail;
use crate::AccessibilityChecker;

pub(crate) struct ContrastFailure {
    pub node: Handle,
    pub text: String,
    pub detail: ContrastDetail,
}

impl AccessibilityChecker {
    /// Collects the topmost elements whose text fails the contrast
    /// threshold.
    ///
    /// No two returned nodes are ancestor and descendant of each other.
    pub(crate) fn check_contrast(
        &self,
        root: &Handle,
        styles: &dyn StyleResolver,
        text: &dyn TextExtractor,
    ) -> Vec<ContrastFailure> {
        let threshold = self.options.contrast_threshold;
        let mut failures: Vec<ContrastFailure> = Vec::new();

        walk_descendants(root, |node| {
            if !node.is_element() {
                return;
            }

            let content = text.text(node);
            if content.trim().is_empty() {
                return;
            }

            let Some(foreground) = styles.computed_style(node, COLOR) else {
                debug!(element = ?node.tag_name(), "Skipping node with unresolved text colour");
                return;
            };
            let Some(fg) = CssColor::parse(&foreground) else {
                debug!(element = ?node.tag_name(), %foreground, "Skipping node with unparseable text colour");
                return;
            };
            let background = styles
                .computed_style(node, BACKGROUND_COLOR)
                .unwrap_or_else(|| "transparent".to_string());
            let bg = CssColor::parse(&background).map_or(WHITE, CssColor::on_white);

            let lum1 = fg.on_white().luminance();
            let lum2 = bg.luminance();
            let ratio = contrast_ratio(lum1, lum2);

            if ratio > threshold {
                return;
            }

            debug!(
                element = ?node.tag_name(),
                ratio,
                %foreground,
                %background,
                lum1,
                lum2,
                "Contrast ratio is too low"
            );

            // Only the highest failing node in each subtree is reported.
            let related = failures.iter().position(|existing| {
                existing.node.is_ancestor_of(node) || node.is_ancestor_of(&existing.node)
            });
            let failure = ContrastFailure {
                node: node.clone(),
                text: content.trim().to_string(),
                detail: ContrastDetail {
                    ratio,
                    foreground,
                    background,
                },
            };

            match related {
                Some(i) if failures[i].node.is_ancestor_of(node) => {}
                Some(i) => failures[i] = failure,
                None => failures.push(failure),
            }
        });

        failures
    }
}
