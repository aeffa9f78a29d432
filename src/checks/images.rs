use markup5ever_rcdom::Handle;

use crate::dom::utils::walk_descendants;
use crate::dom::NodeExt;
use crate::AccessibilityChecker;

impl AccessibilityChecker {
    /// Collects images with no usable alt text, in document order.
    ///
    /// An empty `alt` is only acceptable on images marked
    /// `role="presentation"`.
    pub(crate) fn check_image_alt(&self, root: &Handle) -> Vec<Handle> {
        let mut problem_nodes = Vec::new();

        walk_descendants(root, |node| {
            if node.tag_name() != Some("img") {
                return;
            }

            let alt_missing = node.attribute("alt").map_or(true, |alt| alt.is_empty());
            let decorative = node.attribute("role").as_deref() == Some("presentation");

            if alt_missing && !decorative {
                problem_nodes.push(node.clone());
            }
        });

        problem_nodes
    }
}
