use markup5ever_rcdom::{Handle, NodeData};
use std::rc::Rc;

/// Read-only accessors over an rcdom node.
pub trait NodeExt {
    fn tag_name(&self) -> Option<&str>;
    fn attribute(&self, name: &str) -> Option<String>;
    fn is_element(&self) -> bool;
    fn text_content(&self) -> String;
    fn parent_node(&self) -> Option<Handle>;
    fn ancestors(&self) -> Vec<Handle>;
    fn is_ancestor_of(&self, other: &Handle) -> bool;
}

impl NodeExt for Handle {
    fn tag_name(&self) -> Option<&str> {
        if let NodeData::Element { ref name, .. } = self.data {
            Some(&*name.local)
        } else {
            None
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        if let NodeData::Element { ref attrs, .. } = self.data {
            attrs
                .borrow()
                .iter()
                .find(|attr| &*attr.name.local == name)
                .map(|attr| attr.value.to_string())
        } else {
            None
        }
    }

    fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element { .. })
    }

    fn text_content(&self) -> String {
        let mut content = String::new();
        extract_text(self, &mut content);
        content
    }

    fn parent_node(&self) -> Option<Handle> {
        // rcdom keeps the parent in a Cell, so it has to be taken and put back.
        let weak = self.parent.take()?;
        self.parent.set(Some(weak.clone()));
        weak.upgrade()
    }

    fn ancestors(&self) -> Vec<Handle> {
        let mut ancestors = Vec::new();
        let mut current = self.parent_node();

        while let Some(parent) = current {
            current = parent.parent_node();
            ancestors.push(parent);
        }

        ancestors
    }

    fn is_ancestor_of(&self, other: &Handle) -> bool {
        let mut current = other.parent_node();

        while let Some(parent) = current {
            if Rc::ptr_eq(&parent, self) {
                return true;
            }
            current = parent.parent_node();
        }

        false
    }
}

pub(crate) fn extract_text(handle: &Handle, output: &mut String) {
    let mut stack = vec![handle.clone()];

    while let Some(current) = stack.pop() {
        match current.data {
            NodeData::Text { ref contents } => {
                output.push_str(&contents.borrow());
            }
            // Script and style bodies are not rendered text.
            NodeData::Element { ref name, .. }
                if matches!(&*name.local, "script" | "style" | "template") => {}
            _ => {
                for child in current.children.borrow().iter().rev() {
                    stack.push(child.clone());
                }
            }
        }
    }
}

/// Visits every descendant of `handle` in document order, excluding
/// `handle` itself.
pub(crate) fn walk_descendants<F>(handle: &Handle, mut callback: F)
where
    F: FnMut(&Handle),
{
    let mut stack: Vec<Handle> = handle.children.borrow().iter().rev().cloned().collect();

    while let Some(current) = stack.pop() {
        callback(&current);

        for child in current.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }
}
