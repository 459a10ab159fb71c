//! Display lists derived from a [`Navigator`].

use crate::fs::tree::{FileTree, NodeId};
use crate::nav::navigator::Navigator;

/// One row in a pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    pub name: String,
    pub is_dir: bool,
}

/// The two pane contents for the current navigator state.
///
/// `left` lists the current directory's children; `right` lists the
/// selected node's children and is empty for files and empty directories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    pub left: Vec<PreviewItem>,
    pub right: Vec<PreviewItem>,
    /// Name of the selected node when it has children, otherwise empty.
    pub right_title: String,
}

impl Preview {
    pub fn project(nav: &Navigator) -> Self {
        let tree = nav.tree();
        let left = items(tree, nav.current());

        let (right, right_title) = match nav.selected_node() {
            Some(node) if node.has_children() => (
                nav.selected().map(|id| items(tree, id)).unwrap_or_default(),
                node.name().to_string(),
            ),
            _ => (Vec::new(), String::new()),
        };

        Self {
            left,
            right,
            right_title,
        }
    }
}

fn items(tree: &FileTree, id: NodeId) -> Vec<PreviewItem> {
    tree.children(id)
        .map(|node| PreviewItem {
            name: node.name().to_string(),
            is_dir: node.is_dir(),
        })
        .collect()
}
