/*
Render a BK-tree for terminal display. Each child is labelled with the
distance key of the edge leading to it.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::{BkNode, BkTree};

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

fn label(node: &BkNode, is_root: bool) -> String {
    if is_root {
        format!("{} ({})", node.term.value, node.term.category)
    } else {
        format!(
            "[{}] {} ({})",
            node.distance_from_parent, node.term.value, node.term.category
        )
    }
}

impl TreeRender for BkTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let Some(root_node) = self.root().and_then(|idx| self.get_node(idx)) else {
            return Tree::new("Empty tree".to_string());
        };

        fn build_tree(tree: &BkTree, node: &BkNode, parent_tree: &mut Tree<String>) {
            for &child_idx in node.children.values() {
                if let Some(child) = tree.get_node(child_idx) {
                    let mut child_tree = Tree::new(label(child, false));
                    build_tree(tree, child, &mut child_tree);
                    parent_tree.push(child_tree);
                }
            }
        }

        let mut rendered = Tree::new(label(root_node, true));
        build_tree(self, root_node, &mut rendered);
        rendered
    }
}
