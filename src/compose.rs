//! Path composition: multiplies single-decision probabilities along each
//! root-to-leaf path of a role's tree.

use crate::actions::{path_label, Action};
use crate::cards::Rank;
use crate::index::StrategyIndex;
use crate::tree::TreeNode;

/// A full action sequence and its compound probability for one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundPath {
    pub actions: Vec<Action>,
    pub probability: f64,
    /// True if any decision along the path used a fallback vector.
    pub used_fallback: bool,
}

impl CompoundPath {
    pub fn label(&self) -> String {
        path_label(&self.actions)
    }
}

/// Compound probability of every path through `tree` for `card`, in tree order.
pub fn compose(tree: &TreeNode, index: &StrategyIndex, card: Rank) -> Vec<CompoundPath> {
    let mut out = Vec::new();
    walk(tree, index, card, 1.0, false, &mut Vec::new(), &mut out);
    out
}

fn walk(
    node: &TreeNode,
    index: &StrategyIndex,
    card: Rank,
    reach: f64,
    used_fallback: bool,
    path: &mut Vec<Action>,
    out: &mut Vec<CompoundPath>,
) {
    match node {
        TreeNode::Decision {
            key,
            fallback,
            children,
        } => {
            let lookup = index.lookup(card, key, fallback);
            let fell_back = used_fallback || lookup.is_fallback();
            // Trusts the dump's action order; the key already matched it.
            for ((action, child), &p) in key
                .actions
                .iter()
                .zip(children)
                .zip(lookup.probabilities())
            {
                path.push(*action);
                walk(child, index, card, reach * p, fell_back, path, out);
                path.pop();
            }
        }
        TreeNode::Leaf => out.push(CompoundPath {
            actions: path.clone(),
            probability: reach,
            used_fallback,
        }),
    }
}
