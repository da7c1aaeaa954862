//! Decision trees for the two player roles.
//!
//! Each tree is a small tagged union: a decision node names the information
//! set it reads (history plus legal actions, in dump order) and has one child
//! per action; a leaf ends a named path. Path labels are the actions along
//! the way joined with `+`.

use once_cell::sync::Lazy;

use crate::actions::Action::{Bet, CallBet, CallRaise, Check, Fold, Raise};
use crate::actions::{path_label, Action, Player};
use crate::fallback::FALLBACK_POLICY;
use crate::index::InfoSetKey;

/// A node in a role's decision tree.
#[derive(Debug)]
pub enum TreeNode {
    Decision {
        key: InfoSetKey,
        /// Used when the dump has no record for `key`.
        fallback: &'static [f64],
        /// One child per action of `key`, same order.
        children: Vec<TreeNode>,
    },
    Leaf,
}

impl TreeNode {
    pub fn decision(
        history: &[Action],
        actions: &[Action],
        fallback: &'static [f64],
        children: Vec<TreeNode>,
    ) -> Self {
        TreeNode::Decision {
            key: InfoSetKey::new(history, actions),
            fallback,
            children,
        }
    }

    /// Every root-to-leaf path, in tree order.
    #[cfg(test)]
    pub fn paths(&self) -> Vec<Vec<Action>> {
        let mut out = Vec::new();
        collect_paths(self, &mut Vec::new(), &mut out);
        out
    }
}

#[cfg(test)]
fn collect_paths(node: &TreeNode, prefix: &mut Vec<Action>, out: &mut Vec<Vec<Action>>) {
    match node {
        TreeNode::Decision { key, children, .. } => {
            for (action, child) in key.actions.iter().zip(children) {
                prefix.push(*action);
                collect_paths(child, prefix, out);
                prefix.pop();
            }
        }
        TreeNode::Leaf => out.push(prefix.clone()),
    }
}

/// One table's worth of tree: a title and the declared row order.
#[derive(Debug)]
pub struct Scenario {
    pub title: &'static str,
    pub tree: TreeNode,
    pub rows: Vec<String>,
}

fn rows(paths: &[&[Action]]) -> Vec<String> {
    paths.iter().map(|p| path_label(p)).collect()
}

static FIRST_TO_ACT: Lazy<Vec<Scenario>> = Lazy::new(|| {
    let policy = FALLBACK_POLICY;
    vec![Scenario {
        title: "Player 0's Strategy",
        tree: TreeNode::decision(
            &[],
            &[Bet, Check],
            policy.opening,
            vec![
                TreeNode::decision(
                    &[Bet, Raise],
                    &[CallRaise, Fold],
                    policy.facing_raise,
                    vec![TreeNode::Leaf, TreeNode::Leaf],
                ),
                TreeNode::decision(
                    &[Check, Bet],
                    &[CallBet, Fold, Raise],
                    policy.facing_bet,
                    vec![TreeNode::Leaf, TreeNode::Leaf, TreeNode::Leaf],
                ),
            ],
        ),
        rows: rows(&[
            &[Check, Fold],
            &[Check, CallBet],
            &[Check, Raise],
            &[Bet, Fold],
            &[Bet, CallRaise],
        ]),
    }]
});

static RESPONDER: Lazy<Vec<Scenario>> = Lazy::new(|| {
    let policy = FALLBACK_POLICY;
    vec![
        Scenario {
            title: "Player 1's Strategy When Checked To",
            tree: TreeNode::decision(
                &[Check],
                &[Bet, Check],
                policy.checked_to,
                vec![
                    TreeNode::decision(
                        &[Check, Bet, Raise],
                        &[CallRaise, Fold],
                        policy.facing_raise,
                        vec![TreeNode::Leaf, TreeNode::Leaf],
                    ),
                    TreeNode::Leaf,
                ],
            ),
            rows: rows(&[&[Bet, CallRaise], &[Bet, Fold], &[Check]]),
        },
        Scenario {
            title: "Player 1's Strategy When Bet Into",
            tree: TreeNode::decision(
                &[Bet],
                &[CallBet, Fold, Raise],
                policy.facing_bet,
                vec![TreeNode::Leaf, TreeNode::Leaf, TreeNode::Leaf],
            ),
            rows: rows(&[&[CallBet], &[Fold], &[Raise]]),
        },
    ]
});

/// Position a player occupies in every hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    FirstToAct,
    Responder,
}

impl Role {
    pub fn for_player(player: Player) -> Role {
        match player {
            Player::First => Role::FirstToAct,
            Player::Second => Role::Responder,
        }
    }

    pub fn scenarios(self) -> &'static [Scenario] {
        match self {
            Role::FirstToAct => &FIRST_TO_ACT,
            Role::Responder => &RESPONDER,
        }
    }
}
