//! Players and betting actions as they appear in strategy dumps.

use std::fmt;

use itertools::Itertools;

/// Seat in the dump. Player 0 acts first each hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// Exact seat tag as written in the dump: "0" or "1".
    pub fn from_tag(tag: &str) -> Option<Player> {
        match tag {
            "0" => Some(Player::First),
            "1" => Some(Player::Second),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// An action label written by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Bet,
    Check,
    CallBet,
    CallRaise,
    Fold,
    Raise,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::Bet => "BET",
            Action::Check => "CHECK",
            Action::CallBet => "CALLBET",
            Action::CallRaise => "CALLRAISE",
            Action::Fold => "FOLD",
            Action::Raise => "RAISE",
        }
    }

    pub fn from_name(name: &str) -> Option<Action> {
        match name {
            "BET" => Some(Action::Bet),
            "CHECK" => Some(Action::Check),
            "CALLBET" => Some(Action::CallBet),
            "CALLRAISE" => Some(Action::CallRaise),
            "FOLD" => Some(Action::Fold),
            "RAISE" => Some(Action::Raise),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a comma-separated action list ("CHECK, BET"). Empty text is an empty list.
/// Returns the first unknown name on failure.
pub fn parse_action_list(text: &str) -> Result<Vec<Action>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(str::trim)
        .map(|name| Action::from_name(name).ok_or_else(|| name.to_string()))
        .collect()
}

/// Format actions the way the dump writes histories.
pub fn format_history(actions: &[Action]) -> String {
    actions.iter().join(", ")
}

/// Row label for a path through a decision tree, e.g. "CHECK+CALLBET".
pub fn path_label(actions: &[Action]) -> String {
    actions.iter().join("+")
}
