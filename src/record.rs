//! Record parser for strategy dumps.
//!
//! A dump is divided into sections opened by `PLAYER: <n>` and closed by
//! `END`. Inside a section each non-blank line tagged with the section's
//! player is one information set:
//!
//! ```text
//! [Player: 0 Card: A, History: CHECK, BET Actions: CALLBET, FOLD, RAISE]\t0.2 0.6 0.2
//! ```
//!
//! An unterminated section is closed at end of input, and a `PLAYER:` marker
//! inside an open section closes it before opening the next one.

use log::{debug, info, warn};

use crate::actions::{parse_action_list, Action, Player};
use crate::cards::Rank;
use crate::error::{ReportError, Result};

const TAG_PREFIX: &str = "[Player: ";
const CARD_MARKER: &str = "Card: ";
const HISTORY_MARKER: &str = "History:";
const ACTIONS_MARKER: &str = "Actions:";
const SECTION_PREFIX: &str = "PLAYER: ";
const SECTION_END: &str = "END";

/// One information set as dumped by the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoSetRecord {
    pub player: Player,
    pub card: Rank,
    /// Actions taken before this decision, in order.
    pub history: Vec<Action>,
    /// Legal actions, in the order the solver listed them.
    pub actions: Vec<Action>,
    /// One probability per entry of `actions`.
    pub probabilities: Vec<f64>,
}

/// Parse one trimmed line from inside the section of `section`.
///
/// Returns `Ok(None)` when the line does not carry the section's player tag.
pub fn parse_record(line: &str, line_no: usize, section: Player) -> Result<Option<InfoSetRecord>> {
    let tagged = match line.strip_prefix(TAG_PREFIX) {
        Some(rest) => rest,
        None => return Ok(None),
    };
    let tag = tagged.split_whitespace().next().unwrap_or("");
    if Player::from_tag(tag) != Some(section) {
        return Ok(None);
    }

    let mut fields = line.split('\t');
    let (meta, probs) = match (fields.next(), fields.next(), fields.next()) {
        (Some(meta), Some(probs), None) => (meta, probs),
        (_, None, _) => return Err(ReportError::malformed(line_no, line, "missing tab separator")),
        _ => return Err(ReportError::malformed(line_no, line, "more than one tab separator")),
    };

    let card = parse_card(meta, line, line_no)?;
    let history = parse_history(meta, line, line_no)?;
    let actions = parse_actions(meta, line, line_no)?;

    let probabilities = probs
        .split_whitespace()
        .map(|p| {
            p.parse::<f64>()
                .map_err(|_| ReportError::malformed(line_no, line, format!("bad probability '{}'", p)))
        })
        .collect::<Result<Vec<f64>>>()?;

    if probabilities.len() != actions.len() {
        return Err(ReportError::malformed(
            line_no,
            line,
            format!(
                "{} probabilities for {} actions",
                probabilities.len(),
                actions.len()
            ),
        ));
    }

    Ok(Some(InfoSetRecord {
        player: section,
        card,
        history,
        actions,
        probabilities,
    }))
}

fn parse_card(meta: &str, line: &str, line_no: usize) -> Result<Rank> {
    let start = meta
        .find(CARD_MARKER)
        .ok_or_else(|| ReportError::malformed(line_no, line, "missing 'Card:' marker"))?;
    let rest = &meta[start + CARD_MARKER.len()..];
    let end = rest
        .find(',')
        .ok_or_else(|| ReportError::malformed(line_no, line, "card not terminated by ','"))?;
    let symbol = rest[..end].trim();
    symbol.parse::<Rank>().map_err(|symbol| ReportError::UnknownRank {
        symbol,
        line_no,
        line: line.to_string(),
    })
}

fn parse_history(meta: &str, line: &str, line_no: usize) -> Result<Vec<Action>> {
    let start = meta
        .find(HISTORY_MARKER)
        .ok_or_else(|| ReportError::malformed(line_no, line, "missing 'History:' marker"))?;
    let rest = &meta[start + HISTORY_MARKER.len()..];
    let end = rest
        .find(ACTIONS_MARKER)
        .ok_or_else(|| ReportError::malformed(line_no, line, "missing 'Actions:' marker"))?;
    parse_action_list(&rest[..end])
        .map_err(|name| ReportError::malformed(line_no, line, format!("unknown action '{}' in history", name)))
}

fn parse_actions(meta: &str, line: &str, line_no: usize) -> Result<Vec<Action>> {
    let start = meta
        .find(ACTIONS_MARKER)
        .ok_or_else(|| ReportError::malformed(line_no, line, "missing 'Actions:' marker"))?;
    let rest = &meta[start + ACTIONS_MARKER.len()..];
    let end = rest
        .find(']')
        .ok_or_else(|| ReportError::malformed(line_no, line, "missing closing ']'"))?;
    let actions = parse_action_list(&rest[..end])
        .map_err(|name| ReportError::malformed(line_no, line, format!("unknown action '{}'", name)))?;
    if actions.is_empty() {
        return Err(ReportError::malformed(line_no, line, "empty action list"));
    }
    Ok(actions)
}

fn section_marker(line: &str) -> Option<Player> {
    line.strip_prefix(SECTION_PREFIX).and_then(Player::from_tag)
}

/// Parse a whole dump. Any malformed record aborts with the offending line.
pub fn parse_dump(text: &str) -> Result<Vec<InfoSetRecord>> {
    let mut records = Vec::new();
    let mut section: Option<Player> = None;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();

        if let Some(player) = section_marker(line) {
            if let Some(open) = section {
                warn!(
                    "line {}: PLAYER: {} opened while section {} is open; closing it",
                    line_no, player, open
                );
            }
            section = Some(player);
            continue;
        }
        if line == SECTION_END {
            section = None;
            continue;
        }
        if line.is_empty() {
            continue;
        }
        let Some(player) = section else {
            continue;
        };

        match parse_record(line, line_no, player)? {
            Some(record) => records.push(record),
            None => warn!("line {}: skipped, not a record for player {}", line_no, player),
        }
    }

    if let Some(open) = section {
        debug!("section for player {} not terminated by END; closed at end of input", open);
    }

    for player in [Player::First, Player::Second] {
        let count = records.iter().filter(|r| r.player == player).count();
        info!("parsed {} information sets for player {}", count, player);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPENING: &str = "[Player: 0 Card: A, History:  Actions: BET, CHECK]\t0.7 0.3";

    #[test]
    fn parses_opening_record() {
        let record = parse_record(OPENING, 1, Player::First).unwrap().unwrap();
        assert_eq!(record.card, Rank::Ace);
        assert!(record.history.is_empty());
        assert_eq!(record.actions, vec![Action::Bet, Action::Check]);
        assert_eq!(record.probabilities, vec![0.7, 0.3]);
    }

    #[test]
    fn parses_history() {
        let line = "[Player: 1 Card: 9, History: CHECK, BET, RAISE Actions: CALLRAISE, FOLD]\t0.25 0.75";
        let record = parse_record(line, 3, Player::Second).unwrap().unwrap();
        assert_eq!(record.card, Rank::Nine);
        assert_eq!(record.history, vec![Action::Check, Action::Bet, Action::Raise]);
        assert_eq!(record.actions, vec![Action::CallRaise, Action::Fold]);
    }

    #[test]
    fn history_without_double_space() {
        let line = "[Player: 0 Card: K, History: Actions: BET, CHECK]\t0.5 0.5";
        let record = parse_record(line, 1, Player::First).unwrap().unwrap();
        assert!(record.history.is_empty());
    }

    #[test]
    fn other_player_is_skipped() {
        assert!(parse_record(OPENING, 1, Player::Second).unwrap().is_none());
        assert!(parse_record("garbage", 1, Player::First).unwrap().is_none());
    }

    #[test]
    fn missing_tab_is_malformed() {
        let line = "[Player: 0 Card: A, History:  Actions: BET, CHECK] 0.7 0.3";
        let err = parse_record(line, 7, Player::First).unwrap_err();
        match err {
            ReportError::MalformedRecord { line_no, line: l, .. } => {
                assert_eq!(line_no, 7);
                assert_eq!(l, line);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn two_tabs_is_malformed() {
        let line = "[Player: 0 Card: A, History:  Actions: BET, CHECK]\t0.7\t0.3";
        assert!(matches!(
            parse_record(line, 1, Player::First),
            Err(ReportError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn count_mismatch_is_malformed() {
        let line = "[Player: 0 Card: A, History:  Actions: BET, CHECK]\t0.7 0.2 0.1";
        assert!(matches!(
            parse_record(line, 1, Player::First),
            Err(ReportError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn missing_markers_are_malformed() {
        for line in [
            "[Player: 0 History:  Actions: BET, CHECK]\t0.7 0.3",
            "[Player: 0 Card: A, Actions: BET, CHECK]\t0.7 0.3",
            "[Player: 0 Card: A, History: \t0.7 0.3",
            "[Player: 0 Card: A, History:  Actions: BET, CHECK\t0.7 0.3",
            "[Player: 0 Card: A, History:  Actions: BET, CHECK]\t0.7 abc",
            "[Player: 0 Card: A, History:  Actions: BET, SHOVE]\t0.7 0.3",
        ] {
            assert!(
                matches!(parse_record(line, 1, Player::First), Err(ReportError::MalformedRecord { .. })),
                "expected malformed: {}",
                line
            );
        }
    }

    #[test]
    fn unknown_rank() {
        let line = "[Player: 0 Card: Z, History:  Actions: BET, CHECK]\t0.7 0.3";
        match parse_record(line, 2, Player::First) {
            Err(ReportError::UnknownRank { symbol, line_no, .. }) => {
                assert_eq!(symbol, "Z");
                assert_eq!(line_no, 2);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn sections_scope_records() {
        let dump = "\
stray line
PLAYER: 0
[Player: 0 Card: A, History:  Actions: BET, CHECK]\t0.7 0.3

[Player: 1 Card: A, History: BET Actions: CALLBET, FOLD, RAISE]\t0.1 0.1 0.8
END
[Player: 0 Card: K, History:  Actions: BET, CHECK]\t0.1 0.9
PLAYER: 1
[Player: 1 Card: K, History: BET Actions: CALLBET, FOLD, RAISE]\t0.5 0.5 0.0
END
";
        let records = parse_dump(dump).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].player, Player::First);
        assert_eq!(records[0].card, Rank::Ace);
        assert_eq!(records[1].player, Player::Second);
        assert_eq!(records[1].card, Rank::King);
    }

    #[test]
    fn nested_marker_switches_section() {
        let dump = "\
PLAYER: 0
[Player: 0 Card: A, History:  Actions: BET, CHECK]\t0.7 0.3
PLAYER: 1
[Player: 0 Card: K, History:  Actions: BET, CHECK]\t0.1 0.9
[Player: 1 Card: Q, History: CHECK Actions: BET, CHECK]\t0.4 0.6
";
        let records = parse_dump(dump).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].player, Player::Second);
        assert_eq!(records[1].card, Rank::Queen);
    }

    #[test]
    fn section_markers_must_match_exactly() {
        for marker in ["PLAYER: 00", "PLAYER: +0", "PLAYER: +1", "PLAYER:0"] {
            let dump = format!(
                "{}\n[Player: 0 Card: A, History:  Actions: BET, CHECK]\t0.7 0.3\nEND\n",
                marker
            );
            assert!(parse_dump(&dump).unwrap().is_empty(), "{} opened a section", marker);
        }
    }

    #[test]
    fn record_tag_must_match_exactly() {
        let line = "[Player: +0 Card: A, History:  Actions: BET, CHECK]\t0.7 0.3";
        assert!(parse_record(line, 1, Player::First).unwrap().is_none());
        let line = "[Player: 00 Card: A, History:  Actions: BET, CHECK]\t0.7 0.3";
        assert!(parse_record(line, 1, Player::First).unwrap().is_none());
    }

    #[test]
    fn stray_marker_does_not_switch_section() {
        let dump = "\
PLAYER: 1
PLAYER: 00
[Player: 1 Card: Q, History: CHECK Actions: BET, CHECK]\t0.4 0.6
END
";
        let records = parse_dump(dump).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].player, Player::Second);
    }

    #[test]
    fn malformed_line_aborts_dump() {
        let dump = "\
PLAYER: 0
[Player: 0 Card: A, History:  Actions: BET, CHECK]\t0.7 0.3
[Player: 0 Card: K, History:  Actions: BET, CHECK] 0.1 0.9
END
";
        match parse_dump(dump) {
            Err(ReportError::MalformedRecord { line_no, .. }) => assert_eq!(line_no, 3),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn malformed_line_outside_section_is_ignored() {
        let dump = "[Player: 0 Card: A, History:  Actions: BET, CHECK] 0.7 0.3\n";
        assert!(parse_dump(dump).unwrap().is_empty());
    }
}
