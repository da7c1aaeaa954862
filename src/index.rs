//! Per-player strategy index.
//!
//! Maps each card to its information sets, keyed structurally by history and
//! legal-action signature.

use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};

use crate::actions::{format_history, Action, Player};
use crate::cards::{sort_for_display, Rank};
use crate::record::InfoSetRecord;

/// Identifies an information set within one player's cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InfoSetKey {
    pub history: Vec<Action>,
    pub actions: Vec<Action>,
}

impl InfoSetKey {
    pub fn new(history: &[Action], actions: &[Action]) -> Self {
        InfoSetKey {
            history: history.to_vec(),
            actions: actions.to_vec(),
        }
    }
}

/// Where a looked-up probability vector came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Stored(&'a [f64]),
    Fallback(&'a [f64]),
}

impl<'a> Lookup<'a> {
    pub fn probabilities(self) -> &'a [f64] {
        match self {
            Lookup::Stored(p) | Lookup::Fallback(p) => p,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, Lookup::Fallback(_))
    }
}

/// All information sets of a single player.
#[derive(Debug, Clone)]
pub struct StrategyIndex {
    pub player: Player,
    cards: BTreeMap<Rank, HashMap<InfoSetKey, Vec<f64>>>,
}

impl StrategyIndex {
    pub fn new(player: Player) -> Self {
        StrategyIndex {
            player,
            cards: BTreeMap::new(),
        }
    }

    /// Build the index for `player` from a parsed dump, ignoring other players' records.
    pub fn from_records(player: Player, records: &[InfoSetRecord]) -> Self {
        let mut index = StrategyIndex::new(player);
        for record in records.iter().filter(|r| r.player == player) {
            index.insert(record);
        }
        index
    }

    /// Store a record. A later record for the same card and key replaces the earlier one.
    pub fn insert(&mut self, record: &InfoSetRecord) {
        let key = InfoSetKey::new(&record.history, &record.actions);
        let replaced = self
            .cards
            .entry(record.card)
            .or_default()
            .insert(key, record.probabilities.clone());
        if replaced.is_some() {
            trace!(
                "player {} card {}: duplicate information set '{}' overwritten",
                self.player,
                record.card,
                format_history(&record.history)
            );
        }
    }

    pub fn get(&self, card: Rank, key: &InfoSetKey) -> Option<&[f64]> {
        self.cards.get(&card)?.get(key).map(Vec::as_slice)
    }

    /// Stored probabilities for `key`, or `default` when the dump never
    /// reached that information set.
    pub fn lookup<'a>(&'a self, card: Rank, key: &InfoSetKey, default: &'a [f64]) -> Lookup<'a> {
        match self.get(card, key) {
            Some(probs) => Lookup::Stored(probs),
            None => {
                debug!(
                    "player {} card {}: no information set at history '{}' with actions [{}], using fallback {:?}",
                    self.player,
                    card,
                    format_history(&key.history),
                    format_history(&key.actions),
                    default
                );
                Lookup::Fallback(default)
            }
        }
    }

    /// Cards present in the index, A first.
    pub fn ranks(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self.cards.keys().copied().collect();
        sort_for_display(&mut ranks);
        ranks
    }

    pub fn num_info_sets(&self) -> usize {
        self.cards.values().map(HashMap::len).sum()
    }
}
