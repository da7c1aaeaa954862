//! Table assembly: rows are named paths, columns are ranks.

use std::collections::HashMap;

use crate::cards::Rank;
use crate::compose::{compose, CompoundPath};
use crate::index::StrategyIndex;
use crate::tree::Scenario;

#[derive(Debug, Clone, PartialEq)]
pub struct StrategyTable {
    pub title: String,
    pub rows: Vec<String>,
    /// Ranks present in the index, A first.
    pub columns: Vec<Rank>,
    /// `values[row][column]`.
    pub values: Vec<Vec<f64>>,
    /// Same shape as `values`; true where a missing information set was
    /// filled from the fallback policy.
    pub fallback: Vec<Vec<bool>>,
}

impl StrategyTable {
    pub fn value(&self, row: &str, rank: Rank) -> Option<f64> {
        let r = self.rows.iter().position(|label| label == row)?;
        let c = self.columns.iter().position(|&col| col == rank)?;
        Some(self.values[r][c])
    }

    pub fn is_fallback(&self, row: &str, rank: Rank) -> Option<bool> {
        let r = self.rows.iter().position(|label| label == row)?;
        let c = self.columns.iter().position(|&col| col == rank)?;
        Some(self.fallback[r][c])
    }
}

/// Compose every present card through the scenario's tree and lay the
/// results out in the scenario's declared row order.
pub fn build_table(scenario: &Scenario, index: &StrategyIndex) -> StrategyTable {
    let columns = index.ranks();
    let mut values = vec![vec![0.0; columns.len()]; scenario.rows.len()];
    let mut fallback = vec![vec![false; columns.len()]; scenario.rows.len()];

    for (c, &card) in columns.iter().enumerate() {
        let composed: HashMap<String, CompoundPath> = compose(&scenario.tree, index, card)
            .into_iter()
            .map(|path| (path.label(), path))
            .collect();
        for (r, label) in scenario.rows.iter().enumerate() {
            if let Some(path) = composed.get(label) {
                values[r][c] = path.probability;
                fallback[r][c] = path.used_fallback;
            }
        }
    }

    StrategyTable {
        title: scenario.title.to_string(),
        rows: scenario.rows.clone(),
        columns,
        values,
        fallback,
    }
}
