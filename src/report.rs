//! Entry point: dump text or file in, strategy tables out.

use std::fs;
use std::path::Path;

use log::info;

use crate::actions::Player;
use crate::error::{ReportError, Result};
use crate::index::StrategyIndex;
use crate::record::parse_dump;
use crate::table::{build_table, StrategyTable};
use crate::tree::Role;

/// All tables for a dump: the first-to-act table, then the responder's
/// checked-to and bet-into tables.
#[derive(Debug, Clone)]
pub struct Report {
    pub tables: Vec<StrategyTable>,
}

impl Report {
    pub fn table(&self, title: &str) -> Option<&StrategyTable> {
        self.tables.iter().find(|t| t.title == title)
    }
}

pub fn report_from_str(text: &str) -> Result<Report> {
    let records = parse_dump(text)?;

    let mut tables = Vec::new();
    for player in [Player::First, Player::Second] {
        let index = StrategyIndex::from_records(player, &records);
        info!(
            "player {}: {} information sets over {} cards",
            player,
            index.num_info_sets(),
            index.ranks().len()
        );
        for scenario in Role::for_player(player).scenarios() {
            tables.push(build_table(scenario, &index));
        }
    }
    Ok(Report { tables })
}

/// Read the dump at `path` fully and build its report.
pub fn load_report(path: &Path) -> Result<Report> {
    let text = fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    report_from_str(&text)
}
