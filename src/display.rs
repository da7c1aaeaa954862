//! Terminal rendering of strategy tables.

use colored::Colorize;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Color, Table};

use crate::report::Report;
use crate::table::StrategyTable;

fn value_cell(p: f64, fallback: bool) -> Cell {
    let cell = Cell::new(format!("{:.2}", p)).set_alignment(CellAlignment::Right);
    // Filled from the fallback policy, not read from the dump.
    if fallback {
        cell.fg(Color::DarkGrey)
    } else if p > 0.70 {
        cell.fg(Color::Green)
    } else if p > 0.30 {
        cell.fg(Color::Yellow)
    } else {
        cell
    }
}

pub fn render_table(table: &StrategyTable) -> Table {
    let mut out = Table::new();
    out.load_preset(UTF8_FULL_CONDENSED);

    let mut header = vec![Cell::new("")];
    header.extend(
        table
            .columns
            .iter()
            .map(|r| Cell::new(r).set_alignment(CellAlignment::Right)),
    );
    out.set_header(header);

    for ((label, values), fallback) in table.rows.iter().zip(&table.values).zip(&table.fallback) {
        let mut row = vec![Cell::new(label)];
        row.extend(values.iter().zip(fallback).map(|(&p, &f)| value_cell(p, f)));
        out.add_row(row);
    }
    out
}

impl Report {
    pub fn display(&self) {
        for table in &self.tables {
            println!();
            println!("  {}", table.title.bold());
            println!("{}", render_table(table));
        }
        println!();
    }
}
