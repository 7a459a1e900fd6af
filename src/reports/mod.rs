// ===== groovecore/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use groovecore::combo::Combo;
use groovecore::sim::SessionReport;
use groovecore::stats::MatchStats;

fn pattern_str(combo: &Combo) -> String {
    combo
        .pattern
        .iter()
        .map(|kind| kind.to_string())
        .collect::<Vec<_>>()
        .join(" > ")
}

pub fn print_library(combos: &[Combo]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Combo").add_attribute(Attribute::Bold),
        Cell::new("Pattern"),
        Cell::new("Base").fg(Color::Cyan),
        Cell::new("Diff"),
        Cell::new("Limit ms"),
        Cell::new("Mult").fg(Color::Green),
    ]);

    for i in 2..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for combo in combos {
        let mult = combo
            .multiplier
            .map_or_else(|| "-".to_string(), |m| format!("{:.2}", m));
        table.add_row(vec![
            Cell::new(&combo.id).add_attribute(Attribute::Bold),
            Cell::new(pattern_str(combo)),
            Cell::new(combo.base_score).fg(Color::Cyan),
            Cell::new(combo.difficulty),
            Cell::new(combo.time_limit_ms),
            Cell::new(mult).fg(Color::Green),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_match_report(stats: &MatchStats, total_score: i64, library: &[Combo]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Total score").add_attribute(Attribute::Bold),
        Cell::new(total_score)
            .fg(Color::Cyan)
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Activations"),
        Cell::new(stats.activations).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Combos matched"),
        Cell::new(stats.combos_matched).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Max chain"),
        Cell::new(stats.max_chain)
            .fg(Color::Green)
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Points banked"),
        Cell::new(stats.points_banked).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Points missed"),
        Cell::new(stats.points_missed)
            .fg(Color::Red)
            .set_alignment(CellAlignment::Right),
    ]);
    println!("\n{}", table);

    if stats.combos_matched > 0 {
        print_combo_counts(stats, library);
    }
}

fn print_combo_counts(stats: &MatchStats, library: &[Combo]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Combo").add_attribute(Attribute::Bold),
        Cell::new("Hits"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    // Library order keeps the table stable across runs.
    for combo in library {
        if let Some(count) = stats.combo_counts().get(&combo.id) {
            table.add_row(vec![Cell::new(&combo.id), Cell::new(count)]);
        }
    }
    println!("{}", table);
}

pub fn print_simulation_report(reports: &[SessionReport]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Seed").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Activations"),
        Cell::new("Combos"),
        Cell::new("Max chain").fg(Color::Green),
        Cell::new("Missed pts").fg(Color::Red),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for report in reports {
        table.add_row(vec![
            Cell::new(report.seed).add_attribute(Attribute::Bold),
            Cell::new(report.total_score).fg(Color::Cyan),
            Cell::new(report.stats.activations),
            Cell::new(report.stats.combos_matched),
            Cell::new(report.stats.max_chain).fg(Color::Green),
            Cell::new(report.stats.points_missed).fg(Color::Red),
        ]);
    }

    let sessions = reports.len() as i64;
    if sessions > 0 {
        let total: i64 = reports.iter().map(|r| r.total_score).sum();
        let best = reports.iter().map(|r| r.total_score).max().unwrap_or(0);
        table.add_row(vec![
            Cell::new("mean / best").add_attribute(Attribute::Bold),
            Cell::new(format!("{} / {}", total / sessions, best)).fg(Color::Cyan),
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
        ]);
    }
    println!("\n{}", table);
}
