use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use heatsort::heatmap::{Permutation, Row};
use heatsort::optimizer::Arrangement;
use heatsort::scorer::ScoreDetails;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::Range<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_trial_report(arrangement: &Arrangement) {
    if arrangement.trials.is_empty() {
        println!("\nNo search performed (fewer than two rows).");
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Trial").add_attribute(Attribute::Bold),
        Cell::new("Seed"),
        Cell::new("k"),
        Cell::new("Window"),
        Cell::new("Greedy"),
        Cell::new("Iters"),
        Cell::new("Moves").fg(Color::Green),
        Cell::new("Stalls").fg(Color::Red),
        Cell::new("Resets"),
        Cell::new("Best Score").fg(Color::Cyan),
    ]);
    align_right(&mut table, 1..10);

    for (i, t) in arrangement.trials.iter().enumerate() {
        let is_winner = arrangement.winner == Some(i);
        let id = if is_winner {
            format!("#{} 🏆", t.spec.id)
        } else {
            format!("#{}", t.spec.id)
        };
        let seed = t
            .spec
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(id).add_attribute(Attribute::Bold),
            Cell::new(seed),
            Cell::new(t.spec.params.change_size),
            Cell::new(t.spec.window),
            Cell::new(format!("{:.2}", t.spec.params.greedy)),
            Cell::new(t.stats.iterations),
            Cell::new(t.stats.moves).fg(Color::Green),
            Cell::new(t.stats.stalls).fg(Color::Red),
            Cell::new(t.stats.shuffles + t.stats.returns),
            Cell::new(format!("{:.4}", t.best_score)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_row_order(rows: &Permutation<Row>) {
    let names: Vec<&str> = rows.iter().map(Row::name).collect();
    println!("\nRow order: {}", names.join(" | "));
}

pub fn print_score_report(results: &[ScoreDetails]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Window").add_attribute(Attribute::Bold),
        Cell::new("Rows"),
        Cell::new("Pairs"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Adjacent Sum"),
        Cell::new("Adjacent Mean"),
        Cell::new("Worst Neighbors").fg(Color::Red),
        Cell::new("Worst Cost").fg(Color::Red),
    ]);
    align_right(&mut table, 1..8);

    for d in results {
        let worst = match &d.worst_pair {
            Some((a, b)) => format!("{} / {}", a, b),
            None => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(d.window).add_attribute(Attribute::Bold),
            Cell::new(d.rows),
            Cell::new(d.pairs),
            Cell::new(format!("{:.4}", d.score)).fg(Color::Cyan),
            Cell::new(format!("{:.4}", d.adjacent_total)),
            Cell::new(format!("{:.4}", d.adjacent_mean)),
            Cell::new(worst).fg(Color::Red),
            Cell::new(format!("{:.4}", d.worst_pair_cost)).fg(Color::Red),
        ]);
    }
    println!("\n{}", table);
}
