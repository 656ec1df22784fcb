//! Output formatting for the CLI

use crate::pipeline::SeriesSummary;

/// Banner printed once before any match
pub const TITLE: &str = "Tic-Tac-Toe: Random Bot vs Random Bot";

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Percentage of `count` in `total`, one decimal place
pub fn format_rate(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", count as f64 * 100.0 / total as f64)
}

/// Print the tally after a multi-game series
pub fn print_summary(summary: &SeriesSummary) {
    let total = summary.total();
    print_section("Series summary");
    print_kv("Games", &total.to_string());
    for (label, count) in [
        ("X wins", summary.x_wins),
        ("O wins", summary.o_wins),
        ("Draws", summary.draws),
    ] {
        print_kv(label, &format!("{count} ({})", format_rate(count, total)));
    }
}
