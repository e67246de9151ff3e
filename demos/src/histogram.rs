//! Terminal histogram rendering for measurement counts.

use console::style;
use skinfaxi_hal::Counts;

/// Maximum number of outcome rows rendered; the rest is summarized.
const MAX_ROWS: usize = 16;

/// Width of the longest bar, in characters.
const BAR_WIDTH: usize = 40;

/// Render a histogram of measurement counts.
///
/// Outcomes are sorted by count, descending; only the top [`MAX_ROWS`]
/// are drawn and the remainder is summarized on a final line. Bars are
/// scaled so the most frequent outcome fills the full width.
pub fn render(counts: &Counts) -> String {
    if counts.is_empty() {
        return format!("  {}", style("(no outcomes)").dim());
    }

    let sorted = counts.sorted();
    let total = counts.total();
    let max_count = sorted[0].1;

    let mut out = String::new();
    for (bitstring, count) in sorted.iter().take(MAX_ROWS) {
        let bar_len = (u64::from(*count) * BAR_WIDTH as u64 / u64::from(max_count)) as usize;
        let percent = 100.0 * f64::from(*count) / total as f64;
        out.push_str(&format!(
            "  {}  {}{} {:>5} ({:.1}%)\n",
            style(bitstring).bold(),
            style("█".repeat(bar_len)).cyan(),
            " ".repeat(BAR_WIDTH - bar_len),
            count,
            percent,
        ));
    }

    if sorted.len() > MAX_ROWS {
        let hidden = &sorted[MAX_ROWS..];
        let hidden_shots: u64 = hidden.iter().map(|(_, c)| u64::from(*c)).sum();
        out.push_str(&format!(
            "  {}\n",
            style(format!(
                "… {} more outcomes ({hidden_shots} shots)",
                hidden.len()
            ))
            .dim(),
        ));
    }

    out
}

/// Print a histogram of measurement counts to stdout.
pub fn print_histogram(counts: &Counts) {
    print!("{}", render(counts));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_orders_by_count() {
        let mut counts = Counts::new();
        counts.insert("00", 10);
        counts.insert("11", 900);
        counts.insert("01", 90);

        let rendered = render(&counts);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("11"));
        assert!(lines[1].contains("01"));
        assert!(lines[2].contains("00"));
    }

    #[test]
    fn test_render_truncates_long_tails() {
        let mut counts = Counts::new();
        for i in 0..20 {
            counts.insert(format!("{i:05b}"), 20 - i);
        }

        let rendered = render(&counts);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), MAX_ROWS + 1);
        assert!(lines[MAX_ROWS].contains("4 more outcomes"));
    }

    #[test]
    fn test_render_empty() {
        let rendered = render(&Counts::new());
        assert!(rendered.contains("no outcomes"));
    }
}
