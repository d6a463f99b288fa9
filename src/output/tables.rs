use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color as TableColor, ContentArrangement, Table};

/// Table and cell creation helpers
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn cyan_header(labels: &[&str]) -> Vec<Cell> {
    labels
        .iter()
        .map(|label| Cell::new(*label).fg(TableColor::Cyan))
        .collect()
}

/// Horizontal bar scaled against the largest value in the chart.
///
/// Non-positive and zero-max values render an empty bar; anything
/// positive gets at least one block so small stages stay visible.
pub fn amount_bar(amount: f64, max_amount: f64, width: usize) -> String {
    if amount <= 0.0 || max_amount <= 0.0 {
        return String::new();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let blocks = ((amount / max_amount) * width as f64).round() as usize;
    "█".repeat(blocks.clamp(1, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_bar_full_width_for_max() {
        assert_eq!(amount_bar(100.0, 100.0, 10), "█".repeat(10));
    }

    #[test]
    fn test_amount_bar_scales_proportionally() {
        assert_eq!(amount_bar(50.0, 100.0, 10), "█".repeat(5));
    }

    #[test]
    fn test_amount_bar_small_values_stay_visible() {
        assert_eq!(amount_bar(0.1, 1000.0, 10), "█");
    }

    #[test]
    fn test_amount_bar_zero_amount_is_empty() {
        assert_eq!(amount_bar(0.0, 100.0, 10), "");
    }

    #[test]
    fn test_amount_bar_zero_max_is_empty() {
        assert_eq!(amount_bar(10.0, 0.0, 10), "");
    }
}
