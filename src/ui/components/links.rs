//! Public link list.

use super::print_line;
use crate::ui::helpers::truncate;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::PublicLinkItem;

/// Width of the badge column, brackets included.
const BADGE_WIDTH: usize = 6;

/// One row per link from `row` up to (not including) `limit`; leftover rows
/// are cleared.
pub fn render_public_links(row: usize, limit: usize, items: &[PublicLinkItem], palette: &Palette, cols: usize) {
    let mut current_row = row;

    for item in items {
        if current_row >= limit {
            return;
        }

        let badge = format!("[{:^width$}]", item.icon.badge, width = BADGE_WIDTH - 2);
        let domain_width = (cols / 3).max(8);
        let title_width = cols.saturating_sub(BADGE_WIDTH + domain_width + 6);
        let title = truncate(&item.title, title_width);
        let domain = truncate(&item.domain, domain_width);
        let marker = if item.is_selected { ">" } else { " " };
        let text = format!(" {marker} {badge} {title:<title_width$}  {domain}");

        let style = if item.is_selected {
            format!(
                "{}{}{}",
                Palette::bold(),
                Palette::fg(&palette.colors.selection_fg),
                Palette::bg(&palette.colors.selection_bg)
            )
        } else {
            Palette::fg(&palette.colors.text_normal)
        };
        print_line(current_row, &text, &style, cols);
        current_row += 1;
    }

    while current_row < limit {
        print_line(current_row, "", "", cols);
        current_row += 1;
    }
}
