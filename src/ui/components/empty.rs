//! Empty state shown on the public page when there are no links.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::EmptyState;

/// Two centered lines starting at `row`: the message in `empty_state_fg` and
/// a dimmed hint below it.
pub fn render_empty_state(row: usize, empty: &EmptyState, palette: &Palette, cols: usize) {
    print!("{}", Palette::fg(&palette.colors.empty_state_fg));
    print_centered(row, &empty.message, cols);
    print!("{}", Palette::reset());

    print!("{}{}", Palette::dim(), Palette::fg(&palette.colors.text_dim));
    print_centered(row + 1, &empty.subtitle, cols);
    print!("{}", Palette::reset());
}
