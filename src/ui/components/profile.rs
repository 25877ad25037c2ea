//! Profile card: name, bio and image reference, centered.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::ProfileCard;

/// Always takes three rows so the link list starts at a fixed place.
pub fn render_profile_card(row: usize, card: &ProfileCard, palette: &Palette, cols: usize) -> usize {
    print!("{}{}", Palette::bold(), Palette::fg(&palette.colors.accent));
    print_centered(row, &card.name, cols);
    print!("{}", Palette::reset());

    print!("{}", Palette::fg(&palette.colors.text_normal));
    print_centered(row + 1, &card.bio, cols);
    print!("{}", Palette::reset());

    let image = if card.image_url.is_empty() {
        String::new()
    } else {
        format!("[image] {}", card.image_url)
    };
    print!("{}{}", Palette::dim(), Palette::fg(&palette.colors.text_dim));
    print_centered(row + 2, &image, cols);
    print!("{}", Palette::reset());

    row + 3
}
