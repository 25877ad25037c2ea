use crate::ui::helpers::print_centered;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::HeaderInfo;

/// Bold title centered on the header background; returns the next row.
pub fn render_header(row: usize, header: &HeaderInfo, palette: &Palette, cols: usize) -> usize {
    print!("{}{}", Palette::bold(), Palette::fg(&palette.colors.header_fg));
    if let Some(bg) = &palette.colors.header_bg {
        print!("{}", Palette::bg(bg));
    }
    print_centered(row, &header.title, cols);
    print!("{}", Palette::reset());
    row + 1
}
