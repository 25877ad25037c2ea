use crate::ui::helpers::print_centered;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::FooterInfo;

pub fn render_footer(row: usize, footer: &FooterInfo, palette: &Palette, cols: usize) -> usize {
    print!("{}", Palette::fg(&palette.colors.text_dim));
    print_centered(row, &footer.keybindings, cols);
    print!("{}", Palette::reset());
    row + 1
}
