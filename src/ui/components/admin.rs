//! Admin panel: section tabs and the body of the focused section.

use super::print_line;
use crate::app::AdminSection;
use crate::domain::LinkField;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::{AdminPanel, EditableLinkItem, FieldRow, SectionTab, ThemeButton};

const LABEL_WIDTH: usize = 12;
const CARET: &str = "▏";

pub fn render_tabs(row: usize, tabs: &[SectionTab], palette: &Palette, cols: usize) -> usize {
    position_cursor(row, 1);
    let mut used = 0;
    for tab in tabs {
        let text = format!(" {} ", tab.title);
        let len = text.chars().count();
        if used + len + 1 > cols {
            break;
        }
        if tab.is_focused {
            print!(
                "{}{}{}",
                Palette::bold(),
                Palette::fg(&palette.colors.selection_fg),
                Palette::bg(&palette.colors.accent)
            );
        } else {
            print!("{}", Palette::fg(&palette.colors.text_dim));
        }
        print!("{text}{} ", Palette::reset());
        used += len + 1;
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

/// Draws the focused section between `row` and `limit`, clearing the rest.
pub fn render_section(row: usize, limit: usize, admin: &AdminPanel, palette: &Palette, cols: usize) {
    let lines = match admin.focused {
        AdminSection::Profile => field_lines(&admin.profile_fields, palette),
        AdminSection::NewLink => field_lines(&admin.new_link_fields, palette),
        AdminSection::Links => link_lines(&admin.editable_links, palette, cols),
        AdminSection::Backup => field_lines(&admin.backup_rows, palette),
        AdminSection::Theme => Vec::new(),
    };

    let mut current_row = row;
    if admin.focused == AdminSection::Theme {
        for button in &admin.themes {
            if current_row >= limit {
                return;
            }
            render_theme_button(current_row, button, palette, cols);
            current_row += 1;
        }
    }
    for (text, style) in lines {
        if current_row >= limit {
            return;
        }
        print_line(current_row, &text, &style, cols);
        current_row += 1;
    }
    while current_row < limit {
        print_line(current_row, "", "", cols);
        current_row += 1;
    }
}

fn row_style(is_selected: bool, palette: &Palette) -> String {
    if is_selected {
        format!(
            "{}{}",
            Palette::fg(&palette.colors.selection_fg),
            Palette::bg(&palette.colors.selection_bg)
        )
    } else {
        Palette::fg(&palette.colors.text_normal)
    }
}

fn field_lines(rows: &[FieldRow], palette: &Palette) -> Vec<(String, String)> {
    rows.iter()
        .map(|field| {
            let text = match &field.value {
                Some(value) => {
                    let caret = if field.is_editing { CARET } else { "" };
                    format!("  {:<LABEL_WIDTH$} {value}{caret}", format!("{}:", field.label))
                }
                None => format!("  [ {} ]", field.label),
            };
            let mut style = row_style(field.is_selected, palette);
            if field.value.is_none() {
                style.insert_str(0, Palette::bold());
            }
            (text, style)
        })
        .collect()
}

fn link_lines(items: &[EditableLinkItem], palette: &Palette, cols: usize) -> Vec<(String, String)> {
    let header = (
        format!("  {:>3}  {:<24}  URL", "#", "TITLE"),
        format!("{}{}", Palette::bold(), Palette::fg(&palette.colors.header_fg)),
    );
    if items.is_empty() {
        let style = format!("{}{}", Palette::dim(), Palette::fg(&palette.colors.text_dim));
        return vec![header, ("  No links yet".to_string(), style)];
    }

    let url_width = cols.saturating_sub(36).max(8);
    let mut lines = vec![header];
    lines.extend(items.iter().map(|item| {
        let caret = |field: LinkField| if item.editing == Some(field) { CARET } else { "" };
        let title = format!("{}{}", truncate(&item.title, 23), caret(LinkField::Title));
        let url = format!("{}{}", truncate(&item.url, url_width), caret(LinkField::Url));
        let marker = if item.is_dragging {
            "≡"
        } else if item.is_drop_target {
            "→"
        } else {
            " "
        };

        let text = format!("{marker} {:>3}  {title:<24}  {url}", item.position);
        let style = if item.is_dragging {
            format!("{}{}", Palette::underline(), Palette::fg(&palette.colors.accent))
        } else {
            row_style(item.is_selected, palette)
        };
        (text, style)
    }));
    lines
}

/// `● ██ Label`, the swatch drawn in the theme's accent color.
fn render_theme_button(row: usize, button: &ThemeButton, palette: &Palette, cols: usize) {
    let style = row_style(button.is_selected, palette);
    let mark = if button.is_active { "●" } else { "○" };
    let label = truncate(&button.label, cols.saturating_sub(8));
    let used = 7 + label.chars().count();

    position_cursor(row, 1);
    print!("{style}  {mark} {}██{style} {label}", Palette::fg(&button.swatch));
    print!("{}{}", " ".repeat(cols.saturating_sub(used)), Palette::reset());
}
