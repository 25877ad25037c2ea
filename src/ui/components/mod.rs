//! Page section renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`profile`]: Name, bio and image of the page owner
//! - [`links`]: Public link list
//! - [`empty`]: Message shown when there are no links
//! - [`admin`]: Section tabs and the focused section's rows
//! - [`status`]: Notification or confirmation line
//! - [`footer`]: Keybinding hints
//!
//! # Layouts
//!
//! Public page:
//!
//! ```text
//! [blank] [Header] [Border] [Name] [Bio] [Image] [Border]
//! [Links or empty state ...]
//! [Status] [Border] [Footer]
//! ```
//!
//! Admin panel:
//!
//! ```text
//! [blank] [Header] [Tabs] [Border]
//! [Section rows ...]
//! [Status] [Border] [Footer]
//! ```

mod admin;
mod empty;
mod footer;
mod header;
mod links;
mod profile;
mod status;

use crate::ui::helpers::{position_cursor, render_border, truncate};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::{AdminPanel, UIViewModel};

/// Prints `text` from column 1, styled with `style` and padded to `cols`.
fn print_line(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = text.chars().count();

    position_cursor(row, 1);
    print!("{style}{text}{}{}", " ".repeat(cols.saturating_sub(len)), Palette::reset());
}

/// Draws the status line, bottom border and footer; returns the first row
/// they occupy.
fn render_bottom(vm: &UIViewModel, cols: usize, rows: usize) -> usize {
    let footer_row = rows.max(3);
    let border_row = footer_row - 1;
    let status_row = footer_row - 2;

    status::render_status(status_row, vm, cols);
    render_border(border_row, &vm.palette.colors.border, cols);
    footer::render_footer(footer_row, &vm.footer, &vm.palette, cols);
    status_row
}

pub fn render_public_page(vm: &UIViewModel, cols: usize, rows: usize) {
    let palette = &vm.palette;
    let mut current_row = 2;

    current_row = header::render_header(current_row, &vm.header, palette, cols);
    current_row = render_border(current_row, &palette.colors.border, cols);
    current_row = profile::render_profile_card(current_row, &vm.profile, palette, cols);
    current_row = render_border(current_row, &palette.colors.border, cols);

    let bottom = render_bottom(vm, cols, rows);
    match &vm.empty_state {
        Some(empty) => empty::render_empty_state(current_row + 1, empty, palette, cols),
        None => links::render_public_links(current_row, bottom, &vm.public_links, palette, cols),
    }
}

pub fn render_admin_page(vm: &UIViewModel, admin: &AdminPanel, cols: usize, rows: usize) {
    let palette = &vm.palette;
    let mut current_row = 2;

    current_row = header::render_header(current_row, &vm.header, palette, cols);
    current_row = admin::render_tabs(current_row, &admin.tabs, palette, cols);
    current_row = render_border(current_row, &palette.colors.border, cols);

    let bottom = render_bottom(vm, cols, rows);
    admin::render_section(current_row, bottom, admin, palette, cols);
}
