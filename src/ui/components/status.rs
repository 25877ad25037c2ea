//! The line above the footer: a pending question, else the notification.

use super::print_line;
use crate::app::NotificationKind;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::UIViewModel;

pub fn render_status(row: usize, vm: &UIViewModel, cols: usize) {
    let colors = &vm.palette.colors;

    if let Some(question) = &vm.confirm {
        let style = format!("{}{}", Palette::bold(), Palette::fg(&colors.error));
        print_line(row, &format!(" ? {question} (y/n)"), &style, cols);
        return;
    }

    match &vm.notification {
        Some(notification) => {
            let (symbol, color) = match notification.kind {
                NotificationKind::Success => ("✓", &colors.success),
                NotificationKind::Error => ("✗", &colors.error),
                NotificationKind::Info => ("i", &colors.info),
            };
            let style = format!("{}{}", Palette::bold(), Palette::fg(color));
            print_line(row, &format!(" {symbol} {}", notification.message), &style, cols);
        }
        None => print_line(row, "", "", cols),
    }
}
