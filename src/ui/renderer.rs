//! Top-level rendering coordinator.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Computes the view model for a `rows` × `cols` pane and draws either the
/// public page or the admin panel, then the status line and footer.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, rows: usize, cols: usize) {
    match &vm.admin {
        Some(admin) => components::render_admin_page(vm, admin, cols, rows),
        None => components::render_public_page(vm, cols, rows),
    }
}
