// Input handling: keyboard dispatch per screen plus pointer interaction
// with the visualization panels.

pub mod helpers;
pub mod screens;

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::state::App;
use crate::viz::{self, ContainerId};

pub fn handle_input(app: &mut App, key: KeyCode) {
    screens::dispatch_input(app, key);
}

/// Routes pointer events to the visualization under the cursor: hover
/// drives the tooltip, left-drag pins network nodes.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved => on_hover(app, mouse.column, mouse.row),
        MouseEventKind::Down(MouseButton::Left) => on_press(app, mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => on_drag(app, mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => on_release(app),
        _ => {}
    }
}

/// The container whose panel contains the cell, with the cell mapped into
/// that container's surface coordinates.
fn container_at(app: &App, column: u16, row: u16) -> Option<(ContainerId, f64, f64)> {
    let (id, rect) = app
        .panel_areas
        .iter()
        .find(|(_, rect)| contains(**rect, column, row))
        .map(|(id, rect)| (*id, *rect))?;
    let handle = app.registry.handle(id)?;
    let (x, y) = to_surface(rect, handle.dims.width, handle.dims.height, column, row);
    Some((id, x, y))
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

fn to_surface(rect: Rect, width: f64, height: f64, column: u16, row: u16) -> (f64, f64) {
    let x = (f64::from(column - rect.x) + 0.5) / f64::from(rect.width.max(1)) * width;
    let y = (f64::from(row - rect.y) + 0.5) / f64::from(rect.height.max(1)) * height;
    (x, y)
}

fn on_hover(app: &mut App, column: u16, row: u16) {
    let Some((id, x, y)) = container_at(app, column, row) else {
        app.tooltip.hide();
        return;
    };
    let Some(content) = app
        .registry
        .handle(id)
        .and_then(|handle| viz::hit_test(handle, x, y))
    else {
        app.tooltip.hide();
        return;
    };
    app.tooltip.show(x, y, &content);
    app.tooltip_cell = (column, row);
}

fn on_press(app: &mut App, column: u16, row: u16) {
    let Some((id, x, y)) = container_at(app, column, row) else {
        return;
    };
    let Some(handle) = app.registry.handle_mut(id) else {
        return;
    };
    let Some(sim) = handle.simulation.as_mut() else {
        return;
    };
    if let Some(index) = sim.node_at(x, y, 2.0) {
        sim.drag_start(index);
        app.dragging = Some((id, index));
        app.tooltip.hide();
    }
}

fn on_drag(app: &mut App, column: u16, row: u16) {
    let Some((id, index)) = app.dragging else {
        return;
    };
    let Some(rect) = app.panel_areas.get(&id).copied() else {
        return;
    };
    let clamped_col = column.clamp(rect.x, rect.x + rect.width.saturating_sub(1));
    let clamped_row = row.clamp(rect.y, rect.y + rect.height.saturating_sub(1));
    let Some(handle) = app.registry.handle_mut(id) else {
        return;
    };
    let (width, height) = (handle.dims.width, handle.dims.height);
    if let Some(sim) = handle.simulation.as_mut() {
        let (x, y) = to_surface(rect, width, height, clamped_col, clamped_row);
        sim.drag_to(index, x, y);
    }
}

fn on_release(app: &mut App) {
    let Some((id, index)) = app.dragging.take() else {
        return;
    };
    if let Some(sim) = app
        .registry
        .handle_mut(id)
        .and_then(|handle| handle.simulation.as_mut())
    {
        sim.drag_end(index);
    }
}
