use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::hover::{grid, HoverTarget, HoverTransition};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
};
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => state.resize(width, height),
        // Focus changes produce no transitions: a highlight applied before
        // the pointer left the window stays applied until the next observed
        // move.
        _ => {}
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        _ => {}
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Moved {
        return;
    }
    let transitions = state.binder.pointer_moved(mouse.column, mouse.row);
    if transitions.is_empty() {
        return;
    }
    for transition in transitions {
        apply_transition(state, transition);
    }
    state.dirty = true;
}

/// Apply one hover transition to the page: the marker class for the
/// paragraph, the row/column background union for a grid cell. Leave clears
/// with the same selection that enter painted.
fn apply_transition(state: &mut AppState, transition: HoverTransition) {
    match transition {
        HoverTransition::Enter(HoverTarget::Paragraph) => {
            state.page.paragraph.add_class(&state.marker_class);
            debug!(class = %state.marker_class, "paragraph enter");
        }
        HoverTransition::Leave(HoverTarget::Paragraph) => {
            state.page.paragraph.remove_class(&state.marker_class);
            debug!(class = %state.marker_class, "paragraph leave");
        }
        HoverTransition::Enter(HoverTarget::Cell(pos)) => {
            let color = state.highlight_color;
            let (rows, cols) = (state.page.grid.rows(), state.page.grid.cols());
            for p in grid::affected_cells(rows, cols, pos) {
                state.page.grid.set_background(p, Some(color));
            }
            debug!(row = pos.row, col = pos.col, "cell enter");
        }
        HoverTransition::Leave(HoverTarget::Cell(pos)) => {
            let (rows, cols) = (state.page.grid.rows(), state.page.grid.cols());
            for p in grid::affected_cells(rows, cols, pos) {
                state.page.grid.set_background(p, None);
            }
            debug!(row = pos.row, col = pos.col, "cell leave");
        }
    }
}

fn handle_tick(state: &mut AppState) {
    state.tick_count += 1;
    // Refresh the status bar clock once a second
    if state.tick_count % 20 == 0 {
        state.dirty = true;
    }
}
