//! # Navigation Handlers
//!
//! Screen switching and Tab cycling.

use crate::app::state::{AppState, Screen};
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) fn handle_screen_change(state: Arc<RwLock<AppState>>, screen: Screen) {
    let mut state = state.write();
    if Screen::requires_session(screen) && !state.is_connected() {
        return;
    }
    if screen == Screen::Admin && !state.is_admin() {
        return;
    }
    state.current_screen = screen;
}

pub(crate) fn next_screen(state: Arc<RwLock<AppState>>) {
    cycle(state, 1);
}

pub(crate) fn previous_screen(state: Arc<RwLock<AppState>>) {
    cycle(state, -1);
}

fn cycle(state: Arc<RwLock<AppState>>, step: isize) {
    let mut state = state.write();
    let screens: Vec<Screen> = Screen::all()
        .iter()
        .copied()
        .filter(|s| match s {
            Screen::Admin => state.is_admin(),
            Screen::Connect => true,
            _ => state.is_connected(),
        })
        .collect();
    if screens.is_empty() {
        return;
    }

    let current = screens
        .iter()
        .position(|s| *s == state.current_screen)
        .unwrap_or(0);
    let next = (current as isize + step).rem_euclid(screens.len() as isize) as usize;
    state.current_screen = screens[next];
}
