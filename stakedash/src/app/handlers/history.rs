//! # History View Handlers
//!
//! Paging and ordering of the transaction history table. Changing either
//! triggers an out-of-band fetch for the new window.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) fn set_page(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, page: usize) {
    {
        let mut state = state.write();
        if state.history.page == page {
            return;
        }
        state.history.page = page;
    }
    tasks::history::refresh(state, event_tx);
}

pub(crate) fn set_page_size(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, size: usize) {
    {
        let mut state = state.write();
        if state.history.page_size == size {
            return;
        }
        state.history.page_size = size;
        state.history.page = 0;
    }
    tasks::history::refresh(state, event_tx);
}

pub(crate) fn toggle_sort(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    {
        let mut state = state.write();
        state.history.sort_descending = !state.history.sort_descending;
        // Re-order what is already on screen; the refetch follows for
        // anything the contract appended in the meantime.
        if state.history.sort_descending {
            state.history.entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        } else {
            state.history.entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        }
    }
    tasks::history::refresh(state, event_tx);
}
