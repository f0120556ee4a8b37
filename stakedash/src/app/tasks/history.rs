//! # Transaction History Task
//!
//! Fetches one page of the account's on-contract transaction log. Paging
//! parameters live in the view state; ordering is applied when the result
//! lands (the sort toggle re-sorts without waiting for the network).

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::error::ChainError;
use crate::core::service::ChainService;
use crate::services::chain::HistoryEntry;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

pub(crate) fn refresh(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (chain, account, offset, limit, generation) = {
        let mut state = state.write();
        let Some(session) = state.session.as_ref() else {
            return;
        };
        let account = session.account.clone();
        if state.history.poll.in_flight() {
            state.history.poll.mark_dirty();
            return;
        }
        let offset = (state.history.page * state.history.page_size) as u64;
        let limit = state.history.page_size as u64;
        let epoch = state.refresh_epoch;
        let generation = state.history.poll.begin(epoch);
        (state.chain.clone(), account, offset, limit, generation)
    };

    spawn(async move {
        let result = fetch_page(chain.as_ref(), &account, offset, limit).await;
        let _ = event_tx.send(AppEvent::HistoryFetched { generation, result }).await;
    });
}

pub(crate) async fn fetch_page(
    chain: &dyn ChainService,
    account: &str,
    offset: u64,
    limit: u64,
) -> Result<Vec<HistoryEntry>, ChainError> {
    chain.user_transactions(account, offset, limit).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::mock::{MockChain, MOCK_ACCOUNT};

    fn entry(timestamp: i64, kind: &str) -> HistoryEntry {
        HistoryEntry {
            timestamp,
            kind: kind.to_string(),
            amount: 10u128.pow(18),
        }
    }

    #[tokio::test]
    async fn paging_skips_and_limits() {
        let chain = MockChain::default();
        *chain.history.lock().unwrap() = (0..30).map(|i| entry(1_000 + i, "deposit")).collect();

        let page = fetch_page(&chain, MOCK_ACCOUNT, 10, 10).await.expect("fetch succeeds");
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].timestamp, 1_010);
        assert_eq!(page[9].timestamp, 1_019);

        let tail = fetch_page(&chain, MOCK_ACCOUNT, 25, 10).await.expect("fetch succeeds");
        assert_eq!(tail.len(), 5);
    }
}
