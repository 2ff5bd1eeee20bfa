//! Trending hashtags, fetched once per mount and discarded on unmount.

use crate::api::ApiClient;
use crate::error::AppError;
use crate::trending::TrendingTag;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedPhase {
    Fetching,
    Ready,
    Failed,
    Unmounted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedState {
    pub phase: FeedPhase,
    pub tags: Vec<TrendingTag>,
}

/// Writes a resolved fetch into the state unless the feed is already unmounted.
/// Returns whether the state changed.
fn apply_fetch(state: &mut FeedState, result: Result<Vec<TrendingTag>, AppError>) -> bool {
    if state.phase == FeedPhase::Unmounted {
        return false;
    }
    match result {
        Ok(tags) => {
            tracing::debug!("loaded {} trending hashtags", tags.len());
            state.tags = tags;
            state.phase = FeedPhase::Ready;
        }
        Err(_) => {
            state.tags.clear();
            state.phase = FeedPhase::Failed;
        }
    }
    true
}

pub struct TrendingFeed {
    state: Arc<watch::Sender<FeedState>>,
    shutdown_tx: watch::Sender<()>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl TrendingFeed {
    /// Starts the single fetch for this mount. Rendering never waits on it.
    pub fn mount(client: ApiClient) -> Self {
        let (state, _) = watch::channel(FeedState {
            phase: FeedPhase::Fetching,
            tags: Vec::new(),
        });
        let state = Arc::new(state);
        let (shutdown_tx, mut shutdown_rx) = watch::channel::<()>(());

        let state_for_task = state.clone();
        let task = tokio::spawn(async move {
            tokio::select! {
                result = client.trending_hashtags() => {
                    if let Err(e) = &result {
                        tracing::error!("failed to fetch trending hashtags: {e}");
                    }
                    let applied = state_for_task.send_if_modified(|state| apply_fetch(state, result));
                    if !applied {
                        tracing::debug!("discarding trending hashtags that resolved after unmount");
                    }
                }
                _ = shutdown_rx.changed() => {
                    tracing::debug!("trending hashtag fetch cancelled by unmount");
                }
            }
        });

        Self {
            state,
            shutdown_tx,
            task: Mutex::new(Some(task)),
        }
    }

    /// The tags to render right now; empty until the fetch succeeds.
    pub fn tags(&self) -> Vec<TrendingTag> {
        self.state.borrow().tags.clone()
    }

    pub fn phase(&self) -> FeedPhase {
        self.state.borrow().phase
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.subscribe()
    }

    /// Waits until the fetch has resolved (or the feed was unmounted).
    pub async fn settled(&self) -> FeedPhase {
        let mut rx = self.subscribe();
        rx.wait_for(|state| state.phase != FeedPhase::Fetching)
            .await
            .map(|state| state.phase)
            .unwrap_or_else(|_| self.phase())
    }

    /// Tears the feed down: any outstanding fetch is cancelled and a result
    /// that still arrives is never applied.
    pub async fn unmount(&self) {
        self.state.send_modify(|state| {
            state.phase = FeedPhase::Unmounted;
            state.tags.clear();
        });
        let _ = self.shutdown_tx.send(());
        if let Some(task) = self.task.lock().await.take() {
            if let Err(e) = task.await {
                tracing::error!("trending hashtag task failed: {e}");
            }
        }
    }
}
