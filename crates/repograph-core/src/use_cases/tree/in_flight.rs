//! Per-key table of running tree fetches.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use repograph_models::RepoTree;
use tokio::sync::watch;

use crate::Result;

type Outcome = Option<Result<RepoTree>>;

/// Running fetches, by cache key.
#[derive(Default)]
pub(crate) struct InFlightTable {
    fetches: Mutex<HashMap<String, watch::Receiver<Outcome>>>,
}

pub(crate) enum InFlightRole<'t> {
    /// No fetch is running for the key; the caller runs it.
    Leader(InFlightLeader<'t>),
    /// A fetch is already running; the caller waits for its outcome.
    Follower(InFlightFollower),
}

impl InFlightTable {
    /// Registers interest in a key.
    pub fn join(&self, key: &str) -> InFlightRole<'_> {
        let mut fetches = self.lock();

        if let Some(receiver) = fetches.get(key) {
            return InFlightRole::Follower(InFlightFollower {
                receiver: receiver.clone(),
            });
        }

        let (sender, receiver) = watch::channel(None);
        fetches.insert(key.to_string(), receiver);

        InFlightRole::Leader(InFlightLeader {
            table: self,
            key: key.to_string(),
            sender,
        })
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    // The map stays consistent even if a holder panicked.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, watch::Receiver<Outcome>>> {
        self.fetches.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owner of a running fetch. Unregisters the key when dropped.
pub(crate) struct InFlightLeader<'t> {
    table: &'t InFlightTable,
    key: String,
    sender: watch::Sender<Outcome>,
}

impl InFlightLeader<'_> {
    /// Hands the outcome to every follower.
    pub fn publish(self, outcome: Result<RepoTree>) {
        self.sender.send_replace(Some(outcome));
    }
}

impl Drop for InFlightLeader<'_> {
    fn drop(&mut self) {
        self.table.lock().remove(&self.key);
    }
}

pub(crate) struct InFlightFollower {
    receiver: watch::Receiver<Outcome>,
}

impl InFlightFollower {
    /// Waits for the leader outcome.
    ///
    /// Returns `None` when the leader went away without publishing.
    pub async fn outcome(mut self) -> Option<Result<RepoTree>> {
        match self.receiver.wait_for(Option::is_some).await {
            Ok(outcome) => outcome.clone(),
            Err(_) => None,
        }
    }
}
