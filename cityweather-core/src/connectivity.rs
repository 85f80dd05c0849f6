//! Online/offline signal, injected wherever a request might be issued.

use std::fmt::Debug;

use tokio::sync::watch;

pub trait Connectivity: Send + Sync + Debug {
    fn is_online(&self) -> bool;
}

/// Assumes the network is always reachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOnline;

impl Connectivity for AlwaysOnline {
    fn is_online(&self) -> bool {
        true
    }
}

/// Connectivity flag that can be flipped at runtime and observed through
/// [`WatchConnectivity::subscribe`].
#[derive(Debug)]
pub struct WatchConnectivity {
    tx: watch::Sender<bool>,
}

impl WatchConnectivity {
    pub fn new(online: bool) -> Self {
        let (tx, _rx) = watch::channel(online);
        Self { tx }
    }

    /// Updates the flag; subscribers are only notified on an actual change.
    pub fn set_online(&self, online: bool) {
        self.tx.send_if_modified(|current| {
            if *current == online {
                false
            } else {
                *current = online;
                true
            }
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

impl Default for WatchConnectivity {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Connectivity for WatchConnectivity {
    fn is_online(&self) -> bool {
        *self.tx.borrow()
    }
}
