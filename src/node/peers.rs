// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use crate::traits::Peer;

/// Peers of one role, keyed by name.
#[derive(Debug, Default)]
pub struct PeerTable {
    peers: RwLock<BTreeMap<String, String>>,
}

impl PeerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `peer`, returning the address previously held under its name.
    pub fn insert(&self, peer: Peer) -> Option<String> {
        let mut peers = self.peers.write().unwrap_or_else(PoisonError::into_inner);
        peers.insert(peer.name, peer.address)
    }

    pub fn get(&self, name: &str) -> Option<Peer> {
        let peers = self.peers.read().unwrap_or_else(PoisonError::into_inner);
        peers
            .get(name)
            .map(|address| Peer::new(name, address.clone()))
    }

    /// All peers, ordered by name.
    pub fn snapshot(&self) -> Vec<Peer> {
        let peers = self.peers.read().unwrap_or_else(PoisonError::into_inner);
        peers
            .iter()
            .map(|(name, address)| Peer::new(name.clone(), address.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.peers.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
