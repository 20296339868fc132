// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Synchronous notification channel.
//!
//! A [`Signal`] is an ordered list of receivers. [`Signal::send`] calls each
//! receiver in connection order on the caller's thread before returning;
//! nothing is queued or persisted, so a receiver connected after a send
//! never sees it.
//!
//! The repository owns a `post_archive` signal that fires after every
//! successful archive, carrying the model name and the archived entity.
//! Typical receivers invalidate caches or drop search-index entries.

use std::{fmt, sync::Arc};

use parking_lot::RwLock;

/// Payload of an archive notification.
#[derive(Debug)]
pub struct ArchiveEvent<'a, E> {
    /// Name of the model that sent the event.
    pub sender: &'static str,

    /// The entity that was archived.
    pub instance: &'a E
}

/// Handle identifying a connected receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReceiverId(u64);

type Receiver<E> = Arc<dyn Fn(&ArchiveEvent<'_, E>) + Send + Sync>;

struct Receivers<E> {
    next: u64,
    list: Vec<(ReceiverId, Receiver<E>)>
}

/// Ordered list of archive event receivers.
pub struct Signal<E> {
    receivers: RwLock<Receivers<E>>
}

impl<E> Signal<E> {
    /// Create a signal with no receivers.
    pub fn new() -> Self {
        Self {
            receivers: RwLock::new(Receivers {
                next: 0,
                list: Vec::new()
            })
        }
    }

    /// Connect a receiver. Receivers run in connection order.
    pub fn connect<F>(&self, receiver: F) -> ReceiverId
    where
        F: Fn(&ArchiveEvent<'_, E>) + Send + Sync + 'static
    {
        let mut receivers = self.receivers.write();
        let id = ReceiverId(receivers.next);
        receivers.next += 1;
        receivers.list.push((id, Arc::new(receiver)));
        id
    }

    /// Disconnect a receiver. Returns `false` if it was not connected.
    pub fn disconnect(&self, id: ReceiverId) -> bool {
        let mut receivers = self.receivers.write();
        let before = receivers.list.len();
        receivers.list.retain(|(rid, _)| *rid != id);
        receivers.list.len() != before
    }

    /// Number of connected receivers.
    pub fn receiver_count(&self) -> usize {
        self.receivers.read().list.len()
    }

    /// Deliver an event to every receiver.
    ///
    /// Returns the number of receivers called. The receiver list is
    /// snapshotted first, so receivers may connect or disconnect without
    /// deadlocking.
    pub fn send(&self, sender: &'static str, instance: &E) -> usize {
        let snapshot: Vec<Receiver<E>> = self
            .receivers
            .read()
            .list
            .iter()
            .map(|(_, r)| Arc::clone(r))
            .collect();

        let event = ArchiveEvent {
            sender,
            instance
        };
        for receiver in &snapshot {
            receiver(&event);
        }

        tracing::trace!(sender, receivers = snapshot.len(), "archive signal sent");
        snapshot.len()
    }
}

impl<E> Default for Signal<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("receivers", &self.receiver_count())
            .finish()
    }
}
