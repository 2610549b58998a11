// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-process event bus.
//!
//! Query handlers publish [`crate::events::DomainEvent`] values here
//! after answering a query; observers subscribe typed callbacks.
//! Everything is synchronous and in-memory: publishing an event runs
//! every subscriber for that event type, in subscription order, on the
//! publisher's thread, before `publish` returns.
//!
//! # Delivery policy
//!
//! - An event type with no subscribers is dropped silently; publishing
//!   is never an error.
//! - Subscribers for *other* event types are never invoked; routing is
//!   by [`TypeId`].
//! - A panicking subscriber propagates to the publisher, and later
//!   subscribers for that event do not run. Handlers that must not
//!   take down a publish belong behind [`std::panic::catch_unwind`] on
//!   the subscriber side.
//!
//! Subscription lists are copied out of the registry before invocation,
//! so a subscriber may itself subscribe or publish without deadlocking.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::events::DomainEvent;

type ErasedCallback = Arc<dyn Fn(&(dyn Any + Send + Sync)) + Send + Sync>;

/// Synchronous publish/subscribe bus keyed by event type.
#[derive(Default)]
pub struct InMemoryEventBus {
    subscribers: RwLock<HashMap<TypeId, Vec<ErasedCallback>>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for every future publish of `E`.
    ///
    /// Callbacks accumulate: subscribing twice runs the callback twice
    /// per event.
    pub fn subscribe<E, F>(&self, callback: F)
    where
        E: DomainEvent,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let erased: ErasedCallback = Arc::new(move |event| {
            if let Some(typed) = event.downcast_ref::<E>() {
                callback(typed);
            }
        });
        self.subscribers
            .write()
            .entry(TypeId::of::<E>())
            .or_default()
            .push(erased);
    }

    /// Deliver `event` to every subscriber of its type, in
    /// subscription order.
    pub fn publish<E: DomainEvent>(&self, event: &E) {
        let callbacks: Vec<ErasedCallback> = {
            let subscribers = self.subscribers.read();
            match subscribers.get(&TypeId::of::<E>()) {
                Some(list) => list.clone(),
                None => {
                    debug!(event_type = event.event_type(), "no subscribers for event");
                    return;
                }
            }
        };

        debug!(
            event_type = event.event_type(),
            subscribers = callbacks.len(),
            "publishing event"
        );
        for callback in &callbacks {
            callback(event);
        }
    }

    /// Number of callbacks currently subscribed to `E`.
    pub fn subscriber_count<E: DomainEvent>(&self) -> usize {
        self.subscribers
            .read()
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }
}
