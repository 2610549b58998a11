// Copyright (c) 2025 - Cowboy AI, Inc.
//! CQRS plumbing: query dispatch and in-process event publication.
//!
//! The read side of the sample is deliberately small. A
//! [`QueryDispatcher`] routes typed query values to their registered
//! handler, and an [`InMemoryEventBus`] lets handlers announce what
//! they did without knowing who is listening. Both resolve by type id,
//! so routing is checked at compile time at every call site.

pub mod bus;
pub mod dispatcher;

pub use bus::InMemoryEventBus;
pub use dispatcher::{DispatchError, DispatchResult, Query, QueryDispatcher, QueryHandler};
