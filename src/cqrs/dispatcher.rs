// Copyright (c) 2025 - Cowboy AI, Inc.
//! Typed query dispatch.
//!
//! A query is a plain value describing what the caller wants to know;
//! its [`Query::Output`] associated type fixes what the answer looks
//! like. The dispatcher owns one handler per query type and routes by
//! [`TypeId`], so `dispatch` returns exactly the output type the query
//! declares with no casting at call sites.
//!
//! ```rust,ignore
//! let mut dispatcher = QueryDispatcher::new();
//! dispatcher.register::<GetTheatersByDateQuery, _>(handler)?;
//! let rows = dispatcher.dispatch(GetTheatersByDateQuery { date })??;
//! ```

use std::any::{type_name, Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::engine::eager;
use crate::engine::sort::{sort_by, SortOrder};

/// A read-side request with a statically known answer type.
pub trait Query: Send + Sync + 'static {
    /// What a handler produces for this query.
    type Output;
}

/// Handles one query type.
///
/// Handlers take `&self` so one registered instance can serve
/// concurrent dispatches; any internal failure belongs in the query's
/// `Output` type and passes through the dispatcher untouched.
pub trait QueryHandler<Q: Query>: Send + Sync {
    fn handle(&self, query: Q) -> Q::Output;
}

/// Routing failures surfaced by [`QueryDispatcher`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Dispatch was attempted for a query type nobody registered.
    #[error("no handler registered for query type {query}")]
    HandlerNotRegistered { query: &'static str },

    /// A second handler was registered for an already-routed query type.
    #[error("a handler is already registered for query type {query}")]
    DuplicateHandler { query: &'static str },
}

/// Result type for dispatcher operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

struct RegisteredHandler {
    query_name: &'static str,
    // concrete type: Box<dyn QueryHandler<Q>> for the Q keyed on
    handler: Box<dyn Any + Send + Sync>,
}

/// Routes query values to their registered handlers.
#[derive(Default)]
pub struct QueryDispatcher {
    handlers: HashMap<TypeId, RegisteredHandler>,
}

impl QueryDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for query type `Q`.
    ///
    /// Each query type routes to exactly one handler; a second
    /// registration is rejected rather than silently replacing the
    /// first.
    pub fn register<Q, H>(&mut self, handler: H) -> DispatchResult<()>
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
    {
        match self.handlers.entry(TypeId::of::<Q>()) {
            Entry::Occupied(_) => Err(DispatchError::DuplicateHandler {
                query: short_name::<Q>(),
            }),
            Entry::Vacant(slot) => {
                debug!(query = short_name::<Q>(), "registering query handler");
                let erased: Box<dyn QueryHandler<Q>> = Box::new(handler);
                slot.insert(RegisteredHandler {
                    query_name: short_name::<Q>(),
                    handler: Box::new(erased),
                });
                Ok(())
            }
        }
    }

    /// Route `query` to its handler and return the handler's output.
    pub fn dispatch<Q: Query>(&self, query: Q) -> DispatchResult<Q::Output> {
        let registered = self.handlers.get(&TypeId::of::<Q>()).ok_or(
            DispatchError::HandlerNotRegistered {
                query: short_name::<Q>(),
            },
        )?;
        let handler = registered
            .handler
            .downcast_ref::<Box<dyn QueryHandler<Q>>>()
            .expect("handler stored under its query TypeId");
        debug!(query = registered.query_name, "dispatching query");
        Ok(handler.handle(query))
    }

    /// Names of every registered query type, sorted alphabetically.
    ///
    /// Names come from the compiler's type names and are meant for
    /// diagnostics and demos, not programmatic routing.
    pub fn registered_query_names(&self) -> Vec<&'static str> {
        let names = eager::map(self.handlers.values(), |registered| registered.query_name);
        sort_by(names, |name| *name, SortOrder::Ascending)
    }
}

/// Last path segment of a type name, mirroring how the registry names
/// queries in errors and listings.
fn short_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
