// Copyright (c) 2025 - Cowboy AI, Inc.
//! The reporting facade: one struct wiring store, cache, bus, and
//! dispatcher together.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::cqrs::{InMemoryEventBus, Query, QueryDispatcher};
use crate::domain::{DateRange, Revenue, Theater, TheaterPerformanceResult};
use crate::engine::eager;
use crate::engine::memo::ComputationCache;
use crate::errors::ReportingResult;
use crate::queries::{
    GetTheatersByDateQuery, GetTopPerformingTheatersQuery, GetUnderperformingTheatersQuery,
    TheatersByDateHandler, TopPerformingTheatersHandler, UnderperformingTheatersHandler,
};
use crate::store::TheaterSalesStore;

/// Entry point for issuing box-office queries.
///
/// Construction registers one handler per query type and hands each
/// handler shared access to the store, the computation cache, and the
/// event bus. All three query paths publish completion events through
/// the same bus, so a single subscription observes the whole service.
pub struct ReportingService {
    store: Arc<TheaterSalesStore>,
    cache: Arc<ComputationCache>,
    bus: Arc<InMemoryEventBus>,
    dispatcher: QueryDispatcher,
}

impl ReportingService {
    /// Wire a service around `store`.
    pub fn new(store: TheaterSalesStore) -> ReportingResult<Self> {
        let store = Arc::new(store);
        let cache = Arc::new(ComputationCache::new());
        let bus = Arc::new(InMemoryEventBus::new());

        let mut dispatcher = QueryDispatcher::new();
        dispatcher.register::<GetTheatersByDateQuery, _>(TheatersByDateHandler::new(
            Arc::clone(&store),
            Arc::clone(&cache),
            Arc::clone(&bus),
        ))?;
        dispatcher.register::<GetTopPerformingTheatersQuery, _>(TopPerformingTheatersHandler::new(
            Arc::clone(&store),
            Arc::clone(&bus),
        ))?;
        dispatcher.register::<GetUnderperformingTheatersQuery, _>(
            UnderperformingTheatersHandler::new(
                Arc::clone(&store),
                Arc::clone(&cache),
                Arc::clone(&bus),
            ),
        )?;

        info!(
            theaters = store.theaters().len(),
            sales = store.sales().len(),
            queries = ?dispatcher.registered_query_names(),
            "reporting service wired"
        );

        Ok(Self {
            store,
            cache,
            bus,
            dispatcher,
        })
    }

    /// Wire a service around the built-in sample season.
    pub fn seeded() -> ReportingResult<Self> {
        Self::new(TheaterSalesStore::seeded())
    }

    /// Dispatch any registered query and return its raw output.
    ///
    /// The convenience methods below flatten the two error layers for
    /// the built-in queries; this passthrough keeps the generic route
    /// open for code that works with query values directly.
    pub fn dispatch<Q: Query>(&self, query: Q) -> ReportingResult<Q::Output> {
        Ok(self.dispatcher.dispatch(query)?)
    }

    /// Revenue per theater on `date`, ranked highest first.
    pub fn theaters_by_date(
        &self,
        date: NaiveDate,
    ) -> ReportingResult<Vec<TheaterPerformanceResult>> {
        Ok(self.dispatcher.dispatch(GetTheatersByDateQuery { date })??)
    }

    /// The `top_count` highest-grossing theaters across `date_range`.
    pub fn top_performing(
        &self,
        date_range: DateRange,
        top_count: usize,
    ) -> ReportingResult<Vec<TheaterPerformanceResult>> {
        Ok(self.dispatcher.dispatch(GetTopPerformingTheatersQuery {
            date_range,
            top_count,
        })??)
    }

    /// Theaters grossing at or below `threshold` on `date`.
    pub fn underperforming(
        &self,
        date: NaiveDate,
        threshold: Revenue,
    ) -> ReportingResult<Vec<TheaterPerformanceResult>> {
        Ok(self
            .dispatcher
            .dispatch(GetUnderperformingTheatersQuery::with_threshold(
                date, threshold,
            ))??)
    }

    /// The single best-grossing theater on `date`.
    ///
    /// Every listed theater reports a total (zero when it had no
    /// sales), so this is `None` only when the store lists no
    /// theaters at all. Ties keep the first theater encountered,
    /// which by the ranking order of the by-date query is the one
    /// listed earliest in the store. The scan is a plain fold and
    /// does not depend on that ordering for correctness, only for
    /// tie-breaking.
    pub fn find_highest_sales_theater(&self, date: NaiveDate) -> ReportingResult<Option<Theater>> {
        let rows = self.theaters_by_date(date)?;
        let best = eager::reduce(
            rows,
            None,
            |best: Option<TheaterPerformanceResult>, candidate| match best {
                Some(current) if candidate.total_revenue() > current.total_revenue() => {
                    Some(candidate)
                }
                None => Some(candidate),
                keep => keep,
            },
        );
        Ok(best.map(|row| row.theater().clone()))
    }

    /// Names of the query types this service answers, sorted.
    pub fn registered_query_names(&self) -> Vec<&'static str> {
        self.dispatcher.registered_query_names()
    }

    /// The bus completion events are published on. Subscribe here to
    /// observe query activity.
    pub fn event_bus(&self) -> &Arc<InMemoryEventBus> {
        &self.bus
    }

    /// The shared memoization cache.
    pub fn cache(&self) -> &Arc<ComputationCache> {
        &self.cache
    }

    /// The sales data this service reports over.
    pub fn store(&self) -> &Arc<TheaterSalesStore> {
        &self.store
    }
}
