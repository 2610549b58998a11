// Copyright (c) 2025 - Cowboy AI, Inc.
//! Theaters at or below a revenue threshold on a given date.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::cqrs::{InMemoryEventBus, Query, QueryHandler};
use crate::domain::{
    PerformanceError, Revenue, Sale, TheaterPerformanceResult, TheaterSalesAggregate,
};
use crate::engine::composite::memo_lazy_filter;
use crate::engine::cursor::{Cursor, VecCursor};
use crate::engine::eager;
use crate::engine::memo::{memo_map, ComputationCache, MemoKey};
use crate::engine::sort::{sort_by, SortOrder};
use crate::events::TheaterPerformanceQueriedEvent;
use crate::store::TheaterSalesStore;

/// Ask which theaters grossed at or below `threshold` on `date`.
///
/// The threshold boundary is inclusive: a theater whose total exactly
/// equals the threshold is reported. The default threshold of
/// [`Revenue::ZERO`] therefore selects theaters with no sales at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetUnderperformingTheatersQuery {
    pub date: NaiveDate,
    pub threshold: Revenue,
}

impl GetUnderperformingTheatersQuery {
    /// Query for theaters with zero revenue on `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            threshold: Revenue::ZERO,
        }
    }

    /// Query with an explicit revenue ceiling.
    pub fn with_threshold(date: NaiveDate, threshold: Revenue) -> Self {
        Self { date, threshold }
    }
}

impl Query for GetUnderperformingTheatersQuery {
    type Output = Result<Vec<TheaterPerformanceResult>, PerformanceError>;
}

/// Answers [`GetUnderperformingTheatersQuery`].
///
/// Aggregation reuses the same cache keys as the by-date handler, so a
/// daily report followed by an underperformance check computes each
/// theater's total once. The threshold test itself runs through the
/// memoized lazy filter cursor, with the threshold folded into the
/// verdict key so different ceilings never share a cached verdict.
pub struct UnderperformingTheatersHandler {
    store: Arc<TheaterSalesStore>,
    cache: Arc<ComputationCache>,
    bus: Arc<InMemoryEventBus>,
}

impl UnderperformingTheatersHandler {
    pub fn new(
        store: Arc<TheaterSalesStore>,
        cache: Arc<ComputationCache>,
        bus: Arc<InMemoryEventBus>,
    ) -> Self {
        Self { store, cache, bus }
    }
}

impl QueryHandler<GetUnderperformingTheatersQuery> for UnderperformingTheatersHandler {
    fn handle(
        &self,
        query: GetUnderperformingTheatersQuery,
    ) -> Result<Vec<TheaterPerformanceResult>, PerformanceError> {
        debug!(
            date = %query.date,
            threshold = %query.threshold,
            "answering underperforming query"
        );

        let sales_on_date: Vec<Sale> = eager::filter(self.store.sales().to_vec(), |sale| {
            sale.sale_date == query.date
        });

        let aggregates = memo_map(
            &self.cache,
            self.store.theaters().to_vec(),
            |theater| MemoKey::from((theater.id, query.date)),
            |theater| {
                let own_sales = eager::filter(&sales_on_date, |sale| {
                    sale.theater_id == theater.id
                });
                let total = eager::reduce(own_sales, Revenue::ZERO, |sum, sale| sum + sale.amount);
                TheaterSalesAggregate::new(theater, total)
            },
        );

        let date = query.date;
        let threshold = query.threshold;
        let laggards = memo_lazy_filter(
            Arc::clone(&self.cache),
            VecCursor::new(aggregates),
            move |aggregate| MemoKey::from(((aggregate.theater.id, date), threshold.cents())),
            move |aggregate| aggregate.total_sales <= threshold,
        )
        .into_vec();

        let ranked = sort_by(
            laggards,
            |aggregate| aggregate.total_sales,
            SortOrder::Descending,
        );

        let results = ranked
            .into_iter()
            .map(|aggregate| TheaterPerformanceResult::from_aggregate(aggregate, Some(query.date)))
            .collect::<Result<Vec<_>, _>>()?;

        // every row is at or below the threshold, so the event's
        // headline revenue is pinned at zero
        self.bus.publish(&TheaterPerformanceQueriedEvent::new(
            query.date,
            results.len(),
            Revenue::ZERO,
        ));

        debug!(
            date = %query.date,
            returned = results.len(),
            "underperforming query answered"
        );
        Ok(results)
    }
}
