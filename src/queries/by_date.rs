// Copyright (c) 2025 - Cowboy AI, Inc.
//! Per-date theater performance.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::cqrs::{InMemoryEventBus, Query, QueryHandler};
use crate::domain::{
    PerformanceError, Revenue, Sale, TheaterPerformanceResult, TheaterSalesAggregate,
};
use crate::engine::eager;
use crate::engine::memo::{self, ComputationCache, MemoKey};
use crate::engine::sort::{sort_by, SortOrder};
use crate::events::TheaterPerformanceQueriedEvent;
use crate::store::TheaterSalesStore;

/// Ask for every theater's sales total on one calendar date.
///
/// Answers cover *all* theaters: a theater with no sales that day
/// appears with a zero total rather than being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetTheatersByDateQuery {
    pub date: NaiveDate,
}

impl Query for GetTheatersByDateQuery {
    type Output = Result<Vec<TheaterPerformanceResult>, PerformanceError>;
}

/// Answers [`GetTheatersByDateQuery`].
///
/// Pipeline: filter sales to the date, aggregate per theater through
/// the memo cache keyed on `(theater id, date)`, rank descending, and
/// convert to dated result rows. The memoized aggregates are shared
/// with [`super::UnderperformingTheatersHandler`] for the same date.
pub struct TheatersByDateHandler {
    store: Arc<TheaterSalesStore>,
    cache: Arc<ComputationCache>,
    bus: Arc<InMemoryEventBus>,
}

impl TheatersByDateHandler {
    pub fn new(
        store: Arc<TheaterSalesStore>,
        cache: Arc<ComputationCache>,
        bus: Arc<InMemoryEventBus>,
    ) -> Self {
        Self { store, cache, bus }
    }
}

impl QueryHandler<GetTheatersByDateQuery> for TheatersByDateHandler {
    fn handle(
        &self,
        query: GetTheatersByDateQuery,
    ) -> Result<Vec<TheaterPerformanceResult>, PerformanceError> {
        debug!(date = %query.date, "answering theaters-by-date query");

        let sales_on_date: Vec<Sale> = eager::filter(self.store.sales().to_vec(), |sale| {
            sale.sale_date == query.date
        });

        let aggregates = memo::memo_map(
            &self.cache,
            self.store.theaters().to_vec(),
            |theater| MemoKey::from((theater.id, query.date)),
            |theater| {
                let own_sales = eager::filter(&sales_on_date, |sale| {
                    sale.theater_id == theater.id
                });
                let total = eager::reduce(own_sales, Revenue::ZERO, |sum, sale| {
                    sum + sale.amount
                });
                TheaterSalesAggregate::new(theater, total)
            },
        );

        let ranked = sort_by(
            aggregates,
            |aggregate| aggregate.total_sales,
            SortOrder::Descending,
        );

        let results = ranked
            .into_iter()
            .map(|aggregate| TheaterPerformanceResult::from_aggregate(aggregate, Some(query.date)))
            .collect::<Result<Vec<_>, _>>()?;

        let highest_revenue = eager::reduce(
            eager::map(&results, |result| result.total_revenue()),
            Revenue::ZERO,
            |highest, revenue| if revenue > highest { revenue } else { highest },
        );

        self.bus.publish(&TheaterPerformanceQueriedEvent::new(
            query.date,
            results.len(),
            highest_revenue,
        ));

        debug!(
            date = %query.date,
            theaters = results.len(),
            highest = %highest_revenue,
            "theaters-by-date query answered"
        );
        Ok(results)
    }
}
