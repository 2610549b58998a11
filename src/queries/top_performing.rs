// Copyright (c) 2025 - Cowboy AI, Inc.
//! Top theaters over a date range.

use std::sync::Arc;

use tracing::debug;

use crate::cqrs::{InMemoryEventBus, Query, QueryHandler};
use crate::domain::{
    DateRange, PerformanceError, Revenue, Sale, TheaterPerformanceResult, TheaterSalesAggregate,
};
use crate::engine::sort::{sort_by, SortOrder};
use crate::engine::eager;
use crate::events::TopTheatersQueriedEvent;
use crate::store::TheaterSalesStore;

/// Ask for the `top_count` highest-grossing theaters across an
/// inclusive date range.
///
/// `top_count` of zero is answered literally with an empty list; a
/// count beyond the number of theaters returns every theater.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetTopPerformingTheatersQuery {
    pub date_range: DateRange,
    pub top_count: usize,
}

impl Query for GetTopPerformingTheatersQuery {
    type Output = Result<Vec<TheaterPerformanceResult>, PerformanceError>;
}

/// Answers [`GetTopPerformingTheatersQuery`].
///
/// Pipeline: filter sales to the range, aggregate per theater, rank
/// descending, take the first `top_count` rows with a counting fold,
/// and convert to undated result rows. Range totals are not memoized;
/// ranges overlap too freely for per-range entries to pay off.
pub struct TopPerformingTheatersHandler {
    store: Arc<TheaterSalesStore>,
    bus: Arc<InMemoryEventBus>,
}

impl TopPerformingTheatersHandler {
    pub fn new(store: Arc<TheaterSalesStore>, bus: Arc<InMemoryEventBus>) -> Self {
        Self { store, bus }
    }
}

impl QueryHandler<GetTopPerformingTheatersQuery> for TopPerformingTheatersHandler {
    fn handle(
        &self,
        query: GetTopPerformingTheatersQuery,
    ) -> Result<Vec<TheaterPerformanceResult>, PerformanceError> {
        debug!(
            range = %query.date_range,
            top_count = query.top_count,
            "answering top-performing query"
        );

        let sales_in_range: Vec<Sale> = eager::filter(self.store.sales().to_vec(), |sale| {
            query.date_range.contains(sale.sale_date)
        });

        let aggregates = eager::map(self.store.theaters().to_vec(), |theater| {
            let own_sales = eager::filter(&sales_in_range, |sale| {
                sale.theater_id == theater.id
            });
            let total = eager::reduce(own_sales, Revenue::ZERO, |sum, sale| sum + sale.amount);
            TheaterSalesAggregate::new(theater, total)
        });

        let ranked = sort_by(
            aggregates,
            |aggregate| aggregate.total_sales,
            SortOrder::Descending,
        );

        let top = eager::reduce(
            ranked,
            Vec::new(),
            |mut selected: Vec<TheaterSalesAggregate>, aggregate| {
                if selected.len() < query.top_count {
                    selected.push(aggregate);
                }
                selected
            },
        );

        let results = top
            .into_iter()
            .map(|aggregate| TheaterPerformanceResult::from_aggregate(aggregate, None))
            .collect::<Result<Vec<_>, _>>()?;

        self.bus.publish(&TopTheatersQueriedEvent::new(
            query.date_range.start(),
            query.date_range.end(),
            query.top_count,
            results.len(),
        ));

        debug!(
            range = %query.date_range,
            returned = results.len(),
            "top-performing query answered"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Theater;
    use crate::store::seed_dates;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange::new(start, end).expect("valid test range")
    }

    fn handler() -> (TopPerformingTheatersHandler, Arc<InMemoryEventBus>) {
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = TopPerformingTheatersHandler::new(
            Arc::new(TheaterSalesStore::seeded()),
            Arc::clone(&bus),
        );
        (handler, bus)
    }

    #[test]
    fn returns_the_requested_number_of_rows_ranked_descending() {
        let (handler, _bus) = handler();

        let results = handler
            .handle(GetTopPerformingTheatersQuery {
                date_range: range(date(2024, 7, 1), date(2024, 7, 31)),
                top_count: 3,
            })
            .expect("pipeline succeeds");

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].theater().name, "Multiplex 20");
        assert_eq!(results[0].total_revenue(), Revenue::from_dollars(22_900));
        assert!(results[0].total_revenue() >= results[1].total_revenue());
        assert!(results[1].total_revenue() >= results[2].total_revenue());
    }

    #[test]
    fn range_totals_accumulate_across_dates() {
        let (handler, _bus) = handler();

        // first quarter covers New Year's Day and the spring weekday
        let results = handler
            .handle(GetTopPerformingTheatersQuery {
                date_range: range(date(2024, 1, 1), date(2024, 3, 31)),
                top_count: 1,
            })
            .expect("pipeline succeeds");

        assert_eq!(results[0].theater().name, "Multiplex 20");
        assert_eq!(results[0].total_revenue(), Revenue::from_dollars(28_000));
    }

    #[test]
    fn zero_top_count_returns_an_empty_list() {
        let (handler, _bus) = handler();

        let results = handler
            .handle(GetTopPerformingTheatersQuery {
                date_range: range(date(2024, 1, 1), date(2024, 12, 31)),
                top_count: 0,
            })
            .expect("pipeline succeeds");

        assert!(results.is_empty());
    }

    #[test]
    fn oversized_top_count_returns_every_theater() {
        let (handler, _bus) = handler();

        let results = handler
            .handle(GetTopPerformingTheatersQuery {
                date_range: range(date(2024, 1, 1), date(2024, 12, 31)),
                top_count: 100,
            })
            .expect("pipeline succeeds");

        assert_eq!(results.len(), 6);
    }

    #[test]
    fn rows_are_undated() {
        let (handler, _bus) = handler();

        let results = handler
            .handle(GetTopPerformingTheatersQuery {
                date_range: range(date(2024, 7, 1), date(2024, 7, 31)),
                top_count: 2,
            })
            .expect("pipeline succeeds");

        assert!(results.iter().all(|row| row.performance_date().is_none()));
    }

    #[test]
    fn publishes_requested_and_returned_counts() {
        let (handler, bus) = handler();
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        bus.subscribe(move |event: &TopTheatersQueriedEvent| {
            sink.lock()
                .expect("sink lock")
                .push((event.top_count, event.result_count));
        });

        handler
            .handle(GetTopPerformingTheatersQuery {
                date_range: range(date(2024, 7, 1), date(2024, 7, 31)),
                top_count: 100,
            })
            .expect("pipeline succeeds");

        assert_eq!(*seen.lock().expect("sink lock"), vec![(100, 6)]);
    }

    #[test]
    fn empty_range_of_sales_still_ranks_all_theaters_at_zero() {
        let bus = Arc::new(InMemoryEventBus::new());
        let store = TheaterSalesStore::new(
            vec![Theater::new(1, "Rialto"), Theater::new(2, "Orpheum")],
            vec![],
            vec![],
        );
        let handler = TopPerformingTheatersHandler::new(Arc::new(store), bus);

        let results = handler
            .handle(GetTopPerformingTheatersQuery {
                date_range: range(seed_dates::quiet_day(), seed_dates::quiet_day()),
                top_count: 5,
            })
            .expect("pipeline succeeds");

        assert_eq!(results.len(), 2);
        assert!(results
            .iter()
            .all(|row| row.total_revenue() == Revenue::ZERO));
        // ties keep the store's listing order
        assert_eq!(results[0].theater().name, "Rialto");
    }
}
