// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory sales data the queries run over.
//!
//! The store is read-only reference data: queries never mutate it, so
//! handlers share one instance behind an [`std::sync::Arc`] without
//! locking. [`TheaterSalesStore::seeded`] ships a deterministic
//! fixture year used by the demo binary and the integration tests;
//! its totals are stable on purpose so expectations can be asserted
//! exactly.

use tracing::debug;

use crate::domain::{Movie, Revenue, Sale, Theater};

/// Calendar dates the seeded fixture data is built around.
///
/// Kept next to the store so tests and the demo agree on which days
/// carry which totals. The ninth of May is seeded with no sales at
/// all, which is what the underperforming query needs to show.
pub mod seed_dates {
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
    }

    /// 2024-01-01, a modest holiday with three theaters open.
    pub fn new_years_day() -> NaiveDate {
        date(2024, 1, 1)
    }

    /// 2024-03-15, an ordinary spring Friday.
    pub fn spring_weekday() -> NaiveDate {
        date(2024, 3, 15)
    }

    /// 2024-05-09, the day with no sales recorded anywhere.
    pub fn quiet_day() -> NaiveDate {
        date(2024, 5, 9)
    }

    /// 2024-06-15, a summer Saturday where the Multiplex is dark.
    pub fn summer_saturday() -> NaiveDate {
        date(2024, 6, 15)
    }

    /// 2024-07-04, the busiest seeded day.
    pub fn independence_day() -> NaiveDate {
        date(2024, 7, 4)
    }

    /// 2024-11-28, Thanksgiving.
    pub fn thanksgiving() -> NaiveDate {
        date(2024, 11, 28)
    }

    /// 2024-12-25, Christmas.
    pub fn christmas() -> NaiveDate {
        date(2024, 12, 25)
    }
}

/// Read-only catalog of theaters, movies, and sales rows.
pub struct TheaterSalesStore {
    theaters: Vec<Theater>,
    movies: Vec<Movie>,
    sales: Vec<Sale>,
}

impl TheaterSalesStore {
    pub fn new(theaters: Vec<Theater>, movies: Vec<Movie>, sales: Vec<Sale>) -> Self {
        debug!(
            theaters = theaters.len(),
            movies = movies.len(),
            sales = sales.len(),
            "sales store loaded"
        );
        Self {
            theaters,
            movies,
            sales,
        }
    }

    pub fn theaters(&self) -> &[Theater] {
        &self.theaters
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Deterministic fixture year: six theaters, four movies, and
    /// sales on seven dates of 2024.
    ///
    /// Headline totals, in dollars:
    ///
    /// | date       | top theater    | total  | notes                        |
    /// |------------|----------------|--------|------------------------------|
    /// | 2024-01-01 | Multiplex 20   |  9,900 | three theaters open          |
    /// | 2024-03-15 | Multiplex 20   | 18,100 | split across two movies      |
    /// | 2024-05-09 | (none)         |      0 | no sales anywhere            |
    /// | 2024-06-15 | IMAX Theater   | 19,300 | Multiplex closed             |
    /// | 2024-07-04 | Multiplex 20   | 22,900 | busiest day, two-movie split |
    /// | 2024-11-28 | Multiplex 20   | 14,300 | Roxy and Starlight closed    |
    /// | 2024-12-25 | Multiplex 20   | 12,800 | Drive-In closed for winter   |
    pub fn seeded() -> Self {
        let theaters = vec![
            Theater::new(1, "Grand Cinema"),
            Theater::new(2, "Multiplex 20"),
            Theater::new(3, "IMAX Theater"),
            Theater::new(4, "Drive-In Classic"),
            Theater::new(5, "Roxy Downtown"),
            Theater::new(6, "Starlight Pavilion"),
        ];

        let movies = vec![
            Movie::new(1, "Galaxy at War"),
            Movie::new(2, "The Last Reel"),
            Movie::new(3, "Midnight Premiere"),
            Movie::new(4, "Summer Matinee"),
        ];

        let rows: Vec<(u32, u32, u32, chrono::NaiveDate, i64)> = vec![
            // New Year's Day: only the big three open
            (1, 2, 1, seed_dates::new_years_day(), 9_900),
            (2, 3, 2, seed_dates::new_years_day(), 8_700),
            (3, 1, 3, seed_dates::new_years_day(), 5_000),
            // Spring weekday: Multiplex total splits across two movies
            (4, 2, 1, seed_dates::spring_weekday(), 9_700),
            (5, 2, 2, seed_dates::spring_weekday(), 8_400),
            (6, 3, 1, seed_dates::spring_weekday(), 15_600),
            (7, 1, 2, seed_dates::spring_weekday(), 7_400),
            (8, 5, 3, seed_dates::spring_weekday(), 5_900),
            (9, 6, 4, seed_dates::spring_weekday(), 4_800),
            (10, 4, 4, seed_dates::spring_weekday(), 2_200),
            // Summer Saturday: Multiplex dark, IMAX carries the day
            (11, 3, 1, seed_dates::summer_saturday(), 19_300),
            (12, 1, 1, seed_dates::summer_saturday(), 11_200),
            (13, 5, 2, seed_dates::summer_saturday(), 8_800),
            (14, 6, 3, seed_dates::summer_saturday(), 7_600),
            (15, 4, 4, seed_dates::summer_saturday(), 6_400),
            // Independence Day: the busiest seeded day
            (16, 2, 1, seed_dates::independence_day(), 12_400),
            (17, 2, 2, seed_dates::independence_day(), 10_500),
            (18, 3, 1, seed_dates::independence_day(), 18_700),
            (19, 1, 2, seed_dates::independence_day(), 9_600),
            (20, 5, 3, seed_dates::independence_day(), 7_200),
            (21, 6, 4, seed_dates::independence_day(), 5_400),
            (22, 4, 4, seed_dates::independence_day(), 3_100),
            // Thanksgiving: downtown screens closed
            (23, 2, 2, seed_dates::thanksgiving(), 14_300),
            (24, 3, 3, seed_dates::thanksgiving(), 13_100),
            (25, 1, 1, seed_dates::thanksgiving(), 8_900),
            (26, 4, 4, seed_dates::thanksgiving(), 1_200),
            // Christmas: Drive-In closed for winter
            (27, 2, 3, seed_dates::christmas(), 12_800),
            (28, 3, 1, seed_dates::christmas(), 11_900),
            (29, 1, 2, seed_dates::christmas(), 8_300),
            (30, 6, 4, seed_dates::christmas(), 6_100),
            (31, 5, 3, seed_dates::christmas(), 4_700),
        ];

        let sales = rows
            .into_iter()
            .map(|(id, theater_id, movie_id, sale_date, dollars)| {
                Sale::new(id, theater_id, movie_id, sale_date, Revenue::from_dollars(dollars))
            })
            .collect();

        Self::new(theaters, movies, sales)
    }
}
