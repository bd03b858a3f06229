//! Property tests for the statistics aggregator

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use core_kernel::PersonId;
use domain_statistics::{cash_flow_rows, year_window, CompanyFigures, YEAR_WINDOW_SIZE};

const CURRENT_YEAR: i32 = 2024;

fn arb_year_map() -> impl Strategy<Value = BTreeMap<i32, Decimal>> {
    proptest::collection::btree_map(
        2015i32..=CURRENT_YEAR,
        (0i64..=1_000_000).prop_map(Decimal::from),
        0..6,
    )
}

fn arb_companies() -> impl Strategy<Value = Vec<CompanyFigures>> {
    proptest::collection::vec((arb_year_map(), arb_year_map()), 0..8).prop_map(|maps| {
        maps.into_iter()
            .enumerate()
            .map(|(i, (revenue_per_year, expenses_per_year))| CompanyFigures {
                person_id: PersonId::new(i as i64 + 1),
                person_name: format!("Company {}", i + 1),
                revenue: revenue_per_year.values().copied().sum(),
                revenue_per_year,
                expenses_per_year,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn window_is_bounded_sorted_and_contains_current_year(companies in arb_companies()) {
        let window = year_window(&companies, CURRENT_YEAR);

        prop_assert!(!window.is_empty());
        prop_assert!(window.len() <= YEAR_WINDOW_SIZE);
        prop_assert!(window.windows(2).all(|pair| pair[0] > pair[1]));
        // Current year is always the most recent year present
        prop_assert_eq!(window[0], CURRENT_YEAR);
    }

    #[test]
    fn cash_flow_equals_revenue_minus_expenses(companies in arb_companies()) {
        let window = year_window(&companies, CURRENT_YEAR);
        let rows = cash_flow_rows(&companies, &window);

        prop_assert_eq!(rows.len(), companies.len());
        for (row, company) in rows.iter().zip(&companies) {
            prop_assert_eq!(row.person_id, company.person_id);
            for (i, &year) in window.iter().enumerate() {
                let expected = company.revenue_in(year) - company.expenses_in(year);
                prop_assert_eq!(row.cash_flow[i], expected);
            }
        }
    }

    #[test]
    fn total_is_the_windowed_sum(companies in arb_companies()) {
        let window = year_window(&companies, CURRENT_YEAR);
        for row in cash_flow_rows(&companies, &window) {
            let sum: Decimal = row.cash_flow.iter().copied().sum();
            prop_assert_eq!(row.total_cash_flow, sum);
        }
    }

    #[test]
    fn chronological_series_is_the_reversed_window(companies in arb_companies()) {
        let window = year_window(&companies, CURRENT_YEAR);
        for row in cash_flow_rows(&companies, &window) {
            let series = row.chronological_series(&window);
            let years: Vec<i32> = series.iter().map(|(y, _)| *y).collect();
            let mut reversed = window.clone();
            reversed.reverse();
            prop_assert_eq!(years, reversed);
        }
    }
}
