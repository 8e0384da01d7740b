//! Range query behaviour over loaded and in-memory datasets.

mod common;

use common::date;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sales_dash::stats::{round_whole, CategoryQuantity, DateSales, RangeQueryEngine};
use sales_dash::{load, query, DateRange, OrderRecord, OrdersDataset, QueryError};
use std::collections::HashSet;

fn order(
    order_date: chrono::NaiveDate,
    customer: &str,
    category: &str,
    quantity: u64,
    sales: Decimal,
    profit: Decimal,
) -> OrderRecord {
    OrderRecord {
        order_id: None,
        order_date,
        ship_date: order_date,
        customer_id: customer.to_string(),
        category: category.to_string(),
        quantity,
        sales,
        profit,
    }
}

fn sample_dataset() -> OrdersDataset {
    let (path, _tmp) = common::sample_orders();
    load(&path).unwrap()
}

// ---------------------------------------------------------------------------
// worked example
// ---------------------------------------------------------------------------

#[test]
fn two_row_example() {
    let dataset = OrdersDataset::from_records(vec![
        order(date(2015, 12, 5), "C1", "X", 3, dec!(100), dec!(20)),
        order(date(2015, 12, 20), "C2", "Y", 2, dec!(50), dec!(-5)),
    ]);

    let result = query(&dataset, DateRange::new(date(2015, 12, 1), date(2015, 12, 10)));

    assert_eq!(result.total_sales, dec!(100));
    assert_eq!(result.total_profit, dec!(20));
    assert_eq!(result.total_quantity, 3);
    assert_eq!(result.total_customer, 1);
    assert_eq!(
        result.sales_by_date,
        vec![DateSales {
            date: date(2015, 12, 5),
            sales: dec!(100)
        }]
    );
    assert_eq!(
        result.quantity_by_category,
        vec![CategoryQuantity {
            category: "X".to_string(),
            quantity: 3
        }]
    );
}

// ---------------------------------------------------------------------------
// filtering
// ---------------------------------------------------------------------------

#[test]
fn december_range_includes_both_boundaries() {
    let dataset = sample_dataset();
    let result = query(&dataset, DateRange::dashboard_default());

    // CA-3 (Dec 1) and CA-4 (Dec 31) are in, CA-5 (Nov 30) and CA-6 (Jan 1) are out
    assert_eq!(result.matched_orders, 5);
    assert_eq!(result.total_quantity, 13);
    assert_eq!(result.total_customer, 3);
    // 1494.50 and 325.25 before rounding
    assert_eq!(result.total_sales, dec!(1494));
    assert_eq!(result.total_profit, dec!(325));
}

#[test]
fn sales_series_is_one_point_per_date_ascending() {
    let result = query(&sample_dataset(), DateRange::dashboard_default());

    assert_eq!(
        result.sales_by_date,
        vec![
            DateSales { date: date(2015, 12, 1), sales: dec!(1234.50) },
            DateSales { date: date(2015, 12, 5), sales: dec!(199.50) },
            DateSales { date: date(2015, 12, 20), sales: dec!(50.00) },
            DateSales { date: date(2015, 12, 31), sales: dec!(10.50) },
        ]
    );
}

#[test]
fn quantity_series_is_grouped_by_category() {
    let result = query(&sample_dataset(), DateRange::dashboard_default());

    let series: Vec<(&str, u64)> = result
        .quantity_by_category
        .iter()
        .map(|c| (c.category.as_str(), c.quantity))
        .collect();
    assert_eq!(
        series,
        [("Furniture", 6), ("Office Supplies", 5), ("Technology", 2)]
    );
}

#[test]
fn single_day_range() {
    let result = query(
        &sample_dataset(),
        DateRange::new(date(2015, 12, 5), date(2015, 12, 5)),
    );

    assert_eq!(result.matched_orders, 2);
    assert_eq!(result.total_customer, 2);
    assert_eq!(result.total_quantity, 5);
}

#[test]
fn repeated_customers_count_once() {
    let dataset = OrdersDataset::from_records(vec![
        order(date(2015, 12, 2), "A", "X", 1, dec!(1), dec!(0)),
        order(date(2015, 12, 3), "A", "X", 1, dec!(1), dec!(0)),
        order(date(2015, 12, 4), "B", "X", 1, dec!(1), dec!(0)),
    ]);

    let result = query(&dataset, DateRange::dashboard_default());
    assert_eq!(result.total_customer, 2);
}

// ---------------------------------------------------------------------------
// range properties
// ---------------------------------------------------------------------------

#[test]
fn reversed_range_is_empty_not_an_error() {
    let result = query(
        &sample_dataset(),
        DateRange::new(date(2015, 12, 31), date(2015, 12, 1)),
    );

    assert!(result.is_empty());
    assert_eq!(result.total_sales, Decimal::ZERO);
    assert_eq!(result.total_profit, Decimal::ZERO);
    assert_eq!(result.total_quantity, 0);
    assert_eq!(result.total_customer, 0);
    assert!(result.sales_by_date.is_empty());
    assert!(result.quantity_by_category.is_empty());
}

#[test]
fn range_outside_data_is_empty() {
    let result = query(
        &sample_dataset(),
        DateRange::new(date(2020, 1, 1), date(2020, 12, 31)),
    );
    assert!(result.is_empty());
    assert!(result.sales_by_date.is_empty());
}

#[test]
fn full_range_matches_direct_totals() {
    let dataset = sample_dataset();
    let (first, last) = dataset.date_span().unwrap();
    let result = query(&dataset, DateRange::new(first, last));

    let records = dataset.records();
    let sales: Decimal = records.iter().map(|r| r.sales).sum();
    let profit: Decimal = records.iter().map(|r| r.profit).sum();
    let quantity: u64 = records.iter().map(|r| r.quantity).sum();
    let customers: HashSet<&str> = records.iter().map(|r| r.customer_id.as_str()).collect();

    assert_eq!(result.matched_orders, records.len());
    assert_eq!(result.total_sales, round_whole(sales));
    assert_eq!(result.total_profit, round_whole(profit));
    assert_eq!(result.total_quantity, quantity);
    assert_eq!(result.total_customer, customers.len());
    // 3574.50 rounds down to the even neighbour
    assert_eq!(result.total_sales, dec!(3574));
}

#[test]
fn identical_arguments_give_identical_results() {
    let dataset = sample_dataset();
    let range = DateRange::dashboard_default();
    assert_eq!(query(&dataset, range), query(&dataset, range));
}

#[test]
fn large_dataset_is_deterministic_across_runs() {
    // Enough rows for rayon to split the work several ways
    let categories = ["Furniture", "Office Supplies", "Technology"];
    let records: Vec<OrderRecord> = (0..50_000u32)
        .map(|i| {
            order(
                date(2015, 12, 1 + i % 31),
                &format!("C{}", i % 997),
                categories[(i % 3) as usize],
                u64::from(i % 5),
                Decimal::new(i64::from(i % 1000) * 7 + 5, 2),
                Decimal::new(i64::from(i % 300) - 150, 1),
            )
        })
        .collect();
    let dataset = OrdersDataset::from_records(records);
    let range = DateRange::new(date(2015, 12, 3), date(2015, 12, 27));

    let first = query(&dataset, range);
    for _ in 0..5 {
        assert_eq!(query(&dataset, range), first);
    }
    assert_eq!(first.total_customer, 997);
    assert_eq!(first.sales_by_date.len(), 25);
}

// ---------------------------------------------------------------------------
// recompute with raw bounds
// ---------------------------------------------------------------------------

#[test]
fn recompute_parses_picker_dates() {
    let dataset = sample_dataset();
    let engine = RangeQueryEngine::new(&dataset);

    let result = engine.recompute("2015-12-01", "2015-12-31").unwrap();
    assert_eq!(result, query(&dataset, DateRange::dashboard_default()));
}

#[test]
fn malformed_bound_is_invalid_range() {
    let dataset = sample_dataset();
    let engine = RangeQueryEngine::new(&dataset);

    let err = engine.recompute("2015-12-01", "not-a-date").unwrap_err();
    assert_eq!(
        err,
        QueryError::InvalidRange {
            bound: "end",
            value: "not-a-date".to_string()
        }
    );

    // A failed call leaves later queries unaffected
    let result = engine.recompute("2015-12-01", "2015-12-31").unwrap();
    assert_eq!(result.matched_orders, 5);
}
