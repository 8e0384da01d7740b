//! Shared fixtures for the sales dashboard integration tests.
//!
//! `write_orders()` writes a CSV into a fresh temp directory; the caller keeps
//! the returned `TempDir` alive for as long as the file is needed.

#![allow(dead_code)]

use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const HEADER: &str =
    "Order ID,Order Date,Ship Date,Customer ID,Region,Category,Quantity,Sales,Profit";

/// Seven orders around December 2015, money fields formatted as exported.
///
/// Rows 3 and 4 sit exactly on the December boundaries, rows 5 and 6 just
/// outside them.
pub const SAMPLE_ROWS: [&str; 7] = [
    r#"CA-1,05/12/2015,09/12/2015,C1,West,Furniture,3,$100.00,$20.00"#,
    r#"CA-2,20/12/2015,22/12/2015,C2,East,Technology,2,$50.00,-$5.00"#,
    r#"CA-3,01/12/2015,03/12/2015,C1,West,Office Supplies,5,"$1,234.50",$300.25"#,
    r#"CA-4,31/12/2015,04/01/2016,C3,South,Furniture,1,$10.50,$0.50"#,
    r#"CA-5,30/11/2015,02/12/2015,C4,East,Technology,7,"$2,000.00",$400.00"#,
    r#"CA-6,01/01/2016,05/01/2016,C2,East,Office Supplies,4,$80.00,-$12.00"#,
    r#"CA-7,05/12/2015,07/12/2015,C2,Central,Furniture,2,$99.50,$9.50"#,
];

/// Write `header` and `rows` to `orders.csv` in a new temp directory.
pub fn write_csv(header: Option<&str>, rows: &[&str]) -> (PathBuf, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.csv");

    let mut body = String::new();
    if let Some(header) = header {
        body.push_str(header);
        body.push('\n');
    }
    for row in rows {
        body.push_str(row);
        body.push('\n');
    }
    fs::write(&path, body).unwrap();

    (path, dir)
}

pub fn write_orders(rows: &[&str]) -> (PathBuf, TempDir) {
    write_csv(Some(HEADER), rows)
}

pub fn sample_orders() -> (PathBuf, TempDir) {
    write_orders(&SAMPLE_ROWS)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
