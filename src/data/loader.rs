//! CSV Data Loader Module
//! Reads the orders CSV once with Polars and hands it to the normalizer.

use super::normalizer::{FormatError, OrderNormalizer, REQUIRED_COLUMNS};
use super::record::OrdersDataset;
use polars::prelude::*;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to open orders file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Malformed orders file: {0}")]
    Format(#[from] FormatError),
}

/// Load and normalize the orders file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<OrdersDataset, LoaderError> {
    DataLoader::load_csv(path)
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Read the CSV with every column typed as string, then normalize it.
    ///
    /// Currency and date cells are left to the normalizer so that a bad value
    /// surfaces as a `FormatError` instead of a silently nulled cell.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<OrdersDataset, LoaderError> {
        let path = path.as_ref();

        // Surface a missing, unreadable or non-file path as an I/O failure, not a CSV one
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(LoaderError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            )));
        }
        File::open(path)?;

        // No header row at all
        if metadata.len() == 0 {
            return Err(FormatError::MissingColumn(REQUIRED_COLUMNS[0].to_string()).into());
        }

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        let dataset = OrderNormalizer::normalize(&df)?.with_source(path);

        match dataset.date_span() {
            Some((first, last)) => info!(
                path = %path.display(),
                rows = dataset.len(),
                %first,
                %last,
                "loaded orders"
            ),
            None => info!(path = %path.display(), rows = 0, "loaded empty orders file"),
        }

        Ok(dataset)
    }
}
