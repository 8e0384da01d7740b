//! Data module - CSV loading and normalization

mod loader;
mod normalizer;
mod record;

pub use loader::{load, DataLoader, LoaderError};
pub use normalizer::{
    parse_currency, parse_quantity, parse_source_date, FormatError, OrderNormalizer,
    MAX_AMOUNT_UNITS, REQUIRED_COLUMNS, SOURCE_DATE_FORMAT,
};
pub use record::{OrderRecord, OrdersDataset};
