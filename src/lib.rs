//! alphavantage-rs: async client for the Alpha Vantage market-data API.
//!
//! Fetches daily/weekly/monthly/intraday price history (plain or
//! split/dividend-adjusted), normalizes the API's stringly-typed responses
//! into typed bars with timezone-aware timestamps, downloads many tickers
//! concurrently, and maps exchange codes to RIC ticker suffixes.

pub mod core;
pub mod dates;
pub mod download;
pub mod history;
pub mod symbology;

pub use crate::core::{AvClient, AvClientBuilder, AvError};
pub use dates::TzCache;
pub use download::{DownloadBuilder, DownloadResult};
pub use history::{
    Bar, HistoryBuilder, IntradayInterval, OutputSize, Period, PriceHistory, SeriesTimestamp,
    SeriesVariant, filter_dividends, filter_splits,
};
pub use symbology::format_ric_ticker;
