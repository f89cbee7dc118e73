//! Batch fetch: the same configured series for many tickers at once.

use futures::StreamExt;

use crate::core::{AvClient, AvError};
use crate::history::{HistoryBuilder, IntradayInterval, OutputSize, Period, PriceHistory};

/// How many requests are in flight at once.
const WORKERS: usize = 4;

/// A builder for fetching the same price-history configuration for multiple
/// tickers concurrently.
///
/// The configuration methods mirror those on [`HistoryBuilder`]; the fan-out
/// keeps at most four requests in flight and yields results in completion
/// order, not input order.
pub struct DownloadBuilder {
    history: HistoryBuilder,
    tickers: Vec<String>,
}

/// The outcome of a batch download: `(ticker, history)` pairs in completion
/// order. Tickers whose fetch failed with a transport, decode, or shape
/// error are absent; re-sort by ticker if input order matters.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadResult {
    pub results: Vec<(String, PriceHistory)>,
}

impl DownloadBuilder {
    /// Creates a new `DownloadBuilder` with the default history
    /// configuration (plain daily, compact).
    #[must_use]
    pub fn new(client: &AvClient) -> Self {
        Self {
            history: HistoryBuilder::new(client),
            tickers: Vec::new(),
        }
    }

    /// Replaces the current list of tickers with a new list.
    #[must_use]
    pub fn tickers<I, S>(mut self, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tickers = tickers.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a single ticker to the list.
    #[must_use]
    pub fn add_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.tickers.push(ticker.into());
        self
    }

    /// Selects the sampling period. See [`HistoryBuilder::period`].
    #[must_use]
    pub fn period(mut self, period: Period) -> Self {
        self.history = self.history.period(period);
        self
    }

    /// Requests the adjusted series. See [`HistoryBuilder::adjusted`].
    #[must_use]
    pub fn adjusted(mut self, yes: bool) -> Self {
        self.history = self.history.adjusted(yes);
        self
    }

    /// Requests the intraday series. See [`HistoryBuilder::intraday`].
    #[must_use]
    pub fn intraday(mut self, interval: IntradayInterval) -> Self {
        self.history = self.history.intraday(interval);
        self
    }

    /// Controls intraday UTC conversion. See [`HistoryBuilder::convert_to_utc`].
    #[must_use]
    pub fn convert_to_utc(mut self, yes: bool) -> Self {
        self.history = self.history.convert_to_utc(yes);
        self
    }

    /// Sets the `outputsize` parameter. See [`HistoryBuilder::output_size`].
    #[must_use]
    pub fn output_size(mut self, size: OutputSize) -> Self {
        self.history = self.history.output_size(size);
        self
    }

    /// Fetches every ticker, at most four requests in flight at a time.
    ///
    /// A ticker whose fetch fails with a transport, decode, or shape error
    /// is dropped from the result without aborting the batch. Timestamp and
    /// numeric parse failures abort the whole run: they indicate the API
    /// schema drifted, which should fail loudly rather than thin the output.
    ///
    /// # Errors
    ///
    /// Returns the first parse error encountered, if any.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(tickers = self.tickers.len()))
    )]
    pub async fn run(self) -> Result<DownloadResult, AvError> {
        let history = self.history;

        let mut fetches = futures::stream::iter(self.tickers.into_iter().map(|ticker| {
            let history = history.clone();
            async move {
                let result = history.fetch(&ticker).await;
                (ticker, result)
            }
        }))
        .buffer_unordered(WORKERS);

        let mut results = Vec::new();
        while let Some((ticker, result)) = fetches.next().await {
            match result {
                Ok(history) => results.push((ticker, history)),
                Err(e) if e.is_per_ticker() => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(ticker = %ticker, error = %e, "dropping ticker from batch");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(DownloadResult { results })
    }
}
