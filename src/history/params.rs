//! Reference tables: periods, output sizes, intraday intervals, and the
//! function/series-key composition rules of the query API.

/// Sampling period for non-intraday series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub(crate) fn code(self) -> &'static str {
        match self {
            Period::Daily => "DAILY",
            Period::Weekly => "WEEKLY",
            Period::Monthly => "MONTHLY",
        }
    }
}

/// Opaque `outputsize` parameter; the API decides what each means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputSize {
    #[default]
    Compact,
    Full,
}

impl OutputSize {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            OutputSize::Compact => "compact",
            OutputSize::Full => "full",
        }
    }
}

/// Intraday sampling interval. Only the intervals the API defines series
/// keys for are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntradayInterval {
    #[default]
    Min1,
    Min5,
}

impl IntradayInterval {
    pub(crate) fn minutes(self) -> u32 {
        match self {
            IntradayInterval::Min1 => 1,
            IntradayInterval::Min5 => 5,
        }
    }

    /// The wire form of the `interval` query parameter, e.g. `1min`.
    pub(crate) fn as_param(self) -> String {
        format!("{}min", self.minutes())
    }
}

/// Compose the `function` query parameter: `TIME_SERIES_<PERIOD>` plus an
/// `_ADJUSTED` suffix for split/dividend-adjusted series.
pub(crate) fn time_series_function(period: Period, adjusted: bool) -> String {
    let mut f = format!("TIME_SERIES_{}", period.code());
    if adjusted {
        f.push_str("_ADJUSTED");
    }
    f
}

/// The key of the time-series object in a plain (unadjusted) response.
pub(crate) fn series_key(period: Period) -> &'static str {
    match period {
        Period::Daily => "Time Series (Daily)",
        Period::Weekly => "Weekly Time Series",
        Period::Monthly => "Monthly Time Series",
    }
}

/// The key of the time-series object in an adjusted response. Daily
/// adjusted responses reuse the plain daily key; weekly/monthly get an
/// "Adjusted" variant.
pub(crate) fn adjusted_series_key(period: Period) -> &'static str {
    match period {
        Period::Daily => "Time Series (Daily)",
        Period::Weekly => "Weekly Adjusted Time Series",
        Period::Monthly => "Monthly Adjusted Time Series",
    }
}

/// The key of the time-series object in an intraday response, e.g.
/// `Time Series (1min)`.
pub(crate) fn intraday_series_key(interval: IntradayInterval) -> String {
    format!("Time Series ({})", interval.as_param())
}
