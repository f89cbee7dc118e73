#![allow(dead_code)]

use httpmock::MockServer;
use url::Url;

use alphavantage_rs::AvClient;

pub const API_KEY: &str = "my_fake_key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client pointed at the mock server's `/query` endpoint.
pub fn client_for(server: &MockServer) -> AvClient {
    AvClient::builder()
        .api_key(API_KEY)
        .base_url(Url::parse(&format!("{}/query", server.base_url())).unwrap())
        .build()
        .unwrap()
}

/// Daily response for MSFT: two dated entries, date-only refresh stamp.
pub fn daily_response() -> String {
    serde_json::json!({
        "Meta Data": {
            "1. Information": "Daily Prices (open, high, low, close) and Volumes",
            "2. Symbol": "MSFT",
            "3. Last Refreshed": "2018-05-25",
            "4. Output Size": "Full size",
            "5. Time Zone": "US/Eastern"
        },
        "Time Series (Daily)": {
            "2018-05-25": {
                "1. open": "98.3000",
                "2. high": "98.9800",
                "3. low": "97.8600",
                "4. close": "98.3600",
                "5. volume": "18363918"
            },
            "2018-05-24": {
                "1. open": "98.7250",
                "2. high": "98.9400",
                "3. low": "96.8100",
                "4. close": "98.3100",
                "5. volume": "26649287"
            }
        }
    })
    .to_string()
}

/// Daily adjusted response for MSFT: three entries with the adjusted trio.
pub fn adjusted_response() -> String {
    serde_json::json!({
        "Meta Data": {
            "1. Information": "Daily Time Series with Splits and Dividend Events",
            "2. Symbol": "MSFT",
            "3. Last Refreshed": "2018-05-25",
            "4. Output Size": "Full size",
            "5. Time Zone": "US/Eastern"
        },
        "Time Series (Daily)": {
            "2018-05-25": {
                "1. open": "98.3000",
                "2. high": "98.9800",
                "3. low": "97.8600",
                "4. close": "98.3600",
                "5. adjusted close": "98.3600",
                "6. volume": "17942632",
                "7. dividend amount": "0.0000",
                "8. split coefficient": "1.0000"
            },
            "2018-05-24": {
                "1. open": "98.7250",
                "2. high": "98.9400",
                "3. low": "96.8100",
                "4. close": "98.3100",
                "5. adjusted close": "98.3100",
                "6. volume": "26649287",
                "7. dividend amount": "0.0000",
                "8. split coefficient": "1.0000"
            },
            "2018-05-23": {
                "1. open": "96.7100",
                "2. high": "98.7300",
                "3. low": "96.3200",
                "4. close": "98.6600",
                "5. adjusted close": "98.6600",
                "6. volume": "21251222",
                "7. dividend amount": "0.0000",
                "8. split coefficient": "1.0000"
            }
        }
    })
    .to_string()
}

/// Intraday 1min response for MSFT: three timestamped entries, US/Eastern
/// summer time (UTC-4).
pub fn intraday_response() -> String {
    serde_json::json!({
        "Meta Data": {
            "1. Information": "Intraday (1min) prices and volumes",
            "2. Symbol": "MSFT",
            "3. Last Refreshed": "2018-05-30 16:00:00",
            "4. Interval": "1min",
            "5. Output Size": "Compact",
            "6. Time Zone": "US/Eastern"
        },
        "Time Series (1min)": {
            "2018-05-30 16:00:00": {
                "1. open": "99.0000",
                "2. high": "99.0500",
                "3. low": "98.9100",
                "4. close": "98.9500",
                "5. volume": "2233252"
            },
            "2018-05-30 15:59:00": {
                "1. open": "99.0350",
                "2. high": "99.0500",
                "3. low": "99.0000",
                "4. close": "99.0000",
                "5. volume": "156349"
            },
            "2018-05-30 15:58:00": {
                "1. open": "98.9900",
                "2. high": "99.0600",
                "3. low": "98.9900",
                "4. close": "99.0300",
                "5. volume": "142621"
            }
        }
    })
    .to_string()
}

/// A nominally daily response whose refresh stamp is a full datetime:
/// the known quirk where intraday data leaks into a daily series.
pub fn daily_response_with_intraday_leak() -> String {
    serde_json::json!({
        "Meta Data": {
            "1. Information": "Daily Prices (open, high, low, close) and Volumes",
            "2. Symbol": "MSFT",
            "3. Last Refreshed": "2018-05-25 15:55:00",
            "4. Output Size": "Full size",
            "5. Time Zone": "US/Eastern"
        },
        "Time Series (Daily)": {
            "2018-05-25": {
                "1. open": "98.3000",
                "2. high": "98.9800",
                "3. low": "97.8600",
                "4. close": "98.3600",
                "5. volume": "18363918"
            },
            "2018-05-24": {
                "1. open": "98.7250",
                "2. high": "98.9400",
                "3. low": "96.8100",
                "4. close": "98.3100",
                "5. volume": "26649287"
            }
        }
    })
    .to_string()
}
