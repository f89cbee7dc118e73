use httpmock::Method::GET;

use crate::common;
use alphavantage_rs::{AvError, DownloadBuilder, OutputSize};

#[tokio::test]
async fn download_multi_tickers_happy_path() {
    let server = common::setup_server();

    let m_msft = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY")
            .query_param("symbol", "MSFT")
            .query_param("outputsize", "full");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::daily_response());
    });

    let m_aapl = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY")
            .query_param("symbol", "AAPL")
            .query_param("outputsize", "full");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::daily_response());
    });

    let client = common::client_for(&server);
    let res = DownloadBuilder::new(&client)
        .tickers(["MSFT", "AAPL"])
        .output_size(OutputSize::Full)
        .run()
        .await
        .unwrap();

    m_msft.assert();
    m_aapl.assert();

    assert_eq!(res.results.len(), 2);
    let mut tickers: Vec<&str> = res.results.iter().map(|(t, _)| t.as_str()).collect();
    tickers.sort_unstable();
    assert_eq!(tickers, vec!["AAPL", "MSFT"]);
    for (ticker, history) in &res.results {
        assert_eq!(&history.ticker, ticker);
        assert_eq!(history.bars.len(), 2);
    }
}

#[tokio::test]
async fn failing_ticker_is_dropped_from_the_batch() {
    let server = common::setup_server();

    for sym in ["AAA", "CCC"] {
        server.mock(|when, then| {
            when.method(GET).path("/query").query_param("symbol", sym);
            then.status(200)
                .header("content-type", "application/json")
                .body(common::daily_response());
        });
    }

    // transport-level failure in the middle of the input
    server.mock(|when, then| {
        when.method(GET).path("/query").query_param("symbol", "BBB");
        then.status(500).body("boom");
    });

    let client = common::client_for(&server);
    let res = DownloadBuilder::new(&client)
        .tickers(["AAA", "BBB", "CCC"])
        .run()
        .await
        .unwrap();

    let mut tickers: Vec<&str> = res.results.iter().map(|(t, _)| t.as_str()).collect();
    tickers.sort_unstable();
    assert_eq!(tickers, vec!["AAA", "CCC"]);
}

#[tokio::test]
async fn decode_and_shape_failures_are_also_dropped() {
    let server = common::setup_server();

    server.mock(|when, then| {
        when.method(GET).path("/query").query_param("symbol", "GOOD");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::daily_response());
    });

    // not JSON at all
    server.mock(|when, then| {
        when.method(GET).path("/query").query_param("symbol", "HTML");
        then.status(200)
            .header("content-type", "text/html")
            .body("<html></html>");
    });

    // JSON, but no series object (the API's rate-limit note shape)
    server.mock(|when, then| {
        when.method(GET).path("/query").query_param("symbol", "NOTE");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"Note": "Thank you for using Alpha Vantage!"}"#);
    });

    let client = common::client_for(&server);
    let res = DownloadBuilder::new(&client)
        .tickers(["HTML", "GOOD", "NOTE"])
        .run()
        .await
        .unwrap();

    assert_eq!(res.results.len(), 1);
    assert_eq!(res.results[0].0, "GOOD");
}

#[tokio::test]
async fn parse_errors_fail_the_whole_batch() {
    let server = common::setup_server();

    server.mock(|when, then| {
        when.method(GET).path("/query").query_param("symbol", "GOOD");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::daily_response());
    });

    let broken = common::daily_response().replace("18363918", "eighteen million");
    server.mock(|when, then| {
        when.method(GET).path("/query").query_param("symbol", "BAD");
        then.status(200)
            .header("content-type", "application/json")
            .body(broken);
    });

    let client = common::client_for(&server);
    let err = DownloadBuilder::new(&client)
        .tickers(["GOOD", "BAD"])
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, AvError::Parse(_)));
}
