use chrono::{DateTime, Utc};

use crate::core::{AvClient, AvError};

/// Issue a GET against the client's query endpoint and decode the body as
/// JSON, returning it together with the wall-clock UTC instant captured
/// right after the request completed.
///
/// No retry, no backoff: transport failures and non-success statuses
/// propagate to the caller untouched.
pub(crate) async fn fetch_json(
    client: &AvClient,
    params: &[(&str, String)],
) -> Result<(serde_json::Value, DateTime<Utc>), AvError> {
    let mut url = client.base_url().clone();
    {
        let mut qp = url.query_pairs_mut();
        for (k, v) in params {
            qp.append_pair(k, v);
        }
    }

    let resp = client.http().get(url.clone()).send().await?;
    let retrieved_at = Utc::now();

    if !resp.status().is_success() {
        return Err(AvError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = resp.text().await?;
    let value: serde_json::Value = serde_json::from_str(&body)?;

    Ok((value, retrieved_at))
}
