//! Raw response envelope: a `"Meta Data"` object plus one time-series
//! object whose key depends on period/adjustment/interval. Metadata keys
//! carry their own ordinals (`"3. Last Refreshed"`), so they are located
//! by suffix rather than exact match.

use std::collections::BTreeMap;

use crate::core::AvError;

pub(crate) const META_KEY: &str = "Meta Data";

const REFRESH_SUFFIX: &str = "Last Refreshed";
const TIMEZONE_SUFFIX: &str = "Time Zone";

/// The two objects of interest in a time-series response, still stringly
/// typed; the transform in `history::mod` does the renaming and parsing.
pub(crate) struct RawHistory {
    meta: BTreeMap<String, String>,
    pub(crate) series: BTreeMap<String, BTreeMap<String, String>>,
}

impl RawHistory {
    pub(crate) fn from_value(
        value: &serde_json::Value,
        series_key: &str,
    ) -> Result<Self, AvError> {
        let obj = value
            .as_object()
            .ok_or_else(|| AvError::Data("response is not a JSON object".into()))?;

        let meta = obj
            .get(META_KEY)
            .ok_or_else(|| AvError::Data(format!("missing {META_KEY:?}")))?;
        let meta: BTreeMap<String, String> = serde_json::from_value(meta.clone())?;

        let series = obj
            .get(series_key)
            .ok_or_else(|| AvError::Data(format!("missing series key {series_key:?}")))?;
        let series: BTreeMap<String, BTreeMap<String, String>> =
            serde_json::from_value(series.clone())?;

        Ok(RawHistory { meta, series })
    }

    pub(crate) fn last_refreshed(&self) -> Result<&str, AvError> {
        self.meta_by_suffix(REFRESH_SUFFIX)
    }

    pub(crate) fn timezone(&self) -> Result<&str, AvError> {
        self.meta_by_suffix(TIMEZONE_SUFFIX)
    }

    fn meta_by_suffix(&self, suffix: &str) -> Result<&str, AvError> {
        self.meta
            .iter()
            .find(|(k, _)| k.ends_with(suffix))
            .map(|(_, v)| v.as_str())
            .ok_or_else(|| AvError::Data(format!("no metadata key ending in {suffix:?}")))
    }
}
