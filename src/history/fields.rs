//! Canonical field names, their numbered wire spellings, and the
//! string-to-number parsers applied to every time-series value.
//!
//! The API names record fields with a 1-indexed ordinal and a space-joined
//! label (`"1. open"`, `"8. split coefficient"`); canonical names are the
//! lowercase underscore forms. Renaming is table-driven from the variant's
//! declared field list.

use std::collections::BTreeMap;

use crate::core::AvError;

pub(crate) const OPEN: &str = "open";
pub(crate) const HIGH: &str = "high";
pub(crate) const LOW: &str = "low";
pub(crate) const CLOSE: &str = "close";
pub(crate) const VOLUME: &str = "volume";
pub(crate) const ADJUSTED_CLOSE: &str = "adjusted_close";
pub(crate) const DIVIDEND: &str = "dividend_amount";
pub(crate) const SPLIT_COEFFICIENT: &str = "split_coefficient";

/// How a field's string value parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    /// Prices, ratios, dividend amounts.
    Float,
    /// Share counts.
    Volume,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldSpec {
    pub(crate) name: &'static str,
    pub(crate) kind: FieldKind,
}

const fn float(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Float,
    }
}

/// Field order of plain and intraday series responses.
pub(crate) const PLAIN_FIELDS: &[FieldSpec] = &[
    float(OPEN),
    float(HIGH),
    float(LOW),
    float(CLOSE),
    FieldSpec {
        name: VOLUME,
        kind: FieldKind::Volume,
    },
];

/// Field order of adjusted series responses.
pub(crate) const ADJUSTED_FIELDS: &[FieldSpec] = &[
    float(OPEN),
    float(HIGH),
    float(LOW),
    float(CLOSE),
    float(ADJUSTED_CLOSE),
    FieldSpec {
        name: VOLUME,
        kind: FieldKind::Volume,
    },
    float(DIVIDEND),
    float(SPLIT_COEFFICIENT),
];

/// Build the numbered wire names for a canonical field list:
/// `["alpha", "beta_gamma"]` -> `["1. alpha", "2. beta gamma"]`.
pub(crate) fn wire_names<'a, I>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    fields
        .into_iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name.replace('_', " ")))
        .collect()
}

/// A parsed field value; variant matches the field's [`FieldKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum FieldValue {
    Float(f64),
    Volume(u64),
}

/// Rename and parse one raw record against a declared field list,
/// yielding `(canonical name, typed value)` pairs in declared order.
///
/// Every declared field must be present under its wire name and parse to
/// its numeric type; anything else is an error, so no value survives as a
/// string.
pub(crate) fn parse_record(
    raw: &BTreeMap<String, String>,
    fields: &[FieldSpec],
) -> Result<Vec<(&'static str, FieldValue)>, AvError> {
    let keys = wire_names(fields.iter().map(|f| f.name));

    fields
        .iter()
        .zip(&keys)
        .map(|(spec, key)| {
            let s = raw
                .get(key)
                .ok_or_else(|| AvError::Data(format!("record missing field {key:?}")))?;
            let value = match spec.kind {
                FieldKind::Float => FieldValue::Float(s.parse::<f64>().map_err(|e| {
                    AvError::Parse(format!("bad {} value {s:?}: {e}", spec.name))
                })?),
                FieldKind::Volume => FieldValue::Volume(s.parse::<u64>().map_err(|e| {
                    AvError::Parse(format!("bad {} value {s:?}: {e}", spec.name))
                })?),
            };
            Ok((spec.name, value))
        })
        .collect()
}
