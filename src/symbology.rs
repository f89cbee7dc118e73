//! Factset exchange codes to Reuters RIC ticker suffixes.
//!
//! Reference material:
//! - Yahoo exchange list with RIC suffixes: <https://help.yahoo.com/kb/SLN2310.html>
//! - Reuters company lookup: <https://www.reuters.com/finance/stocks/lookup>

use crate::core::AvError;

/// RIC suffix for a Factset exchange code. `Some(None)` means the exchange
/// is known and its tickers carry no suffix (the US venues).
fn ric_suffix(exchange_code: &str) -> Option<Option<&'static str>> {
    let suffix = match exchange_code {
        "AMS" => Some("AS"),
        "ASX" => Some("AX"),
        "ATH" => Some("AT"),
        "BAR" => Some("BC"),
        "BER" => Some("BE"),
        "BKK" => Some("BK"),
        "BOM" => Some("BO"),
        "BRU" => Some("BR"),
        "BSP" => Some("SA"),
        "BUE" => Some("BA"),
        "CAI" => Some("CA"),
        "CAR" => Some("CR"),
        "CSE" => Some("CO"),
        "DSMD" => Some("QA"),
        "DUB" => Some("IR"),
        "DUS" => Some("DU"),
        "ETR" => Some("DE"),
        "FRA" => Some("F"),
        "HAM" => Some("HM"),
        "HEL" => Some("HE"),
        "HKG" => Some("HK"),
        "ICE" => Some("IC"),
        "IST" => Some("IS"),
        "JKT" => Some("JK"),
        "JSE" => Some("JO"),
        "KLS" => Some("KL"),
        "KRX" => Some("KS"),
        "LIS" => Some("LS"),
        "LIT" => Some("VS"),
        "LON" => Some("L"),
        "MAD" => Some("MA"),
        "MEX" => Some("MX"),
        "MIC" => Some("ME"),
        "MIL" => Some("MI"),
        "MUN" => Some("MU"),
        "NAS" => None,
        "NSE" => Some("NS"),
        "NYS" => None,
        "NZE" => Some("NZ"),
        "OME" => Some("ST"),
        "OSL" => Some("OL"),
        "OTC" => None,
        "PAR" => Some("PA"),
        "PRA" => Some("PR"),
        "RIS" => Some("RG"),
        "SAU" => Some("SAU"),
        "SES" => Some("SI"),
        "SGO" => Some("SN"),
        "SHE" => Some("SZ"),
        "SHG" => Some("SS"),
        "STU" => Some("SG"),
        "SWX" => Some("SW"),
        "TAE" => Some("TA"),
        "TAI" => Some("TW"),
        "TAL" => Some("TL"),
        "TKS" => Some("T"),
        "TSE" => Some("TO"),
        "TSX" => Some("V"),
        "WBO" => Some("VI"),
        _ => return None,
    };
    Some(suffix)
}

/// Format a RIC-style ticker from a Factset exchange code: `VOD` on `LON`
/// becomes `VOD.L`, while suffix-less venues (`NAS`, `NYS`, `OTC`) pass the
/// ticker through unchanged.
///
/// # Errors
///
/// Returns [`AvError::UnknownExchange`] for a code with no table entry.
pub fn format_ric_ticker(ticker: &str, exchange_code: &str) -> Result<String, AvError> {
    let suffix = ric_suffix(exchange_code)
        .ok_or_else(|| AvError::UnknownExchange(exchange_code.to_string()))?;

    Ok(match suffix {
        Some(s) => format!("{ticker}.{s}"),
        None => ticker.to_string(),
    })
}
