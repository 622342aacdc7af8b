//! Conversion of market-data provider payloads into chart series.
//!
//! Only payload decoding lives here; fetching is left to the host.

pub mod alpha_vantage;

pub use alpha_vantage::{IntradayInterval, bars_to_points, parse_intraday_json, parse_intraday_value};
