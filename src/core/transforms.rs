// Ready-made transforms for assert_transformed_and_copied.
//
// Timestamps
// - Events carry RFC 3339 strings; entities hold chrono UTC times.

use anyhow::Context;
use chrono::{DateTime, Utc};

pub fn time(value: String) -> anyhow::Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(&value)
        .with_context(|| format!("`{value}` is not an RFC 3339 timestamp"))?;
    Ok(parsed.with_timezone(&Utc))
}

pub fn epoch_millis(value: i64) -> anyhow::Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value)
        .with_context(|| format!("{value} is out of range for epoch milliseconds"))
}

pub fn identity<T>(value: T) -> anyhow::Result<T> {
    Ok(value)
}
