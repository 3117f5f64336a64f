use crate::error::invalid_input;
use anyhow::Result;
use chrono::{TimeZone, Utc};
use dialkeep_core::domain::ContactId;
use std::str::FromStr;

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

pub fn parse_contact_id(value: &str) -> Result<ContactId> {
    ContactId::from_str(value.trim())
        .map_err(|_| invalid_input(format!("invalid contact id: {value}")))
}

pub fn format_timestamp(ts: i64) -> String {
    match Utc.timestamp_opt(ts, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => ts.to_string(),
    }
}
