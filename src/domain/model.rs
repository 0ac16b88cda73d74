use crate::utils::error::{Result, TicketError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Only tickets on this route contribute to the report.
pub const ORIGIN: &str = "VVO";
pub const DESTINATION: &str = "TLV";

/// A raw ticket entry as found in the input document.
#[derive(Debug, Clone)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecord {
    pub origin: String,
    pub destination: String,
    pub carrier: String,
    pub departure_date: String,
    pub departure_time: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub price: i64,
}

impl TicketRecord {
    /// Strict field access: every entry must carry all eight fields with the right JSON type.
    pub fn from_record(index: usize, record: &Record) -> Result<Self> {
        Ok(Self {
            origin: string_field(index, record, "origin")?,
            destination: string_field(index, record, "destination")?,
            carrier: string_field(index, record, "carrier")?,
            departure_date: string_field(index, record, "departure_date")?,
            departure_time: string_field(index, record, "departure_time")?,
            arrival_date: string_field(index, record, "arrival_date")?,
            arrival_time: string_field(index, record, "arrival_time")?,
            price: integer_field(index, record, "price")?,
        })
    }

    pub fn is_on_route(&self) -> bool {
        self.origin == ORIGIN && self.destination == DESTINATION
    }

    pub fn departure(&self) -> String {
        format!("{} {}", self.departure_date, self.departure_time)
    }

    pub fn arrival(&self) -> String {
        format!("{} {}", self.arrival_date, self.arrival_time)
    }
}

fn field<'a>(index: usize, record: &'a Record, name: &str) -> Result<&'a serde_json::Value> {
    record
        .data
        .get(name)
        .ok_or_else(|| TicketError::DataFieldError {
            index,
            field: name.to_string(),
            reason: "is missing".to_string(),
        })
}

fn string_field(index: usize, record: &Record, name: &str) -> Result<String> {
    field(index, record, name)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| TicketError::DataFieldError {
            index,
            field: name.to_string(),
            reason: "must be a string".to_string(),
        })
}

fn integer_field(index: usize, record: &Record, name: &str) -> Result<i64> {
    field(index, record, name)?
        .as_i64()
        .ok_or_else(|| TicketError::DataFieldError {
            index,
            field: name.to_string(),
            reason: "must be an integer".to_string(),
        })
}

/// Carrier -> flight durations in minutes, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightTimesByCarrier {
    carriers: Vec<(String, Vec<i64>)>,
    positions: HashMap<String, usize>,
}

impl FlightTimesByCarrier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, carrier: &str, minutes: i64) {
        match self.positions.get(carrier) {
            Some(&position) => self.carriers[position].1.push(minutes),
            None => {
                self.positions
                    .insert(carrier.to_string(), self.carriers.len());
                self.carriers.push((carrier.to_string(), vec![minutes]));
            }
        }
    }

    pub fn durations(&self, carrier: &str) -> Option<&[i64]> {
        self.positions
            .get(carrier)
            .map(|&position| self.carriers[position].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[i64])> {
        self.carriers
            .iter()
            .map(|(carrier, durations)| (carrier.as_str(), durations.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceList {
    prices: Vec<i64>,
}

impl PriceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, price: i64) {
        self.prices.push(price);
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl From<Vec<i64>> for PriceList {
    fn from(prices: Vec<i64>) -> Self {
        Self { prices }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformResult {
    pub flight_times: FlightTimesByCarrier,
    pub prices: PriceList,
    pub entries_seen: usize,
    pub entries_matched: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierMinimum {
    pub carrier: String,
    pub minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketReport {
    pub origin: String,
    pub destination: String,
    pub carriers: Vec<CarrierMinimum>,
    pub average_price: f64,
    pub median_price: f64,
    pub price_difference: f64,
    pub entries_seen: usize,
    pub entries_matched: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];
}

impl FromStr for ReportFormat {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(TicketError::InvalidConfigValueError {
                field: "report.format".to_string(),
                value: other.to_string(),
                reason: format!("Valid values: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}
