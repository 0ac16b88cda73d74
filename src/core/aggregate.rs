use crate::domain::model::{
    CarrierMinimum, FlightTimesByCarrier, TicketReport, TransformResult, DESTINATION, ORIGIN,
};

pub fn minimum_per_carrier(flight_times: &FlightTimesByCarrier) -> Vec<CarrierMinimum> {
    flight_times
        .iter()
        .filter_map(|(carrier, durations)| {
            durations.iter().min().map(|&minutes| CarrierMinimum {
                carrier: carrier.to_string(),
                minutes,
            })
        })
        .collect()
}

/// Arithmetic mean, `0.0` for an empty list.
pub fn average(prices: &[i64]) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }
    let sum: i128 = prices.iter().map(|&price| price as i128).sum();
    sum as f64 / prices.len() as f64
}

/// Median of a sorted copy; the two middle values are averaged in floating point.
pub fn median(prices: &[i64]) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }

    let mut sorted = prices.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

pub fn summarize(result: &TransformResult) -> TicketReport {
    let prices = result.prices.as_slice();
    let average_price = average(prices);
    let median_price = median(prices);

    TicketReport {
        origin: ORIGIN.to_string(),
        destination: DESTINATION.to_string(),
        carriers: minimum_per_carrier(&result.flight_times),
        average_price,
        median_price,
        price_difference: average_price - median_price,
        entries_seen: result.entries_seen,
        entries_matched: result.entries_matched,
    }
}
