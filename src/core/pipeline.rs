use crate::core::{
    aggregate, flight_time, loader, ConfigProvider, Pipeline, Record, Storage, TransformResult,
};
use crate::domain::model::{FlightTimesByCarrier, PriceList, TicketRecord, TicketReport};
use crate::utils::error::Result;

pub struct TicketPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> TicketPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for TicketPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Record>> {
        let path = self.config.input_path();
        tracing::debug!("Reading tickets from: {}", path);

        let bytes = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes", bytes.len());

        loader::parse_document(&bytes)
    }

    fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let mut flight_times = FlightTimesByCarrier::new();
        let mut prices = PriceList::new();
        let mut entries_matched = 0;

        for (index, record) in data.iter().enumerate() {
            let ticket = TicketRecord::from_record(index, record)?;
            if !ticket.is_on_route() {
                continue;
            }

            let minutes = flight_time::ticket_flight_minutes(&ticket)?;
            tracing::debug!(
                "Ticket #{}: carrier {} flies {} minutes for {}",
                index,
                ticket.carrier,
                minutes,
                ticket.price
            );

            flight_times.record(&ticket.carrier, minutes);
            prices.push(ticket.price);
            entries_matched += 1;
        }

        Ok(TransformResult {
            flight_times,
            prices,
            entries_seen: data.len(),
            entries_matched,
        })
    }

    fn load(&self, result: TransformResult) -> Result<TicketReport> {
        if result.entries_matched == 0 {
            tracing::info!("No tickets matched the route; prices default to 0");
        }
        Ok(aggregate::summarize(&result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ReportFormat;
    use crate::utils::error::TicketError;
    use serde_json::json;
    use std::collections::HashMap;

    struct MockStorage {
        files: HashMap<String, Vec<u8>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: HashMap::new(),
            }
        }

        fn with_file(mut self, path: &str, data: &[u8]) -> Self {
            self.files.insert(path.to_string(), data.to_vec());
            self
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.get(path).cloned().ok_or_else(|| {
                TicketError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }
    }

    struct MockConfig {
        input_path: String,
    }

    impl MockConfig {
        fn new(input_path: &str) -> Self {
            Self {
                input_path: input_path.to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            &self.input_path
        }

        fn report_format(&self) -> ReportFormat {
            ReportFormat::Text
        }

        fn monitoring_enabled(&self) -> bool {
            false
        }
    }

    fn ticket(
        origin: &str,
        destination: &str,
        carrier: &str,
        departure: &str,
        arrival: &str,
        price: i64,
    ) -> Record {
        let (departure_date, departure_time) = departure.split_once(' ').unwrap();
        let (arrival_date, arrival_time) = arrival.split_once(' ').unwrap();
        let value = json!({
            "origin": origin,
            "destination": destination,
            "carrier": carrier,
            "departure_date": departure_date,
            "departure_time": departure_time,
            "arrival_date": arrival_date,
            "arrival_time": arrival_time,
            "price": price
        });
        let data = value
            .as_object()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Record { data }
    }

    fn pipeline() -> TicketPipeline<MockStorage, MockConfig> {
        TicketPipeline::new(MockStorage::new(), MockConfig::new("tickets.json"))
    }

    #[test]
    fn test_extract_reads_configured_file() {
        let storage = MockStorage::new().with_file(
            "data/tickets.json",
            "\u{FEFF}{\"tickets\": [{\"origin\": \"VVO\"}]}".as_bytes(),
        );
        let pipeline = TicketPipeline::new(storage, MockConfig::new("data/tickets.json"));

        let records = pipeline.extract().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].data.get("origin").unwrap().as_str().unwrap(), "VVO");
    }

    #[test]
    fn test_extract_missing_file() {
        let err = pipeline().extract().unwrap_err();
        assert!(matches!(err, TicketError::IoError(_)));
    }

    #[test]
    fn test_transform_groups_matching_tickets() {
        let data = vec![
            ticket("VVO", "TLV", "A", "01.06.24 10:00", "01.06.24 12:30", 100),
            ticket("VVO", "UFA", "A", "01.06.24 10:00", "01.06.24 10:05", 1),
            ticket("VVO", "TLV", "B", "01.06.24 06:00", "01.06.24 13:00", 300),
            ticket("VVO", "TLV", "A", "02.06.24 08:00", "02.06.24 09:00", 200),
        ];

        let result = pipeline().transform(data).unwrap();

        assert_eq!(result.entries_seen, 4);
        assert_eq!(result.entries_matched, 3);
        assert_eq!(result.flight_times.durations("A"), Some(&[150, 60][..]));
        assert_eq!(result.flight_times.durations("B"), Some(&[420][..]));
        assert_eq!(result.prices.as_slice(), &[100, 300, 200]);
    }

    #[test]
    fn test_transform_skips_dates_of_other_routes() {
        let data = vec![ticket("LED", "TLV", "A", "not a date ??", "01.06.24 12:30", 100)];

        let result = pipeline().transform(data).unwrap();

        assert_eq!(result.entries_matched, 0);
        assert!(result.flight_times.is_empty());
        assert!(result.prices.is_empty());
    }

    #[test]
    fn test_transform_malformed_date_fails() {
        let data = vec![ticket("VVO", "TLV", "A", "2024-06-01 10:00", "01.06.24 12:30", 100)];

        let err = pipeline().transform(data).unwrap_err();
        assert!(matches!(err, TicketError::DateParseError { .. }));
    }

    #[test]
    fn test_transform_missing_field_in_any_entry_fails() {
        let mut broken = ticket("LED", "MOW", "A", "01.06.24 10:00", "01.06.24 12:30", 1);
        broken.data.remove("price");
        let data = vec![
            ticket("VVO", "TLV", "A", "01.06.24 10:00", "01.06.24 12:30", 100),
            broken,
        ];

        match pipeline().transform(data) {
            Err(TicketError::DataFieldError { index, field, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "price");
            }
            other => panic!("expected DataFieldError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_summarizes() {
        let data = vec![
            ticket("VVO", "TLV", "A", "01.06.24 10:00", "01.06.24 12:30", 100),
            ticket("VVO", "TLV", "A", "02.06.24 08:00", "02.06.24 09:00", 200),
        ];
        let pipeline = pipeline();

        let result = pipeline.transform(data).unwrap();
        let report = pipeline.load(result).unwrap();

        assert_eq!(report.carriers.len(), 1);
        assert_eq!(report.carriers[0].carrier, "A");
        assert_eq!(report.carriers[0].minutes, 60);
        assert_eq!(report.average_price, 150.0);
        assert_eq!(report.median_price, 150.0);
        assert_eq!(report.price_difference, 0.0);
    }
}
