use crate::domain::model::{ReportFormat, TicketReport};
use crate::utils::error::Result;
use std::fmt;

impl fmt::Display for TicketReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Minimum flight time per carrier:")?;
        for entry in &self.carriers {
            writeln!(f, "{}: {} minutes", entry.carrier, entry.minutes)?;
        }
        writeln!(f, "Average price: {:.2}", self.average_price)?;
        writeln!(f, "Median price: {:.2}", self.median_price)?;
        writeln!(
            f,
            "Difference between average and median price: {:.2}",
            self.price_difference
        )
    }
}

pub fn render(report: &TicketReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(report.to_string()),
        ReportFormat::Json => {
            let mut output = serde_json::to_string_pretty(report)?;
            output.push('\n');
            Ok(output)
        }
    }
}
