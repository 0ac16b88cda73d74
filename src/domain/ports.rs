use crate::domain::model::{Record, ReportFormat, TicketReport, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn report_format(&self) -> ReportFormat;
    fn monitoring_enabled(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Record>>;
    fn transform(&self, data: Vec<Record>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<TicketReport>;
}
