pub mod aggregate;
pub mod etl;
pub mod flight_time;
pub mod loader;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{Record, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
