use crate::core::Pipeline;
use crate::domain::model::TicketReport;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs extract, transform and load in order. Nothing is returned unless every stage succeeds.
    pub fn run(&self) -> Result<TicketReport> {
        tracing::info!("Starting ticket analysis");

        tracing::info!("Extracting tickets...");
        let raw_data = self.pipeline.extract()?;
        tracing::info!("Extracted {} ticket entries", raw_data.len());
        self.monitor.log_stats("Extract");

        tracing::info!("Transforming tickets...");
        let transformed = self.pipeline.transform(raw_data)?;
        tracing::info!(
            "Matched {} of {} tickets across {} carriers",
            transformed.entries_matched,
            transformed.entries_seen,
            transformed.flight_times.len()
        );
        self.monitor.log_stats("Transform");

        tracing::info!("Aggregating...");
        let report = self.pipeline.load(transformed)?;
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate;
    use crate::domain::model::{Record, TransformResult};
    use crate::utils::error::TicketError;
    use std::cell::RefCell;

    struct RecordingPipeline {
        stages: RefCell<Vec<&'static str>>,
        fail_transform: bool,
    }

    impl RecordingPipeline {
        fn new(fail_transform: bool) -> Self {
            Self {
                stages: RefCell::new(Vec::new()),
                fail_transform,
            }
        }
    }

    impl Pipeline for RecordingPipeline {
        fn extract(&self) -> Result<Vec<Record>> {
            self.stages.borrow_mut().push("extract");
            Ok(Vec::new())
        }

        fn transform(&self, _data: Vec<Record>) -> Result<TransformResult> {
            self.stages.borrow_mut().push("transform");
            if self.fail_transform {
                return Err(TicketError::DateParseError {
                    value: "bad".to_string(),
                    reason: "test".to_string(),
                });
            }
            Ok(TransformResult::default())
        }

        fn load(&self, result: TransformResult) -> Result<TicketReport> {
            self.stages.borrow_mut().push("load");
            Ok(aggregate::summarize(&result))
        }
    }

    #[test]
    fn test_run_executes_stages_in_order() {
        let engine = EtlEngine::new(RecordingPipeline::new(false));

        let report = engine.run().unwrap();

        assert!(report.carriers.is_empty());
        assert_eq!(
            *engine.pipeline.stages.borrow(),
            vec!["extract", "transform", "load"]
        );
    }

    #[test]
    fn test_run_stops_at_first_failure() {
        let engine = EtlEngine::new(RecordingPipeline::new(true));

        assert!(engine.run().is_err());
        assert_eq!(*engine.pipeline.stages.borrow(), vec!["extract", "transform"]);
    }
}
