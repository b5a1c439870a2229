use crate::core::{ConversionReport, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct BridgeEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> BridgeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<ConversionReport> {
        tracing::info!("🚀 Starting competitor conversion");

        // Extract
        let competitors = self.pipeline.extract()?;
        tracing::info!("Extracted {} competitor slots", competitors.len());
        self.monitor.log_stage_stats("Extract");

        // Transform
        let result = self.pipeline.transform(competitors)?;
        tracing::info!(
            "Mapped {} competitors, skipped {} placeholder slots",
            result.rows.len(),
            result.skipped
        );
        self.monitor.log_stage_stats("Transform");

        // Load
        let report = self.pipeline.load(result)?;
        tracing::info!("📁 Competitor list saved to: {}", report.output_path);
        self.monitor.log_stage_stats("Load");

        self.monitor.log_summary();

        Ok(report)
    }
}
