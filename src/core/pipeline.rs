use crate::core::{
    CompetitorRecord, ConfigProvider, ConversionReport, Pipeline, Storage, TransformResult,
};
use crate::domain::model::CSV_COLUMNS;
use crate::utils::error::{BridgeError, Result};
use serde_json::Value;

pub struct BridgePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> BridgePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for BridgePipeline<S, C> {
    fn extract(&self) -> Result<Vec<CompetitorRecord>> {
        tracing::debug!("Reading race export from: {}", self.config.source_path());
        let raw = self.storage.read_file(self.config.source_path())?;

        let document: Value =
            serde_json::from_slice(&raw).map_err(|e| BridgeError::MalformedExportError {
                message: format!("not valid JSON: {}", e),
            })?;

        let mut root = match document {
            Value::Object(root) => root,
            _ => {
                return Err(BridgeError::MalformedExportError {
                    message: "top level is not a JSON object".to_string(),
                })
            }
        };

        let competitors =
            root.remove("competitors")
                .ok_or_else(|| BridgeError::MalformedExportError {
                    message: "missing 'competitors' key".to_string(),
                })?;

        let slots = match competitors {
            Value::Object(slots) => slots,
            _ => {
                return Err(BridgeError::MalformedExportError {
                    message: "'competitors' is not a JSON object".to_string(),
                })
            }
        };

        // 保留匯出檔內的原始順序
        let mut records = Vec::with_capacity(slots.len());
        for (id, entry) in slots {
            match entry {
                Value::Object(fields) => records.push(CompetitorRecord::new(fields)),
                other => {
                    tracing::debug!("Skipping non-object competitor entry '{}': {}", id, other);
                }
            }
        }

        Ok(records)
    }

    fn transform(&self, competitors: Vec<CompetitorRecord>) -> Result<TransformResult> {
        let mut rows = Vec::new();
        let mut skipped = 0;

        for competitor in competitors {
            if !competitor.has_sail_number() {
                // 佔位名額,不輸出也不報錯
                skipped += 1;
                continue;
            }
            rows.push(competitor.to_row());
        }

        tracing::debug!("Mapped {} rows, skipped {} placeholder slots", rows.len(), skipped);

        Ok(TransformResult { rows, skipped })
    }

    fn load(&self, result: TransformResult) -> Result<ConversionReport> {
        let output_path = self.config.output_path().to_string();
        let rows_written = result.rows.len();

        // 先在記憶體組好整份 CSV,再一次寫出
        let mut buffer = Vec::new();
        {
            let mut writer = csv::WriterBuilder::new()
                .terminator(csv::Terminator::CRLF)
                .from_writer(&mut buffer);

            writer.write_record(CSV_COLUMNS.iter().map(|(header, _)| *header))?;
            for row in &result.rows {
                writer.write_record(row)?;
            }
            writer.flush()?;
        }

        tracing::debug!("Writing {} bytes to {}", buffer.len(), output_path);
        self.storage.write_file(&output_path, &buffer)?;

        Ok(ConversionReport {
            rows_written,
            skipped: result.skipped,
            output_path,
        })
    }
}
