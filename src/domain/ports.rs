use crate::domain::model::{CompetitorRecord, ConversionReport, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn source_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<CompetitorRecord>>;
    fn transform(&self, competitors: Vec<CompetitorRecord>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<ConversionReport>;
}
