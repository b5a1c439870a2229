use serde_json::{Map, Value};

/// Sailwave 匯出欄位與 CSV 欄位的對應表,順序即輸出順序
pub const CSV_COLUMNS: [(&str, &str); 12] = [
    ("SailNo", "compsailno"),
    ("Class", "compclass"),
    ("Fleet", "compdivision"),
    ("Helm", "comphelmname"),
    ("PY", "comprating"),
    ("Nationality", "compnat"),
    ("Medical", "compmedical"),
    ("Medical Flag", "compmedicalflag"),
    ("Age Group", "comphelmagegroup"),
    ("Email", "comphelmemail"),
    ("Sex", "comphelmsex"),
    ("Photo Path", "comphelmphoto"),
];

/// 判定參賽者有效性的欄位
pub const SAIL_NUMBER_FIELD: &str = "compsailno";

/// 單一參賽者的原始欄位資料
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorRecord {
    data: Map<String, Value>,
}

impl CompetitorRecord {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// 取出欄位值並轉為字串,缺欄位或 null 一律為空字串
    pub fn field_as_string(&self, field: &str) -> String {
        match self.data.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// 有帆號才算正式報名,佔位名額(空帆號)要被過濾掉
    pub fn has_sail_number(&self) -> bool {
        !self.field_as_string(SAIL_NUMBER_FIELD).is_empty()
    }

    /// 依 CSV_COLUMNS 的順序展開成一列儲存格
    pub fn to_row(&self) -> Vec<String> {
        CSV_COLUMNS
            .iter()
            .map(|(_, field)| self.field_as_string(field))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult {
    pub rows: Vec<Vec<String>>,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub rows_written: usize,
    pub skipped: usize,
    pub output_path: String,
}
