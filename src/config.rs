use anyhow::Result;
use dotenvy::dotenv;

const DEFAULT_WORKBOOK_PATH: &str = "WO PG 26794.xlsx";
const DEFAULT_OUTPUT_PATH: &str = "extracted_chunks.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub workbook_path: String,
    pub output_path: String,
}

impl Config {
    pub fn new() -> Result<Self> {
        // Load .env file first
        dotenv().ok();

        // Workbook path: CLI argument wins, then the environment, then the
        // demo default
        let workbook_path = std::env::args()
            .nth(1)
            .or_else(|| std::env::var("WORK_ORDER_XLSX").ok())
            .unwrap_or_else(|| DEFAULT_WORKBOOK_PATH.to_string());

        let output_path = std::env::var("WORK_ORDER_OUTPUT")
            .unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string());

        Ok(Config {
            workbook_path,
            output_path,
        })
    }
}
