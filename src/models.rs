use serde::Serialize;
use serde_json::Value;

/// Project-level fields read once per work order sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectInfo {
    pub project_id: String,
    pub project_manager: String,
    pub salesperson: String,
    pub notes: String,
}

/// One printed-product specification block within a work order sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkuRecord {
    pub sku_number: u32,
    pub description: String,
    pub poa_type: String,
    pub file_location: String,
    pub color_target: String,
    pub proof_requirements: String,
    pub substrate: String,
    pub varnishes: String,
    pub special_fx: String,
}

impl SkuRecord {
    /// True when at least one extracted field carries data. Blocks read past
    /// the real data region come back entirely empty and are dropped.
    pub fn has_data(&self) -> bool {
        [
            &self.description,
            &self.poa_type,
            &self.file_location,
            &self.color_target,
            &self.proof_requirements,
            &self.substrate,
            &self.varnishes,
            &self.special_fx,
        ]
        .iter()
        .any(|field| !field.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkType {
    SkuSpecification,
    ProjectOverview,
}

/// A self-contained text + metadata record prepared for downstream indexing.
#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    pub chunk_id: String,
    pub chunk_type: ChunkType,
    pub content: String,
    pub metadata: Value,
}
