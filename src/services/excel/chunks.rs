//! Chunk templates for the two record shapes the indexer consumes.

use serde_json::json;

use crate::models::{Chunk, ChunkType, ProjectInfo, SkuRecord};

/// One searchable chunk for a single SKU specification.
pub fn build_sku_chunk(project: &ProjectInfo, sku: &SkuRecord, sheet_name: &str) -> Chunk {
    let content = format!(
        "Project {} - SKU {}\n\
         \n\
         Description: {}\n\
         Production Type: {}\n\
         Material/Substrate: {}\n\
         Color Requirements: {}\n\
         Proof Requirements: {}\n\
         Varnishes: {}\n\
         Special Effects: {}\n\
         File Location: {}\n\
         \n\
         Project Manager: {}\n\
         Salesperson: {}",
        project.project_id,
        sku.sku_number,
        sku.description,
        sku.poa_type,
        sku.substrate,
        sku.color_target,
        sku.proof_requirements,
        sku.varnishes,
        sku.special_fx,
        sku.file_location,
        project.project_manager,
        project.salesperson,
    );

    Chunk {
        chunk_id: format!("{}_SKU_{}", project.project_id, sku.sku_number),
        chunk_type: ChunkType::SkuSpecification,
        content,
        metadata: json!({
            "project_id": project.project_id,
            "sku_number": sku.sku_number,
            "sheet_name": sheet_name,
            "substrate": sku.substrate,
            "poa_type": sku.poa_type,
            "color_target": sku.color_target,
            "project_manager": project.project_manager,
            "salesperson": project.salesperson,
        }),
    }
}

/// One overview chunk summarizing every kept SKU on the sheet.
pub fn build_project_chunk(project: &ProjectInfo, skus: &[SkuRecord], sheet_name: &str) -> Chunk {
    let summaries: Vec<String> = skus
        .iter()
        .map(|sku| format!("SKU {}: {} ({})", sku.sku_number, sku.description, sku.substrate))
        .collect();

    let content = format!(
        "Project {} Overview\n\
         \n\
         Project Manager: {}\n\
         Salesperson: {}\n\
         Total SKUs: {}\n\
         \n\
         SKU Summary:\n\
         {}\n\
         \n\
         Notes: {}",
        project.project_id,
        project.project_manager,
        project.salesperson,
        skus.len(),
        summaries.join("\n"),
        project.notes,
    );

    Chunk {
        chunk_id: format!("{}_overview", project.project_id),
        chunk_type: ChunkType::ProjectOverview,
        content,
        metadata: json!({
            "project_id": project.project_id,
            "sku_count": skus.len(),
            "sheet_name": sheet_name,
            "project_manager": project.project_manager,
            "salesperson": project.salesperson,
        }),
    }
}
