use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};

use crate::error::AppError;
use crate::models::{Chunk, ProjectInfo, SkuRecord};

use super::chunks::{build_project_chunk, build_sku_chunk};
use super::layout::{FieldCell, SheetLayout};
use super::utils::{cell_value, is_work_order_sheet, sku_count_from_name};

/// Walks every work order sheet of one workbook and turns it into chunks.
pub struct WorkOrderExtractor {
    workbook: Xlsx<BufReader<File>>,
    layout: SheetLayout,
}

impl WorkOrderExtractor {
    pub fn open(path: &str) -> Result<Self, AppError> {
        tracing::info!("Opening work order workbook: {}", path);
        let workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e| AppError::FileProcessingError(format!("Failed to open Excel file: {}", e)))?;

        Ok(Self {
            workbook,
            layout: SheetLayout::work_order(),
        })
    }

    /// Extract chunks from every work order sheet. A sheet that cannot be
    /// read is logged and skipped; the remaining sheets still produce output.
    pub fn extract_all(&mut self) -> Vec<Chunk> {
        let sheet_names: Vec<String> = self
            .workbook
            .sheet_names()
            .iter()
            .filter(|name| is_work_order_sheet(name))
            .cloned()
            .collect();
        tracing::info!("Processing {} work order sheets", sheet_names.len());

        let mut all_chunks = Vec::new();
        let mut seen_projects: HashSet<String> = HashSet::new();

        for sheet_name in &sheet_names {
            tracing::info!("Processing sheet: {}", sheet_name);
            match self.workbook.worksheet_range(sheet_name) {
                Ok(range) => {
                    let chunks = extract_sheet(sheet_name, &range, &self.layout);
                    warn_on_project_collision(&chunks, &mut seen_projects);
                    tracing::info!("Sheet {} produced {} chunks", sheet_name, chunks.len());
                    all_chunks.extend(chunks);
                }
                Err(e) => {
                    tracing::warn!("Could not process sheet {}: {}", sheet_name, e);
                    continue;
                }
            }
        }

        all_chunks
    }
}

/// Chunk ids embed the project id, so a project id repeated across sheets
/// collides downstream. Surfaced as a warning, not an error: one sheet per
/// project is the working assumption.
fn warn_on_project_collision(chunks: &[Chunk], seen_projects: &mut HashSet<String>) {
    let Some(project_id) = chunks
        .first()
        .and_then(|chunk| chunk.metadata.get("project_id"))
        .and_then(|value| value.as_str())
    else {
        return;
    };
    if !seen_projects.insert(project_id.to_string()) {
        tracing::warn!(
            "Project id {} appears on more than one sheet; chunk ids will collide",
            project_id
        );
    }
}

/// Extract all chunks from a single sheet: one per non-empty SKU block plus
/// one project overview. A sheet with no populated SKU block yields nothing.
pub fn extract_sheet(sheet_name: &str, range: &Range<Data>, layout: &SheetLayout) -> Vec<Chunk> {
    let project = read_project_info(range, layout);
    let sku_count = sku_count_from_name(sheet_name);
    let skus = read_sku_blocks(range, layout, sku_count);

    let mut chunks: Vec<Chunk> = skus
        .iter()
        .map(|sku| build_sku_chunk(&project, sku, sheet_name))
        .collect();
    if !skus.is_empty() {
        chunks.push(build_project_chunk(&project, &skus, sheet_name));
    }
    chunks
}

fn read_project_info(range: &Range<Data>, layout: &SheetLayout) -> ProjectInfo {
    let cells = &layout.project;
    ProjectInfo {
        project_id: cell_value(range, cells.project_id),
        project_manager: cell_value(range, cells.project_manager),
        salesperson: cell_value(range, cells.salesperson),
        notes: cell_value(range, cells.notes),
    }
}

fn read_sku_blocks(range: &Range<Data>, layout: &SheetLayout, sku_count: u32) -> Vec<SkuRecord> {
    let mut blocks = Vec::new();
    for sku_number in 1..=sku_count {
        match read_sku_block(range, layout, sku_number) {
            Ok(Some(block)) => blocks.push(block),
            Ok(None) => tracing::debug!("SKU {} block is empty, dropping", sku_number),
            Err(e) => {
                tracing::warn!("Could not extract SKU {}: {}", sku_number, e);
                continue;
            }
        }
    }
    blocks
}

fn read_sku_block(
    range: &Range<Data>,
    layout: &SheetLayout,
    sku_number: u32,
) -> Result<Option<SkuRecord>, AppError> {
    let base_row = layout
        .sku_row(sku_number)
        .ok_or_else(|| AppError::ParseError(format!("SKU {} row is out of range", sku_number)))?;

    let field = |cell: FieldCell| {
        let addr = format!("{}{}", cell.column, base_row.saturating_add(cell.row_offset));
        cell_value(range, &addr)
    };

    let cells = &layout.sku;
    let record = SkuRecord {
        sku_number,
        description: field(cells.description),
        poa_type: field(cells.poa_type),
        file_location: field(cells.file_location),
        color_target: field(cells.color_target),
        proof_requirements: field(cells.proof_requirements),
        substrate: field(cells.substrate),
        varnishes: field(cells.varnishes),
        special_fx: field(cells.special_fx),
    };

    Ok(record.has_data().then_some(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChunkType;

    fn empty_range() -> Range<Data> {
        Range::new((0, 0), (40, 25))
    }

    fn set(range: &mut Range<Data>, addr: &str, value: &str) {
        let pos = crate::services::excel::utils::parse_cell_ref(addr).unwrap();
        range.set_value(pos, Data::String(value.to_string()));
    }

    /// One-SKU sheet with the header and first block populated.
    fn single_sku_range() -> Range<Data> {
        let mut range = empty_range();
        set(&mut range, "B2", "PG26794");
        set(&mut range, "B3", "Dana Reis");
        set(&mut range, "P3", "Luis Prado");
        set(&mut range, "B5", "Rush order");
        // first SKU block, base row 8
        set(&mut range, "D9", "Label A");
        set(&mut range, "A10", "Flexo");
        set(&mut range, "D10", "//files/wo/PG26794");
        set(&mut range, "G10", "Pantone 186C");
        set(&mut range, "J10", "Digital proof");
        set(&mut range, "M10", "PET");
        set(&mut range, "P10", "Gloss");
        set(&mut range, "U10", "Foil stamp");
        range
    }

    #[test]
    fn single_sku_sheet_yields_sku_and_overview() {
        let range = single_sku_range();
        let chunks = extract_sheet("1 SKU", &range, &SheetLayout::work_order());

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chunk_id, "PG26794_SKU_1");
        assert_eq!(chunks[0].chunk_type, ChunkType::SkuSpecification);
        assert_eq!(chunks[1].chunk_id, "PG26794_overview");
        assert_eq!(chunks[1].chunk_type, ChunkType::ProjectOverview);
        assert!(chunks[1].content.contains("SKU 1: Label A (PET)"));
        assert!(chunks[1].content.contains("Total SKUs: 1"));
    }

    #[test]
    fn second_populated_block_is_read_at_the_stride() {
        let mut range = single_sku_range();
        // second SKU block, base row 17
        set(&mut range, "D18", "Label B");
        set(&mut range, "M19", "PP");
        let chunks = extract_sheet("2 SKU Layout", &range, &SheetLayout::work_order());

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1].chunk_id, "PG26794_SKU_2");
        assert!(chunks[2].content.contains("SKU 2: Label B (PP)"));
        assert!(chunks[2].content.contains("Total SKUs: 2"));
    }

    #[test]
    fn empty_trailing_blocks_are_dropped() {
        // name advertises 3 blocks, only the first holds data
        let range = single_sku_range();
        let chunks = extract_sheet("3 SKU Layout", &range, &SheetLayout::work_order());

        assert_eq!(chunks.len(), 2);
        assert!(chunks[1].content.contains("Total SKUs: 1"));
    }

    #[test]
    fn sheet_with_no_data_yields_no_chunks() {
        let range = empty_range();
        let chunks = extract_sheet("1 SKU", &range, &SheetLayout::work_order());
        assert!(chunks.is_empty());
    }

    #[test]
    fn range_smaller_than_the_layout_does_not_panic() {
        let range: Range<Data> = Range::new((0, 0), (2, 2));
        let chunks = extract_sheet("3 SKU Layout", &range, &SheetLayout::work_order());
        assert!(chunks.is_empty());
    }

    #[test]
    fn missing_header_cells_default_to_empty_strings() {
        let mut range = empty_range();
        set(&mut range, "D9", "Label A");
        let chunks = extract_sheet("1 SKU", &range, &SheetLayout::work_order());

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chunk_id, "_SKU_1");
        assert_eq!(chunks[0].metadata["project_id"], "");
    }
}
