//! Grid layout of the work order template.
//!
//! Work order sheets are not header-driven tables: fields live at fixed cell
//! addresses and SKU blocks repeat at a fixed row stride. The whole contract
//! is described here as data so a revised template only touches this module,
//! never the extraction logic.

/// Substring that marks a sheet as a work order sheet.
pub const SHEET_NAME_MARKER: &str = "SKU";

/// Template sheet kept in the workbook for copy/paste, never real data.
pub const EXCLUDED_SHEET: &str = "Copy_Paste Rows";

/// Absolute A1 addresses of the per-sheet project header.
#[derive(Debug, Clone)]
pub struct ProjectCells {
    pub project_id: &'static str,
    pub project_manager: &'static str,
    pub salesperson: &'static str,
    pub notes: &'static str,
}

/// Column letter plus row offset relative to the SKU block's base row.
#[derive(Debug, Clone, Copy)]
pub struct FieldCell {
    pub column: &'static str,
    pub row_offset: u32,
}

/// Cell positions of one SKU specification block.
#[derive(Debug, Clone)]
pub struct SkuCells {
    pub description: FieldCell,
    pub poa_type: FieldCell,
    pub file_location: FieldCell,
    pub color_target: FieldCell,
    pub proof_requirements: FieldCell,
    pub substrate: FieldCell,
    pub varnishes: FieldCell,
    pub special_fx: FieldCell,
}

/// Full layout contract for one work order template revision.
#[derive(Debug, Clone)]
pub struct SheetLayout {
    /// 1-based row where the first SKU block starts.
    pub base_row: u32,
    /// Rows between the base rows of consecutive SKU blocks.
    pub row_stride: u32,
    pub project: ProjectCells,
    pub sku: SkuCells,
}

impl SheetLayout {
    /// The template currently used by production work orders.
    pub fn work_order() -> Self {
        SheetLayout {
            base_row: 8,
            row_stride: 9,
            project: ProjectCells {
                project_id: "B2",
                project_manager: "B3",
                salesperson: "P3",
                notes: "B5",
            },
            sku: SkuCells {
                description: FieldCell { column: "D", row_offset: 1 },
                poa_type: FieldCell { column: "A", row_offset: 2 },
                file_location: FieldCell { column: "D", row_offset: 2 },
                color_target: FieldCell { column: "G", row_offset: 2 },
                proof_requirements: FieldCell { column: "J", row_offset: 2 },
                substrate: FieldCell { column: "M", row_offset: 2 },
                varnishes: FieldCell { column: "P", row_offset: 2 },
                special_fx: FieldCell { column: "U", row_offset: 2 },
            },
        }
    }

    /// 1-based base row of the n-th SKU block (n is 1-based). `None` when the
    /// computed row does not fit in a u32.
    pub fn sku_row(&self, sku_number: u32) -> Option<u32> {
        sku_number
            .checked_sub(1)
            .and_then(|n| n.checked_mul(self.row_stride))
            .and_then(|offset| self.base_row.checked_add(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sku_rows_follow_the_stride() {
        let layout = SheetLayout::work_order();
        assert_eq!(layout.sku_row(1), Some(8));
        assert_eq!(layout.sku_row(2), Some(17));
        assert_eq!(layout.sku_row(3), Some(26));
    }

    #[test]
    fn absurd_sku_index_does_not_overflow() {
        let layout = SheetLayout::work_order();
        assert_eq!(layout.sku_row(u32::MAX), None);
        // index 0 never occurs (SKUs are 1-based) but must not underflow
        assert_eq!(layout.sku_row(0), None);
    }
}
