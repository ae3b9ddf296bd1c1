//! Pure rendering of the recipe editor: catalog + lines in, rows out.

use contracts::domain::a001_product::ProductId;
use contracts::domain::a002_material::{MaterialDto, MaterialId};
use contracts::domain::a003_bom_line::BomLineDto;

/// Shown in the lines table when the recipe is empty.
pub const EMPTY_BOM_PLACEHOLDER: &str = "No materials yet.";

/// Span of the editor cell below a product row.
pub const EDITOR_COLSPAN: u32 = 7;

/// Columns of the lines table: category, name, color, qty, unit, remove.
pub const LINES_COLSPAN: u32 = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct BomLineRow {
    pub material_id: MaterialId,
    pub category: String,
    pub name: String,
    pub color: String,
    pub qty: String,
    pub unit: String,
}

impl From<&BomLineDto> for BomLineRow {
    fn from(line: &BomLineDto) -> Self {
        Self {
            material_id: line.material_id,
            category: line.category.clone(),
            name: line.name.clone(),
            color: line.color.clone().unwrap_or_default(),
            qty: line.qty_display(),
            unit: line.unit.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BomView {
    pub product_id: ProductId,
    /// Material selector as `(value, label)` pairs, catalog order.
    pub options: Vec<(String, String)>,
    pub rows: Vec<BomLineRow>,
}

impl BomView {
    pub fn placeholder(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some(EMPTY_BOM_PLACEHOLDER)
    }
}

pub fn render_bom_view(
    product_id: ProductId,
    materials: &[MaterialDto],
    lines: &[BomLineDto],
) -> BomView {
    BomView {
        product_id,
        options: materials
            .iter()
            .map(|m| (m.id.to_string(), m.selector_label()))
            .collect(),
        rows: lines.iter().map(BomLineRow::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<MaterialDto> {
        serde_json::from_value(serde_json::json!([
            {"id": 3, "category": "FILAMENT", "name": "PLA", "color": "Red"},
            {"id": 5, "category": "OTHER", "name": "Magnet", "color": "N/A"}
        ]))
        .unwrap()
    }

    fn line(material_id: i64, qty: f64) -> BomLineDto {
        serde_json::from_value(serde_json::json!({
            "material_id": material_id,
            "qty_per_unit": qty,
            "category": "FILAMENT",
            "name": "PLA",
            "color": "Red",
            "unit": "g"
        }))
        .unwrap()
    }

    #[test]
    fn test_options_follow_catalog() {
        let view = render_bom_view(ProductId(1), &catalog(), &[]);
        assert_eq!(
            view.options,
            vec![
                ("3".to_string(), "FILAMENT — PLA (Red)".to_string()),
                ("5".to_string(), "OTHER — Magnet (N/A)".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_recipe_shows_placeholder() {
        let view = render_bom_view(ProductId(1), &catalog(), &[]);
        assert!(view.rows.is_empty());
        assert_eq!(view.placeholder(), Some("No materials yet."));
    }

    #[test]
    fn test_line_rows() {
        let view = render_bom_view(ProductId(1), &catalog(), &[line(3, 35.0), line(5, 0.25)]);
        assert_eq!(view.placeholder(), None);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].qty, "35");
        assert_eq!(view.rows[0].unit, "g");
        assert_eq!(view.rows[1].material_id, MaterialId(5));
        assert_eq!(view.rows[1].qty, "0.25");
    }

    #[test]
    fn test_removing_one_line_keeps_others() {
        let before = render_bom_view(ProductId(1), &catalog(), &[line(3, 1.0), line(5, 2.0)]);
        let after = render_bom_view(ProductId(1), &catalog(), &[line(5, 2.0)]);
        assert_eq!(after.rows.len(), before.rows.len() - 1);
        assert_eq!(after.rows[0], before.rows[1]);
    }
}
