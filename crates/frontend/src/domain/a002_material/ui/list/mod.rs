use crate::controller::use_controller;
use crate::shared::components::ui::Button;
use crate::state::Action;
use contracts::domain::a002_material::{MaterialDto, MaterialId};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MaterialRow {
    pub id: MaterialId,
    pub category: String,
    pub name: String,
    pub color: String,
    pub quantity_on_hand: String,
    pub unit: String,
    pub cost_per_unit: String,
    pub brand: String,
    pub material_type: String,
    pub finish: String,
}

impl From<&MaterialDto> for MaterialRow {
    fn from(m: &MaterialDto) -> Self {
        Self {
            id: m.id,
            category: m.category.to_string(),
            name: m.name.clone(),
            color: m.color.clone().unwrap_or_default(),
            quantity_on_hand: m.quantity_display(),
            unit: m.unit.clone().unwrap_or_default(),
            cost_per_unit: m.cost_display(),
            brand: m.brand.clone().unwrap_or_default(),
            material_type: m.material_type.clone().unwrap_or_default(),
            finish: m.finish.clone().unwrap_or_default(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MaterialList() -> impl IntoView {
    let ctx = use_controller();
    let rows = Memo::new(move |_| {
        ctx.state
            .with(|s| s.materials.iter().map(MaterialRow::from).collect::<Vec<_>>())
    });

    view! {
        <table class="table" id="materialsTable">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Category"</th>
                    <th>"Name"</th>
                    <th>"Color"</th>
                    <th>"On Hand"</th>
                    <th>"Unit"</th>
                    <th>"Cost/Unit"</th>
                    <th>"Brand"</th>
                    <th>"Type"</th>
                    <th>"Finish"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody id="materialsTbody">
                <For
                    each=move || rows.get()
                    key=|row| row.clone()
                    children=move |row| {
                        let material_id = row.id;
                        view! {
                            <tr>
                                <td>{row.id.to_string()}</td>
                                <td>{row.category}</td>
                                <td>{row.name}</td>
                                <td>{row.color}</td>
                                <td>{row.quantity_on_hand}</td>
                                <td>{row.unit}</td>
                                <td>{row.cost_per_unit}</td>
                                <td>{row.brand}</td>
                                <td>{row.material_type}</td>
                                <td>{row.finish}</td>
                                <td>
                                    <Button
                                        variant="secondary"
                                        on_click=Callback::new(move |_| ctx.dispatch(Action::EditMaterial { material_id }))
                                    >
                                        "Edit"
                                    </Button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
