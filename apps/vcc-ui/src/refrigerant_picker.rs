use vcc_fluids::{Refrigerant, filter_refrigerant_catalog, refrigerant_catalog};

/// Dropdown with a search box for picking a refrigerant from the catalog.
#[derive(Debug, Default)]
pub struct RefrigerantPicker {
    search_query: String,
}

impl RefrigerantPicker {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        id_salt: impl std::hash::Hash,
        selected: &mut Refrigerant,
    ) -> bool {
        let mut changed = false;
        let selected_label = refrigerant_catalog()
            .iter()
            .find(|entry| entry.refrigerant == *selected)
            .map(|entry| entry.display_name)
            .unwrap_or_else(|| selected.display_name());

        egui::ComboBox::from_id_salt(id_salt)
            .selected_text(selected_label)
            .width(200.0)
            .show_ui(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Search:");
                    ui.text_edit_singleline(&mut self.search_query)
                        .on_hover_text("Type to filter refrigerants");
                    if ui.small_button("Clear").clicked() {
                        self.search_query.clear();
                    }
                });

                ui.separator();

                let filtered = filter_refrigerant_catalog(&self.search_query);
                if filtered.is_empty() {
                    ui.label("No refrigerants found");
                    return;
                }

                egui::ScrollArea::vertical()
                    .max_height(260.0)
                    .show(ui, |ui| {
                        for entry in filtered {
                            changed |= ui
                                .selectable_value(
                                    selected,
                                    entry.refrigerant,
                                    entry.display_name,
                                )
                                .changed();
                        }
                    });
            });

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_refrigerant_label_uses_catalog_name() {
        let selected = Refrigerant::R717;
        let label = refrigerant_catalog()
            .iter()
            .find(|entry| entry.refrigerant == selected)
            .map(|entry| entry.display_name)
            .unwrap_or_else(|| selected.display_name());

        assert_eq!(label, "R717 (Ammonia)");
    }
}
