use crate::refrigerant_picker::RefrigerantPicker;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use vcc_core::units::{dt_k, k, kgps, pa};
use vcc_cycle::{
    BoundarySpec, CycleInputs, CycleResult, PhDiagram, compute_cycle, ph_diagram,
};
use vcc_fluids::{CoolPropModel, Quantity, Refrigerant, parse_quantity};

/// How a boundary value field is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoundaryMode {
    Temperature,
    Pressure,
}

impl BoundaryMode {
    fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Pressure => "Pressure",
        }
    }

    fn quantity(self) -> Quantity {
        match self {
            Self::Temperature => Quantity::Temperature,
            Self::Pressure => Quantity::Pressure,
        }
    }

    fn boundary(self, si_value: f64) -> BoundarySpec {
        match self {
            Self::Temperature => BoundarySpec::SaturationTemperature(k(si_value)),
            Self::Pressure => BoundarySpec::Pressure(pa(si_value)),
        }
    }
}

pub struct VaporcycleApp {
    model: CoolPropModel,
    picker: RefrigerantPicker,
    refrigerant: Refrigerant,

    evap_mode: BoundaryMode,
    evap_text: String,
    cond_mode: BoundaryMode,
    cond_text: String,
    superheat_text: String,
    subcooling_text: String,
    efficiency_text: String,
    mass_flow_text: String,

    result: Option<CycleResult>,
    diagram: Option<PhDiagram>,
    error: Option<String>,
}

impl VaporcycleApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            model: CoolPropModel::new(),
            picker: RefrigerantPicker::default(),
            refrigerant: Refrigerant::R134a,
            evap_mode: BoundaryMode::Temperature,
            evap_text: "-10C".to_string(),
            cond_mode: BoundaryMode::Temperature,
            cond_text: "40C".to_string(),
            superheat_text: "5K".to_string(),
            subcooling_text: "5K".to_string(),
            efficiency_text: "80%".to_string(),
            mass_flow_text: String::new(),
            result: None,
            diagram: None,
            error: None,
        }
    }

    fn compute(&mut self) {
        self.error = None;
        self.result = None;
        self.diagram = None;

        match self.build_inputs() {
            Ok(inputs) => match compute_cycle(&self.model, self.refrigerant, &inputs) {
                Ok(result) => {
                    match ph_diagram(&self.model, &result, 80) {
                        Ok(diagram) => self.diagram = Some(diagram),
                        Err(err) => self.error = Some(format!("Diagram: {err}")),
                    }
                    self.result = Some(result);
                }
                Err(err) => self.error = Some(err.to_string()),
            },
            Err(message) => self.error = Some(message),
        }
    }

    fn build_inputs(&self) -> Result<CycleInputs, String> {
        let evap_si = parse_quantity(&self.evap_text, self.evap_mode.quantity())
            .map_err(|err| format!("Evaporator: {err}"))?;
        let cond_si = parse_quantity(&self.cond_text, self.cond_mode.quantity())
            .map_err(|err| format!("Condenser: {err}"))?;
        let superheat = parse_quantity(&self.superheat_text, Quantity::TemperatureDifference)
            .map_err(|err| format!("Superheat: {err}"))?;
        let subcooling = parse_quantity(&self.subcooling_text, Quantity::TemperatureDifference)
            .map_err(|err| format!("Subcooling: {err}"))?;
        let efficiency = parse_quantity(&self.efficiency_text, Quantity::Efficiency)
            .map_err(|err| format!("Efficiency: {err}"))?;

        let mass_flow = if self.mass_flow_text.trim().is_empty() {
            None
        } else {
            Some(
                parse_quantity(&self.mass_flow_text, Quantity::MassFlowRate)
                    .map_err(|err| format!("Mass flow: {err}"))?,
            )
        };

        Ok(CycleInputs {
            evaporator: self.evap_mode.boundary(evap_si),
            condenser: self.cond_mode.boundary(cond_si),
            superheat: dt_k(superheat),
            subcooling: dt_k(subcooling),
            isentropic_efficiency: efficiency,
            mass_flow: mass_flow.map(kgps),
        })
    }

    fn show_inputs(&mut self, ui: &mut egui::Ui) {
        ui.heading("Cycle Inputs");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Refrigerant:");
            self.picker
                .show(ui, "refrigerant_picker", &mut self.refrigerant);
        });

        ui.add_space(8.0);

        boundary_row(
            ui,
            "Evaporator",
            "evap_mode",
            &mut self.evap_mode,
            &mut self.evap_text,
        );
        boundary_row(
            ui,
            "Condenser",
            "cond_mode",
            &mut self.cond_mode,
            &mut self.cond_text,
        );

        ui.add_space(8.0);

        text_row(ui, "Superheat:", &mut self.superheat_text, "e.g. 5K or 9F");
        text_row(ui, "Subcooling:", &mut self.subcooling_text, "e.g. 5K or 9F");
        text_row(
            ui,
            "Isentropic efficiency:",
            &mut self.efficiency_text,
            "e.g. 0.8 or 80%",
        );
        text_row(
            ui,
            "Mass flow (optional):",
            &mut self.mass_flow_text,
            "e.g. 0.05kg/s or 5lbm/min",
        );

        ui.add_space(12.0);
        if ui.button("Calculate").clicked() {
            self.compute();
        }

        if let Some(error) = &self.error {
            ui.add_space(8.0);
            ui.colored_label(egui::Color32::from_rgb(200, 0, 0), error);
        }
    }

    fn show_results(&mut self, ui: &mut egui::Ui) {
        let Some(result) = self.result.clone() else {
            ui.heading("Vapor-Compression Cycle");
            ui.label("Enter cycle parameters on the left and press Calculate.");
            return;
        };

        ui.heading(format!("Results: {}", result.refrigerant.display_name()));
        ui.separator();

        self.show_state_table(ui, &result);

        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            ui.strong(format!("COP: {:.2}", result.cop));
            ui.separator();
            ui.label(format!(
                "Work: {:.1} kJ/kg",
                result.specific_work / 1.0e3
            ));
            ui.separator();
            ui.label(format!(
                "Refrigeration effect: {:.1} kJ/kg",
                result.refrigeration_effect / 1.0e3
            ));
            ui.separator();
            ui.label(format!(
                "Heat rejected: {:.1} kJ/kg",
                result.specific_heat_rejected / 1.0e3
            ));
        });

        if let Some(plant) = &result.plant {
            ui.horizontal_wrapped(|ui| {
                ui.label(format!(
                    "Compressor: {:.2} kW",
                    plant.compressor_power.value / 1.0e3
                ));
                ui.separator();
                ui.label(format!(
                    "Cooling: {:.2} kW ({:.2} tons)",
                    plant.cooling_capacity.value / 1.0e3,
                    plant.tons_of_refrigeration
                ));
                ui.separator();
                ui.label(format!("kW/ton: {:.2}", plant.kw_per_ton));
            });
        }

        ui.add_space(8.0);
        ui.separator();
        self.show_ph_plot(ui);
    }

    fn show_state_table(&self, ui: &mut egui::Ui, result: &CycleResult) {
        use egui_extras::{Column, TableBuilder};

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(160.0))
            .column(Column::initial(80.0))
            .column(Column::initial(80.0))
            .column(Column::initial(90.0))
            .column(Column::initial(90.0))
            .column(Column::initial(100.0))
            .column(Column::initial(70.0))
            .header(22.0, |mut header| {
                for title in [
                    "State",
                    "T [°C]",
                    "P [kPa]",
                    "ρ [kg/m³]",
                    "h [kJ/kg]",
                    "s [kJ/(kg·K)]",
                    "Quality",
                ] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for state in &result.states {
                    body.row(24.0, |mut row| {
                        row.col(|ui| {
                            ui.label(state.location.to_string());
                        });
                        row.col(|ui| {
                            ui.monospace(format!("{:.2}", state.temperature.value - 273.15));
                        });
                        row.col(|ui| {
                            ui.monospace(format!("{:.1}", state.pressure.value / 1.0e3));
                        });
                        row.col(|ui| {
                            ui.monospace(format!("{:.2}", state.density.value));
                        });
                        row.col(|ui| {
                            ui.monospace(format!("{:.2}", state.enthalpy / 1.0e3));
                        });
                        row.col(|ui| {
                            ui.monospace(format!("{:.4}", state.entropy / 1.0e3));
                        });
                        row.col(|ui| {
                            ui.monospace(
                                state
                                    .quality
                                    .map(|q| format!("{q:.3}"))
                                    .unwrap_or_else(|| "-".to_string()),
                            );
                        });
                    });
                }
            });
    }

    fn show_ph_plot(&self, ui: &mut egui::Ui) {
        let Some(diagram) = &self.diagram else {
            return;
        };

        // Pressure is plotted as log10(kPa); enthalpy stays linear in kJ/kg.
        let liquid: Vec<[f64; 2]> = diagram
            .dome
            .iter()
            .map(|point| {
                [
                    point.enthalpy_liquid / 1.0e3,
                    (point.pressure.value / 1.0e3).log10(),
                ]
            })
            .collect();
        let vapor: Vec<[f64; 2]> = diagram
            .dome
            .iter()
            .rev()
            .map(|point| {
                [
                    point.enthalpy_vapor / 1.0e3,
                    (point.pressure.value / 1.0e3).log10(),
                ]
            })
            .collect();

        // Liquid boundary up to the top, then vapor boundary back down.
        let mut dome_outline = liquid;
        dome_outline.extend(vapor);

        let cycle: Vec<[f64; 2]> = diagram
            .cycle_polyline()
            .into_iter()
            .map(|(h, p)| [h / 1.0e3, (p / 1.0e3).log10()])
            .collect();
        let corners: Vec<[f64; 2]> = diagram
            .cycle
            .iter()
            .map(|corner| {
                [
                    corner.enthalpy / 1.0e3,
                    (corner.pressure.value / 1.0e3).log10(),
                ]
            })
            .collect();

        Plot::new("ph_diagram")
            .legend(Legend::default())
            .x_axis_label("h [kJ/kg]")
            .y_axis_label("log10 P [kPa]")
            .show(ui, |plot_ui| {
                let dome_points: PlotPoints = dome_outline.into();
                plot_ui.line(Line::new(dome_points).name("saturation dome"));

                let cycle_points: PlotPoints = cycle.into();
                plot_ui.line(Line::new(cycle_points).name("cycle"));

                let corner_points: PlotPoints = corners.into();
                plot_ui.points(Points::new(corner_points).radius(4.0).name("states"));
            });
    }
}

impl eframe::App for VaporcycleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("inputs_panel")
            .min_width(300.0)
            .show(ctx, |ui| self.show_inputs(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.show_results(ui));
    }
}

fn boundary_row(
    ui: &mut egui::Ui,
    label: &str,
    id_salt: &str,
    mode: &mut BoundaryMode,
    text: &mut String,
) {
    ui.horizontal(|ui| {
        ui.label(format!("{label}:"));
        egui::ComboBox::from_id_salt(id_salt)
            .selected_text(mode.label())
            .width(110.0)
            .show_ui(ui, |ui| {
                for option in [BoundaryMode::Temperature, BoundaryMode::Pressure] {
                    ui.selectable_value(mode, option, option.label());
                }
            });
        ui.text_edit_singleline(text)
            .on_hover_text("e.g. -10C, 263.15K, 200kPa, 29.5psia");
    });
}

fn text_row(ui: &mut egui::Ui, label: &str, text: &mut String, hint: &str) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.text_edit_singleline(text).on_hover_text(hint);
    });
}
