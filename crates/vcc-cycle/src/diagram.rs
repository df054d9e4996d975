//! Pressure-enthalpy diagram data.
//!
//! The cycle model only produces chart *data*: saturation dome samples plus
//! the four cycle corners. Rendering (log pressure axis, linear enthalpy)
//! belongs to the shells.

use crate::error::CycleError;
use crate::point::CycleLocation;
use crate::result::CycleResult;
use vcc_core::units::{Pressure, pa};
use vcc_fluids::{PropertyModel, Refrigerant, SpecEnthalpy};

/// One sample of the saturation dome.
#[derive(Debug, Clone, PartialEq)]
pub struct DomePoint {
    pub pressure: Pressure,
    pub enthalpy_liquid: SpecEnthalpy,
    pub enthalpy_vapor: SpecEnthalpy,
}

/// A cycle state point projected onto the p-h plane.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleCorner {
    pub location: CycleLocation,
    pub pressure: Pressure,
    pub enthalpy: SpecEnthalpy,
}

/// Chart data for one computed cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct PhDiagram {
    pub refrigerant: Refrigerant,

    /// Saturation dome on a log-spaced pressure grid, lowest pressure first.
    pub dome: Vec<DomePoint>,

    /// Cycle corners in traversal order 1 → 2 → 3 → 4.
    pub cycle: Vec<CycleCorner>,
}

impl PhDiagram {
    /// Closed cycle polyline as (enthalpy, pressure) pairs, ready to plot.
    pub fn cycle_polyline(&self) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = self
            .cycle
            .iter()
            .map(|corner| (corner.enthalpy, corner.pressure.value))
            .collect();
        if let Some(first) = points.first().copied() {
            points.push(first);
        }
        points
    }
}

/// Fraction of the critical pressure where the dome sweep stops.
///
/// Saturation queries get numerically fragile immediately below the critical
/// point.
const DOME_TOP_FRACTION: f64 = 0.98;

/// Fraction of the evaporating pressure where the dome sweep starts.
const DOME_BOTTOM_FRACTION: f64 = 0.5;

/// Build pressure-enthalpy diagram data for a computed cycle.
///
/// `samples` is the number of dome pressure levels (at least 2).
pub fn ph_diagram(
    model: &dyn PropertyModel,
    result: &CycleResult,
    samples: usize,
) -> Result<PhDiagram, CycleError> {
    if samples < 2 {
        return Err(CycleError::InvalidInput {
            field: "samples",
            reason: "dome sweep needs at least 2 points",
        });
    }

    let refrigerant = result.refrigerant;
    let critical = model.critical_point(refrigerant)?;

    let p_low = result.state(CycleLocation::EvaporatorExit).pressure.value * DOME_BOTTOM_FRACTION;
    let p_high = critical.pressure.value * DOME_TOP_FRACTION;
    if p_low <= 0.0 || p_low >= p_high {
        return Err(CycleError::InfeasibleCycle {
            reason: "cycle pressures leave no room for a saturation dome sweep",
        });
    }

    let mut dome = Vec::with_capacity(samples);
    for p_val in log_spaced(p_low, p_high, samples) {
        let p = pa(p_val);
        let liquid = model.saturated_state(refrigerant, p, 0.0)?;
        let vapor = model.saturated_state(refrigerant, p, 1.0)?;
        dome.push(DomePoint {
            pressure: p,
            enthalpy_liquid: liquid.enthalpy,
            enthalpy_vapor: vapor.enthalpy,
        });
    }

    let cycle = CycleLocation::ALL
        .iter()
        .map(|&location| {
            let state = result.state(location);
            CycleCorner {
                location,
                pressure: state.pressure,
                enthalpy: state.enthalpy,
            }
        })
        .collect();

    Ok(PhDiagram {
        refrigerant,
        dome,
        cycle,
    })
}

/// Logarithmically spaced points from `start` to `end`, endpoints exact.
fn log_spaced(start: f64, end: f64, num_points: usize) -> Vec<f64> {
    let mut points = Vec::with_capacity(num_points);
    let log_start = start.ln();
    let log_end = end.ln();
    let log_delta = (log_end - log_start) / (num_points - 1) as f64;

    for i in 0..num_points {
        points.push((log_start + i as f64 * log_delta).exp());
    }

    points[0] = start;
    points[num_points - 1] = end;
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{BoundarySpec, CycleInputs};
    use crate::solve::compute_cycle;
    use crate::test_support::TestModel;
    use vcc_core::units::{dt_k, k};
    use vcc_fluids::Refrigerant;

    fn computed_cycle(model: &TestModel) -> CycleResult {
        let inputs = CycleInputs {
            evaporator: BoundarySpec::SaturationTemperature(k(200.0)),
            condenser: BoundarySpec::SaturationTemperature(k(280.0)),
            superheat: dt_k(5.0),
            subcooling: dt_k(5.0),
            isentropic_efficiency: 0.8,
            mass_flow: None,
        };
        compute_cycle(model, Refrigerant::R134a, &inputs).unwrap()
    }

    #[test]
    fn dome_pressures_increase_and_stay_subcritical() {
        let model = TestModel::new();
        let result = computed_cycle(&model);
        let diagram = ph_diagram(&model, &result, 40).unwrap();

        assert_eq!(diagram.dome.len(), 40);
        let critical = model.critical_point(Refrigerant::R134a).unwrap();
        for pair in diagram.dome.windows(2) {
            assert!(pair[0].pressure.value < pair[1].pressure.value);
        }
        assert!(diagram.dome.last().unwrap().pressure.value < critical.pressure.value);
    }

    #[test]
    fn dome_liquid_enthalpy_stays_below_vapor() {
        let model = TestModel::new();
        let result = computed_cycle(&model);
        let diagram = ph_diagram(&model, &result, 25).unwrap();

        for point in &diagram.dome {
            assert!(point.enthalpy_liquid < point.enthalpy_vapor);
        }
    }

    #[test]
    fn cycle_corners_match_the_result_states() {
        let model = TestModel::new();
        let result = computed_cycle(&model);
        let diagram = ph_diagram(&model, &result, 10).unwrap();

        assert_eq!(diagram.cycle.len(), 4);
        for corner in &diagram.cycle {
            let state = result.state(corner.location);
            assert_eq!(corner.enthalpy, state.enthalpy);
            assert_eq!(corner.pressure, state.pressure);
        }
    }

    #[test]
    fn polyline_is_closed() {
        let model = TestModel::new();
        let result = computed_cycle(&model);
        let diagram = ph_diagram(&model, &result, 10).unwrap();

        let polyline = diagram.cycle_polyline();
        assert_eq!(polyline.len(), 5);
        assert_eq!(polyline.first(), polyline.last());
    }

    #[test]
    fn too_few_samples_are_rejected() {
        let model = TestModel::new();
        let result = computed_cycle(&model);
        let err = ph_diagram(&model, &result, 1).unwrap_err();
        assert!(matches!(err, CycleError::InvalidInput { .. }));
    }

    #[test]
    fn log_spacing_hits_endpoints_exactly() {
        let points = log_spaced(1.0e5, 4.0e6, 7);
        assert_eq!(points[0], 1.0e5);
        assert_eq!(points[6], 4.0e6);
        let mid_ratio = points[1] / points[0];
        for pair in points.windows(2) {
            let ratio = pair[1] / pair[0];
            assert!((ratio - mid_ratio).abs() < 1e-9 * mid_ratio);
        }
    }
}
