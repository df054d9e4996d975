//! Deterministic property model for unit tests.
//!
//! Implements `PropertyModel` with closed-form fake-refrigerant correlations:
//! a logarithmic saturation curve, linear saturated enthalpies, and constant
//! specific heats on each single-phase branch. Values are invertible exactly,
//! which makes the cycle relations checkable without a CoolProp installation.

use std::sync::atomic::{AtomicUsize, Ordering};

use vcc_core::units::{Density, Pressure, Temperature, k, pa};
use vcc_fluids::{
    CriticalPoint, FluidError, FluidResult, PropertyModel, Refrigerant, SaturatedState,
    SpecEnthalpy, SpecEntropy, StateInput, ThermoState,
};

const P_REF: f64 = 1.0e5; // Pa
const T_REF: f64 = 200.0; // K, saturation temperature at P_REF
const SLOPE: f64 = 50.0; // K per e-fold of pressure
const T_CRIT: f64 = 400.0;

const CP_VAPOR: f64 = 1_000.0; // J/(kg·K)
const CP_LIQUID: f64 = 1_500.0;
const GAS_CONSTANT: f64 = 80.0; // J/(kg·K), for vapor density

pub struct TestModel {
    supported: bool,
    lookups: AtomicUsize,
}

impl TestModel {
    pub fn new() -> Self {
        Self {
            supported: true,
            lookups: AtomicUsize::new(0),
        }
    }

    /// A model that refuses every refrigerant, for whitelist tests.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            lookups: AtomicUsize::new(0),
        }
    }

    /// Number of property lookups performed so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    fn record(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    fn t_sat(p_pa: f64) -> f64 {
        T_REF + SLOPE * (p_pa / P_REF).ln()
    }

    fn p_sat(t_k: f64) -> f64 {
        P_REF * ((t_k - T_REF) / SLOPE).exp()
    }

    fn latent(t_sat: f64) -> f64 {
        200.0e3 - 500.0 * (t_sat - 250.0)
    }

    fn h_liquid_sat(t_sat: f64) -> f64 {
        200.0e3 + 2_000.0 * (t_sat - 250.0)
    }

    fn h_vapor_sat(t_sat: f64) -> f64 {
        Self::h_liquid_sat(t_sat) + Self::latent(t_sat)
    }

    fn s_liquid_sat(t_sat: f64) -> f64 {
        1_000.0 + 4.0 * (t_sat - 250.0)
    }

    fn s_vapor_sat(t_sat: f64) -> f64 {
        Self::s_liquid_sat(t_sat) + Self::latent(t_sat) / t_sat
    }

    fn rho_liquid_sat(t_sat: f64) -> f64 {
        1_400.0 - 0.8 * t_sat
    }

    fn rho_vapor_sat(p_pa: f64, t_sat: f64) -> f64 {
        p_pa / (GAS_CONSTANT * t_sat)
    }

    fn check_subcritical(p_pa: f64) -> FluidResult<f64> {
        let t_sat = Self::t_sat(p_pa);
        if t_sat >= T_CRIT {
            return Err(FluidError::OutOfRange {
                what: "pressure above the critical point",
            });
        }
        if t_sat <= 0.0 {
            return Err(FluidError::OutOfRange {
                what: "pressure below the saturation curve's range",
            });
        }
        Ok(t_sat)
    }
}

impl Default for TestModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyModel for TestModel {
    fn name(&self) -> &str {
        "TestModel"
    }

    fn supports(&self, _refrigerant: Refrigerant) -> bool {
        self.supported
    }

    fn state(&self, input: StateInput, refrigerant: Refrigerant) -> FluidResult<ThermoState> {
        self.record();
        match input {
            StateInput::PT { p, t } => ThermoState::from_pt(p, t, refrigerant),
            StateInput::PH { p, h } => {
                let t_sat = Self::check_subcritical(p.value)?;
                let h_f = Self::h_liquid_sat(t_sat);
                let h_g = Self::h_vapor_sat(t_sat);
                let t = if h > h_g {
                    t_sat + (h - h_g) / CP_VAPOR
                } else if h < h_f {
                    t_sat - (h_f - h) / CP_LIQUID
                } else {
                    return Err(FluidError::NotSupported {
                        what: "state is two-phase; use saturated_state",
                    });
                };
                ThermoState::from_pt(p, k(t), refrigerant)
            }
            StateInput::PS { p, s } => {
                let t_sat = Self::check_subcritical(p.value)?;
                let s_f = Self::s_liquid_sat(t_sat);
                let s_g = Self::s_vapor_sat(t_sat);
                let t = if s > s_g {
                    t_sat * ((s - s_g) / CP_VAPOR).exp()
                } else if s < s_f {
                    t_sat * ((s - s_f) / CP_LIQUID).exp()
                } else {
                    return Err(FluidError::NotSupported {
                        what: "state is two-phase; use saturated_state",
                    });
                };
                ThermoState::from_pt(p, k(t), refrigerant)
            }
        }
    }

    fn rho(&self, state: &ThermoState) -> FluidResult<Density> {
        self.record();
        use uom::si::mass_density::kilogram_per_cubic_meter;
        let t_sat = Self::t_sat(state.pressure().value);
        let t = state.temperature().value;
        let rho = if t >= t_sat {
            state.pressure().value / (GAS_CONSTANT * t)
        } else {
            1_400.0 - 0.8 * t
        };
        Ok(Density::new::<kilogram_per_cubic_meter>(rho))
    }

    fn h(&self, state: &ThermoState) -> FluidResult<SpecEnthalpy> {
        self.record();
        let t_sat = Self::t_sat(state.pressure().value);
        let t = state.temperature().value;
        Ok(if t >= t_sat {
            Self::h_vapor_sat(t_sat) + CP_VAPOR * (t - t_sat)
        } else {
            Self::h_liquid_sat(t_sat) - CP_LIQUID * (t_sat - t)
        })
    }

    fn s(&self, state: &ThermoState) -> FluidResult<SpecEntropy> {
        self.record();
        let t_sat = Self::t_sat(state.pressure().value);
        let t = state.temperature().value;
        Ok(if t >= t_sat {
            Self::s_vapor_sat(t_sat) + CP_VAPOR * (t / t_sat).ln()
        } else {
            Self::s_liquid_sat(t_sat) + CP_LIQUID * (t / t_sat).ln()
        })
    }

    fn saturation_pressure(
        &self,
        _refrigerant: Refrigerant,
        t: Temperature,
    ) -> FluidResult<Pressure> {
        self.record();
        if t.value >= T_CRIT {
            return Err(FluidError::OutOfRange {
                what: "temperature above the critical point",
            });
        }
        Ok(pa(Self::p_sat(t.value)))
    }

    fn saturation_temperature(
        &self,
        _refrigerant: Refrigerant,
        p: Pressure,
    ) -> FluidResult<Temperature> {
        self.record();
        let t_sat = Self::check_subcritical(p.value)?;
        Ok(k(t_sat))
    }

    fn saturated_state(
        &self,
        _refrigerant: Refrigerant,
        p: Pressure,
        quality: f64,
    ) -> FluidResult<SaturatedState> {
        self.record();
        if !(0.0..=1.0).contains(&quality) {
            return Err(FluidError::OutOfRange {
                what: "quality must be between 0 and 1",
            });
        }
        let t_sat = Self::check_subcritical(p.value)?;

        use uom::si::mass_density::kilogram_per_cubic_meter;
        let v_f = 1.0 / Self::rho_liquid_sat(t_sat);
        let v_g = 1.0 / Self::rho_vapor_sat(p.value, t_sat);
        let v = v_f + quality * (v_g - v_f);

        Ok(SaturatedState {
            temperature: k(t_sat),
            density: Density::new::<kilogram_per_cubic_meter>(1.0 / v),
            enthalpy: Self::h_liquid_sat(t_sat) + quality * Self::latent(t_sat),
            entropy: Self::s_liquid_sat(t_sat)
                + quality * (Self::s_vapor_sat(t_sat) - Self::s_liquid_sat(t_sat)),
        })
    }

    fn critical_point(&self, _refrigerant: Refrigerant) -> FluidResult<CriticalPoint> {
        self.record();
        Ok(CriticalPoint {
            temperature: k(T_CRIT),
            pressure: pa(Self::p_sat(T_CRIT)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturation_curve_roundtrips() {
        for t in [180.0, 200.0, 250.0, 300.0] {
            let p = TestModel::p_sat(t);
            let t_back = TestModel::t_sat(p);
            assert!((t_back - t).abs() < 1e-9);
        }
    }

    #[test]
    fn ph_inversion_is_exact_on_both_branches() {
        let model = TestModel::new();
        let p = pa(2.0e5);

        for t in [150.0, 340.0] {
            let state = ThermoState::from_pt(p, k(t), Refrigerant::R134a).unwrap();
            let h = model.h(&state).unwrap();
            let solved = model
                .state(StateInput::PH { p, h }, Refrigerant::R134a)
                .unwrap();
            assert!((solved.temperature().value - t).abs() < 1e-9, "t = {t}");
        }
    }

    #[test]
    fn ps_inversion_is_exact_on_the_vapor_branch() {
        let model = TestModel::new();
        let p = pa(2.0e5);
        let state = ThermoState::from_pt(p, k(320.0), Refrigerant::R134a).unwrap();
        let s = model.s(&state).unwrap();
        let solved = model
            .state(StateInput::PS { p, s }, Refrigerant::R134a)
            .unwrap();
        assert!((solved.temperature().value - 320.0).abs() < 1e-9);
    }

    #[test]
    fn two_phase_enthalpy_target_is_rejected() {
        let model = TestModel::new();
        let p = pa(1.0e5);
        let liquid = model
            .saturated_state(Refrigerant::R134a, p, 0.0)
            .unwrap();
        let vapor = model.saturated_state(Refrigerant::R134a, p, 1.0).unwrap();
        let h_mid = 0.5 * (liquid.enthalpy + vapor.enthalpy);

        let result = model.state(StateInput::PH { p, h: h_mid }, Refrigerant::R134a);
        assert!(matches!(result, Err(FluidError::NotSupported { .. })));
    }

    #[test]
    fn lookup_counter_tracks_calls() {
        let model = TestModel::new();
        assert_eq!(model.lookup_count(), 0);
        let _ = model.saturation_pressure(Refrigerant::R134a, k(250.0));
        let _ = model.critical_point(Refrigerant::R134a);
        assert_eq!(model.lookup_count(), 2);
    }
}
