//! CoolProp-based refrigerant property model.

use crate::error::{FluidError, FluidResult};
use crate::model::{CriticalPoint, PropertyModel, SaturatedState, validation};
use crate::refrigerant::Refrigerant;
use crate::state::{SpecEnthalpy, SpecEntropy, StateInput, ThermoState};
use rfluids::prelude::*;
use rfluids::substance::Pure;
use uom::si::mass_density::kilogram_per_cubic_meter;
use vcc_core::units::{Density, Pressure, Temperature, k, pa};

/// Offset used to step off the saturation line before a P-T query.
///
/// P-T coordinates are degenerate on the dome itself, so single-phase
/// solves bracket from just beside it.
const T_EPS: f64 = 1e-2;

/// Initial bracket-expansion step for isobaric solves [K].
const EXPAND_STEP: f64 = 10.0;

/// CoolProp backend for refrigerant properties.
///
/// Thread-safe: rfluids Fluid instances are created per call and never shared.
pub struct CoolPropModel {}

impl CoolPropModel {
    /// Create a new CoolProp model.
    pub fn new() -> Self {
        Self {}
    }

    fn pure_for(refrigerant: Refrigerant) -> FluidResult<Pure> {
        refrigerant.rfluids_pure().ok_or(FluidError::NotSupported {
            what: "refrigerant not available in the CoolProp backend",
        })
    }

    /// Create a Fluid instance at given P,T state.
    fn fluid_at_pt(&self, pure: Pure, p_pa: f64, t_k: f64) -> FluidResult<Fluid> {
        Fluid::from(pure)
            .in_state(FluidInput::pressure(p_pa), FluidInput::temperature(t_k))
            .map_err(|e| FluidError::Backend {
                message: format!("rfluids error at P={} Pa, T={} K: {}", p_pa, t_k, e),
            })
    }

    /// Create a Fluid instance on the saturation line at given P and quality.
    fn fluid_at_pq(&self, pure: Pure, p_pa: f64, quality: f64) -> FluidResult<Fluid> {
        Fluid::from(pure)
            .in_state(FluidInput::pressure(p_pa), FluidInput::quality(quality))
            .map_err(|e| FluidError::Backend {
                message: format!("rfluids error at P={} Pa, Q={}: {}", p_pa, quality, e),
            })
    }

    /// Create a Fluid instance on the saturation line at given T and quality.
    fn fluid_at_tq(&self, pure: Pure, t_k: f64, quality: f64) -> FluidResult<Fluid> {
        Fluid::from(pure)
            .in_state(FluidInput::temperature(t_k), FluidInput::quality(quality))
            .map_err(|e| FluidError::Backend {
                message: format!("rfluids error at T={} K, Q={}: {}", t_k, quality, e),
            })
    }

    fn enthalpy_of(fluid: &mut Fluid) -> FluidResult<f64> {
        fluid.enthalpy().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting enthalpy: {}", e),
        })
    }

    fn entropy_of(fluid: &mut Fluid) -> FluidResult<f64> {
        fluid.entropy().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting entropy: {}", e),
        })
    }

    fn density_of(fluid: &mut Fluid) -> FluidResult<f64> {
        fluid.density().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting density: {}", e),
        })
    }

    fn temperature_of(fluid: &mut Fluid) -> FluidResult<f64> {
        fluid.temperature().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting temperature: {}", e),
        })
    }

    fn pressure_of(fluid: &mut Fluid) -> FluidResult<f64> {
        fluid.pressure().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting pressure: {}", e),
        })
    }

    /// Solve for temperature given pressure and enthalpy.
    ///
    /// Works on single-phase branches only; two-phase targets must go through
    /// `saturated_state`, since P-T coordinates cannot represent them.
    fn solve_t_from_ph(
        &self,
        refrigerant: Refrigerant,
        pure: Pure,
        p_pa: f64,
        h_target: f64,
    ) -> FluidResult<f64> {
        self.solve_t_on_isobar(refrigerant, pure, p_pa, h_target, Self::enthalpy_of)
    }

    /// Solve for temperature given pressure and specific entropy.
    fn solve_t_from_ps(
        &self,
        refrigerant: Refrigerant,
        pure: Pure,
        p_pa: f64,
        s_target: f64,
    ) -> FluidResult<f64> {
        self.solve_t_on_isobar(refrigerant, pure, p_pa, s_target, Self::entropy_of)
    }

    /// Find T on the isobar `p_pa` such that `prop(P, T)` equals `target`.
    ///
    /// Both enthalpy and entropy increase monotonically with temperature at
    /// fixed pressure, with a jump across the dome, so the solve first picks
    /// the branch from the saturated-liquid/vapor values and then runs an
    /// expanding bracket followed by bisection. The expansion backs off when
    /// the backend rejects a temperature (outside its validity range).
    fn solve_t_on_isobar(
        &self,
        refrigerant: Refrigerant,
        pure: Pure,
        p_pa: f64,
        target: f64,
        prop: fn(&mut Fluid) -> FluidResult<f64>,
    ) -> FluidResult<f64> {
        const MAX_EXPANSIONS: usize = 60;
        const MAX_ITER: usize = 100;

        if !target.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "solve target must be finite",
            });
        }

        let t_sat = self
            .saturation_temperature(refrigerant, pa(p_pa))
            .map_err(|_| FluidError::NotSupported {
                what: "single-phase solve above the critical pressure",
            })?
            .value;

        let mut sat_liquid = self.fluid_at_pq(pure, p_pa, 0.0)?;
        let mut sat_vapor = self.fluid_at_pq(pure, p_pa, 1.0)?;
        let v_liquid = prop(&mut sat_liquid)?;
        let v_vapor = prop(&mut sat_vapor)?;

        if target >= v_liquid && target <= v_vapor {
            return Err(FluidError::NotSupported {
                what: "state is two-phase; use saturated_state",
            });
        }

        // Pick the branch and walk away from the dome until the target is
        // bracketed. `sign` is +1 on the vapor branch, -1 on the liquid branch.
        let (mut t_near, sign) = if target > v_vapor {
            (t_sat + T_EPS, 1.0)
        } else {
            (t_sat - T_EPS, -1.0)
        };

        let mut fluid = self.fluid_at_pt(pure, p_pa, t_near)?;
        let v_near = prop(&mut fluid)?;
        if (v_near - target).abs() <= solve_tolerance(target) {
            return Ok(t_near);
        }

        let mut step = EXPAND_STEP;
        let mut t_far = None;
        for _ in 0..MAX_EXPANSIONS {
            let t_try = t_near + sign * step;
            if t_try <= 1.0 {
                break;
            }
            match self.fluid_at_pt(pure, p_pa, t_try) {
                Ok(mut f) => {
                    let v_try = prop(&mut f)?;
                    if (v_try - target) * sign >= 0.0 {
                        t_far = Some(t_try);
                        break;
                    }
                    t_near = t_try;
                    step *= 2.0;
                }
                Err(_) => {
                    // Stepped past the backend's range; shrink toward it.
                    step *= 0.5;
                    if step < 0.5 {
                        break;
                    }
                }
            }
        }

        let Some(t_far) = t_far else {
            return Err(FluidError::OutOfRange {
                what: "target outside valid range for given pressure",
            });
        };

        let (mut t_low, mut t_high) = if sign > 0.0 {
            (t_near, t_far)
        } else {
            (t_far, t_near)
        };

        // Bisection
        for _ in 0..MAX_ITER {
            let t_mid = 0.5 * (t_low + t_high);
            let mut fluid_mid = self.fluid_at_pt(pure, p_pa, t_mid)?;
            let v_mid = prop(&mut fluid_mid)?;

            if (v_mid - target).abs() < solve_tolerance(target) {
                return Ok(t_mid);
            }

            if v_mid < target {
                t_low = t_mid;
            } else {
                t_high = t_mid;
            }

            if t_high - t_low < 1e-7 {
                return Ok(0.5 * (t_low + t_high));
            }
        }

        // Return best estimate if we hit max iterations
        Ok(0.5 * (t_low + t_high))
    }
}

/// Tolerance: absolute or relative, whichever is looser.
fn solve_tolerance(target: f64) -> f64 {
    1.0_f64.max(target.abs() * 1e-6)
}

impl Default for CoolPropModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyModel for CoolPropModel {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn supports(&self, refrigerant: Refrigerant) -> bool {
        refrigerant.rfluids_pure().is_some()
    }

    fn state(&self, input: StateInput, refrigerant: Refrigerant) -> FluidResult<ThermoState> {
        let pure = Self::pure_for(refrigerant)?;

        match input {
            StateInput::PT { p, t } => {
                validation::validate_pressure(p)?;
                validation::validate_temperature(t)?;

                // Probe the backend so invalid states fail here, not later.
                let _fluid = self.fluid_at_pt(pure, p.value, t.value)?;

                ThermoState::from_pt(p, t, refrigerant)
            }
            StateInput::PH { p, h } => {
                validation::validate_pressure(p)?;
                validation::validate_enthalpy(h)?;

                let t_k = self.solve_t_from_ph(refrigerant, pure, p.value, h)?;
                ThermoState::from_pt(p, k(t_k), refrigerant)
            }
            StateInput::PS { p, s } => {
                validation::validate_pressure(p)?;
                validation::validate_entropy(s)?;

                let t_k = self.solve_t_from_ps(refrigerant, pure, p.value, s)?;
                ThermoState::from_pt(p, k(t_k), refrigerant)
            }
        }
    }

    fn rho(&self, state: &ThermoState) -> FluidResult<Density> {
        let pure = Self::pure_for(state.refrigerant())?;
        let mut fluid = self.fluid_at_pt(pure, state.pressure().value, state.temperature().value)?;
        let rho_val = Self::density_of(&mut fluid)?;

        let rho = Density::new::<kilogram_per_cubic_meter>(rho_val);
        validation::validate_density(rho)?;
        Ok(rho)
    }

    fn h(&self, state: &ThermoState) -> FluidResult<SpecEnthalpy> {
        let pure = Self::pure_for(state.refrigerant())?;
        let mut fluid = self.fluid_at_pt(pure, state.pressure().value, state.temperature().value)?;
        let h = Self::enthalpy_of(&mut fluid)?;

        validation::validate_enthalpy(h)?;
        Ok(h)
    }

    fn s(&self, state: &ThermoState) -> FluidResult<SpecEntropy> {
        let pure = Self::pure_for(state.refrigerant())?;
        let mut fluid = self.fluid_at_pt(pure, state.pressure().value, state.temperature().value)?;
        let s = Self::entropy_of(&mut fluid)?;

        validation::validate_entropy(s)?;
        Ok(s)
    }

    fn saturation_pressure(
        &self,
        refrigerant: Refrigerant,
        t: Temperature,
    ) -> FluidResult<Pressure> {
        validation::validate_temperature(t)?;
        let pure = Self::pure_for(refrigerant)?;

        let mut fluid = self.fluid_at_tq(pure, t.value, 1.0)?;
        let p_val = Self::pressure_of(&mut fluid)?;

        let p = pa(p_val);
        validation::validate_pressure(p)?;
        Ok(p)
    }

    fn saturation_temperature(
        &self,
        refrigerant: Refrigerant,
        p: Pressure,
    ) -> FluidResult<Temperature> {
        validation::validate_pressure(p)?;
        let pure = Self::pure_for(refrigerant)?;

        let mut fluid = self.fluid_at_pq(pure, p.value, 1.0)?;
        let t_val = Self::temperature_of(&mut fluid)?;

        let t = k(t_val);
        validation::validate_temperature(t)?;
        Ok(t)
    }

    fn saturated_state(
        &self,
        refrigerant: Refrigerant,
        p: Pressure,
        quality: f64,
    ) -> FluidResult<SaturatedState> {
        validation::validate_pressure(p)?;
        validation::validate_quality(quality)?;
        let pure = Self::pure_for(refrigerant)?;

        let mut fluid = self.fluid_at_pq(pure, p.value, quality)?;
        let t_val = Self::temperature_of(&mut fluid)?;
        let rho_val = Self::density_of(&mut fluid)?;
        let h = Self::enthalpy_of(&mut fluid)?;
        let s = Self::entropy_of(&mut fluid)?;

        let temperature = k(t_val);
        let density = Density::new::<kilogram_per_cubic_meter>(rho_val);
        validation::validate_temperature(temperature)?;
        validation::validate_density(density)?;
        validation::validate_enthalpy(h)?;
        validation::validate_entropy(s)?;

        Ok(SaturatedState {
            temperature,
            density,
            enthalpy: h,
            entropy: s,
        })
    }

    fn critical_point(&self, refrigerant: Refrigerant) -> FluidResult<CriticalPoint> {
        let pure = Self::pure_for(refrigerant)?;

        let mut fluid = Fluid::from(pure);
        let t_crit = fluid.critical_temperature().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting critical temperature: {}", e),
        })?;
        let p_crit = fluid.critical_pressure().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting critical pressure: {}", e),
        })?;

        let critical = CriticalPoint {
            temperature: k(t_crit),
            pressure: pa(p_crit),
        };
        validation::validate_temperature(critical.temperature)?;
        validation::validate_pressure(critical.pressure)?;
        Ok(critical)
    }
}
