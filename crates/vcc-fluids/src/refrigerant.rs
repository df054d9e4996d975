//! Refrigerant definitions.

/// Refrigerants supported by the vapor-compression cycle calculator.
///
/// Covers the common HFC/HFO working fluids plus the natural refrigerants
/// (propane, isobutane, ammonia, carbon dioxide) under their ASHRAE numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refrigerant {
    /// R22 (chlorodifluoromethane, legacy HCFC)
    R22,
    /// R32 (difluoromethane)
    R32,
    /// R125 (pentafluoroethane)
    R125,
    /// R134a (tetrafluoroethane)
    R134a,
    /// R152a (difluoroethane)
    R152a,
    /// R245fa (pentafluoropropane)
    R245fa,
    /// R290 (propane)
    R290,
    /// R404A (R125/143a/134a blend)
    R404A,
    /// R407C (R32/125/134a blend)
    R407C,
    /// R410A (R32/125 blend)
    R410A,
    /// R507A (R125/143a azeotrope)
    R507A,
    /// R600a (isobutane)
    R600a,
    /// R717 (ammonia)
    R717,
    /// R744 (carbon dioxide)
    R744,
    /// R1234yf (tetrafluoropropene)
    R1234yf,
}

impl Refrigerant {
    pub const ALL: [Refrigerant; 15] = [
        Refrigerant::R22,
        Refrigerant::R32,
        Refrigerant::R125,
        Refrigerant::R134a,
        Refrigerant::R152a,
        Refrigerant::R245fa,
        Refrigerant::R290,
        Refrigerant::R404A,
        Refrigerant::R407C,
        Refrigerant::R410A,
        Refrigerant::R507A,
        Refrigerant::R600a,
        Refrigerant::R717,
        Refrigerant::R744,
        Refrigerant::R1234yf,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Refrigerant::R22 => "R22",
            Refrigerant::R32 => "R32",
            Refrigerant::R125 => "R125",
            Refrigerant::R134a => "R134a",
            Refrigerant::R152a => "R152a",
            Refrigerant::R245fa => "R245fa",
            Refrigerant::R290 => "R290",
            Refrigerant::R404A => "R404A",
            Refrigerant::R407C => "R407C",
            Refrigerant::R410A => "R410A",
            Refrigerant::R507A => "R507A",
            Refrigerant::R600a => "R600a",
            Refrigerant::R717 => "R717",
            Refrigerant::R744 => "R744",
            Refrigerant::R1234yf => "R1234yf",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Refrigerant::R22 => "R22",
            Refrigerant::R32 => "R32",
            Refrigerant::R125 => "R125",
            Refrigerant::R134a => "R134a",
            Refrigerant::R152a => "R152a",
            Refrigerant::R245fa => "R245fa",
            Refrigerant::R290 => "R290 (Propane)",
            Refrigerant::R404A => "R404A",
            Refrigerant::R407C => "R407C",
            Refrigerant::R410A => "R410A",
            Refrigerant::R507A => "R507A",
            Refrigerant::R600a => "R600a (Isobutane)",
            Refrigerant::R717 => "R717 (Ammonia)",
            Refrigerant::R744 => "R744 (CO2)",
            Refrigerant::R1234yf => "R1234yf",
        }
    }

    /// Get CoolProp fluid name for this refrigerant.
    ///
    /// Returns `None` if the backend has no matching fluid.
    pub fn coolprop_name(&self) -> Option<&'static str> {
        match self {
            Refrigerant::R22 => Some("R22"),
            Refrigerant::R32 => Some("R32"),
            Refrigerant::R125 => Some("R125"),
            Refrigerant::R134a => Some("R134a"),
            Refrigerant::R152a => Some("R152a"),
            Refrigerant::R245fa => Some("R245fa"),
            Refrigerant::R290 => Some("n-Propane"),
            Refrigerant::R404A => Some("R404A"),
            Refrigerant::R407C => Some("R407C"),
            Refrigerant::R410A => Some("R410A"),
            Refrigerant::R507A => Some("R507A"),
            Refrigerant::R600a => Some("Isobutane"),
            Refrigerant::R717 => Some("Ammonia"),
            Refrigerant::R744 => Some("CarbonDioxide"),
            Refrigerant::R1234yf => Some("R1234yf"),
        }
    }

    /// Map to rfluids Pure enum (internal use for CoolProp backend).
    ///
    /// Returns `None` for refrigerants not available in rfluids.
    pub(crate) fn rfluids_pure(&self) -> Option<rfluids::substance::Pure> {
        use rfluids::substance::Pure;
        match self {
            Refrigerant::R22 => Some(Pure::R22),
            Refrigerant::R32 => Some(Pure::R32),
            Refrigerant::R125 => Some(Pure::R125),
            Refrigerant::R134a => Some(Pure::R134a),
            Refrigerant::R152a => Some(Pure::R152a),
            Refrigerant::R245fa => Some(Pure::R245fa),
            Refrigerant::R290 => Some(Pure::nPropane),
            Refrigerant::R404A => Some(Pure::R404A),
            Refrigerant::R407C => Some(Pure::R407C),
            Refrigerant::R410A => Some(Pure::R410A),
            Refrigerant::R507A => Some(Pure::R507A),
            Refrigerant::R600a => Some(Pure::Isobutane),
            Refrigerant::R717 => Some(Pure::Ammonia),
            Refrigerant::R744 => Some(Pure::CarbonDioxide),
            Refrigerant::R1234yf => Some(Pure::R1234yf),
        }
    }
}

impl std::str::FromStr for Refrigerant {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "R22" | "R-22" => Ok(Refrigerant::R22),
            "R32" | "R-32" => Ok(Refrigerant::R32),
            "R125" | "R-125" => Ok(Refrigerant::R125),
            "R134A" | "R-134A" | "134A" => Ok(Refrigerant::R134a),
            "R152A" | "R-152A" => Ok(Refrigerant::R152a),
            "R245FA" | "R-245FA" => Ok(Refrigerant::R245fa),
            "R290" | "R-290" | "PROPANE" => Ok(Refrigerant::R290),
            "R404A" | "R-404A" => Ok(Refrigerant::R404A),
            "R407C" | "R-407C" => Ok(Refrigerant::R407C),
            "R410A" | "R-410A" | "410A" => Ok(Refrigerant::R410A),
            "R507A" | "R-507A" => Ok(Refrigerant::R507A),
            "R600A" | "R-600A" | "ISOBUTANE" => Ok(Refrigerant::R600a),
            "R717" | "R-717" | "NH3" | "AMMONIA" => Ok(Refrigerant::R717),
            "R744" | "R-744" | "CO2" | "CARBON DIOXIDE" => Ok(Refrigerant::R744),
            "R1234YF" | "R-1234YF" => Ok(Refrigerant::R1234yf),
            _ => Err("unknown refrigerant"),
        }
    }
}

impl std::fmt::Display for Refrigerant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
