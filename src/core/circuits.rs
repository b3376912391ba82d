//! Ohm's law, LED series resistors and resistive dividers.

use crate::core::e_series::find_nearest;
use crate::domain::model::Series;
use crate::utils::error::{ResistorError, Result};
use crate::utils::validation::validate_positive;
use serde::{Deserialize, Serialize};

/// Known quantities; leave unknowns as `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OhmsLawInput {
    pub volts: Option<f64>,
    pub amps: Option<f64>,
    pub ohms: Option<f64>,
    pub watts: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhmsLawResult {
    pub volts: f64,
    pub amps: f64,
    pub ohms: f64,
    pub watts: f64,
}

/// Fills in the two unknowns from any two known quantities. When more than
/// two are given, the first pair in V·I, V·R, V·P, I·R, I·P, R·P order is used.
pub fn solve_ohms_law(input: OhmsLawInput) -> Result<OhmsLawResult> {
    let OhmsLawInput {
        volts,
        amps,
        ohms,
        watts,
    } = input;

    let result = match (volts, amps, ohms, watts) {
        (Some(v), Some(i), _, _) => OhmsLawResult {
            volts: v,
            amps: i,
            ohms: v / i,
            watts: v * i,
        },
        (Some(v), None, Some(r), _) => OhmsLawResult {
            volts: v,
            amps: v / r,
            ohms: r,
            watts: v * v / r,
        },
        (Some(v), None, None, Some(p)) => OhmsLawResult {
            volts: v,
            amps: p / v,
            ohms: v * v / p,
            watts: p,
        },
        (None, Some(i), Some(r), _) => OhmsLawResult {
            volts: i * r,
            amps: i,
            ohms: r,
            watts: i * i * r,
        },
        (None, Some(i), None, Some(p)) => OhmsLawResult {
            volts: p / i,
            amps: i,
            ohms: p / (i * i),
            watts: p,
        },
        (None, None, Some(r), Some(p)) => OhmsLawResult {
            volts: (p * r).sqrt(),
            amps: (p / r).sqrt(),
            ohms: r,
            watts: p,
        },
        _ => {
            let given = [volts, amps, ohms, watts].iter().filter(|q| q.is_some()).count();
            return Err(ResistorError::InsufficientInputs { given });
        }
    };

    tracing::debug!(?input, ?result, "solved Ohm's law");
    Ok(result)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedResistor {
    pub ohms: f64,
    /// Power dissipated in the resistor.
    pub watts: f64,
    pub nearest_e24: f64,
}

/// Series resistor for an LED driven from `supply_volts` at `forward_amps`.
pub fn led_resistor(supply_volts: f64, forward_volts: f64, forward_amps: f64) -> Result<LedResistor> {
    validate_positive("forward_amps", forward_amps)?;
    if supply_volts <= forward_volts {
        return Err(ResistorError::InvalidMagnitude {
            field: "supply_volts".to_string(),
            value: supply_volts,
        });
    }

    let drop = supply_volts - forward_volts;
    let ohms = drop / forward_amps;
    Ok(LedResistor {
        ohms,
        watts: drop * forward_amps,
        nearest_e24: find_nearest(ohms, Series::E24).value,
    })
}

/// Unloaded divider output `vin × r2 / (r1 + r2)`; 0 when both resistors are 0.
pub fn divider_output(vin: f64, r1: f64, r2: f64) -> f64 {
    if r1 + r2 == 0.0 {
        return 0.0;
    }
    vin * (r2 / (r1 + r2))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividerSolution {
    pub r2: f64,
    pub nearest_e24: f64,
    /// Output with `nearest_e24` fitted instead of the exact R2.
    pub actual_vout: f64,
}

/// Bottom resistor that produces `vout` from `vin` with top resistor `r1`.
pub fn divider_required_r2(vin: f64, vout: f64, r1: f64) -> Result<DividerSolution> {
    validate_positive("vout", vout)?;
    validate_positive("r1", r1)?;
    if vout >= vin {
        return Err(ResistorError::InvalidMagnitude {
            field: "vout".to_string(),
            value: vout,
        });
    }

    let r2 = vout * r1 / (vin - vout);
    let nearest_e24 = find_nearest(r2, Series::E24).value;
    Ok(DividerSolution {
        r2,
        nearest_e24,
        actual_vout: divider_output(vin, r1, nearest_e24),
    })
}
