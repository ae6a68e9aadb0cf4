//! Statutory accrual rules and their YAML loader.
//!
//! The legal parameters of the Uruguayan accrual rules are fixed by statute,
//! so [`AccrualRules::default`] is what production code uses. A YAML override
//! file is supported so that hypothetical scenarios (a changed base-day count,
//! a different batch size) can be exercised without recompiling.
//!
//! # Example
//!
//! ```
//! use accrual_engine::rules::AccrualRules;
//!
//! let rules = AccrualRules::default();
//! assert_eq!(rules.base_vacation_days, 20);
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The statutory parameters driving every accrual calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccrualRules {
    /// Base vacation days generated per full year of service (20).
    pub base_vacation_days: u32,
    /// One extra vacation day is granted per this many years of service (4).
    pub extra_day_block_years: u32,
    /// Vacation days generated per 30 calendar days worked when the year is
    /// partial (1.66).
    pub proportional_days_per_month: Decimal,
    /// The fixed month length used for daily-wage conversion (30). Actual
    /// days-in-month are never used.
    pub days_per_month: u32,
    /// Divisor applied to a semester's taxable earnings to obtain the
    /// aguinaldo amount (12).
    pub aguinaldo_divisor: u32,
    /// Number of employees recalculated concurrently during bulk runs (3).
    /// Backpressure on the data layer, not a correctness requirement.
    pub batch_size: usize,
}

impl Default for AccrualRules {
    fn default() -> Self {
        Self {
            base_vacation_days: 20,
            extra_day_block_years: 4,
            proportional_days_per_month: Decimal::new(166, 2),
            days_per_month: 30,
            aguinaldo_divisor: 12,
            batch_size: 3,
        }
    }
}

impl AccrualRules {
    /// Loads rules from a YAML file, falling back to defaults for any field
    /// the file omits.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RulesNotFound`] if the file does not exist and
    /// [`EngineError::RulesParseError`] if it cannot be parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path_ref = path.as_ref();
        let contents =
            std::fs::read_to_string(path_ref).map_err(|_| EngineError::RulesNotFound {
                path: path_ref.display().to_string(),
            })?;

        serde_yaml::from_str(&contents).map_err(|e| EngineError::RulesParseError {
            path: path_ref.display().to_string(),
            message: e.to_string(),
        })
    }

    /// The fixed month length as a `Decimal`, for wage arithmetic.
    pub fn days_per_month_decimal(&self) -> Decimal {
        Decimal::from(self.days_per_month)
    }

    /// The aguinaldo divisor as a `Decimal`.
    pub fn aguinaldo_divisor_decimal(&self) -> Decimal {
        Decimal::from(self.aguinaldo_divisor)
    }
}
