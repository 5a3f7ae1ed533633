//! Configuration for [`NormalTransform`](super::NormalTransform).
//!
//! Besides serde, a config can be read from a parameter string of
//! comma-separated `key=value` pairs:
//!
//! ```
//! use cofactor::normals::{NormalMethod, NormalTransformConfig};
//!
//! let config = NormalTransformConfig::parse("method=inverse_transpose, normalize=false").unwrap();
//! assert_eq!(config.method, NormalMethod::InverseTranspose);
//! assert!(!config.normalize);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::numerics::types::matrix4::SINGULAR_EPSILON;
use crate::numerics::NumericsError;

/// Which matrix is used to carry normals through a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalMethod {
    /// `cofactor(M)`: total, orientation preserving.
    #[default]
    Cofactor,
    /// `transpose(inverse(M))`: the classical formula. Fails on singular
    /// matrices and flips normals under reflection.
    InverseTranspose,
}

impl NormalMethod {
    pub fn all() -> Vec<Self> {
        vec![NormalMethod::Cofactor, NormalMethod::InverseTranspose]
    }

    pub fn name(self) -> &'static str {
        match self {
            NormalMethod::Cofactor => "cofactor",
            NormalMethod::InverseTranspose => "inverse_transpose",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalTransformConfig {
    pub method: NormalMethod,
    /// Renormalize transformed normals in `apply_normalized`.
    pub normalize: bool,
    /// Singularity threshold for the inverse-transpose method.
    pub singular_epsilon: f64,
}

impl Default for NormalTransformConfig {
    fn default() -> Self {
        Self {
            method: NormalMethod::Cofactor,
            normalize: true,
            singular_epsilon: SINGULAR_EPSILON,
        }
    }
}

impl NormalTransformConfig {
    pub fn with_method(method: NormalMethod) -> Self {
        Self { method, ..Self::default() }
    }

    /// Parse a `key=value,key=value` parameter string on top of the defaults.
    ///
    /// Recognized keys are `method`, `normalize` and `epsilon`. Whitespace
    /// around entries is trimmed and empty entries are skipped.
    pub fn parse(parameters: &str) -> Result<Self, NumericsError> {
        let mut config = Self::default();

        for entry in parameters.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = entry.split_once('=').ok_or_else(|| {
                NumericsError::InvalidParameters(format!("expected key=value, got '{}'", entry))
            })?;
            let (key, value) = (key.trim(), value.trim());
            trace!(key, value, "parsing normal transform parameter");

            match key {
                "method" => {
                    config.method = NormalMethod::from_name(value).ok_or_else(|| {
                        NumericsError::InvalidParameters(format!("unknown method '{}'", value))
                    })?;
                }
                "normalize" => {
                    config.normalize = value.parse().map_err(|_| {
                        NumericsError::InvalidParameters(format!(
                            "normalize must be 'true' or 'false', got '{}'",
                            value
                        ))
                    })?;
                }
                "epsilon" => {
                    config.singular_epsilon = value.parse().map_err(|_| {
                        NumericsError::InvalidParameters(format!("epsilon is not a number: '{}'", value))
                    })?;
                }
                other => {
                    return Err(NumericsError::InvalidParameters(format!(
                        "unknown key '{}'",
                        other
                    )));
                }
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), NumericsError> {
        if !self.singular_epsilon.is_finite() || self.singular_epsilon < 0.0 {
            return Err(NumericsError::InvalidParameters(format!(
                "epsilon must be a finite non-negative number, got {}",
                self.singular_epsilon
            )));
        }
        Ok(())
    }
}
