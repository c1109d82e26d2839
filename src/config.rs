//! Index configuration.
//!
//! The search radius is baked into the cell layout, so it lives here next to
//! the knobs that shape a build rather than being passed per query.
use crate::compute::validation::validate_radius;
use crate::error::{GridError, Result};
use serde::de::Error;

/// Index configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Search radius; neighbors are strictly closer than this
    pub max_dist: f64,

    /// Added to the extent/radius ratio before taking the logarithm when
    /// sizing cells, so an extent that is an exact multiple of the radius
    /// still gets room for its last cell
    #[serde(default = "Config::default_size_epsilon")]
    pub size_epsilon: f64,

    /// Drop the query point from its own neighbor list
    #[serde(default)]
    pub exclude_self: bool,
}

impl Config {
    pub const fn default_size_epsilon() -> f64 {
        1e-8
    }

    pub fn new(max_dist: f64) -> Self {
        Self {
            max_dist,
            size_epsilon: Self::default_size_epsilon(),
            exclude_self: false,
        }
    }

    pub fn with_size_epsilon(mut self, epsilon: f64) -> Self {
        self.size_epsilon = epsilon;
        self
    }

    pub fn with_exclude_self(mut self, exclude: bool) -> Self {
        self.exclude_self = exclude;
        self
    }

    /// Checks the radius and the sizing epsilon.
    ///
    /// ```
    /// use gridhash::{Config, GridError};
    ///
    /// assert!(Config::new(0.5).validate().is_ok());
    /// assert_eq!(Config::new(0.0).validate(), Err(GridError::InvalidRadius(0.0)));
    /// ```
    pub fn validate(&self) -> Result<()> {
        validate_radius(self.max_dist)?;

        if !self.size_epsilon.is_finite() || self.size_epsilon < 0.0 {
            return Err(GridError::InvalidConfig(format!(
                "size_epsilon must be finite and non-negative, got {}",
                self.size_epsilon
            )));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
