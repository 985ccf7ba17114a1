// Configuration validation

use crate::{ConfigError, Result};
use std::str::FromStr;

/// Trait for validating configuration
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Field-level checks shared by configuration types
pub struct ConfigValidator;

impl ConfigValidator {
    /// Parse an optional named value, reporting the field on failure
    pub fn parse_name<T: FromStr>(value: Option<&str>, field: &str) -> Result<Option<T>> {
        value
            .map(|raw| {
                raw.parse().map_err(|_| {
                    ConfigError::ValidationError(format!("{} has unknown value {:?}", field, raw))
                })
            })
            .transpose()
    }

    /// Two optional settings that must agree when both are given
    pub fn consistent<T: PartialEq + std::fmt::Debug>(
        a: Option<&T>,
        b: Option<&T>,
        fields: (&str, &str),
    ) -> Result<()> {
        match (a, b) {
            (Some(a), Some(b)) if a != b => Err(ConfigError::ValidationError(format!(
                "{} ({:?}) contradicts {} ({:?})",
                fields.0, a, fields.1, b
            ))),
            _ => Ok(()),
        }
    }
}
