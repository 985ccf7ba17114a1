// Speller settings as they appear in files and the environment

use crate::validation::{ConfigValidator, Validate};
use crate::Result;
use nombres_spell::{Gender, Mode, Options, Region};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Serializable speller settings.
///
/// Every field is optional; unset fields keep the [`Options`] defaults.
/// Settings apply in this order: `flags`, then `gender` and `mode`, then
/// `region` or `locale`, then the individual switches.
///
/// ```toml
/// gender = "feminine"
/// mode = "ordinal"
/// locale = "fr-CH"
/// octante = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellConfig {
    /// Flag list in `Options` syntax, e.g. `"feminine | ordinal"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// BCP 47 tag whose region picks the variants
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub second: Option<bool>,
    #[serde(deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub septante: Option<bool>,
    #[serde(deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub huitante: Option<bool>,
    #[serde(deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub octante: Option<bool>,
    #[serde(deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub nonante: Option<bool>,
    #[serde(deserialize_with = "flexible_bool", skip_serializing_if = "Option::is_none")]
    pub cent_1100_1999: Option<bool>,
}

impl SpellConfig {
    /// Resolve into speller options.
    pub fn to_options(&self) -> Result<Options> {
        let mut options = match &self.flags {
            Some(flags) => flags.parse::<Options>()?,
            None => Options::default(),
        };

        let gender = ConfigValidator::parse_name::<Gender>(self.gender.as_deref(), "gender")?;
        if let Some(gender) = gender {
            options = options.gender(gender);
        }
        let mode = ConfigValidator::parse_name::<Mode>(self.mode.as_deref(), "mode")?;
        if let Some(mode) = mode {
            options = options.mode(mode);
        }
        if let Some(region) = self.resolved_region()? {
            options = options.region(region);
        }

        let variants = &mut options.variants;
        for (field, value) in [
            (&mut variants.septante, self.septante),
            (&mut variants.huitante, self.huitante),
            (&mut variants.octante, self.octante),
            (&mut variants.nonante, self.nonante),
        ] {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(second) = self.second {
            options.second = second;
        }
        if let Some(cent) = self.cent_1100_1999 {
            options.cent_1100_1999 = cent;
        }

        Ok(options.normalized())
    }

    /// The region named directly or implied by the locale.
    pub fn resolved_region(&self) -> Result<Option<Region>> {
        let named = ConfigValidator::parse_name::<Region>(self.region.as_deref(), "region")?;
        let from_locale = self
            .locale
            .as_deref()
            .map(Region::from_locale_tag)
            .transpose()?;

        ConfigValidator::consistent(named.as_ref(), from_locale.as_ref(), ("region", "locale"))?;
        Ok(named.or(from_locale))
    }
}

impl Validate for SpellConfig {
    fn validate(&self) -> Result<()> {
        self.to_options().map(|_| ())
    }
}

/// Accepts `true`, `1`, `"yes"`, `"off"` and the like, so that string-only
/// sources (environment, `.env` files) read the same as JSON or TOML.
fn flexible_bool<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Bool(b)) => Ok(Some(b)),
        Some(Raw::Int(i)) => Ok(Some(i != 0)),
        Some(Raw::Text(text)) => match text.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" | "" => Ok(Some(false)),
            other => Err(de::Error::custom(format!(
                "expected a boolean, found {:?}",
                other
            ))),
        },
    }
}
