//! Picking a [`Region`] from a BCP 47 tag or an Accept-Language header.

use crate::{Region, Result, SpellError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language tag reduced to what the speller needs.
///
/// ```
/// use nombres_spell::Locale;
///
/// let locale = Locale::parse("fr_ch").unwrap();
/// assert_eq!(locale.language, "fr");
/// assert_eq!(locale.region.as_deref(), Some("CH"));
/// assert_eq!(locale.tag(), "fr-CH");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    /// ISO 639 language code, lower case
    pub language: String,
    /// ISO 3166-1 region code, upper case
    pub region: Option<String>,
}

impl Locale {
    /// Parse a tag such as "fr", "fr-BE" or "fr-Latn-CH". Scripts and
    /// extensions are skipped.
    pub fn parse(tag: &str) -> Result<Self> {
        let mut parts = tag.trim().split(['-', '_']);
        let language = parts.next().unwrap_or_default().to_lowercase();

        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(SpellError::InvalidLocale(tag.to_string()));
        }

        let region = parts
            .find(|part| {
                (part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
                    || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()))
            })
            .map(str::to_uppercase);

        Ok(Self { language, region })
    }

    pub fn tag(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{}", self.language, region),
            None => self.language.clone(),
        }
    }

    pub fn is_french(&self) -> bool {
        self.language == "fr"
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

impl FromStr for Locale {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

impl Region {
    /// Region conventions of a French locale. Belgian and Swiss tags get
    /// their presets; every other French tag (Canada, Africa, no region)
    /// counts as France.
    ///
    /// # Errors
    ///
    /// [`SpellError::InvalidLocale`] for a non-French locale.
    pub fn from_locale(locale: &Locale) -> Result<Self> {
        if !locale.is_french() {
            return Err(SpellError::InvalidLocale(locale.tag()));
        }
        Ok(match locale.region.as_deref() {
            Some("BE") => Region::Belgium,
            Some("CH") => Region::Switzerland,
            _ => Region::France,
        })
    }

    /// ```
    /// use nombres_spell::Region;
    ///
    /// assert_eq!(Region::from_locale_tag("fr-BE").unwrap(), Region::Belgium);
    /// assert_eq!(Region::from_locale_tag("fr_CH").unwrap(), Region::Switzerland);
    /// assert_eq!(Region::from_locale_tag("fr-CA").unwrap(), Region::France);
    /// assert!(Region::from_locale_tag("de-CH").is_err());
    /// ```
    pub fn from_locale_tag(tag: &str) -> Result<Self> {
        Region::from_locale(&Locale::parse(tag)?)
    }

    /// The region of the most preferred French entry of an Accept-Language
    /// header, if there is one.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        parse_accept_language(header)
            .iter()
            .find_map(|locale| Region::from_locale(locale).ok())
    }
}

/// Locales of an Accept-Language header, most preferred first. Wildcards and
/// malformed entries are dropped; equal weights keep header order.
pub fn parse_accept_language(header: &str) -> Vec<Locale> {
    let mut entries: Vec<(Locale, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut split = part.trim().splitn(2, ';');
            let tag = split.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let quality = split
                .next()
                .and_then(|q| q.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse().ok())
                .unwrap_or(1.0);

            Some((Locale::parse(tag).ok()?, quality))
        })
        .collect();

    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries.into_iter().map(|(locale, _)| locale).collect()
}
