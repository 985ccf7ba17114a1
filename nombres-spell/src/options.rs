//! Spelling options.
//!
//! [`Options`] is a plain value: grammatical gender, rendering [`Mode`],
//! the 70/80/90 [`Variants`] and two smaller switches. It can be built with
//! the fluent methods, from a [`Region`] preset, or by OR-ing [`Flag`]s:
//!
//! ```
//! use nombres_spell::{Flag, Mode, Options, Region};
//!
//! let a = Options::new().feminine().ordinal().region(Region::Belgium);
//! let b = Options::default() | Flag::Feminine | Flag::Ordinal | Flag::Belgium;
//! assert_eq!(a, b);
//! assert_eq!(a.mode, Mode::Ordinal);
//! ```

use crate::{Result, SpellError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

/// Grammatical gender of the counted noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}

impl Gender {
    /// Picks the masculine or feminine form.
    pub fn choose<T>(self, masculine: T, feminine: T) -> T {
        match self {
            Self::Masculine => masculine,
            Self::Feminine => feminine,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.choose("masculine", "feminine")
    }
}

impl FromStr for Gender {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_name(s).as_str() {
            "masculine" | "m" => Ok(Self::Masculine),
            "feminine" | "f" => Ok(Self::Feminine),
            _ => Err(SpellError::InvalidOption(s.to_string())),
        }
    }
}

/// Grammatical category of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Counting: "quatre-vingts pages"
    #[default]
    Cardinal,
    /// Ranking: "quatre-vingtième page"
    Ordinal,
    /// A cardinal standing for a position: "page quatre-vingt"
    CardinalAsOrdinal,
    /// Only the ending written after digits: "e" as in "80e"
    OrdinalSuffix,
}

impl Mode {
    /// Modes whose output denotes a rank, and so has no negative form.
    pub fn is_ordinal(&self) -> bool {
        matches!(self, Self::Ordinal | Self::OrdinalSuffix)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cardinal => "cardinal",
            Self::Ordinal => "ordinal",
            Self::CardinalAsOrdinal => "cardinal-as-ordinal",
            Self::OrdinalSuffix => "ordinal-suffix",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_name(s).as_str() {
            "cardinal" => Ok(Self::Cardinal),
            "ordinal" => Ok(Self::Ordinal),
            "cardinal-as-ordinal" => Ok(Self::CardinalAsOrdinal),
            "ordinal-suffix" | "suffix" => Ok(Self::OrdinalSuffix),
            _ => Err(SpellError::InvalidOption(s.to_string())),
        }
    }
}

/// Regional words for 70, 80 and 90.
///
/// With every field `false` the reference French forms are used
/// ("soixante-dix", "quatre-vingts", "quatre-vingt-dix").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Variants {
    /// 70 is "septante"
    pub septante: bool,
    /// 80 is "huitante"; takes precedence over `octante`
    pub huitante: bool,
    /// 80 is "octante"
    pub octante: bool,
    /// 90 is "nonante"
    pub nonante: bool,
}

impl Variants {
    /// Whether the decade starting at `tens * 10` keeps its regular
    /// "<tens word>-<ones>" shape instead of the reference-French vigesimal one.
    pub(crate) fn is_regular_decade(&self, tens: u128) -> bool {
        match tens {
            7 => self.septante,
            8 => self.huitante || self.octante,
            9 => self.nonante,
            _ => true,
        }
    }

    /// "octante" is used only when "huitante" was not asked for.
    pub(crate) fn uses_octante(&self) -> bool {
        self.octante && !self.huitante
    }

    fn union(self, other: Self) -> Self {
        Self {
            septante: self.septante || other.septante,
            huitante: self.huitante || other.huitante,
            octante: self.octante || other.octante,
            nonante: self.nonante || other.nonante,
        }
    }
}

/// Regional presets for [`Variants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    /// soixante-dix, quatre-vingts, quatre-vingt-dix
    #[default]
    France,
    /// septante, quatre-vingts, nonante
    Belgium,
    /// septante, huitante, nonante
    Switzerland,
}

impl Region {
    pub fn variants(&self) -> Variants {
        match self {
            Self::France => Variants::default(),
            Self::Belgium => Variants {
                septante: true,
                nonante: true,
                ..Variants::default()
            },
            Self::Switzerland => Variants {
                septante: true,
                huitante: true,
                nonante: true,
                ..Variants::default()
            },
        }
    }
}

impl FromStr for Region {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_name(s).as_str() {
            "france" | "fr" => Ok(Self::France),
            "belgium" | "belgique" | "be" => Ok(Self::Belgium),
            "switzerland" | "suisse" | "ch" => Ok(Self::Switzerland),
            _ => Err(SpellError::InvalidOption(s.to_string())),
        }
    }
}

/// Everything that changes how a number is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub gender: Gender,
    pub mode: Mode,
    /// "second"/"seconde" instead of "deuxième" for an ordinal 2
    pub second: bool,
    pub variants: Variants,
    /// "onze cents" instead of "mille cent" between 1100 and 1999
    pub cent_1100_1999: bool,
}

impl Options {
    /// Masculine cardinal, reference French.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn masculine(self) -> Self {
        self.gender(Gender::Masculine)
    }

    pub fn feminine(self) -> Self {
        self.gender(Gender::Feminine)
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn cardinal(self) -> Self {
        self.mode(Mode::Cardinal)
    }

    pub fn ordinal(self) -> Self {
        self.mode(Mode::Ordinal)
    }

    pub fn cardinal_as_ordinal(self) -> Self {
        self.mode(Mode::CardinalAsOrdinal)
    }

    pub fn ordinal_suffix(self) -> Self {
        self.mode(Mode::OrdinalSuffix)
    }

    /// Use "second"/"seconde" for 2 in ordinal modes.
    pub fn second(mut self) -> Self {
        self.second = true;
        self
    }

    /// Replace the 70/80/90 variants with a regional preset.
    pub fn region(mut self, region: Region) -> Self {
        self.variants = region.variants();
        self
    }

    pub fn variants(mut self, variants: Variants) -> Self {
        self.variants = variants;
        self
    }

    pub fn septante(mut self) -> Self {
        self.variants.septante = true;
        self
    }

    pub fn huitante(mut self) -> Self {
        self.variants.huitante = true;
        self
    }

    pub fn octante(mut self) -> Self {
        self.variants.octante = true;
        self
    }

    pub fn nonante(mut self) -> Self {
        self.variants.nonante = true;
        self
    }

    /// Group 1100 to 1999 by hundreds ("dix-neuf cent").
    pub fn cent_1100_1999(mut self) -> Self {
        self.cent_1100_1999 = true;
        self
    }

    /// The same options with "huitante" overriding "octante".
    pub fn normalized(mut self) -> Self {
        if self.variants.huitante {
            self.variants.octante = false;
        }
        self
    }

    /// Apply one flag. Mode and gender flags replace; the others accumulate.
    pub fn with(mut self, flag: Flag) -> Self {
        match flag {
            Flag::Masculine => self.gender = Gender::Masculine,
            Flag::Feminine => self.gender = Gender::Feminine,
            Flag::Cardinal => self.mode = Mode::Cardinal,
            Flag::Ordinal => self.mode = Mode::Ordinal,
            Flag::CardinalAsOrdinal => self.mode = Mode::CardinalAsOrdinal,
            Flag::OrdinalSuffix => self.mode = Mode::OrdinalSuffix,
            Flag::Second => self.second = true,
            Flag::Septante => self.variants.septante = true,
            Flag::Huitante => self.variants.huitante = true,
            Flag::Octante => self.variants.octante = true,
            Flag::Nonante => self.variants.nonante = true,
            Flag::Cent1100To1999 => self.cent_1100_1999 = true,
            Flag::France => {}
            Flag::Belgium => self.variants = self.variants.union(Region::Belgium.variants()),
            Flag::Switzerland => {
                self.variants = self.variants.union(Region::Switzerland.variants())
            }
        }
        self
    }
}

/// Parses a list of [`Flag`] names separated by `|`, `,`, `+` or spaces,
/// e.g. `"feminine | ordinal | belgium"`.
impl FromStr for Options {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self> {
        s.split(|c: char| c == '|' || c == ',' || c == '+' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .try_fold(Options::default(), |options, part| {
                Ok(options.with(part.parse()?))
            })
    }
}

/// One named option, combinable with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flag {
    Masculine,
    Feminine,
    Cardinal,
    Ordinal,
    CardinalAsOrdinal,
    OrdinalSuffix,
    Second,
    Septante,
    Huitante,
    Octante,
    Nonante,
    #[serde(rename = "cent-1100-1999")]
    Cent1100To1999,
    France,
    Belgium,
    Switzerland,
}

impl FromStr for Flag {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self> {
        let flag = match normalize_name(s).as_str() {
            "masculine" => Self::Masculine,
            "feminine" => Self::Feminine,
            "cardinal" => Self::Cardinal,
            "ordinal" => Self::Ordinal,
            "cardinal-as-ordinal" => Self::CardinalAsOrdinal,
            "ordinal-suffix" => Self::OrdinalSuffix,
            "second" => Self::Second,
            "septante" => Self::Septante,
            "huitante" => Self::Huitante,
            "octante" => Self::Octante,
            "nonante" => Self::Nonante,
            "cent-1100-1999" => Self::Cent1100To1999,
            "france" => Self::France,
            "belgium" => Self::Belgium,
            "switzerland" => Self::Switzerland,
            _ => return Err(SpellError::InvalidOption(s.to_string())),
        };
        Ok(flag)
    }
}

impl From<Flag> for Options {
    fn from(flag: Flag) -> Self {
        Options::default().with(flag)
    }
}

impl From<Region> for Options {
    fn from(region: Region) -> Self {
        Options::default().region(region)
    }
}

impl BitOr<Flag> for Options {
    type Output = Options;

    fn bitor(self, flag: Flag) -> Options {
        self.with(flag)
    }
}

impl BitOr for Flag {
    type Output = Options;

    fn bitor(self, other: Flag) -> Options {
        Options::from(self).with(other)
    }
}

/// Lower-case, trimmed, with `_` and spaces turned into `-`.
fn normalize_name(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}
