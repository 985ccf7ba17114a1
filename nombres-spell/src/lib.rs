//! French number spelling
//!
//! Turns any primitive integer into written-out French:
//!
//! - **Cardinals**: "quatre-vingt-douze", "deux cents", "un million"
//! - **Ordinals**: "quatre-vingt-douzième", "premier", "seconde"
//! - **Cardinals used as ordinals**: "page quatre-vingt", "l'an deux mille"
//! - **Ordinal endings** for digits: "1er", "1re", "2d", "80e"
//!
//! Belgian and Swiss numerals ("septante", "huitante", "nonante") and the
//! old "octante" are selected through [`Options`]. Magnitudes go up to
//! `u128::MAX` (sextillions).
//!
//! # Quick Start
//!
//! ```rust
//! use nombres_spell::{Flag, Options, Region, SpellOut, spell_out};
//!
//! let options = Options::new();
//! assert_eq!(spell_out(71, &options).unwrap(), "soixante et onze");
//! assert_eq!(1_999u16.spell_out(&options.cent_1100_1999()).unwrap(),
//!            "dix-neuf cent quatre-vingt-dix-neuf");
//!
//! // Builder and flags are interchangeable
//! let swiss = Flag::Feminine | Flag::Switzerland;
//! assert_eq!(swiss, Options::new().feminine().region(Region::Switzerland));
//! assert_eq!(81u8.spell_out(&swiss).unwrap(), "huitante et une");
//! ```
//!
//! # Locales
//!
//! ```rust
//! use nombres_spell::{Options, Region, SpellOut};
//!
//! let region = Region::from_locale_tag("fr-BE").unwrap();
//! assert_eq!(99u8.spell_out(&Options::from(region)).unwrap(), "nonante-neuf");
//! ```
//!
//! # Logging
//!
//! Each decomposition step is traced under the `nombres::spell` target.
//! Set `NOMBRES_LOG_LEVEL=trace` to see them.

mod error;
mod lexicon;
mod locale;
mod magnitude;
mod options;
mod spell;
mod suffix;

pub use error::SpellError;
pub use lexicon::{SCALES, Scale};
pub use locale::{Locale, parse_accept_language};
pub use magnitude::{Magnitude, SpellOut};
pub use options::{Flag, Gender, Mode, Options, Region, Variants};
pub use spell::spell_out;
pub use suffix::{abbreviate, ordinal_suffix};

/// Result type for spelling operations
pub type Result<T> = std::result::Result<T, SpellError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Flag, Gender, Magnitude, Mode, Options, Region, Result, SpellError, SpellOut, abbreviate,
        spell_out,
    };
}
