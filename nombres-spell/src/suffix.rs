//! Ordinal endings written after digits ("1er", "2de", "80e").

use crate::{Magnitude, Options, Result, spell_out};

/// The ending of the ordinal of `value` as written after its digits.
///
/// "er"/"re" for 1, "d"/"de" for 2 when [`Options::second`] is set, "e"
/// otherwise.
pub fn ordinal_suffix(value: u128, options: &Options) -> &'static str {
    match value {
        1 => options.gender.choose("er", "re"),
        2 if options.second => options.gender.choose("d", "de"),
        _ => "e",
    }
}

/// Digits followed by the ordinal ending: `abbreviate(1, &feminine)` is
/// `"1re"`.
///
/// The mode of `options` is ignored.
///
/// ```
/// use nombres_spell::{Options, abbreviate};
///
/// assert_eq!(abbreviate(1, &Options::new()).unwrap(), "1er");
/// assert_eq!(abbreviate(2, &Options::new().second().feminine()).unwrap(), "2de");
/// assert_eq!(abbreviate(80, &Options::new()).unwrap(), "80e");
/// ```
///
/// # Errors
///
/// Negative values have no ordinal and are rejected like in [`spell_out`].
pub fn abbreviate(value: impl Into<Magnitude>, options: &Options) -> Result<String> {
    let magnitude = value.into();
    let suffix = spell_out(magnitude, &options.ordinal_suffix())?;
    Ok(format!("{}{}", magnitude.abs, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mode, SpellError};

    #[test]
    fn test_suffixes() {
        let m = Options::new();
        let f = Options::new().feminine();
        assert_eq!(ordinal_suffix(1, &m), "er");
        assert_eq!(ordinal_suffix(1, &f), "re");
        assert_eq!(ordinal_suffix(2, &m), "e");
        assert_eq!(ordinal_suffix(2, &m.second()), "d");
        assert_eq!(ordinal_suffix(2, &f.second()), "de");
        assert_eq!(ordinal_suffix(3, &m), "e");
        assert_eq!(ordinal_suffix(0, &m), "e");
        assert_eq!(ordinal_suffix(21, &f), "e");
    }

    #[test]
    fn test_suffix_mode_matches_table() {
        let options = Options::new().ordinal_suffix();
        assert_eq!(spell_out(1, &options).unwrap(), "er");
        assert_eq!(spell_out(1, &options.feminine()).unwrap(), "re");
        assert_eq!(spell_out(2, &options.second()).unwrap(), "d");
        assert_eq!(spell_out(2, &options.second().feminine()).unwrap(), "de");
        assert_eq!(spell_out(3, &options).unwrap(), "e");
    }

    #[test]
    fn test_abbreviate() {
        assert_eq!(abbreviate(1u8, &Options::new().ordinal()).unwrap(), "1er");
        assert_eq!(abbreviate(1, &Options::new().feminine()).unwrap(), "1re");
        assert_eq!(abbreviate(2, &Options::new()).unwrap(), "2e");
        assert_eq!(abbreviate(1_000_000u64, &Options::new()).unwrap(), "1000000e");
        assert_eq!(
            abbreviate(-3, &Options::new()),
            Err(SpellError::NegativeOrdinal {
                magnitude: 3,
                mode: Mode::OrdinalSuffix
            })
        );
    }
}
