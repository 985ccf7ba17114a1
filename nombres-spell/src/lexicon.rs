//! Word tables.
//!
//! Everything here is immutable `'static` data. The small tables are indexed
//! by `value - 1`; the scale table is searched by threshold.

/// Cardinals from 1 to 16.
pub(crate) const CARDINALS: [&str; 16] = [
    "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
    "douze", "treize", "quatorze", "quinze", "seize",
];

/// Ordinals from 1 to 16, as used inside compounds ("vingt et unième").
pub(crate) const ORDINALS: [&str; 16] = [
    "unième",
    "deuxième",
    "troisième",
    "quatrième",
    "cinquième",
    "sixième",
    "septième",
    "huitième",
    "neuvième",
    "dixième",
    "onzième",
    "douzième",
    "treizième",
    "quatorzième",
    "quinzième",
    "seizième",
];

/// Cardinal tens from 10 to 90. The 70, 80 and 90 slots hold the regional
/// words; reference French never reads them.
pub(crate) const CARDINAL_TENS: [&str; 9] = [
    "dix", "vingt", "trente", "quarante", "cinquante", "soixante", "septante", "huitante",
    "nonante",
];

pub(crate) const ORDINAL_TENS: [&str; 9] = [
    "dixième",
    "vingtième",
    "trentième",
    "quarantième",
    "cinquantième",
    "soixantième",
    "septantième",
    "huitantième",
    "nonantième",
];

pub(crate) const OCTANTE: &str = "octante";
pub(crate) const OCTANTE_ORDINAL: &str = "octantième";

/// Stem of reference-French 80 to 99.
pub(crate) const QUATRE_VINGT: &str = "quatre-vingt";

pub(crate) const ZERO: &str = "zéro";
pub(crate) const ZERO_ORDINAL: &str = "zéroième";
pub(crate) const UNE: &str = "une";
pub(crate) const MOINS: &str = "moins ";

/// Ending appended to a word that has no irregular ordinal.
pub(crate) const ORDINAL_ENDING: &str = "ième";

/// "premier" / "première", indexed by gender.
pub(crate) const FIRST: [&str; 2] = ["premier", "première"];

/// "second" / "seconde", indexed by gender.
pub(crate) const SECOND: [&str; 2] = ["second", "seconde"];

/// Joiner between a tens word and a ones word.
pub(crate) fn joiner(ones: u128) -> &'static str {
    if ones == 1 { " et " } else { "-" }
}

/// A power-of-ten numeral above 99.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    /// Smallest value this numeral names
    pub threshold: u128,
    /// Cardinal spelling
    pub cardinal: &'static str,
    /// Ordinal spelling ("millième" is irregular; the rest add "ième")
    pub ordinal: &'static str,
}

impl Scale {
    /// Whether the word ever takes a plural "s". Only "mille" never does.
    pub fn has_plural(&self) -> bool {
        self.threshold != 1_000
    }

    /// Whether the word is a countable noun ("un million", "deux millions")
    /// rather than a bare multiplier like "cent" or "mille".
    pub fn is_noun_sized(&self) -> bool {
        self.threshold > 1_000
    }
}

const fn scale(threshold: u128, cardinal: &'static str, ordinal: &'static str) -> Scale {
    Scale {
        threshold,
        cardinal,
        ordinal,
    }
}

/// Scale numerals in the long-scale French system, strictly increasing.
///
/// 10^39 ("sextilliard") is past `u128::MAX` and therefore absent.
pub const SCALES: [Scale; 13] = [
    scale(100, "cent", "centième"),
    scale(1_000, "mille", "millième"),
    scale(1_000_000, "million", "millionième"),
    scale(1_000_000_000, "milliard", "milliardième"),
    scale(10u128.pow(12), "billion", "billionième"),
    scale(10u128.pow(15), "billiard", "billiardième"),
    scale(10u128.pow(18), "trillion", "trillionième"),
    scale(10u128.pow(21), "trilliard", "trilliardième"),
    scale(10u128.pow(24), "quadrillion", "quadrillionième"),
    scale(10u128.pow(27), "quadrilliard", "quadrilliardième"),
    scale(10u128.pow(30), "quintillion", "quintillionième"),
    scale(10u128.pow(33), "quintilliard", "quintilliardième"),
    scale(10u128.pow(36), "sextillion", "sextillionième"),
];

/// The hundred numeral, forced for 1100–1999 when requested.
pub(crate) const HUNDRED: &Scale = &SCALES[0];

/// Largest scale whose threshold does not exceed `value`.
///
/// `value` must be at least 100.
pub(crate) fn largest_scale(value: u128) -> &'static Scale {
    debug_assert!(value >= HUNDRED.threshold);
    let index = SCALES.partition_point(|s| s.threshold <= value);
    &SCALES[index.saturating_sub(1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales_are_strictly_increasing() {
        for pair in SCALES.windows(2) {
            assert!(pair[0].threshold < pair[1].threshold);
        }
    }

    #[test]
    fn test_scale_ordinals_extend_cardinals() {
        for s in SCALES.iter().filter(|s| s.threshold != 1_000) {
            assert_eq!(s.ordinal, format!("{}{}", s.cardinal, ORDINAL_ENDING));
        }
        assert_eq!(SCALES[1].ordinal, "millième");
    }

    #[test]
    fn test_largest_scale() {
        assert_eq!(largest_scale(100).cardinal, "cent");
        assert_eq!(largest_scale(999).cardinal, "cent");
        assert_eq!(largest_scale(1_000).cardinal, "mille");
        assert_eq!(largest_scale(999_999).cardinal, "mille");
        assert_eq!(largest_scale(1_000_000).cardinal, "million");
        assert_eq!(largest_scale(u64::MAX as u128).cardinal, "trillion");
        assert_eq!(largest_scale(u128::MAX).cardinal, "sextillion");
    }

    #[test]
    fn test_noun_and_plural_classes() {
        assert!(!SCALES[0].is_noun_sized());
        assert!(SCALES[0].has_plural());
        assert!(!SCALES[1].is_noun_sized());
        assert!(!SCALES[1].has_plural());
        assert!(SCALES[2].is_noun_sized());
        assert!(SCALES[2].has_plural());
    }

    #[test]
    fn test_joiner() {
        assert_eq!(joiner(1), " et ");
        assert_eq!(joiner(2), "-");
        assert_eq!(joiner(0), "-");
    }
}
