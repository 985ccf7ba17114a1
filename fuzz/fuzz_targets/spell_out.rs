//! Fuzz target for the speller.
//!
//! Spells arbitrary magnitudes under arbitrary options and checks the
//! invariants every output must hold.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nombres_spell::{Mode, Options, SpellError, Variants, spell_out};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    negative: bool,
    abs: u128,
    feminine: bool,
    mode: u8,
    second: bool,
    septante: bool,
    huitante: bool,
    octante: bool,
    nonante: bool,
    cent_1100_1999: bool,
}

impl FuzzInput {
    fn options(&self) -> Options {
        let mode = match self.mode % 4 {
            0 => Mode::Cardinal,
            1 => Mode::Ordinal,
            2 => Mode::CardinalAsOrdinal,
            _ => Mode::OrdinalSuffix,
        };
        let mut options = Options::new().mode(mode).variants(Variants {
            septante: self.septante,
            huitante: self.huitante,
            octante: self.octante,
            nonante: self.nonante,
        });
        if self.feminine {
            options = options.feminine();
        }
        if self.second {
            options = options.second();
        }
        if self.cent_1100_1999 {
            options = options.cent_1100_1999();
        }
        options
    }

    fn magnitude(&self) -> nombres_spell::Magnitude {
        if self.negative {
            nombres_spell::Magnitude::negative(self.abs)
        } else {
            nombres_spell::Magnitude::positive(self.abs)
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    let options = input.options();
    let magnitude = input.magnitude();

    match spell_out(magnitude, &options) {
        Ok(words) => {
            assert!(!words.is_empty());
            assert!(!words.contains("  "));
            assert!(!words.ends_with(' '));
            assert_eq!(words.starts_with("moins "), magnitude.is_negative());
            assert_eq!(spell_out(magnitude, &options).unwrap(), words);
        }
        Err(SpellError::NegativeOrdinal { .. }) => {
            assert!(magnitude.is_negative());
            assert!(options.mode.is_ordinal());
        }
        Err(other) => panic!("unexpected error: {}", other),
    }
});
