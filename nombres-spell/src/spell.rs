//! The spelling engine.
//!
//! Values up to 16 come straight from the word tables. 17 to 99 are a tens
//! word joined to a ones word, except for the vigesimal 70 to 99 of reference
//! French. Anything larger is split around its largest scale numeral as
//! `multiplier × scale + remainder` and both halves are spelled recursively.

use crate::lexicon::{self, Scale};
use crate::suffix::ordinal_suffix;
use crate::{Gender, Magnitude, Mode, Options, Result, SpellError, Variants};
use nombres_log::{debug, trace};

const TARGET: &str = "nombres::spell";

/// Spell `value` in French.
///
/// ```
/// use nombres_spell::{Options, Region, spell_out};
///
/// let options = Options::new();
/// assert_eq!(spell_out(80, &options).unwrap(), "quatre-vingts");
/// assert_eq!(spell_out(80, &options.cardinal_as_ordinal()).unwrap(), "quatre-vingt");
/// assert_eq!(spell_out(80, &options.ordinal()).unwrap(), "quatre-vingtième");
/// assert_eq!(spell_out(91, &options.region(Region::Belgium)).unwrap(), "nonante et un");
/// assert_eq!(spell_out(-3, &options).unwrap(), "moins trois");
/// ```
///
/// # Errors
///
/// [`SpellError::NegativeOrdinal`] when a negative value is asked for in
/// [`Mode::Ordinal`] or [`Mode::OrdinalSuffix`]. Every other input succeeds.
pub fn spell_out(value: impl Into<Magnitude>, options: &Options) -> Result<String> {
    nombres_log::init();
    let magnitude = value.into();
    let options = options.normalized();

    if magnitude.is_negative() && options.mode.is_ordinal() {
        debug!(
            target: TARGET,
            "rejecting {} in {} mode", magnitude, options.mode
        );
        return Err(SpellError::NegativeOrdinal {
            magnitude: magnitude.abs,
            mode: options.mode,
        });
    }

    let mut out = String::new();
    if magnitude.is_negative() {
        out.push_str(lexicon::MOINS);
    }
    Speller::new(&options).top(magnitude.abs, &mut out);

    trace!(target: TARGET, "{} -> {:?}", magnitude, out);
    Ok(out)
}

/// Agreement state threaded through the recursion.
#[derive(Debug, Clone, Copy)]
struct Form {
    ordinal: bool,
    feminine: bool,
    /// Whether "cent" and "vingt" may still take their plural "s"
    plural: bool,
}

impl Form {
    /// Multipliers are masculine cardinals; only noun-sized scales let them
    /// keep a plural.
    fn multiplier(self, noun: bool) -> Self {
        Self {
            ordinal: false,
            feminine: false,
            plural: self.plural && noun,
        }
    }

    fn singular(self) -> Self {
        Self {
            plural: false,
            ..self
        }
    }
}

struct Speller<'a> {
    options: &'a Options,
}

impl<'a> Speller<'a> {
    fn new(options: &'a Options) -> Self {
        Self { options }
    }

    fn variants(&self) -> &Variants {
        &self.options.variants
    }

    fn top(&self, value: u128, out: &mut String) {
        let gender = self.options.gender;

        match self.options.mode {
            Mode::OrdinalSuffix => {
                out.push_str(ordinal_suffix(value, self.options));
                return;
            }
            Mode::Ordinal => match value {
                0 => return out.push_str(lexicon::ZERO_ORDINAL),
                1 => return out.push_str(gender.choose(lexicon::FIRST[0], lexicon::FIRST[1])),
                2 if self.options.second => {
                    return out.push_str(gender.choose(lexicon::SECOND[0], lexicon::SECOND[1]));
                }
                _ => {}
            },
            Mode::Cardinal | Mode::CardinalAsOrdinal => {
                if value == 0 {
                    return out.push_str(lexicon::ZERO);
                }
            }
        }

        let form = Form {
            ordinal: self.options.mode == Mode::Ordinal,
            feminine: gender == Gender::Feminine,
            plural: self.options.mode == Mode::Cardinal,
        };
        self.number(value, form, out);
    }

    fn number(&self, value: u128, form: Form, out: &mut String) {
        match value {
            0 => {}
            1..=16 => self.small(value, form, out),
            17..=99 => self.tens(value, form, out),
            _ => self.scaled(value, form, out),
        }
    }

    fn small(&self, value: u128, form: Form, out: &mut String) {
        let index = (value - 1) as usize;
        if form.ordinal {
            out.push_str(lexicon::ORDINALS[index]);
        } else if form.feminine && value == 1 {
            out.push_str(lexicon::UNE);
        } else {
            out.push_str(lexicon::CARDINALS[index]);
        }
    }

    fn tens(&self, value: u128, form: Form, out: &mut String) {
        let (tens, ones) = (value / 10, value % 10);

        if !self.variants().is_regular_decade(tens) {
            return self.vigesimal(value, form, out);
        }

        if ones == 0 {
            out.push_str(self.tens_word(tens, form.ordinal));
        } else {
            out.push_str(self.tens_word(tens, false));
            out.push_str(lexicon::joiner(ones));
            self.number(ones, form, out);
        }
    }

    fn tens_word(&self, tens: u128, ordinal: bool) -> &'static str {
        if tens == 8 && self.variants().uses_octante() {
            return if ordinal {
                lexicon::OCTANTE_ORDINAL
            } else {
                lexicon::OCTANTE
            };
        }
        let index = (tens - 1) as usize;
        if ordinal {
            lexicon::ORDINAL_TENS[index]
        } else {
            lexicon::CARDINAL_TENS[index]
        }
    }

    /// Reference-French 70 to 99: "soixante-dix", "quatre-vingts",
    /// "quatre-vingt-dix".
    fn vigesimal(&self, value: u128, form: Form, out: &mut String) {
        match value {
            70..=79 => {
                out.push_str(self.tens_word(6, false));
                out.push_str(lexicon::joiner(value - 70));
                self.number(value - 60, form.singular(), out);
            }
            80 => {
                out.push_str(lexicon::QUATRE_VINGT);
                if form.ordinal {
                    out.push_str(lexicon::ORDINAL_ENDING);
                } else if form.plural {
                    out.push('s');
                }
            }
            _ => {
                out.push_str(lexicon::QUATRE_VINGT);
                out.push('-');
                self.number(value - 80, form.singular(), out);
            }
        }
    }

    fn scaled(&self, value: u128, form: Form, out: &mut String) {
        let scale = self.scale_for(value);
        let multiplier = value / scale.threshold;
        let remainder = value % scale.threshold;
        let noun = scale.is_noun_sized() && !(form.ordinal && remainder == 0);

        trace!(
            target: TARGET,
            "{} = {} x {} + {}", value, multiplier, scale.cardinal, remainder
        );

        if multiplier > 1 || noun {
            self.number(multiplier, form.multiplier(noun), out);
            out.push(' ');
        }

        if form.ordinal && remainder == 0 {
            out.push_str(scale.ordinal);
        } else {
            out.push_str(scale.cardinal);
            let plural = noun || (form.plural && scale.has_plural() && remainder == 0);
            if multiplier > 1 && plural {
                out.push('s');
            }
        }

        if remainder != 0 {
            out.push(' ');
            self.number(remainder, form, out);
        }
    }

    fn scale_for(&self, value: u128) -> &'static Scale {
        if self.options.cent_1100_1999 && (1_100..2_000).contains(&value) {
            lexicon::HUNDRED
        } else {
            lexicon::largest_scale(value)
        }
    }
}
