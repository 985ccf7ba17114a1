//! Signed integer magnitudes of any primitive width.

use crate::{Options, Result};
use std::fmt;

/// An integer split into sign and absolute value.
///
/// Every primitive integer converts losslessly, `i128::MIN` included,
/// because the absolute value is held as `u128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Magnitude {
    pub negative: bool,
    pub abs: u128,
}

impl Magnitude {
    pub const ZERO: Magnitude = Magnitude {
        negative: false,
        abs: 0,
    };

    pub const fn positive(abs: u128) -> Self {
        Self {
            negative: false,
            abs,
        }
    }

    /// A negative zero is normalized to zero.
    pub const fn negative(abs: u128) -> Self {
        Self {
            negative: abs != 0,
            abs,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative && self.abs != 0
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.abs)
        } else {
            write!(f, "{}", self.abs)
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Magnitude {
                fn from(value: $t) -> Self {
                    Magnitude::positive(value as u128)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Magnitude {
                fn from(value: $t) -> Self {
                    if value < 0 {
                        Magnitude::negative(value.unsigned_abs() as u128)
                    } else {
                        Magnitude::positive(value as u128)
                    }
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

/// Spell an integer directly: `92u8.spell_out(&Options::new())`.
pub trait SpellOut {
    fn spell_out(self, options: &Options) -> Result<String>;
}

impl<T: Into<Magnitude>> SpellOut for T {
    fn spell_out(self, options: &Options) -> Result<String> {
        crate::spell_out(self, options)
    }
}
