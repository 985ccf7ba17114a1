// nombres - French number spelling
//
// This library writes integers out in French words, as cardinals, ordinals
// or ordinal endings, with the regional numerals of Belgium and Switzerland.

// Re-export the speller
pub use nombres_spell::*;

// Re-export logging
pub use nombres_log as log;

// Re-export optional crates
#[cfg(feature = "config")]
pub use nombres_config as config;

#[cfg(feature = "config")]
pub use nombres_config::{Settings, SpellConfig};

// Prelude for common imports
pub mod prelude {
    pub use nombres_spell::prelude::*;

    #[cfg(feature = "config")]
    pub use nombres_config::{Settings, SpellConfig};
}
