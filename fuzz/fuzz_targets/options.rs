//! Fuzz target for textual option parsing.
//!
//! Flag lists, locale tags, Accept-Language headers and configuration
//! documents must be rejected cleanly, never panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nombres_config::{FileFormat, Settings};
use nombres_spell::{Options, Region, parse_accept_language, spell_out};

#[derive(Debug, Arbitrary)]
struct FuzzText {
    flags: String,
    locale: String,
    accept_language: String,
    document: String,
    format: u8,
}

fuzz_target!(|data: FuzzText| {
    // Flag lists
    if let Ok(options) = data.flags.parse::<Options>() {
        let _ = spell_out(1_980u16, &options);
    }

    // Locale tags
    let _ = Region::from_locale_tag(&data.locale);

    // Accept-Language headers
    let locales = parse_accept_language(&data.accept_language);
    for locale in &locales {
        let _ = locale.tag();
    }
    let _ = Region::from_accept_language(&data.accept_language);

    // Configuration documents
    let format = match data.format % 3 {
        0 => FileFormat::Json,
        1 => FileFormat::Toml,
        _ => FileFormat::Env,
    };
    if let Ok(settings) = Settings::new().load_str(&data.document, format) {
        if let Ok(options) = settings.options() {
            let _ = spell_out(71u8, &options);
        }
    }
});
