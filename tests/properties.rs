//! Property tests over the whole magnitude range.

use nombres::prelude::*;
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![
        Just(Mode::Cardinal),
        Just(Mode::Ordinal),
        Just(Mode::CardinalAsOrdinal),
        Just(Mode::OrdinalSuffix),
    ]
}

fn any_region() -> impl Strategy<Value = Region> {
    prop_oneof![
        Just(Region::France),
        Just(Region::Belgium),
        Just(Region::Switzerland),
    ]
}

fn any_options() -> impl Strategy<Value = Options> {
    (
        any::<bool>(),
        any_mode(),
        any::<bool>(),
        any_region(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(feminine, mode, second, region, octante, cent)| {
            let mut options = Options::new().mode(mode).region(region);
            if feminine {
                options = options.feminine();
            }
            if second {
                options = options.second();
            }
            if octante {
                options = options.octante();
            }
            if cent {
                options = options.cent_1100_1999();
            }
            options
        })
}

proptest! {
    #[test]
    fn spelling_is_deterministic(value in any::<u128>(), options in any_options()) {
        let first = spell_out(value, &options).unwrap();
        let second = spell_out(value, &options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn words_are_well_formed(value in any::<u128>(), options in any_options()) {
        let words = spell_out(value, &options).unwrap();
        prop_assert!(!words.is_empty());
        prop_assert!(!words.contains("  "));
        prop_assert!(!words.starts_with(' ') && !words.ends_with(' '));
        prop_assert!(!words.contains("--"));
    }

    #[test]
    fn gender_only_changes_a_trailing_un(value in 0u128..10_000_000_000, mode in any_mode()) {
        prop_assume!(mode != Mode::OrdinalSuffix);
        let masculine = spell_out(value, &Options::new().mode(mode)).unwrap();
        let feminine = spell_out(value, &Options::new().mode(mode).feminine()).unwrap();

        if masculine != feminine {
            let ends_with_un = masculine == "un"
                || masculine.ends_with(" un")
                || masculine.ends_with("-un")
                || masculine == "premier";
            prop_assert!(ends_with_un, "{} / {}", masculine, feminine);
        }
    }

    #[test]
    fn thousands_compose(high in 2u128..1_000, low in 1u128..1_000) {
        let options = Options::new();
        let whole = spell_out(high * 1_000 + low, &options).unwrap();
        let high_words = spell_out(high, &options.cardinal_as_ordinal()).unwrap();
        let low_words = spell_out(low, &options).unwrap();
        prop_assert_eq!(whole, format!("{} mille {}", high_words, low_words));
    }

    #[test]
    fn below_seventy_regions_agree(value in 0u128..70, mode in any_mode()) {
        let france = spell_out(value, &Options::new().mode(mode)).unwrap();
        for region in [Region::Belgium, Region::Switzerland] {
            let other = spell_out(value, &Options::new().mode(mode).region(region)).unwrap();
            prop_assert_eq!(&france, &other);
        }
    }

    #[test]
    fn regional_decades_from_seventy(
        value in 70u128..=99,
        ordinal in any::<bool>(),
        feminine in any::<bool>(),
    ) {
        let mut options = Options::new().mode(if ordinal { Mode::Ordinal } else { Mode::Cardinal });
        if feminine {
            options = options.feminine();
        }
        let france = spell_out(value, &options).unwrap();
        let swiss = spell_out(value, &options.region(Region::Switzerland)).unwrap();
        prop_assert_ne!(&france, &swiss);

        let tens = ["septante", "huitante", "nonante"][(value / 10 - 7) as usize];
        let ones = value % 10;
        let expected = match ones {
            0 if ordinal => format!("{}ième", tens.trim_end_matches('e')),
            0 => tens.to_string(),
            1 if ordinal => format!("{} et unième", tens),
            1 => format!("{} et {}", tens, spell_out(ones, &options).unwrap()),
            _ => format!("{}-{}", tens, spell_out(ones, &options).unwrap()),
        };
        prop_assert_eq!(swiss, expected);
    }

    #[test]
    fn negative_cardinals_are_prefixed(value in 1i128..=i128::MAX) {
        let options = Options::new();
        let positive = spell_out(value, &options).unwrap();
        let negative = spell_out(-value, &options).unwrap();
        prop_assert_eq!(negative, format!("moins {}", positive));
    }

    #[test]
    fn negative_ordinals_are_rejected(value in 1i64..=i64::MAX) {
        let result = spell_out(-value, &Options::new().ordinal());
        prop_assert!(
            matches!(result, Err(SpellError::NegativeOrdinal { .. })),
            "expected NegativeOrdinal error"
        );
    }

    #[test]
    fn suffix_is_one_of_five(value in any::<u64>(), options in any_options()) {
        let suffix = spell_out(value, &options.ordinal_suffix()).unwrap();
        prop_assert!(["er", "re", "d", "de", "e"].contains(&suffix.as_str()));
    }
}
