use proptest::prelude::*;

use super::*;
use crate::tables::TableVariant;

fn keys(key0: &str, key1: &str, key2: &str) -> PhoneticKeys {
    PhoneticKeys {
        key0: key0.to_string(),
        key1: key1.to_string(),
        key2: key2.to_string(),
    }
}

fn custom_encoder(attached: &str) -> Encoder {
    let toml = format!(
        r#"
[vowels]
"ଅ" = "A"

[consonants]
"କ" = "K"
"ର" = "R"

[modifiers]
"ା" = "1"
"ଂ" = "7"

[attached]
{attached}

[reduction]
broad = "17"
narrow = "7"
"#
    );
    Encoder::from_toml(&toml).unwrap()
}

#[test]
fn test_golden_words() {
    let enc = Encoder::new();
    assert_eq!(enc.encode("ଅଂଶ"), keys("ASH", "ASH", "A7SH"));
    assert_eq!(enc.encode("ଭ୍ରମର"), keys("BHRMR", "BH2RMR", "BH2RMR"));
    assert_eq!(enc.encode("ଭ୍ରମରେ"), keys("BHRMR", "BH2RMR3", "BH2RMR3"));
    assert_eq!(enc.encode("ଭ୍ରମଣ"), keys("BHRMNH", "BH2RMNH", "BH2RMNH"));
}

#[test]
fn test_global_encode_matches_instance() {
    assert_eq!(encode("ଅଂଶ"), Encoder::new().encode("ଅଂଶ"));
}

#[test]
fn test_init_custom_after_global_fails() {
    let _ = global();
    let err = init_custom(crate::tables::DEFAULT_TABLES_TOML).unwrap_err();
    assert!(matches!(err, TableError::AlreadyInitialized));
}

#[test]
fn test_init_custom_after_global_keeps_default_tables() {
    let before = global().encode("ଫ");
    let err = init_custom(crate::tables::ODPHONE_TABLES_TOML).unwrap_err();
    assert!(matches!(err, TableError::AlreadyInitialized));
    assert_eq!(global().encode("ଫ"), before);
    assert_eq!(encode("ଫ").key2, "PH");
}

#[cfg(feature = "trace")]
#[test]
fn test_trace_feature_compiles_debug_in() {
    use tracing::level_filters::{LevelFilter, STATIC_MAX_LEVEL};
    assert!(STATIC_MAX_LEVEL >= LevelFilter::DEBUG);
}

#[test]
fn test_init_custom_rejects_invalid_tables() {
    let err = init_custom("[vowels]").unwrap_err();
    assert!(matches!(err, TableError::Parse(_)));
}

#[test]
fn test_empty_input() {
    let enc = Encoder::new();
    assert_eq!(enc.encode(""), PhoneticKeys::default());
    assert!(enc.encode("").is_empty());
}

#[test]
fn test_non_odia_input() {
    let enc = Encoder::new();
    assert_eq!(enc.encode("hello"), PhoneticKeys::default());
    assert_eq!(enc.encode("नमस्ते"), PhoneticKeys::default());
}

#[test]
fn test_mixed_script_is_filtered() {
    let enc = Encoder::new();
    assert_eq!(enc.encode("ଅଂ-ଶ x"), enc.encode("ଅଂଶ"));
    assert_eq!(enc.encode(" ଭ୍ରମର\n"), keys("BHRMR", "BH2RMR", "BH2RMR"));
}

#[test]
fn test_unknown_odia_glyphs_vanish() {
    let enc = Encoder::new();
    // ୧ is an Odia digit and belongs to no table
    assert_eq!(enc.encode("କ୧"), keys("K", "K", "K"));
    assert_eq!(enc.encode("୧୨"), PhoneticKeys::default());
}

#[test]
fn test_compound_priority() {
    let enc = Encoder::new();
    assert_eq!(enc.encode("ଙ୍ଗ"), keys("NG", "NG", "NG"));
    assert_eq!(enc.encode("କ୍ତ"), keys("K", "K2", "K2"));
    assert_eq!(enc.encode("ଙ୍ଘ").key2, "NG2");
    // Without the compound entry this would be WN2GH
    assert_ne!(enc.encode("ଙ୍ଘ").key2, "WN2GH");
}

#[test]
fn test_modified_compound() {
    let enc = Encoder::new();
    assert_eq!(enc.encode("କ୍ତି"), keys("K", "K25", "K25"));
    let tokens = enc.tokenize("କ୍ତି");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Compound);
    assert!(tokens[0].attached);
}

#[test]
fn test_consonant_with_virama_is_not_a_compound() {
    let enc = Encoder::new();
    assert_eq!(enc.encode("କ୍ର"), keys("KR", "K2R", "K2R"));
}

#[test]
fn test_second_modifier_is_standalone() {
    let enc = Encoder::new();
    assert_eq!(enc.encode("କାଂ"), keys("K", "K1", "K17"));
    let kinds: Vec<TokenKind> = enc.tokenize("କାଂ").iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Consonant, TokenKind::Modifier]);
}

#[test]
fn test_leading_modifier_is_standalone() {
    let enc = Encoder::new();
    assert_eq!(enc.encode("ଂ"), keys("", "", "7"));
    assert_eq!(enc.encode("ାକ"), keys("K", "1K", "1K"));
}

#[test]
fn test_overlapping_compounds_resolve_left_to_right() {
    let enc = Encoder::new();
    // ଙ୍କ and କ୍ତ share କ; the leftmost cluster wins and absorbs the virama
    let tokens = enc.tokenize("ଙ୍କ୍ତ");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].source, "ଙ୍କ୍");
    assert_eq!(tokens[0].code, "K32");
    assert_eq!(enc.encode("ଙ୍କ୍ତ").key2, "K32T");
}

#[test]
fn test_vowel_with_modifier() {
    let enc = Encoder::new();
    let tokens = enc.tokenize("ଅଂଶ");
    assert_eq!(tokens[0].kind, TokenKind::Vowel);
    assert_eq!(tokens[0].source, "ଅଂ");
    assert_eq!(tokens[0].code, "A7");
    assert_eq!(tokens[1].kind, TokenKind::Consonant);
    assert!(!tokens[1].attached);
}

#[test]
fn test_attached_override() {
    let plain = custom_encoder("");
    let with_override = custom_encoder("\"କା\" = \"KAA\"");

    assert_eq!(plain.encode("କା"), keys("K", "K1", "K1"));
    assert_eq!(with_override.encode("କା"), keys("KAA", "KAA", "KAA"));

    // Bare glyph plus a standalone mark is unaffected
    assert_eq!(with_override.encode("କ"), plain.encode("କ"));
    assert_eq!(with_override.encode("କଂ"), plain.encode("କଂ"));
}

#[test]
fn test_empty_modifier_code_drops_mark() {
    let toml = crate::tables::DEFAULT_TABLES_TOML
        .replace("\"\u{0B3C}\" = \"2\"", "\"\u{0B3C}\" = \"\"");
    let enc = Encoder::from_toml(&toml).unwrap();
    assert_eq!(enc.encode("\u{0B21}\u{0B3C}").key2, "D");
    assert_eq!(Encoder::new().encode("\u{0B21}\u{0B3C}").key2, "D2");
}

#[test]
fn test_from_toml_error() {
    assert!(Encoder::from_toml("").is_err());
}

#[test]
fn test_encode_all() {
    let enc = Encoder::new();
    let out = enc.encode_all(["ଅଂଶ", "", "ଭ୍ରମଣ"]);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].key2, "A7SH");
    assert!(out[1].is_empty());
    assert_eq!(out[2].key0, "BHRMNH");
}

#[test]
fn test_explain() {
    let enc = Encoder::new();
    let result = enc.explain("x ଭ୍ରମର");
    assert_eq!(result.filtered, "ଭ୍ରମର");
    assert_eq!(result.token_line(), "ଭ୍→BH2 ର→R ମ→M ର→R");
    assert_eq!(result.keys, enc.encode("ଭ୍ରମର"));
}

#[test]
fn test_explain_serializes() {
    let result = Encoder::new().explain("ଅଂ");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["tokens"][0]["kind"], "vowel");
    assert_eq!(json["tokens"][0]["code"], "A7");
    assert!(json["tokens"][0].get("width").is_none());
    assert_eq!(json["keys"]["key2"], "A7");
}

#[test]
fn test_token_kind_name_matches_serialized_form() {
    for kind in [
        TokenKind::Compound,
        TokenKind::Consonant,
        TokenKind::Vowel,
        TokenKind::Modifier,
    ] {
        assert_eq!(serde_json::to_value(kind).unwrap(), kind.name());
        assert_eq!(kind.to_string(), kind.name());
    }
}

#[test]
fn test_odphone_variant() {
    let enc = Encoder::with_tables(PhoneTables::variant(TableVariant::Odphone));
    assert_eq!(enc.encode("ଭ୍ରମର"), keys("VRMR", "V2RMR", "V2RMR"));
    assert_eq!(enc.encode("ଫ").key2, "F");
    assert_eq!(enc.encode("ୱ").key2, "W");
    assert_eq!(enc.encode("ଇ").key2, "E");
    // Shared codes are unchanged
    assert_eq!(enc.encode("ଅଂଶ"), Encoder::new().encode("ଅଂଶ"));
}

#[test]
fn test_tuple_conversion() {
    let (k0, k1, k2): (String, String, String) = Encoder::new().encode("ଅଂଶ").into();
    assert_eq!((k0.as_str(), k1.as_str(), k2.as_str()), ("ASH", "ASH", "A7SH"));
}

#[test]
fn test_match_level() {
    let enc = Encoder::new();
    let a = enc.encode("ଭ୍ରମର");
    assert_eq!(a.match_level(&a), Some(MatchLevel::Key2));
    assert_eq!(a.match_level(&enc.encode("ଭ୍ରମରେ")), Some(MatchLevel::Key0));
    assert_eq!(
        enc.encode("ଅଂଶ").match_level(&enc.encode("ଅଶ")),
        Some(MatchLevel::Key1)
    );
    assert_eq!(a.match_level(&enc.encode("ଅଶ")), None);
    // Two non-Odia words do not match on their empty keys
    assert_eq!(enc.encode("abc").match_level(&enc.encode("xyz")), None);
}

#[test]
fn test_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Encoder>();

    let enc = Encoder::new();
    let words = ["ଅଂଶ", "ଭ୍ରମର", "ଭ୍ରମରେ", "ଭ୍ରମଣ"];
    let expected = enc.encode_all(words);
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(enc.encode_all(words), expected));
        }
    });
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

fn arb_odia_char() -> impl Strategy<Value = char> {
    prop_oneof![
        3 => prop::sample::select(vec![
            'ଅ', 'ଆ', 'ଇ', 'ଏ', 'କ', 'ଙ', 'ଞ', 'ଜ', 'ଗ', 'ଘ', 'ତ', 'ଭ', 'ର', 'ମ', 'ଣ', 'ଶ',
            '୍', 'ା', 'ି', 'େ', 'ଂ', 'ଃ', '଼', 'ଽ',
        ]),
        1 => prop::char::range('\u{0B00}', '\u{0B7F}'),
    ]
}

fn arb_foreign_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range(' ', '~'),
        prop::char::range('\u{0900}', '\u{097F}'),
        Just('\u{200D}'),
    ]
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_odia_char(), 0..12).prop_map(|cs| cs.into_iter().collect())
}

fn is_subsequence(short: &str, long: &str) -> bool {
    let mut it = long.chars();
    short.chars().all(|c| it.any(|l| l == c))
}

fn letters(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_uppercase()).collect()
}

proptest! {
    #[test]
    fn prop_deterministic(word in arb_word()) {
        let enc = Encoder::new();
        prop_assert_eq!(enc.encode(&word), enc.encode(&word));
    }

    #[test]
    fn prop_alphabet_closure(word in arb_word()) {
        let k = Encoder::new().encode(&word);
        for key in [&k.key0, &k.key1, &k.key2] {
            prop_assert!(key.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()), "{}", key);
        }
    }

    #[test]
    fn prop_monotonic_reduction(word in arb_word()) {
        let k = Encoder::new().encode(&word);
        prop_assert!(k.key0.len() <= k.key1.len());
        prop_assert!(k.key1.len() <= k.key2.len());
        prop_assert!(is_subsequence(&k.key1, &k.key2));
        prop_assert!(is_subsequence(&k.key0, &k.key1));
        prop_assert_eq!(letters(&k.key0), letters(&k.key2));
        prop_assert_eq!(letters(&k.key1), letters(&k.key2));
    }

    #[test]
    fn prop_script_filter_idempotent(
        pairs in prop::collection::vec((arb_odia_char(), prop::option::of(arb_foreign_char())), 0..12)
    ) {
        let clean: String = pairs.iter().map(|(c, _)| *c).collect();
        let mut noisy = String::new();
        for (c, foreign) in &pairs {
            if let Some(f) = foreign {
                noisy.push(*f);
            }
            noisy.push(*c);
        }
        let enc = Encoder::new();
        prop_assert_eq!(enc.encode(&noisy), enc.encode(&clean));
    }
}
