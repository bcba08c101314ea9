extern crate namefix;

use namefix::{decode_escapes, decode_escapes_opt, replace_each, replace_with, strip_accents, trim};

#[test]
fn strips_by_language() {
    let cases = [
        ("ĀāėĖ", "AaeE"),
        ("ĪīŌōŪū", "IiOoUu"),
        ("ŠšŽž", "SsZz"),
        ("ČčĎď", "CcDd"),
        ("éÉèÈàÀçÇùÙîÎ", "eEeEaAcCuUiI"),
        ("ß", "s"),
        ("Ññ", "Nn"),
        ("¡¿", "¡¿"),
        ("ãõÃÕ", "aoAO"),
        ("Café Restauraǹt Menü", "Cafe Restauraǹt Menu"),
        ("Français", "Francais"),
        ("Addréss 123 Ruë de là Pàix", "Address 123 Rue de la Paix"),
        ("Emaíl: ùser@domaín.cóm", "Email: user@domain com"),
        ("Thé qüick bröwn fóx jümps ovér thè läzy dög.", "The quick brown fox jumps over the lazy dog "),
        ("\"Hëllo\", saíd thé visítör.", "\"Hello\", said the visitor "),
        ("\x01\x02á\x03é\x04", "\x01\x02a\x03e\x04"),
    ];
    for &(input, expected) in &cases {
        assert_eq!(strip_accents(input), expected, "input: {:?}", input);
    }
}

#[test]
fn latin1_range_is_covered() {
    // U+00C0..U+00FF minus the arithmetic signs and the letters with no
    // plain equivalent
    for code in 0xC0u32..=0xFF {
        let c = std::char::from_u32(code).unwrap();
        if "×÷ÞþðÐ".contains(c) { continue; }
        let out = strip_accents(&c.to_string());
        assert!(out.is_ascii(), "{:?} -> {:?}", c, out);
    }
    assert_eq!(strip_accents("Ð"), "D");
}

#[test]
fn long_input() {
    let s = "áéíóúàèìòùâêîôûäëïöü".repeat(10_000);
    assert_eq!(strip_accents(&s), "aeiouaeiouaeiouaeiou".repeat(10_000));
}

#[test]
fn idempotent() {
    let samples = ["", "plain", "Pricé: $19.99 (15% óff)", "a, b,, c", "ŒŒ  œœ", "“a” ’b’"];
    for s in &samples {
        let once = strip_accents(s);
        assert_eq!(strip_accents(&once), once, "input: {:?}", s);
    }
}

#[test]
fn escape_round_trip_with_stripping() {
    assert_eq!(decode_escapes("\\u00c0 la carte"), "À la carte");
    assert_eq!(strip_accents(&decode_escapes("na\\u00efve")), "naive");
    assert_eq!(decode_escapes_opt(None), "");
}

#[test]
fn replace_primitives() {
    assert_eq!(replace_each(&["H", "e", "W"], &["h", "x", "w"], "Hello World"), "hxllo world");
    assert_eq!(replace_each(&["apple"], &["banana"], "I love apple."), "I love banana.");
    assert_eq!(replace_with(&["{", "}"], "", "{x}"), "x");
    assert_eq!(trim("***hello***", Some("*")), "hello");
    assert_eq!(trim("\thello\n", None), "hello");
}
