// Cifra Integration Tests
//
// These tests exercise the complete pipeline:
// canonicalization -> modular shift -> case restoration
//
// Run with: cargo test --test integration_test

use cifra_core::{Alphabet, CipherConfig, CipherEngine};

// Helper to build the engine used by most tests
fn sample_engine() -> CipherEngine {
    CipherEngine::new(CipherConfig::default())
}

#[test]
fn test_basic_shift() {
    let engine = sample_engine();
    assert_eq!(engine.encrypt("A", 1, "es"), "B");
    assert_eq!(engine.encrypt("a", 1, "es"), "b");
    assert_eq!(engine.encrypt("hola", 1, "es"), "ipmb");
}

#[test]
fn test_wraparound() {
    let engine = sample_engine();
    assert_eq!(engine.encrypt("Z", 1, "es"), "A");
    assert_eq!(engine.encrypt("z", 1, "es"), "a");
    assert_eq!(engine.decrypt("A", 1, "es"), "Z");
}

#[test]
fn test_enye_occupies_its_own_position() {
    let engine = sample_engine();
    // Ñ sits between N and O in the Spanish alphabet.
    assert_eq!(engine.encrypt("N", 1, "es"), "Ñ");
    assert_eq!(engine.encrypt("Ñ", 1, "es"), "O");
    assert_eq!(engine.encrypt("ñ", 1, "es"), "o");
    assert_eq!(engine.decrypt("O", 1, "es"), "Ñ");
}

#[test]
fn test_diacritics_collapse_before_shifting() {
    let engine = sample_engine();
    // é strips to e, then shifts to f; the output stays lowercase.
    assert_eq!(engine.encrypt("é", 1, "es"), "f");
    assert_eq!(engine.encrypt("É", 1, "es"), "F");
    assert_eq!(engine.encrypt("ü", 2, "es"), "w");
}

#[test]
fn test_cafe_round_trip_yields_canonical_form() {
    let engine = sample_engine();
    let encrypted = engine.encrypt("café", 3, "es");
    assert_eq!(engine.decrypt(&encrypted, 3, "es"), "cafe");
    assert_eq!(engine.canonical_text("café", "es"), "cafe");
}

#[test]
fn test_ligature_expansion_shifts_each_letter() {
    let engine = sample_engine();
    // straße -> strasse, then each letter moves by one: s->t, t->u, r->s,
    // a->b, s->t, s->t, e->f.
    assert_eq!(engine.encrypt("straße", 1, "es"), "tusbttf");
    assert_eq!(engine.decrypt("tusbttf", 1, "es"), "strasse");
    assert_eq!(engine.encrypt("Æ", 1, "es"), "BF");
    assert_eq!(engine.encrypt("œ", 1, "es"), "pf");
}

#[test]
fn test_non_alphabetic_pass_through() {
    let engine = sample_engine();
    for shift in [0, 1, 5, -7, 100] {
        assert_eq!(engine.encrypt("1984", shift, "es"), "1984");
        assert_eq!(engine.encrypt("  \t\n", shift, "es"), "  \t\n");
        assert_eq!(engine.encrypt("¿?¡!,;.", shift, "es"), "¿?¡!,;.");
    }
}

#[test]
fn test_case_preservation_for_every_letter() {
    let engine = sample_engine();
    let alphabet = Alphabet::spanish();
    for position in 0..alphabet.len() {
        let upper = alphabet.letter_at(position, true).to_string();
        let lower = alphabet.letter_at(position, false).to_string();
        let upper_out = engine.encrypt(&upper, 5, "es");
        let lower_out = engine.encrypt(&lower, 5, "es");
        assert_eq!(upper_out, upper_out.to_uppercase());
        assert_eq!(lower_out, lower_out.to_lowercase());
        assert_eq!(upper_out.to_lowercase(), lower_out);
    }
}

#[test]
fn test_round_trip_on_canonical_input() {
    let engine = sample_engine();
    let alphabet = Alphabet::spanish();
    for shift in -30..=30 {
        for position in 0..alphabet.len() {
            for uppercase in [false, true] {
                let letter = alphabet.letter_at(position, uppercase).to_string();
                let round = engine.decrypt(&engine.encrypt(&letter, shift, "es"), shift, "es");
                assert_eq!(round, letter, "shift {shift} position {position}");
            }
        }
    }
}

#[test]
fn test_shift_periodicity() {
    let engine = sample_engine();
    let text = "El Ñandú corre más rápido";
    for shift in [0, 1, 13, -4] {
        assert_eq!(
            engine.encrypt(text, shift, "es"),
            engine.encrypt(text, shift + 27, "es")
        );
        assert_eq!(
            engine.encrypt(text, shift, "en"),
            engine.encrypt(text, shift + 26, "en")
        );
    }
}

#[test]
fn test_zero_shift_equals_canonicalization() {
    let engine = sample_engine();
    let text = "¡El pingüino Ñoño comió œufs!";
    assert_eq!(engine.encrypt(text, 0, "es"), engine.canonical_text(text, "es"));
}

#[test]
fn test_alphabet_selected_at_call_time() {
    let engine = sample_engine();
    // Under en there is no ñ position; the letter collapses to n first.
    assert_eq!(engine.encrypt("ñ", 0, "en"), "n");
    assert_eq!(engine.encrypt("ñ", 0, "es"), "ñ");
    // N+1 lands on different letters because the alphabets differ in length
    // and layout.
    assert_eq!(engine.encrypt("N", 1, "en"), "O");
    assert_eq!(engine.encrypt("N", 1, "es"), "Ñ");
}

#[test]
fn test_unknown_alphabet_is_pass_through() {
    let engine = sample_engine();
    assert_eq!(engine.encrypt("señal", 9, "fr"), "señal");
    assert_eq!(engine.decrypt("señal", 9, "fr"), "señal");
}

#[test]
fn test_mixed_sentence() {
    let engine = sample_engine();
    let encrypted = engine.encrypt("Mañana, 3 cafés y 1 œuf.", 2, "es");
    assert_eq!(encrypted, "Ñcpcoc, 3 echgu a 1 qgwh.");
    let decrypted = engine.decrypt(&encrypted, 2, "es");
    assert_eq!(decrypted, "Mañana, 3 cafes y 1 oeuf.");
}

#[test]
fn test_facade_uses_default_alphabet() {
    assert_eq!(cifra_core::encrypt("A", 1, None), "B");
    assert_eq!(cifra_core::encrypt("Ñ", 1, None), "O");
    assert_eq!(cifra_core::decrypt("B", 1, None), "A");
    assert_eq!(cifra_core::encrypt("ñ", 0, Some("en")), "n");
}

#[test]
fn test_custom_alphabet_engine() {
    let vowels = Alphabet::from_upper("vowels", &['A', 'E', 'I', 'O', 'U'], Vec::new()).unwrap();
    let engine = CipherEngine::new(CipherConfig {
        alphabets: vec![vowels],
        default_alphabet: "vowels".to_string(),
    });
    // Consonants fall outside the alphabet and pass through.
    assert_eq!(engine.encrypt("mesa", 1, "vowels"), "mise");
    assert_eq!(engine.decrypt("mise", 1, "vowels"), "mesa");
}
