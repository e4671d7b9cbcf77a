use crate::element::{ElementKind, GrammarElement};

#[test]
fn wire_codes_are_frozen() {
    // Renumbering any of these breaks the sampling engine.
    assert_eq!(ElementKind::End.code(), 0);
    assert_eq!(ElementKind::Alt.code(), 1);
    assert_eq!(ElementKind::RuleRef.code(), 2);
    assert_eq!(ElementKind::Char.code(), 3);
    assert_eq!(ElementKind::CharNot.code(), 4);
    assert_eq!(ElementKind::CharRangeUpper.code(), 5);
    assert_eq!(ElementKind::CharAlt.code(), 6);
}

#[test]
fn from_code_roundtrip() {
    for code in 0..=6u8 {
        let kind = ElementKind::from_code(code).unwrap();
        assert_eq!(kind.code(), code);
    }
    assert_eq!(ElementKind::from_code(7), None);
    assert_eq!(ElementKind::from_code(255), None);
}

#[test]
fn char_element_predicate() {
    assert!(GrammarElement::char_match('a' as u32).is_char_element());
    assert!(GrammarElement::char_not('a' as u32).is_char_element());
    assert!(GrammarElement::char_range_upper('z' as u32).is_char_element());
    assert!(GrammarElement::char_alt('0' as u32).is_char_element());

    assert!(!GrammarElement::END.is_char_element());
    assert!(!GrammarElement::ALT.is_char_element());
    assert!(!GrammarElement::rule_ref(3).is_char_element());
}

#[test]
fn markers_carry_no_value() {
    assert_eq!(GrammarElement::END.value, 0);
    assert_eq!(GrammarElement::ALT.value, 0);
}
