//! Grammar elements: the tagged (kind, value) units inside compiled rules.
//!
//! A compiled rule is a flat element sequence: one or more alternatives
//! separated by `Alt` markers and terminated by exactly one `End`. A
//! contiguous run of char-kind elements with no intervening `End`/`Alt`
//! encodes a single character-class test.

/// Rule identifier. Dense and monotonically assigned; the first name
/// registered gets 0.
pub type RuleId = u32;

/// Element kind with its wire code.
///
/// The numeric codes are a stability contract with the sampling engine and
/// must never be renumbered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[repr(u8)]
pub enum ElementKind {
    /// Terminates a rule's element sequence.
    End = 0,
    /// Separates alternatives inside a rule.
    Alt = 1,
    /// Reference to another rule; the value is its ID.
    RuleRef = 2,
    /// Matches one codepoint, or opens a character class.
    Char = 3,
    /// Opens a negated character class.
    CharNot = 4,
    /// Closes a range opened by the preceding char element.
    CharRangeUpper = 5,
    /// Adds another codepoint or range start to the open class.
    CharAlt = 6,
}

impl ElementKind {
    /// Wire code for this kind.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a wire code.
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::End,
            1 => Self::Alt,
            2 => Self::RuleRef,
            3 => Self::Char,
            4 => Self::CharNot,
            5 => Self::CharRangeUpper,
            6 => Self::CharAlt,
            _ => return None,
        })
    }

    /// True for the kinds that participate in character-class runs.
    #[inline]
    pub fn is_char(self) -> bool {
        matches!(
            self,
            Self::Char | Self::CharNot | Self::CharRangeUpper | Self::CharAlt
        )
    }
}

/// One tagged unit inside a compiled rule's sequence.
///
/// `value` carries a codepoint for char kinds, a rule ID for `RuleRef`, and
/// is 0 for `End` and `Alt`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GrammarElement {
    pub kind: ElementKind,
    pub value: u32,
}

impl GrammarElement {
    /// Sequence terminator.
    pub const END: GrammarElement = GrammarElement {
        kind: ElementKind::End,
        value: 0,
    };

    /// Alternative separator.
    pub const ALT: GrammarElement = GrammarElement {
        kind: ElementKind::Alt,
        value: 0,
    };

    /// Reference to rule `id`.
    #[inline]
    pub fn rule_ref(id: RuleId) -> Self {
        Self {
            kind: ElementKind::RuleRef,
            value: id,
        }
    }

    /// Single codepoint match, or the start of a positive class.
    #[inline]
    pub fn char_match(codepoint: u32) -> Self {
        Self {
            kind: ElementKind::Char,
            value: codepoint,
        }
    }

    /// Start of a negated class.
    #[inline]
    pub fn char_not(codepoint: u32) -> Self {
        Self {
            kind: ElementKind::CharNot,
            value: codepoint,
        }
    }

    /// Upper bound closing a range.
    #[inline]
    pub fn char_range_upper(codepoint: u32) -> Self {
        Self {
            kind: ElementKind::CharRangeUpper,
            value: codepoint,
        }
    }

    /// Additional class member.
    #[inline]
    pub fn char_alt(codepoint: u32) -> Self {
        Self {
            kind: ElementKind::CharAlt,
            value: codepoint,
        }
    }

    /// True when this element is part of a character-class run.
    #[inline]
    pub fn is_char_element(self) -> bool {
        self.kind.is_char()
    }
}
