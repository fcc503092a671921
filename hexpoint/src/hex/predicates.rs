// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single-character classification predicates. All of these are pure and
//! total: they never fail, they just answer the question.

/// True iff the character is a hex letter, ie: `a-f` or `A-F`.
///
/// Decimal digits are deliberately excluded. This asymmetry with
/// [`is_hex_digit`] is a contract: callers use this predicate to tell
/// "definitely hex" content (at least one letter digit) apart from ambiguous
/// all-decimal content, eg: `"12a"` can only be base-16, while `"123"` could
/// be either base.
#[must_use]
pub fn is_hex_letter(c: char) -> bool { matches!(c, 'a'..='f' | 'A'..='F') }

/// True iff the character is any base-16 digit, ie: `0-9`, `a-f`, or `A-F`.
#[must_use]
pub fn is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

/// True iff any character in `text` satisfies [`is_hex_letter`]. False for
/// empty input. Callers holding an `Option<&str>` compose with
/// [`Option::is_some_and`].
#[must_use]
pub fn contains_hex_letter(text: &str) -> bool { text.chars().any(is_hex_letter) }

/// True iff the character is not a control character, per the Unicode
/// control character classification ([`char::is_control`]).
#[must_use]
pub fn is_printable(c: char) -> bool { !c.is_control() }
