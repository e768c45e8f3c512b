//! Format checks for the identity documents accepted at intake.
//!
//! These only check the shape of the number read off a document.  They say
//! nothing about whether the document is genuine.

use healthverify_contracts::identity::DocumentKind;

use crate::sa_id::ID_LENGTH;

/// Return true if `number` has the shape expected for `kind`.
///
/// - South African ID: exactly 13 digits
/// - Passport: one or two uppercase letters followed by 6–9 digits
/// - Asylum permit: `ASY` followed by at least 6 digits
/// - Work permit: `WP` followed by at least 6 digits
pub fn check_document_number(kind: DocumentKind, number: &str) -> bool {
    match kind {
        DocumentKind::SouthAfricanId => {
            number.len() == ID_LENGTH && all_digits(number)
        }
        DocumentKind::Passport => {
            let letters = number.bytes().take_while(u8::is_ascii_uppercase).count();
            let rest = &number[letters..];
            (1..=2).contains(&letters) && (6..=9).contains(&rest.len()) && all_digits(rest)
        }
        DocumentKind::AsylumPermit => prefixed_serial(number, "ASY"),
        DocumentKind::WorkPermit => prefixed_serial(number, "WP"),
    }
}

fn prefixed_serial(number: &str, prefix: &str) -> bool {
    number
        .strip_prefix(prefix)
        .is_some_and(|serial| serial.len() >= 6 && all_digits(serial))
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
