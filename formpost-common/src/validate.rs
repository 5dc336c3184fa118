//! Email format check shared by the subscribe and feedback forms.

/// Returns `true` if `email` looks like `local-part@domain.tld`.
///
/// Equivalent to the pattern `^[^\s@]+@[^\s@]+\.[^\s@]+$` with ECMAScript's
/// `\s` class: exactly one `@`, no whitespace anywhere, a non-empty local
/// part, and a domain containing a dot with at least one character on either
/// side of it. No trimming or case folding is performed, so `" a@b.co"` is
/// rejected.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_pattern_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Some dot must have a non-empty label on both sides.
    domain
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .any(|(idx, _)| idx > 0 && idx + 1 < domain.len())
}

/// ECMAScript `\s`: Unicode `White_Space` without U+0085, plus U+FEFF.
fn is_pattern_whitespace(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}
