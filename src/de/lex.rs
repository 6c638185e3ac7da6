//! Hand-rolled matchers for the token shapes of ASCII bodies.
//!
//! Every matcher looks at the start of its input and returns the length of the
//! matched token, or `None` when the input does not start with one.

use crate::schema::LexClass;

fn digits(s: &[u8]) -> usize {
    s.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn sign(s: &[u8]) -> usize {
    usize::from(matches!(s.first(), Some(b'+' | b'-')))
}

pub(crate) fn whitespace(s: &[u8]) -> usize {
    s.iter().take_while(|b| b.is_ascii_whitespace()).count()
}

/// `[0-9]+`
pub(crate) fn unsigned(s: &[u8]) -> Option<usize> {
    match digits(s) {
        0 => None,
        n => Some(n),
    }
}

/// `[-+]?[0-9]+`
pub(crate) fn signed(s: &[u8]) -> Option<usize> {
    let start = sign(s);
    unsigned(&s[start..]).map(|n| start + n)
}

/// `[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?`, plus a bare trailing dot as in `1.`
pub(crate) fn decimal(s: &[u8]) -> Option<usize> {
    let mut pos = sign(s);

    let int_len = digits(&s[pos..]);
    let frac_len = match s.get(pos + int_len) {
        Some(b'.') => digits(&s[pos + int_len + 1..]),
        _ => 0,
    };
    if frac_len > 0 {
        pos += int_len + 1 + frac_len;
    } else if int_len > 0 {
        pos += int_len;
        if s.get(pos) == Some(&b'.') {
            pos += 1;
        }
    } else {
        return None;
    }

    if matches!(s.get(pos), Some(b'e' | b'E')) {
        let exp_sign = sign(&s[pos + 1..]);
        let exp_len = digits(&s[pos + 1 + exp_sign..]);
        if exp_len > 0 {
            pos += 1 + exp_sign + exp_len;
        }
    }

    Some(pos)
}

pub(crate) fn token(class: LexClass, s: &[u8]) -> Option<usize> {
    match class {
        LexClass::Signed => signed(s),
        LexClass::Unsigned => unsigned(s),
        LexClass::Decimal => decimal(s),
    }
}

/// `^\s*3\s+([0-9]+)\s+([0-9]+)\s+([0-9]+)`, yielding the three indices.
///
/// Indices that do not fit in a `u32` make the line a non-match.
pub(crate) fn triangle(line: &str) -> Option<[u32; 3]> {
    let s = line.as_bytes();
    let mut pos = whitespace(s);
    if s.get(pos) != Some(&b'3') {
        return None;
    }
    pos += 1;

    let mut indices = [0u32; 3];
    for index in &mut indices {
        let gap = whitespace(&s[pos..]);
        if gap == 0 {
            return None;
        }
        pos += gap;

        let len = unsigned(&s[pos..])?;
        *index = line[pos..pos + len].parse().ok()?;
        pos += len;
    }

    Some(indices)
}
