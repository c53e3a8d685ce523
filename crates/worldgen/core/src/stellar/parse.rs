use core::str::FromStr;

use super::star::{Luminosity, SpectralClass, Star, StarKind};

/// Reads a star listing such as `"G2 V M3 V DK BD"` back into stars.
///
/// A listing records neither orbits nor which stars are companions, so the
/// result is a flat list in listing order. Tokens that cannot be read are
/// logged and skipped.
pub fn parse_stars(text: &str) -> Vec<Star> {
    let mut stars = Vec::new();
    let mut tokens = text.split_whitespace().peekable();

    while let Some(token) = tokens.next() {
        if token == "BD" {
            stars.push(Star::new(StarKind::BrownDwarf));
            continue;
        }

        let mut chars = token.chars();
        let Some(first) = chars.next() else {
            continue;
        };

        if first == 'D' {
            let rest = chars.as_str();
            if rest.is_empty() {
                stars.push(Star::new(StarKind::WhiteDwarf { class: None }));
            } else if let Ok(class) = SpectralClass::from_str(rest) {
                stars.push(Star::new(StarKind::WhiteDwarf { class: Some(class) }));
            } else {
                tracing::warn!(token, "unreadable white dwarf; skipped");
            }
            continue;
        }

        let Ok(class) = SpectralClass::from_str(first.encode_utf8(&mut [0; 4])) else {
            tracing::warn!(token, "unreadable star; skipped");
            continue;
        };

        let decimal = match chars.next() {
            Some(digit) if digit.is_ascii_digit() => digit as u8 - b'0',
            None => 0,
            Some(_) => {
                tracing::warn!(token, "unreadable spectral decimal; using 0");
                0
            }
        };

        match tokens.peek().map(|next| Luminosity::from_str(next)) {
            Some(Ok(luminosity)) => {
                tokens.next();
                stars.push(Star::normal(class, decimal, luminosity));
            }
            Some(Err(_)) => {
                tracing::warn!(token, "star has no luminosity class; skipped");
            }
            None => {
                tracing::warn!(token, "star listing ends before luminosity class; skipped");
            }
        }
    }

    stars
}
