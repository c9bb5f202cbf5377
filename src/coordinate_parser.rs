//! Free-text coordinate parsing.
//!
//! A coordinate string carries a latitude magnitude with an N/S hemisphere
//! letter and a longitude magnitude with an E/W letter, in either order,
//! e.g. "26.86296° N, 81.04288° E". Each component is found by scanning the
//! whole string independently; the first match per hemisphere alphabet wins.

use crate::types::{GeoPoint, ParseError};

pub fn parse_point(input: &str) -> Result<GeoPoint, ParseError> {
    let (lat_magnitude, lat_hemisphere) = find_component(input, ['N', 'S'])
        .ok_or_else(|| ParseError::InvalidFormat(input.to_string()))?;
    let (lng_magnitude, lng_hemisphere) = find_component(input, ['E', 'W'])
        .ok_or_else(|| ParseError::InvalidFormat(input.to_string()))?;

    let lat = if lat_hemisphere == 'S' {
        -lat_magnitude
    } else {
        lat_magnitude
    };
    let lng = if lng_hemisphere == 'W' {
        -lng_magnitude
    } else {
        lng_magnitude
    };

    Ok(GeoPoint { lat, lng })
}

/// Leftmost match of `<digits>.<digits> [ws] ° [ws] <hemisphere letter>`,
/// case-insensitive on the letter. No range check: "999.0° N" matches.
fn find_component(input: &str, hemispheres: [char; 2]) -> Option<(f64, char)> {
    let chars: Vec<char> = input.chars().collect();
    (0..chars.len()).find_map(|start| match_at(&chars, start, hemispheres))
}

fn match_at(chars: &[char], start: usize, hemispheres: [char; 2]) -> Option<(f64, char)> {
    let mut pos = start;
    let mut number = String::new();

    if take_digits(chars, &mut pos, &mut number) == 0 {
        return None;
    }
    if chars.get(pos) != Some(&'.') {
        return None;
    }
    number.push('.');
    pos += 1;
    if take_digits(chars, &mut pos, &mut number) == 0 {
        return None;
    }

    skip_whitespace(chars, &mut pos);
    if chars.get(pos) != Some(&'°') {
        return None;
    }
    pos += 1;
    skip_whitespace(chars, &mut pos);

    let letter = chars.get(pos)?.to_ascii_uppercase();
    if letter != hemispheres[0] && letter != hemispheres[1] {
        return None;
    }

    number.parse().ok().map(|magnitude| (magnitude, letter))
}

fn take_digits(chars: &[char], pos: &mut usize, number: &mut String) -> usize {
    let mut count = 0;
    while let Some(c) = chars.get(*pos) {
        if !c.is_ascii_digit() {
            break;
        }
        number.push(*c);
        *pos += 1;
        count += 1;
    }
    count
}

fn skip_whitespace(chars: &[char], pos: &mut usize) {
    while chars.get(*pos).is_some_and(|c| c.is_whitespace()) {
        *pos += 1;
    }
}
