/// Simplistic transformation from degrees, minutes and seconds-with-decimals
/// to degrees-with-decimals. No sanity check: Sign taken from degree-component,
/// minutes forced to unsigned by u16 type, but passing a negative value for
/// seconds leads to undefined behaviour.
pub fn dms_to_dd(d: i32, m: u16, s: f64) -> f64 {
    d.signum() as f64 * (d.abs() as f64 + (m as f64 + s / 60.) / 60.)
}

/// Simplistic transformation from degrees and minutes-with-decimals
/// to degrees-with-decimals. No sanity check: Sign taken from
/// degree-component, but passing a negative value for minutes leads
/// to undefined behaviour.
pub fn dm_to_dd(d: i32, m: f64) -> f64 {
    d.signum() as f64 * (d.abs() as f64 + (m / 60.))
}

/// Parse an angle given either as decimal degrees (`-37.554082`), or in
/// sexagesimal notation, as `d:m:s` or `d:m` (`-37:33:14.7`).
///
/// An optional trailing hemisphere letter is accepted: `N` and `E` leave
/// the sign as is, `S` and `W` negate it (`37:33:14.7S`).
///
/// Returns `None` if the text is not an angle, or if the minutes or seconds
/// are outside the interval [0, 60).
pub fn parse_angle(text: &str) -> Option<f64> {
    let mut text = text.trim();

    let mut sign = 1.0;
    if let Some(last) = text.chars().last() {
        match last.to_ascii_uppercase() {
            'N' | 'E' => text = &text[..text.len() - 1],
            'S' | 'W' => {
                sign = -1.0;
                text = &text[..text.len() - 1];
            }
            _ => (),
        }
    }

    // The sign of the degree component applies to the full angle, so we
    // take care of it up front: "-0:30" is minus half a degree
    let text = text.trim();
    let (text, negative) = match text.strip_prefix('-') {
        Some(stripped) => (stripped, true),
        None => (text.strip_prefix('+').unwrap_or(text), false),
    };
    if negative {
        sign = -sign;
    }

    let parts: Vec<&str> = text.split(':').map(str::trim).collect();
    if parts.iter().any(|p| p.is_empty() || p.starts_with(['-', '+'])) {
        return None;
    }

    let degrees = parts[0].parse::<f64>().ok()?;
    let angle = match parts.len() {
        1 => degrees,
        2 => {
            let minutes = parts[1].parse::<f64>().ok()?;
            if !(0.0..60.0).contains(&minutes) {
                return None;
            }
            degrees + minutes / 60.
        }
        3 => {
            let minutes = parts[1].parse::<u16>().ok()?;
            let seconds = parts[2].parse::<f64>().ok()?;
            if minutes >= 60 || !(0.0..60.0).contains(&seconds) {
                return None;
            }
            degrees + (minutes as f64 + seconds / 60.) / 60.
        }
        _ => return None,
    };

    if !angle.is_finite() {
        return None;
    }
    Some(sign * angle)
}

// ----- T E S T S ---------------------------------------------------------------------
