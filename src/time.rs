pub type Time = u32;

/// Seconds since midnight for an `HH:MM:SS` string.
///
/// Hours past 23 are kept as is for trips running after midnight. Anything
/// that does not parse counts as midnight.
pub fn parse_time(value: Option<&str>) -> Time {
    value.and_then(try_parse_time).unwrap_or(0)
}

fn try_parse_time(value: &str) -> Option<Time> {
    let mut parts = value.trim().split(':');
    let (h, m, s) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let hours: Time = h.trim().parse().ok()?;
    let minutes: Time = m.trim().parse().ok()?;
    let seconds: Time = s.trim().parse().ok()?;
    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}
