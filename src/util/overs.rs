/// Converts an overs string such as `"14.3"` into a ball count
/// (`14 * 6 + 3 = 87`).
///
/// Used as a fallback when a match record carries no raw ball count. Either
/// component failing to parse contributes 0, matching the degrade-to-zero
/// convention for malformed scoring input.
pub fn overs_to_balls(overs: &str) -> i32 {
    let mut parts = overs.splitn(2, '.');

    let whole = parts
        .next()
        .and_then(|part| part.trim().parse::<i32>().ok())
        .unwrap_or(0);
    let balls = parts
        .next()
        .and_then(|part| part.trim().parse::<i32>().ok())
        .unwrap_or(0);

    whole * 6 + balls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_partial_overs() {
        assert_eq!(overs_to_balls("14.3"), 87);
        assert_eq!(overs_to_balls("20"), 120);
        assert_eq!(overs_to_balls("0.4"), 4);
    }

    #[test]
    fn malformed_components_contribute_zero() {
        assert_eq!(overs_to_balls(""), 0);
        assert_eq!(overs_to_balls("abc"), 0);
        assert_eq!(overs_to_balls("12.x"), 72);
    }
}
