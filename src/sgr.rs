//! Basic SGR fragment splitting
//!
//! Only the parameter list of a single `ESC [ ... m` fragment is handled.
//! Extended color forms (`38;5;n`, `38;2;r;g;b`) are not interpreted; their
//! parameters are passed through like any other code.

use crate::color::ColorError;
use crate::palette::ColorOverrides;
use crate::state::RenderColorState;

const ESC: char = '\x1b';

/// Split an SGR fragment into its parameter codes.
///
/// Accepts `"\x1b[1;31m"`, `"[1;31m"`, `"1;31m"` or a bare `"31"`. An empty
/// parameter list yields no codes.
///
/// # Examples
///
/// ```
/// use promptpix::sgr::codes;
///
/// assert_eq!(codes("\x1b[1;31;44m"), vec!["1", "31", "44"]);
/// assert_eq!(codes("32"), vec!["32"]);
/// ```
pub fn codes(fragment: &str) -> Vec<&str> {
    let body = fragment.strip_prefix(ESC).unwrap_or(fragment);
    let body = body.strip_prefix('[').unwrap_or(body);
    let body = body.strip_suffix('m').unwrap_or(body);

    if body.is_empty() {
        return Vec::new();
    }
    body.split(';').collect()
}

/// Apply every code of a fragment to `state`, in order.
///
/// Stops at the first invalid override; codes before it stay applied.
pub fn apply_fragment(
    state: &mut RenderColorState,
    fragment: &str,
    overrides: &ColorOverrides,
) -> Result<(), ColorError> {
    for code in codes(fragment) {
        state.set_base16_color(code, overrides)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{HexColor, Rgb};

    #[test]
    fn test_codes_full_escape() {
        assert_eq!(codes("\x1b[31m"), vec!["31"]);
        assert_eq!(codes("\x1b[1;31;44m"), vec!["1", "31", "44"]);
    }

    #[test]
    fn test_codes_without_escape() {
        assert_eq!(codes("[90m"), vec!["90"]);
        assert_eq!(codes("97;100m"), vec!["97", "100"]);
        assert_eq!(codes("42"), vec!["42"]);
    }

    #[test]
    fn test_codes_empty() {
        assert!(codes("\x1b[m").is_empty());
        assert!(codes("").is_empty());
    }

    #[test]
    fn test_codes_keeps_empty_params() {
        assert_eq!(codes("\x1b[;31m"), vec!["", "31"]);
    }

    #[test]
    fn test_apply_fragment_sets_both_slots() {
        let mut state = RenderColorState::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
        apply_fragment(&mut state, "\x1b[1;31;44m", &ColorOverrides::new()).unwrap();
        assert_eq!(state.foreground, Rgb::new(222, 56, 43));
        assert_eq!(state.background, Rgb::new(0, 111, 184));
    }

    #[test]
    fn test_apply_fragment_stops_on_invalid_override() {
        let mut state = RenderColorState::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
        let overrides = ColorOverrides::from([("blue".to_string(), HexColor::from("nope"))]);
        let result = apply_fragment(&mut state, "\x1b[31;44m", &overrides);
        assert!(result.is_err());
        assert_eq!(state.foreground, Rgb::new(222, 56, 43));
        assert_eq!(state.background, Rgb::new(0, 0, 0));
    }
}
