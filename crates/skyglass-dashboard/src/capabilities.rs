//! Platform features the dashboard may use, decided once at startup.

use skyglass_core::ThemePreference;

/// Which optional platform features are available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Voice input for searches
    pub speech: bool,
    /// Device position lookup
    pub geolocation: bool,
    /// Producing a shareable summary
    pub share: bool,
}

impl Capabilities {
    /// What a plain terminal offers. Only sharing, and only if enabled.
    pub fn terminal(share_enabled: bool) -> Self {
        Self {
            speech: false,
            geolocation: false,
            share: share_enabled,
        }
    }
}

/// Theme hinted by the terminal through `COLORFGBG` ("fg;bg").
pub fn system_theme() -> Option<ThemePreference> {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| theme_from_colorfgbg(&value))
}

fn theme_from_colorfgbg(value: &str) -> Option<ThemePreference> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    // 0-6 and 8 are the dark slots of the 16-colour palette
    if background <= 6 || background == 8 {
        Some(ThemePreference::Dark)
    } else {
        Some(ThemePreference::Light)
    }
}

/// Saved choice first, then the terminal's hint, then light.
pub fn initial_theme(saved: Option<ThemePreference>) -> ThemePreference {
    saved.or_else(system_theme).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_capabilities() {
        let caps = Capabilities::terminal(true);
        assert!(caps.share);
        assert!(!caps.speech);
        assert!(!caps.geolocation);
        assert!(!Capabilities::terminal(false).share);
    }

    #[test]
    fn test_colorfgbg() {
        assert_eq!(theme_from_colorfgbg("15;0"), Some(ThemePreference::Dark));
        assert_eq!(theme_from_colorfgbg("0;15"), Some(ThemePreference::Light));
        assert_eq!(theme_from_colorfgbg("12;default;8"), Some(ThemePreference::Dark));
        assert_eq!(theme_from_colorfgbg("garbage"), None);
    }

    #[test]
    fn test_saved_theme_wins() {
        assert_eq!(
            initial_theme(Some(ThemePreference::Dark)),
            ThemePreference::Dark
        );
    }
}
