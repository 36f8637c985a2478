use crate::error::SetupError;

/// Largest board width the terminal front end offers.
pub const MAX_WIDTH: usize = 16;
/// Largest board height the terminal front end offers.
pub const MAX_HEIGHT: usize = 12;

/// Board dimensions and the number of tokens in a row needed to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub width: usize,
    pub height: usize,
    pub match_length: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            width: 7,
            height: 6,
            match_length: 4,
        }
    }
}

impl GameSettings {
    pub fn new(width: usize, height: usize, match_length: usize) -> Self {
        GameSettings {
            width,
            height,
            match_length,
        }
    }

    /// Check the engine's construction precondition:
    /// `width, height >= 1` and `1 <= match_length <= min(width, height)`.
    pub fn validate(&self) -> Result<(), SetupError> {
        let fits = self.width >= 1
            && self.height >= 1
            && self.match_length >= 1
            && self.match_length <= self.width.min(self.height);
        if fits {
            Ok(())
        } else {
            Err(SetupError::InvalidConfiguration {
                width: self.width,
                height: self.height,
                match_length: self.match_length,
            })
        }
    }

    /// Pull every value into range: dimensions into `1..=MAX_*`, then the
    /// match length into `[1, min(width, height)]`. The result always
    /// passes [`GameSettings::validate`].
    pub fn clamped(self) -> Self {
        let width = self.width.clamp(1, MAX_WIDTH);
        let height = self.height.clamp(1, MAX_HEIGHT);
        let match_length = self.match_length.clamp(1, width.min(height));
        GameSettings {
            width,
            height,
            match_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_board() {
        let settings = GameSettings::default();
        assert_eq!(settings, GameSettings::new(7, 6, 4));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_long_match() {
        let settings = GameSettings::new(7, 3, 4);
        assert_eq!(
            settings.validate(),
            Err(SetupError::InvalidConfiguration {
                width: 7,
                height: 3,
                match_length: 4
            })
        );
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        assert!(GameSettings::new(0, 6, 1).validate().is_err());
        assert!(GameSettings::new(7, 0, 1).validate().is_err());
        assert!(GameSettings::new(7, 6, 0).validate().is_err());
    }

    #[test]
    fn test_clamped_pulls_match_length_into_range() {
        assert_eq!(
            GameSettings::new(5, 3, 9).clamped(),
            GameSettings::new(5, 3, 3)
        );
        assert_eq!(
            GameSettings::new(5, 3, 0).clamped(),
            GameSettings::new(5, 3, 1)
        );
    }

    #[test]
    fn test_clamped_bounds_dimensions() {
        let settings = GameSettings::new(0, 100, 50).clamped();
        assert_eq!(settings, GameSettings::new(1, MAX_HEIGHT, 1));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: GameSettings = toml::from_str("match_length = 3").unwrap();
        assert_eq!(settings, GameSettings::new(7, 6, 3));
    }
}
