use std::fmt;

/// Token color. Yellow always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Yellow,
}

impl Color {
    /// Get the other color
    pub fn other(self) -> Color {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }

    /// Get color name for display
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Yellow => "Yellow",
        }
    }

    /// Single-letter symbol used in text renderings of the grid
    pub fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_color() {
        assert_eq!(Color::Red.other(), Color::Yellow);
        assert_eq!(Color::Yellow.other(), Color::Red);
    }

    #[test]
    fn test_color_name() {
        assert_eq!(Color::Red.name(), "Red");
        assert_eq!(Color::Yellow.name(), "Yellow");
        assert_eq!(Color::Yellow.to_string(), "Yellow");
    }

    #[test]
    fn test_color_symbol() {
        assert_eq!(Color::Red.symbol(), 'R');
        assert_eq!(Color::Yellow.symbol(), 'Y');
    }
}
