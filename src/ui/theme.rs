use crossterm::style::Color;

/// Semantic colors used by console output.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "→";
    pub const SKIP: &str = "○";
    pub const TRASH: &str = "🗑";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
    pub const SKIP: &str = "[ ]";
    pub const TRASH: &str = "[DEL]";
}

/// Icon set picked once per sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub arrow: &'static str,
    pub skip: &'static str,
    pub trash: &'static str,
}

impl Icons {
    pub fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                success: icons::SUCCESS,
                error: icons::ERROR,
                warning: icons::WARNING,
                arrow: icons::ARROW,
                skip: icons::SKIP,
                trash: icons::TRASH,
            }
        } else {
            Self {
                success: icons_ascii::SUCCESS,
                error: icons_ascii::ERROR,
                warning: icons_ascii::WARNING,
                arrow: icons_ascii::ARROW,
                skip: icons_ascii::SKIP,
                trash: icons_ascii::TRASH,
            }
        }
    }
}
