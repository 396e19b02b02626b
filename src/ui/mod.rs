//! Console presentation helpers: terminal detection, theme tokens, colored text.

pub mod terminal;
pub mod text;
pub mod theme;

pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use text::ColoredText;
pub use theme::Icons;
