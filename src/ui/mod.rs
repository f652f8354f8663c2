pub mod app;
pub mod clipboard;
pub mod help;
pub mod input;
pub mod output;
pub mod phase;
pub mod tabs;

pub use app::{App, Completion};
pub use clipboard::ClipboardHandle;
pub use help::HelpScreen;
pub use input::InputWidget;
pub use output::OutputDisplay;
pub use phase::RequestPhase;
pub use tabs::{InputTab, LanguageSelector, TabBar};
