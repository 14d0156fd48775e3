pub mod commands;
pub mod config;
pub mod input;
pub mod shortcuts;
pub mod state;

pub use commands::EditorCommand;
pub use config::EditorConfig;
pub use input::InputEvent;
pub use shortcuts::ShortcutMap;
pub use state::EditorState;
