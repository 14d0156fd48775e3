//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos onto the same `EditorCommand`s the host's
//! buttons trigger, so keyboard and toolbar stay in lockstep.
//!
//! | Key | Command |
//! |-----|---------|
//! | Enter | create curve |
//! | ← / `[` | previous curve |
//! | → / `]` | next curve |
//! | A | add point |
//! | Delete / Backspace | delete point |
//! | Shift+Delete | delete curve |
//! | ⌘/Ctrl+Delete | clear all |
//! | 1 / 2 / 3 | toggle points / polygon / curve |

use crate::commands::EditorCommand;
use bc_core::model::Layer;

pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to a command.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"a"`, `"Delete"`).
    /// On macOS `meta` is ⌘; elsewhere `ctrl` plays the same role.
    /// Returns `None` if the combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<EditorCommand> {
        let cmd = ctrl || meta;

        if cmd {
            return match key {
                "Delete" | "Backspace" => Some(EditorCommand::ClearAll),
                _ => None,
            };
        }

        if shift {
            return match key {
                "Delete" | "Backspace" => Some(EditorCommand::DeleteCurve),
                _ => None,
            };
        }

        match key {
            "Enter" => Some(EditorCommand::Create),
            "ArrowLeft" | "[" => Some(EditorCommand::SelectPrevious),
            "ArrowRight" | "]" => Some(EditorCommand::SelectNext),
            "a" | "A" => Some(EditorCommand::AddPoint),
            "Delete" | "Backspace" => Some(EditorCommand::DeletePoint),
            "1" => Some(EditorCommand::Toggle(Layer::Points)),
            "2" => Some(EditorCommand::Toggle(Layer::Polygon)),
            "3" => Some(EditorCommand::Toggle(Layer::Curve)),
            _ => None,
        }
    }
}
