//! Host commands.
//!
//! Every button the host shows maps onto exactly one `EditorCommand`, and
//! every command onto one [`EditorState`](crate::EditorState) operation.
//! Commands carry no arguments: they act on the active curve and control
//! point the state already tracks.

use bc_core::model::Layer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    /// Turn the pending points into a curve.
    Create,
    SelectPrevious,
    SelectNext,
    /// Append a control point at the configured default position.
    AddPoint,
    /// Remove the active control point.
    DeletePoint,
    DeleteCurve,
    ClearAll,
    Toggle(Layer),
}

impl EditorCommand {
    pub const ALL: [EditorCommand; 10] = [
        EditorCommand::Create,
        EditorCommand::SelectPrevious,
        EditorCommand::SelectNext,
        EditorCommand::AddPoint,
        EditorCommand::DeletePoint,
        EditorCommand::DeleteCurve,
        EditorCommand::ClearAll,
        EditorCommand::Toggle(Layer::Points),
        EditorCommand::Toggle(Layer::Polygon),
        EditorCommand::Toggle(Layer::Curve),
    ];

    /// Resolve a host button identifier. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }

    /// The host button identifier for this command.
    pub fn name(self) -> &'static str {
        match self {
            EditorCommand::Create => "create",
            EditorCommand::SelectPrevious => "prev",
            EditorCommand::SelectNext => "next",
            EditorCommand::AddPoint => "add-point",
            EditorCommand::DeletePoint => "delete-point",
            EditorCommand::DeleteCurve => "delete-curve",
            EditorCommand::ClearAll => "clear",
            EditorCommand::Toggle(Layer::Points) => "toggle-points",
            EditorCommand::Toggle(Layer::Polygon) => "toggle-polygon",
            EditorCommand::Toggle(Layer::Curve) => "toggle-curve",
        }
    }
}
