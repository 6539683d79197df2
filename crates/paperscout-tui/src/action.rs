/// Actions the TUI can process, mapped from keyboard input or internal events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Put focus back on the query line.
    StartEditing,
    /// Leave the query line without submitting.
    StopEditing,
    InputChar(char),
    InputBackspace,
    SubmitQuery,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoTop,
    GoBottom,
    /// Search with the subtopic under the cursor.
    Choose,
    /// Toggle the checkbox of the paper under the cursor.
    ToggleSelect,
    ToggleSelectAll,
    Download,
    NavigateBack,
    ToggleHelp,
    Tick,
    Resize(u16, u16),
    None,
}
