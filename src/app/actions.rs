#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleHelp,
    Redraw,

    // Board
    Regenerate,
    CursorLeft,
    CursorRight,
    ToggleLock,
    AddColor,
    RemoveColor,
    Grow,
    Shrink,
    CopySelected,
    SavePalette,
    ExportPalette,

    // Focus
    FocusPalette,
    FocusPrompt,
    FocusLibrary,

    // Prompt input
    InputChar(char),
    Backspace,
    ClearInput,
    SubmitPrompt,

    // Library
    LibraryUp,
    LibraryDown,
    ApplySaved,
    DeleteSaved,
}
