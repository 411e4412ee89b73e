use crate::palette::Tone;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleHelp,
    CloseHelp,

    // Selection
    ToggleTone(Tone),
    ClearTones,
    Regenerate,

    // Swatches
    FocusPrev,
    FocusNext,
    FocusSwatch(usize),
    CopyFocused,
    CopySwatch(usize),

    Resize,
    Tick,
}
