/// User and timer intents, produced by input mapping and the tick loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Tick,
    Resize(u16, u16),

    MoveDown,
    MoveUp,
    DrillIn,
    NavigateBack,

    /// Verification prompt hotkeys.
    Grant,
    Deny,

    OpenOffer,
    CloseOffer,

    GoHome,
    GoAdmin,

    /// Address-line entry mode.
    StartPathEntry,
    PathInput(char),
    PathCancel,
    PathConfirm,

    ClickAt(u16, u16),
    ToggleHelp,
    None,
}
