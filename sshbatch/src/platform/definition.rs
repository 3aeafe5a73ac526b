//! Platform definition for device-type specific session preparation.

/// What to do with a fresh shell before the batch commands run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDefinition {
    /// Device type name as written in `DEVICE_TYPE` (e.g. "huawei").
    pub name: String,

    /// Commands sent right after the first prompt, typically to disable
    /// output paging so long outputs end at the prompt.
    pub on_open_commands: Vec<String>,

    pub terminal_width: u32,

    pub terminal_height: u32,
}

impl PlatformDefinition {
    /// Create a platform with no preparation commands.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_open_commands: vec![],
            terminal_width: 511,
            terminal_height: 24,
        }
    }

    /// Add an on_open command.
    pub fn with_on_open_command(mut self, command: impl Into<String>) -> Self {
        self.on_open_commands.push(command.into());
        self
    }
}
