/// Runtime options shared by every command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Quiet level. `1` hides informational lines, `2` also hides warnings.
    pub quiet: u8,
    /// Disables ANSI colors in log lines and prompts.
    ///
    /// The result tables never contain colors.
    pub no_color: bool,
}
