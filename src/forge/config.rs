/// Default bound of the dense conversion array.
pub const DEFAULT_P_MAX: u32 = 500;

#[derive(Debug, Clone)]
pub struct ForgeConfig {
    /// Custom lifetime policy TOML; `None` uses the embedded default.
    pub policy: Option<String>,
    /// PDG codes with `|pdg| < p_max` are placed in the dense array.
    pub p_max: u32,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            policy: None,
            p_max: DEFAULT_P_MAX,
        }
    }
}
