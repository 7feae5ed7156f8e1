use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    FlameHot,
    FlameWarm,
    FlameCold,
    FlameNeutral,

    TextPrimary,
    Border,
}

impl ThemeToken {
    /// The flame palette, in the order category colors are assigned.
    pub const FLAME_PALETTE: [ThemeToken; 4] = [
        ThemeToken::FlameHot,
        ThemeToken::FlameWarm,
        ThemeToken::FlameCold,
        ThemeToken::FlameNeutral,
    ];
}
