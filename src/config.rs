use crate::rules::KingSafety;

/// Settings shared by all games of a [`GameStore`](crate::GameStore).
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default, rename_all = "camelCase"))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Config {
    /// Whether moves that leave the own king attacked are rejected.
    ///
    /// Defaults to [`KingSafety::Unchecked`].
    pub king_safety: KingSafety,
}

impl Config {
    #[must_use]
    pub const fn with_king_safety(mut self, king_safety: KingSafety) -> Config {
        self.king_safety = king_safety;
        self
    }
}
