//! Player identity.

use std::fmt;
use std::sync::Arc;

/// Opaque identity of a player that owns cells.
///
/// The field never creates or authenticates players; it only groups cells by
/// owner equality. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Player(Arc<str>);

impl Player {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Player {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Player {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
