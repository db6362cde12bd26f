// Variant registry: a static table from case-insensitive keys to constructors.

use std::fmt;

use tracing::{debug, warn};

use crate::error::PatternError;

/// Identity shared by every variant in the crate.
///
/// Variants are stateless, so every implementor is `Send + Sync` and
/// registries can be queried from any thread.
pub trait Named: Send + Sync {
    /// Name of the concrete type, e.g. `"ConcreteStrategy1"`.
    fn type_name(&self) -> &'static str;
}

/// Describes the concrete type behind a capability.
///
/// Returns the same string for the same instance on every call.
pub fn identify<T: Named + ?Sized>(variant: &T) -> String {
    format!("I am a {}", variant.type_name())
}

/// One row of a registry table.
pub struct Entry<T: ?Sized> {
    pub key: &'static str,
    pub build: fn() -> Box<T>,
}

impl<T: ?Sized> fmt::Debug for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry").field("key", &self.key).finish()
    }
}

/// A closed set of variants addressable by name.
///
/// Keys are stored lowercase; lookups fold the input with
/// [`str::to_lowercase`] before comparing, so `"STRATEGY1"` and
/// `"strategy1"` resolve to the same entry. Nothing is cached: each
/// successful lookup runs the constructor again.
pub struct Registry<T: ?Sized + 'static> {
    kind: &'static str,
    entries: &'static [Entry<T>],
}

impl<T: ?Sized + 'static> Registry<T> {
    pub const fn new(kind: &'static str, entries: &'static [Entry<T>]) -> Self {
        Self { kind, entries }
    }

    /// What this registry builds, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn lookup(&self, key: &str) -> Result<Box<T>, PatternError> {
        match self.find(key) {
            Some(entry) => {
                debug!(kind = self.kind, key, resolved = entry.key, "variant resolved");
                Ok((entry.build)())
            }
            None => {
                warn!(kind = self.kind, key, "unknown variant requested");
                Err(PatternError::unknown_variant(
                    self.kind,
                    key,
                    self.keys().collect(),
                ))
            }
        }
    }

    fn find(&self, key: &str) -> Option<&'static Entry<T>> {
        let folded = key.to_lowercase();
        self.entries.iter().find(|entry| entry.key == folded)
    }
}

impl<T: ?Sized + 'static> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &self.kind)
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}
