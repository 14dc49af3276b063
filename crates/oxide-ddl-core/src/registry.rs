//! Dialect to strategy lookup.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{DdlError, Result};
use crate::strategy::{self, DdlStrategy};

/// Maps each dialect to the strategy that renders it.
///
/// Populate it once, then share it read-only. Each synthesizer owns its
/// registry, so independent registries can coexist (e.g. across tests).
pub struct StrategyRegistry {
    strategies: HashMap<Dialect, Box<dyn DdlStrategy>>,
}

impl StrategyRegistry {
    /// Creates a registry holding the built-in strategy for every dialect.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for dialect in Dialect::ALL {
            registry.strategies.insert(dialect, strategy::builtin(dialect));
        }
        registry
    }

    /// Creates a registry with no strategies.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Registers a strategy, replacing any existing one for the dialect.
    pub fn register<S: DdlStrategy + 'static>(
        &mut self,
        dialect: Dialect,
        strategy: S,
    ) -> Option<Box<dyn DdlStrategy>> {
        debug!(dialect = %dialect, "registering DDL strategy");
        self.strategies.insert(dialect, Box::new(strategy))
    }

    /// Removes the strategy for a dialect.
    pub fn unregister(&mut self, dialect: Dialect) -> Option<Box<dyn DdlStrategy>> {
        self.strategies.remove(&dialect)
    }

    /// Returns the strategy for a dialect.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnsupportedDialect`] if none is registered.
    pub fn resolve(&self, dialect: Dialect) -> Result<&dyn DdlStrategy> {
        self.strategies
            .get(&dialect)
            .map(|strategy| &**strategy)
            .ok_or_else(|| DdlError::UnsupportedDialect(dialect.to_string()))
    }

    /// Returns whether a strategy is registered for the dialect.
    #[must_use]
    pub fn contains(&self, dialect: Dialect) -> bool {
        self.strategies.contains_key(&dialect)
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dialects: Vec<&str> = self.strategies.keys().map(|d| d.name()).collect();
        dialects.sort_unstable();
        f.debug_struct("StrategyRegistry")
            .field("dialects", &dialects)
            .finish()
    }
}
