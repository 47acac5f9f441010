use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::compiler::{CompiledPattern, compile};
use super::error::PatternSyntaxError;

/// Compiled patterns keyed by raw pattern text.
///
/// Thread safety: hits take a read lock. A miss compiles with no lock held
/// and then inserts under a write lock; two threads racing on the same
/// pattern both compile it and the last insert wins, which is harmless since
/// compilation is deterministic. Failed compilations are not stored.
#[derive(Debug, Default)]
pub struct PatternCache {
    entries: RwLock<HashMap<String, Arc<CompiledPattern>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compile(&self, raw: &str) -> Result<Arc<CompiledPattern>, PatternSyntaxError> {
        if let Some(hit) = self
            .entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(raw)
        {
            return Ok(Arc::clone(hit));
        }

        let compiled = match compile(raw) {
            Ok(c) => Arc::new(c),
            Err(e) => {
                tracing::debug!(pattern = raw, error = %e, "pattern failed to compile");
                return Err(e);
            }
        };
        tracing::debug!(pattern = raw, "compiled pattern");

        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(raw.to_string(), Arc::clone(&compiled));
        Ok(compiled)
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}
