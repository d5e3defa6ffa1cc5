//! Context chains: key/value fields attached to every record in scope
//!
//! This module provides:
//! - `ContextChain`: append-ordered static or computed fields, attachable
//!   to a configuration or to an individual logger
//! - `scoped_context`: thread-local fields with RAII removal

use std::borrow::Cow;
use std::cell::RefCell;
use std::fmt;

/// Zero-argument callback producing a context value at emit time.
///
/// Returning `None` signals that no value could be produced; the record
/// then carries the empty string for that key.
pub type ValueProvider = Box<dyn Fn() -> Option<String> + Send + Sync>;

/// Value side of a context entry: fixed at registration time or computed
/// per record.
pub enum ContextValue {
    Static(String),
    Dynamic(ValueProvider),
}

impl fmt::Debug for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::Static(v) => f.debug_tuple("Static").field(v).finish(),
            ContextValue::Dynamic(_) => f.debug_tuple("Dynamic").field(&"<provider>").finish(),
        }
    }
}

/// A key/value field automatically attached to every record emitted by
/// its owning scope.
#[derive(Debug)]
pub struct ContextEntry {
    key: String,
    value: ContextValue,
}

impl ContextEntry {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Evaluate this entry for one record. Providers run exactly once per
    /// call; their output is owned by the record being assembled.
    pub fn resolve(&self) -> Cow<'_, str> {
        match &self.value {
            ContextValue::Static(v) => Cow::Borrowed(v.as_str()),
            ContextValue::Dynamic(provider) => Cow::Owned(provider().unwrap_or_default()),
        }
    }
}

/// An append-ordered list of context entries. Earlier-added entries print
/// first.
#[derive(Debug, Default)]
pub struct ContextChain {
    entries: Vec<ContextEntry>,
}

impl ContextChain {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a fixed-value entry at the tail.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(ContextEntry {
            key: key.into(),
            value: ContextValue::Static(value.into()),
        });
    }

    /// Append a computed-value entry at the tail.
    pub fn add_dynamic(
        &mut self,
        key: impl Into<String>,
        provider: impl Fn() -> Option<String> + Send + Sync + 'static,
    ) {
        self.entries.push(ContextEntry {
            key: key.into(),
            value: ContextValue::Dynamic(Box::new(provider)),
        });
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContextEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Remove the most recently added entry with `key`, if any.
    fn remove_last(&mut self, key: &str) -> bool {
        if let Some(pos) = self.entries.iter().rposition(|e| e.key == key) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }
}

thread_local! {
    static SCOPED_CHAIN: RefCell<ContextChain> = RefCell::new(ContextChain::new());
}

/// RAII guard for a scoped context entry
///
/// When dropped, removes the most recently added entry with its key from
/// the calling thread's scoped chain.
///
/// # Example
///
/// ```
/// use kvlog::scoped_context;
///
/// {
///     let _guard = scoped_context("request_id", "a925");
///     // records emitted on this thread now carry request_id
/// }
/// // request_id removed here
/// ```
#[must_use = "the entry is removed as soon as the guard is dropped"]
pub struct ScopedContextGuard {
    key: String,
}

impl Drop for ScopedContextGuard {
    fn drop(&mut self) {
        let _ = SCOPED_CHAIN.try_with(|chain| chain.borrow_mut().remove_last(&self.key));
    }
}

/// Attach a fixed-value field to every record emitted on this thread while
/// the returned guard is alive. Scoped entries print after global context
/// and before logger-own context.
pub fn scoped_context(key: impl Into<String>, value: impl Into<String>) -> ScopedContextGuard {
    let key = key.into();
    SCOPED_CHAIN.with(|chain| chain.borrow_mut().add(key.clone(), value));
    ScopedContextGuard { key }
}

/// Attach a computed field to every record emitted on this thread while
/// the returned guard is alive.
pub fn scoped_dynamic_context(
    key: impl Into<String>,
    provider: impl Fn() -> Option<String> + Send + Sync + 'static,
) -> ScopedContextGuard {
    let key = key.into();
    SCOPED_CHAIN.with(|chain| chain.borrow_mut().add_dynamic(key.clone(), provider));
    ScopedContextGuard { key }
}

/// Remove every scoped entry on the calling thread, regardless of guards.
pub fn clear_scoped_context() {
    SCOPED_CHAIN.with(|chain| chain.borrow_mut().clear());
}

/// Run `f` against the calling thread's scoped chain.
pub(crate) fn with_scoped<R>(f: impl FnOnce(&ContextChain) -> R) -> R {
    SCOPED_CHAIN.with(|chain| f(&chain.borrow()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_preserves_append_order() {
        let mut chain = ContextChain::new();
        chain.add("first", "1");
        chain.add("second", "2");
        chain.add("first", "3");

        let keys: Vec<&str> = chain.iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec!["first", "second", "first"]);
    }

    #[test]
    fn test_static_resolve_borrows() {
        let mut chain = ContextChain::new();
        chain.add("service", "api");

        let entry = chain.iter().next().unwrap();
        assert!(matches!(entry.resolve(), Cow::Borrowed("api")));
    }

    #[test]
    fn test_dynamic_resolve_runs_provider() {
        let mut chain = ContextChain::new();
        chain.add_dynamic("seq", || Some("42".to_string()));

        let entry = chain.iter().next().unwrap();
        assert_eq!(entry.resolve(), "42");
    }

    #[test]
    fn test_provider_absence_is_empty_string() {
        let mut chain = ContextChain::new();
        chain.add_dynamic("missing", || None);

        let entry = chain.iter().next().unwrap();
        assert_eq!(entry.resolve(), "");
    }

    #[test]
    fn test_remove_last_takes_newest_duplicate() {
        let mut chain = ContextChain::new();
        chain.add("key", "old");
        chain.add("key", "new");

        assert!(chain.remove_last("key"));
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.iter().next().unwrap().resolve(), "old");
        assert!(!chain.remove_last("absent"));
    }

    #[test]
    fn test_scoped_guard_removes_on_drop() {
        clear_scoped_context();

        {
            let _guard = scoped_context("request_id", "a925");
            with_scoped(|chain| assert_eq!(chain.len(), 1));
        }
        with_scoped(|chain| assert!(chain.is_empty()));
    }

    #[test]
    fn test_scoped_guards_nest() {
        clear_scoped_context();

        let outer = scoped_context("task", "outer");
        {
            let _inner = scoped_context("task", "inner");
            with_scoped(|chain| assert_eq!(chain.len(), 2));
        }
        with_scoped(|chain| {
            assert_eq!(chain.len(), 1);
            assert_eq!(chain.iter().next().unwrap().resolve(), "outer");
        });
        drop(outer);
        with_scoped(|chain| assert!(chain.is_empty()));
    }

    #[test]
    fn test_clear_scoped_context() {
        clear_scoped_context();
        let guard = scoped_context("a", "1");
        clear_scoped_context();
        with_scoped(|chain| assert!(chain.is_empty()));
        // guard drop after clear must not panic
        drop(guard);
    }
}
