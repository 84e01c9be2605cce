//! String interner implementation.
//!
//! A global table maps each distinct string to a stable `u32` index. Strings
//! are stored once, leaked to obtain `'static` references, and never removed.
//! Reads dominate writes in practice (the same identifiers recur throughout a
//! source file), so the table sits behind an `RwLock` with an `FxHashMap`
//! index keyed by the interned string itself.

use rustc_hash::FxHashMap;
use std::sync::{LazyLock, RwLock};

/// Global string table instance, initialized on first use.
pub(super) static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(StringTable::new);

/// Thread-safe string table.
pub(super) struct StringTable {
    inner: RwLock<Inner>,
}

struct Inner {
    /// Maps an interned string to its index.
    map: FxHashMap<&'static str, u32>,
    /// Index-ordered storage for lookup by symbol.
    strings: Vec<&'static str>,
}

impl StringTable {
    fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                map: FxHashMap::default(),
                strings: Vec::with_capacity(64),
            }),
        }
    }

    /// Intern a string, returning its table index.
    pub(super) fn intern(&self, string: &str) -> u32 {
        {
            let inner = self.inner.read().expect("string table poisoned");
            if let Some(&index) = inner.map.get(string) {
                return index;
            }
        }

        let mut inner = self.inner.write().expect("string table poisoned");
        // Another thread may have interned it between the two locks.
        if let Some(&index) = inner.map.get(string) {
            return index;
        }

        let interned: &'static str = Box::leak(string.to_owned().into_boxed_str());
        let index = u32::try_from(inner.strings.len()).expect("string table overflow");
        inner.strings.push(interned);
        inner.map.insert(interned, index);
        index
    }

    /// Get a string by table index.
    ///
    /// # Panics
    ///
    /// Panics if the index was not produced by [`StringTable::intern`].
    pub(super) fn get(&self, index: u32) -> &'static str {
        self.inner.read().expect("string table poisoned").strings[index as usize]
    }
}
