//! Group identity allocation and relationship id derivation
//!
//! Every mounted group gets an id from an injected [`IdAllocator`]. Tab and
//! panel ids are derived from `(group_id, value)` so that two groups holding
//! the same tab value never produce the same element ids.

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

use crate::error::TabsError;
use crate::Result;

pub const DEFAULT_ID_PREFIX: &str = "tabs";

/// Source of group identifiers.
///
/// Implementations must never hand out the same id twice while the first
/// holder is still alive.
pub trait IdAllocator: Send + Sync {
    fn next_group_id(&self) -> String;
}

/// Monotonic counter allocator: `"{prefix}-{n}"`.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// Process-wide allocator used when nothing else is injected.
    pub fn shared() -> Arc<SequentialIds> {
        Self::shared_for(DEFAULT_ID_PREFIX)
    }

    /// Process-wide allocator for `prefix`. Every call with the same prefix
    /// returns the same counter.
    ///
    /// A separate `SequentialIds::new` with a prefix in use here restarts the
    /// count and will collide in a shared registry.
    pub fn shared_for(prefix: &str) -> Arc<SequentialIds> {
        static BY_PREFIX: OnceLock<Mutex<HashMap<String, Arc<SequentialIds>>>> = OnceLock::new();
        let mut by_prefix = BY_PREFIX.get_or_init(Default::default).lock();
        let ids = by_prefix
            .entry(prefix.to_string())
            .or_insert_with(|| Arc::new(SequentialIds::new(prefix)));
        Arc::clone(ids)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}

impl IdAllocator for SequentialIds {
    fn next_group_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

/// Random-suffix allocator: `"{prefix}-{uuid}"` (simple, hyphen-free form).
#[derive(Debug, Clone)]
pub struct RandomIds {
    prefix: String,
}

impl RandomIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}

impl IdAllocator for RandomIds {
    fn next_group_id(&self) -> String {
        format!("{}-{}", self.prefix, Uuid::new_v4().simple())
    }
}

/// `"{group}-tab-{value}"`, or `"tab-{value}"` when no group is present.
pub fn derive_tab_id(group_id: Option<&str>, value: &str) -> String {
    derive(group_id, "tab", value)
}

/// `"{group}-panel-{value}"`, or `"panel-{value}"` when no group is present.
pub fn derive_panel_id(group_id: Option<&str>, value: &str) -> String {
    derive(group_id, "panel", value)
}

fn derive(group_id: Option<&str>, role: &str, value: &str) -> String {
    match group_id {
        Some(group) => format!("{}-{}-{}", group, role, value),
        None => {
            tracing::debug!(value = %value, role, "Deriving ungrouped id");
            format!("{}-{}", role, value)
        }
    }
}

/// Set of group ids currently mounted.
///
/// Mounting takes a [`GroupLease`]; dropping the lease frees the id.
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    live: Arc<Mutex<HashSet<String>>>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> GroupRegistry {
        static SHARED: OnceLock<GroupRegistry> = OnceLock::new();
        SHARED.get_or_init(GroupRegistry::new).clone()
    }

    /// Claim `group_id` until the returned lease is dropped.
    pub fn register(&self, group_id: String) -> Result<GroupLease> {
        let mut live = self.live.lock();
        if !live.insert(group_id.clone()) {
            return Err(TabsError::GroupIdInUse(group_id));
        }

        Ok(GroupLease {
            group_id,
            live: Arc::clone(&self.live),
        })
    }

    pub fn is_live(&self, group_id: &str) -> bool {
        self.live.lock().contains(group_id)
    }

    pub fn live_count(&self) -> usize {
        self.live.lock().len()
    }
}

#[derive(Debug)]
pub struct GroupLease {
    group_id: String,
    live: Arc<Mutex<HashSet<String>>>,
}

impl GroupLease {
    pub fn group_id(&self) -> &str {
        &self.group_id
    }
}

impl Drop for GroupLease {
    fn drop(&mut self) {
        self.live.lock().remove(&self.group_id);
    }
}
