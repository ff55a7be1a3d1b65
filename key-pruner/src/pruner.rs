use error_common::{log_error, PathSegment, PruneError, Result, ValuePath};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::keys::KeySet;

/// Nesting depth a [`KeyPruner`] traverses unless told otherwise.
///
/// Matches the recursion limit `serde_json` enforces while parsing, so any
/// value decoded from JSON text fits the default budget.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Remove every occurrence of `keys_to_remove` from `value`, at any depth.
///
/// Returns a freshly allocated copy: sequences keep their length and order,
/// mappings lose the named keys and keep every other entry in input order, and
/// scalars (including `null`) come back unchanged. The input is never
/// modified. There is no depth budget here; use [`KeyPruner`] for that.
///
/// ```rust
/// use key_pruner::prune;
/// use serde_json::json;
///
/// let value = json!({"user": {"password": "secret", "profile": {"token": "abc123", "name": "John Doe"}}});
/// let pruned = prune(&value, &["password", "token"]);
/// assert_eq!(pruned, json!({"user": {"profile": {"name": "John Doe"}}}));
/// ```
pub fn prune<S: AsRef<str>>(value: &Value, keys_to_remove: &[S]) -> Value {
    let mut keys = KeySet::empty();
    for key in keys_to_remove {
        let key: &str = key.as_ref();
        keys.insert(key);
    }
    copy_unbounded(value, &keys)
}

fn copy_unbounded(value: &Value, keys: &KeySet) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(|item| copy_unbounded(item, keys)).collect()),
        Value::Object(map) => {
            let mut pruned = Map::with_capacity(map.len());
            for (key, child) in map {
                if !keys.contains(key) {
                    pruned.insert(key.clone(), copy_unbounded(child, keys));
                }
            }
            Value::Object(pruned)
        }
        scalar => scalar.clone(),
    }
}

/// Counters collected while pruning a single value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PruneStats {
    /// Mapping entries dropped because their key was in the key set
    pub removed_keys: usize,
    /// Sequences and mappings traversed
    pub containers_visited: usize,
    /// Deepest container reached; the root container has depth 1
    pub max_depth_seen: usize,
}

/// Reusable pruner with its own key set and an optional depth budget.
///
/// The depth of a container is the number of containers enclosing it plus one.
/// Reaching a container deeper than the budget fails with
/// [`PruneError::DepthExceeded`], reporting the JSON pointer of that container.
/// Subtrees under a removed key are never visited and never count.
#[derive(Debug, Clone)]
pub struct KeyPruner {
    keys: KeySet,
    max_depth: Option<usize>,
}

impl KeyPruner {
    pub fn new(keys: KeySet) -> Self {
        Self {
            keys,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    pub fn for_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(KeySet::new(keys))
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn without_depth_limit(mut self) -> Self {
        self.max_depth = None;
        self
    }

    pub fn keys(&self) -> &KeySet {
        &self.keys
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Build a pruned copy of `value`, leaving the input untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PruneError::DepthExceeded`] when `value` nests deeper than the
    /// depth budget.
    pub fn prune(&self, value: &Value) -> Result<Value> {
        let mut walk = Walk::new(self);
        let result = walk.copy(value, 1);
        Self::finish(result, walk.stats).map(|(pruned, _)| pruned)
    }

    /// Prune a value the caller no longer needs.
    ///
    /// Containers are rebuilt in place and scalars are moved, never cloned.
    ///
    /// # Errors
    ///
    /// Returns [`PruneError::DepthExceeded`] when `value` nests deeper than the
    /// depth budget.
    pub fn prune_owned(&self, mut value: Value) -> Result<Value> {
        self.prune_in_place(&mut value)?;
        Ok(value)
    }

    /// Remove the configured keys from `value` without copying it.
    ///
    /// If the depth budget is exceeded the value is left partially pruned:
    /// every mapping visited before the failure has already lost its keys.
    ///
    /// # Errors
    ///
    /// Returns [`PruneError::DepthExceeded`] when `value` nests deeper than the
    /// depth budget.
    pub fn prune_in_place(&self, value: &mut Value) -> Result<PruneStats> {
        let mut walk = Walk::new(self);
        let result = walk.in_place(value, 1);
        Self::finish(result, walk.stats).map(|((), stats)| stats)
    }

    /// Serialize `payload` to JSON and prune the result.
    ///
    /// Types with a custom serialization (timestamps, UUIDs, enums) reach the
    /// pruner in their serialized shape, so they are pruned as whatever JSON
    /// they produce.
    ///
    /// # Errors
    ///
    /// Returns [`PruneError::Serialization`] when `payload` cannot be
    /// represented as JSON (for example a map with non-string keys), or
    /// [`PruneError::DepthExceeded`] when the result nests too deeply.
    pub fn prune_serialize<T: Serialize + ?Sized>(&self, payload: &T) -> Result<Value> {
        let value = serde_json::to_value(payload)?;
        self.prune_owned(value)
    }

    /// Parse JSON text, prune it and encode it back compactly.
    ///
    /// # Errors
    ///
    /// Returns [`PruneError::Serialization`] when `input` is not valid JSON, or
    /// [`PruneError::DepthExceeded`] when it nests too deeply.
    pub fn prune_json_str(&self, input: &str) -> Result<String> {
        let value: Value = serde_json::from_str(input)?;
        let pruned = self.prune_owned(value)?;
        Ok(serde_json::to_string(&pruned)?)
    }

    fn finish<T>(
        result: std::result::Result<T, DepthOverflow>,
        stats: PruneStats,
    ) -> Result<(T, PruneStats)> {
        match result {
            Ok(output) => {
                if stats.removed_keys > 0 {
                    tracing::debug!(
                        removed_keys = stats.removed_keys,
                        containers_visited = stats.containers_visited,
                        max_depth_seen = stats.max_depth_seen,
                        "Pruned structured value"
                    );
                }
                Ok((output, stats))
            }
            Err(overflow) => {
                let err = PruneError::depth_exceeded(overflow.limit, overflow.into_path());
                log_error("key_pruner::prune", &err);
                Err(err)
            }
        }
    }
}

impl Default for KeyPruner {
    fn default() -> Self {
        Self::new(KeySet::empty())
    }
}

/// Depth failure unwinding toward the root.
///
/// Segments are appended child-first as each frame returns, so the path is only
/// materialized when a failure actually happens.
struct DepthOverflow {
    limit: usize,
    reversed: Vec<PathSegment>,
}

impl DepthOverflow {
    fn within(mut self, segment: PathSegment) -> Self {
        self.reversed.push(segment);
        self
    }

    fn into_path(self) -> ValuePath {
        self.reversed.into_iter().rev().collect()
    }
}

struct Walk<'a> {
    keys: &'a KeySet,
    max_depth: Option<usize>,
    stats: PruneStats,
}

impl<'a> Walk<'a> {
    fn new(pruner: &'a KeyPruner) -> Self {
        Self {
            keys: &pruner.keys,
            max_depth: pruner.max_depth,
            stats: PruneStats::default(),
        }
    }

    fn enter(&mut self, depth: usize) -> std::result::Result<(), DepthOverflow> {
        if let Some(limit) = self.max_depth {
            if depth > limit {
                return Err(DepthOverflow {
                    limit,
                    reversed: Vec::new(),
                });
            }
        }
        self.stats.containers_visited += 1;
        self.stats.max_depth_seen = self.stats.max_depth_seen.max(depth);
        Ok(())
    }

    fn copy(&mut self, value: &Value, depth: usize) -> std::result::Result<Value, DepthOverflow> {
        match value {
            Value::Array(items) => {
                self.enter(depth)?;
                let mut pruned = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    let child = self
                        .copy(item, depth + 1)
                        .map_err(|overflow| overflow.within(PathSegment::index(index)))?;
                    pruned.push(child);
                }
                Ok(Value::Array(pruned))
            }
            Value::Object(map) => {
                self.enter(depth)?;
                let mut pruned = Map::with_capacity(map.len());
                for (key, child) in map {
                    if self.keys.contains(key) {
                        self.stats.removed_keys += 1;
                        continue;
                    }
                    let child = self
                        .copy(child, depth + 1)
                        .map_err(|overflow| overflow.within(PathSegment::key(key.as_str())))?;
                    pruned.insert(key.clone(), child);
                }
                Ok(Value::Object(pruned))
            }
            scalar => Ok(scalar.clone()),
        }
    }

    fn in_place(&mut self, value: &mut Value, depth: usize) -> std::result::Result<(), DepthOverflow> {
        match value {
            Value::Array(items) => {
                self.enter(depth)?;
                for (index, item) in items.iter_mut().enumerate() {
                    self.in_place(item, depth + 1)
                        .map_err(|overflow| overflow.within(PathSegment::index(index)))?;
                }
                Ok(())
            }
            Value::Object(map) => {
                self.enter(depth)?;
                let before = map.len();
                let keys = self.keys;
                map.retain(|key, _| !keys.contains(key));
                self.stats.removed_keys += before - map.len();
                for (key, child) in map.iter_mut() {
                    self.in_place(child, depth + 1)
                        .map_err(|overflow| overflow.within(PathSegment::key(key.as_str())))?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
