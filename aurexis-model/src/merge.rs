//! Merge engine: applies partial overrides onto complete content values.
//!
//! Every mergeable shape has a patch type whose fields are all optional.
//! Precedence is per field: a value present in the patch wins, otherwise the
//! base value is kept. The base is whatever the caller considers current
//! (the in-memory value, or the compiled default when there is none), so the
//! engine itself never needs to know where the base came from.
//!
//! Nested blocks are merged field by field, one level at a time, instead of
//! being replaced wholesale. Arrays are leaf values and are replaced whole.

use crate::coerce::{Fields, from_fields};
use serde::de::DeserializeOwned;

/// A complete content value that can absorb a partial override.
pub trait Merge: Clone {
    /// The all-optional override shape.
    type Patch: Default + DeserializeOwned;

    /// Applies `patch` in place.
    fn apply_patch(&mut self, patch: &Self::Patch);

    /// Returns a merged copy, leaving `self` untouched.
    fn merged(&self, patch: &Self::Patch) -> Self {
        let mut out = self.clone();
        out.apply_patch(patch);
        out
    }

    /// Merges a raw remote document, coercing each field independently.
    fn merged_with_fields(&self, fields: &Fields) -> Self {
        self.merged(&from_fields::<Self::Patch>(fields))
    }
}

/// Replaces `slot` with a clone of `value` when present.
#[inline]
pub(crate) fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *slot = v.clone();
    }
}

/// Like [`set`] for optional slots: a present value wins, absence keeps base.
#[inline]
pub(crate) fn set_opt<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        slot.clone_from(value);
    }
}

/// Merges an optional nested block. Returns `None` only when neither side
/// has the block; otherwise starts from the base (or `seed` when the base is
/// missing) and applies the override.
pub(crate) fn merge_block<T, P>(
    base: Option<&T>,
    patch: Option<&P>,
    seed: impl FnOnce() -> T,
    apply: impl FnOnce(&mut T, &P),
) -> Option<T>
where
    T: Clone,
{
    if base.is_none() && patch.is_none() {
        return None;
    }
    let mut out = base.cloned().unwrap_or_else(seed);
    if let Some(p) = patch {
        apply(&mut out, p);
    }
    Some(out)
}
