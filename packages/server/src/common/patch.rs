//! Non-null overlay merge for partially-populated records.
//!
//! A patch is a record of the same type as the entity it updates, with every
//! unset field left as `None`. Merging overlays the populated fields of the
//! patch onto the target and leaves the rest untouched, so a caller can send
//! `{"name": "Alicia"}` without clobbering the fields it did not mention.

/// Overlay the populated fields of `source` onto `self`.
///
/// Implementations enumerate every declared field via [`overlay`]. A `None`
/// field on `source` keeps the target's existing value; a populated field
/// overwrites it. Zero values count as populated: `Some(0)` and
/// `Some(String::new())` overwrite, only `None` is skipped.
///
/// Merging never mutates `source`, and merging the same patch twice leaves
/// the target as after the first merge.
pub trait MergeNonNull {
    fn merge_non_null(&mut self, source: &Self);
}

/// Copy `source` onto `target` when `source` holds a value.
pub fn overlay<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
    if let Some(value) = source {
        *target = Some(value.clone());
    }
}
