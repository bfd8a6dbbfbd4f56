use serde::{Deserialize, Serialize};

use crate::common::{overlay, MergeNonNull};

/// A student record. Every column is nullable and `id` is assigned by the
/// store on first save, so `None` marks both an unsaved draft and an unset
/// field.
///
/// Incoming request bodies reuse this type: a partial JSON body deserializes
/// with its missing fields as `None`, which [`MergeNonNull`] treats as
/// "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl MergeNonNull for Student {
    // One overlay per declared field. `id` is not special-cased: a patch
    // carrying an id overwrites the target's id.
    fn merge_non_null(&mut self, source: &Self) {
        overlay(&mut self.id, &source.id);
        overlay(&mut self.name, &source.name);
        overlay(&mut self.email, &source.email);
        overlay(&mut self.age, &source.age);
    }
}
