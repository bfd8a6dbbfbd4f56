use axum::{
    extract::{Extension, Path},
    Json,
};

use crate::common::MergeNonNull;
use crate::domains::students::Student;
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// List every student, ordered by id.
pub async fn get_all_students(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Student>>, ApiError> {
    Ok(Json(state.store.find_all().await?))
}

/// Fetch a single student. A miss serializes as `null`, not as an error.
pub async fn get_student_by_id(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<Student>>, ApiError> {
    Ok(Json(state.store.find_by_id(id).await?))
}

/// Create a student from a partial or full record. The store assigns an id
/// when the body does not carry one.
pub async fn create_student(
    Extension(state): Extension<AppState>,
    Json(student): Json<Student>,
) -> Result<Json<Student>, ApiError> {
    Ok(Json(state.store.save(&student).await?))
}

/// Partially update a student: populated fields of the body overwrite the
/// stored record, unset fields keep their current values. An unknown id
/// serializes as `null`.
pub async fn update_student(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<Student>,
) -> Result<Json<Option<Student>>, ApiError> {
    let Some(mut existing) = state.store.find_by_id(id).await? else {
        return Ok(Json(None));
    };

    existing.merge_non_null(&patch);

    let saved = state.store.save(&existing).await?;
    Ok(Json(Some(saved)))
}

/// Delete a student. Returns the same confirmation whether or not the id
/// existed.
pub async fn delete_student(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> Result<&'static str, ApiError> {
    state.store.delete_by_id(id).await?;
    Ok("student has been deleted")
}
