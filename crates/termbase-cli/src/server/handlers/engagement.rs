//! Like-toggle and saved-vocabulary handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use termbase::{LikeOutcome, Role, SuggestionKind};

use crate::server::error::ApiError;
use crate::server::state::AppState;

use super::vocabulary::{item_info, ItemInfo};

/// Request body for a like toggle.
#[derive(Deserialize)]
pub struct LikeRequest {
    pub kind: String,
    pub user: String,
}

/// POST /api/suggestions/:id/like - toggle the user's like.
pub async fn like_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<LikeRequest>,
) -> Result<Json<LikeOutcome>, ApiError> {
    let kind = SuggestionKind::parse(&req.kind)?;

    let mut base = state.termbase.write().await;
    let outcome = base.toggle_like(&id, kind, &req.user)?;
    drop(base);

    if state.auto_save {
        state.save().await?;
    }

    Ok(Json(outcome))
}

/// Request body for profile registration.
#[derive(Deserialize)]
pub struct ProfileRequest {
    pub user: String,
    pub role: Option<String>,
}

/// Serialized profile.
#[derive(Serialize)]
pub struct ProfileInfo {
    pub user: String,
    pub role: String,
    pub saved: Vec<String>,
}

/// POST /api/profiles - idempotent profile registration.
pub async fn ensure_profile(
    State(state): State<AppState>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<ProfileInfo>, ApiError> {
    let role = match req.role.as_deref() {
        Some(input) => input.parse::<Role>()?,
        None => Role::default(),
    };

    let mut base = state.termbase.write().await;
    let profile = base.profiles.ensure(&req.user, role);
    let info = ProfileInfo {
        user: profile.user.clone(),
        role: profile.role.label().to_lowercase(),
        saved: profile.saved.iter().cloned().collect(),
    };
    drop(base);

    if state.auto_save {
        state.save().await?;
    }

    Ok(Json(info))
}

/// GET /api/profiles/:user/saved - resolve the user's bookmarks.
pub async fn list_saved(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<Json<Vec<ItemInfo>>, ApiError> {
    let base = state.termbase.read().await;
    let items = base.saved_items(&user)?;
    Ok(Json(items.into_iter().map(item_info).collect()))
}

/// Request body carrying vocabulary item ids.
#[derive(Deserialize)]
pub struct SavedVocabularyRequest {
    #[serde(default)]
    pub vocabulary_ids: Vec<String>,
}

#[derive(Serialize)]
pub struct SavedVocabularyResponse {
    pub message: String,
    pub changed: usize,
}

/// POST /api/profiles/:user/saved - union ids into the saved set.
pub async fn save_vocabulary(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Json(req): Json<SavedVocabularyRequest>,
) -> Result<Json<SavedVocabularyResponse>, ApiError> {
    let mut base = state.termbase.write().await;
    let added = base.save_vocabulary(&user, &req.vocabulary_ids)?;
    drop(base);

    if state.auto_save {
        state.save().await?;
    }

    Ok(Json(SavedVocabularyResponse {
        message: "Vocabulary items saved successfully".to_string(),
        changed: added,
    }))
}

/// POST /api/profiles/:user/saved/remove - remove ids from the saved set.
pub async fn unsave_vocabulary(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Json(req): Json<SavedVocabularyRequest>,
) -> Result<Json<SavedVocabularyResponse>, ApiError> {
    let mut base = state.termbase.write().await;
    let removed = base.unsave_vocabulary(&user, &req.vocabulary_ids)?;
    drop(base);

    if state.auto_save {
        state.save().await?;
    }

    Ok(Json(SavedVocabularyResponse {
        message: "Vocabulary items removed successfully".to_string(),
        changed: removed,
    }))
}
