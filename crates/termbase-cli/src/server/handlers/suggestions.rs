//! Suggestion submission and moderation handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use termbase::{NewWordDraft, NewWordSuggestion, SuggestionKind, VocabularySuggestion};

use crate::server::error::ApiError;
use crate::server::state::AppState;

use super::vocabulary::{item_info, ItemInfo};

/// Serialized new-word suggestion.
#[derive(Serialize)]
pub struct NewWordSuggestionInfo {
    pub id: String,
    pub term: String,
    pub definition: String,
    pub translation: String,
    pub language: String,
    pub category: String,
    pub status: String,
    pub like_count: usize,
    pub suggested_at: String,
}

fn new_word_info(s: &NewWordSuggestion) -> NewWordSuggestionInfo {
    NewWordSuggestionInfo {
        id: s.id.clone(),
        term: s.term.clone(),
        definition: s.definition.clone(),
        translation: s.translation.clone(),
        language: s.language.clone(),
        category: s.category.clone(),
        status: s.status.to_string(),
        like_count: s.like_count(),
        suggested_at: s.suggested_at.to_rfc3339(),
    }
}

/// Serialized attached suggestion.
#[derive(Serialize)]
pub struct VocabularySuggestionInfo {
    pub id: String,
    pub vocabulary_item: String,
    pub suggestion_type: String,
    pub suggestion: String,
    pub language: String,
    pub status: String,
    pub like_count: usize,
    pub suggested_at: String,
}

fn vocabulary_info(s: &VocabularySuggestion) -> VocabularySuggestionInfo {
    VocabularySuggestionInfo {
        id: s.id.clone(),
        vocabulary_item: s.item_id.clone(),
        suggestion_type: s.proposal.to_string(),
        suggestion: s.text.clone(),
        language: s.language.clone(),
        status: s.status.to_string(),
        like_count: s.like_count(),
        suggested_at: s.suggested_at.to_rfc3339(),
    }
}

/// POST /api/suggestions/new-word - propose a new vocabulary entry.
pub async fn submit_new_word(
    State(state): State<AppState>,
    Json(draft): Json<NewWordDraft>,
) -> Result<Json<NewWordSuggestionInfo>, ApiError> {
    let mut base = state.termbase.write().await;
    let info = new_word_info(base.submit_new_word(&draft)?);
    drop(base);

    if state.auto_save {
        state.save().await?;
    }

    Ok(Json(info))
}

/// Request body for a suggestion attached to an existing term.
#[derive(Deserialize)]
pub struct SuggestForWordRequest {
    pub term: String,
    #[serde(rename = "suggestionType", default)]
    pub suggestion_type: String,
    pub suggestion: String,
    pub language: String,
}

/// POST /api/suggestions/vocabulary - propose an addition to an existing term.
pub async fn submit_vocabulary_suggestion(
    State(state): State<AppState>,
    Json(req): Json<SuggestForWordRequest>,
) -> Result<Json<VocabularySuggestionInfo>, ApiError> {
    let mut base = state.termbase.write().await;
    let info = vocabulary_info(base.submit_for_term(
        &req.term,
        &req.suggestion_type,
        &req.suggestion,
        &req.language,
    )?);
    drop(base);

    if state.auto_save {
        state.save().await?;
    }

    Ok(Json(info))
}

/// Response after an approval.
#[derive(Serialize)]
pub struct ApprovalResponse {
    pub message: String,
    pub vocabulary_item: ItemInfo,
}

/// POST /api/suggestions/new-word/:id/approve
pub async fn approve_new_word(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApprovalResponse>, ApiError> {
    let mut base = state.termbase.write().await;
    let response = ApprovalResponse {
        message: "New word suggestion approved and added to vocabulary".to_string(),
        vocabulary_item: item_info(base.approve_new_word(&id)?),
    };
    drop(base);

    if state.auto_save {
        state.save().await?;
    }

    Ok(Json(response))
}

/// POST /api/suggestions/vocabulary/:id/approve
pub async fn approve_vocabulary_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApprovalResponse>, ApiError> {
    let mut base = state.termbase.write().await;
    let response = ApprovalResponse {
        message: "Vocabulary suggestion approved and updated".to_string(),
        vocabulary_item: item_info(base.approve_vocabulary_suggestion(&id)?),
    };
    drop(base);

    if state.auto_save {
        state.save().await?;
    }

    Ok(Json(response))
}

/// Request body for rejecting a suggestion.
#[derive(Deserialize)]
pub struct RejectRequest {
    pub kind: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /api/suggestions/:id/reject - the body selects the suggestion table.
pub async fn reject_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RejectRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let kind = SuggestionKind::parse(&req.kind)?;

    let mut base = state.termbase.write().await;
    base.reject_suggestion(&id, kind)?;
    drop(base);

    if state.auto_save {
        state.save().await?;
    }

    Ok(Json(MessageResponse {
        message: "Suggestion rejected".to_string(),
    }))
}

/// Response grouping every suggestion by kind.
#[derive(Serialize)]
pub struct AllSuggestionsResponse {
    pub new_word_suggestions: Vec<NewWordSuggestionInfo>,
    pub existing_word_suggestions: Vec<VocabularySuggestionInfo>,
}

/// GET /api/suggestions - all suggestions, grouped by kind.
pub async fn list_suggestions(State(state): State<AppState>) -> Json<AllSuggestionsResponse> {
    let base = state.termbase.read().await;
    Json(AllSuggestionsResponse {
        new_word_suggestions: base.suggestions.new_words().map(new_word_info).collect(),
        existing_word_suggestions: base
            .suggestions
            .vocabulary_suggestions()
            .map(vocabulary_info)
            .collect(),
    })
}

/// GET /api/vocabulary/:id/suggestions - attached suggestions for one item.
pub async fn list_suggestions_for_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<VocabularySuggestionInfo>> {
    let base = state.termbase.read().await;
    Json(
        base.suggestions_for_item(&id)
            .into_iter()
            .map(vocabulary_info)
            .collect(),
    )
}
