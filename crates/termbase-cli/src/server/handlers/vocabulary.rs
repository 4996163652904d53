//! Vocabulary read and write handlers.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use termbase::VocabularyItem;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Serialized vocabulary item with its derived translation views.
#[derive(Serialize)]
pub struct ItemInfo {
    pub id: String,
    pub term: String,
    pub definition: String,
    pub category: String,
    pub translations: Vec<TranslationInfo>,
    pub primary_translations: BTreeMap<String, String>,
    pub colloquial_terms: BTreeMap<String, Vec<String>>,
    pub user_proposed_translations: BTreeMap<String, Vec<String>>,
}

#[derive(Serialize)]
pub struct TranslationInfo {
    pub language: String,
    pub translation: String,
    pub is_primary: bool,
    pub is_colloquial: bool,
    pub is_user_proposed: bool,
}

/// Build the wire representation of an item.
pub fn item_info(item: &VocabularyItem) -> ItemInfo {
    ItemInfo {
        id: item.id.clone(),
        term: item.term.clone(),
        definition: item.definition.clone(),
        category: item.category.clone(),
        translations: item
            .translations
            .iter()
            .map(|t| TranslationInfo {
                language: t.language.clone(),
                translation: t.text.clone(),
                is_primary: t.is_primary,
                is_colloquial: t.is_colloquial,
                is_user_proposed: t.is_user_proposed,
            })
            .collect(),
        primary_translations: item
            .primary_translations()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        colloquial_terms: owned_groups(item.colloquial_terms()),
        user_proposed_translations: owned_groups(item.user_proposed_translations()),
    }
}

fn owned_groups(groups: BTreeMap<&str, Vec<&str>>) -> BTreeMap<String, Vec<String>> {
    groups
        .into_iter()
        .map(|(lang, texts)| {
            (
                lang.to_string(),
                texts.into_iter().map(|t| t.to_string()).collect(),
            )
        })
        .collect()
}

/// GET /api/vocabulary - list every item.
pub async fn list_vocabulary(State(state): State<AppState>) -> Json<Vec<ItemInfo>> {
    let base = state.termbase.read().await;
    Json(base.vocabulary.iter().map(item_info).collect())
}

/// Response for a single-item read: the item plus its category siblings.
#[derive(Serialize)]
pub struct ItemDetailResponse {
    pub item: ItemInfo,
    pub category_items: Vec<ItemInfo>,
    pub categories: Vec<String>,
}

/// GET /api/vocabulary/:id - one item with sibling category items.
pub async fn get_vocabulary_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemDetailResponse>, ApiError> {
    let base = state.termbase.read().await;
    let item = base.vocabulary.require(&id)?;

    Ok(Json(ItemDetailResponse {
        item: item_info(item),
        category_items: base
            .vocabulary
            .list_by_category(&item.category)
            .into_iter()
            .map(item_info)
            .collect(),
        categories: base.vocabulary.categories(),
    }))
}

/// Response for a category listing.
#[derive(Serialize)]
pub struct CategoryResponse {
    pub items: Vec<ItemInfo>,
    pub categories: Vec<String>,
}

/// GET /api/vocabulary/category/:category - items in one category.
pub async fn get_vocabulary_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<CategoryResponse> {
    let base = state.termbase.read().await;
    Json(CategoryResponse {
        items: base
            .vocabulary
            .list_by_category(&category)
            .into_iter()
            .map(item_info)
            .collect(),
        categories: base.vocabulary.categories(),
    })
}

/// GET /api/categories - distinct category labels.
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    let base = state.termbase.read().await;
    Json(base.vocabulary.categories())
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub lang: Option<String>,
}

/// GET /api/search?q=&lang= - substring search over terms and translations.
pub async fn search_vocabulary(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ItemInfo>>, ApiError> {
    let base = state.termbase.read().await;
    let hits = base
        .vocabulary
        .search(&params.q, params.lang.as_deref())?;
    Ok(Json(hits.into_iter().map(item_info).collect()))
}

/// Request body for authoring an item.
#[derive(Deserialize)]
pub struct CreateItemRequest {
    pub term: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

/// POST /api/vocabulary - author an item with primary translations.
pub async fn create_vocabulary_item(
    State(state): State<AppState>,
    Json(req): Json<CreateItemRequest>,
) -> Result<Json<ItemInfo>, ApiError> {
    let mut base = state.termbase.write().await;
    let info = item_info(base.author_item(
        &req.term,
        &req.definition,
        &req.category,
        &req.translations,
    )?);
    drop(base);

    if state.auto_save {
        state.save().await?;
    }

    Ok(Json(info))
}
