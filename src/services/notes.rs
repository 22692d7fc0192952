// ABOUTME: Free-text notes attached to drinks
// ABOUTME: Trims and validates note text, lists a drink's notes newest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use std::cmp::Reverse;

use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{DrinkNote, UserId};
use crate::preferences::PreferenceStore;

/// Attach a note to `recipe_id`
///
/// # Errors
///
/// Returns `InvalidInput` when the text is blank, or a store failure
#[instrument(skip_all, fields(user.id = %user, recipe.id = recipe_id))]
pub async fn add_note(
    store: &dyn PreferenceStore,
    user: &UserId,
    recipe_id: &str,
    text: &str,
) -> AppResult<DrinkNote> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::invalid_input("Note text cannot be empty"));
    }
    let note = DrinkNote {
        id: Uuid::new_v4(),
        recipe_id: recipe_id.to_owned(),
        text: text.to_owned(),
        created_at: Utc::now(),
    };
    store.add_note(user, note.clone()).await?;
    Ok(note)
}

/// Delete a note
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown note, or a store failure
pub async fn delete_note(store: &dyn PreferenceStore, user: &UserId, note_id: Uuid) -> AppResult<()> {
    store.delete_note(user, note_id).await
}

/// Notes on `recipe_id`, newest first
///
/// # Errors
///
/// Returns a store failure
pub async fn notes_for(
    store: &dyn PreferenceStore,
    user: &UserId,
    recipe_id: &str,
) -> AppResult<Vec<DrinkNote>> {
    let mut notes: Vec<DrinkNote> = store
        .get_notes(user)
        .await?
        .into_iter()
        .filter(|note| note.recipe_id == recipe_id)
        .collect();
    notes.sort_by_key(|note| Reverse(note.created_at));
    Ok(notes)
}
