// ABOUTME: In-memory preference store with one set of live documents per user
// ABOUTME: Backs tests and the CLI; can simulate an unreachable store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use super::live::{Listener, LiveDocument, Subscription};
use super::PreferenceStore;
use crate::constants::service_names::PREFERENCE_STORE;
use crate::errors::{AppError, AppResult};
use crate::models::{
    DisplaySettings, DrinkNote, Favorite, TastePreferences, UnitSystem, UserDocument, UserId,
};

/// One user's fields, each independently subscribable
#[derive(Clone, Default)]
struct UserDocs {
    owned: LiveDocument<BTreeSet<String>>,
    favorites: LiveDocument<Vec<Favorite>>,
    notes: LiveDocument<Vec<DrinkNote>>,
    preferences: LiveDocument<TastePreferences>,
    settings: LiveDocument<DisplaySettings>,
    available: LiveDocument<usize>,
}

impl From<UserDocument> for UserDocs {
    fn from(doc: UserDocument) -> Self {
        Self {
            owned: LiveDocument::new(doc.owned_ingredients),
            favorites: LiveDocument::new(doc.favorites),
            notes: LiveDocument::new(doc.notes),
            preferences: LiveDocument::new(doc.preferences),
            settings: LiveDocument::new(doc.settings),
            available: LiveDocument::new(doc.available_cocktails),
        }
    }
}

/// Preference store kept in process memory
#[derive(Default)]
pub struct InMemoryPreferenceStore {
    users: DashMap<UserId, UserDocs>,
    offline: AtomicBool,
}

impl InMemoryPreferenceStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything stored for `user`
    ///
    /// Existing subscribers of the previous document stop receiving updates.
    pub fn seed(&self, user: &UserId, document: UserDocument) {
        self.users.insert(user.clone(), UserDocs::from(document));
    }

    /// Make every call fail with a retryable storage error
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn docs(&self, user: &UserId) -> AppResult<UserDocs> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::storage(format!("{PREFERENCE_STORE} is unreachable"))
                .with_resource_id(user.as_str()));
        }
        Ok(self.users.entry(user.clone()).or_default().clone())
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get_owned_ingredients(&self, user: &UserId) -> AppResult<BTreeSet<String>> {
        Ok(self.docs(user)?.owned.get())
    }

    async fn set_owned_ingredients(
        &self,
        user: &UserId,
        ingredients: BTreeSet<String>,
    ) -> AppResult<()> {
        let ingredients: BTreeSet<String> = ingredients
            .into_iter()
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty())
            .collect();
        debug!(user.id = %user, count = ingredients.len(), "Replacing owned ingredients");
        self.docs(user)?.owned.set(ingredients);
        Ok(())
    }

    async fn add_owned_ingredients(
        &self,
        user: &UserId,
        ingredients: Vec<String>,
    ) -> AppResult<BTreeSet<String>> {
        let docs = self.docs(user)?;
        let added: Vec<String> = ingredients
            .into_iter()
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty())
            .collect();
        debug!(user.id = %user, added = added.len(), "Adding owned ingredients");
        Ok(docs.owned.update(|owned| owned.extend(added)))
    }

    async fn remove_owned_ingredient(
        &self,
        user: &UserId,
        ingredient: &str,
    ) -> AppResult<BTreeSet<String>> {
        debug!(user.id = %user, ingredient, "Removing owned ingredient");
        Ok(self.docs(user)?.owned.update(|owned| {
            owned.remove(ingredient);
        }))
    }

    async fn subscribe_owned_ingredients(
        &self,
        user: &UserId,
        listener: Listener<BTreeSet<String>>,
    ) -> AppResult<Subscription> {
        Ok(self.docs(user)?.owned.subscribe(listener))
    }

    async fn get_favorites(&self, user: &UserId) -> AppResult<Vec<Favorite>> {
        Ok(self.docs(user)?.favorites.get())
    }

    async fn add_favorite(&self, user: &UserId, favorite: Favorite) -> AppResult<Vec<Favorite>> {
        let docs = self.docs(user)?;
        if docs
            .favorites
            .get()
            .iter()
            .any(|f| f.recipe_id == favorite.recipe_id)
        {
            return Ok(docs.favorites.get());
        }
        debug!(user.id = %user, recipe.id = %favorite.recipe_id, "Adding favorite");
        Ok(docs.favorites.update(|favorites| favorites.push(favorite)))
    }

    async fn remove_favorite(&self, user: &UserId, recipe_id: &str) -> AppResult<Vec<Favorite>> {
        debug!(user.id = %user, recipe.id = recipe_id, "Removing favorite");
        Ok(self
            .docs(user)?
            .favorites
            .update(|favorites| favorites.retain(|f| f.recipe_id != recipe_id)))
    }

    async fn subscribe_favorites(
        &self,
        user: &UserId,
        listener: Listener<Vec<Favorite>>,
    ) -> AppResult<Subscription> {
        Ok(self.docs(user)?.favorites.subscribe(listener))
    }

    async fn get_unit_system(&self, user: &UserId) -> AppResult<UnitSystem> {
        Ok(self.docs(user)?.settings.get().units)
    }

    async fn set_unit_system(&self, user: &UserId, units: UnitSystem) -> AppResult<()> {
        debug!(user.id = %user, %units, "Changing unit system");
        self.docs(user)?.settings.update(|settings| settings.units = units);
        Ok(())
    }

    async fn subscribe_unit_system(
        &self,
        user: &UserId,
        listener: Listener<UnitSystem>,
    ) -> AppResult<Subscription> {
        let last = Mutex::new(None::<UnitSystem>);
        let forward: Listener<DisplaySettings> = Arc::new(move |settings: &DisplaySettings| {
            let changed = last
                .lock()
                .map_or(true, |mut prev| prev.replace(settings.units) != Some(settings.units));
            if changed {
                listener(&settings.units);
            }
        });
        Ok(self.docs(user)?.settings.subscribe(forward))
    }

    async fn get_settings(&self, user: &UserId) -> AppResult<DisplaySettings> {
        Ok(self.docs(user)?.settings.get())
    }

    async fn set_dark_mode(&self, user: &UserId, enabled: bool) -> AppResult<()> {
        self.docs(user)?
            .settings
            .update(|settings| settings.dark_mode = enabled);
        Ok(())
    }

    async fn set_language(&self, user: &UserId, language: &str) -> AppResult<()> {
        self.docs(user)?
            .settings
            .update(|settings| language.clone_into(&mut settings.language));
        Ok(())
    }

    async fn subscribe_settings(
        &self,
        user: &UserId,
        listener: Listener<DisplaySettings>,
    ) -> AppResult<Subscription> {
        Ok(self.docs(user)?.settings.subscribe(listener))
    }

    async fn get_preferences(&self, user: &UserId) -> AppResult<TastePreferences> {
        Ok(self.docs(user)?.preferences.get())
    }

    async fn set_preferences(&self, user: &UserId, preferences: TastePreferences) -> AppResult<()> {
        self.docs(user)?.preferences.set(preferences);
        Ok(())
    }

    async fn get_notes(&self, user: &UserId) -> AppResult<Vec<DrinkNote>> {
        Ok(self.docs(user)?.notes.get())
    }

    async fn add_note(&self, user: &UserId, note: DrinkNote) -> AppResult<()> {
        debug!(user.id = %user, note.id = %note.id, recipe.id = %note.recipe_id, "Adding note");
        self.docs(user)?.notes.update(|notes| notes.push(note));
        Ok(())
    }

    async fn delete_note(&self, user: &UserId, note_id: Uuid) -> AppResult<()> {
        let docs = self.docs(user)?;
        if !docs.notes.get().iter().any(|note| note.id == note_id) {
            return Err(AppError::not_found(format!("Note {note_id}"))
                .with_resource_id(note_id.to_string()));
        }
        docs.notes.update(|notes| notes.retain(|note| note.id != note_id));
        Ok(())
    }

    async fn subscribe_notes(
        &self,
        user: &UserId,
        listener: Listener<Vec<DrinkNote>>,
    ) -> AppResult<Subscription> {
        Ok(self.docs(user)?.notes.subscribe(listener))
    }

    async fn get_available_cocktails(&self, user: &UserId) -> AppResult<usize> {
        Ok(self.docs(user)?.available.get())
    }

    async fn set_available_cocktails(&self, user: &UserId, count: usize) -> AppResult<()> {
        self.docs(user)?.available.set(count);
        Ok(())
    }

    async fn subscribe_available_cocktails(
        &self,
        user: &UserId,
        listener: Listener<usize>,
    ) -> AppResult<Subscription> {
        Ok(self.docs(user)?.available.subscribe(listener))
    }

    async fn export_document(&self, user: &UserId) -> AppResult<UserDocument> {
        let docs = self.docs(user)?;
        Ok(UserDocument {
            owned_ingredients: docs.owned.get(),
            favorites: docs.favorites.get(),
            notes: docs.notes.get(),
            preferences: docs.preferences.get(),
            settings: docs.settings.get(),
            available_cocktails: docs.available.get(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("user-1")
    }

    #[tokio::test]
    async fn test_add_ingredients_ignores_blanks() {
        let store = InMemoryPreferenceStore::new();
        let bar = store
            .add_owned_ingredients(&user(), vec!["Gin".to_owned(), "  ".to_owned(), " Lime ".to_owned()])
            .await
            .unwrap();
        assert_eq!(bar.into_iter().collect::<Vec<_>>(), vec!["Gin", "Lime"]);
    }

    #[tokio::test]
    async fn test_replacing_bar_drops_blank_names() {
        let store = InMemoryPreferenceStore::new();
        let bar: BTreeSet<String> = ["", " Rum ", "   "].iter().map(|n| (*n).to_owned()).collect();
        store.set_owned_ingredients(&user(), bar).await.unwrap();
        let stored = store.get_owned_ingredients(&user()).await.unwrap();
        assert_eq!(stored.into_iter().collect::<Vec<_>>(), vec!["Rum"]);
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let store = InMemoryPreferenceStore::new();
        store.set_unit_system(&user(), UnitSystem::Ml).await.unwrap();
        let other = UserId::new("user-2");
        assert_eq!(store.get_unit_system(&other).await.unwrap(), UnitSystem::Oz);
    }

    #[tokio::test]
    async fn test_offline_store_fails_retryably() {
        let store = InMemoryPreferenceStore::new();
        store.set_offline(true);
        let error = store.get_favorites(&user()).await.unwrap_err();
        assert!(error.is_retryable());
        assert_eq!(error.resource_id.as_deref(), Some("user-1"));
    }
}
