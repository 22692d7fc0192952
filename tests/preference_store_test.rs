// ABOUTME: Integration tests for the in-memory preference store and live documents
// ABOUTME: Immediate delivery on subscribe, unsubscribe, seeding, and per-user isolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::BTreeSet;

use barkeep::errors::ErrorCode;
use barkeep::models::{DrinkNote, Favorite, UserDocument, UserId};
use barkeep::preferences::{LiveDocument, PreferenceStore};
use chrono::Utc;
use uuid::Uuid;

use common::{recorder, store, user};

fn favorite(recipe_id: &str) -> Favorite {
    Favorite {
        recipe_id: recipe_id.to_owned(),
        added_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_subscribe_delivers_current_value_then_changes() {
    let store = store();
    store
        .add_owned_ingredients(&user(), vec!["Gin".to_owned()])
        .await
        .unwrap();
    let (seen, listener) = recorder::<BTreeSet<String>>();

    let _subscription = store
        .subscribe_owned_ingredients(&user(), listener)
        .await
        .unwrap();
    store
        .add_owned_ingredients(&user(), vec!["Tonic".to_owned()])
        .await
        .unwrap();

    let sizes: Vec<usize> = seen.lock().unwrap().iter().map(BTreeSet::len).collect();
    assert_eq!(sizes, vec![1, 2]);
}

#[tokio::test]
async fn test_unsubscribe_stops_delivery() {
    let store = store();
    let (seen, listener) = recorder::<Vec<Favorite>>();
    let subscription = store.subscribe_favorites(&user(), listener).await.unwrap();
    assert!(subscription.is_active());

    store.add_favorite(&user(), favorite("11007")).await.unwrap();
    subscription.unsubscribe();
    store.add_favorite(&user(), favorite("11000")).await.unwrap();

    let lengths: Vec<usize> = seen.lock().unwrap().iter().map(Vec::len).collect();
    assert_eq!(lengths, vec![0, 1]);
}

#[tokio::test]
async fn test_dropping_subscription_stops_delivery() {
    let store = store();
    let (seen, listener) = recorder::<Vec<DrinkNote>>();
    {
        let _subscription = store.subscribe_notes(&user(), listener).await.unwrap();
    }
    store
        .add_note(
            &user(),
            DrinkNote {
                id: Uuid::new_v4(),
                recipe_id: "11007".to_owned(),
                text: "Good".to_owned(),
                created_at: Utc::now(),
            },
        )
        .await
        .unwrap();
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_favorite_is_idempotent() {
    let store = store();
    store.add_favorite(&user(), favorite("11007")).await.unwrap();
    let favorites = store.add_favorite(&user(), favorite("11007")).await.unwrap();
    assert_eq!(favorites.len(), 1);
    let favorites = store.remove_favorite(&user(), "11007").await.unwrap();
    assert!(favorites.is_empty());
}

#[tokio::test]
async fn test_seed_replaces_document() {
    let store = store();
    let mut document = UserDocument::default();
    document.owned_ingredients.insert("Vodka".to_owned());
    document.available_cocktails = 4;
    store.seed(&user(), document.clone());

    assert_eq!(store.export_document(&user()).await.unwrap(), document);
    assert_eq!(
        store
            .export_document(&UserId::new("someone-else"))
            .await
            .unwrap(),
        UserDocument::default()
    );
}

#[tokio::test]
async fn test_offline_store_reports_storage_error() {
    let store = store();
    store.set_offline(true);
    let error = store
        .set_language(&user(), "fr")
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
    assert!(error.is_retryable());

    store.set_offline(false);
    store.set_language(&user(), "fr").await.unwrap();
    assert_eq!(store.get_settings(&user()).await.unwrap().language, "fr");
}

#[tokio::test]
async fn test_live_document_watch_sees_latest_value() {
    let document = LiveDocument::new(0_usize);
    let mut receiver = document.watch();
    document.set(1);
    document.set(2);

    receiver.changed().await.unwrap();
    assert_eq!(*receiver.borrow_and_update(), 2);
    assert_eq!(document.update(|value| *value += 1), 3);
    assert_eq!(document.get(), 3);
}
