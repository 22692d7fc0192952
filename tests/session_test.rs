// ABOUTME: Integration tests for the per-user session and its live watchers
// ABOUTME: Debounced makeable recomputation, unit-system forwarding, and teardown on close
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use barkeep::config::SearchConfig;
use barkeep::errors::AppResult;
use barkeep::models::{Recipe, TastePreferences, UnitSystem};
use barkeep::preferences::{Listener, PreferenceStore};
use barkeep::services::taste::TasteField;
use barkeep::session::Session;
use tokio::sync::mpsc;
use tokio::time::{advance, sleep};

use common::{ids, recorder, session, user};

fn makeable_channel() -> (
    Listener<AppResult<Vec<Recipe>>>,
    mpsc::UnboundedReceiver<Vec<String>>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let listener: Listener<AppResult<Vec<Recipe>>> = Arc::new(move |result: &AppResult<Vec<Recipe>>| {
        let drinks = result.as_ref().unwrap();
        let _ = tx.send(drinks.iter().map(|d| d.id.clone()).collect());
    });
    (listener, rx)
}

#[tokio::test(start_paused = true)]
async fn test_watch_makeable_publishes_latest_bar_only() {
    let (session, _catalog, store) = session();
    let (listener, mut rx) = makeable_channel();

    session.watch_makeable(listener).await.unwrap();
    session.add_owned_ingredients(&["Lime"]).await.unwrap();
    session.add_owned_ingredients(&["Sugar"]).await.unwrap();
    sleep(Duration::from_millis(600)).await;

    assert_eq!(rx.recv().await.unwrap(), vec!["11000", "11001"]);
    assert!(rx.try_recv().is_err());
    assert_eq!(store.get_available_cocktails(&user()).await.unwrap(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_watch_makeable_waits_for_quiet_period() {
    let (session, _catalog, _store) = session();
    let (listener, mut rx) = makeable_channel();

    session.watch_makeable(listener).await.unwrap();
    advance(Duration::from_millis(200)).await;
    assert!(rx.try_recv().is_err());

    sleep(Duration::from_millis(400)).await;
    assert_eq!(rx.recv().await.unwrap(), Vec::<String>::new());
}

#[tokio::test(start_paused = true)]
async fn test_close_stops_watchers() {
    let (session, _catalog, _store) = session();
    let (listener, mut rx) = makeable_channel();
    session.watch_makeable(listener).await.unwrap();
    assert_eq!(session.subscription_count(), 1);

    session.close();
    assert_eq!(session.subscription_count(), 0);

    session.add_owned_ingredients(&["Gin"]).await.unwrap();
    sleep(Duration::from_millis(600)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_watch_unit_system_forwards_changes_only() {
    let (session, _catalog, _store) = session();
    let (seen, listener) = recorder::<UnitSystem>();

    session.watch_unit_system(listener).await.unwrap();
    session.set_unit_system(UnitSystem::Ml).await.unwrap();
    session.set_dark_mode(true).await.unwrap();
    session.set_unit_system(UnitSystem::Ml).await.unwrap();
    session.set_unit_system(UnitSystem::Oz).await.unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![UnitSystem::Oz, UnitSystem::Ml, UnitSystem::Oz]
    );
    assert!(session.settings().await.unwrap().dark_mode);
}

#[tokio::test]
async fn test_watch_available_cocktails_follows_makeable() {
    let (session, _catalog, _store) = session();
    let (seen, listener) = recorder::<usize>();
    session.watch_available_cocktails(listener).await.unwrap();

    session.add_owned_ingredients(&["Grenadine"]).await.unwrap();
    session.makeable_cocktails().await.unwrap();

    assert_eq!(seen.lock().unwrap().last(), Some(&2));
}

#[tokio::test]
async fn test_session_round_trips_user_data() {
    let (session, _catalog, store) = session();

    session.add_owned_ingredients(&["Gin", "Lemon Juice"]).await.unwrap();
    session.remove_owned_ingredient("Gin").await.unwrap();
    assert!(session.toggle_favorite("17222").await.unwrap());
    let note = session.add_note("17222", "Shake harder").await.unwrap();
    session.set_language("de").await.unwrap();

    let document = store.export_document(&user()).await.unwrap();
    assert_eq!(
        document.owned_ingredients.into_iter().collect::<Vec<_>>(),
        vec!["Lemon Juice"]
    );
    assert_eq!(document.favorites[0].recipe_id, "17222");
    assert_eq!(document.notes, vec![note]);
    assert_eq!(document.settings.language, "de");

    let card = session.recipe_card("17222", 1).await.unwrap();
    let available: Vec<&str> = card
        .rows
        .iter()
        .filter(|row| row.available)
        .map(|row| row.name.as_str())
        .collect();
    assert_eq!(available, vec!["Lemon Juice"]);
}

#[tokio::test]
async fn test_session_recommendations_use_configured_count() {
    let catalog = common::catalog();
    let store = common::store();
    let config = SearchConfig {
        recommendation_count: 1,
        ..SearchConfig::default()
    };
    let session = Session::with_config(user(), catalog, store.clone(), config);

    session
        .save_taste(TasteField::Drinks, vec!["Ordinary Drink".to_owned()])
        .await
        .unwrap();
    let drinks = session.recommendations().await.unwrap();
    assert_eq!(ids(&drinks), vec!["11007"]);

    assert_eq!(
        store.get_preferences(&user()).await.unwrap(),
        TastePreferences {
            drinks: vec!["Ordinary Drink".to_owned()],
            ..TastePreferences::default()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_drink_search_as_you_type_publishes_last_query() {
    let (session, _catalog, _store) = session();
    let search = session.drink_search().unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();

    for query in ["m", "ma", "mar"] {
        let tx = tx.clone();
        let _ = search.search_as_you_type(query, move |result: AppResult<Vec<Recipe>>| {
            let _ = tx.send(result.unwrap());
        });
        advance(Duration::from_millis(100)).await;
    }
    sleep(Duration::from_millis(600)).await;

    let drinks = rx.recv().await.unwrap();
    assert_eq!(ids(&drinks), vec!["11007"]);
    assert!(rx.try_recv().is_err());
    assert_eq!(search.generation(), 3);
}
