mod common;

use heroes_api::model::{HeroCreate, HeroUpdate, TeamCreate, TeamUpdate};
use heroes_api::{AppError, HeroService, TeamService};
use serde_json::json;

fn hero_input(v: serde_json::Value) -> HeroCreate {
    serde_json::from_value(v).unwrap()
}

#[tokio::test]
async fn created_hero_reads_back_unchanged() {
    let gw = common::gateway().await;
    let team = TeamService::create(
        &gw,
        TeamCreate {
            name: Some("Avengers".into()),
            headquarters: Some("New York".into()),
        },
    )
    .await
    .unwrap();

    let inputs = [
        json!({"name": "Deadpond", "secret_name": "Dive Wilson"}),
        json!({"name": "Rusty-Man", "secret_name": "Tommy Sharp", "age": 48}),
        json!({"name": "Iron Man", "secret_name": "Tony Stark", "age": 45, "team_id": team.id}),
    ];
    for input in inputs {
        let created = HeroService::create(&gw, hero_input(input.clone())).await.unwrap();
        let read = HeroService::get(&gw, created.id).await.unwrap();
        assert_eq!(read.hero.name, input["name"].as_str().unwrap());
        assert_eq!(read.hero.secret_name, input["secret_name"].as_str().unwrap());
        assert_eq!(read.hero.age, input["age"].as_i64());
        assert_eq!(read.hero.team_id, input["team_id"].as_i64());
        assert_eq!(read.team.as_ref().map(|t| t.id), input["team_id"].as_i64());
    }
}

#[tokio::test]
async fn list_respects_window() {
    let gw = common::gateway().await;
    for i in 0..7 {
        HeroService::create(
            &gw,
            hero_input(json!({"name": format!("Hero{i}"), "secret_name": format!("Secret{i}")})),
        )
        .await
        .unwrap();
    }
    let total = 7i64;
    for (offset, limit) in [(0, 100), (0, 3), (2, 2), (5, 10), (7, 5), (9, 1), (3, 0)] {
        let page = HeroService::list(&gw, Some(offset), Some(limit)).await.unwrap();
        let expected = limit.min((total - offset).max(0)) as usize;
        assert_eq!(page.len(), expected, "offset={offset} limit={limit}");
        if let Some(first) = page.first() {
            assert_eq!(first.name, format!("Hero{offset}"));
        }
    }
}

#[tokio::test]
async fn list_limit_101_is_rejected() {
    let gw = common::gateway().await;
    let err = HeroService::list(&gw, None, Some(101)).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    let err = TeamService::list(&gw, Some(-1), None).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn missing_secret_name_never_reaches_storage() {
    let gw = common::gateway().await;
    let err = HeroService::create(&gw, hero_input(json!({"name": "Deadpond"})))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(HeroService::list(&gw, None, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_changes_only_the_given_field() {
    let gw = common::gateway().await;
    let team = TeamService::create(
        &gw,
        TeamCreate {
            name: Some("X-Men".into()),
            headquarters: Some("Westchester".into()),
        },
    )
    .await
    .unwrap();
    let before = HeroService::create(
        &gw,
        hero_input(json!({"name": "Logan", "secret_name": "James Howlett", "age": 137, "team_id": team.id})),
    )
    .await
    .unwrap();

    let patch: HeroUpdate = serde_json::from_value(json!({"age": 138})).unwrap();
    let after = HeroService::update(&gw, before.id, patch).await.unwrap();
    assert_eq!(after.age, Some(138));
    assert_eq!(after.name, before.name);
    assert_eq!(after.secret_name, before.secret_name);
    assert_eq!(after.team_id, before.team_id);

    let patch: HeroUpdate = serde_json::from_value(json!({"team_id": null})).unwrap();
    let cleared = HeroService::update(&gw, before.id, patch).await.unwrap();
    assert_eq!(cleared.team_id, None);
    assert_eq!(cleared.age, Some(138));
}

#[tokio::test]
async fn empty_update_returns_current_record() {
    let gw = common::gateway().await;
    let team = TeamService::create(
        &gw,
        TeamCreate {
            name: Some("Avengers".into()),
            headquarters: Some("New York".into()),
        },
    )
    .await
    .unwrap();
    let same = TeamService::update(&gw, team.id, TeamUpdate::default()).await.unwrap();
    assert_eq!(same, team);
    let err = TeamService::update(&gw, team.id + 1, TeamUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound("Team")));
}

#[tokio::test]
async fn deleted_ids_are_not_found() {
    let gw = common::gateway().await;
    let hero = HeroService::create(
        &gw,
        hero_input(json!({"name": "Deadpond", "secret_name": "Dive Wilson"})),
    )
    .await
    .unwrap();
    HeroService::delete(&gw, hero.id).await.unwrap();

    assert!(matches!(HeroService::get(&gw, hero.id).await, Err(AppError::NotFound("Hero"))));
    let patch: HeroUpdate = serde_json::from_value(json!({"name": "Ghost"})).unwrap();
    assert!(matches!(
        HeroService::update(&gw, hero.id, patch).await,
        Err(AppError::NotFound("Hero"))
    ));
    assert!(matches!(HeroService::delete(&gw, hero.id).await, Err(AppError::NotFound("Hero"))));
}

#[tokio::test]
async fn team_and_hero_expand_each_other() {
    let gw = common::gateway().await;
    let team = TeamService::create(
        &gw,
        TeamCreate {
            name: Some("Avengers".into()),
            headquarters: Some("New York".into()),
        },
    )
    .await
    .unwrap();
    let hero = HeroService::create(
        &gw,
        hero_input(json!({"name": "Iron Man", "secret_name": "Tony Stark", "team_id": team.id})),
    )
    .await
    .unwrap();

    let with_heroes = TeamService::get(&gw, team.id).await.unwrap();
    assert_eq!(with_heroes.heroes.len(), 1);
    assert_eq!(with_heroes.heroes[0].name, "Iron Man");

    let with_team = HeroService::get(&gw, hero.id).await.unwrap();
    assert_eq!(with_team.team.unwrap().name, "Avengers");
}
