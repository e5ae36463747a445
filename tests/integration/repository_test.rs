//! PostgreSQL repository tests. Run against `DATABASE_URL`; skipped when unset.
//!
//! Every test tags its rows with a unique marker and narrows list queries
//! with it, so tests can share one database and run in parallel.

mod helpers;

use chrono::{TimeZone, Utc};

use newsdesk_core::traits::Repository;
use newsdesk_core::types::{ColumnValue, FilterRequest, SortDirection};
use newsdesk_database::NewsRepository;
use newsdesk_entity::news::{CreateNews, UpdateNews};

fn news(title: impl Into<String>, description: impl Into<String>) -> CreateNews {
    CreateNews {
        title: title.into(),
        description: description.into(),
        publication_date: None,
    }
}

#[tokio::test]
async fn test_create_then_find_round_trip() {
    let Some(pool) = helpers::database().await else {
        return;
    };
    let repo = NewsRepository::new(pool);
    let published = Utc.with_ymd_and_hms(2024, 5, 18, 11, 0, 0).unwrap();

    let created = repo
        .create(&CreateNews {
            title: helpers::marker("round-trip"),
            description: "alpha content".into(),
            publication_date: Some(published),
        })
        .await
        .unwrap();
    assert_eq!(created.created_at, created.updated_at);
    assert!(created.deleted_at.is_none());

    let found = repo
        .find_one_by("code", ColumnValue::Uuid(created.code))
        .await
        .unwrap()
        .expect("news should be found by code");
    assert_eq!(found.id, created.id);
    assert_eq!(found.title, created.title);
    assert_eq!(found.description, "alpha content");
    assert_eq!(found.publication_date, Some(published));

    let by_id = repo.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(by_id.code, created.code);
}

#[tokio::test]
async fn test_soft_delete_hides_row_and_keeps_timestamp() {
    let Some(pool) = helpers::database().await else {
        return;
    };
    let repo = NewsRepository::new(pool);
    let created = repo.create(&news(helpers::marker("soft"), "d")).await.unwrap();

    assert!(repo.soft_delete(&created.id).await.unwrap());
    let first = repo
        .find_by_id_with_deleted(&created.id)
        .await
        .unwrap()
        .unwrap()
        .deleted_at
        .expect("deletion timestamp should be set");

    assert!(!repo.soft_delete(&created.id).await.unwrap());
    let second = repo
        .find_by_id_with_deleted(&created.id)
        .await
        .unwrap()
        .unwrap()
        .deleted_at;
    assert_eq!(second, Some(first));

    assert!(repo.find_by_id(&created.id).await.unwrap().is_none());
    assert!(
        repo.find_one_by("code", ColumnValue::Uuid(created.code))
            .await
            .unwrap()
            .is_none()
    );
    let outcome = repo.update(&created.id, &UpdateNews::default()).await.unwrap();
    assert!(!outcome.is_affected());
}

#[tokio::test]
async fn test_empty_update_only_advances_update_timestamp() {
    let Some(pool) = helpers::database().await else {
        return;
    };
    let repo = NewsRepository::new(pool);
    let created = repo.create(&news(helpers::marker("empty-update"), "d")).await.unwrap();

    // NOW() is the transaction start time; make sure the clock moves.
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let outcome = repo.update(&created.id, &UpdateNews::default()).await.unwrap();
    assert_eq!(outcome.rows_affected, 1);

    let updated = repo.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn test_partial_update() {
    let Some(pool) = helpers::database().await else {
        return;
    };
    let repo = NewsRepository::new(pool);
    let created = repo.create(&news(helpers::marker("partial"), "before")).await.unwrap();

    let changes = UpdateNews {
        description: Some("after".into()),
        ..UpdateNews::default()
    };
    repo.update(&created.id, &changes).await.unwrap();

    let updated = repo.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description, "after");
}

#[tokio::test]
async fn test_update_missing_id_affects_nothing() {
    let Some(pool) = helpers::database().await else {
        return;
    };
    let repo = NewsRepository::new(pool);
    let outcome = repo.update(&i64::MAX, &UpdateNews::default()).await.unwrap();
    assert_eq!(outcome.rows_affected, 0);
}

#[tokio::test]
async fn test_search_uses_or_semantics() {
    let Some(pool) = helpers::database().await else {
        return;
    };
    let repo = NewsRepository::new(pool);
    let tag = helpers::marker("search");

    let a = repo
        .create(&news(format!("Launch A {tag}"), format!("alpha content {tag}")))
        .await
        .unwrap();
    let b = repo
        .create(&news(format!("Launch B {tag}"), format!("beta content {tag}")))
        .await
        .unwrap();

    // Only the description contains "alpha".
    let page = repo
        .find_by_filters(&FilterRequest::new().with_search(format!("alpha content {tag}")))
        .await
        .unwrap();
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.data[0].id, a.id);

    let page = repo
        .find_by_filters(
            &FilterRequest::new()
                .with_search(tag.clone())
                .with_order("title", SortDirection::Desc),
        )
        .await
        .unwrap();
    let ids: Vec<i64> = page.data.iter().map(|n| n.id).collect();
    assert_eq!(ids, [b.id, a.id]);
}

#[tokio::test]
async fn test_search_without_match_is_empty() {
    let Some(pool) = helpers::database().await else {
        return;
    };
    let repo = NewsRepository::new(pool);

    let page = repo
        .find_by_filters(&FilterRequest::new().with_search(helpers::marker("nothing")))
        .await
        .unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 0);
    assert_eq!(page.meta.total_pages, 0);
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let Some(pool) = helpers::database().await else {
        return;
    };
    let repo = NewsRepository::new(pool);
    let tag = helpers::marker("wildcard");
    repo.create(&news(format!("{tag} 100% off"), "d")).await.unwrap();
    repo.create(&news(format!("{tag} 100 off"), "d")).await.unwrap();

    let page = repo
        .find_by_filters(&FilterRequest::new().with_search(format!("{tag} 100%")))
        .await
        .unwrap();
    assert_eq!(page.meta.total, 1);
}

#[tokio::test]
async fn test_pagination_counts() {
    let Some(pool) = helpers::database().await else {
        return;
    };
    let repo = NewsRepository::new(pool);
    let tag = helpers::marker("pages");
    for i in 0..45 {
        repo.create(&news(format!("{tag} {i:02}"), "d")).await.unwrap();
    }

    let page = repo
        .find_by_filters(&FilterRequest::new().with_search(tag.clone()).with_page(3, 20))
        .await
        .unwrap();
    assert_eq!(page.meta.total, 45);
    assert_eq!(page.meta.total_pages, 3);
    assert_eq!(page.data.len(), 5);

    // Past the end the total still comes back.
    let page = repo
        .find_by_filters(&FilterRequest::new().with_search(tag).with_page(9, 20))
        .await
        .unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 45);
}

#[tokio::test]
async fn test_page_sizes_follow_total() {
    let Some(pool) = helpers::database().await else {
        return;
    };
    let repo = NewsRepository::new(pool);

    for total in [40u64, 45] {
        let tag = helpers::marker(&format!("sizes-{total}"));
        for i in 0..total {
            repo.create(&news(format!("{tag} {i:02}"), "d")).await.unwrap();
        }

        let cases = [
            (1, 20),
            (2, 20),
            (3, 20),
            (1, 40),
            (2, 40),
            (4, 10),
            (5, 10),
            (7, 7),
            (1, 100),
        ];
        for (page_no, limit) in cases {
            let filters = FilterRequest::new().with_search(tag.clone()).with_page(page_no, limit);
            let page = repo.find_by_filters(&filters).await.unwrap();

            let expected = limit.min(total.saturating_sub((page_no - 1) * limit));
            assert_eq!(
                page.data.len() as u64,
                expected,
                "total {total}, page {page_no}, limit {limit}"
            );
            assert_eq!(page.meta.total, total);
            assert_eq!(page.meta.total_pages, total.div_ceil(limit));
        }
    }
}

#[tokio::test]
async fn test_unknown_field_is_rejected() {
    let Some(pool) = helpers::database().await else {
        return;
    };
    let repo = NewsRepository::new(pool);

    let err = repo
        .find_one_by("1 = 1; --", ColumnValue::Null)
        .await
        .unwrap_err();
    assert_eq!(err.kind, newsdesk_core::error::ErrorKind::Validation);

    let err = repo
        .find_by_filters(&FilterRequest::new().with_order("deleted_at", SortDirection::Asc))
        .await
        .unwrap_err();
    assert_eq!(err.kind, newsdesk_core::error::ErrorKind::Validation);
}

#[tokio::test]
async fn test_hard_delete() {
    let Some(pool) = helpers::database().await else {
        return;
    };
    let repo = NewsRepository::new(pool);
    let created = repo.create(&news(helpers::marker("hard"), "d")).await.unwrap();

    assert!(repo.delete(&created.id).await.unwrap());
    assert!(repo.find_by_id_with_deleted(&created.id).await.unwrap().is_none());
    assert!(!repo.delete(&created.id).await.unwrap());
}
