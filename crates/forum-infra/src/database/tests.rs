use forum_core::ports::{CategoryLookup, RevisionHistoryStore};
use sea_orm::{DatabaseBackend, MockDatabase};

use super::entity::{category, post_history};
use super::{SeaOrmCategories, SeaOrmRevisionHistory};

fn history_row(id: i64, content: &str, created_at: i64) -> post_history::Model {
    post_history::Model {
        id,
        posts_id: 7,
        content: content.to_owned(),
        created_at,
    }
}

#[tokio::test]
async fn test_list_revisions_maps_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![history_row(2, "second", 200), history_row(1, "first", 100)]])
        .into_connection();

    let history = SeaOrmRevisionHistory::new(db);
    let revisions = history.list_revisions(7).await.unwrap();

    assert_eq!(revisions.len(), 2);
    assert_eq!(revisions[0].post_id, 7);
    assert_eq!(revisions[0].content, "second");
    assert_eq!(revisions[1].saved_at, 100);
}

#[tokio::test]
async fn test_append_inserts_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![history_row(3, "before edit", 300)]])
        .into_connection();

    let history = SeaOrmRevisionHistory::new(db);
    history.append(7, "before edit", 300).await.unwrap();
}

#[tokio::test]
async fn test_category_lookup() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![category::Model {
            id: 4,
            name: "Off topic".to_owned(),
            no_bounty: "Y".to_owned(),
        }]])
        .append_query_results([Vec::<category::Model>::new()])
        .into_connection();

    let categories = SeaOrmCategories::new(db);
    assert!(categories.no_bounty_flag(4).await.unwrap());
    assert!(!categories.exists(99).await.unwrap());
}
