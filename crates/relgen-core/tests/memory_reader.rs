use relgen_core::{reader::MemorySchema, Direction, IndexDescriptor, SchemaReader};
use std_util::prelude::*;

fn blog() -> MemorySchema {
    MemorySchema::new()
        .foreign_key("posts", "user_id", "users", "id")
        .foreign_key("comments", "post_id", "posts", "id")
        .foreign_key("attachments", "post_id", "posts", "id")
        .index("posts", IndexDescriptor::new("posts_pkey", &["id"]).primary())
        .index("posts", IndexDescriptor::new("posts_author_idx", &["user_id"]))
}

#[tokio::test]
async fn relations_in_both_directions() {
    let edges = assert_ok!(blog().fetch_relations("posts").await);

    let summary: Vec<_> = edges
        .iter()
        .map(|edge| {
            (
                edge.referenced_table(),
                edge.foreign_key_column(),
                edge.referenced_column(),
                edge.direction(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        [
            ("attachments", "post_id", "id", Direction::Outgoing),
            ("comments", "post_id", "id", Direction::Outgoing),
            ("users", "id", "user_id", Direction::Incoming),
        ]
    );

    assert!(edges.iter().all(|edge| edge.subject_table() == "posts"));
}

#[tokio::test]
async fn unknown_table_is_empty() {
    let schema = blog();

    assert!(assert_ok!(schema.fetch_relations("missing").await).is_empty());
    assert!(assert_ok!(schema.fetch_indexes("missing").await).is_empty());
}

#[tokio::test]
async fn duplicate_foreign_keys_collapse() {
    let schema = MemorySchema::new()
        .foreign_key("posts", "user_id", "users", "id")
        .foreign_key("posts", "user_id", "users", "id");

    let edges = assert_ok!(schema.fetch_relations("users").await);
    assert_eq!(edges.len(), 1);
}

#[tokio::test]
async fn self_reference_yields_both_directions() {
    let schema = MemorySchema::new().foreign_key("categories", "parent_id", "categories", "id");

    let edges = assert_ok!(schema.fetch_relations("categories").await);
    let directions: Vec<_> = edges.iter().map(|edge| edge.direction()).collect();

    assert_eq!(directions, [Direction::Outgoing, Direction::Incoming]);
}

#[tokio::test]
async fn indexes_ordered_by_name() {
    let indexes = assert_ok!(blog().fetch_indexes("posts").await);
    let names: Vec<_> = indexes.iter().map(|i| i.index_name.as_str()).collect();

    assert_eq!(names, ["posts_author_idx", "posts_pkey"]);
}
