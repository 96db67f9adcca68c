//! Cardinality classification.
//!
//! The rules are a heuristic: a foreign key column that is the related table's
//! primary key or unique key, or that leads an index, is read as one-to-one.
//! The schema alone does not prove this.

use relgen_core::{
    relation::classify, Cardinality, Direction, ForeignKeyEdge, IndexDescriptor,
};
use std_util::prelude::*;

fn outgoing(column: &str) -> ForeignKeyEdge {
    assert_ok!(ForeignKeyEdge::new(
        "users",
        "profiles",
        column,
        "id",
        Direction::Outgoing
    ))
}

fn incoming(column: &str) -> ForeignKeyEdge {
    assert_ok!(ForeignKeyEdge::new(
        "profiles",
        "users",
        "id",
        column,
        Direction::Incoming
    ))
}

#[test]
fn incoming_is_always_single_row() {
    let edge = incoming("user_id");

    let index_sets = [
        vec![],
        vec![IndexDescriptor::new("users_pkey", &["id"]).primary()],
        vec![IndexDescriptor::new("users_id_idx", &["id"]).position(2)],
        vec![IndexDescriptor::new("unrelated", &["email"]).unique()],
    ];

    for indexes in &index_sets {
        assert_eq!(classify(&edge, indexes), Some(Cardinality::SingleRow));
    }
}

#[test]
fn primary_key_match_is_single_row() {
    let indexes = [IndexDescriptor::new("profiles_pkey", &["user_id"]).primary()];
    assert_eq!(
        classify(&outgoing("user_id"), &indexes),
        Some(Cardinality::SingleRow)
    );
}

#[test]
fn unique_match_is_single_row() {
    let indexes = [IndexDescriptor::new("profiles_user_id_key", &["user_id"]).unique()];
    assert_eq!(
        classify(&outgoing("user_id"), &indexes),
        Some(Cardinality::SingleRow)
    );
}

#[test]
fn unique_trailing_column_is_single_row() {
    let indexes = [IndexDescriptor::new("profiles_user_id_key", &["user_id"])
        .unique()
        .position(2)];
    assert_eq!(
        classify(&outgoing("user_id"), &indexes),
        Some(Cardinality::SingleRow)
    );
}

#[test]
fn non_unique_leading_column_is_single_row() {
    let indexes = [IndexDescriptor::new("profiles_user_id_idx", &["user_id"]).position(1)];
    assert_eq!(
        classify(&outgoing("user_id"), &indexes),
        Some(Cardinality::SingleRow)
    );
}

#[test]
fn non_unique_trailing_column_is_multi_row() {
    let indexes = [IndexDescriptor::new("profiles_user_id_idx", &["user_id"]).position(2)];
    assert_eq!(
        classify(&outgoing("user_id"), &indexes),
        Some(Cardinality::MultiRow)
    );
}

#[test]
fn last_matching_index_wins() {
    let primary = IndexDescriptor::new("a_pkey", &["user_id"]).primary();
    let trailing = IndexDescriptor::new("b_idx", &["user_id"]).position(2);

    // Primary key scanned last
    let indexes = [trailing.clone(), primary.clone()];
    assert_eq!(
        classify(&outgoing("user_id"), &indexes),
        Some(Cardinality::SingleRow)
    );

    // Primary key scanned first, then overwritten
    let indexes = [primary, trailing];
    assert_eq!(
        classify(&outgoing("user_id"), &indexes),
        Some(Cardinality::MultiRow)
    );
}

#[test]
fn non_matching_indexes_are_ignored() {
    let indexes = [
        IndexDescriptor::new("profiles_pkey", &["id"]).primary(),
        IndexDescriptor::new("profiles_user_team_idx", &["user_id", "team_id"]),
        IndexDescriptor::new("profiles_user_id_idx", &["user_id"]).position(2),
        IndexDescriptor::new("profiles_email_key", &["email"]).unique(),
    ];

    assert_eq!(
        classify(&outgoing("user_id"), &indexes),
        Some(Cardinality::MultiRow)
    );
}

#[test]
fn no_matching_index_is_unset() {
    let indexes = [IndexDescriptor::new("profiles_pkey", &["id"]).primary()];
    assert_none!(classify(&outgoing("user_id"), &indexes));
}
