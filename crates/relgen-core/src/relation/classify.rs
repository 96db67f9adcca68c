use crate::schema::{ForeignKeyEdge, IndexDescriptor};

use super::Cardinality;

/// Decides the cardinality of a foreign key edge.
///
/// `indexes` are the indexes of the edge's referenced table. Incoming edges are
/// single-row without looking at them. Outgoing edges are classified from every
/// index covering exactly the foreign key column:
///
/// * primary key -> single row
/// * unique -> single row
/// * non-unique, leading the index key -> single row
/// * anything else -> multi row
///
/// Every matching index overwrites the previous result, so the last match in
/// `indexes` wins. Returns `None` when no index matches; no relation is
/// generated for the edge in that case.
///
/// This is a heuristic. The schema alone cannot prove a one-to-one
/// relationship, in particular for the non-unique case.
pub fn classify(edge: &ForeignKeyEdge, indexes: &[IndexDescriptor]) -> Option<Cardinality> {
    if edge.direction().is_incoming() {
        return Some(Cardinality::SingleRow);
    }

    let mut ret = None;

    for index in indexes {
        if !index.covers_exactly(edge.foreign_key_column()) {
            continue;
        }

        let single_row = index.is_primary || index.is_unique || index.position_in_index == 1;

        ret = Some(if single_row {
            Cardinality::SingleRow
        } else {
            Cardinality::MultiRow
        });
    }

    ret
}
