//! Metadata queries. Table and schema names are always bound as `$1` / `$2`.

/// Foreign keys touching `$1` in schema `$2`.
///
/// The first branch lists tables referencing `$1` (outgoing), the second the
/// tables `$1` references (incoming).
pub(crate) const RELATIONS: &str = r#"
WITH fk_constraints AS (
    SELECT
        kcu.table_name::text AS table_name,
        kcu.column_name::text AS column_name,
        ccu.table_name::text AS referenced_table_name,
        ccu.column_name::text AS referenced_column_name
    FROM information_schema.key_column_usage AS kcu
    JOIN information_schema.table_constraints AS tc
        ON tc.constraint_name = kcu.constraint_name
       AND tc.table_schema = kcu.table_schema
       AND tc.constraint_type = 'FOREIGN KEY'
    JOIN information_schema.constraint_column_usage AS ccu
        ON ccu.constraint_name = tc.constraint_name
       AND ccu.table_schema = tc.table_schema
    WHERE kcu.table_schema = $2
)
SELECT
    table_name AS ref_table,
    column_name AS foreign_key,
    referenced_column_name AS local_key,
    TRUE AS outgoing
FROM fk_constraints
WHERE referenced_table_name = $1

UNION

SELECT
    referenced_table_name AS ref_table,
    referenced_column_name AS foreign_key,
    column_name AS local_key,
    FALSE AS outgoing
FROM fk_constraints
WHERE table_name = $1
  AND referenced_table_name IS NOT NULL

ORDER BY ref_table ASC
"#;

/// Indexes of table `$1` in schema `$2`, columns in attribute order.
///
/// `seq_in_index` is the key position of the first listed column.
pub(crate) const INDEXES: &str = r#"
SELECT
    i.relname::text AS key_name,
    ix.indisunique AS is_unique,
    ix.indisprimary AS is_primary,
    array_agg(a.attname::text ORDER BY a.attnum) AS column_names,
    ((array_agg(k.ord ORDER BY a.attnum))[1])::int4 AS seq_in_index
FROM pg_class t
JOIN pg_namespace n ON n.oid = t.relnamespace
JOIN pg_index ix ON t.oid = ix.indrelid
JOIN pg_class i ON i.oid = ix.indexrelid
CROSS JOIN LATERAL unnest(ix.indkey::int2[]) WITH ORDINALITY AS k(attnum, ord)
JOIN pg_attribute a ON a.attrelid = t.oid AND a.attnum = k.attnum
WHERE t.relkind = 'r'
  AND t.relname = $1
  AND n.nspname = $2
GROUP BY i.relname, ix.indisunique, ix.indisprimary
ORDER BY i.relname
"#;
