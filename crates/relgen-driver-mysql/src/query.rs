//! Metadata queries against `information_schema` of the connection's database.
//! The table name is always bound with `?`.

/// Foreign keys touching the table, outgoing first then incoming.
pub(crate) const RELATIONS: &str = r#"
SELECT
    kcu.TABLE_NAME AS ref_table,
    kcu.COLUMN_NAME AS foreign_key,
    kcu.REFERENCED_COLUMN_NAME AS local_key,
    1 AS outgoing
FROM information_schema.KEY_COLUMN_USAGE AS kcu
WHERE kcu.TABLE_SCHEMA = DATABASE()
  AND kcu.REFERENCED_TABLE_NAME = ?

UNION

SELECT
    kcu.REFERENCED_TABLE_NAME AS ref_table,
    kcu.REFERENCED_COLUMN_NAME AS foreign_key,
    kcu.COLUMN_NAME AS local_key,
    0 AS outgoing
FROM information_schema.KEY_COLUMN_USAGE AS kcu
WHERE kcu.TABLE_SCHEMA = DATABASE()
  AND kcu.TABLE_NAME = ?
  AND kcu.REFERENCED_TABLE_NAME IS NOT NULL

ORDER BY ref_table ASC
"#;

/// Indexes of the table, one row per index, columns in attribute order.
///
/// `seq_in_index` is the key position of the first listed column.
///
/// Column names are joined with NUL, which cannot appear in an identifier.
pub(crate) const INDEXES: &str = r#"
SELECT
    s.INDEX_NAME AS key_name,
    MIN(s.NON_UNIQUE) = 0 AS is_unique,
    s.INDEX_NAME = 'PRIMARY' AS is_primary,
    GROUP_CONCAT(s.COLUMN_NAME ORDER BY c.ORDINAL_POSITION SEPARATOR '\0') AS column_names,
    CAST(
        SUBSTRING_INDEX(
            GROUP_CONCAT(s.SEQ_IN_INDEX ORDER BY c.ORDINAL_POSITION SEPARATOR ','),
            ',',
            1
        ) AS UNSIGNED
    ) AS seq_in_index
FROM information_schema.STATISTICS AS s
JOIN information_schema.COLUMNS AS c
    ON c.TABLE_SCHEMA = s.TABLE_SCHEMA
   AND c.TABLE_NAME = s.TABLE_NAME
   AND c.COLUMN_NAME = s.COLUMN_NAME
WHERE s.TABLE_SCHEMA = DATABASE()
  AND s.TABLE_NAME = ?
GROUP BY s.INDEX_NAME
ORDER BY s.INDEX_NAME
"#;
