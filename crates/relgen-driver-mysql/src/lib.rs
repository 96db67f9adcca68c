mod query;

use mysql_async::{prelude::Queryable, Conn, Pool};
use relgen_core::{
    async_trait, Direction, Error, ForeignKeyEdge, IndexDescriptor, Result, SchemaReader,
};
use url::Url;

type RelationRow = (String, String, String, i64);

type IndexRow = (String, i64, i64, String, u64);

#[derive(Debug)]
pub struct MySQL {
    pool: Pool,
}

impl MySQL {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "mysql" {
            return Err(Error::invalid_connection_url(format!(
                "connection url does not have a `mysql` scheme; url={}",
                url
            )));
        }

        url.host_str().ok_or_else(|| {
            Error::invalid_connection_url(format!("missing host in connection URL; url={}", url))
        })?;

        if url.path().trim_start_matches('/').is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={}",
                url
            )));
        }

        let opts = mysql_async::Opts::from_url(url.as_ref())
            .map_err(|err| Error::invalid_connection_url(err.to_string()))?;

        Ok(Self {
            pool: Pool::new(opts),
        })
    }

    async fn conn(&self) -> Result<Conn> {
        self.pool.get_conn().await.map_err(Error::driver)
    }
}

impl From<Pool> for MySQL {
    fn from(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemaReader for MySQL {
    async fn fetch_relations(&self, table: &str) -> Result<Vec<ForeignKeyEdge>> {
        log::trace!("metadata query; table={}", table);

        let mut conn = self.conn().await?;
        let rows: Vec<RelationRow> = conn
            .exec(query::RELATIONS, (table, table))
            .await
            .map_err(Error::driver)?;

        rows.into_iter()
            .map(|row| edge_from_row(table, row))
            .collect()
    }

    async fn fetch_indexes(&self, table: &str) -> Result<Vec<IndexDescriptor>> {
        log::trace!("metadata query; table={}", table);

        let mut conn = self.conn().await?;
        let rows: Vec<IndexRow> = conn
            .exec(query::INDEXES, (table,))
            .await
            .map_err(Error::driver)?;

        rows.into_iter().map(index_from_row).collect()
    }
}

/// The `outgoing` column is 1 for the branch where another table references
/// `table`, and 0 where `table` holds the foreign key.
fn edge_from_row(table: &str, row: RelationRow) -> Result<ForeignKeyEdge> {
    let (ref_table, foreign_key, local_key, outgoing) = row;

    let direction = if outgoing == 1 {
        Direction::Outgoing
    } else {
        Direction::Incoming
    };

    ForeignKeyEdge::new(table, ref_table, foreign_key, local_key, direction)
}

fn index_from_row(row: IndexRow) -> Result<IndexDescriptor> {
    let (index_name, is_unique, is_primary, column_names, position) = row;

    let position_in_index = u32::try_from(position).map_err(|_| {
        Error::invalid_result(format!(
            "index position out of range; index={index_name} position={position}"
        ))
    })?;

    Ok(IndexDescriptor {
        is_unique: is_unique != 0,
        is_primary: is_primary != 0,
        ordered_column_list: column_names.split('\0').map(str::to_string).collect(),
        position_in_index,
        index_name,
    })
}
