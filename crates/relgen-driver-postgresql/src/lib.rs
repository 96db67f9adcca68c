mod query;

use relgen_core::{
    async_trait, Direction, Error, ForeignKeyEdge, IndexDescriptor, Result, SchemaReader,
};
use tokio_postgres::{
    tls::MakeTlsConnect,
    types::FromSql,
    Client, Config, Row, Socket,
};
use url::Url;

#[derive(Debug)]
pub struct PostgreSQL {
    /// The PostgreSQL client.
    client: Client,

    /// Schema whose tables are inspected
    schema: String,
}

impl PostgreSQL {
    /// Initialize a schema reader using an initialized connection.
    pub fn new(connection: Client) -> Self {
        Self {
            client: connection,
            schema: "public".to_string(),
        }
    }

    /// Inspect tables of `schema` instead of `public`.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Connects to a PostgreSQL database using a connection string.
    pub async fn connect(url: &str) -> Result<Self> {
        let config = parse_url(url)?;
        Self::connect_with_config(config, tokio_postgres::NoTls).await
    }

    /// Connects to a PostgreSQL database using a [`tokio_postgres::Config`].
    pub async fn connect_with_config<T>(config: Config, tls: T) -> Result<Self>
    where
        T: MakeTlsConnect<Socket> + 'static,
        T::Stream: Send,
    {
        let (client, connection) = config.connect(tls).await.map_err(Error::driver)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("connection error: {e}");
            }
        });

        Ok(Self::new(client))
    }

    async fn query(&self, sql: &str, table: &str) -> Result<Vec<Row>> {
        log::trace!("metadata query; table={} schema={}", table, self.schema);

        self.client
            .query(sql, &[&table, &self.schema])
            .await
            .map_err(Error::driver)
    }
}

impl From<Client> for PostgreSQL {
    fn from(client: Client) -> Self {
        Self::new(client)
    }
}

#[async_trait]
impl SchemaReader for PostgreSQL {
    async fn fetch_relations(&self, table: &str) -> Result<Vec<ForeignKeyEdge>> {
        let rows = self.query(query::RELATIONS, table).await?;

        rows.iter()
            .map(|row| -> Result<ForeignKeyEdge> {
                let direction = if get::<bool>(row, "outgoing")? {
                    Direction::Outgoing
                } else {
                    Direction::Incoming
                };

                ForeignKeyEdge::new(
                    table,
                    get::<String>(row, "ref_table")?,
                    get::<String>(row, "foreign_key")?,
                    get::<String>(row, "local_key")?,
                    direction,
                )
            })
            .collect()
    }

    async fn fetch_indexes(&self, table: &str) -> Result<Vec<IndexDescriptor>> {
        let rows = self.query(query::INDEXES, table).await?;

        rows.iter()
            .map(|row| -> Result<IndexDescriptor> {
                let position = get::<i32>(row, "seq_in_index")?;

                Ok(IndexDescriptor {
                    index_name: get(row, "key_name")?,
                    is_unique: get(row, "is_unique")?,
                    is_primary: get(row, "is_primary")?,
                    ordered_column_list: get(row, "column_names")?,
                    position_in_index: u32::try_from(position).map_err(|_| {
                        Error::invalid_result(format!(
                            "negative index position; index position={position}"
                        ))
                    })?,
                })
            })
            .collect()
    }
}

fn get<'a, T: FromSql<'a>>(row: &'a Row, column: &str) -> Result<T> {
    row.try_get(column)
        .map_err(|err| Error::invalid_result(format!("column `{column}`: {err}")))
}

fn parse_url(url: &str) -> Result<Config> {
    let url = Url::parse(url).map_err(|err| Error::invalid_connection_url(err.to_string()))?;

    if url.scheme() != "postgresql" {
        return Err(Error::invalid_connection_url(format!(
            "connection URL does not have a `postgresql` scheme; url={}",
            url
        )));
    }

    let host = url.host_str().ok_or_else(|| {
        Error::invalid_connection_url(format!("missing host in connection URL; url={}", url))
    })?;

    let dbname = url.path().trim_start_matches('/');

    if dbname.is_empty() {
        return Err(Error::invalid_connection_url(format!(
            "no database specified - missing path in connection URL; url={}",
            url
        )));
    }

    let mut config = Config::new();
    config.host(host);
    config.dbname(dbname);

    if let Some(port) = url.port() {
        config.port(port);
    }

    if !url.username().is_empty() {
        config.user(url.username());
    }

    if let Some(password) = url.password() {
        config.password(password);
    }

    Ok(config)
}
