//! Schema readers selected by connection URL.

use relgen_core::{async_trait, Error, ForeignKeyEdge, IndexDescriptor, Result, SchemaReader};

use url::Url;

/// A database connection wrapping one of the built-in schema readers.
///
/// Readers are compiled in with the `postgresql` and `mysql` features.
#[derive(Debug)]
pub enum Connection {
    #[cfg(feature = "mysql")]
    MySQL(relgen_driver_mysql::MySQL),

    #[cfg(feature = "postgresql")]
    PostgreSQL(relgen_driver_postgresql::PostgreSQL),
}

impl Connection {
    /// Connects using the reader matching the URL scheme.
    pub async fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        match url.scheme() {
            "mysql" => Self::connect_mysql(&url),
            "postgresql" => Self::connect_postgresql(&url).await,
            scheme => Err(Error::invalid_connection_url(format!(
                "unsupported database; scheme={scheme}; url={url}"
            ))),
        }
    }

    #[cfg(feature = "mysql")]
    fn connect_mysql(url: &Url) -> Result<Self> {
        let reader = relgen_driver_mysql::MySQL::new(url.as_str())?;
        Ok(Connection::MySQL(reader))
    }

    #[cfg(not(feature = "mysql"))]
    fn connect_mysql(_url: &Url) -> Result<Self> {
        Err(relgen_core::err!("`mysql` feature not enabled"))
    }

    #[cfg(feature = "postgresql")]
    async fn connect_postgresql(url: &Url) -> Result<Self> {
        let reader = relgen_driver_postgresql::PostgreSQL::connect(url.as_str()).await?;
        Ok(Connection::PostgreSQL(reader))
    }

    #[cfg(not(feature = "postgresql"))]
    async fn connect_postgresql(_url: &Url) -> Result<Self> {
        Err(relgen_core::err!("`postgresql` feature not enabled"))
    }
}

macro_rules! match_db {
    ($self:expr, $reader:pat => $e:expr) => {
        match *$self {
            #[cfg(feature = "mysql")]
            Connection::MySQL($reader) => $e,

            #[cfg(feature = "postgresql")]
            Connection::PostgreSQL($reader) => $e,
        }
    };
}

#[async_trait]
impl SchemaReader for Connection {
    async fn fetch_relations(&self, table: &str) -> Result<Vec<ForeignKeyEdge>> {
        #[allow(unused_variables)]
        let table = table;
        match_db!(self, ref reader => reader.fetch_relations(table).await)
    }

    async fn fetch_indexes(&self, table: &str) -> Result<Vec<IndexDescriptor>> {
        #[allow(unused_variables)]
        let table = table;
        match_db!(self, ref reader => reader.fetch_indexes(table).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unsupported_scheme() {
        let err = Connection::connect("sqlite::memory:").await.unwrap_err();
        assert!(err.is_invalid_connection_url());
        assert!(err.to_string().contains("scheme=sqlite"));
    }

    #[tokio::test]
    async fn malformed_url() {
        let err = Connection::connect("not a url").await.unwrap_err();
        assert!(err.is_invalid_connection_url());
    }
}
