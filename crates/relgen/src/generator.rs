use crate::Config;

use relgen_codegen::{self as codegen, Output};
use relgen_core::{relation::classify, GeneratedRelation, Result, SchemaReader};

/// Relation accessors and property docs generated for one table.
///
/// All work happens in the constructor; afterwards the generator is a
/// read-only view of its results.
#[derive(Debug)]
pub struct Generator {
    table: String,
    relations: Vec<GeneratedRelation>,
    output: Output,
}

impl Generator {
    /// Generates relations for `table`, appending `@property` lines to
    /// `properties` and qualifying model classes with `model_namespace`.
    pub async fn new<R>(
        reader: &R,
        table: &str,
        properties: &str,
        model_namespace: &str,
    ) -> Result<Generator>
    where
        R: SchemaReader + ?Sized,
    {
        let config = Config::new().model_namespace(model_namespace);
        Self::with_config(reader, table, properties, &config).await
    }

    pub async fn with_config<R>(
        reader: &R,
        table: &str,
        properties: &str,
        config: &Config,
    ) -> Result<Generator>
    where
        R: SchemaReader + ?Sized,
    {
        let mut relations = vec![];

        for edge in reader.fetch_relations(table).await? {
            let cardinality = if edge.direction().is_outgoing() {
                let indexes = reader.fetch_indexes(edge.referenced_table()).await?;
                classify(&edge, &indexes)
            } else {
                classify(&edge, &[])
            };

            let Some(cardinality) = cardinality else {
                log::debug!(
                    "no index covers foreign key, skipping; table={} referenced_table={} foreign_key={}",
                    table,
                    edge.referenced_table(),
                    edge.foreign_key_column()
                );
                continue;
            };

            log::debug!(
                "classified relation; table={} referenced_table={} direction={:?} cardinality={:?}",
                table,
                edge.referenced_table(),
                edge.direction(),
                cardinality
            );

            let names = codegen::resolve(edge.referenced_table(), cardinality);

            log::trace!(
                "resolved names; accessor={} class={}",
                names.accessor_name,
                names.class_name
            );

            relations.push(GeneratedRelation {
                cardinality,
                referenced_table: edge.referenced_table().to_string(),
                foreign_key_column: edge.foreign_key_column().to_string(),
                local_key_column: edge.referenced_column().to_string(),
                class_name: names.class_name,
                accessor_name: names.accessor_name,
            });
        }

        let output = codegen::render(&relations, properties, &config.model_namespace);

        Ok(Generator {
            table: table.to_string(),
            relations,
            output,
        })
    }

    /// Returns the accessor method source and the extended properties doc.
    pub fn get_relations(&self) -> (&str, &str) {
        (&self.output.methods, &self.output.properties)
    }

    /// The table relations were generated for.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Generated relations, in emission order.
    pub fn relations(&self) -> &[GeneratedRelation] {
        &self.relations
    }}
