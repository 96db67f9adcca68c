use relgen_core::{Cardinality, GeneratedRelation};

const RELATIONS_NAMESPACE: &str = r"\Illuminate\Database\Eloquent\Relations";

/// Renders one relation as an Eloquent accessor method and a `@property`
/// docblock line.
///
/// The method starts with a newline and ends with an indented blank line, so
/// fragments can be concatenated straight into a class body.
pub fn emit(relation: &GeneratedRelation, model_namespace: &str) -> (String, String) {
    let method = relation_method(relation.cardinality);
    let class = relation_class(relation.cardinality);

    let method_source = format!(
        r"
    /**
     * @return {RELATIONS_NAMESPACE}\{class}
     */
    public function {accessor}()
    {{
        return $this->{method}('{namespace}\{model}', '{foreign_key}', '{local_key}');
    }}
    ",
        accessor = relation.accessor_name,
        namespace = model_namespace,
        model = relation.class_name,
        foreign_key = relation.foreign_key_column,
        local_key = relation.local_key_column,
    );

    let ty = match relation.cardinality {
        Cardinality::SingleRow => relation.class_name.clone(),
        Cardinality::MultiRow => format!("{}[]", relation.class_name),
    };

    let doc_line = format!(" * @property {ty} ${}", relation.accessor_name);

    (method_source, doc_line)
}

fn relation_method(cardinality: Cardinality) -> &'static str {
    match cardinality {
        Cardinality::SingleRow => "hasOne",
        Cardinality::MultiRow => "hasMany",
    }
}

fn relation_class(cardinality: Cardinality) -> &'static str {
    match cardinality {
        Cardinality::SingleRow => "HasOne",
        Cardinality::MultiRow => "HasMany",
    }
}
