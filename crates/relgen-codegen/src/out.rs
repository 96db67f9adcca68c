use relgen_core::GeneratedRelation;

use crate::emit;

/// Generated source for one model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    /// Accessor methods, concatenated in relation order
    pub methods: String,

    /// The existing properties docblock text with one `@property` line
    /// appended per relation
    pub properties: String,
}

/// Renders `relations` in order.
pub fn render(
    relations: &[GeneratedRelation],
    existing_properties: &str,
    model_namespace: &str,
) -> Output {
    let mut out = Output {
        methods: String::new(),
        properties: existing_properties.to_string(),
    };

    for relation in relations {
        let (method, doc_line) = emit(relation, model_namespace);

        out.methods.push_str(&method);
        out.properties.push('\n');
        out.properties.push_str(&doc_line);
    }

    out
}
