use quill_core::schema::TableMetadata;

/// A table target, resolved from metadata at build time.
///
/// The alias is carried only when it differs from the table name; a
/// same-named alias would be redundant, since the bare table name already
/// qualifies column references.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
    pub schema: Option<String>,
    pub name: String,
    pub alias: Option<String>,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            alias: None,
        }
    }

    pub fn from_metadata(table: &TableMetadata) -> Self {
        Self {
            schema: table.schema().map(str::to_string),
            name: table.name().to_string(),
            alias: (table.alias() != table.name()).then(|| table.alias().to_string()),
        }
    }
}
