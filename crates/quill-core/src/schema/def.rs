use super::{Role, Type};

/// Declarative mapping for one table, produced by [`Entity::table`].
///
/// A `TableDef` is the mutable builder side of the mapping; the frozen
/// [`TableMetadata`] is built from it exactly once per entity type.
///
/// [`Entity::table`]: super::Entity::table
/// [`TableMetadata`]: super::TableMetadata
#[derive(Debug, Clone)]
pub struct TableDef {
    pub(super) schema: Option<String>,
    pub(super) name: String,
    pub(super) alias: Option<String>,
    pub(super) view: bool,
    pub(super) columns: Vec<ColumnDef>,
}

impl TableDef {
    /// Starts the mapping for a regular table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            alias: None,
            view: false,
            columns: vec![],
        }
    }

    /// Starts the mapping for a view.
    ///
    /// Every column of a view mapping is forced to the select-only role and
    /// no primary key is registered, regardless of per-column configuration.
    pub fn view(name: impl Into<String>) -> Self {
        Self {
            view: true,
            ..Self::new(name)
        }
    }

    /// Sets the schema the table lives in.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Overrides the alias used to qualify column references. Defaults to the
    /// table name.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Adds a column mapping.
    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }
}

/// Declarative mapping for one column.
///
/// Unconfigured aspects default as follows: the column name is the property
/// name, the role is insert-and-edit, and nullability is `false` for
/// insert-only and key roles and `true` otherwise.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub(super) property: String,
    pub(super) ty: Type,
    pub(super) column: Option<String>,
    pub(super) alias: Option<String>,
    pub(super) length: Option<u32>,
    pub(super) scale: Option<u32>,
    pub(super) nullable: Option<bool>,
    pub(super) role: Role,
}

impl ColumnDef {
    pub fn new(property: impl Into<String>, ty: Type) -> Self {
        Self {
            property: property.into(),
            ty,
            column: None,
            alias: None,
            length: None,
            scale: None,
            nullable: None,
            role: Role::InsertEdit,
        }
    }

    /// Overrides the database column name.
    pub fn named(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Sets a projection alias.
    pub fn aliased(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Sets the maximum length (text) or precision (decimal).
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets precision and scale for decimal columns.
    pub fn precision(mut self, precision: u32, scale: u32) -> Self {
        self.length = Some(precision);
        self.scale = Some(scale);
        self
    }

    /// Overrides nullability explicitly.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Marks the column as the application-supplied primary key.
    pub fn key(self) -> Self {
        self.role(Role::Key)
    }

    /// Marks the column as a database-generated primary key.
    pub fn key_generated(self) -> Self {
        self.role(Role::KeyGenerated)
    }

    pub fn insert_only(self) -> Self {
        self.role(Role::InsertOnly)
    }

    pub fn edit_only(self) -> Self {
        self.role(Role::EditOnly)
    }

    pub fn server_default(self) -> Self {
        self.role(Role::ServerDefault)
    }

    pub fn edit_server_default(self) -> Self {
        self.role(Role::EditServerDefault)
    }
}
