use super::Type;

/// How a column participates in statements.
///
/// The role governs which statement builders project the column: inserts take
/// insertable roles, updates take updatable roles, and selects take
/// everything. At most one column per table carries a key role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Written on insert, never updated.
    InsertOnly,

    /// Updated, never written on insert (the server supplies the initial
    /// value).
    EditOnly,

    /// Written on insert and updatable afterwards.
    InsertEdit,

    /// Updatable, with a server-side default applied on insert.
    EditServerDefault,

    /// Fully server-generated; never written by the application.
    ServerDefault,

    /// Primary key supplied by the application on insert.
    Key,

    /// Primary key generated by the database (identity/autoincrement).
    KeyGenerated,

    /// Read-only column of a view mapping.
    SelectOnly,
}

impl Role {
    pub fn is_key(self) -> bool {
        matches!(self, Self::Key | Self::KeyGenerated)
    }

    pub fn is_insertable(self) -> bool {
        matches!(self, Self::InsertOnly | Self::InsertEdit | Self::Key)
    }

    pub fn is_updatable(self) -> bool {
        matches!(
            self,
            Self::EditOnly | Self::InsertEdit | Self::EditServerDefault
        )
    }

    /// Default nullability for a column of this role, absent an explicit
    /// override.
    pub(crate) fn default_nullable(self) -> bool {
        !matches!(self, Self::InsertOnly | Self::Key | Self::KeyGenerated)
    }
}

/// The frozen mapping of one entity property to one table column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMapping {
    /// The entity property this column maps.
    pub property: String,

    /// The name of the column in the database.
    pub column: String,

    /// Optional projection alias (`SELECT column AS alias`).
    pub alias: Option<String>,

    /// The column's logical type.
    pub ty: Type,

    /// Maximum length for text columns, precision for decimal columns.
    pub length: Option<u32>,

    /// Scale for decimal columns.
    pub scale: Option<u32>,

    /// Whether the column accepts NULL.
    pub nullable: bool,

    /// How the column participates in statements.
    pub role: Role,
}
