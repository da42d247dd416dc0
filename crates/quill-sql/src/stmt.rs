mod delete;
pub use delete::Delete;

mod derived_select;
pub use derived_select::DerivedSelect;

mod filter;
pub use filter::Filter;

mod group_by;
pub use group_by::GroupBy;

mod insert;
pub use insert::Insert;

mod order_by;
pub use order_by::{Direction, OrderBy, OrderByExpr};

mod paged_select;
pub use paged_select::PagedSelect;

mod select;
pub use select::{Select, SelectColumn};

mod table_ref;
pub use table_ref::TableRef;

mod top_select;
pub use top_select::TopSelect;

mod update;
pub use update::{Assignment, Assignments, Update};

pub use quill_core::stmt::*;

/// One renderable SQL statement.
#[derive(Debug, Clone)]
pub enum Statement {
    Select(Select),
    Paged(PagedSelect),
    Top(TopSelect),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    Derived(DerivedSelect),
}

impl Statement {
    pub fn is_select(&self) -> bool {
        matches!(self, Statement::Select(_))
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Statement::Update(_))
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}

impl From<PagedSelect> for Statement {
    fn from(value: PagedSelect) -> Self {
        Self::Paged(value)
    }
}

impl From<TopSelect> for Statement {
    fn from(value: TopSelect) -> Self {
        Self::Top(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}

impl From<DerivedSelect> for Statement {
    fn from(value: DerivedSelect) -> Self {
        Self::Derived(value)
    }
}
