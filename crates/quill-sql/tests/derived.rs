use quill_core::predicate::{AliasResolver, Compiler, Field};
use quill_core::schema::{ColumnDef, Entity, TableDef, Type};
use quill_core::stmt::{ExprColumn, Value};
use quill_core::{ParamSet, Registry};
use quill_sql::stmt::{DerivedSelect, OrderBy, Select, Statement};
use quill_sql::Serializer;

use pretty_assertions::assert_eq;

struct Member;

impl Entity for Member {
    fn table() -> TableDef {
        TableDef::new("member")
            .column(ColumnDef::new("member_id", Type::I64).key_generated())
            .column(ColumnDef::new("member_name", Type::Text).length(50))
            .column(ColumnDef::new("category_id", Type::I32))
    }
}

const MEMBER_NAME: Field<String> = Field::new("member_name");

#[test]
fn derived_select_layers_a_typed_filter_over_rendered_sql() {
    let registry = Registry::new();
    let table = registry.resolve::<Member>().unwrap();

    // Render the inner query first; the trailing terminator is stripped
    // when the string is wrapped.
    let inner: Statement = Select::with_columns(&table, &["member_id", "member_name"])
        .unwrap()
        .into();
    let inner_sql = Serializer::mysql().serialize(&inner).unwrap();
    assert!(inner_sql.ends_with(';'));

    // Outer references resolve by the names the inner query projected.
    let resolver = AliasResolver::new("t");
    let mut params = ParamSet::new();
    let filter = Compiler::new(&resolver, &mut params)
        .compile(&MEMBER_NAME.contains("Li"))
        .unwrap();

    let stmt: Statement = DerivedSelect::new(inner_sql, "t")
        .filter(filter)
        .order_by(OrderBy::asc(ExprColumn::qualified("t", "member_name")))
        .into();
    let sql = Serializer::mysql().serialize(&stmt).unwrap();

    assert_eq!(
        "SELECT * FROM (\
         SELECT `member`.`member_id`, `member`.`member_name` FROM `member`\
         ) AS `t` \
         WHERE `t`.`member_name` LIKE @member_name \
         ORDER BY `t`.`member_name` ASC;",
        sql
    );
    assert_eq!(
        Some(&Value::String("%Li%".to_string())),
        params.get("member_name")
    );
}

#[test]
fn oracle_derived_table_takes_no_as_keyword() {
    let registry = Registry::new();
    let table = registry.resolve::<Member>().unwrap();

    let inner: Statement = Select::with_columns(&table, &["member_id"]).unwrap().into();
    let inner_sql = Serializer::oracle().serialize(&inner).unwrap();

    let stmt: Statement = DerivedSelect::new(inner_sql, "t").into();
    let sql = Serializer::oracle().serialize(&stmt).unwrap();

    assert_eq!(
        "SELECT * FROM (SELECT \"member\".\"member_id\" FROM \"member\") \"t\";",
        sql
    );
}

#[test]
fn unqualified_alias_resolution() {
    let resolver = AliasResolver::bare();
    let mut params = ParamSet::new();
    let filter = Compiler::new(&resolver, &mut params)
        .compile(&MEMBER_NAME.equals("Li"))
        .unwrap();

    let stmt: Statement = DerivedSelect::new("SELECT member_name FROM member", "t")
        .filter(filter)
        .into();
    let sql = Serializer::postgres().serialize(&stmt).unwrap();

    assert_eq!(
        "SELECT * FROM (SELECT member_name FROM member) AS \"t\" \
         WHERE \"member_name\" = @member_name;",
        sql
    );
}
