use quill_core::param::Params;
use quill_core::predicate::{Compiler, Field, TableResolver};
use quill_core::schema::{ColumnDef, Entity, TableDef, Type};
use quill_core::stmt::Value;
use quill_core::{ParamSet, Registry};
use quill_sql::stmt::{Delete, Insert, Statement, Update};
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

struct AliasedMember;

impl Entity for AliasedMember {
    fn table() -> TableDef {
        TableDef::new("member")
            .alias("m")
            .column(ColumnDef::new("member_id", Type::I64).key())
            .column(ColumnDef::new("member_name", Type::Text))
    }
}

struct MemberSummary;

impl Entity for MemberSummary {
    fn table() -> TableDef {
        TableDef::view("member_summary")
            .column(ColumnDef::new("member_id", Type::I64))
            .column(ColumnDef::new("member_count", Type::I32))
    }
}

const MEMBER_ID: Field<i64> = Field::new("member_id");
const MEMBER_NAME: Field<String> = Field::new("member_name");
const CATEGORY_ID: Field<i32> = Field::new("category_id");

#[test]
fn insert_skips_generated_keys() {
    let registry = Registry::new();
    let table = registry.resolve::<Member>().unwrap();

    let mut params = ParamSet::new();
    let stmt: Statement = Insert::from_metadata(
        &table,
        &[
            ("member_id", 1.into()),
            ("member_name", "Li".into()),
            ("category_id", 3.into()),
        ],
        &mut params,
    )
    .unwrap()
    .into();
    let sql = Serializer::sql_server().serialize(&stmt).unwrap();

    assert_eq!(
        "INSERT INTO [member] ([member_name], [category_id]) VALUES (@member_name, @category_id);",
        sql
    );
    assert_eq!(2, params.len());
    assert_eq!(Some(&Value::String("Li".to_string())), params.get("member_name"));
}

#[test]
fn update_binds_assignments_and_filter_through_one_sink() {
    let registry = Registry::new();
    let table = registry.resolve::<Member>().unwrap();

    let mut params = ParamSet::new();
    let update = Update::from_metadata(&table, &[("member_name", "Li".into())], &mut params).unwrap();

    let resolver = TableResolver::new(&table);
    let filter = Compiler::new(&resolver, &mut params)
        .compile(&MEMBER_ID.eq(7))
        .unwrap();

    let stmt: Statement = update.filter(filter).into();
    let sql = Serializer::mysql().serialize(&stmt).unwrap();

    assert_eq!(
        "UPDATE `member` SET `member_name` = @member_name \
         WHERE `member`.`member_id` = @member_id;",
        sql
    );
    assert_eq!(
        vec!["member_name", "member_id"],
        params.iter().map(|p| p.name.as_str()).collect::<Vec<_>>()
    );
}

#[test]
fn update_shares_the_dedup_counter_with_its_filter() {
    let registry = Registry::new();
    let table = registry.resolve::<Member>().unwrap();

    let mut params = ParamSet::new();
    let update = Update::from_metadata(&table, &[("member_name", "Li".into())], &mut params).unwrap();

    let resolver = TableResolver::new(&table);
    let filter = Compiler::new(&resolver, &mut params)
        .compile(&MEMBER_NAME.equals("Wu"))
        .unwrap();

    let stmt: Statement = update.filter(filter).into();
    let sql = Serializer::sql_server().serialize(&stmt).unwrap();

    assert_eq!(
        "UPDATE [member] SET [member_name] = @member_name \
         WHERE [member].[member_name] = @member_name1;",
        sql
    );
    assert_eq!(Some(&Value::String("Li".to_string())), params.get("member_name"));
    assert_eq!(Some(&Value::String("Wu".to_string())), params.get("member_name1"));
}

#[test]
fn aliased_update_redeclares_the_target_per_dialect() {
    let registry = Registry::new();
    let table = registry.resolve::<AliasedMember>().unwrap();

    let mut params = ParamSet::new();
    let update = Update::from_metadata(&table, &[("member_name", "Li".into())], &mut params).unwrap();

    let resolver = TableResolver::new(&table);
    let filter = Compiler::new(&resolver, &mut params)
        .compile(&MEMBER_ID.eq(7))
        .unwrap();
    let stmt: Statement = update.filter(filter).into();

    // SQL Server re-declares the alias through a trailing FROM clause.
    assert_eq!(
        "UPDATE [m] SET [member_name] = @member_name \
         FROM [member] AS [m] \
         WHERE [m].[member_id] = @member_id;",
        Serializer::sql_server().serialize(&stmt).unwrap()
    );

    // Postgres declares it on the UPDATE target.
    assert_eq!(
        "UPDATE \"member\" AS \"m\" SET \"member_name\" = @member_name \
         WHERE \"m\".\"member_id\" = @member_id;",
        Serializer::postgres().serialize(&stmt).unwrap()
    );
}

#[test]
fn delete_with_filter() {
    let registry = Registry::new();
    let table = registry.resolve::<Member>().unwrap();

    let mut params = ParamSet::new();
    let resolver = TableResolver::new(&table);
    let filter = Compiler::new(&resolver, &mut params)
        .compile(&CATEGORY_ID.eq(3))
        .unwrap();

    let stmt: Statement = Delete::from_metadata(&table).filter(filter).into();

    assert_eq!(
        "DELETE FROM [member] WHERE [member].[category_id] = @category_id;",
        Serializer::sql_server().serialize(&stmt).unwrap()
    );
    assert_eq!(
        "DELETE FROM \"member\" WHERE \"member\".\"category_id\" = @category_id;",
        Serializer::postgres().serialize(&stmt).unwrap()
    );
}

#[test]
fn aliased_delete_names_the_alias_where_required() {
    let registry = Registry::new();
    let table = registry.resolve::<AliasedMember>().unwrap();

    let mut params = ParamSet::new();
    let resolver = TableResolver::new(&table);
    let filter = Compiler::new(&resolver, &mut params)
        .compile(&MEMBER_ID.eq(7))
        .unwrap();
    let stmt: Statement = Delete::from_metadata(&table).filter(filter).into();

    assert_eq!(
        "DELETE `m` FROM `member` AS `m` WHERE `m`.`member_id` = @member_id;",
        Serializer::mysql().serialize(&stmt).unwrap()
    );
    assert_eq!(
        "DELETE FROM \"member\" \"m\" WHERE \"m\".\"member_id\" = :member_id;",
        Serializer::oracle().serialize(&stmt).unwrap()
    );
}

#[test]
fn writes_against_a_view_are_rejected() {
    let registry = Registry::new();
    let table = registry.resolve::<MemberSummary>().unwrap();
    let mut params = ParamSet::new();

    let err = Insert::from_metadata(&table, &[("member_id", 1.into())], &mut params).unwrap_err();
    assert!(err.is_invalid_statement());

    let err = Update::from_metadata(&table, &[("member_id", 1.into())], &mut params).unwrap_err();
    assert!(err.is_invalid_statement());
}

#[test]
fn unknown_property_fails_the_whole_statement() {
    let registry = Registry::new();
    let table = registry.resolve::<Member>().unwrap();
    let mut params = ParamSet::new();

    let err = Insert::from_metadata(&table, &[("nickname", "x".into())], &mut params).unwrap_err();
    assert!(err.is_mapping());
}

#[test]
fn parameter_sink_is_pluggable() {
    // A sink that records nothing but still names parameters.
    struct CountingSink(usize);

    impl Params for CountingSink {
        fn bind(&mut self, base: &str, _value: Value) -> String {
            let name = format!("{base}_{}", self.0);
            self.0 += 1;
            name
        }
    }

    let registry = Registry::new();
    let table = registry.resolve::<Member>().unwrap();

    let mut sink = CountingSink(0);
    let insert = Insert::from_metadata(&table, &[("category_id", 3.into())], &mut sink).unwrap();
    let sql = Serializer::mysql().serialize(&insert.into()).unwrap();

    assert_eq!(
        "INSERT INTO `member` (`category_id`) VALUES (@category_id_0);",
        sql
    );
}
