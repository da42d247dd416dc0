use quill_core::schema::{ColumnDef, Entity, Role, TableDef, Type};
use quill_core::Registry;

use std::sync::Arc;

struct Member;

impl Entity for Member {
    fn table() -> TableDef {
        TableDef::new("member")
            .column(ColumnDef::new("member_id", Type::I64).key_generated())
            .column(ColumnDef::new("member_name", Type::Text).length(50))
            .column(ColumnDef::new("category_id", Type::I32))
    }
}

struct Audit;

impl Entity for Audit {
    fn table() -> TableDef {
        TableDef::new("audit")
            .schema("app")
            .alias("a")
            .column(ColumnDef::new("audit_id", Type::I64).key())
            .column(ColumnDef::new("payload", Type::Text).named("payload_json"))
            .column(
                ColumnDef::new("created_at", Type::DateTime)
                    .edit_server_default()
                    .aliased("created"),
            )
            .column(ColumnDef::new("amount", Type::Decimal).precision(10, 4))
            .column(ColumnDef::new("note", Type::Text).insert_only().nullable(true))
    }
}

struct MemberSummary;

impl Entity for MemberSummary {
    fn table() -> TableDef {
        TableDef::view("member_summary")
            .column(ColumnDef::new("member_id", Type::I64).key())
            .column(ColumnDef::new("member_count", Type::I32))
    }
}

struct TwoKeys;

impl Entity for TwoKeys {
    fn table() -> TableDef {
        TableDef::new("two_keys")
            .column(ColumnDef::new("a", Type::I64).key())
            .column(ColumnDef::new("b", Type::I64).key_generated())
    }
}

#[test]
fn defaults_follow_roles() {
    let registry = Registry::new();
    let table = registry.resolve::<Member>().unwrap();

    assert_eq!("Member", table.entity());
    assert_eq!("member", table.name());
    assert_eq!("member", table.alias());
    assert_eq!(None, table.schema());

    let member_id = table.column("member_id").unwrap();
    assert_eq!(Role::KeyGenerated, member_id.role);
    assert!(!member_id.nullable);

    let member_name = table.column("member_name").unwrap();
    assert_eq!(Role::InsertEdit, member_name.role);
    assert!(member_name.nullable);
    assert_eq!(Some(50), member_name.length);
    assert_eq!("member_name", member_name.column);

    assert_eq!("member_id", table.key().unwrap().property);
}

#[test]
fn explicit_overrides_win() {
    let registry = Registry::new();
    let table = registry.resolve::<Audit>().unwrap();

    assert_eq!(Some("app"), table.schema());
    assert_eq!("a", table.alias());

    let payload = table.column("payload").unwrap();
    assert_eq!("payload_json", payload.column);

    let created_at = table.column("created_at").unwrap();
    assert_eq!(Role::EditServerDefault, created_at.role);
    assert_eq!(Some("created"), created_at.alias.as_deref());
    assert!(created_at.nullable);

    let amount = table.column("amount").unwrap();
    assert_eq!(Some(10), amount.length);
    assert_eq!(Some(4), amount.scale);

    // insert-only defaults to NOT NULL, but an explicit override wins
    let note = table.column("note").unwrap();
    assert_eq!(Role::InsertOnly, note.role);
    assert!(note.nullable);
}

#[test]
fn role_projections() {
    let registry = Registry::new();
    let table = registry.resolve::<Member>().unwrap();

    let insert: Vec<_> = table.insert_columns().map(|c| c.property.as_str()).collect();
    assert_eq!(vec!["member_name", "category_id"], insert);

    let update: Vec<_> = table.update_columns().map(|c| c.property.as_str()).collect();
    assert_eq!(vec!["member_name", "category_id"], update);

    assert_eq!(3, table.select_columns().count());
}

#[test]
fn unknown_property_is_a_mapping_error() {
    let registry = Registry::new();
    let table = registry.resolve::<Member>().unwrap();

    let err = table.column("nickname").unwrap_err();
    assert!(err.is_mapping());
    let message = err.to_string();
    assert!(message.contains("nickname"), "{message}");
    assert!(message.contains("Member"), "{message}");
}

#[test]
fn view_mapping_is_select_only_and_keyless() {
    let registry = Registry::new();
    let table = registry.resolve::<MemberSummary>().unwrap();

    assert!(table.columns().all(|c| c.role == Role::SelectOnly));
    assert!(table.key().is_none());
    assert_eq!(0, table.insert_columns().count());
    assert_eq!(0, table.update_columns().count());
}

#[test]
fn second_key_is_rejected() {
    let registry = Registry::new();
    let err = registry.resolve::<TwoKeys>().unwrap_err();
    assert!(err.is_mapping());
}

#[test]
fn unresolved_entity_lookup_fails() {
    let registry = Registry::new();
    let err = registry.get::<Member>().unwrap_err();
    assert!(err.is_unmapped_entity());

    registry.resolve::<Member>().unwrap();
    assert!(registry.get::<Member>().is_ok());
}

#[test]
fn resolution_is_cached() {
    let registry = Registry::new();
    let first = registry.resolve::<Member>().unwrap();
    let second = registry.resolve::<Member>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn concurrent_first_resolution_builds_once() {
    let registry = Registry::new();

    let resolved: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| registry.resolve::<Member>().unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = &resolved[0];
    assert!(resolved.iter().all(|table| Arc::ptr_eq(first, table)));
}
