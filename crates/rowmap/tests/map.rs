// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! Behavior of derived entity maps: columns, parameters, materialization.

use rowmap::{Entity, EntityMap, Row, SqlEnum, SqlValue, registry};

#[derive(Entity, Debug, Clone, PartialEq)]
#[entity(table = "TestEntities", key = "Id")]
struct TestEntity {
    #[column(rename = "Id")]
    id: i64,
    #[column(rename = "Name")]
    name: String,
    #[column(rename = "Score")]
    score: f64
}

#[derive(Entity, Debug, Clone, PartialEq)]
#[entity(table = "Notes")]
struct Note {
    #[column(rename = "Id")]
    id: i64,
    #[column(rename = "Body")]
    body: Option<String>
}

#[derive(SqlEnum, Debug, Clone, Copy, PartialEq)]
enum Status {
    Draft,
    Published,
    Archived
}

#[derive(Entity, Debug, Clone, PartialEq)]
#[entity(table = "Posts")]
struct Post {
    #[column(rename = "Id")]
    id: i64,
    #[column(rename = "Status")]
    status: Status
}

#[derive(Entity, Default, Debug, Clone, PartialEq)]
#[entity(table = "Drafts", key = "id", default)]
struct Draft {
    id: i64,
    title: String,
    #[column(skip)]
    dirty: bool
}

fn row_of(parameters: Vec<rowmap::SqlParameterValue>) -> Row {
    parameters
        .into_iter()
        .map(|p| (p.name, p.value))
        .collect()
}

fn sample() -> TestEntity {
    TestEntity {
        id: 7,
        name: "native".to_string(),
        score: 1.5
    }
}

#[test]
fn map_exposes_table_key_and_columns() {
    let map = TestEntity::entity_map();
    assert_eq!(map.table_name(), "TestEntities");
    assert_eq!(map.key_column(), "Id");
    assert_eq!(map.writable_columns(), ["Id", "Name", "Score"]);
}

#[test]
fn key_reads_the_key_field() {
    let map = TestEntity::entity_map();
    assert_eq!(map.key(&sample()), SqlValue::Int(7));
}

#[test]
fn insert_parameters_cover_every_column_in_order() {
    let map = TestEntity::entity_map();
    let params = map.insert_parameters(&sample());
    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Id", "Name", "Score"]);
    assert_eq!(params[0].value, SqlValue::Int(7));
    assert_eq!(params[1].value, SqlValue::Text("native".to_string()));
    assert_eq!(params[2].value, SqlValue::Float(1.5));
}

#[test]
fn update_parameters_include_the_key() {
    let map = TestEntity::entity_map();
    let params = map.update_parameters(&sample());
    assert_eq!(params.len(), 3);
    assert!(params.iter().any(|p| p.name == "Id"));
}

#[test]
fn materialize_round_trips_insert_parameters() {
    let map = TestEntity::entity_map();
    let entity = sample();
    let row = row_of(map.insert_parameters(&entity));
    assert_eq!(map.materialize(&row).unwrap(), entity);
}

#[test]
fn materialize_lookup_is_case_insensitive() {
    let map = TestEntity::entity_map();
    let row = Row::new()
        .with("id", 1i64)
        .with("NAME", "x")
        .with("score", 0.5f64);
    assert_eq!(
        map.materialize(&row).unwrap(),
        TestEntity {
            id: 1,
            name: "x".to_string(),
            score: 0.5
        }
    );
}

#[test]
fn null_string_materializes_to_default() {
    let map = TestEntity::entity_map();
    let row = Row::new()
        .with("Id", 2i64)
        .with("Name", SqlValue::Null)
        .with("Score", SqlValue::Null);
    let entity = map.materialize(&row).unwrap();
    assert_eq!(entity.name, "");
    assert_eq!(entity.score, 0.0);
}

#[test]
fn optional_field_round_trips_null() {
    let map = Note::entity_map();
    let note = Note { id: 1, body: None };
    let row = row_of(map.insert_parameters(&note));
    assert!(row.is_null("Body"));
    assert_eq!(map.materialize(&row).unwrap(), note);

    let note = Note {
        id: 2,
        body: Some("hello".to_string())
    };
    let row = row_of(map.insert_parameters(&note));
    assert_eq!(map.materialize(&row).unwrap(), note);
}

#[test]
fn enum_round_trips_through_numeric_storage() {
    let map = Post::entity_map();
    let post = Post {
        id: 1,
        status: Status::Archived
    };
    let params = map.insert_parameters(&post);
    assert_eq!(params[1].value, SqlValue::Int(2));

    let row = row_of(params);
    assert_eq!(map.materialize(&row).unwrap(), post);
}

#[test]
fn enum_rejects_unknown_discriminant() {
    use rowmap::FromSqlValue;
    let err = Status::from_sql_value(&SqlValue::Int(99)).unwrap_err();
    assert_eq!(err.target, "Status");
}

#[test]
fn enum_coerces_from_text_storage() {
    use rowmap::FromSqlValue;
    let status = Status::from_sql_value(&SqlValue::Text("1".to_string())).unwrap();
    assert_eq!(status, Status::Published);
}

#[test]
fn default_assign_strategy_skips_unmapped_fields() {
    let map = Draft::entity_map();
    let draft = Draft {
        id: 5,
        title: "wip".to_string(),
        dirty: true
    };

    let params = map.insert_parameters(&draft);
    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["id", "title"]);
    assert_eq!(map.writable_columns(), ["id", "title"]);

    let row = row_of(params);
    let rebuilt = map.materialize(&row).unwrap();
    assert_eq!(rebuilt.id, 5);
    assert_eq!(rebuilt.title, "wip");
    assert!(!rebuilt.dirty);
}

#[test]
fn materialize_missing_column_is_reported() {
    let map = TestEntity::entity_map();
    let row = Row::new().with("Id", 1i64);
    let err = map.materialize(&row).unwrap_err();
    assert!(matches!(err, rowmap::Error::MissingColumn { column } if column == "Name"));
}

#[test]
fn entity_map_is_published_once() {
    assert!(std::ptr::eq(
        TestEntity::entity_map(),
        TestEntity::entity_map()
    ));
}

#[test]
fn registry_roundtrip_and_missing_lookup() {
    registry::register::<TestEntity>();
    registry::register::<TestEntity>();
    let map = registry::lookup::<TestEntity>().unwrap();
    assert_eq!(map.table_name(), "TestEntities");

    struct NeverRegistered;
    let err = registry::lookup::<NeverRegistered>().unwrap_err();
    assert!(matches!(err, rowmap::Error::NoMappingFound { type_name }
        if type_name.contains("NeverRegistered")));
}
