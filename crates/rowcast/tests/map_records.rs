use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rowcast::{map_rows, row, FromRow, Row, Value};

// Bindings resolve from the first row observed for a type and are cached by
// type, so every User row in this binary uses this 4-column layout.
#[derive(Debug, Default, PartialEq, FromRow)]
struct User {
    user_id: i64,
    user_name: String,
    signed_up: Option<NaiveDate>,
    active: bool,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn column_names_match_ignoring_case_and_underscores() {
    let rows = vec![row![
        "USER_ID" => 11_i64,
        "UserName" => "vesna",
        "SIGNED_UP" => date(1977, 5, 19),
        "active" => true,
    ]];

    let users: Vec<_> = map_rows::<User, _>(rows)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        users,
        vec![User {
            user_id: 11,
            user_name: "vesna".into(),
            signed_up: Some(date(1977, 5, 19)),
            active: true,
        }]
    );
}

// Mapped with an odd layout, so it gets a type of its own: a stray column
// cached for a shared type would shift the bindings for every other test.
#[derive(Debug, Default, PartialEq, FromRow)]
struct Customer {
    customer_id: i64,
    customer_name: String,
    active: bool,
}

#[test]
fn unmatched_columns_are_dropped() {
    // "shoe_size" matches no field and "active" is absent; both fall
    // through silently, the latter keeping its default.
    let rows = vec![row![
        "customer_id" => 1_i64,
        "shoe_size" => 44_i64,
        "customer_name" => "ivan",
    ]];

    let customer = map_rows::<Customer, _>(rows)
        .unwrap()
        .next()
        .unwrap()
        .unwrap();

    assert_eq!(customer.customer_id, 1);
    assert_eq!(customer.customer_name, "ivan");
    assert!(!customer.active);
}

#[test]
fn null_handling_depends_on_nullability() {
    let rows = vec![row![
        "user_id" => 2_i64,
        "user_name" => Value::Null,
        "signed_up" => Value::Null,
        "active" => true,
    ]];

    let user = map_rows::<User, _>(rows).unwrap().next().unwrap().unwrap();

    // NULL into a nullable field binds as None; NULL into a plain field is
    // dropped and the default survives.
    assert_eq!(user.signed_up, None);
    assert_eq!(user.user_name, "");
    assert!(user.active);
}

#[test]
fn kind_mismatch_keeps_the_default() {
    let rows = vec![row![
        "user_id" => "not a number",
        "user_name" => "mira",
        "signed_up" => None::<NaiveDate>,
        "active" => false,
    ]];

    let user = map_rows::<User, _>(rows).unwrap().next().unwrap().unwrap();

    assert_eq!(user.user_id, 0);
    assert_eq!(user.user_name, "mira");
}

#[test]
fn rows_map_in_source_order() {
    let rows: Vec<Row> = (1..=5)
        .map(|id| {
            row![
                "user_id" => id as i64,
                "user_name" => format!("user{id}"),
                "signed_up" => None::<NaiveDate>,
                "active" => true,
            ]
        })
        .collect();

    let users: Vec<_> = map_rows::<User, _>(rows)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(users.len(), 5);
    for (i, user) in users.iter().enumerate() {
        assert_eq!(user.user_id, i as i64 + 1);
        assert_eq!(user.user_name, format!("user{}", i + 1));
    }
}

#[test]
fn empty_input_maps_to_nothing() {
    let mut mapped = map_rows::<User, _>(Vec::new()).unwrap();
    assert!(mapped.next().is_none());
}

#[derive(Debug, Default, PartialEq, FromRow)]
struct Tagged {
    id: i64,
    tags: Vec<String>,
    scores: Vec<i64>,
}

#[test]
fn array_columns_bind_elementwise() {
    let rows = vec![row![
        "id" => 1_i64,
        "tags" => vec!["red".to_string(), "blue".to_string()],
        // A mixed-kind array cannot coerce; the field keeps its default.
        "scores" => Value::List(vec![Value::I64(1), Value::from("two")]),
    ]];

    let tagged = map_rows::<Tagged, _>(rows)
        .unwrap()
        .next()
        .unwrap()
        .unwrap();

    assert_eq!(tagged.tags, vec!["red".to_string(), "blue".to_string()]);
    assert_eq!(tagged.scores, Vec::<i64>::new());
}

#[derive(Debug, PartialEq, FromRow)]
#[rowcast(positional, no_default)]
struct Point {
    x: i64,
    y: i64,
}

#[test]
fn positional_construction_ignores_column_names() {
    let rows = vec![row!["a" => 3_i64, "b" => 4_i64]];

    let point = map_rows::<Point, _>(rows).unwrap().next().unwrap().unwrap();

    assert_eq!(point, Point { x: 3, y: 4 });
}

#[test]
fn positional_construction_rejects_null() {
    let rows = vec![row!["a" => Value::Null, "b" => 4_i64]];

    let err = map_rows::<Point, _>(rows)
        .unwrap()
        .next()
        .unwrap()
        .unwrap_err();

    assert!(err.is_type_conversion());
}

#[derive(Debug, Default, PartialEq, FromRow)]
#[rowcast(positional)]
struct Pair {
    first: i64,
    second: i64,
}

#[test]
fn positional_constructor_wins_over_populate() {
    // Column names match the fields crosswise; positional binding ignores
    // them and maps by position.
    let rows = vec![row!["second" => 1_i64, "first" => 2_i64]];

    let pair = map_rows::<Pair, _>(rows).unwrap().next().unwrap().unwrap();

    assert_eq!(
        pair,
        Pair {
            first: 1,
            second: 2
        }
    );
}

#[derive(Debug, PartialEq, FromRow)]
#[rowcast(no_default)]
struct Opaque {
    id: i64,
}

#[test]
fn unconstructible_target_fails_before_any_row() {
    let err = map_rows::<Opaque, _>(vec![row!["id" => 1_i64]]).unwrap_err();

    assert!(err.is_construction());
    assert!(err.to_string().contains("no usable constructor"));
}
