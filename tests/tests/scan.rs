use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use rowscan::{row, Api, Record, Value, ValueRows};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default, PartialEq, Record)]
struct User {
    pub id: i64,
    pub name: String,
    pub score: Option<f64>,
}

fn users() -> ValueRows {
    ValueRows::new(
        ["id", "name", "score"],
        vec![
            row![1, "ann", 9.5],
            row![2, "bob", Value::Null],
        ],
    )
}

#[test]
fn scan_all_into_records() {
    tests::init_logging();

    let users = Api::new().scan_all::<User, Vec<_>>(users()).unwrap();

    assert_eq!(
        users,
        [
            User {
                id: 1,
                name: "ann".into(),
                score: Some(9.5),
            },
            User {
                id: 2,
                name: "bob".into(),
                score: None,
            },
        ]
    );
}

#[test]
fn scan_all_into_any_collection() {
    let ids = Api::new()
        .scan_all::<i64, std::collections::BTreeSet<_>>(ValueRows::new(
            ["id"],
            vec![row![3], row![1], row![3]],
        ))
        .unwrap();

    assert_eq!(ids.into_iter().collect::<Vec<_>>(), [1, 3]);
}

#[test]
fn scan_one_counts_rows() {
    let api = Api::new();

    let user: User = api
        .scan_one(ValueRows::new(["id", "name"], vec![row![7, "eve"]]))
        .unwrap();
    assert_eq!(user.name, "eve");

    let err = api
        .scan_one::<User>(ValueRows::new(["id"], vec![]))
        .unwrap_err();
    assert!(err.is_record_not_found());

    let err = api.scan_one::<User>(users()).unwrap_err();
    assert!(err.is_too_many_records());
}

#[test]
fn scalar_destination_takes_exactly_one_column() {
    let api = Api::new();

    let count: i64 = api
        .scan_one(ValueRows::new(["count"], vec![row![42]]))
        .unwrap();
    assert_eq!(count, 42);

    let err = api
        .scan_one::<i64>(ValueRows::new(["count", "total"], vec![row![1, 2]]))
        .unwrap_err();
    assert!(err.is_invalid_destination());
    assert_eq!(
        err.to_string(),
        "invalid destination: expected exactly 1 column, got 2"
    );
}

#[test]
fn maps_receive_every_column() {
    let api = Api::new();

    let row: HashMap<String, Value> = api
        .scan_one(ValueRows::new(["id", "name"], vec![row![1, "ann"]]))
        .unwrap();
    assert_eq!(row["id"], Value::I64(1));
    assert_eq!(row["name"], Value::from("ann"));

    let rows = api
        .scan_all::<IndexMap<String, String>, Vec<_>>(ValueRows::new(
            ["b", "a"],
            vec![row!["1", "2"], row!["3", "4"]],
        ))
        .unwrap();
    assert_eq!(rows[1].keys().collect::<Vec<_>>(), ["b", "a"]);
    assert_eq!(rows[1]["a"], "4");
}

#[test]
fn scanner_reuses_map_destination() {
    let mut scanner = Api::new().row_scanner(ValueRows::new(
        ["id", "name"],
        vec![row!["1", "ann"], row!["2", "bob"]],
    ));
    let mut map = BTreeMap::<String, String>::new();
    map.insert("stale".into(), "x".into());

    while scanner.next() {
        scanner.scan(&mut map).unwrap();
    }

    assert_eq!(map.len(), 3);
    assert_eq!(map["name"], "bob");
}

#[test]
fn conversion_failure_names_the_types() {
    let err = Api::new()
        .scan_one::<User>(ValueRows::new(["name"], vec![row![5]]))
        .unwrap_err();

    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert I64 to String");
}

#[test]
fn duplicate_columns_fail_before_copy() {
    let err = Api::new()
        .scan_one::<User>(ValueRows::new(["id", "id"], vec![row![1, 2]]))
        .unwrap_err();

    assert!(err.is_duplicate_column());
    assert_eq!(err.to_string(), "rows contain a duplicate column `id`");
}
