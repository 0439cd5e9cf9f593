use pretty_assertions::assert_eq;
use rowscan::{row, Api, Record};
use tests::{LoggingRows, RowsOp};

#[derive(Debug, Default, Record)]
struct Item {
    pub id: i64,
}

fn items() -> LoggingRows {
    LoggingRows::new(["id"], vec![row![1], row![2]])
}

#[test]
fn scan_all_iterates_checks_and_closes() {
    let rows = items();
    let ops = rows.ops_log_handle();

    let items = Api::new().scan_all::<Item, Vec<_>>(rows).unwrap();
    assert_eq!(items.len(), 2);

    assert_eq!(
        *ops.lock().unwrap(),
        [
            RowsOp::Next(true),
            RowsOp::Columns,
            RowsOp::Scan(1),
            RowsOp::Next(true),
            RowsOp::Scan(1),
            RowsOp::Next(false),
            RowsOp::Err,
            RowsOp::Close,
        ]
    );
}

#[test]
fn iteration_error_is_reported_and_rows_closed() {
    let rows = items().fail_iteration_after(1);
    let ops = rows.ops_log_handle();

    let err = Api::new().scan_all::<Item, Vec<_>>(rows).unwrap_err();

    assert!(err.is_driver());
    assert_eq!(err.to_string(), "connection reset");
    assert_eq!(ops.lock().unwrap().last(), Some(&RowsOp::Close));
}

#[test]
fn scan_error_wins_over_close_error() {
    let rows = LoggingRows::new(["id"], vec![row!["one"]]).fail_close();
    let ops = rows.ops_log_handle();

    let err = Api::new().scan_all::<Item, Vec<_>>(rows).unwrap_err();

    assert!(err.is_type_conversion());
    assert_eq!(ops.lock().unwrap().last(), Some(&RowsOp::Close));
}

#[test]
fn close_error_is_returned_after_success() {
    let err = Api::new()
        .scan_all::<Item, Vec<_>>(items().fail_close())
        .unwrap_err();

    assert!(err.is_driver());
    assert_eq!(err.to_string(), "close failed");
}

#[test]
fn scan_one_closes_on_every_outcome() {
    let api = Api::new();

    for (rows, found) in [
        (LoggingRows::new(["id"], vec![row![1]]), true),
        (LoggingRows::new(["id"], vec![]), false),
        (items(), false),
    ] {
        let ops = rows.ops_log_handle();
        assert_eq!(api.scan_one::<Item>(rows).is_ok(), found);
        assert_eq!(ops.lock().unwrap().last(), Some(&RowsOp::Close));
    }
}

#[test]
fn manual_iteration_leaves_closing_to_the_caller() {
    let rows = items();
    let ops = rows.ops_log_handle();
    let mut scanner = Api::new().row_scanner(rows);

    let mut item = Item::default();
    while scanner.next() {
        scanner.scan(&mut item).unwrap();
    }
    scanner.err().unwrap();

    assert_eq!(item.id, 2);
    assert!(!ops.lock().unwrap().contains(&RowsOp::Close));

    scanner.close().unwrap();
    scanner.close().unwrap();
    assert_eq!(
        ops.lock()
            .unwrap()
            .iter()
            .filter(|op| **op == RowsOp::Close)
            .count(),
        2
    );
}
