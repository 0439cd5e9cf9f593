/// Builds one row of [`Value`](crate::Value)s from anything convertible.
///
/// ```
/// # use rowscan_core::{row, Value};
/// assert_eq!(row![1, "ann"], vec![Value::I64(1), Value::from("ann")]);
/// ```
#[macro_export]
macro_rules! row {
    ( $( $value:expr ),* $(,)? ) => {
        vec![ $( $crate::Value::from($value), )* ]
    };
}
