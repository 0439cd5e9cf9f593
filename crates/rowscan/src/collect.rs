/// A collection [`Api::scan_all`](crate::Api::scan_all) can drain rows into.
pub trait FromRows<T>: Extend<T> + Default {}

impl<T, B: Extend<T> + Default> FromRows<T> for B {}
