/// Numeric conversion helpers.
///
/// Integer literals are lexed as `i64` but evaluated as `f64`. The helpers here
/// perform that widening only when it is lossless.
pub mod num;
