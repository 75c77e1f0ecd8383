/// Runtime value representation.
///
/// Defines the `Value` enum returned by evaluation, along with conversions
/// into and out of the evaluator's internal `Result` type and the
/// user-facing rendering of numbers and errors.
pub mod core;

pub use self::core::Value;
