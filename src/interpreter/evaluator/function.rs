/// Degree-based trigonometry and the base 10 logarithm.
///
/// Thin adapters that give the math primitives the calling conventions the
/// expression language uses.
pub mod builtin;
/// The function table.
///
/// Declares [`core::Function`], [`core::FunctionTable`] and the standard
/// table every expression is checked against by default.
pub mod core;
