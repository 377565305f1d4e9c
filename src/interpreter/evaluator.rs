/// Binary operators on evaluation-stack values.
///
/// Implements the arithmetic of `+ - * / ^`, including when products and
/// quotients are kept as deferred terms.
pub mod binary;
/// The reducer and the evaluator entry point.
///
/// Declares [`core::Evaluator`], which drives tokenizing, shunting and
/// reduction, and [`core::reduce`], which turns a postfix queue into a
/// number.
pub mod core;
/// The function table and the standard functions.
pub mod function;
