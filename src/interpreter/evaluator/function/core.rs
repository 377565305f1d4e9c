use std::{collections::HashMap, fmt, sync::LazyLock};

use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, function::builtin},
    math::{self, MathResult},
};

/// Type alias for unary function handlers.
///
/// A handler receives one evaluated argument and either returns the result or
/// reports why the argument was rejected.
pub type UnaryFn = fn(f64) -> MathResult<f64>;

/// A named unary function that can appear in an expression.
///
/// Functions are small and `Copy`, so tokens carry them by value.
#[derive(Clone, Copy)]
pub struct Function {
    /// The name the function is called by, such as `sin`.
    pub name: &'static str,
    /// The handler computing the result.
    pub func: UnaryFn,
}

impl Function {
    /// Applies the function to `x`, tagging any failure with the function's
    /// name.
    ///
    /// # Example
    /// ```
    /// use yardcalc::FunctionTable;
    ///
    /// let table = FunctionTable::standard();
    /// let sqrt = table.get("sqrt").unwrap();
    ///
    /// assert_eq!(sqrt.apply(16.0), Ok(4.0));
    /// assert!(sqrt.apply(-1.0).is_err());
    /// ```
    pub fn apply(&self, x: f64) -> EvalResult<f64> {
        (self.func)(x).map_err(|source| RuntimeError::Math { function: self.name,
                                                             source })
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Function").field(&self.name).finish()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Defines the standard functions by generating a static table and a name
/// list.
///
/// Each entry maps a string name to a handler. The macro produces:
/// - `BUILTIN_TABLE` (static table the standard [`FunctionTable`] is built
///   from),
/// - `BUILTIN_FUNCTIONS` (public list of standard names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Function] = &[
            $(
                Function { name: $name, func: $func },
            )*
        ];
        /// Names of all functions in [`FunctionTable::standard`].
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt"  => math::sqrt,
    "cbrt"  => |x| Ok(math::cbrt(x)),
    "sin"   => builtin::sin,
    "cos"   => builtin::cos,
    "tan"   => builtin::tan,
    "log"   => builtin::log10,
    "ln"    => math::ln,
    "exp"   => |x| Ok(math::exp(x)),
    "asin"  => math::asin,
    "acos"  => math::acos,
    "atan"  => math::atan,
    "fact"  => math::factorial,
    "abs"   => |x| Ok(x.abs()),
    "ceil"  => |x| Ok(math::ceil(x)),
    "floor" => |x| Ok(math::floor(x)),
    "round" => |x| Ok(math::round(x)),
}

/// The standard function table, built on first use and never modified.
pub static STANDARD_FUNCTIONS: LazyLock<FunctionTable> = LazyLock::new(FunctionTable::standard);

/// An immutable mapping from function names to unary functions.
///
/// A table is assembled once and then only read; the evaluator borrows it
/// for the duration of each call.
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    functions: HashMap<&'static str, Function>,
}

impl FunctionTable {
    /// Creates a table holding no functions.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the standard table: `sqrt cbrt sin cos tan log ln exp asin acos
    /// atan fact abs ceil floor round`.
    ///
    /// `sin`, `cos` and `tan` take degrees, `asin`, `acos` and `atan` return
    /// radians and `log` is the base 10 logarithm.
    #[must_use]
    pub fn standard() -> Self {
        BUILTIN_TABLE.iter().copied().collect()
    }

    /// Returns a copy of the table with `name` bound to `func`, replacing any
    /// previous binding.
    ///
    /// # Example
    /// ```
    /// use yardcalc::{Evaluator, FunctionTable};
    ///
    /// let table = FunctionTable::empty().with("double", |x| Ok(2.0 * x));
    /// let evaluator = Evaluator::new(&table);
    ///
    /// assert_eq!(evaluator.evaluate("double(21)").unwrap(), 42.0);
    /// assert!(evaluator.evaluate("sin(0)").is_err());
    /// ```
    #[must_use]
    pub fn with(mut self, name: &'static str, func: UnaryFn) -> Self {
        self.functions.insert(name, Function { name, func });
        self
    }

    /// Looks up a function by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Function> {
        self.functions.get(name).copied()
    }

    /// Returns all names in the table, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl FromIterator<Function> for FunctionTable {
    fn from_iter<I: IntoIterator<Item = Function>>(iter: I) -> Self {
        Self { functions: iter.into_iter()
                              .map(|function| (function.name, function))
                              .collect(), }
    }
}
