/// A value on the evaluation stack.
///
/// Most values are plain numbers. A quotient produced by `/`, and any `*` or
/// `/` that later reaches it, stays a [`DeferredTerm`] until an additive
/// operator, `^`, a function or the end of the reduction forces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A fully computed number.
    Plain(f64),
    /// A multiplicative operation that has not been carried out yet.
    Deferred(DeferredTerm),
}

/// The pending operation of a [`DeferredTerm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// `left * right`
    Multiply,
    /// `left / right`
    Divide,
}

/// A pending `left combinator right`.
///
/// Resolving a term performs exactly the one operation it stands for, so a
/// reduction that defers gives bit for bit the result of evaluating left to
/// right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeferredTerm {
    combinator: Combinator,
    left:       f64,
    right:      f64,
}

impl Value {
    /// Collapses the value to a plain number.
    ///
    /// # Example
    /// ```
    /// use yardcalc::interpreter::value::{Combinator, DeferredTerm, Value};
    ///
    /// assert_eq!(Value::Plain(2.5).resolve(), 2.5);
    /// assert_eq!(DeferredTerm::new(Combinator::Divide, 1.0, 4.0).resolve(), 0.25);
    /// ```
    #[must_use]
    pub fn resolve(self) -> f64 {
        match self {
            Self::Plain(x) => x,
            Self::Deferred(term) => term.resolve(),
        }
    }
}

impl DeferredTerm {
    /// Creates the deferred value of `left combinator right`.
    ///
    /// A zero divisor is not rejected here; callers check it before deferring
    /// a division.
    ///
    /// # Example
    /// ```
    /// use yardcalc::interpreter::value::{Combinator, DeferredTerm, Value};
    ///
    /// let third = DeferredTerm::new(Combinator::Divide, 1.0, 3.0);
    /// assert_eq!(third.resolve(), 1.0 / 3.0);
    ///
    /// let Value::Deferred(term) = third else { unreachable!() };
    /// assert_eq!(term.combinator(), Combinator::Divide);
    /// assert_eq!((term.left(), term.right()), (1.0, 3.0));
    /// ```
    #[must_use]
    pub const fn new(combinator: Combinator, left: f64, right: f64) -> Value {
        Value::Deferred(Self { combinator,
                               left,
                               right })
    }

    /// The pending operation.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// The left operand of the pending operation.
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.left
    }

    /// The right operand of the pending operation.
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.right
    }

    /// Carries out the pending operation.
    #[must_use]
    pub fn resolve(self) -> f64 {
        match self.combinator {
            Combinator::Multiply => self.left * self.right,
            Combinator::Divide => self.left / self.right,
        }
    }
}
