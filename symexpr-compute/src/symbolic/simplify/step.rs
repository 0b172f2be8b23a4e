use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rewrite applied to a single node while simplifying an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// An operation on two numbers was replaced by its result.
    ConstantFold,

    /// `a+0 = a`
    /// `0+a = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `a*0 = 0`
    /// `0*a = 0`
    MultiplyZero,

    /// `a*1 = a`
    /// `1*a = a`
    MultiplyOne,

    /// `a/1 = a`
    DivideOne,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConstantFold => write!(f, "evaluate an operation on two numbers"),
            Self::AddZero => write!(f, "adding zero: a + 0 = a"),
            Self::SubtractZero => write!(f, "subtracting zero: a - 0 = a"),
            Self::MultiplyZero => write!(f, "multiplying by zero: a * 0 = 0"),
            Self::MultiplyOne => write!(f, "multiplying by one: a * 1 = a"),
            Self::DivideOne => write!(f, "dividing by one: a / 1 = a"),
        }
    }
}
