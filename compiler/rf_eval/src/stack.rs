//! The data stack.

use std::fmt;

use crate::errors::{stack_underflow, EvalError};
use crate::value::Value;

/// LIFO stack of values. The last element of [`Stack::as_slice`] is the
/// top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack {
    values: Vec<Value>,
}

impl Stack {
    pub fn new() -> Self {
        Stack::default()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    /// Push each value in order, so the last one ends on top.
    pub fn push_all<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.values.extend(values.into_iter().map(Into::into));
    }

    pub fn pop(&mut self) -> Result<Value, EvalError> {
        self.values
            .pop()
            .ok_or_else(|| stack_underflow(1, 0))
    }

    /// Pop the top `n` values, returned oldest first (the order a stack
    /// effect names them in).
    ///
    /// Fails with `StackUnderflow` and leaves the stack untouched when
    /// fewer than `n` values are present.
    pub fn pop_n(&mut self, n: usize) -> Result<Vec<Value>, EvalError> {
        let available = self.values.len();
        if available < n {
            return Err(stack_underflow(n, available));
        }
        Ok(self.values.split_off(available - n))
    }

    /// [`Stack::pop_n`] into a fixed-size array, for primitives with a
    /// known input arity.
    pub fn pop_array<const N: usize>(&mut self) -> Result<[Value; N], EvalError> {
        let available = self.values.len();
        let values = self.pop_n(N)?;
        <[Value; N]>::try_from(values).map_err(|_| stack_underflow(N, available))
    }

    pub fn peek(&self) -> Option<&Value> {
        self.values.last()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bottom to top.
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }
}

impl From<Vec<Value>> for Stack {
    fn from(values: Vec<Value>) -> Self {
        Stack { values }
    }
}

impl<V: Into<Value>> FromIterator<V> for Stack {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Stack {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Space-separated, bottom to top.
impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
