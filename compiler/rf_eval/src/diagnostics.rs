//! Call frame tracking for depth limits and backtraces.
//!
//! Every word invocation and every `call` of a quotation pushes a
//! [`CallFrame`]; returning pops it. When an error escapes a call, the
//! live frames are snapshotted into an [`EvalBacktrace`].

use crate::errors::{call_depth_exceeded, BacktraceFrame, EvalBacktrace, EvalError};

/// Frame name used for quotations run directly by `call`.
const QUOTATION_FRAME: &str = "call";

/// A single frame in the live call stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    pub name: String,
}

impl CallFrame {
    /// Frame for invoking the user-defined word `name`.
    pub fn word(name: &str) -> Self {
        CallFrame {
            name: name.to_owned(),
        }
    }

    /// Frame for an anonymous quotation run by `call`.
    pub fn quotation() -> Self {
        CallFrame {
            name: QUOTATION_FRAME.to_owned(),
        }
    }
}

/// Live call stack for the interpreter.
///
/// The depth check is part of [`CallStack::push`].
#[derive(Clone, Debug, Default)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` is `None` for unlimited depth.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// The frame is NOT pushed when the limit would be exceeded.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(call_depth_exceeded(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Snapshot of the live frames, most recent call first.
    pub fn capture(&self) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|f| BacktraceFrame {
                name: f.name.clone(),
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a backtrace of the live frames to `err`, unless there are no
    /// frames.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}
