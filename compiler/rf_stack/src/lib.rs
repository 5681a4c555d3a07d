//! Host stack guard for recursive reading and evaluation.
//!
//! Quotations nest inside quotations and words call words, so both the
//! reader and the interpreter recurse on the host stack. A recursive word
//! like `: loop ( -- ) loop ;` recurses once per invocation, with no
//! bound other than available memory.
//!
//! [`ensure_sufficient_stack`] wraps each recursive step. On native targets
//! it moves onto a freshly allocated segment via `stacker` when the
//! remaining stack drops below [`RED_ZONE`]; on WASM it calls straight
//! through.

/// Remaining-stack threshold below which a new segment is allocated (128KB).
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the host stack if less than [`RED_ZONE`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
