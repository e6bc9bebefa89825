//! Stack growth for recursive tree traversals.
//!
//! Expression trees are walked by plain recursion, one native frame (or a
//! few) per node. A tree nested a few hundred thousand levels deep would
//! overflow an 8MB main-thread stack, so every dispatch in
//! [`Expr::accept`](crate::Expr::accept) goes through
//! [`ensure_sufficient_stack`], which moves execution onto a freshly
//! allocated segment once the remaining stack falls below the red zone.
//!
//! Only traversal is guarded. Dropping a tree runs the compiler-generated
//! `Drop` for each `Box<Expr>`, which recurses on the native stack.
//!
//! On `wasm32` the guard is a passthrough; the runtime owns the stack there.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
