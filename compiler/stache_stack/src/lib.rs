//! On-demand stack for walking arbitrarily nested templates.
//!
//! Section nesting has no syntactic limit, and a partial expands into a whole
//! nested render pass, so every recursive step of a tree walk (the parser's
//! unterminated-section check and each render pass) runs through
//! [`ensure_sufficient_stack`]. A `{{#a}}` chain thousands of levels deep then
//! costs heap-allocated stack segments instead of a crashed process.
//!
//! On wasm32 there is no `stacker` support and the call is made directly.

/// Remaining stack below which a new segment is switched to.
///
/// One walk step holds a visitor frame plus, during rendering, a nested
/// `RenderPass` with its scope guard; 128 KiB covers many such steps.
const MIN_REMAINING: usize = 128 * 1024;

/// Size of each segment allocated once `MIN_REMAINING` is reached.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Call `f`, moving onto a fresh stack segment first if the current one is
/// nearly exhausted.
///
/// ```text
/// ensure_sufficient_stack(|| match visitor.visit(arena, id, depth) {
///     WalkControl::Stop => WalkControl::Stop,
///     WalkControl::Skip => WalkControl::Continue,
///     WalkControl::Continue => walk_children(visitor, arena, id, depth + 1),
/// })
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(MIN_REMAINING, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
