//! Stack growth for deep recursion.
//!
//! Both the parser and the evaluator recurse once per nesting level of the
//! source program: `((((1))))` recurses in `parse_expression`, and a
//! recursive fener function recurses in the evaluator's call path. Wrapping
//! those entry points in [`ensure_sufficient_stack`] moves the recursion onto
//! a freshly allocated segment whenever the current one runs low.
//!
//! On wasm32 the guard is a plain call.

/// Grow when less than this much stack remains (100 KiB).
pub const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1 MiB).
pub const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` on the current stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mirrors the shape of a nested-expression parse: one guarded frame per
    /// level, each returning the depth it reached.
    fn nest(depth: u32) -> u32 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
    }

    #[test]
    fn test_shallow_nesting() {
        assert_eq!(nest(16), 16);
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        assert_eq!(nest(200_000), 200_000);
    }

    #[test]
    fn test_passes_result_through() {
        let result: Result<u8, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
        assert_eq!(result, Err("boom".to_string()));
    }
}
