//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

/// A repetition whose body succeeds without consuming would loop forever.
#[inline]
pub(super) fn ensure_progress(combinator: &str, before: usize, after: usize) {
    assert!(
        after > before,
        "broken grammar: `{combinator}` body succeeded without consuming input at offset {before}"
    );
}

/// A `recursive` handle was run before its definition was installed, or
/// after the definition was dropped.
#[cold]
pub(super) fn unlinked_recursive() -> ! {
    panic!("broken grammar: recursive parser used outside the lifetime of its definition")
}
