// crates/marker_prefix/src/lib.rs

//! Canonical marker prefix shared across the prefix-fixing tool-chain.

/// Literal string prepended to a leading-underscore filename to form its
/// replacement name (`_foo.png` becomes `TTT_foo.png`).
pub const MARKER_PREFIX: &str = "TTT";
