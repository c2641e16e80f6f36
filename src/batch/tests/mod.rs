//! Property-based tests for framing and assembly.
