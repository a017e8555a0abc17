//! Cross-module behavior tests for vCard generation.
