/// Utility functions and helpers
pub mod string_utils;
