pub mod constants;
pub mod string_utils;

pub use constants::*;
pub use string_utils::safe_truncate_chars;
