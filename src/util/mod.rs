pub mod alloc;
pub mod error;
pub mod fmt;
