pub mod domain;
pub mod error;
pub mod loose;
pub mod protocol;
