//! Chave Admin Application Layer
//!
//! Use cases orchestrate validation and persistence through the repository
//! ports; all business rules for user-group administration live here.
pub mod ports;
pub mod use_cases;
