//! Password module
//!
//! - `charset`: character classes and alphabet assembly
//! - `generator`: constrained random generation with regeneration on failure
//! - `validator`: class presence/absence checks

pub mod charset;
pub mod generator;
pub mod validator;
