//! # recipebox-auth
//!
//! The identity boundary for RecipeBox. A request carries a signed session
//! token; this crate turns it into "caller user id, or nobody".
//!
//! ## Modules
//!
//! - `jwt`: session token claims, signing, and validation

pub mod jwt;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
