//! Models for the test project.
//!
//! WARNING: these types carry intentional security and validation defects so
//! that review tooling has something to find. Do not reuse them.

mod product;
mod user;

pub use product::Product;
pub use user::User;
