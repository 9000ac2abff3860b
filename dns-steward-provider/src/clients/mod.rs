//! Concrete API client implementations.

pub(crate) mod common;

#[cfg(feature = "technitium")]
mod technitium;

#[cfg(feature = "godaddy")]
mod godaddy;

#[cfg(feature = "technitium")]
pub use technitium::TechnitiumClient;

#[cfg(feature = "godaddy")]
pub use godaddy::GodaddyClient;
