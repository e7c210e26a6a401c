#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod opener;
pub mod reference;
pub mod session;
pub mod store;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
