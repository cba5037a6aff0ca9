#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod configuration;
mod error;
mod exercise;
mod generator;
mod service;
mod session;
mod store;
mod workout;

pub use configuration::*;
pub use error::*;
pub use exercise::*;
pub use generator::generate;
pub use service::*;
pub use session::*;
pub use store::*;
pub use workout::*;
