//! # mwdict
//!
//! Looks words up in the Merriam-Webster Collegiate Dictionary API and renders
//! definitions and etymologies for the terminal.
pub mod config;
pub mod error;
pub mod extract;
pub mod lookup;
pub mod markup;
pub mod model;
pub mod mwdict;

pub use config::Config;
pub use error::{Error, Result};
pub use lookup::{lookup, Outcome};
pub use model::{Entry, Response};
pub use mwdict::{DictionarySource, HttpSource};
