//! Tooling for evolving gaits of modular robots.
//!
//! - [`codec`] turns a module-tree description such as `(F, 90, X)` into a
//!   [`codec::ModuleId`] and back.
//! - [`gait`] decodes an evolved genotype into the gait table the simulator reads.
//! - [`results`], [`services`] and [`config`] read milestone files, prepare run
//!   folders and launch the external evolution and simulation binaries.

pub mod codec;
pub mod config;
pub mod error;
pub mod gait;
mod markup;
pub mod results;
pub mod services;
pub mod types;

pub use error::{HormodularError, Result};
