//! Staffing calculation engine for contact-center workforce planning.
//!
//! Raw matrices flow one way:
//!   aggregate -> shrinkage -> erlang -> pipeline -> report
//!
//! Nothing here holds state between calls. Every run recomputes the
//! full set of interval records from immutable inputs.

pub mod aggregate;
pub mod config;
pub mod erlang;
pub mod error;
pub mod horizon;
pub mod interval;
pub mod pipeline;
pub mod report;
pub mod rng;
pub mod roster;
pub mod scenario;
pub mod shrinkage;
pub mod summary;
pub mod types;
