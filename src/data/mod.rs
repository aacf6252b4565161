//! # Storing of linear programs in memory
//!
//! This module provides the data structures used to represent linear programs and their
//! solutions in memory. The simplex algorithm introduces its specific data structures (tableaus,
//! bases) in `algorithm::two_phase`.

pub mod linear_algebra;
pub mod linear_program;
pub mod number_types;
