//! Command handlers.
//!
//! Each handler takes the controller and the command's fields and produces
//! an [`Output`](crate::Output).

pub mod resource;
