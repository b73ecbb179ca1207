//! Command-line front end for symfont.

pub mod cli;
pub mod commands;
