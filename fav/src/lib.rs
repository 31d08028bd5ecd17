extern crate clap;
extern crate flatarc;

pub mod browse;
pub mod cli;
pub mod error;
pub mod utils;
