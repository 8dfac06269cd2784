#[macro_use]
extern crate lazy_static;

pub mod output;
pub mod tables;
