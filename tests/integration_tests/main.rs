mod arc;
mod container;
mod error_handling;
mod parse;
mod transform;
