//! Language configurations: state topologies and keyword lists supplied to the generic lexer.

pub mod dgibi;
