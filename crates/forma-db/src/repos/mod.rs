//! libSQL implementations of the store contracts on [`FormaDb`](crate::FormaDb).

pub mod documents;
pub mod schemas;
