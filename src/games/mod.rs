//! Game implementations.

pub mod numeri;
