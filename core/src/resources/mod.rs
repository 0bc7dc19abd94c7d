//! Resource clients, one module per API tag.

pub mod store;
