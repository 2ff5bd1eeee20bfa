pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod feed;
pub mod manifest;
pub mod menu;
pub mod routes;
pub mod trending;

#[cfg(test)]
pub(crate) mod test_support;
