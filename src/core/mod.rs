pub mod address_book;
pub mod cli;
pub mod context;
pub mod fields;
pub mod models;
pub mod types;
