mod command;
mod common;
mod config;
