pub mod ansi;
pub mod ascii;
pub mod chrome;
pub mod width_util;
