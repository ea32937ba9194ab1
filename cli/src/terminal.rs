pub mod colors;
pub mod format;
pub mod logging;
pub mod narrator;
pub mod print;
