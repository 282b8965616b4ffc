pub mod common;
pub mod fields;
pub mod folder;
pub mod reset;
pub mod set;
pub mod show;
pub mod themes;
