//! Screens a couple's and their parents' genetic sequences for markers of
//! three heritable disorders and builds Mendelian inheritance tables.

pub mod cli;
pub mod commands;
pub mod screen;
pub mod utils;
