pub mod complement;
pub mod screen;
