pub mod keystrokes;
pub mod reading;
pub mod suggest;
