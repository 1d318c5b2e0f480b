mod file;
mod interactive;

pub use file::{FileInputSource, InputFormat};
pub use interactive::InteractiveInputSource;
