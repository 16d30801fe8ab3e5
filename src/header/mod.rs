pub mod compose;
pub mod template;

pub use compose::{HeaderComposer, add_header, copyright_years};
pub use template::{Placeholders, Template, fill_line};
