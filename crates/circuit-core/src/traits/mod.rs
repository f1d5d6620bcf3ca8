mod nlu;
mod picker;

pub use nlu::INluProvider;
pub use picker::ResponsePicker;
