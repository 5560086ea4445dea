pub mod completion;
pub mod trigger;
