pub mod constants;

pub mod record;
pub use record::*;

pub mod slot_words;
pub use slot_words::*;
