mod reader;
pub use reader::PackedLogReader;

mod writer;
pub use writer::PackedLogWriter;
