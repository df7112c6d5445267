mod display_payload;
pub use display_payload::display_payload;

mod fit_payload;
pub use fit_payload::fit_payload;

mod verify_file_existence;
pub use verify_file_existence::verify_file_existence;
