use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a message, overwriting the oldest slot once the log is full
    Append {
        /// The message (optional; reads from stdin if not provided)
        message: Option<String>,

        /// Cut messages longer than the payload size instead of rejecting them
        #[arg(short = 't', long = "truncate")]
        truncate: bool,
    },

    /// Read the record stored in one slot
    Read {
        /// Slot index
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Print every slot
    Dump {
        /// Order oldest to newest instead of by slot index
        #[arg(long = "chronological")]
        chronological: bool,
    },

    /// Print the slot the next append will write
    Cursor,

    /// Get current state of the storage file
    Info,
}
