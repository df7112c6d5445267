use crate::cli::{Cli, Commands};
use crate::storage_engine::{
    LogConfig, MmapSlotStore, PackedLog, PackedLogError, Result, SlotStore,
    constants::{DEFAULT_CAPACITY, PAYLOAD_SIZE, SLOT_SIZE, WORD_SIZE},
    traits::{PackedLogReader, PackedLogWriter},
};
use crate::utils::{display_payload, fit_payload};
use std::io::{self, IsTerminal, Read};
use tracing::debug;

/// Executes commands from the CLI against a file-backed [`PackedLog`].
///
/// Padding and truncation of user messages happen here, upstream of the log,
/// which only ever sees exact `PAYLOAD_SIZE` payloads. Any error is printed
/// to stderr and the process exits with status `1`.
///
/// # References
/// - [`Commands`](crate::cli::Commands): Defines the available CLI commands.
/// - [`PackedLog`](crate::storage_engine::PackedLog): The underlying log.
pub fn execute_command(cli: &Cli) {
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Opens the log for `append`, creating the store file if it is missing.
fn open_or_create_log(cli: &Cli) -> Result<PackedLog<MmapSlotStore>> {
    let file_exists = std::fs::metadata(&cli.storage)
        .map(|meta| meta.len() > 0)
        .unwrap_or(false);

    match cli.capacity {
        None if file_exists => open_existing_log(cli),
        capacity => {
            let config = LogConfig::new(capacity.unwrap_or(DEFAULT_CAPACITY))
                .with_sync_on_append(cli.sync);
            PackedLog::open(&cli.storage, config)
        }
    }
}

/// Opens an **existing** store file. Never creates one.
///
/// An explicit `--capacity` must match the capacity in the file header.
fn open_existing_log(cli: &Cli) -> Result<PackedLog<MmapSlotStore>> {
    let store = MmapSlotStore::open_existing(&cli.storage)?;
    let capacity = cli.capacity.unwrap_or(store.capacity());
    let config = LogConfig::new(capacity).with_sync_on_append(cli.sync);
    PackedLog::from_store(store, config)
}

fn read_message(message: &Option<String>) -> Result<Vec<u8>> {
    if let Some(message) = message {
        return Ok(message.as_bytes().to_vec());
    }

    if io::stdin().is_terminal() || std::env::var("FORCE_NO_TTY").is_ok() {
        return Err(PackedLogError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "No message provided and stdin is empty.",
        )));
    }

    let mut buffer = Vec::with_capacity(PAYLOAD_SIZE);
    io::stdin().lock().read_to_end(&mut buffer)?;

    // `echo` style input carries one trailing newline
    if buffer.last() == Some(&b'\n') {
        buffer.pop();
    }

    if buffer.is_empty() {
        return Err(PackedLogError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "No message provided and stdin is empty.",
        )));
    }

    Ok(buffer)
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Append { message, truncate } => {
            let message = read_message(message)?;
            let payload = fit_payload(&message, *truncate)?;

            let log = open_or_create_log(cli)?;
            let slot = log.append(&payload)?;
            log.flush()?;

            let record = log.read(slot)?;
            debug!(slot, timestamp = record.timestamp, "Appended message.");
            println!("Appended to slot {} at {}", slot, record.timestamp);
        }

        Commands::Read { index } => {
            let log = open_existing_log(cli)?;
            let capacity = log.capacity();

            let index = usize::try_from(*index)
                .map_err(|_| PackedLogError::IndexOutOfRange {
                    index: *index,
                    capacity,
                })?;

            let record = log.read(index)?;
            println!("{}\t{}", record.timestamp, display_payload(&record.payload));
        }

        Commands::Dump { chronological } => {
            let log = open_existing_log(cli)?;
            let capacity = log.capacity();

            if *chronological {
                let cursor = log.current_cursor()?;
                for (offset, record) in log.read_chronological()?.iter().enumerate() {
                    let index = (cursor + offset) % capacity;
                    println!(
                        "{}\t{}\t{}",
                        index,
                        record.timestamp,
                        display_payload(&record.payload)
                    );
                }
            } else {
                for (index, record) in log.read_all()?.iter().enumerate() {
                    println!(
                        "{}\t{}\t{}",
                        index,
                        record.timestamp,
                        display_payload(&record.payload)
                    );
                }
            }
        }

        Commands::Cursor => {
            let log = open_existing_log(cli)?;
            println!("{}", log.current_cursor()?);
        }

        Commands::Info => {
            let log = open_existing_log(cli)?;
            let stats = log.stats()?;
            let occupied = log.read_all()?.iter().filter(|r| !r.is_zeroed()).count();

            println!("\n{:=^50}", " PACKED LOG INFO ");
            println!("{:<25} {:?}", "STORAGE FILE:", cli.storage);
            println!("{:-<50}", ""); // Separator

            println!("{:<25} {}", "CAPACITY:", stats.capacity);
            println!("{:<25} {}", "CURSOR:", stats.cursor);
            println!("{:<25} {}", "NON-ZERO SLOTS:", occupied);
            println!("{:<25} {} bytes", "PAYLOAD SIZE:", PAYLOAD_SIZE);
            println!("{:<25} {} bytes", "WORD SIZE:", WORD_SIZE);
            println!(
                "{:<25} {} bytes",
                "SLOT TABLE SIZE:",
                stats.capacity * SLOT_SIZE
            );

            println!("{:=<50}", ""); // Footer
        }
    }

    Ok(())
}
