use crate::storage_engine::constants::PAYLOAD_SIZE;
use crate::storage_engine::{PackedLogError, Result};

/// Fits an arbitrary message into a fixed-size payload, zero-padding short
/// messages.
///
/// Messages longer than `PAYLOAD_SIZE` are cut to size when `truncate` is
/// set and rejected with `InvalidLength` otherwise.
pub fn fit_payload(message: &[u8], truncate: bool) -> Result<[u8; PAYLOAD_SIZE]> {
    if message.len() > PAYLOAD_SIZE && !truncate {
        return Err(PackedLogError::InvalidLength {
            expected: PAYLOAD_SIZE,
            actual: message.len(),
        });
    }

    let len = message.len().min(PAYLOAD_SIZE);
    let mut payload = [0u8; PAYLOAD_SIZE];
    payload[..len].copy_from_slice(&message[..len]);
    Ok(payload)
}
