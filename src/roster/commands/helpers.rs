use crate::error::{Result, RosterError};
use crate::store::{RecordStore, StorageBackend};

/// Shortest id prefix accepted in place of a full id.
pub const MIN_PREFIX_LEN: usize = 4;

/// Resolve user input to a stored id.
///
/// An exact id always wins. Otherwise a prefix of at least
/// [`MIN_PREFIX_LEN`] characters is accepted when exactly one id starts with it.
pub fn resolve_id<B: StorageBackend>(
    store: &RecordStore<B>,
    input: &str,
) -> Result<Option<String>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    if store.get(input).is_some() {
        return Ok(Some(input.to_string()));
    }
    if input.chars().count() < MIN_PREFIX_LEN {
        return Ok(None);
    }

    let mut matches = store.ids_with_prefix(input);
    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        n => Err(RosterError::InvalidInput(format!(
            "Id prefix '{}' matches {} students, use more characters",
            input, n
        ))),
    }
}
