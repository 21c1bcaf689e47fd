//! Dataset id generation.

use rand::Rng;

/// Length of a generated dataset id.
pub const GENERATED_ID_LEN: usize = 6;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a random base-36 id fragment.
///
/// Best-effort uniqueness only; a collision shadows a dataset inside the
/// engine but cannot corrupt state, which is acceptable at demo scale.
pub fn generate_dataset_id() -> String {
    let mut rng = rand::rng();
    (0..GENERATED_ID_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// Caller-supplied id when present and non-empty, else a generated one.
pub fn resolve_dataset_id(requested: Option<&str>) -> String {
    match requested {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => generate_dataset_id(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_base36_fragments() {
        let id = generate_dataset_id();
        assert_eq!(id.len(), GENERATED_ID_LEN);
        assert!(id.bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn requested_id_wins() {
        assert_eq!(resolve_dataset_id(Some("abc")), "abc");
    }

    #[test]
    fn empty_or_absent_id_is_generated() {
        assert_eq!(resolve_dataset_id(Some("")).len(), GENERATED_ID_LEN);
        assert_eq!(resolve_dataset_id(None).len(), GENERATED_ID_LEN);
    }
}
