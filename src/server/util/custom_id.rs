use rand::Rng;

/// Length of generated component custom ids.
pub const CUSTOM_ID_LENGTH: usize = 30;

/// Generates a random alphanumeric Discord component custom id.
pub fn generate_custom_id() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..CUSTOM_ID_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_alphanumeric_ids_of_fixed_length() {
        let id = generate_custom_id();

        assert_eq!(id.len(), CUSTOM_ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(id, generate_custom_id());
    }
}
