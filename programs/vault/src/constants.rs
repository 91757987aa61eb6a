pub const VAULT_SEED: &[u8] = b"vault";
