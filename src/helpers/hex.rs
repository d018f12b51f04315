use rand::RngCore;

/// Lowercase hex, two characters per byte, high nibble first.
pub fn hex_data(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

pub fn hex_str(s: &str) -> String {
    hex_data(s.as_bytes())
}

pub fn rand_hex(bytes: usize) -> String {
    let mut rand = vec![0u8; bytes];
    rand::thread_rng().fill_bytes(&mut rand);
    hex_data(&rand)
}
