#![no_main]

use libfuzzer_sys::fuzz_target;

use hashpow_crypto::pow_digest;
use hashpow_types::Nonce;

fuzz_target!(|data: &[u8]| {
    // Digest arbitrary payloads with a nonce split off the front.
    // Requires at least 8 bytes for the nonce.
    if data.len() >= 8 {
        let nonce = u64::from_le_bytes([
            data[0], data[1], data[2], data[3],
            data[4], data[5], data[6], data[7],
        ]);
        let payload = &data[8..];

        let digest = pow_digest(payload, Nonce::new(nonce));
        let hex = digest.to_hex();

        // The hex surface is always 64 lowercase hex characters and
        // round-trips back to the digest bytes.
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(usize::from(digest.leading_zero_nibbles()) <= 64);

        // Same inputs, same digest.
        assert_eq!(pow_digest(payload, Nonce::new(nonce)), digest);
    }
});
