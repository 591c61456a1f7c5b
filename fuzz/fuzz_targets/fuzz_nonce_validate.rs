#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Validate arbitrary payload, nonce, and difficulty combinations.
    // Requires at least 9 bytes: 8 (nonce) + 1 (difficulty).
    if data.len() >= 9 {
        let nonce = u64::from_le_bytes([
            data[0], data[1], data[2], data[3],
            data[4], data[5], data[6], data[7],
        ]);
        let difficulty = data[8];
        let payload = &data[9..];

        // This must never panic regardless of input, including
        // difficulties above 64 (those are simply unmet).
        let accepted = hashpow_engine::valid(payload, nonce, difficulty);

        // Validation must agree with the digest's hex prefix.
        let hash = hashpow_engine::get_hash(payload, nonce);
        let zeros = hash.chars().take_while(|&c| c == '0').count();
        let expected = difficulty <= 64 && usize::from(difficulty) <= zeros;
        assert_eq!(accepted, expected);
    }
});
