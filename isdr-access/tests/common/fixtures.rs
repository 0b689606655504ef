// fixtures.rs: commonly used payloads and card responses

/// A 600 byte payload: three blocks at the default 255 byte cap.
pub fn payload_600() -> Vec<u8> {
    (0..600u32).map(|i| (i % 251) as u8).collect()
}

pub fn payload_600_hex() -> String {
    hex::encode_upper(payload_600())
}

/// ES10 GetEuiccInfo1 style request.
pub fn get_euicc_info_request() -> &'static str {
    "BF2000"
}

pub fn ok() -> &'static str {
    "9000"
}

/// Wrong data in the command field.
pub fn wrong_data() -> &'static str {
    "6A80"
}

/// A response fragment of `len` bytes followed by `sw`.
pub fn fragment(fill: u8, len: usize, sw: &str) -> String {
    format!("{}{}", hex::encode_upper(vec![fill; len]), sw)
}
