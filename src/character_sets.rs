/// Form-urlencoded character classification for query components
/// Returns: 0=percent-escape, 1=valid passthrough, 2=space
const FORM_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    // Unreserved chars that pass through: a-z, A-Z, 0-9, -, _, ., *
    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = 1;
        i += 1;
    }
    table[b'-' as usize] = 1;
    table[b'_' as usize] = 1;
    table[b'.' as usize] = 1;
    table[b'*' as usize] = 1;

    // Space has its own representation (+) in form encoding
    table[b' ' as usize] = 2;

    table
};

/// Classify a byte for form-urlencoded output (branchless via lookup table)
pub fn classify_form_byte(b: u8) -> u8 {
    FORM_CHAR_TABLE[b as usize]
}
