//! Mod-10 check digits for the EAN family. Inputs must be ASCII digits.

fn digit(b: u8) -> u32 {
    u32::from(b - b'0')
}

fn complement(sum: u32) -> u8 {
    ((10 - sum % 10) % 10) as u8
}

/// EAN-13 check digit over 12 data digits: index 0, 2, .. weigh 1 and index 1, 3, .. weigh 3.
pub fn ean13_check_digit(data: &str) -> u8 {
    let sum: u32 = data
        .bytes()
        .enumerate()
        .map(|(idx, b)| digit(b) * if idx % 2 == 0 { 1 } else { 3 })
        .sum();
    complement(sum)
}

/// EAN-8 check digit over 7 data digits, counting positions from 1:
/// odd positions weigh 1 and even positions weigh 3.
pub fn ean8_check_digit(data: &str) -> u8 {
    let sum: u32 = data
        .bytes()
        .enumerate()
        .map(|(idx, b)| {
            let position = idx + 1;
            digit(b) * if position % 2 == 1 { 1 } else { 3 }
        })
        .sum();
    complement(sum)
}
