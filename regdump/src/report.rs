// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Register dump lines.
//!
//! One line per register: `- <name>: <bits 7..0> (<decimal>)\n\r`, e.g.
//! `- status: 00001110 (14)\n\r`.

use crate::error::Result;
use crate::hw::SerialWrite;

/// Render `value` as eight ASCII digits, most significant bit first.
pub fn binary_digits(value: u8) -> [u8; 8] {
    let mut out = [b'0'; 8];
    for (i, digit) in out.iter_mut().enumerate() {
        if value & (0x80 >> i) != 0 {
            *digit = b'1';
        }
    }
    out
}

/// Render `n` in decimal with no leading zeros, filling `buf` from the right.
///
/// Slot 0 is never written, leaving 15 digits of room; a `u16` needs at most 5.
pub fn decimal_digits(mut n: u16, buf: &mut [u8; 16]) -> &[u8] {
    if n == 0 {
        buf[15] = b'0';
        return &buf[15..];
    }

    let mut i = 15;
    while i > 0 && n > 0 {
        buf[i] = b'0' + (n % 10) as u8;
        n /= 10;
        i -= 1;
    }
    &buf[i + 1..]
}

pub fn print_decimal<W: SerialWrite>(out: &mut W, n: u16) -> Result<()> {
    let mut buf = [0u8; 16];
    for &b in decimal_digits(n, &mut buf) {
        out.put_char(b)?;
    }
    Ok(())
}

/// Print one register dump line.
pub fn print_register<W: SerialWrite>(out: &mut W, name: &str, value: u8) -> Result<()> {
    out.put_str("- ")?;
    out.put_str(name)?;
    out.put_str(": ")?;

    for b in binary_digits(value) {
        out.put_char(b)?;
    }

    out.put_str(" (")?;
    print_decimal(out, value as u16)?;
    out.put_str(")\n\r")
}
