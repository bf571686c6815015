//! Amount and text display helpers

use std::collections::HashMap;

/// Atoms per coin
pub const ATOMS_PER_COIN: i64 = 100_000_000;

/// Convert an atom amount to whole coins
pub fn amount_coin(atoms: i64) -> f64 {
    atoms as f64 / ATOMS_PER_COIN as f64
}

/// Format an atom amount with thousands grouping and up to eight decimals,
/// trailing zeros trimmed
pub fn format_amount(atoms: i64) -> String {
    format_atoms(atoms, true)
}

/// Format an atom amount without thousands grouping
pub fn format_amount_plain(atoms: i64) -> String {
    format_atoms(atoms, false)
}

fn format_atoms(atoms: i64, grouped: bool) -> String {
    let sign = if atoms < 0 { "-" } else { "" };
    let abs = atoms.unsigned_abs();
    let whole = abs / ATOMS_PER_COIN as u64;
    let frac = abs % ATOMS_PER_COIN as u64;

    let whole_text = if grouped {
        group_thousands(whole)
    } else {
        whole.to_string()
    };

    if frac == 0 {
        return format!("{}{}", sign, whole_text);
    }

    let mut frac_text = format!("{:08}", frac);
    while frac_text.ends_with('0') {
        frac_text.pop();
    }

    format!("{}{}.{}", sign, whole_text, frac_text)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Trim trailing zeros from an already-converted coin amount, keeping at
/// most eight decimals
pub fn remove_trailing_zeros(value: f64) -> String {
    let mut text = format!("{:.8}", value);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }

    text
}

/// Shannon entropy of a string, in bits per symbol
pub fn shannon_entropy(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let mut occurrences: HashMap<char, usize> = HashMap::new();
    for c in text.chars() {
        *occurrences.entry(c).or_insert(0) += 1;
    }

    let total = text.chars().count() as f64;
    let mut entropy = 0.0;
    for count in occurrences.values() {
        let p = *count as f64 / total;
        entropy += p * p.log2();
    }

    -entropy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_coin() {
        assert_eq!(amount_coin(ATOMS_PER_COIN), 1.0);
        assert_eq!(amount_coin(150_000_000), 1.5);
        assert_eq!(amount_coin(0), 0.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(ATOMS_PER_COIN), "1");
        assert_eq!(format_amount(150_000_000), "1.5");
        assert_eq!(format_amount(123_456_789), "1.23456789");
        assert_eq!(format_amount(1_234_567_800_000_000), "12,345,678");
        assert_eq!(format_amount(-250_000_000), "-2.5");
    }

    #[test]
    fn test_format_amount_plain() {
        assert_eq!(format_amount_plain(1_234_567_800_000_000), "12345678");
        assert_eq!(format_amount_plain(100_000_001), "1.00000001");
    }

    #[test]
    fn test_remove_trailing_zeros() {
        assert_eq!(remove_trailing_zeros(1.5), "1.5");
        assert_eq!(remove_trailing_zeros(2.0), "2");
        assert_eq!(remove_trailing_zeros(0.12345678), "0.12345678");
        assert_eq!(remove_trailing_zeros(-3.1400), "-3.14");
    }

    #[test]
    fn test_shannon_entropy() {
        assert_eq!(shannon_entropy(""), 0.0);
        assert_eq!(shannon_entropy("aaaa"), 0.0);
        assert_eq!(shannon_entropy("ab"), 1.0);
        assert!(shannon_entropy("correct horse battery staple") > 3.0);
    }
}
