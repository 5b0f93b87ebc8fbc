use crate::core::{constants::*, error::SwapResult, Address, SwapError};
use num_bigint::BigUint;
use num_traits::Zero;

/// Parse token symbol or address to an [`Address`]
pub fn parse_token_identifier(input: &str) -> Option<Address> {
    // First try to parse as an address
    if let Ok(address) = input.parse::<Address>() {
        return Some(address);
    }

    // Common token mappings
    match input.to_uppercase().as_str() {
        "TLOS" => Some(NATIVE_ASSET.clone()),
        "WTLOS" => Some(WTLOS.clone()),
        "USDT" => Some(USDT.clone()),
        _ => None,
    }
}

/// Scale a human readable amount ("1.5") to the token's smallest unit.
pub fn parse_units(amount: &str, decimals: u8) -> SwapResult<BigUint> {
    let amount = amount.trim();
    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (amount, ""),
    };

    let valid = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !valid(whole) || !valid(fraction) {
        return Err(SwapError::InvalidAmount(amount.to_string()));
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > decimals as usize {
        return Err(SwapError::InvalidAmount(format!(
            "{} has more than {} decimals",
            amount, decimals
        )));
    }

    let digits = format!("{}{:0<width$}", whole, fraction, width = decimals as usize);
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(BigUint::zero());
    }

    digits
        .parse::<BigUint>()
        .map_err(|e| SwapError::InvalidAmount(format!("{}: {}", amount, e)))
}

/// Render a scaled amount with the token's decimals, trimming trailing zeros.
pub fn format_units(amount: &BigUint, decimals: u8) -> String {
    let unit: BigUint = BigUint::from(10u32).pow(decimals as u32);
    let whole = amount / &unit;
    let fraction = amount % &unit;

    if fraction.is_zero() {
        return format_number(&whole.to_string());
    }

    let fraction = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    format!(
        "{}.{}",
        format_number(&whole.to_string()),
        fraction.trim_end_matches('0')
    )
}

/// Format a string of digits with thousands separators
pub fn format_number(digits: &str) -> String {
    let mut result = String::new();
    let mut count = 0;

    for ch in digits.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    result.chars().rev().collect()
}

/// Serde adapter carrying `BigUint` as a decimal string, the way the
/// routing engine encodes amounts on the wire.
pub mod serde_biguint {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text.parse().map_err(de::Error::custom),
            Raw::Number(n) => Ok(BigUint::from(n)),
        }
    }
}
