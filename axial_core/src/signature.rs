//! # Result Signatures
//!
//! A signature is a short content fingerprint of one evaluation: the five
//! inputs plus the five derived values, serialized canonically and hashed with
//! SHA-256. It identifies a result for reproducibility tracking. It is not an
//! authentication token and, truncated to 20 hex characters, is not collision
//! resistant against an adversary.
//!
//! ## Canonical form
//!
//! ```text
//! {"Area": 300000.0, "DCR": 0.30165912518853694, "Gamma": 1.4, "Load": 1000.0, ...}
//! ```
//!
//! - Keys sorted by byte order (uppercase sorts before lowercase)
//! - `", "` between members, `": "` between key and value
//! - Strings JSON-escaped with every non-ASCII character as `\uXXXX`
//! - Floats as their shortest round-trip digits: fixed notation with at least
//!   one fractional digit while the decimal point sits within 16 places,
//!   otherwise scientific with a signed, two-digit-minimum exponent
//! - Non-finite floats serialize as `null`; `calculate` rejects them before a
//!   payload is ever built
//!
//! Values are hashed exactly as computed. Rounding belongs to display code and
//! must never reach the payload.
//!
//! ## Example
//!
//! ```rust
//! use axial_core::calculations::ColumnInput;
//! use axial_core::signature::ResultPayload;
//!
//! let input = ColumnInput::default();
//! let result = input.evaluate();
//! let payload = ResultPayload::from_evaluation(&input, &result);
//!
//! assert_eq!(payload.signature().unwrap(), "f74e980efe97335646f8");
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io;

use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use sha2::{Digest, Sha256};

use crate::calculations::column::{ColumnInput, ColumnResult};
use crate::errors::{CalcError, CalcResult};

/// Number of hex characters kept from the SHA-256 digest
pub const SIGNATURE_LEN: usize = 20;

pub const KEY_LOAD: &str = "Load";
pub const KEY_GAMMA: &str = "Gamma";
pub const KEY_AREA: &str = "Area";
pub const KEY_FC: &str = "fc";
pub const KEY_PHI: &str = "Phi";
pub const KEY_PU: &str = "Pu";
pub const KEY_PN: &str = "Pn";
pub const KEY_PHI_PN: &str = "phiPn";
pub const KEY_DCR: &str = "DCR";
pub const KEY_STATUS: &str = "Status";

/// One value in a result payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayloadValue {
    Number(f64),
    Text(String),
}

impl From<f64> for PayloadValue {
    fn from(value: f64) -> Self {
        PayloadValue::Number(value)
    }
}

impl From<&str> for PayloadValue {
    fn from(value: &str) -> Self {
        PayloadValue::Text(value.to_string())
    }
}

impl From<String> for PayloadValue {
    fn from(value: String) -> Self {
        PayloadValue::Text(value)
    }
}

/// Mapping of field name to value that gets fingerprinted.
///
/// Backed by a `BTreeMap` so iteration is already in canonical key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultPayload {
    fields: BTreeMap<String, PayloadValue>,
}

impl ResultPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the ten-field payload for one evaluation.
    pub fn from_evaluation(input: &ColumnInput, result: &ColumnResult) -> Self {
        ResultPayload::new()
            .with(KEY_LOAD, input.load_kn)
            .with(KEY_GAMMA, input.gamma)
            .with(KEY_AREA, input.area_mm2)
            .with(KEY_FC, input.fc_mpa)
            .with(KEY_PHI, input.phi)
            .with(KEY_PU, result.pu_kn)
            .with(KEY_PN, result.pn_kn)
            .with(KEY_PHI_PN, result.phi_pn_kn)
            .with(KEY_DCR, result.dc_ratio)
            .with(KEY_STATUS, result.status.as_str())
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PayloadValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PayloadValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in canonical order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The exact text that gets hashed.
    pub fn canonical_json(&self) -> CalcResult<String> {
        let mut buf = Vec::with_capacity(32 * self.fields.len() + 2);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, CanonicalFormatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Truncated SHA-256 fingerprint of [`ResultPayload::canonical_json`].
    pub fn signature(&self) -> CalcResult<String> {
        signature(self)
    }
}

/// Compute the 20-character lowercase hex signature of a payload.
pub fn signature(payload: &ResultPayload) -> CalcResult<String> {
    let mut hex = sha256_hex(&payload.canonical_json()?);
    hex.truncate(SIGNATURE_LEN);
    Ok(hex)
}

fn sha256_hex(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// `serde_json` formatter producing the canonical layout.
///
/// Only separators, floats and string fragments differ from the compact
/// formatter. `serde_json` writes non-finite floats as `null` before this
/// formatter is consulted.
struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_float(value).as_bytes())
    }

    /// Printable ASCII passes through, everything else becomes `\uXXXX`
    /// (UTF-16 code units, surrogate pairs above the BMP).
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Canonical text for a float.
///
/// Uses the shortest digit string that round-trips to the same `f64`, so equal
/// values always produce equal text.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let (digits, exponent) = shortest_digits(value.abs());
    let decimal_point = exponent + 1;
    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }

    if decimal_point <= -4 || decimal_point > 16 {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        let _ = write!(out, "e{}{:02}", sign, exponent.abs());
    } else if decimal_point <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat(decimal_point.unsigned_abs() as usize));
        out.push_str(&digits);
    } else {
        let point = decimal_point as usize;
        if point >= digits.len() {
            out.push_str(&digits);
            out.push_str(&"0".repeat(point - digits.len()));
            out.push_str(".0");
        } else {
            out.push_str(&digits[..point]);
            out.push('.');
            out.push_str(&digits[point..]);
        }
    }

    out
}

/// Shortest round-trip significant digits and the base-10 exponent of the
/// first digit, e.g. `1400.0` gives `("14", 3)`.
///
/// Among equally short candidates the one nearest the exact value wins, with
/// exact ties going to the even digit. `{:e}` alone can round a tie upward.
fn shortest_digits(value: f64) -> (String, i32) {
    let shortest = split_scientific(&format!("{:e}", value));
    let precision = shortest.0.len().saturating_sub(1);
    let nearest = format!("{:.*e}", precision, value);

    if nearest.parse::<f64>().ok() == Some(value) {
        split_scientific(&nearest)
    } else {
        shortest
    }
}

fn split_scientific(sci: &str) -> (String, i32) {
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci, "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exponent.parse().unwrap_or(0))
}
