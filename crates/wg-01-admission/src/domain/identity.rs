//! # Identity Normalizer
//!
//! Canonicalizes raw identity input into a comparable [`Identity`].
//!
//! - Email: trimmed, lower-cased, syntactically checked.
//! - Phone: separators stripped, rewritten to E.164 (`+` and 8-15 digits).
//!
//! Input containing `@` is always treated as an email, so a raw value never
//! normalizes to both kinds.

use super::errors::IdentityError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum total email length (RFC 5321 path limit minus brackets).
pub const MAX_EMAIL_LEN: usize = 254;

/// Maximum email local-part length.
pub const MAX_EMAIL_LOCAL_LEN: usize = 64;

/// Minimum number of digits in an E.164 number (country code included).
pub const MIN_PHONE_DIGITS: usize = 8;

/// Maximum number of digits in an E.164 number.
pub const MAX_PHONE_DIGITS: usize = 15;

/// Maximum number of digits in a country calling code.
pub const MAX_COUNTRY_CODE_DIGITS: usize = 3;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(
        r"^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$"
    )
    .expect("email pattern is valid");
}

/// Which kind of identity a normalized value is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityKind {
    Email,
    Phone,
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Phone => write!(f, "phone"),
        }
    }
}

/// A normalized identity naming a prospective registrant.
///
/// Serialized as its canonical string. Deserialization runs the default
/// normalizer, so every value held by the admission store is canonical.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity {
    kind: IdentityKind,
    value: String,
}

impl Identity {
    /// The identity kind.
    pub fn kind(&self) -> IdentityKind {
        self.kind
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Partially masked form for log output (`a***@x.com`, `+1***71`).
    pub fn redacted(&self) -> String {
        match self.kind {
            IdentityKind::Email => match self.value.split_once('@') {
                Some((local, domain)) => {
                    let first = local.chars().next().unwrap_or('*');
                    format!("{first}***@{domain}")
                }
                None => "***".to_string(),
            },
            IdentityKind::Phone => {
                let keep = 2.min(self.value.len());
                let tail = &self.value[self.value.len() - keep..];
                format!("{}***{}", &self.value[..2.min(self.value.len())], tail)
            }
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for Identity {
    type Error = IdentityError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        normalize(&raw)
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> Self {
        identity.value
    }
}

/// Normalizer configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Country calling code (`"1"`, `"44"`, `"+44"`) applied to
    /// national-format phone numbers. National numbers are rejected when unset.
    pub default_country_code: Option<String>,
}

/// Validates a country calling code: 1-3 digits, no leading zero, optional `+`.
fn canonical_country_code(code: &str) -> Result<String, IdentityError> {
    let digits = code.trim();
    let digits = digits.strip_prefix('+').unwrap_or(digits);

    let well_formed = (1..=MAX_COUNTRY_CODE_DIGITS).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit())
        && !digits.starts_with('0');
    if !well_formed {
        return Err(IdentityError::InvalidCountryCode(code.to_string()));
    }
    Ok(digits.to_string())
}

/// Deterministic identity normalizer.
#[derive(Clone, Debug, Default)]
pub struct IdentityNormalizer {
    config: NormalizerConfig,
}

impl IdentityNormalizer {
    /// Creates a normalizer, canonicalizing the default country code.
    ///
    /// # Errors
    /// - `InvalidCountryCode` if the code is not 1-3 digits without a leading 0
    pub fn new(mut config: NormalizerConfig) -> Result<Self, IdentityError> {
        config.default_country_code = config
            .default_country_code
            .as_deref()
            .map(canonical_country_code)
            .transpose()?;
        Ok(Self { config })
    }

    /// Normalizes a raw identity string.
    ///
    /// # Errors
    /// - `Empty` for blank input
    /// - `InvalidEmail` if the input contains `@` but is not a valid address
    /// - `InvalidPhone` otherwise, if the input is not a valid phone number
    pub fn normalize(&self, raw: &str) -> Result<Identity, IdentityError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdentityError::Empty);
        }

        if trimmed.contains('@') {
            normalize_email(trimmed).map(|value| Identity {
                kind: IdentityKind::Email,
                value,
            })
        } else {
            self.normalize_phone(trimmed).map(|value| Identity {
                kind: IdentityKind::Phone,
                value,
            })
        }
    }

    fn normalize_phone(&self, input: &str) -> Result<String, IdentityError> {
        let invalid = |reason: &str| IdentityError::InvalidPhone(reason.to_string());

        let (international, rest) = match input.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let mut digits = String::with_capacity(rest.len());
        for c in rest.chars() {
            match c {
                '0'..='9' => digits.push(c),
                ' ' | '-' | '.' | '(' | ')' => {}
                _ => return Err(invalid("unexpected character")),
            }
        }

        let e164_digits = if international {
            digits
        } else if let Some(stripped) = digits.strip_prefix("00") {
            stripped.to_string()
        } else {
            let code = self
                .config
                .default_country_code
                .as_deref()
                .ok_or_else(|| invalid("national number without default country code"))?;
            let national = digits.strip_prefix('0').unwrap_or(&digits);
            format!("{code}{national}")
        };

        if e164_digits.starts_with('0') {
            return Err(invalid("country code cannot start with 0"));
        }
        if e164_digits.len() < MIN_PHONE_DIGITS || e164_digits.len() > MAX_PHONE_DIGITS {
            return Err(invalid("wrong number of digits"));
        }

        Ok(format!("+{e164_digits}"))
    }
}

fn normalize_email(input: &str) -> Result<String, IdentityError> {
    let lowered = input.to_lowercase();

    if lowered.len() > MAX_EMAIL_LEN {
        return Err(IdentityError::InvalidEmail("address too long".to_string()));
    }
    if let Some((local, _)) = lowered.split_once('@') {
        if local.len() > MAX_EMAIL_LOCAL_LEN {
            return Err(IdentityError::InvalidEmail("local part too long".to_string()));
        }
    }
    if !EMAIL_RE.is_match(&lowered) {
        return Err(IdentityError::InvalidEmail("malformed address".to_string()));
    }

    Ok(lowered)
}

/// Normalizes with the default configuration (international phone numbers only).
pub fn normalize(raw: &str) -> Result<Identity, IdentityError> {
    IdentityNormalizer::default().normalize(raw)
}
