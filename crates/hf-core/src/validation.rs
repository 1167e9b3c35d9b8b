//! Caller-side input gates.
//!
//! The store and resolver assume valid input and never re-validate. Every
//! presentation layer runs these checks before invoking them.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::entities::NewTechnician;
use crate::enums::ApplianceKind;
use crate::errors::CoreError;

/// Free-text descriptions must be longer than this once trimmed.
pub const MIN_DESCRIPTION_CHARS: usize = 5;

/// Phone numbers carry a two-digit area code plus 8 or 9 digits.
pub const PHONE_DIGITS_MIN: usize = 10;
pub const PHONE_DIGITS_MAX: usize = 11;

/// Upper bound on the decoded payment proof attachment.
pub const MAX_PAYMENT_PROOF_BYTES: usize = 2 * 1024 * 1024;

/// Accept a free-text symptom description for AI diagnosis.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the trimmed text has
/// [`MIN_DESCRIPTION_CHARS`] characters or fewer.
pub fn validate_description(text: &str) -> Result<&str, CoreError> {
    let trimmed = text.trim();
    if trimmed.chars().count() > MIN_DESCRIPTION_CHARS {
        Ok(trimmed)
    } else {
        Err(CoreError::Validation(format!(
            "description must be longer than {MIN_DESCRIPTION_CHARS} characters"
        )))
    }
}

/// Strip everything but ASCII digits and check the digit count.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the digit count is outside
/// [`PHONE_DIGITS_MIN`]..=[`PHONE_DIGITS_MAX`].
pub fn normalize_phone(raw: &str) -> Result<String, CoreError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if (PHONE_DIGITS_MIN..=PHONE_DIGITS_MAX).contains(&digits.len()) {
        Ok(digits)
    } else {
        Err(CoreError::Validation(format!(
            "phone must have {PHONE_DIGITS_MIN} or {PHONE_DIGITS_MAX} digits (area code + number), got {}",
            digits.len()
        )))
    }
}

/// Trim a city name; empty input is rejected.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the trimmed city is empty.
pub fn validate_city(city: &str) -> Result<&str, CoreError> {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        Err(CoreError::Validation("city must not be empty".into()))
    } else {
        Ok(trimmed)
    }
}

/// Check a payment proof given as a data URL (`data:<mime>;base64,<payload>`)
/// or a bare base64 payload.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the payload is not base64 or decodes to
/// more than [`MAX_PAYMENT_PROOF_BYTES`].
pub fn validate_payment_proof(proof: &str) -> Result<(), CoreError> {
    let payload = proof
        .split_once(";base64,")
        .map_or(proof, |(_, payload)| payload)
        .trim();
    if payload.is_empty() {
        return Err(CoreError::Validation("payment proof is empty".into()));
    }
    // cheap bound before decoding
    if base64::decoded_len_estimate(payload.len()) > MAX_PAYMENT_PROOF_BYTES + 3 {
        return Err(CoreError::Validation(
            "payment proof exceeds the 2 MiB limit".into(),
        ));
    }
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| CoreError::Validation(format!("payment proof is not base64: {e}")))?;
    if bytes.len() > MAX_PAYMENT_PROOF_BYTES {
        return Err(CoreError::Validation(
            "payment proof exceeds the 2 MiB limit".into(),
        ));
    }
    Ok(())
}

/// Validate and normalize a registration form.
///
/// Name and city are trimmed, the phone is reduced to digits, and duplicate
/// specialties are dropped (first occurrence wins). The city is case-folded
/// later by the store on write.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the first failing field.
pub fn validate_registration(
    name: &str,
    phone: &str,
    city: &str,
    specialties: &[ApplianceKind],
    payment_proof: Option<&str>,
) -> Result<NewTechnician, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("name must not be empty".into()));
    }
    let phone = normalize_phone(phone)?;
    let city = validate_city(city)?;
    let Some(proof) = payment_proof else {
        return Err(CoreError::Validation(
            "payment proof of the registration fee is required".into(),
        ));
    };
    validate_payment_proof(proof)?;

    let mut unique = Vec::with_capacity(specialties.len());
    for kind in specialties {
        if !unique.contains(kind) {
            unique.push(*kind);
        }
    }
    if unique.is_empty() {
        return Err(CoreError::Validation(
            "select at least one specialty".into(),
        ));
    }

    Ok(NewTechnician {
        name: name.to_string(),
        phone,
        city: city.to_string(),
        specialties: unique,
        payment_proof: Some(proof.to_string()),
    })
}

/// Check a registration fee entered by an admin: a non-negative decimal with at
/// most two fractional digits, `.` or `,` as separator. Returns it with `.`.
///
/// # Errors
///
/// Returns `CoreError::Validation` for anything else.
pub fn validate_fee(raw: &str) -> Result<String, CoreError> {
    let normalized = raw.trim().replace(',', ".");
    let (whole, frac) = normalized
        .split_once('.')
        .map_or((normalized.as_str(), ""), |(w, f)| (w, f));
    let digits_ok = !whole.is_empty()
        && whole.chars().all(|c| c.is_ascii_digit())
        && frac.len() <= 2
        && frac.chars().all(|c| c.is_ascii_digit());
    if digits_ok {
        Ok(normalized)
    } else {
        Err(CoreError::Validation(format!("invalid fee '{raw}'")))
    }
}
