//! Validation of person attributes, shared by natural and legal persons.

use super::{FieldError, collect, strip_non_digits};
use crate::config::MIN_AGE;
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Display/parse format for birth dates.
pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\p{L}\s]+$").unwrap());
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").unwrap());
// Fixed line: area code + 2-5 leading digit. Mobile: area code + leading 9.
static FIXED_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]{2}[2-5]\d{7}$").unwrap());
static MOBILE_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]{2}9\d{8}$").unwrap());

/// Validate a name: non-blank, letters (Unicode) and spaces only.
pub fn name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(FieldError::new("Name cannot be blank."));
    }
    if !NAME_RE.is_match(name) {
        return Err(FieldError::new(
            "Invalid name. Use only letters and spaces, without digits or symbols.",
        ));
    }
    Ok(())
}

/// Validate an email address against a lenient pattern.
pub fn email(email: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() {
        return Err(FieldError::new("Email cannot be blank."));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FieldError::new("Invalid email."));
    }
    Ok(())
}

/// Validate a postal code: exactly 8 digits after stripping formatting.
pub fn postal_code(postal_code: &str) -> Result<(), FieldError> {
    let digits = strip_non_digits(postal_code);
    if digits.is_empty() {
        return Err(FieldError::new("Postal code cannot be blank."));
    }
    if digits.len() != 8 {
        return Err(FieldError::new(
            "Invalid postal code. It must contain 8 digits.",
        ));
    }
    Ok(())
}

/// Validate an address number: non-blank after stripping formatting.
pub fn address_number(address_number: &str) -> Result<(), FieldError> {
    let digits = strip_non_digits(address_number);
    if digits.is_empty() {
        return Err(FieldError::new("Address number cannot be blank."));
    }
    Ok(())
}

/// Validate a phone number: 10 digits (fixed line) or 11 digits (mobile)
/// after stripping formatting.
pub fn phone(phone: &str) -> Result<(), FieldError> {
    let digits = strip_non_digits(phone);
    if digits.is_empty() {
        return Err(FieldError::new("Phone cannot be blank."));
    }
    match digits.len() {
        10 => {
            if !FIXED_PHONE_RE.is_match(&digits) {
                return Err(FieldError::new("Invalid fixed-line phone."));
            }
        }
        11 => {
            if !MOBILE_PHONE_RE.is_match(&digits) {
                return Err(FieldError::new("Invalid mobile phone."));
            }
        }
        _ => {
            return Err(FieldError::new("Phone must contain 10 or 11 digits."));
        }
    }
    Ok(())
}

/// Validate a CPF: exactly 11 digits after stripping formatting.
pub fn cpf(cpf: &str) -> Result<(), FieldError> {
    let digits = strip_non_digits(cpf);
    if digits.is_empty() {
        return Err(FieldError::new("CPF cannot be blank."));
    }
    if digits.len() != 11 {
        return Err(FieldError::new("CPF must contain exactly 11 digits."));
    }
    Ok(())
}

/// Validate a CNPJ: exactly 14 digits after stripping formatting.
pub fn cnpj(cnpj: &str) -> Result<(), FieldError> {
    let digits = strip_non_digits(cnpj);
    if digits.is_empty() || digits.len() != 14 {
        return Err(FieldError::new("Invalid CNPJ. It must contain 14 digits."));
    }
    Ok(())
}

/// Parse and validate a birth date in `dd/mm/yyyy` form: it must not lie
/// in the future and the person must be at least [`MIN_AGE`] years old.
pub fn birth_date(raw: &str) -> Result<NaiveDate, FieldError> {
    let date = NaiveDate::parse_from_str(raw.trim(), BIRTH_DATE_FORMAT)
        .map_err(|_| FieldError::new("Invalid birth date. Use the dd/mm/yyyy format."))?;
    birth_date_value(date)?;
    Ok(date)
}

/// Validate an already-parsed birth date against the future/minimum-age
/// rules.
pub fn birth_date_value(date: NaiveDate) -> Result<(), FieldError> {
    let today = Local::now().date_naive();
    if date > today {
        return Err(FieldError::new("Birth date cannot be in the future."));
    }

    let mut age = today.year() - date.year();
    if (today.month(), today.day()) < (date.month(), date.day()) {
        age -= 1;
    }
    if age < MIN_AGE {
        return Err(FieldError::new(format!(
            "Below the minimum age of {MIN_AGE} years."
        )));
    }
    Ok(())
}

/// Validate the fields shared by both person types, collecting every
/// error.
fn common_fields(
    name_value: &str,
    email_value: &str,
    postal_code_value: &str,
    address_number_value: &str,
    phone_value: &str,
) -> Vec<String> {
    let mut errors = Vec::new();
    collect(&mut errors, name(name_value));
    collect(&mut errors, email(email_value));
    collect(&mut errors, postal_code(postal_code_value));
    collect(&mut errors, address_number(address_number_value));
    collect(&mut errors, phone(phone_value));
    errors
}

/// Validate every field of a natural person.
#[allow(clippy::too_many_arguments)]
pub fn natural_person_fields(
    name_value: &str,
    email_value: &str,
    cpf_value: &str,
    postal_code_value: &str,
    address_number_value: &str,
    phone_value: &str,
    birth_date_value: &str,
) -> Vec<String> {
    let mut errors = common_fields(
        name_value,
        email_value,
        postal_code_value,
        address_number_value,
        phone_value,
    );
    collect(&mut errors, cpf(cpf_value));
    collect(&mut errors, birth_date(birth_date_value).map(|_| ()));
    errors
}

/// Validate every field of a legal person. The trade name is optional
/// and carries no rule of its own.
pub fn legal_person_fields(
    name_value: &str,
    email_value: &str,
    cnpj_value: &str,
    postal_code_value: &str,
    address_number_value: &str,
    phone_value: &str,
) -> Vec<String> {
    let mut errors = common_fields(
        name_value,
        email_value,
        postal_code_value,
        address_number_value,
        phone_value,
    );
    collect(&mut errors, cnpj(cnpj_value));
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn name_accepts_accented_letters() {
        assert!(name("José da Silva").is_ok());
        assert!(name("Maria").is_ok());
    }

    #[test]
    fn name_rejects_digits_and_blank() {
        assert!(name("João 2").is_err());
        assert!(name("   ").is_err());
    }

    #[test]
    fn email_patterns() {
        assert!(email("victor@email.com").is_ok());
        assert!(email("a.b-c@sub.domain.net").is_ok());
        assert!(email("no-at-sign").is_err());
        assert!(email("").is_err());
    }

    #[test]
    fn postal_code_strips_formatting() {
        assert!(postal_code("12345-000").is_ok());
        assert!(postal_code("12345000").is_ok());
        assert!(postal_code("1234").is_err());
    }

    #[test]
    fn phone_fixed_and_mobile() {
        assert!(phone("(31) 3334-5678").is_ok());
        assert!(phone("31999998888").is_ok());
        assert!(phone("3193345678").is_err()); // leading 9 is mobile-only
        assert!(phone("123").is_err());
    }

    #[test]
    fn document_lengths() {
        assert!(cpf("123.456.789-00").is_ok());
        assert!(cpf("1234567890").is_err());
        assert!(cnpj("12.345.678/0001-99").is_ok());
        assert!(cnpj("123456780001").is_err());
    }

    #[test]
    fn birth_date_rules() {
        assert!(birth_date("01/01/1990").is_ok());
        assert!(birth_date("1990-01-01").is_err());

        let tomorrow = Local::now().date_naive() + Duration::days(1);
        let raw = tomorrow.format(BIRTH_DATE_FORMAT).to_string();
        assert!(birth_date(&raw).is_err());

        let underage = Local::now().date_naive() - Duration::days(365 * 10);
        let raw = underage.format(BIRTH_DATE_FORMAT).to_string();
        assert!(birth_date(&raw).is_err());
    }

    #[test]
    fn natural_person_aggregate_collects_all() {
        let errors = natural_person_fields("", "bad", "123", "9", "", "12", "zzz");
        assert!(errors.len() >= 6);
    }
}
