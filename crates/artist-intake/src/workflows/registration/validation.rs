use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::{ValidateEmail, ValidateUrl};

use super::domain::{
    ArtistProfile, Availability, Category, ExperienceLevel, Region, RegistrationSubmission, Skill,
};

pub const NAME_LENGTH: (usize, usize) = (2, 100);
pub const CITY_LENGTH: (usize, usize) = (2, 100);
pub const BIO_LENGTH: (usize, usize) = (50, 1000);
pub const PHONE_MIN_LENGTH: usize = 10;
pub const FEE_MAX: f64 = 100_000.0;
pub const MAX_SKILLS: usize = 10;

/// Form fields that carry their own acceptance rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Category,
    City,
    State,
    Fee,
    Experience,
    Skills,
    Bio,
    Portfolio,
    Availability,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Category => "category",
            Field::City => "city",
            Field::State => "state",
            Field::Fee => "fee",
            Field::Experience => "experience",
            Field::Skills => "skills",
            Field::Bio => "bio",
            Field::Portfolio => "portfolio",
            Field::Availability => "availability",
        }
    }
}

/// Rejected submission: one message per failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: BTreeMap<Field, String>,
}

impl ValidationError {
    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Field name to message map, keyed the way the form names its inputs.
    pub fn field_messages(&self) -> BTreeMap<&'static str, &str> {
        self.errors
            .iter()
            .map(|(field, message)| (field.name(), message.as_str()))
            .collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission failed validation")?;
        let mut separator = ": ";
        for (field, message) in &self.errors {
            write!(f, "{separator}{} ({message})", field.name())?;
            separator = ", ";
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Check every field of `submission` independently and either return the typed
/// profile or the first failing message for each rejected field.
pub fn validate(submission: &RegistrationSubmission) -> Result<ArtistProfile, ValidationError> {
    let mut errors = BTreeMap::new();

    let name = check_length(&submission.name, NAME_LENGTH, "Name")
        .map_err(|message| errors.insert(Field::Name, message))
        .ok();
    let email = check_email(&submission.email)
        .map_err(|message| errors.insert(Field::Email, message))
        .ok();
    let phone = check_phone(&submission.phone)
        .map_err(|message| errors.insert(Field::Phone, message))
        .ok();
    let category = check_choice(
        &submission.category,
        Category::from_label,
        "Please select a category",
        "category",
    )
    .map_err(|message| errors.insert(Field::Category, message))
    .ok();
    let city = check_length(&submission.city, CITY_LENGTH, "City")
        .map_err(|message| errors.insert(Field::City, message))
        .ok();
    let state = check_choice(
        &submission.state,
        Region::from_label,
        "Please select a state",
        "state",
    )
    .map_err(|message| errors.insert(Field::State, message))
    .ok();
    let fee = check_fee(submission.fee)
        .map_err(|message| errors.insert(Field::Fee, message))
        .ok();
    let experience = check_choice(
        &submission.experience,
        ExperienceLevel::from_label,
        "Please select your experience level",
        "experience level",
    )
    .map_err(|message| errors.insert(Field::Experience, message))
    .ok();
    let skills = check_skills(&submission.skills)
        .map_err(|message| errors.insert(Field::Skills, message))
        .ok();
    let bio = check_length(&submission.bio, BIO_LENGTH, "Bio")
        .map_err(|message| errors.insert(Field::Bio, message))
        .ok();
    let portfolio = check_portfolio(&submission.portfolio)
        .map_err(|message| errors.insert(Field::Portfolio, message))
        .ok();
    let availability = check_availability(&submission.availability)
        .map_err(|message| errors.insert(Field::Availability, message))
        .ok();

    match (
        name,
        email,
        phone,
        category,
        city,
        state,
        fee,
        experience,
        skills,
        bio,
        portfolio,
        availability,
    ) {
        (
            Some(name),
            Some(email),
            Some(phone),
            Some(category),
            Some(city),
            Some(state),
            Some(fee),
            Some(experience),
            Some(skills),
            Some(bio),
            Some(portfolio),
            Some(availability),
        ) if errors.is_empty() => Ok(ArtistProfile {
            name,
            email,
            phone,
            category,
            city,
            state,
            fee,
            experience,
            skills,
            bio,
            portfolio,
            availability,
        }),
        _ => Err(ValidationError { errors }),
    }
}

fn check_length(value: &str, (min, max): (usize, usize), label: &str) -> Result<String, String> {
    let length = value.chars().count();
    if length < min {
        return Err(format!("{label} must be at least {min} characters"));
    }
    if length > max {
        return Err(format!("{label} must be less than {max} characters"));
    }
    Ok(value.to_string())
}

fn check_email(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("Email is required".to_string());
    }
    if !value.validate_email() || !has_public_domain(value) {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(value.to_string())
}

/// Dotted domain ending in an alphabetic label of two or more letters.
fn has_public_domain(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

fn check_phone(value: &str) -> Result<String, String> {
    if value.chars().count() < PHONE_MIN_LENGTH {
        return Err(format!(
            "Phone number must be at least {PHONE_MIN_LENGTH} digits"
        ));
    }
    if !is_international_phone(value) {
        return Err("Please enter a valid phone number".to_string());
    }
    Ok(value.to_string())
}

/// Optional `+`, a leading digit 1-9, then at most fifteen further digits.
fn is_international_phone(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) if ('1'..='9').contains(&first) => {}
        _ => return false,
    }
    let rest = chars.as_str();
    rest.len() <= 15 && rest.chars().all(|c| c.is_ascii_digit())
}

fn check_choice<T>(
    value: &str,
    lookup: fn(&str) -> Option<T>,
    required: &str,
    noun: &str,
) -> Result<T, String> {
    if value.is_empty() {
        return Err(required.to_string());
    }
    lookup(value).ok_or_else(|| format!("Unknown {noun} '{value}'"))
}

fn check_fee(value: Option<f64>) -> Result<f64, String> {
    match value {
        Some(fee) if !fee.is_finite() => Err("Fee must be a number".to_string()),
        Some(fee) if fee < 0.0 => Err("Fee must be a positive number".to_string()),
        Some(fee) if fee > FEE_MAX => Err("Fee must be less than $100,000".to_string()),
        Some(fee) => Ok(fee),
        None => Err("Fee must be a number".to_string()),
    }
}

fn check_skills(values: &[String]) -> Result<Vec<Skill>, String> {
    if values.is_empty() {
        return Err("Please select at least one skill".to_string());
    }
    if values.len() > MAX_SKILLS {
        return Err(format!("Please select no more than {MAX_SKILLS} skills"));
    }
    collect_unique(values, Skill::from_label, "skill")
}

fn check_availability(values: &[String]) -> Result<Vec<Availability>, String> {
    if values.is_empty() {
        return Err("Please select at least one availability option".to_string());
    }
    collect_unique(values, Availability::from_label, "availability option")
}

/// Resolve labels to typed values, dropping repeats and keeping first-seen order.
fn collect_unique<T: PartialEq>(
    values: &[String],
    lookup: fn(&str) -> Option<T>,
    noun: &str,
) -> Result<Vec<T>, String> {
    let mut resolved = Vec::with_capacity(values.len());
    for raw in values {
        let value = lookup(raw).ok_or_else(|| format!("Unknown {noun} '{raw}'"))?;
        if !resolved.contains(&value) {
            resolved.push(value);
        }
    }
    Ok(resolved)
}

fn check_portfolio(value: &str) -> Result<Option<String>, String> {
    if value.is_empty() {
        return Ok(None);
    }
    if !value.validate_url() {
        return Err("Please enter a valid URL".to_string());
    }
    Ok(Some(value.to_string()))
}
