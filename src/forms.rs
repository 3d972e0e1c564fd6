//! Submitted HTML forms and their validation.
//!
//! Every field is optional on the wire (`#[serde(default)]`): a missing field
//! is treated like a blank one and reported with the same message.

use serde::Deserialize;

use crate::models::client::ClientFields;
use crate::models::project::{NO_HOSTING, NO_URL, ProjectFields};
use crate::models::task::{NewTask, TaskChanges};

pub const LASTNAME_REQUIRED: &str = "Le nom est obligatoire.";
pub const FIRSTNAME_REQUIRED: &str = "Le prénom est obligatoire.";
pub const EMAIL_REQUIRED: &str = "L'email est obligatoire.";
pub const PASSWORD_REQUIRED: &str = "Le mot de passe est obligatoire.";
pub const CONFIRMATION_REQUIRED: &str = "La confirmation est obligatoire.";
pub const PASSWORD_MISMATCH: &str = "Le mot de passe et la confirmation ne correspondent pas.";
pub const PHONE_REQUIRED: &str = "Le numéro de téléphone est obligatoire.";
pub const NAME_REQUIRED: &str = "Le nom est obligatoire.";
pub const DESCRIPTION_REQUIRED: &str = "La description est obligatoire.";
pub const URL_REQUIRED: &str = "L'URL est obligatoire.";
pub const HOSTING_REQUIRED: &str = "Le serveur d'hébergement est obligatoire.";
pub const STATUS_REQUIRED: &str = "Le statut est obligatoire.";
pub const HOURLY_RATE_REQUIRED: &str = "Le tarif horaire est obligatoire.";
pub const HOURLY_RATE_INVALID: &str = "Le tarif horaire doit être un nombre positif.";
pub const CLIENT_REQUIRED: &str = "Le client est obligatoire.";
pub const TIME_SPENT_REQUIRED: &str = "Le temps passé est obligatoire.";
pub const TIME_SPENT_INVALID: &str = "Le temps passé doit être un nombre positif.";
pub const PROJECT_REQUIRED: &str = "Le projet est obligatoire.";

pub type Validation<T> = Result<T, &'static str>;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(self) -> Validation<Credentials> {
        let email = required(&self.email, EMAIL_REQUIRED)?.to_lowercase();
        let password = required_raw(self.password, PASSWORD_REQUIRED)?;
        Ok(Credentials { email, password })
    }
}

/// Shared by registration and password reset: both ask for the full identity
/// plus a confirmed password.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AccountForm {
    pub lastname: String,
    pub firstname: String,
    pub email: String,
    pub password: String,
    pub confirmation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountFields {
    pub identity: Identity,
    pub password: String,
}

impl AccountForm {
    pub fn validate(self) -> Validation<AccountFields> {
        let identity = Identity::parse(&self.lastname, &self.firstname, &self.email)?;
        let password = required_raw(self.password, PASSWORD_REQUIRED)?;
        let confirmation = required_raw(self.confirmation, CONFIRMATION_REQUIRED)?;
        if password != confirmation {
            return Err(PASSWORD_MISMATCH);
        }
        Ok(AccountFields { identity, password })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub lastname: String,
    pub firstname: String,
    pub email: String,
}

/// Normalised name and email of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub lastname: String,
    pub firstname: String,
    pub email: String,
}

impl Identity {
    fn parse(lastname: &str, firstname: &str, email: &str) -> Validation<Self> {
        Ok(Self {
            lastname: required(lastname, LASTNAME_REQUIRED)?.to_uppercase(),
            firstname: capitalize(required(firstname, FIRSTNAME_REQUIRED)?),
            email: required(email, EMAIL_REQUIRED)?.to_lowercase(),
        })
    }
}

impl ProfileForm {
    pub fn validate(self) -> Validation<Identity> {
        Identity::parse(&self.lastname, &self.firstname, &self.email)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClientForm {
    pub lastname: String,
    pub firstname: String,
    pub enterprise: String,
    pub address: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
    pub phone_number: String,
    pub email: String,
    pub note: String,
}

impl ClientForm {
    /// Creation and edition apply the same rules.
    pub fn validate(self) -> Validation<ClientFields> {
        let lastname = required(&self.lastname, LASTNAME_REQUIRED)?.to_uppercase();
        let firstname = capitalize(required(&self.firstname, FIRSTNAME_REQUIRED)?);
        let phone_number = required(&self.phone_number, PHONE_REQUIRED)?.to_string();
        let email = required(&self.email, EMAIL_REQUIRED)?.to_lowercase();

        Ok(ClientFields {
            lastname,
            firstname,
            enterprise: optional(&self.enterprise),
            address: optional(&self.address),
            zip_code: optional(&self.zip_code),
            city: capitalize(self.city.trim()),
            country: capitalize(self.country.trim()),
            phone_number,
            email,
            note: optional(&self.note),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub url: String,
    pub hosting_server: String,
    pub status: String,
    pub hourly_rate: String,
    pub client: String,
}

impl ProjectForm {
    /// Creation is lenient: URL and hosting fall back to placeholders, the
    /// hourly rate to zero.
    pub fn validate_new(self) -> Validation<ProjectFields> {
        let name = required(&self.name, NAME_REQUIRED)?.to_string();
        let description = required(&self.description, DESCRIPTION_REQUIRED)?.to_string();
        let url = or_default(&self.url, NO_URL);
        let hosting_server = or_default(&self.hosting_server, NO_HOSTING);
        let status = required(&self.status, STATUS_REQUIRED)?.to_string();
        let hourly_rate = match self.hourly_rate.trim() {
            "" => 0.0,
            value => non_negative(value, HOURLY_RATE_INVALID)?,
        };
        let client_id = reference(&self.client, CLIENT_REQUIRED)?;

        Ok(ProjectFields {
            name,
            description,
            url,
            hosting_server,
            status,
            hourly_rate,
            client_id,
        })
    }

    /// Edition requires every field, placeholders included.
    pub fn validate_edit(self) -> Validation<ProjectFields> {
        let name = required(&self.name, NAME_REQUIRED)?.to_string();
        let description = required(&self.description, DESCRIPTION_REQUIRED)?.to_string();
        let url = required(&self.url, URL_REQUIRED)?.to_string();
        let hosting_server = required(&self.hosting_server, HOSTING_REQUIRED)?.to_string();
        let status = required(&self.status, STATUS_REQUIRED)?.to_string();
        let hourly_rate = non_negative(
            required(&self.hourly_rate, HOURLY_RATE_REQUIRED)?,
            HOURLY_RATE_INVALID,
        )?;
        let client_id = reference(&self.client, CLIENT_REQUIRED)?;

        Ok(ProjectFields {
            name,
            description,
            url,
            hosting_server,
            status,
            hourly_rate,
            client_id,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TaskForm {
    pub name: String,
    pub status: String,
    pub time_spent: String,
    pub project: String,
}

impl TaskForm {
    pub fn validate_new(self) -> Validation<NewTask> {
        let name = required(&self.name, NAME_REQUIRED)?.to_string();
        let status = required(&self.status, STATUS_REQUIRED)?.to_string();
        let time_spent = match self.time_spent.trim() {
            "" => 0.0,
            value => non_negative(value, TIME_SPENT_INVALID)?,
        };
        let project_id = reference(&self.project, PROJECT_REQUIRED)?;

        Ok(NewTask {
            name,
            status,
            time_spent,
            project_id,
        })
    }

    pub fn validate_edit(self) -> Validation<TaskChanges> {
        let name = required(&self.name, NAME_REQUIRED)?.to_string();
        let status = required(&self.status, STATUS_REQUIRED)?.to_string();
        let time_spent = non_negative(
            required(&self.time_spent, TIME_SPENT_REQUIRED)?,
            TIME_SPENT_INVALID,
        )?;

        Ok(TaskChanges {
            name,
            status,
            time_spent,
        })
    }
}

fn required<'a>(value: &'a str, message: &'static str) -> Validation<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(message)
    } else {
        Ok(value)
    }
}

/// Passwords are kept byte for byte; only an all-blank value is rejected.
fn required_raw(value: String, message: &'static str) -> Validation<String> {
    if value.trim().is_empty() {
        Err(message)
    } else {
        Ok(value)
    }
}

fn optional(value: &str) -> String {
    value.trim().to_string()
}

fn or_default(value: &str, default: &str) -> String {
    match value.trim() {
        "" => default.to_string(),
        value => value.to_string(),
    }
}

/// Parse a decimal that must be finite and non-negative. Accepts a comma as
/// decimal separator.
fn non_negative(value: &str, message: &'static str) -> Validation<f64> {
    let parsed: f64 = value.trim().replace(',', ".").parse().map_err(|_| message)?;
    if parsed.is_finite() && parsed >= 0.0 {
        Ok(parsed)
    } else {
        Err(message)
    }
}

/// A selected row id: must be a positive integer.
fn reference(value: &str, message: &'static str) -> Validation<i64> {
    match value.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(message),
    }
}

/// First letter upper-case, the rest lower-case.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
