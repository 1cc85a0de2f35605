//! Contact form state and `mailto:` composition
//!
//! The contact form never talks to a server. Submitting it builds a
//! `mailto:` URI addressed to the deployment's recipient and hands the
//! document over to the visitor's mail client.

use std::fmt;

use thiserror::Error;

/// One of the three contact form inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// HTML `id`/`name` of the input
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("the {0} field is required")]
    MissingField(ContactField),
    #[error("invalid mail recipient: {0:?}")]
    InvalidRecipient(String),
}

/// A mail address the form may send to.
///
/// Only a shape check: one `@`, non-empty local part, dotted domain and none
/// of the characters that would break out of the `mailto:` path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipient(String);

impl Recipient {
    pub fn parse(address: &str) -> Result<Self, ContactFormError> {
        let invalid = || ContactFormError::InvalidRecipient(address.to_string());

        if address
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '?' | '&' | '#' | '/' | '%'))
        {
            return Err(invalid());
        }

        let (local, domain) = address.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.contains('@') {
            return Err(invalid());
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(invalid());
        }

        Ok(Self(address.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Values typed into the contact form.
///
/// Lives for the page lifetime; submitting does not clear it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// First empty field, matching what the browser's `required` check blocks
    pub fn first_missing(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    #[cfg(test)]
    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    pub fn subject(&self) -> String {
        format!("Enquiry from {}", self.name)
    }

    /// Message followed by an attribution footer
    pub fn body(&self) -> String {
        format!("{}\n\nFrom: {} ({})", self.message, self.name, self.email)
    }

    /// Build the URI the browser navigates to on submit.
    pub fn compose(&self, recipient: &Recipient) -> Result<MailtoUri, ContactFormError> {
        if let Some(field) = self.first_missing() {
            return Err(ContactFormError::MissingField(field));
        }

        Ok(MailtoUri(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body()),
        )))
    }
}

/// A composed `mailto:` URI with percent-encoded query parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoUri(String);

impl MailtoUri {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Address part between `mailto:` and the query
    pub fn recipient(&self) -> &str {
        let rest = self.0.strip_prefix("mailto:").unwrap_or(&self.0);
        rest.split_once('?').map_or(rest, |(address, _)| address)
    }

    /// Decoded value of a query parameter
    pub fn param(&self, key: &str) -> Option<String> {
        let (_, query) = self.0.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| urlencoding::decode(v).ok())
            .map(|v| v.into_owned())
    }
}

impl fmt::Display for MailtoUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
