use folio_domain::contact::{ContactForm, Fields};

/// A single inline validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
}

impl FieldError {
    /// The field this message belongs under.
    #[must_use]
    pub const fn field(self) -> Fields {
        match self {
            Self::NameRequired => Fields::NAME,
            Self::EmailRequired | Self::EmailInvalid => Fields::EMAIL,
            Self::SubjectRequired => Fields::SUBJECT,
            Self::MessageRequired => Fields::MESSAGE,
        }
    }
}

/// Every failing field of one submission attempt, at most one message per field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message to show under `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: Fields) -> Option<FieldError> {
        self.errors.iter().copied().find(|err| err.field() == field)
    }

    #[must_use]
    pub fn failed(&self) -> Fields {
        self.errors.iter().fold(Fields::empty(), |acc, err| acc | err.field())
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.errors.iter().copied()
    }
}

/// A contact form that passed validation. Only [`validate`] creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    form: ContactForm,
}

impl ValidContact {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.form.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.form.email
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.form.subject
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.form.message
    }
}

/// Checks all four fields without short-circuiting.
///
/// Blank means empty after trimming. The email pattern is matched against the raw value,
/// so surrounding spaces make an address invalid rather than missing.
///
/// # Errors
/// Returns every failing field's message.
pub fn validate(form: &ContactForm) -> Result<ValidContact, FieldErrors> {
    let mut errors = Vec::with_capacity(4);

    if is_blank(&form.name) {
        errors.push(FieldError::NameRequired);
    }
    if is_blank(&form.email) {
        errors.push(FieldError::EmailRequired);
    } else if !is_valid_email(&form.email) {
        errors.push(FieldError::EmailInvalid);
    }
    if is_blank(&form.subject) {
        errors.push(FieldError::SubjectRequired);
    }
    if is_blank(&form.message) {
        errors.push(FieldError::MessageRequired);
    }

    if errors.is_empty() {
        Ok(ValidContact { form: form.clone() })
    } else {
        Err(FieldErrors { errors })
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the domain with at
/// least one character on each side of it.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_page_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some dot must be neither the first nor the last character of the domain.
    domain.char_indices().any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn is_blank(value: &str) -> bool {
    value.trim_matches(is_page_whitespace).is_empty()
}

/// Whitespace as the browser's `trim()` and `\s` see it. Unlike [`char::is_whitespace`]
/// this includes U+FEFF and excludes U+0085.
const fn is_page_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
