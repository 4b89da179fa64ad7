use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// A set of contact form fields.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
    pub struct Fields: u8 {
        const NAME = 1 << 0;
        const EMAIL = 1 << 1;
        const SUBJECT = 1 << 2;
        const MESSAGE = 1 << 3;

        const ALL = Self::NAME.bits() | Self::EMAIL.bits() | Self::SUBJECT.bits() | Self::MESSAGE.bits();
    }
}

/// Raw values of the contact form, exactly as typed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
