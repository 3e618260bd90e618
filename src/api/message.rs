// Error-producing helpers take either text or an error value

use std::borrow::Cow;

/// Anything that carries a human-readable message
pub trait FaultLike {
    fn message(&self) -> String;
}

impl<E: std::error::Error + ?Sized> FaultLike for E {
    fn message(&self) -> String {
        self.to_string()
    }
}

/// Message argument of `respond_not_found` and `respond_failed_validation`
#[derive(Clone, Copy)]
pub enum Message<'a> {
    Text(&'a str),
    Fault(&'a dyn FaultLike),
}

impl<'a> Message<'a> {
    pub fn fault(fault: &'a impl FaultLike) -> Self {
        Self::Fault(fault)
    }

    /// Only the message text is kept, never the fault's type or source chain
    pub fn into_text(self) -> Cow<'a, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Fault(fault) => Cow::Owned(fault.message()),
        }
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Message<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}
