//! Validated document value

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validator::{digit_vector, verify_check_digits, DocumentRejection, CPF_LENGTH};

/// A CPF that passed validation, stored as its 11 normalized digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Document(String);

impl Document {
    /// Parse and validate a raw document, keeping only its digits
    pub fn parse(raw: &str) -> Result<Self, DocumentRejection> {
        let digits = digit_vector(raw)?;
        verify_check_digits(&digits).into_result()?;

        Ok(Self(digits.iter().map(|d| char::from(b'0' + d)).collect()))
    }

    /// The 11 digits without formatting
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Conventional `XXX.XXX.XXX-XX` rendering
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..CPF_LENGTH])
    }
}

impl TryFrom<String> for Document {
    type Error = DocumentRejection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl FromStr for Document {
    type Err = DocumentRejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Document> for String {
    fn from(document: Document) -> Self {
        document.0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
