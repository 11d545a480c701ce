use thiserror::Error;

use crate::types::Kind;

/// Errors raised while driving animals
#[derive(Error, Debug)]
pub enum AnimalError {
    #[error("'{name}' is of kind {found}, expected {expected}")]
    WrongVariant {
        name: String,
        expected: Kind,
        found: Kind,
    },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type AnimalResult<T> = Result<T, AnimalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_variant_message_names_both_kinds() {
        let err = AnimalError::WrongVariant {
            name: "Bob the unknown".to_string(),
            expected: Kind::Dog,
            found: Kind::Animal,
        };
        assert_eq!(err.to_string(), "'Bob the unknown' is of kind animal, expected dog");
    }
}
