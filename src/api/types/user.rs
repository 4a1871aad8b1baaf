//! Request and response bodies of the user endpoints

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use super::error::ApiError;
use crate::domain::{Category, User};
use crate::infrastructure::user::CreateUserCommand;

/// Registration request body
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "fullName must not be blank"))]
    pub full_name: String,

    /// Checked by the document validator, not here
    #[serde(default)]
    pub document: Option<String>,

    #[serde(default)]
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "phone must not be blank"))]
    pub phone: String,

    #[serde(default)]
    #[validate(required(message = "birthdate is required"))]
    pub birthdate: Option<NaiveDate>,

    #[serde(default)]
    #[validate(required(message = "category is required"))]
    pub category: Option<Category>,
}

impl CreateUserDto {
    /// Validate the fields and build the use case command
    pub fn into_command(self) -> Result<CreateUserCommand, ApiError> {
        self.validate()
            .map_err(|e| ApiError::validation(validation_messages(&e)))?;

        let birthdate = self
            .birthdate
            .ok_or_else(|| ApiError::validation(vec!["birthdate is required".to_string()]))?;
        let category = self
            .category
            .ok_or_else(|| ApiError::validation(vec!["category is required".to_string()]))?;

        Ok(CreateUserCommand {
            full_name: self.full_name,
            document: self.document,
            email: self.email,
            phone: self.phone,
            birthdate,
            category,
        })
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }

    Ok(())
}

/// Flatten field errors into sorted messages
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();

    messages.sort();
    messages
}

/// User representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub full_name: String,
    pub active: bool,
    pub document: String,
    pub email: String,
    pub phone: String,
    pub birthdate: NaiveDate,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            full_name: user.full_name().to_string(),
            active: user.is_active(),
            document: user.document().as_str().to_string(),
            email: user.email().to_string(),
            phone: user.phone().to_string(),
            birthdate: user.birthdate(),
            category: user.category(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(json: serde_json::Value) -> CreateUserDto {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_camel_case_body() {
        let command = dto(serde_json::json!({
            "fullName": "Maria Lima",
            "document": "111.444.777-35",
            "email": "maria@example.com",
            "phone": "21999990000",
            "birthdate": "1990-07-14",
            "category": "MOTHER"
        }))
        .into_command()
        .unwrap();

        assert_eq!(command.full_name, "Maria Lima");
        assert_eq!(command.document.as_deref(), Some("111.444.777-35"));
        assert_eq!(command.category, Category::Mother);
        assert_eq!(command.birthdate, NaiveDate::from_ymd_opt(1990, 7, 14).unwrap());
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let err = dto(serde_json::json!({ "document": "11144477735" }))
            .into_command()
            .unwrap_err();

        assert_eq!(err.response.code, "VAL-0001");
        let errors = err.response.errors.unwrap();
        assert!(errors.contains(&"fullName must not be blank".to_string()));
        assert!(errors.contains(&"email must be a valid address".to_string()));
        assert!(errors.contains(&"phone must not be blank".to_string()));
        assert!(errors.contains(&"birthdate is required".to_string()));
        assert!(errors.contains(&"category is required".to_string()));
    }

    #[test]
    fn test_missing_document_passes_field_validation() {
        let command = dto(serde_json::json!({
            "fullName": "Maria Lima",
            "email": "maria@example.com",
            "phone": "21999990000",
            "birthdate": "1990-07-14",
            "category": "DAUGHTER"
        }))
        .into_command()
        .unwrap();

        assert!(command.document.is_none());
    }

    #[test]
    fn test_unknown_category_fails_deserialization() {
        let result: Result<CreateUserDto, _> = serde_json::from_value(serde_json::json!({
            "category": "COUSIN"
        }));

        assert!(result.is_err());
    }
}
