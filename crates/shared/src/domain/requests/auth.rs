use crate::domain::responses::UserType;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct AuthRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
#[validate(schema(function = "validate_company_fields"))]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6))]
    pub password: String,

    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,

    pub user_type: UserType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl RegisterRequest {
    /// Organization details only travel with company registrations.
    pub fn normalized(mut self) -> Self {
        if self.user_type == UserType::Individual {
            self.organization_name = None;
            self.organization_number = None;
            self.address = None;
        }
        self
    }
}

fn validate_company_fields(request: &RegisterRequest) -> Result<(), ValidationError> {
    if request.user_type != UserType::Company {
        return Ok(());
    }

    let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());

    if present(&request.organization_name)
        && present(&request.organization_number)
        && present(&request.address)
    {
        Ok(())
    } else {
        Err(ValidationError::new("company_fields")
            .with_message("Company registrations need name, number and address".into()))
    }
}
