use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::students::validate_date_of_birth;
use crate::enums::Department;

/// Instructor profile, 1:1 with an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructorProfile {
    pub user_id: String,
    pub date_of_birth: NaiveDate,
    pub department: Department,
    pub created_at: String,
}

/// DTO for the instructor registration form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructorRegisterDto {
    pub date_of_birth: NaiveDate,
    pub department: Department,
}

impl Default for InstructorRegisterDto {
    fn default() -> Self {
        Self {
            date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1).expect("valid date"),
            department: Department::Math,
        }
    }
}

impl InstructorRegisterDto {
    pub fn validate(&self) -> Result<(), String> {
        validate_date_of_birth(self.date_of_birth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dto_is_valid() {
        assert!(InstructorRegisterDto::default().validate().is_ok());
    }
}
