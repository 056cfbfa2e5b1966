use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Major, Standing};

/// Student profile, 1:1 with an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub user_id: String,
    pub date_of_birth: NaiveDate,
    pub major: Major,
    pub standing: Standing,
    pub credits: u32,
    pub created_at: String,
}

/// DTO for the student registration form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRegisterDto {
    pub date_of_birth: NaiveDate,
    pub major: Major,
    pub standing: Standing,
    pub credits: u32,
}

impl Default for StudentRegisterDto {
    fn default() -> Self {
        Self {
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"),
            major: Major::Math,
            standing: Standing::Freshman,
            credits: 0,
        }
    }
}

impl StudentRegisterDto {
    pub fn validate(&self) -> Result<(), String> {
        validate_date_of_birth(self.date_of_birth)
    }
}

/// The registration forms accept birth dates between 1920 and today.
pub fn validate_date_of_birth(date_of_birth: NaiveDate) -> Result<(), String> {
    let earliest = NaiveDate::from_ymd_opt(1920, 1, 1).expect("valid date");
    let today = chrono::Utc::now().date_naive();
    if date_of_birth < earliest {
        return Err("Date of birth cannot be before 1920".into());
    }
    if date_of_birth > today {
        return Err("Date of birth cannot be in the future".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dto_is_valid() {
        assert!(StudentRegisterDto::default().validate().is_ok());
    }

    #[test]
    fn test_date_of_birth_window() {
        let too_early = NaiveDate::from_ymd_opt(1919, 12, 31).unwrap();
        assert!(validate_date_of_birth(too_early).is_err());

        let future = chrono::Utc::now().date_naive() + chrono::Duration::days(1);
        assert!(validate_date_of_birth(future).is_err());

        let fine = NaiveDate::from_ymd_opt(1995, 6, 15).unwrap();
        assert!(validate_date_of_birth(fine).is_ok());
    }
}
