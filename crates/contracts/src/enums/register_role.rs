use serde::{Deserialize, Serialize};

/// Role selectable on the register page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegisterRole {
    User,
    Student,
    Instructor,
}

impl RegisterRole {
    /// Wire token, also used as the selector-button label key
    pub fn code(&self) -> &'static str {
        match self {
            RegisterRole::User => "user",
            RegisterRole::Student => "student",
            RegisterRole::Instructor => "instructor",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RegisterRole::User => "User",
            RegisterRole::Student => "Student",
            RegisterRole::Instructor => "Instructor",
        }
    }

    /// All roles, in register-page order
    pub fn all() -> Vec<RegisterRole> {
        vec![
            RegisterRole::User,
            RegisterRole::Student,
            RegisterRole::Instructor,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "user" => Some(RegisterRole::User),
            "student" => Some(RegisterRole::Student),
            "instructor" => Some(RegisterRole::Instructor),
            _ => None,
        }
    }

    /// Roles that carry a profile record ("user" is the plain account)
    pub fn is_profile_role(&self) -> bool {
        !matches!(self, RegisterRole::User)
    }
}

impl std::fmt::Display for RegisterRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for role in RegisterRole::all() {
            assert_eq!(RegisterRole::from_code(role.code()), Some(role));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(RegisterRole::from_code("bogus"), None);
        assert_eq!(RegisterRole::from_code(""), None);
        assert_eq!(RegisterRole::from_code("Student"), None);
    }

    #[test]
    fn test_order_is_stable() {
        let codes: Vec<_> = RegisterRole::all().iter().map(|r| r.code()).collect();
        assert_eq!(codes, vec!["user", "student", "instructor"]);
    }

    #[test]
    fn test_profile_roles() {
        assert!(!RegisterRole::User.is_profile_role());
        assert!(RegisterRole::Student.is_profile_role());
        assert!(RegisterRole::Instructor.is_profile_role());
    }
}
