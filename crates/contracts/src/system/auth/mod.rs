use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_student: bool,
    pub is_instructor: bool,
}

impl UserInfo {
    /// "First Last", the display name used across the app
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// An account may hold at most one of the two role profiles
    pub fn has_role_profile(&self) -> bool {
        self.is_student || self.is_instructor
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub username: String,
    pub is_student: bool,
    pub is_instructor: bool,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let user = UserInfo {
            id: "1".into(),
            username: "jdoe".into(),
            email: "jdoe@example.com".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            is_student: false,
            is_instructor: false,
        };
        assert_eq!(user.full_name(), "Jane Doe");
        assert!(!user.has_role_profile());
    }
}
