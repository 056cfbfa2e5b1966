use serde::{Deserialize, Serialize};

/// Field of study a student majors in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Major {
    Math,
    English,
    Science,
    Technology,
    Law,
    Art,
    Business,
    Health,
}

impl Major {
    pub fn code(&self) -> &'static str {
        match self {
            Major::Math => "Math",
            Major::English => "English",
            Major::Science => "Science",
            Major::Technology => "Technology",
            Major::Law => "Law",
            Major::Art => "Art",
            Major::Business => "Business",
            Major::Health => "Health",
        }
    }

    pub fn all() -> Vec<Major> {
        vec![
            Major::Math,
            Major::English,
            Major::Science,
            Major::Technology,
            Major::Law,
            Major::Art,
            Major::Business,
            Major::Health,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Major::all().into_iter().find(|m| m.code() == code)
    }
}

impl std::fmt::Display for Major {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for major in Major::all() {
            assert_eq!(Major::from_code(major.code()), Some(major));
        }
        assert_eq!(Major::from_code("Undecided"), None);
    }
}
