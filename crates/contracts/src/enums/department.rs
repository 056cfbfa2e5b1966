use serde::{Deserialize, Serialize};

/// Department an instructor teaches in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Math,
    English,
    Science,
    Technology,
    Law,
    Art,
    Business,
    Health,
}

impl Department {
    pub fn code(&self) -> &'static str {
        match self {
            Department::Math => "Math",
            Department::English => "English",
            Department::Science => "Science",
            Department::Technology => "Technology",
            Department::Law => "Law",
            Department::Art => "Art",
            Department::Business => "Business",
            Department::Health => "Health",
        }
    }

    pub fn all() -> Vec<Department> {
        vec![
            Department::Math,
            Department::English,
            Department::Science,
            Department::Technology,
            Department::Law,
            Department::Art,
            Department::Business,
            Department::Health,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Department::all().into_iter().find(|d| d.code() == code)
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for department in Department::all() {
            assert_eq!(Department::from_code(department.code()), Some(department));
        }
        assert_eq!(Department::from_code("Other"), None);
    }
}
