use serde::{Deserialize, Serialize};

/// Academic standing of a student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standing {
    Freshman,
    Sophomore,
    Junior,
    Senior,
    Graduate,
}

impl Standing {
    /// Two-letter wire code
    pub fn code(&self) -> &'static str {
        match self {
            Standing::Freshman => "FR",
            Standing::Sophomore => "SM",
            Standing::Junior => "JR",
            Standing::Senior => "SR",
            Standing::Graduate => "GR",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Standing::Freshman => "Freshman",
            Standing::Sophomore => "Sophomore",
            Standing::Junior => "Junior",
            Standing::Senior => "Senior",
            Standing::Graduate => "Graduate",
        }
    }

    pub fn all() -> Vec<Standing> {
        vec![
            Standing::Freshman,
            Standing::Sophomore,
            Standing::Junior,
            Standing::Senior,
            Standing::Graduate,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Standing::all().into_iter().find(|s| s.code() == code)
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for standing in Standing::all() {
            assert_eq!(Standing::from_code(standing.code()), Some(standing));
        }
        assert_eq!(Standing::from_code("XX"), None);
    }
}
