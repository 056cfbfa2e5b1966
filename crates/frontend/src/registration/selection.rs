//! Role selection for the register page.
//!
//! The page shows three selector buttons and a container with one
//! registration form per role. At most one form is visible at a time;
//! which one is decided here. The mapping from role to form element is
//! an explicit table checked when it is built.

use contracts::enums::RegisterRole;

// ── Role → form table ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleFormEntry {
    pub role: RegisterRole,
    pub form_id: String,
}

/// Ordered mapping from selector role to form element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleFormTable {
    entries: Vec<RoleFormEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    WrongCount { expected: usize, got: usize },
    MissingRole(RegisterRole),
    DuplicateRole(RegisterRole),
    DuplicateFormId(String),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::WrongCount { expected, got } => {
                write!(f, "expected {} role forms, got {}", expected, got)
            }
            TableError::MissingRole(role) => write!(f, "no form mapped for role '{}'", role),
            TableError::DuplicateRole(role) => write!(f, "role '{}' mapped twice", role),
            TableError::DuplicateFormId(id) => write!(f, "form id '{}' used twice", id),
        }
    }
}

impl RoleFormTable {
    /// Build a table, rejecting structural mismatches up front
    pub fn new(entries: Vec<RoleFormEntry>) -> Result<Self, TableError> {
        let expected = RegisterRole::all().len();
        if entries.len() != expected {
            return Err(TableError::WrongCount {
                expected,
                got: entries.len(),
            });
        }

        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.role == entry.role) {
                return Err(TableError::DuplicateRole(entry.role));
            }
            if entries[..i].iter().any(|e| e.form_id == entry.form_id) {
                return Err(TableError::DuplicateFormId(entry.form_id.clone()));
            }
        }

        for role in RegisterRole::all() {
            if !entries.iter().any(|e| e.role == role) {
                return Err(TableError::MissingRole(role));
            }
        }

        Ok(Self { entries })
    }

    /// The register page's table: one form per role, in selector order
    pub fn standard() -> Self {
        let entries = RegisterRole::all()
            .into_iter()
            .map(|role| RoleFormEntry {
                role,
                form_id: format!("register-form-{}", role.code()),
            })
            .collect();
        // By construction: three distinct roles, three distinct ids
        Self { entries }
    }

    pub fn entries(&self) -> &[RoleFormEntry] {
        &self.entries
    }

    pub fn form_id(&self, role: RegisterRole) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.role == role)
            .map(|e| e.form_id.as_str())
    }

    pub fn index_of(&self, role: RegisterRole) -> Option<usize> {
        self.entries.iter().position(|e| e.role == role)
    }
}

// ── Selection state ──────────────────────────────────────────────────────────

/// What the forms container is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No button pressed yet; the container keeps its initial hidden state
    #[default]
    Untouched,
    /// A recognized role was picked; exactly its form is visible
    Chosen(RegisterRole),
    /// An unrecognized label came in; the container is open, no form shown
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Shown(RegisterRole),
    InvalidLabel(String),
}

/// Drives which registration form is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionMachine {
    table: RoleFormTable,
    selection: Selection,
}

impl SelectionMachine {
    pub fn new(table: RoleFormTable) -> Self {
        Self {
            table,
            selection: Selection::Untouched,
        }
    }

    /// Handle a selector label: show the matching form, or nothing for an
    /// unrecognized label. Never panics; the caller may ignore the outcome.
    pub fn select(&mut self, label: &str) -> ToggleOutcome {
        match RegisterRole::from_code(label) {
            Some(role) => {
                if role == RegisterRole::Instructor {
                    log::debug!("ins");
                }
                self.selection = Selection::Chosen(role);
                ToggleOutcome::Shown(role)
            }
            None => {
                log::warn!("Invalid form: {}", label);
                self.selection = Selection::Invalid;
                ToggleOutcome::InvalidLabel(label.to_string())
            }
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn table(&self) -> &RoleFormTable {
        &self.table
    }

    /// The container opens on the first selection and stays open
    pub fn container_visible(&self) -> bool {
        self.selection != Selection::Untouched
    }

    pub fn is_form_visible(&self, role: RegisterRole) -> bool {
        self.selection == Selection::Chosen(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> SelectionMachine {
        SelectionMachine::new(RoleFormTable::standard())
    }

    fn visible_roles(m: &SelectionMachine) -> Vec<RegisterRole> {
        RegisterRole::all()
            .into_iter()
            .filter(|r| m.is_form_visible(*r))
            .collect()
    }

    #[test]
    fn test_untouched_shows_nothing() {
        let m = machine();
        assert!(!m.container_visible());
        assert!(visible_roles(&m).is_empty());
    }

    #[test]
    fn test_user_shows_first_form_only() {
        let mut m = machine();
        let outcome = m.select("user");
        assert_eq!(outcome, ToggleOutcome::Shown(RegisterRole::User));
        assert!(m.container_visible());
        assert_eq!(visible_roles(&m), vec![RegisterRole::User]);
        assert_eq!(m.table().index_of(RegisterRole::User), Some(0));
    }

    #[test]
    fn test_student_shows_second_form_only() {
        let mut m = machine();
        m.select("student");
        assert_eq!(visible_roles(&m), vec![RegisterRole::Student]);
        assert_eq!(m.table().index_of(RegisterRole::Student), Some(1));
    }

    #[test]
    fn test_instructor_shows_third_form_only() {
        let mut m = machine();
        let outcome = m.select("instructor");
        assert_eq!(outcome, ToggleOutcome::Shown(RegisterRole::Instructor));
        assert_eq!(visible_roles(&m), vec![RegisterRole::Instructor]);
        assert_eq!(m.table().index_of(RegisterRole::Instructor), Some(2));
    }

    #[test]
    fn test_bogus_label_hides_all_forms() {
        let mut m = machine();
        let outcome = m.select("bogus");
        assert_eq!(outcome, ToggleOutcome::InvalidLabel("bogus".to_string()));
        assert!(m.container_visible());
        assert!(visible_roles(&m).is_empty());
    }

    #[test]
    fn test_last_selection_wins() {
        let mut m = machine();
        m.select("user");
        m.select("instructor");
        m.select("student");
        assert_eq!(visible_roles(&m), vec![RegisterRole::Student]);

        // An invalid label after a valid one clears the forms again
        m.select("bogus");
        assert!(visible_roles(&m).is_empty());
        assert!(m.container_visible());
    }

    #[test]
    fn test_repeated_selection_is_idempotent() {
        let mut m = machine();
        m.select("student");
        let first = m.selection();
        m.select("student");
        assert_eq!(m.selection(), first);
        assert_eq!(visible_roles(&m), vec![RegisterRole::Student]);
    }

    #[test]
    fn test_standard_table_is_structurally_valid() {
        let entries = RoleFormTable::standard().entries().to_vec();
        assert!(RoleFormTable::new(entries).is_ok());
    }

    #[test]
    fn test_standard_table_maps_each_role_to_its_form() {
        let table = RoleFormTable::standard();
        assert_eq!(table.form_id(RegisterRole::User), Some("register-form-user"));
        assert_eq!(
            table.form_id(RegisterRole::Student),
            Some("register-form-student")
        );
        assert_eq!(
            table.form_id(RegisterRole::Instructor),
            Some("register-form-instructor")
        );
    }

    #[test]
    fn test_table_rejects_wrong_count() {
        let err = RoleFormTable::new(vec![RoleFormEntry {
            role: RegisterRole::User,
            form_id: "only-one".into(),
        }])
        .unwrap_err();
        assert_eq!(err, TableError::WrongCount { expected: 3, got: 1 });
    }

    #[test]
    fn test_table_rejects_duplicate_role() {
        let err = RoleFormTable::new(vec![
            RoleFormEntry {
                role: RegisterRole::User,
                form_id: "a".into(),
            },
            RoleFormEntry {
                role: RegisterRole::User,
                form_id: "b".into(),
            },
            RoleFormEntry {
                role: RegisterRole::Student,
                form_id: "c".into(),
            },
        ])
        .unwrap_err();
        assert_eq!(err, TableError::DuplicateRole(RegisterRole::User));
    }

    #[test]
    fn test_table_rejects_duplicate_form_id() {
        let err = RoleFormTable::new(vec![
            RoleFormEntry {
                role: RegisterRole::User,
                form_id: "same".into(),
            },
            RoleFormEntry {
                role: RegisterRole::Student,
                form_id: "same".into(),
            },
            RoleFormEntry {
                role: RegisterRole::Instructor,
                form_id: "other".into(),
            },
        ])
        .unwrap_err();
        assert_eq!(err, TableError::DuplicateFormId("same".to_string()));
    }
}
