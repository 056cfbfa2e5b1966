//! Register-page structure validator.
//!
//! Walks the live DOM after the page mounts and checks that the markup the
//! selection wiring relies on is actually there: the selector button group,
//! the forms container, and one form element per table entry. Problems are
//! reported as typed issues instead of failing silently.

use contracts::enums::RegisterRole;

use super::selection::RoleFormTable;

// ── Result types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    fn error(&mut self, message: String) {
        self.issues.push(ValidationIssue {
            severity: Severity::Error,
            message,
        });
    }

    fn warning(&mut self, message: String) {
        self.issues.push(ValidationIssue {
            severity: Severity::Warning,
            message,
        });
    }
}

// ── Validator ────────────────────────────────────────────────────────────────

/// Run validation against the live DOM and return a report.
pub fn validate_register_page(table: &RoleFormTable) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(window) = web_sys::window() else {
        report.error("no window available".to_string());
        return report;
    };
    let Some(document) = window.document() else {
        report.error("no document available".to_string());
        return report;
    };

    // Selector button group
    match document.get_element_by_id("register-buttons") {
        Some(group) => {
            for role in RegisterRole::all() {
                let selector = format!("button[data-role='{}']", role.code());
                match group.query_selector(&selector) {
                    Ok(Some(_)) => {}
                    _ => report.error(format!("selector button for '{}' not found", role)),
                }
            }
        }
        None => report.error("selector button group #register-buttons not found".to_string()),
    }

    // Forms container and one form per table entry
    match document
        .query_selector(".register-forms")
        .ok()
        .flatten()
    {
        Some(container) => {
            for entry in table.entries() {
                let selector = format!("#{}", entry.form_id);
                match container.query_selector(&selector) {
                    Ok(Some(_)) => {}
                    _ => report.error(format!(
                        "form '{}' for role '{}' not found in container",
                        entry.form_id, entry.role
                    )),
                }
            }

            let form_count = container
                .query_selector_all(".register-form")
                .map(|list| list.length() as usize)
                .unwrap_or(0);
            if form_count != table.entries().len() {
                report.warning(format!(
                    "container holds {} forms, table maps {}",
                    form_count,
                    table.entries().len()
                ));
            }
        }
        None => report.error("forms container .register-forms not found".to_string()),
    }

    report
}

/// Log every issue; structural problems should be loud during development
pub fn log_report(report: &ValidationReport) {
    if report.is_ok() {
        return;
    }
    log::warn!(
        "register page structure: {} issue(s), {} error(s)",
        report.issues.len(),
        report.error_count()
    );
    for issue in &report.issues {
        match issue.severity {
            Severity::Error => log::error!("register page structure: {}", issue.message),
            Severity::Warning => log::warn!("register page structure: {}", issue.message),
        }
    }
}
