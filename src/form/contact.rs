//! Contact Form Validation - Field constraints and per-field errors
//!
//! The contact form's client-side validation contract. Every field is
//! trimmed before checking; violations surface one error per field and
//! block submission - invalid input never reaches the submission
//! service. Lengths are Unicode scalar counts, not bytes.
//!
//! | field   | constraint                        |
//! |---------|-----------------------------------|
//! | name    | required, 1-100 chars             |
//! | email   | required, valid email, <=255 chars|
//! | company | optional, <=100 chars             |
//! | phone   | optional, <=20 chars              |
//! | message | required, 1-2000 chars            |

// =============================================================================
// FIELD LIMITS
// =============================================================================

pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 255;
pub const COMPANY_MAX_CHARS: usize = 100;
pub const PHONE_MAX_CHARS: usize = 20;
pub const MESSAGE_MAX_CHARS: usize = 2000;

// =============================================================================
// TYPES
// =============================================================================

/// The contact form's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Phone,
    Message,
}

/// A single field-level validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
}

/// A validated, trimmed submission. The only way to construct one is
/// [`validate`], so anything holding this type has passed the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: String,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Validate a draft against the field constraints.
///
/// Returns the trimmed submission, or one error per violated field in
/// field order (name, email, company, phone, message).
pub fn validate(draft: &ContactDraft) -> Result<ContactSubmission, Vec<FieldError>> {
    let name = draft.name.trim();
    let email = draft.email.trim();
    let company = draft.company.trim();
    let phone = draft.phone.trim();
    let message = draft.message.trim();

    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(FieldError {
            field: Field::Name,
            message: "Name is required",
        });
    } else if name.chars().count() > NAME_MAX_CHARS {
        errors.push(FieldError {
            field: Field::Name,
            message: "Name must be less than 100 characters",
        });
    }

    if email.chars().count() > EMAIL_MAX_CHARS {
        errors.push(FieldError {
            field: Field::Email,
            message: "Email must be less than 255 characters",
        });
    } else if !is_valid_email(email) {
        errors.push(FieldError {
            field: Field::Email,
            message: "Invalid email address",
        });
    }

    if company.chars().count() > COMPANY_MAX_CHARS {
        errors.push(FieldError {
            field: Field::Company,
            message: "Company name must be less than 100 characters",
        });
    }

    if phone.chars().count() > PHONE_MAX_CHARS {
        errors.push(FieldError {
            field: Field::Phone,
            message: "Phone must be less than 20 characters",
        });
    }

    if message.is_empty() {
        errors.push(FieldError {
            field: Field::Message,
            message: "Message is required",
        });
    } else if message.chars().count() > MESSAGE_MAX_CHARS {
        errors.push(FieldError {
            field: Field::Message,
            message: "Message must be less than 2000 characters",
        });
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        company: (!company.is_empty()).then(|| company.to_string()),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
        message: message.to_string(),
    })
}

/// Structural email check: one `@`, non-empty local part, and a domain
/// with an interior dot. Deliverability is the backend's problem.
fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ContactDraft {
        ContactDraft {
            name: "Jo".to_string(),
            email: "a@b.com".to_string(),
            company: String::new(),
            phone: String::new(),
            message: "hi".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        let submission = validate(&valid_draft()).unwrap();
        assert_eq!(submission.name, "Jo");
        assert_eq!(submission.email, "a@b.com");
        assert_eq!(submission.company, None);
        assert_eq!(submission.phone, None);
        assert_eq!(submission.message, "hi");
    }

    #[test]
    fn test_missing_name_yields_exactly_one_error() {
        let draft = ContactDraft {
            name: String::new(),
            ..valid_draft()
        };

        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Name);
        assert_eq!(errors[0].message, "Name is required");
    }

    #[test]
    fn test_bad_email_yields_exactly_one_error() {
        let draft = ContactDraft {
            email: "bad".to_string(),
            ..valid_draft()
        };

        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Email);
        assert_eq!(errors[0].message, "Invalid email address");
    }

    #[test]
    fn test_whitespace_only_name_is_missing() {
        let draft = ContactDraft {
            name: "   ".to_string(),
            ..valid_draft()
        };

        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors[0].field, Field::Name);
    }

    #[test]
    fn test_over_long_fields() {
        let draft = ContactDraft {
            name: "x".repeat(101),
            company: "y".repeat(101),
            phone: "1".repeat(21),
            message: "z".repeat(2001),
            ..valid_draft()
        };

        let errors = validate(&draft).unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Company, Field::Phone, Field::Message]
        );
    }

    #[test]
    fn test_limits_are_inclusive() {
        let draft = ContactDraft {
            name: "x".repeat(100),
            company: "y".repeat(100),
            phone: "1".repeat(20),
            message: "z".repeat(2000),
            ..valid_draft()
        };

        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn test_char_counts_not_bytes() {
        // 100 multibyte characters are within the name limit
        let draft = ContactDraft {
            name: "é".repeat(100),
            ..valid_draft()
        };

        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn test_values_are_trimmed() {
        let draft = ContactDraft {
            name: "  Jo  ".to_string(),
            email: " a@b.com ".to_string(),
            company: "  Acme  ".to_string(),
            ..valid_draft()
        };

        let submission = validate(&draft).unwrap();
        assert_eq!(submission.name, "Jo");
        assert_eq!(submission.email, "a@b.com");
        assert_eq!(submission.company.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let draft = ContactDraft {
            name: String::new(),
            email: "bad".to_string(),
            message: String::new(),
            ..valid_draft()
        };

        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("no-dot@domain"));
        assert!(!is_valid_email("dot-at-end@domain."));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("has space@b.com"));
    }
}
