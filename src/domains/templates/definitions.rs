//! Built-in letter templates.
//!
//! Placeholder tokens such as `{{PAYER}}` are part of the body and are
//! returned verbatim; filling them in is the caller's job.

use super::catalog::Template;

/// Fallback template served for any unrecognized id.
pub const GENERIC_APPEAL: &str = "GENERIC_APPEAL";

/// Appeal of a denial for late filing.
pub const TIMELY_FILING: &str = "TIMELY_FILING";

const GENERIC_APPEAL_BODY: &str = "## Appeal of Out-of-Network Claim Denial

Payer: {{PAYER}}
Service date: {{SERVICE_DATE}}
Codes: CPT {{CPT_LIST}} | ICD-10 {{ICD_LIST}}

Denial reason: {{DENIAL_REASON}}

Sincerely,
[Patient Initials]
[Member ID last 4]";

const TIMELY_FILING_BODY: &str = "## Appeal: Timely Filing

Payer: {{PAYER}}
Service date: {{SERVICE_DATE}}
Denial reason: {{DENIAL_REASON}}

Sincerely,
[Patient Initials]
[Member ID last 4]";

/// All built-in templates, keyed by id.
pub fn builtin_templates() -> Vec<(&'static str, Template)> {
    vec![
        (
            GENERIC_APPEAL,
            Template::new(
                GENERIC_APPEAL_BODY,
                ["Plan OON benefits language", "Standard reimbursement guidance"],
            ),
        ),
        (
            TIMELY_FILING,
            Template::new(TIMELY_FILING_BODY, ["Plan timely filing policy"]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids() {
        let ids: Vec<_> = builtin_templates().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["GENERIC_APPEAL", "TIMELY_FILING"]);
    }

    #[test]
    fn test_placeholders_kept_verbatim() {
        let templates = builtin_templates();
        let (_, generic) = &templates[0];
        assert!(generic.template_body.contains("{{PAYER}}"));
        assert!(generic.template_body.contains("{{CPT_LIST}}"));
        assert_eq!(generic.citations.len(), 2);
    }
}
