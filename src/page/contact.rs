//! Contact form validation and submission notices.
//!
//! There is no backend; an accepted submission only produces the success
//! notice and resets the form.

use crate::dom::{
    Document,
    NodeId,
};

/// Notice shown when any field is missing.
pub const ERROR_NOTICE: &str = "Por favor, preencha todos os campos.";
/// Notice shown after an accepted submission.
pub const SUCCESS_NOTICE: &str = "Mensagem enviada com sucesso! Entraremos em contato em breve.";

/// Names of the form fields, in form order.
const FIELD_NAMES: [&str; 4] = ["name", "email", "subject", "message"];

/// The values a visitor typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    /// 名前
    pub name: String,
    /// メールアドレス
    pub email: String,
    /// 件名
    pub subject: String,
    /// 本文
    pub message: String,
}

impl Submission {
    /// Whether every field carries non-whitespace content.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields were present; the form was reset.
    Accepted,
    /// At least one field was blank; the form is untouched.
    Rejected,
}

impl SubmitOutcome {
    /// The user-facing notice for this outcome.
    #[must_use]
    pub const fn notice(self) -> &'static str {
        match self {
            Self::Accepted => SUCCESS_NOTICE,
            Self::Rejected => ERROR_NOTICE,
        }
    }
}

/// Find the form control named `name`.
fn field(doc: &impl Document, name: &str) -> Option<NodeId> {
    doc.query_by_attr("name")
        .into_iter()
        .find(|node| doc.attr(*node, "name").as_deref() == Some(name))
}

/// Read the current form values out of the document.
#[must_use]
pub fn read_submission(doc: &impl Document) -> Submission {
    let value_of = |name: &str| field(doc, name).map(|node| doc.value(node)).unwrap_or_default();
    Submission {
        name: value_of("name"),
        email: value_of("email"),
        subject: value_of("subject"),
        message: value_of("message"),
    }
}

/// The form was submitted.
///
/// Validates the current field values; an accepted submission clears the
/// form, a rejected one leaves the visitor's input in place for correction.
pub fn submit(doc: &mut impl Document) -> SubmitOutcome {
    let submission = read_submission(doc);
    if !submission.is_complete() {
        tracing::debug!("Contact form rejected: incomplete submission");
        return SubmitOutcome::Rejected;
    }

    for name in FIELD_NAMES {
        if let Some(node) = field(doc, name) {
            doc.set_value(node, "");
        }
    }
    tracing::debug!("Contact form accepted");
    SubmitOutcome::Accepted
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use crate::dom::{
        ElementSpec,
        MemoryDocument,
    };

    use super::*;

    fn form_page(name: &str, email: &str, subject: &str, message: &str) -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        doc.insert(ElementSpec::new().attr("name", "name").value(name));
        doc.insert(ElementSpec::new().attr("name", "email").value(email));
        doc.insert(ElementSpec::new().attr("name", "subject").value(subject));
        doc.insert(ElementSpec::new().attr("name", "message").value(message));
        doc
    }

    #[googletest::test]
    fn complete_submission_is_accepted_and_resets_the_form() {
        let mut doc = form_page("Ana", "ana@example.com", "Olá", "Adorei o guia!");

        let outcome = submit(&mut doc);

        expect_that!(outcome, eq(SubmitOutcome::Accepted));
        expect_that!(outcome.notice(), eq(SUCCESS_NOTICE));
        expect_that!(read_submission(&doc), eq(Submission::default()));
    }

    #[rstest]
    #[case::missing_name("", "ana@example.com", "Olá", "msg")]
    #[case::missing_email("Ana", "", "Olá", "msg")]
    #[case::missing_subject("Ana", "ana@example.com", "", "msg")]
    #[case::missing_message("Ana", "ana@example.com", "Olá", "")]
    #[case::whitespace_only("Ana", "ana@example.com", "   ", "msg")]
    fn incomplete_submission_is_rejected_and_kept(
        #[case] name: &str,
        #[case] email: &str,
        #[case] subject: &str,
        #[case] message: &str,
    ) {
        let mut doc = form_page(name, email, subject, message);
        let before = read_submission(&doc);

        let outcome = submit(&mut doc);

        assert_that!(outcome, eq(SubmitOutcome::Rejected));
        assert_that!(outcome.notice(), eq(ERROR_NOTICE));
        // The visitor's input stays in the form for correction.
        assert_that!(read_submission(&doc), eq(before));
    }

    #[googletest::test]
    fn page_without_a_form_reads_empty_and_rejects() {
        let mut doc = MemoryDocument::new();

        expect_that!(read_submission(&doc), eq(Submission::default()));
        expect_that!(submit(&mut doc), eq(SubmitOutcome::Rejected));
    }
}
