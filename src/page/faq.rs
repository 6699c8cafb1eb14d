//! FAQ accordion on the about page.

use crate::dom::{
    Document,
    NodeId,
};

use super::ACTIVE_CLASS;

/// Class of the clickable FAQ question rows.
const QUESTION_CLASS: &str = "faq-question";

/// A question was activated.
///
/// At most one question is open at a time: every other question closes, and
/// activating the already-open question closes it too.
pub fn toggle_question(doc: &mut impl Document, question: NodeId) {
    let was_open = doc.has_class(question, ACTIVE_CLASS);

    for other in doc.query_by_class(QUESTION_CLASS) {
        doc.remove_class(other, ACTIVE_CLASS);
    }
    if !was_open {
        doc.add_class(question, ACTIVE_CLASS);
    }
}
