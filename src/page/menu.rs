//! Menu-page filtering: category buttons showing and hiding recipe cards.

use crate::dom::{
    Document,
    NodeId,
};

use super::ACTIVE_CLASS;

/// Class of filterable recipe cards.
const MENU_ITEM_CLASS: &str = "menu-item";
/// Class of the filter buttons.
const FILTER_BTN_CLASS: &str = "filter-btn";
/// Class added to cards that passed the filter.
const VISIBLE_CLASS: &str = "visible";
/// Attribute naming the categories a card belongs to.
const CATEGORY_ATTR: &str = "data-category";
/// Attribute naming the category a button filters by.
const FILTER_ATTR: &str = "data-filter";

/// Filter value that shows every card.
pub const ALL_FILTER: &str = "all";

/// Show the cards matching `filter` and hide the rest.
///
/// A card matches when `filter` is [`ALL_FILTER`] or a substring of its
/// `data-category` attribute (a card may belong to several categories).
pub fn apply_filter(doc: &mut impl Document, filter: &str) {
    for item in doc.query_by_class(MENU_ITEM_CLASS) {
        let categories = doc.attr(item, CATEGORY_ATTR).unwrap_or_default();
        if filter == ALL_FILTER || categories.contains(filter) {
            doc.set_style(item, "display", "block");
            doc.add_class(item, VISIBLE_CLASS);
        } else {
            doc.set_style(item, "display", "none");
            doc.remove_class(item, VISIBLE_CLASS);
        }
    }
}

/// Mark `button` as the active filter button, clearing every other one.
pub fn activate_button(doc: &mut impl Document, button: NodeId) {
    for other in doc.query_by_class(FILTER_BTN_CLASS) {
        doc.remove_class(other, ACTIVE_CLASS);
    }
    doc.add_class(button, ACTIVE_CLASS);
}

/// A filter button was activated: apply its filter and highlight it.
///
/// A button without a `data-filter` attribute falls back to showing
/// everything.
pub fn select_filter(doc: &mut impl Document, button: NodeId) {
    let filter = doc.attr(button, FILTER_ATTR).unwrap_or_else(|| ALL_FILTER.to_string());
    apply_filter(doc, &filter);
    activate_button(doc, button);
}
