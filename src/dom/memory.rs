//! In-memory document implementation.
//!
//! Used by tests and by the demo binary. Elements keep insertion order, so
//! queries are deterministic.

use std::collections::{
    BTreeMap,
    BTreeSet,
};

use super::{
    Document,
    NodeId,
};

/// Backing data for a single element.
#[derive(Debug, Clone, Default)]
struct ElementData {
    /// Element id, if any.
    id: Option<String>,
    /// Class list.
    classes: BTreeSet<String>,
    /// Attribute map.
    attrs: BTreeMap<String, String>,
    /// Inline style properties.
    styles: BTreeMap<String, String>,
    /// Visible text content.
    text: String,
    /// Control value (select/input).
    value: String,
}

/// Declarative description of an element to insert.
///
/// ```
/// use kfood_guide_web::dom::{ElementSpec, MemoryDocument};
///
/// let mut doc = MemoryDocument::new();
/// doc.insert(ElementSpec::new().id("recipeModal").class("modal"));
/// doc.insert(ElementSpec::new().attr("data-key", "nav.home").text("Home"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    /// 挿入する要素のデータ
    data: ElementData,
}

impl ElementSpec {
    /// 空の要素仕様を作成
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element id.
    #[must_use]
    pub fn id(mut self, id: &str) -> Self {
        self.data.id = Some(id.to_string());
        self
    }

    /// Add a class.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.data.classes.insert(class.to_string());
        self
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.data.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Set the initial text content.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.data.text = text.to_string();
        self
    }

    /// Set the initial control value.
    #[must_use]
    pub fn value(mut self, value: &str) -> Self {
        self.data.value = value.to_string();
        self
    }
}

/// An in-memory [`Document`].
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    /// 挿入順の要素リスト
    nodes: Vec<ElementData>,
    /// ドキュメント全体の言語属性
    lang: String,
    /// ボディスクロールのロック状態
    scroll_locked: bool,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Create an empty document declaring the site's default language.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new(), lang: crate::i18n::DEFAULT_LOCALE.to_string(), scroll_locked: false }
    }

    /// Insert an element and return its handle.
    pub fn insert(&mut self, spec: ElementSpec) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(spec.data);
        id
    }

    /// 要素データへの参照（範囲外は `None`）
    fn node(&self, node: NodeId) -> Option<&ElementData> {
        self.nodes.get(node.0)
    }

    /// 要素データへの可変参照（範囲外は `None`）
    fn node_mut(&mut self, node: NodeId) -> Option<&mut ElementData> {
        self.nodes.get_mut(node.0)
    }
}

impl Document for MemoryDocument {
    fn query_by_attr(&self, name: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, data)| data.attrs.contains_key(name))
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, data)| data.classes.contains(class))
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|data| data.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.node(node)?.attrs.get(name).cloned()
    }

    fn text(&self, node: NodeId) -> String {
        self.node(node).map(|data| data.text.clone()).unwrap_or_default()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(data) = self.node_mut(node) {
            data.text = text.to_string();
        }
    }

    fn value(&self, node: NodeId) -> String {
        self.node(node).map(|data| data.value.clone()).unwrap_or_default()
    }

    fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(data) = self.node_mut(node) {
            data.value = value.to_string();
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node).is_some_and(|data| data.classes.contains(class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(data) = self.node_mut(node) {
            data.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(data) = self.node_mut(node) {
            data.classes.remove(class);
        }
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.node(node)?.styles.get(property).cloned()
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(data) = self.node_mut(node) {
            data.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn lang(&self) -> String {
        self.lang.clone()
    }

    fn set_lang(&mut self, code: &str) {
        self.lang = code.to_string();
    }

    fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}
