use crate::error::ViewError;
use std::fmt;
use std::sync::Arc;

/// A click handler attached to an element.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn() + Send + Sync>);

impl Callback {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
    pub on_click: Option<Callback>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    Element(Element),
    Text(String),
    Fragment(Vec<Node>),
    #[default]
    Empty,
}

pub fn el(tag: &'static str) -> Element {
    Element::new(tag)
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Sets the id only when there is one.
    pub fn maybe_id(self, id: Option<impl Into<String>>) -> Self {
        match id {
            Some(id) => self.id(id),
            None => self,
        }
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.attr("title", title)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn on_click(mut self, callback: Callback) -> Self {
        self.on_click = Some(callback);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Invokes the click handler, if any.
    pub fn click(&self) -> Result<(), ViewError> {
        match &self.on_click {
            Some(callback) => {
                callback.call();
                Ok(())
            }
            None => Err(ViewError::NotClickable(
                self.get_attr("id").unwrap_or(self.tag).to_string(),
            )),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(node: Option<T>) -> Self {
        node.map_or(Node::Empty, Into::into)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Fragment(nodes) => nodes,
            Node::Text(_) | Node::Empty => &[],
        }
    }

    /// Depth-first walk over every element in document order.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_elements(&mut out);
        out
    }

    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            out.push(element);
        }
        for child in self.children() {
            child.collect_elements(out);
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.elements()
            .into_iter()
            .find(|element| element.get_attr("id") == Some(id))
    }

    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|element| element.has_class(class))
            .collect()
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) | Node::Fragment(_) => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
            Node::Empty => {}
        }
    }

    /// Clicks the element with the given id, the way a user would.
    pub fn click(&self, id: &str) -> Result<(), ViewError> {
        self.find_by_id(id)
            .ok_or_else(|| ViewError::NoSuchElement(id.to_string()))?
            .click()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_into(value, true, out);
                    out.push('"');
                }
                out.push('>');
                for child in &element.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(element.tag);
                out.push('>');
            }
            Node::Text(text) => escape_into(text, false, out),
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.write_html(out);
                }
            }
            Node::Empty => {}
        }
    }
}

fn escape_into(text: &str, in_attr: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}
