//! Generic expandable listing: a table of rows, each with optional detail tabs
//! and an action area shown when the row is expanded.

use super::node::{el, Element, Node};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    /// Rendered on every pass, hidden while another tab is active.
    #[default]
    Default,
    /// Rendered only while it is the active tab.
    OnlyActive,
}

type RenderFn = Arc<dyn Fn() -> Node + Send + Sync>;

/// A detail tab. The body is produced lazily so suppressed tabs cost nothing.
#[derive(Clone)]
pub struct TabRenderer {
    pub name: Node,
    pub presence: Presence,
    renderer: RenderFn,
}

impl TabRenderer {
    pub fn new(name: impl Into<Node>, renderer: impl Fn() -> Node + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            presence: Presence::Default,
            renderer: Arc::new(renderer),
        }
    }

    pub fn only_active(mut self) -> Self {
        self.presence = Presence::OnlyActive;
        self
    }

    pub fn render(&self) -> Node {
        (self.renderer)()
    }
}

impl fmt::Debug for TabRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabRenderer")
            .field("name", &self.name)
            .field("presence", &self.presence)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingColumn {
    pub content: Node,
    pub header: bool,
}

impl ListingColumn {
    pub fn header(content: impl Into<Node>) -> Self {
        Self {
            content: content.into(),
            header: true,
        }
    }

    pub fn cell(content: impl Into<Node>) -> Self {
        Self {
            content: content.into(),
            header: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListingRow {
    pub key: String,
    pub columns: Vec<ListingColumn>,
    pub tabs: Vec<TabRenderer>,
    pub actions: Node,
}

/// Which rows are expanded, and on which tab. Owned by whoever drives the
/// listing, not by the rows themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingState {
    expanded: HashMap<String, usize>,
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expand(&mut self, key: impl Into<String>, tab: usize) {
        self.expanded.insert(key.into(), tab);
    }

    pub fn with_expanded(mut self, key: impl Into<String>, tab: usize) -> Self {
        self.expand(key, tab);
        self
    }

    pub fn active_tab(&self, key: &str) -> Option<usize> {
        self.expanded.get(key).copied()
    }
}

impl ListingRow {
    /// Renders the row. `active_tab` is `None` while collapsed; an index past
    /// the last tab falls back to the first one.
    pub fn render(&self, active_tab: Option<usize>) -> Node {
        let summary = el("tr").class("listing-ct-item").children(self.columns.iter().map(
            |column| {
                let cell = if column.header { el("th") } else { el("td") };
                cell.child(column.content.clone())
            },
        ));

        let mut body = el("tbody")
            .class(if active_tab.is_some() {
                "listing-ct-item-body open"
            } else {
                "listing-ct-item-body"
            })
            .attr("data-key", self.key.clone())
            .child(summary);

        if let Some(active) = active_tab {
            let active = if active < self.tabs.len() { active } else { 0 };
            body = body.child(self.render_panel(active));
        }

        body.into()
    }

    fn render_panel(&self, active: usize) -> Element {
        let tab_links = self.tabs.iter().enumerate().map(|(index, tab)| {
            let item = el("li").attr("data-tab", index.to_string());
            let item = if index == active { item.class("active") } else { item };
            item.child(el("a").child(tab.name.clone()))
        });

        let bodies = self.tabs.iter().enumerate().filter_map(|(index, tab)| {
            let is_active = index == active;
            if !is_active && tab.presence == Presence::OnlyActive {
                return None;
            }
            let body = el("div")
                .class("listing-ct-body")
                .attr("data-tab", index.to_string());
            let body = if is_active { body } else { body.attr("hidden", "hidden") };
            Some(body.child(tab.render()))
        });

        el("tr").class("listing-ct-panel").child(
            el("td")
                .attr("colspan", self.columns.len().to_string())
                .child(
                    el("div")
                        .class("listing-ct-head")
                        .child(el("div").class("listing-ct-actions").child(self.actions.clone()))
                        .child(el("ul").class("nav nav-tabs nav-tabs-pf").children(tab_links)),
                )
                .children(bodies),
        )
    }
}

#[derive(Debug, Clone)]
pub struct Listing {
    pub title: String,
    pub column_titles: Vec<String>,
    pub rows: Vec<ListingRow>,
}

impl Listing {
    pub fn render(&self, state: &ListingState) -> Node {
        let head = el("thead").child(
            el("tr").children(self.column_titles.iter().map(|title| el("th").text(title.clone()))),
        );

        el("table")
            .class("listing-ct")
            .child(el("caption").class("cockpit-caption").text(self.title.clone()))
            .child(head)
            .children(self.rows.iter().map(|row| row.render(state.active_tab(&row.key))))
            .into()
    }
}
