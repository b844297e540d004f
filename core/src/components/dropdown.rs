use crate::view::{el, Callback, Node};

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownButton {
    pub title: String,
    pub action: Callback,
    pub id: Option<String>,
}

impl DropdownButton {
    pub fn new(title: impl Into<String>, action: Callback) -> Self {
        Self {
            title: title.into(),
            action,
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Split button: the first entry is always visible, every entry is also offered
/// in the dropdown except those sharing the first entry's id.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownButtons {
    buttons: Vec<DropdownButton>,
}

impl DropdownButtons {
    pub fn new(primary: DropdownButton, others: impl IntoIterator<Item = DropdownButton>) -> Self {
        let mut buttons = vec![primary];
        buttons.extend(others);
        Self { buttons }
    }

    pub fn primary(&self) -> &DropdownButton {
        &self.buttons[0]
    }

    /// Entries listed in the dropdown menu, in their original order.
    pub fn menu_entries(&self) -> impl Iterator<Item = &DropdownButton> {
        let primary_id = self.primary().id.as_deref();
        self.buttons
            .iter()
            .filter(move |button| primary_id.is_none() || button.id.as_deref() != primary_id)
    }

    pub fn render(&self) -> Node {
        let primary = self.primary();
        let caret_id = primary.id.as_ref().map(|id| format!("{}-caret", id));

        let entries = self.menu_entries().map(|button| {
            el("li").class("presentation").child(
                el("a")
                    .attr("role", "menuitem")
                    .maybe_id(button.id.clone())
                    .text(button.title.clone())
                    .on_click(button.action.clone()),
            )
        });

        el("div")
            .class("btn-group")
            .child(
                el("button")
                    .class("btn btn-default btn-danger")
                    .maybe_id(primary.id.clone())
                    .text(primary.title.clone())
                    .on_click(primary.action.clone()),
            )
            .child(
                el("button")
                    .attr("data-toggle", "dropdown")
                    .class("btn btn-default dropdown-toggle")
                    .child(el("span").class("caret").maybe_id(caret_id)),
            )
            .child(el("ul").attr("role", "menu").class("dropdown-menu").children(entries))
            .into()
    }
}
