//! Menu descriptor tree handed to the renderer.

use serde::Serialize;

/// A program plus ordered argument tokens, run by the menu-bar host.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, a: impl Into<String>) -> Self {
        self.args.push(a.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Space-joined form as the host shell sees it. Tokens are not quoted so that
    /// `~` and `$GOPATH` still expand.
    pub fn command_line(&self) -> String {
        let mut out = self.program.clone();
        for a in &self.args {
            out.push(' ');
            out.push_str(a);
        }
        out
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct MenuItem {
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub submenu: Vec<MenuEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<ShellCommand>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub terminal: bool,
    /// `Some(false)` keeps the item out of the dropdown (title-only header).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropdown: Option<bool>,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Label-only row.
    pub fn disabled(text: impl Into<String>) -> Self {
        Self {
            disabled: true,
            ..Self::new(text)
        }
    }

    /// Row that runs `command` in a visible terminal.
    pub fn terminal_action(text: impl Into<String>, command: ShellCommand) -> Self {
        Self {
            command: Some(command),
            terminal: true,
            ..Self::new(text)
        }
    }

    pub fn with_submenu(mut self, submenu: Vec<MenuEntry>) -> Self {
        self.submenu = submenu;
        self
    }

    pub fn with_dropdown(mut self, dropdown: bool) -> Self {
        self.dropdown = Some(dropdown);
        self
    }

    /// Item entries of the submenu, skipping separators.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.submenu.iter().filter_map(MenuEntry::as_item)
    }

    pub fn find(&self, text: &str) -> Option<&MenuItem> {
        self.items().find(|i| i.text == text)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuEntry {
    Item(MenuItem),
    Separator,
}

impl MenuEntry {
    pub fn as_item(&self) -> Option<&MenuItem> {
        match self {
            MenuEntry::Item(i) => Some(i),
            MenuEntry::Separator => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, MenuEntry::Separator)
    }
}

impl From<MenuItem> for MenuEntry {
    fn from(i: MenuItem) -> Self {
        MenuEntry::Item(i)
    }
}
