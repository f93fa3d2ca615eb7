#![allow(dead_code)]
use std::fs;
use std::path::{Path, PathBuf};

use lenv_xbar::{MenuEntry, MenuItem};

pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let p = dir.join("config.yaml");
    fs::write(&p, yaml).expect("write config");
    p
}

/// Top-level item by label.
pub fn top<'a>(menu: &'a [MenuEntry], text: &str) -> &'a MenuItem {
    menu.iter()
        .filter_map(MenuEntry::as_item)
        .find(|i| i.text == text)
        .unwrap_or_else(|| panic!("no top-level item {text:?}"))
}

pub fn command_line(item: &MenuItem) -> String {
    item.command
        .as_ref()
        .unwrap_or_else(|| panic!("item {:?} has no command", item.text))
        .command_line()
}
