//! `.js-tabbed-panels`
//!
//! `location.hash` に合わせて `.tabbed-panels-item` と `.tabbed-panels-nav-item`
//! の `is-active` を切り替える。

use crate::error::Result;
use crate::page::{query_all_in, BrowserPage};
use devportal_widgets_common::tabs::TabSet;
use gloo::events::EventListener;
use web_sys::Element;

const ACTIVE: &str = "is-active";

struct TabbedPanels {
    items: Vec<Element>,
    nav: Vec<Element>,
    tabs: TabSet,
}

impl TabbedPanels {
    fn new(root: &Element) -> Result<Self> {
        let items = query_all_in(root, ".tabbed-panels-item")?;
        let nav = query_all_in(root, ".tabbed-panels-nav-item")?;
        let tabs = TabSet::new(
            items
                .iter()
                .map(|el| el.get_attribute("data-hash").unwrap_or_default())
                .collect(),
            nav.iter()
                .map(|el| el.get_attribute("href").unwrap_or_default())
                .collect(),
        );
        Ok(Self { items, nav, tabs })
    }

    fn set_initial_state(&self) {
        for index in self.tabs.initially_inactive() {
            set_active(&self.items[index], false);
        }
    }

    fn show(&self, hash: &str) {
        let Some(selection) = self.tabs.select(hash) else {
            return;
        };
        for (element, active) in self.nav.iter().zip(selection.nav) {
            set_active(element, active);
        }
        for (element, active) in self.items.iter().zip(selection.items) {
            set_active(element, active);
        }
    }
}

fn set_active(element: &Element, active: bool) {
    if let Err(err) = element.class_list().toggle_with_force(ACTIVE, active) {
        gloo::console::warn!("failed to toggle is-active", err);
    }
}

pub fn init(page: &BrowserPage, root: Element) -> Result<()> {
    let panels = TabbedPanels::new(&root)?;
    panels.set_initial_state();

    let hash = page.location_hash();
    if !hash.is_empty() {
        panels.show(&hash);
    }

    let window = page.window().clone();
    let page = page.clone();
    EventListener::new(&window, "hashchange", move |_| {
        panels.show(&page.location_hash());
    })
    .forget();

    Ok(())
}
