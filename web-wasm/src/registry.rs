//! ウィジェット登録
//!
//! 起動時にルート要素を一度だけ集め、要素ごとにコントローラを作る。
//! 1つの失敗は記録するだけで、他のウィジェットの初期化は続ける。

use crate::components::{
    filter_form, filter_list, header, map_embed, modal, newsletter, newsletter_signup,
    notification_bar, survey_prompt, tabbed_panels, toggle,
};
use crate::error::Result;
use crate::page::BrowserPage;
use devportal_widgets_common::PageEnvironment;
use web_sys::Element;

/// ルート要素の探し方
#[derive(Debug, Clone, Copy)]
pub enum Roots {
    /// セレクタに一致する全要素
    Selector(&'static str),
    /// id（0件か1件）
    Id(&'static str),
    /// ドキュメント全体（`<html>` 要素）
    Page,
}

/// 1種類のウィジェット
pub struct Widget {
    pub name: &'static str,
    pub roots: Roots,
    pub init: fn(&BrowserPage, Element) -> Result<()>,
}

pub const WIDGETS: &[Widget] = &[
    Widget {
        name: "Header",
        roots: Roots::Id("nav-hamburger"),
        init: header::init,
    },
    Widget {
        name: "FilterForm",
        roots: Roots::Selector(".js-filter-form"),
        init: filter_form::init,
    },
    Widget {
        name: "FilterList",
        roots: Roots::Selector(".js-filter-list-form"),
        init: filter_list::init,
    },
    Widget {
        name: "MapEmbed",
        roots: Roots::Selector(".map"),
        init: map_embed::init,
    },
    Widget {
        name: "Modal",
        roots: Roots::Selector(".js-modal-trigger"),
        init: modal::init,
    },
    Widget {
        name: "TabbedPanels",
        roots: Roots::Selector(".js-tabbed-panels"),
        init: tabbed_panels::init,
    },
    Widget {
        name: "Toggle",
        roots: Roots::Selector(".js-toggle"),
        init: toggle::init,
    },
    Widget {
        name: "NotificationBar",
        roots: Roots::Selector(".mzp-c-notification-bar-button"),
        init: notification_bar::init,
    },
    Widget {
        name: "NewsletterSubscription",
        roots: Roots::Id("newsletter-form"),
        init: newsletter::init,
    },
    Widget {
        name: "NewsletterSignup",
        roots: Roots::Selector(".js-newsletter-signup"),
        init: newsletter_signup::init,
    },
    Widget {
        name: "TaskCompletionPrompt",
        roots: Roots::Page,
        init: survey_prompt::init,
    },
];

/// ルート要素を集める
pub fn collect(page: &BrowserPage, roots: Roots) -> Result<Vec<Element>> {
    match roots {
        Roots::Selector(selector) => page.query_all(selector),
        Roots::Id(id) => Ok(page.element_by_id(id).into_iter().collect()),
        Roots::Page => Ok(page.document().document_element().into_iter().collect()),
    }
}

/// 1種類のウィジェットを初期化し、成功した数を返す
pub fn init_widget(page: &BrowserPage, widget: &Widget) -> usize {
    let roots = match collect(page, widget.roots) {
        Ok(roots) => roots,
        Err(err) => {
            gloo::console::error!(widget.name, "failed to collect roots", err.to_string());
            return 0;
        }
    };

    let mut initialized = 0;
    for root in roots {
        match (widget.init)(page, root) {
            Ok(()) => initialized += 1,
            Err(err) => gloo::console::error!(widget.name, "init failed", err.to_string()),
        }
    }
    initialized
}

/// すべてのウィジェットを初期化
pub fn init_widgets() {
    let page = match BrowserPage::new() {
        Ok(page) => page,
        Err(err) => {
            gloo::console::error!("widgets unavailable", err.to_string());
            return;
        }
    };

    let total: usize = WIDGETS
        .iter()
        .map(|widget| init_widget(&page, widget))
        .sum();
    gloo::console::log!("widgets initialized", total);
}
