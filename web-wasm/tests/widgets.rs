//! ブラウザ上でのウィジェット動作テスト
//!
//! 実行: wasm-pack test --headless --firefox web-wasm

#![cfg(target_arch = "wasm32")]

use devportal_widgets_common::cookie::{cookie_assignment, get_cookie};
use devportal_widgets_common::newsletter::{NEWSLETTER_SUBSCRIBE_URL, RETRY_MESSAGE};
use devportal_widgets_common::survey::SURVEY_COOKIE;
use devportal_widgets_common::PageEnvironment;
use devportal_widgets_wasm::components::{
    filter_form, filter_list, modal, newsletter, notification_bar, survey_prompt,
    tabbed_panels, toggle,
};
use devportal_widgets_wasm::registry::{collect, Roots};
use devportal_widgets_wasm::BrowserPage;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

/// body 直下に使い捨てのコンテナを作る
fn mount(page: &BrowserPage, html: &str) -> Element {
    let container = page.document().create_element("div").unwrap();
    container.set_inner_html(html);
    page.document().body().unwrap().append_child(&container).unwrap();
    container
}

fn with_query<T>(page: &BrowserPage, query: &str, f: impl FnOnce() -> T) -> T {
    let original = page.window().location().href().unwrap();
    page.replace_url(query);
    let result = f();
    page.replace_url(&original);
    result
}

fn click(element: &Element) {
    element.dyn_ref::<HtmlElement>().unwrap().click();
}

fn input(page: &BrowserPage, id: &str) -> HtmlInputElement {
    page.element_by_id(id).unwrap().dyn_into().unwrap()
}

fn is_hidden(page: &BrowserPage, id: &str) -> bool {
    page.element_by_id(id).unwrap().has_attribute("hidden")
}

fn run_js(code: &str) -> JsValue {
    Function::new_no_args(code).call0(&JsValue::NULL).unwrap()
}

fn global(page: &BrowserPage, path: &[&str]) -> JsValue {
    path.iter().fold(JsValue::from(page.window().clone()), |object, key| {
        Reflect::get(&object, &JsValue::from_str(key)).unwrap()
    })
}

/// キャンセル可能な click を送り、preventDefault されたかを返す
fn cancelable_click(element: &Element) -> bool {
    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("click", &init).unwrap();
    element.dispatch_event(&event).unwrap();
    event.default_prevented()
}

/// spawn_local したタスクが進むまで待つ
async fn settle(page: &BrowserPage) {
    let promise = Promise::new(&mut |resolve, _| {
        page.window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 20)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

const POSTS_FORM: &str = r##"
<form class="js-filter-form" id="posts-form">
  <header class="js-filter-form-clear-section" id="clear-all-section">
    <a href="#" class="js-filter-clear" id="clear-all">Clear all</a>
  </header>
  <fieldset>
    <a href="#" class="js-filter-clear" data-controls="topic" id="clear-topic">Clear</a>
    <input type="checkbox" name="topic" value="css" id="topic-css">
    <input type="checkbox" name="topic" value="javascript" id="topic-js">
    <input type="checkbox" name="topic" value="voice" id="topic-voice">
  </fieldset>
  <fieldset>
    <a href="#" class="js-filter-clear" data-controls="search" id="clear-search">Clear</a>
    <input type="search" name="search" class="js-search-input" id="search">
  </fieldset>
</form>
<p class="js-filter-form-summary--search" id="summary-search">Searched for: 'test test'</p>
<p class="js-filter-form-summary--filters" id="summary-filters">Filters: 'test test'</p>
"##;

#[wasm_bindgen_test]
fn filter_form_restores_from_url_and_clears_all() {
    let page = BrowserPage::new().unwrap();
    let container = mount(&page, POSTS_FORM);
    let form = page.element_by_id("posts-form").unwrap();

    with_query(&page, "?topic=css&topic=javascript&search=test+test", || {
        filter_form::init(&page, form.clone()).unwrap();
    });

    assert!(input(&page, "topic-css").checked());
    assert!(input(&page, "topic-js").checked());
    assert!(!input(&page, "topic-voice").checked());
    assert_eq!(input(&page, "search").value(), "test test");
    assert!(!is_hidden(&page, "clear-topic"));
    assert!(!is_hidden(&page, "clear-search"));
    assert!(!is_hidden(&page, "clear-all-section"));

    click(&page.element_by_id("clear-all").unwrap());
    assert!(!input(&page, "topic-css").checked());
    assert!(!input(&page, "topic-js").checked());
    assert_eq!(input(&page, "search").value(), "");
    assert!(is_hidden(&page, "clear-all-section"));
    assert_eq!(
        page.element_by_id("summary-search").unwrap().text_content().unwrap(),
        ""
    );

    container.remove();
}

#[wasm_bindgen_test]
fn filter_form_without_query_hides_clear_controls() {
    let page = BrowserPage::new().unwrap();
    let container = mount(&page, POSTS_FORM);
    let form = page.element_by_id("posts-form").unwrap();

    with_query(&page, "?", || filter_form::init(&page, form.clone()).unwrap());

    assert!(is_hidden(&page, "clear-topic"));
    assert!(is_hidden(&page, "clear-search"));
    assert!(is_hidden(&page, "clear-all-section"));

    // 入力に追従してクリアボタンを出す
    input(&page, "topic-voice").set_checked(true);
    form.dispatch_event(&Event::new("input").unwrap()).unwrap();
    assert!(!is_hidden(&page, "clear-topic"));
    assert!(!is_hidden(&page, "clear-all-section"));

    container.remove();
}

const LISTING: &str = r##"
<form class="js-filter-list-form" id="list-form" data-controls="cards" data-initial-resources="2">
  <a href="#" class="js-filter-clear" data-controls="topics" id="clear-topics">Clear</a>
  <input type="checkbox" name="topics" value="css" id="topics-css">
  <input type="checkbox" name="topics" value="voice" id="topics-voice">
</form>
<ul id="cards">
  <li class="js-filter-target" data-topics="css" id="card-0"></li>
  <li class="js-filter-target" data-topics="css voice" id="card-1"></li>
  <li class="js-filter-target" data-topics="voice" id="card-2"></li>
</ul>
<div id="js-filter-list-actions"><a href="#" id="js-filter-list-action-see-more">More</a></div>
<p id="js-filter-list-no-results" hidden>No results</p>
"##;

#[wasm_bindgen_test]
fn filter_list_paginates_and_filters() {
    let page = BrowserPage::new().unwrap();
    let container = mount(&page, LISTING);
    let form = page.element_by_id("list-form").unwrap();
    let original = page.window().location().href().unwrap();

    page.replace_url("?");
    filter_list::init(&page, form.clone()).unwrap();
    assert!(!is_hidden(&page, "card-0"));
    assert!(!is_hidden(&page, "card-1"));
    assert!(is_hidden(&page, "card-2"));
    assert!(!is_hidden(&page, "js-filter-list-actions"));

    click(&page.element_by_id("js-filter-list-action-see-more").unwrap());
    assert!(!is_hidden(&page, "card-2"));
    assert!(is_hidden(&page, "js-filter-list-actions"));

    input(&page, "topics-voice").set_checked(true);
    form.dispatch_event(&Event::new("input").unwrap()).unwrap();
    assert!(is_hidden(&page, "card-0"));
    assert!(!is_hidden(&page, "card-1"));
    assert!(!is_hidden(&page, "card-2"));
    assert_eq!(page.query_string(), "?topics=voice");

    click(&page.element_by_id("clear-topics").unwrap());
    assert!(!input(&page, "topics-voice").checked());
    assert!(is_hidden(&page, "clear-topics"));

    container.remove();
    page.replace_url(&original);
}

#[wasm_bindgen_test]
fn filter_list_requires_controls_container() {
    let page = BrowserPage::new().unwrap();
    let container = mount(
        &page,
        r#"<form class="js-filter-list-form" id="broken-form" data-controls="missing"></form>"#,
    );
    let form = page.element_by_id("broken-form").unwrap();

    let err = filter_list::init(&page, form).unwrap_err();
    assert!(err.to_string().contains("#missing"));

    container.remove();
}

#[wasm_bindgen_test]
fn toggle_flips_hidden_and_hides_itself() {
    let page = BrowserPage::new().unwrap();
    let container = mount(
        &page,
        r##"
        <a href="#" class="js-toggle" data-controls=".toggle-target" data-hide id="toggle">More</a>
        <div class="toggle-target" id="target-a" hidden></div>
        <div class="toggle-target" id="target-b"></div>
        "##,
    );
    let trigger = page.element_by_id("toggle").unwrap();
    toggle::init(&page, trigger.clone()).unwrap();

    click(&trigger);
    assert!(!is_hidden(&page, "target-a"));
    assert!(is_hidden(&page, "target-b"));
    assert!(is_hidden(&page, "toggle"));

    container.remove();
}

#[wasm_bindgen_test]
fn tabbed_panels_keep_only_first_item_active() {
    let page = BrowserPage::new().unwrap();
    let container = mount(
        &page,
        r##"
        <div class="js-tabbed-panels" id="tabs">
          <a class="tabbed-panels-nav-item is-active" href="#one">One</a>
          <a class="tabbed-panels-nav-item" href="#two">Two</a>
          <div class="tabbed-panels-item is-active" data-hash="one" id="item-one"></div>
          <div class="tabbed-panels-item is-active" data-hash="two" id="item-two"></div>
        </div>
        "##,
    );
    let root = page.element_by_id("tabs").unwrap();
    with_query(&page, "?", || tabbed_panels::init(&page, root).unwrap());

    let active = |id: &str| {
        page.element_by_id(id)
            .unwrap()
            .class_list()
            .contains("is-active")
    };
    assert!(active("item-one"));
    assert!(!active("item-two"));

    container.remove();
}

#[wasm_bindgen_test]
fn notification_bar_button_removes_bar() {
    let page = BrowserPage::new().unwrap();
    let container = mount(
        &page,
        r#"<div id="bar"><button class="mzp-c-notification-bar-button" id="dismiss">x</button></div>"#,
    );
    let button = page.element_by_id("dismiss").unwrap();
    notification_bar::init(&page, button.clone()).unwrap();

    click(&button);
    assert!(page.element_by_id("bar").is_none());

    container.remove();
}

#[wasm_bindgen_test]
fn registry_collects_roots() {
    let page = BrowserPage::new().unwrap();
    let container = mount(
        &page,
        r#"<a class="js-toggle"></a><a class="js-toggle"></a><form id="newsletter-form"></form>"#,
    );

    assert_eq!(collect(&page, Roots::Selector(".js-toggle")).unwrap().len(), 2);
    assert_eq!(collect(&page, Roots::Id("newsletter-form")).unwrap().len(), 1);
    assert_eq!(collect(&page, Roots::Id("no-such-id")).unwrap().len(), 0);
    assert_eq!(collect(&page, Roots::Page).unwrap().len(), 1);

    container.remove();
}

const SURVEY_PROMPT: &str = r#"
<aside class="mzp-c-notification-bar js-task-completion-survey" id="survey" hidden>
  <button class="mzp-c-notification-bar-button mzp-js-notification-trigger" id="survey-close"></button>
  <p>Would you complete a short survey?</p>
</aside>
"#;

fn survey_cookie(page: &BrowserPage) -> Option<String> {
    get_cookie(&page.cookies(), SURVEY_COOKIE)
}

/// Cookieを消し、表示割合を設定する
fn reset_survey(page: &BrowserPage, percentage: u32) {
    page.set_cookie(&cookie_assignment(SURVEY_COOKIE, "", Some(0)))
        .unwrap();
    run_js(&format!(
        "window.DevPortal = {{ TaskCompletionSurvey: {{ displayPercentage: {} }} }};",
        percentage
    ));
}

fn html_element(page: &BrowserPage) -> Element {
    page.document().document_element().unwrap()
}

#[wasm_bindgen_test]
fn survey_sets_cookie_on_page_without_prompt() {
    let page = BrowserPage::new().unwrap();
    reset_survey(&page, 100);
    assert_eq!(survey_cookie(&page), None);

    survey_prompt::init(&page, html_element(&page)).unwrap();
    assert_eq!(survey_cookie(&page).as_deref(), Some("true"));

    reset_survey(&page, 0);
}

#[wasm_bindgen_test]
fn survey_existing_cookie_is_kept() {
    let page = BrowserPage::new().unwrap();
    reset_survey(&page, 100);
    page.set_cookie(&cookie_assignment(SURVEY_COOKIE, "false", None))
        .unwrap();
    let container = mount(&page, SURVEY_PROMPT);

    survey_prompt::init(&page, html_element(&page)).unwrap();
    assert_eq!(survey_cookie(&page).as_deref(), Some("false"));
    assert!(is_hidden(&page, "survey"));

    container.remove();
    reset_survey(&page, 0);
}

#[wasm_bindgen_test]
fn survey_reveals_prompt_and_dismiss_writes_false() {
    let page = BrowserPage::new().unwrap();
    reset_survey(&page, 100);
    let container = mount(&page, SURVEY_PROMPT);

    survey_prompt::init(&page, html_element(&page)).unwrap();
    assert_eq!(survey_cookie(&page).as_deref(), Some("true"));
    assert!(!is_hidden(&page, "survey"));

    click(&page.element_by_id("survey-close").unwrap());
    assert_eq!(survey_cookie(&page).as_deref(), Some("false"));

    container.remove();
    reset_survey(&page, 0);
}

const NEWSLETTER_FORM: &str = r#"
<form id="newsletter-form">
  <div class="js-newsletter-fields" id="newsletter-fields" data-success-message="<b>Thank you.</b>">
    <input type="hidden" name="newsletters" value="app-dev">
    <input type="hidden" name="fmt" value="H">
    <input type="email" name="email" value="test@example.com">
    <input type="checkbox" name="privacy">
    <input type="text" name="disabled-field" value="x" disabled>
    <select name="lang"><option value="en">en</option><option value="ja" selected>ja</option></select>
    <textarea name="note">hi there</textarea>
    <button type="submit">Sign up now</button>
  </div>
</form>
"#;

/// window.fetch / window.alert を差し替える（`restore_browser_apis` で戻す）
fn stub_browser_apis(fetch_body: &str) {
    run_js(&format!(
        "window.__originalFetch = window.fetch;
         window.__originalAlert = window.alert;
         window.__alerts = [];
         window.fetch = function (request) {{ window.__lastRequest = request; {} }};
         window.alert = function (message) {{ window.__alerts.push(message); }};",
        fetch_body
    ));
}

fn restore_browser_apis() {
    run_js(
        "window.fetch = window.__originalFetch;
         window.alert = window.__originalAlert;",
    );
}

#[wasm_bindgen_test]
fn newsletter_fields_follow_form_data_rules() {
    let page = BrowserPage::new().unwrap();
    let container = mount(&page, NEWSLETTER_FORM);
    let form = page.element_by_id("newsletter-form").unwrap();

    let fields = newsletter::form_fields(&form);
    let expected = [
        ("newsletters", "app-dev"),
        ("fmt", "H"),
        ("email", "test@example.com"),
        ("lang", "ja"),
        ("note", "hi there"),
    ];
    assert_eq!(
        fields,
        expected
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>()
    );

    container.remove();
}

#[wasm_bindgen_test]
async fn newsletter_success_replaces_fields() {
    let page = BrowserPage::new().unwrap();
    let container = mount(&page, NEWSLETTER_FORM);
    let form = page.element_by_id("newsletter-form").unwrap();
    stub_browser_apis(r#"return Promise.resolve(new Response('{"success": true}'));"#);

    newsletter::init(&page, form.clone()).unwrap();
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();
    settle(&page).await;

    let request = global(&page, &["__lastRequest"]);
    let method = Reflect::get(&request, &"method".into()).unwrap();
    let url = Reflect::get(&request, &"url".into()).unwrap();
    assert_eq!(method.as_string().as_deref(), Some("POST"));
    assert_eq!(url.as_string().as_deref(), Some(NEWSLETTER_SUBSCRIBE_URL));
    assert_eq!(
        page.element_by_id("newsletter-fields").unwrap().inner_html(),
        "<b>Thank you.</b>"
    );

    restore_browser_apis();
    container.remove();
}

#[wasm_bindgen_test]
async fn newsletter_transport_failure_alerts_retry() {
    let page = BrowserPage::new().unwrap();
    let container = mount(&page, NEWSLETTER_FORM);
    let form = page.element_by_id("newsletter-form").unwrap();
    stub_browser_apis("return Promise.reject(new TypeError('offline'));");

    newsletter::init(&page, form.clone()).unwrap();
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();
    settle(&page).await;

    let alerts: js_sys::Array = global(&page, &["__alerts"]).dyn_into().unwrap();
    assert_eq!(alerts.length(), 1);
    assert_eq!(alerts.get(0).as_string().as_deref(), Some(RETRY_MESSAGE));
    // 完了メッセージには置き換えない
    assert!(page.element_by_id("newsletter-fields").unwrap().inner_html().contains("email"));

    restore_browser_apis();
    container.remove();
}

const EMBED_URL: &str =
    "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&enablejsapi=1&modestbranding=1&rel=0";

/// createModal は呼び出しを記録して onCreate だけ呼ぶ
fn stub_mzp_modal() {
    run_js(
        "window.__modalCalls = 0;
         window.Mzp = { Modal: { createModal: function (origin, content, options) {
             window.__modalCalls += 1;
             window.__modalOptions = options;
             options.onCreate();
         } } };",
    );
}

fn modal_roots(page: &BrowserPage) -> Vec<Element> {
    page.query_all(".mzp-u-modal-content").unwrap()
}

#[wasm_bindgen_test]
fn modal_builds_video_once_and_prevents_navigation() {
    let page = BrowserPage::new().unwrap();
    stub_mzp_modal();
    let container = mount(
        &page,
        r#"<button class="js-modal-trigger" id="video-trigger" data-type="video"
             data-title="Demo" href="https://www.youtube.com/watch?v=dQw4w9WgXcQ">Play</button>"#,
    );
    let trigger = page.element_by_id("video-trigger").unwrap();
    modal::init(&page, trigger.clone()).unwrap();
    assert!(modal_roots(&page).is_empty());

    assert!(cancelable_click(&trigger));
    assert_eq!(global(&page, &["__modalCalls"]).as_f64(), Some(1.0));
    assert_eq!(
        global(&page, &["__modalOptions", "closeText"]).as_string().as_deref(),
        Some("Close modal")
    );
    assert_eq!(
        global(&page, &["__modalOptions", "title"]).as_string().as_deref(),
        Some("Demo")
    );
    let iframe = page.query_all(".mzp-u-modal-content iframe").unwrap();
    assert_eq!(iframe.len(), 1);
    assert_eq!(iframe[0].get_attribute("src").as_deref(), Some(EMBED_URL));

    // 2回目は組み立て済みの中身を再利用する
    assert!(cancelable_click(&trigger));
    assert_eq!(global(&page, &["__modalCalls"]).as_f64(), Some(2.0));
    assert_eq!(modal_roots(&page).len(), 1);

    for root in modal_roots(&page) {
        root.remove();
    }
    run_js("delete window.Mzp;");
    container.remove();
}

#[wasm_bindgen_test]
fn modal_failure_leaves_default_action() {
    let page = BrowserPage::new().unwrap();
    stub_mzp_modal();
    let container = mount(
        &page,
        r#"<button class="js-modal-trigger" id="bad-trigger" data-type="video"
             href="https://example.com/clip">Play</button>"#,
    );
    let trigger = page.element_by_id("bad-trigger").unwrap();
    modal::init(&page, trigger.clone()).unwrap();

    assert!(!cancelable_click(&trigger));
    assert_eq!(global(&page, &["__modalCalls"]).as_f64(), Some(0.0));
    assert!(modal_roots(&page).is_empty());

    run_js("delete window.Mzp;");
    container.remove();
}
