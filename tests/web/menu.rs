use crate::helpers::{config_with_prefix, document, Fixture};
use page_interactions::{menu, MenuToggle};
use wasm_bindgen_test::wasm_bindgen_test;

#[wasm_bindgen_test]
fn clicking_trigger_twice_restores_marker_class() {
    let fixture = Fixture::mount(
        r#"
            <button id="menu-a-button" data-menu-a-toggle>Menu</button>
            <ul id="menu-a-nav"><li>Home</li></ul>
        "#,
    );
    let config = config_with_prefix("menu-a");
    let toggle = MenuToggle::init(&document(), &config).unwrap().unwrap();
    assert_eq!(toggle.trigger_count(), 1);

    let nav = fixture.element("menu-a-nav");
    let button = fixture.html_element("menu-a-button");

    assert!(!nav.class_list().contains("active"));
    button.click();
    assert!(nav.class_list().contains("active"));
    button.click();
    assert!(!nav.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn toggle_reports_new_state() {
    let fixture = Fixture::mount(r#"<nav id="menu-b-nav" class="active"></nav>"#);
    let nav = fixture.element("menu-b-nav");

    assert!(!menu::toggle(&nav, "active").unwrap());
    assert!(menu::toggle(&nav, "active").unwrap());
    assert_eq!(nav.class_name(), "active");
}

#[wasm_bindgen_test]
fn every_matching_trigger_is_bound() {
    let _fixture = Fixture::mount(
        r#"
            <button data-menu-c-toggle>Open</button>
            <a data-menu-c-toggle>Also open</a>
            <ul id="menu-c-nav"></ul>
        "#,
    );
    let toggle = MenuToggle::init(&document(), &config_with_prefix("menu-c"))
        .unwrap()
        .unwrap();

    assert_eq!(toggle.trigger_count(), 2);
}

#[wasm_bindgen_test]
fn missing_nav_disables_toggle_without_fault() {
    let _fixture = Fixture::mount(r#"<button data-menu-d-toggle>Menu</button>"#);

    let toggle = MenuToggle::init(&document(), &config_with_prefix("menu-d")).unwrap();

    assert!(toggle.is_none());
}
