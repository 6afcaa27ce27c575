//! End-to-end behavior of the presentation engine: state changes, coalescing
//! and the rendered page.

use std::sync::Arc;

use folio::catalog::{ContentCatalog, load_catalog};
use folio::models::{AppearanceMode, Category};
use folio::render::{render, to_markdown, Anchor, Href, ToggleIcon};
use folio::state::{Headless, Intent, Presenter};

mod fixtures;
use fixtures::*;

fn builtin() -> Arc<ContentCatalog> {
    Arc::new(ContentCatalog::builtin().unwrap())
}

#[test]
fn test_backend_then_toggle() {
    let mut presenter = Presenter::new(builtin(), Headless);
    assert_eq!(presenter.mode(), AppearanceMode::Dark);
    assert_eq!(presenter.active_category(), Category::Frontend);
    let projects_before = presenter.frame().projects().to_vec();

    presenter.dispatch([Intent::Select(Category::Backend)]);
    assert_eq!(presenter.frame().skills().len(), 5);
    assert_eq!(presenter.frame().projects(), projects_before.as_slice());

    presenter.dispatch([Intent::ToggleAppearance]);
    assert_eq!(presenter.mode(), AppearanceMode::Light);
    assert_eq!(presenter.active_category(), Category::Backend);
    assert_eq!(presenter.frame().nav.toggle, ToggleIcon::Moon);
    assert_eq!(presenter.frame().projects(), projects_before.as_slice());
}

#[test]
fn test_turns_coalesce_into_one_render() {
    let mut presenter = Presenter::new(builtin(), Headless);

    assert!(!presenter.dispatch([Intent::ToggleAppearance, Intent::ToggleAppearance]));
    assert_eq!(presenter.render_passes(), 1);

    assert!(presenter.dispatch([
        Intent::Select(Category::Backend),
        Intent::ToggleAppearance,
    ]));
    assert_eq!(presenter.render_passes(), 2);

    assert!(!presenter.dispatch([
        Intent::Select(Category::Tools),
        Intent::Select(Category::Backend),
    ]));
    assert_eq!(presenter.render_passes(), 2);
}

#[test]
fn test_frame_equals_direct_render() {
    let catalog = builtin();
    let mut presenter = Presenter::new(Arc::clone(&catalog), Headless);
    presenter.dispatch([Intent::Select(Category::Tools), Intent::ToggleAppearance]);

    assert_eq!(
        presenter.frame(),
        &render(AppearanceMode::Light, Category::Tools, &catalog)
    );
}

#[test]
fn test_custom_content_renders() {
    let (path, _temp_dir) = create_temp_content_file(&test_content());
    let catalog = load_catalog(&path).unwrap();

    let tree = render(AppearanceMode::Dark, Category::Backend, &catalog);
    assert_eq!(tree.nav.brand, "<Ada Lovelace/>");
    assert_eq!(tree.skills()[0].name, "Rust");
    assert_eq!(tree.projects()[1].repo.href, Href::Unavailable);
    assert!(tree.section(Anchor::Contacto).is_some());

    let markdown = to_markdown(&tree);
    assert!(markdown.contains("### Bernoulli"));
    assert!(markdown.contains("[Email](mailto:ada@example.com)"));
    assert_eq!(markdown, to_markdown(&tree));
}
