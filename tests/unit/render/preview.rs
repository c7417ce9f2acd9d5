//! Validates the HTML preview wrapper

use hexmosaic::render::preview::html_preview;

#[test]
fn test_preview_embeds_vector_document() {
    let page = html_preview("photo_mosaic.svg");

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<embed src=\"photo_mosaic.svg\""));
    assert!(page.contains("type=\"image/svg+xml\""));
    assert!(page.ends_with("</html>\n"));
}
