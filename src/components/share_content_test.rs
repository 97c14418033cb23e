use super::*;

#[test]
fn display_path_strips_leading_separators() {
    assert_eq!(display_path("/docs/a.txt"), "docs/a.txt");
    assert_eq!(display_path("\\b.bin"), "b.bin");
    assert_eq!(display_path("plain.txt"), "plain.txt");
}

#[test]
fn only_http_urls_are_linkable() {
    assert!(is_linkable("https://example.com\n"));
    assert!(is_linkable("http://example.com"));
    assert!(!is_linkable("javascript:alert(1)"));
    assert!(!is_linkable("ftp://example.com"));
}

#[test]
fn media_types_embed_inline() {
    assert_eq!(inline_preview(FileType::Image), Some(InlinePreview::Image));
    assert_eq!(inline_preview(FileType::Video), Some(InlinePreview::Video));
    assert_eq!(inline_preview(FileType::Audio), Some(InlinePreview::Audio));
}

#[test]
fn documents_link_to_rendered_preview() {
    assert_eq!(inline_preview(FileType::Text), Some(InlinePreview::Link));
    assert_eq!(inline_preview(FileType::Document), Some(InlinePreview::Link));
    assert_eq!(inline_preview(FileType::Unknown), None);
}
