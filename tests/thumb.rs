use scrollthumb::dom::{Document, Style};
use scrollthumb::{Offsets, ScrollbarError, ScrollbarThumb, TrackDirection};

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

fn thumb(document: &mut Document, direction: TrackDirection, min_size: f64, offsets: Offsets) -> ScrollbarThumb {
    ScrollbarThumb::new(document, direction, min_size, offsets).unwrap()
}

#[test]
fn test_thumb_class_names() {
    let mut document = Document::new();
    let vertical = ScrollbarThumb::with_defaults(&mut document, TrackDirection::Vertical).unwrap();
    let horizontal = ScrollbarThumb::with_defaults(&mut document, TrackDirection::Horizontal).unwrap();

    let element = document.get(vertical.element()).unwrap();
    assert_eq!(element.class_name(), "scrollbar-thumb scrollbar-thumb-y");
    assert!(element.has_class("scrollbar-thumb"));
    assert_eq!(element.tag(), "div");
    assert!(element.parent().is_none(), "A new thumb starts detached");

    let element = document.get(horizontal.element()).unwrap();
    assert_eq!(element.class_name(), "scrollbar-thumb scrollbar-thumb-x");
}

#[test]
fn test_proportional_size_without_floor() {
    // 200px container over 1000px of content, half way through
    let mut document = Document::new();
    let mut thumb = thumb(&mut document, TrackDirection::Vertical, 20.0, Offsets::default());

    thumb.update(&mut document, 400.0, 200.0, 1000.0).unwrap();

    assert_close(thumb.real_size(), 40.0);
    assert_close(thumb.display_size(), 40.0);
    assert_close(thumb.offset(), 80.0);
}

#[test]
fn test_min_size_floor_shrinks_travel() {
    // 200px container over 10000px of content, half way through
    let mut document = Document::new();
    let mut floored = thumb(&mut document, TrackDirection::Vertical, 20.0, Offsets::default());
    let mut unfloored = thumb(&mut document, TrackDirection::Vertical, 0.0, Offsets::default());

    floored.update(&mut document, 4900.0, 200.0, 10_000.0).unwrap();
    unfloored.update(&mut document, 4900.0, 200.0, 10_000.0).unwrap();

    assert_close(floored.real_size(), 4.0);
    assert_close(floored.display_size(), 20.0);
    assert_close(floored.offset(), 0.49 * (200.0 + 4.0 - 20.0));

    // Travel shrinks by the inflation, scaled by how far the content is scrolled
    let scrolled = 4900.0;
    assert_close(
        unfloored.offset() - floored.offset(),
        scrolled / 10_000.0 * (20.0 - 4.0),
    );
}

#[test]
fn test_display_size_monotonic_in_min_size() {
    let mut document = Document::new();
    let mut previous = f64::NEG_INFINITY;

    for step in 0..12 {
        let min_size = f64::from(step) * 10.0;
        let mut thumb = thumb(&mut document, TrackDirection::Horizontal, min_size, Offsets::default());
        thumb.update(&mut document, 100.0, 300.0, 900.0).unwrap();

        assert!(thumb.display_size() >= previous);
        assert!(thumb.display_size() >= min_size);
        assert!(thumb.display_size() >= thumb.real_size());
        previous = thumb.display_size();
    }
}

#[test]
fn test_offsets_shift_and_bound_the_thumb() {
    let offsets = Offsets::new(10.0, 100.0, 6.0, 100.0);
    let mut document = Document::new();
    let mut thumb = thumb(&mut document, TrackDirection::Vertical, 0.0, offsets);

    // At the top the thumb sits flush with the leading inset
    thumb.update(&mut document, 0.0, 216.0, 1000.0).unwrap();
    assert_close(thumb.offset(), 10.0);
    assert_close(thumb.real_size(), 40.0);

    // Fully scrolled it ends at the trailing inset
    thumb.update(&mut document, 1000.0 - 216.0, 216.0, 1000.0).unwrap();
    assert_close(thumb.offset(), 170.0);
    assert_close(
        thumb.offset() + thumb.display_size(),
        216.0 - offsets.trailing(TrackDirection::Vertical),
    );
}

#[test]
fn test_horizontal_insets_use_left_and_right() {
    let offsets = Offsets::new(0.0, 30.0, 0.0, 7.0);
    let mut document = Document::new();
    let mut thumb = thumb(&mut document, TrackDirection::Horizontal, 0.0, offsets);
    assert_eq!(thumb.layout().reduction(), 37.0);

    thumb.update(&mut document, 0.0, 200.0, 1000.0).unwrap();
    assert_close(thumb.offset(), 7.0);
    assert_eq!(
        document.get(thumb.element()).unwrap().style().get("transform"),
        Some("translate3d(7px, 0, 0)")
    );

    thumb.update(&mut document, 800.0, 200.0, 1000.0).unwrap();
    assert_close(thumb.geometry().end(), 170.0);
    assert_close(thumb.geometry().end(), 200.0 - offsets.trailing(TrackDirection::Horizontal));
}

#[test]
fn test_fully_scrolled_reaches_track_end() {
    let mut document = Document::new();
    let offsets = Offsets::uniform(3.0);
    let mut thumb = thumb(&mut document, TrackDirection::Horizontal, 0.0, offsets);
    let trailing = thumb.layout().offsets().trailing(TrackDirection::Horizontal);

    for (container, page) in [(300.0, 450.0), (120.0, 4000.0), (640.0, 641.0)] {
        thumb.update(&mut document, page - container, container, page).unwrap();
        assert!((thumb.geometry().end() - (container - trailing)).abs() < 1e-6);
    }
}

#[test]
fn test_direction_selects_style_axis() {
    let mut document = Document::new();
    let mut vertical = thumb(&mut document, TrackDirection::Vertical, 0.0, Offsets::default());
    let mut horizontal = thumb(&mut document, TrackDirection::Horizontal, 0.0, Offsets::default());

    vertical.update(&mut document, 250.0, 500.0, 1000.0).unwrap();
    horizontal.update(&mut document, 250.0, 500.0, 1000.0).unwrap();

    assert_eq!(vertical.geometry(), horizontal.geometry());

    let style = document.get(vertical.element()).unwrap().style();
    assert_eq!(style.get("height"), Some("250px"));
    assert_eq!(style.get("width"), None);
    assert_eq!(style.get("transform"), Some("translate3d(0, 125px, 0)"));

    let style = document.get(horizontal.element()).unwrap().style();
    assert_eq!(style.get("width"), Some("250px"));
    assert_eq!(style.get("height"), None);
    assert_eq!(style.get("transform"), Some("translate3d(125px, 0, 0)"));
}

#[test]
fn test_transform_written_with_vendor_prefixes() {
    let mut document = Document::new();
    let mut thumb = thumb(&mut document, TrackDirection::Vertical, 0.0, Offsets::default());
    thumb.update(&mut document, 0.0, 500.0, 1000.0).unwrap();

    let style = document.get(thumb.element()).unwrap().style();
    assert_eq!(style.len(), 6);
    for property in [
        "transform",
        "-webkit-transform",
        "-moz-transform",
        "-ms-transform",
        "-o-transform",
    ] {
        assert_eq!(style.get(property), Some("translate3d(0, 0px, 0)"), "{property}");
    }
}

#[test]
fn test_update_keeps_unrelated_style() {
    let mut document = Document::new();
    let mut thumb = thumb(&mut document, TrackDirection::Vertical, 0.0, Offsets::default());
    document.set_style(thumb.element(), &Style::new().with("opacity", "0.5")).unwrap();

    thumb.update(&mut document, 0.0, 500.0, 1000.0).unwrap();
    thumb.update(&mut document, 500.0, 500.0, 1000.0).unwrap();

    let style = document.get(thumb.element()).unwrap().style();
    assert_eq!(style.get("opacity"), Some("0.5"));
    assert_eq!(style.get("transform"), Some("translate3d(0, 250px, 0)"));
}

#[test]
fn test_degenerate_input_is_written_as_is() {
    let mut document = Document::new();
    let mut thumb = thumb(&mut document, TrackDirection::Vertical, 0.0, Offsets::default());

    // Nothing to scroll: the ratio is 0 / 0
    assert!(thumb.update(&mut document, 0.0, 200.0, 200.0).is_ok());
    assert!(thumb.offset().is_nan());
    assert!(!thumb.geometry().is_finite());

    let style = document.get(thumb.element()).unwrap().style();
    assert_eq!(style.get("height"), Some("200px"));
    assert_eq!(style.get("transform"), Some("translate3d(0, NaNpx, 0)"));

    // Empty page and zero container never fail either
    assert!(thumb.update(&mut document, 10.0, 200.0, 0.0).is_ok());
    assert!(thumb.update(&mut document, 0.0, 0.0, 0.0).is_ok());
}

#[test]
fn test_attach_moves_between_tracks() {
    let mut document = Document::new();
    let first = document.create_element("div");
    let second = document.create_element("div");
    let sibling = document.create_element("span");
    document.append_child(second, sibling).unwrap();

    let thumb = ScrollbarThumb::with_defaults(&mut document, TrackDirection::Vertical).unwrap();

    thumb.attach_to(&mut document, first).unwrap();
    assert_eq!(document.get(first).unwrap().children(), &[thumb.element()]);

    thumb.attach_to(&mut document, second).unwrap();
    assert!(document.get(first).unwrap().children().is_empty());
    assert_eq!(document.get(second).unwrap().children(), &[sibling, thumb.element()]);
    assert_eq!(document.get(thumb.element()).unwrap().parent(), Some(second));
}

#[test]
fn test_attach_does_not_change_geometry() {
    let mut document = Document::new();
    let track = document.create_element("div");
    let mut thumb = ScrollbarThumb::with_defaults(&mut document, TrackDirection::Horizontal).unwrap();
    thumb.update(&mut document, 100.0, 400.0, 800.0).unwrap();
    let before = thumb.geometry();

    thumb.attach_to(&mut document, track).unwrap();
    assert_eq!(thumb.geometry(), before);
}

#[test]
fn test_destroy_removes_element() {
    let mut document = Document::new();
    let track = document.create_element("div");
    let thumb = ScrollbarThumb::with_defaults(&mut document, TrackDirection::Vertical).unwrap();
    let element = thumb.element();
    thumb.attach_to(&mut document, track).unwrap();

    thumb.destroy(&mut document).unwrap();

    assert!(!document.contains(element));
    assert!(document.get(track).unwrap().children().is_empty());
    assert_eq!(document.len(), 1);
}

#[test]
fn test_update_against_foreign_document_fails() {
    let mut document = Document::new();
    let mut thumb = ScrollbarThumb::with_defaults(&mut document, TrackDirection::Vertical).unwrap();

    let mut other = Document::new();
    let result = thumb.update(&mut other, 0.0, 200.0, 1000.0);
    assert_eq!(result, Err(ScrollbarError::NodeNotFound(thumb.element())));

    // The geometry is still computed
    assert!(thumb.real_size() > 0.0);
}

#[test]
fn test_direction_parsing() {
    assert_eq!("x".parse::<TrackDirection>(), Ok(TrackDirection::Horizontal));
    assert_eq!("Vertical".parse::<TrackDirection>(), Ok(TrackDirection::Vertical));
    assert_eq!(
        "z".parse::<TrackDirection>(),
        Err(ScrollbarError::UnknownDirection("z".to_string()))
    );
    assert_eq!(TrackDirection::Vertical.to_string(), "y");
}
