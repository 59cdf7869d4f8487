use bella_vista_page::*;
use test_utils::init_logging;
use std::time::Duration;

/// Page behavior tests: navigation scroll-sync, the gallery modal, scroll
/// reveals, and debounced dispatch.

fn sections() -> Vec<SectionGeometry> {
    vec![
        SectionGeometry {
            id: "home".to_string(),
            top: 0.0,
            height: 700.0,
        },
        SectionGeometry {
            id: "menu".to_string(),
            top: 700.0,
            height: 900.0,
        },
        SectionGeometry {
            id: "gallery".to_string(),
            top: 1600.0,
            height: 600.0,
        },
        SectionGeometry {
            id: "contact".to_string(),
            top: 2200.0,
            height: 500.0,
        },
    ]
}

#[test]
fn test_nav_tracks_sections_down_the_page() {
    init_logging();
    let mut tracker = NavTracker::new(sections(), PageConfig::default());

    let update = tracker.on_scroll(0.0, Theme::Light);
    assert_eq!(update.active_section.as_deref(), Some("home"));

    tracker.on_scroll(800.0, Theme::Light);
    assert_eq!(tracker.active_section(), Some("menu"));

    tracker.on_scroll(1700.0, Theme::Light);
    assert_eq!(tracker.active_section(), Some("gallery"));

    tracker.on_scroll(2400.0, Theme::Light);
    assert_eq!(tracker.active_section(), Some("contact"));
}

#[test]
fn test_nav_band_boundaries() {
    let mut tracker = NavTracker::new(sections(), PageConfig::default());

    // menu band: [700-150, 700-150+900] = [550, 1450]; probe = scroll + 100.
    tracker.on_scroll(450.0, Theme::Light);
    assert_eq!(tracker.active_section(), Some("menu"));

    tracker.on_scroll(449.0, Theme::Light);
    // The probe fell inside home's band just before menu's.
    assert_eq!(tracker.active_section(), Some("home"));
}

#[test]
fn test_navbar_style_follows_theme_and_depth() {
    let mut tracker = NavTracker::new(sections(), PageConfig::default());

    assert_eq!(
        tracker.on_scroll(0.0, Theme::Dark).navbar_background,
        "rgba(17, 24, 39, 0.95)"
    );
    assert_eq!(
        tracker.on_scroll(120.0, Theme::Dark).navbar_background,
        "rgba(17, 24, 39, 0.98)"
    );
    assert_eq!(
        tracker.on_scroll(120.0, Theme::Light).navbar_background,
        "rgba(255, 255, 255, 0.98)"
    );
}

#[test]
fn test_nav_scroll_targets() {
    let tracker = NavTracker::new(sections(), PageConfig::default());

    assert_eq!(tracker.scroll_target("#gallery"), Some(1520.0));
    assert_eq!(tracker.scroll_target("#nowhere"), None);
}

#[test]
fn test_gallery_modal_flow() {
    let mut modal = GalleryModal::new(vec![
        GalleryImage {
            id: "img-1".to_string(),
            thumb_src: "thumb-1.jpg".to_string(),
            full_src: Some("full-1.jpg".to_string()),
            alt: "Antipasto board".to_string(),
        },
        GalleryImage {
            id: "img-2".to_string(),
            thumb_src: "thumb-2.jpg".to_string(),
            full_src: None,
            alt: "Osso buco".to_string(),
        },
    ]);

    assert!(!modal.is_open());

    let content = modal.activate("img-1").unwrap().clone();
    assert_eq!(content.src, "full-1.jpg");
    assert!(modal.is_open());

    // Switching images replaces the modal content.
    let content = modal.activate("img-2").unwrap().clone();
    assert_eq!(content.src, "thumb-2.jpg");
    assert_eq!(content.alt, "Osso buco");

    assert!(modal.handle_modal_key(Key::Escape));
    assert!(!modal.is_open());
}

#[test]
fn test_gallery_keyboard_focus_activation() {
    let mut modal = GalleryModal::new(vec![GalleryImage {
        id: "img-1".to_string(),
        thumb_src: "thumb-1.jpg".to_string(),
        full_src: None,
        alt: "Antipasto board".to_string(),
    }]);

    assert_eq!(IMAGE_TAB_INDEX, 0);
    assert!(modal.handle_image_key("img-1", Key::Space));
    assert!(modal.is_open());
    assert!(!modal.handle_image_key("img-1", Key::Other));
}

#[test]
fn test_reveal_staggering_and_one_shot() {
    let mut reveals = RevealController::new();

    let first = reveals.register("card-0", RevealKind::MenuCard, 0);
    let second = reveals.register("card-1", RevealKind::MenuCard, 1);
    assert_eq!(first.transition, "opacity 0.6s ease 0s, transform 0.6s ease 0s");
    assert_eq!(second.transition, "opacity 0.6s ease 0.1s, transform 0.6s ease 0.1s");

    let revealed = reveals.on_intersection("card-1", true).unwrap();
    assert_eq!(revealed.opacity, 1.0);
    assert_eq!(revealed.translate_y, 0.0);

    assert!(reveals.on_intersection("card-1", true).is_none());
    assert!(reveals.is_revealed("card-1"));
    assert!(!reveals.is_revealed("card-0"));
}

#[test]
fn test_gallery_images_reveal_with_their_own_profile() {
    let mut reveals = RevealController::new();
    let style = reveals.register("img-0", RevealKind::GalleryImage, 0);

    assert_eq!(style.translate_y, 20.0);
    assert!(style.transition.starts_with("opacity 0.5s"));
}

#[tokio::test]
async fn test_debounced_scroll_dispatch() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let debouncer = Debouncer::new(Duration::from_millis(30));
    let dispatched = Arc::new(AtomicUsize::new(0));

    for _ in 0..10 {
        let dispatched = Arc::clone(&dispatched);
        debouncer
            .call(move || {
                dispatched.fetch_add(1, Ordering::SeqCst);
            })
            .await;
    }

    tokio::time::sleep(Duration::from_millis(80)).await;
    assert_eq!(dispatched.load(Ordering::SeqCst), 1);
}
