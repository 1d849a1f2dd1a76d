use vitrine_a11y::{Mode, PanelControl};
use vitrine_web::effects::{is_current_nav, page_file_name};
use vitrine_web::page::control_id;

#[test]
fn nav_file_matching_handles_paths() {
    assert_eq!(page_file_name("/portfolio/trabalhos.html"), "trabalhos.html");
    assert!(is_current_nav("trabalhos.html", "trabalhos.html"));
    assert!(is_current_nav("trabalhos.html", "../trabalhos.html"));
    assert!(!is_current_nav("trabalhos.html", "contactos.html"));
}

#[test]
fn control_ids_match_the_page_contract() {
    assert_eq!(control_id(PanelControl::Mode(Mode::HighContrast)), "high-contrast");
    assert_eq!(control_id(PanelControl::Mode(Mode::DarkMode)), "dark-mode");
    assert_eq!(control_id(PanelControl::Mode(Mode::HighlightLinks)), "highlight-links");
    assert_eq!(control_id(PanelControl::Mode(Mode::IncreasedSpacing)), "line-height");
    assert_eq!(control_id(PanelControl::TextToSpeech), "text-to-speech");
}
