use songsheet::infrastructure::extraction::text_cleaner::{
    CleaningProfile, TITLE_PLACEHOLDER, clean_text, draft_sheet, extract_body,
    extract_title_hint, is_boilerplate_line, trim_to_intro,
};

#[test]
fn given_line_break_tags_when_cleaning_then_become_newlines() {
    let cleaned = clean_text("Hello<br/>World<BR>Again", &CleaningProfile::lyrics());
    assert_eq!(cleaned, "Hello\nWorld\nAgain");
}

#[test]
fn given_markup_when_cleaning_then_tags_are_removed() {
    let cleaned = clean_text("<p><b>Di atas</b> awan</p>", &CleaningProfile::lyrics());
    assert_eq!(cleaned, "Di atas awan");
}

#[test]
fn given_site_names_when_cleaning_then_they_are_removed() {
    let cleaned = clean_text(
        "Lagu ini dari TribunBali dan kompas.net",
        &CleaningProfile::lyrics(),
    );

    assert!(!cleaned.contains("Tribun"));
    assert!(!cleaned.contains("kompas"));
    assert!(cleaned.starts_with("Lagu ini dari"));
}

#[test]
fn given_words_containing_city_names_when_cleaning_lyrics_then_words_survive() {
    let cleaned = clean_text("kembali ke Bali", &CleaningProfile::lyrics());
    assert_eq!(cleaned, "kembali ke");
}

#[test]
fn given_word_starting_with_com_when_cleaning_chords_then_only_bare_token_is_removed() {
    let cleaned = clean_text("Community COM", &CleaningProfile::chord());
    assert_eq!(cleaned, "Community");
}

#[test]
fn given_leading_symbols_when_cleaning_then_line_starts_at_first_letter() {
    let cleaned = clean_text("123 - Reff: la la", &CleaningProfile::chord());
    assert_eq!(cleaned, "Reff: la la");
}

#[test]
fn given_bangkapos_when_cleaning_then_only_lyrics_removes_it() {
    let lyrics = clean_text("Kunci BANGKAPOS.COM", &CleaningProfile::lyrics());
    let chord = clean_text("Kunci BANGKAPOS.COM", &CleaningProfile::chord());

    assert_eq!(lyrics, "Kunci");
    assert!(chord.contains("BANGKAPOS"));
}

#[test]
fn given_boilerplate_markers_when_checking_lines_then_detected() {
    assert!(is_boilerplate_line("Baca juga: lagu lain"));
    assert!(is_boilerplate_line("simak video berikut"));
    assert!(is_boilerplate_line("Copyright 2023"));
    assert!(is_boilerplate_line("ini berita terbaru"));
    assert!(!is_boilerplate_line("Am G C F"));
}

#[test]
fn given_heading_when_extracting_title_hint_then_returns_cleaned_text() {
    let hint = extract_title_hint(
        "<div><h1>Lirik Lagu Bintang TribunNews</h1></div>",
        &CleaningProfile::lyrics(),
    );
    assert_eq!(hint.as_deref(), Some("Lirik Lagu Bintang"));
}

#[test]
fn given_no_heading_or_empty_heading_when_extracting_title_hint_then_none() {
    let profile = CleaningProfile::lyrics();
    assert_eq!(extract_title_hint("<p>no heading</p>", &profile), None);
    assert_eq!(extract_title_hint("<h1>123</h1>", &profile), None);
}

#[test]
fn given_tribun_line_when_extracting_body_then_lyrics_drops_it_and_chord_keeps_cleaned_rest() {
    let raw = "Tribun Am G\nC D";

    let lyrics = extract_body(raw, &CleaningProfile::lyrics());
    let chord = extract_body(raw, &CleaningProfile::chord());

    assert_eq!(lyrics.as_deref(), Some("C D"));
    assert_eq!(chord.as_deref(), Some("Am G\nC D"));
}

#[test]
fn given_only_noise_when_extracting_body_then_none() {
    assert_eq!(extract_body("<br>\n---\n", &CleaningProfile::lyrics()), None);
}

#[test]
fn given_intro_marker_when_trimming_then_text_starts_at_marker_line() {
    let trimmed = trim_to_intro("Judul lagu\nKunci dasar\n[Intro] C G\nAm F");
    assert_eq!(trimmed, "[Intro] C G\nAm F");
}

#[test]
fn given_no_intro_marker_when_trimming_then_text_is_unchanged() {
    let body = "C G\nAm F";
    assert_eq!(trim_to_intro(body), body);
}

#[test]
fn given_page_without_content_when_drafting_then_uses_placeholders() {
    let lyrics = draft_sheet("<h1>123</h1>", &CleaningProfile::lyrics());
    let chord = draft_sheet("<h1>123</h1>", &CleaningProfile::chord());

    assert_eq!(lyrics.title_hint, TITLE_PLACEHOLDER);
    assert_eq!(lyrics.body, "Lyrics not found");
    assert_eq!(chord.body, "Chord not found");
}

#[test]
fn given_chord_page_when_drafting_then_body_starts_at_intro() {
    let raw = concat!(
        "<h1>Chord Bintang - Peterpan</h1>\n",
        "<p>Kunci gitar lagu ini</p>\n",
        "<pre>[Intro] C G Am F</pre>\n",
        "<pre>C        G\nBintang di surga</pre>\n",
        "<p>Baca juga: chord lainnya</p>"
    );

    let draft = draft_sheet(raw, &CleaningProfile::chord());

    assert_eq!(draft.title_hint, "Chord Bintang - Peterpan");
    assert!(draft.body.starts_with("Intro] C G Am F"));
    assert!(draft.body.contains("Bintang di surga"));
    assert!(!draft.body.contains("Kunci gitar"));
    assert!(!draft.body.to_lowercase().contains("baca juga"));
}
