use super::*;

fn sample_doc() -> String {
    "\
/**
 * @function cf_audio_play
 * @brief    Plays a sound.
 * @related  CF_AUDIO_PARAMS cf_audio_stop cf_audio_pause cf_audio_resume
 */
void cf_audio_play();
"
    .to_string()
}

#[test]
fn rewrites_related_line_with_curated_order() {
    let curator = RelatedCurator::new();
    let outcome = rewrite_document(&sample_doc(), &curator);

    assert!(outcome.is_changed());
    assert_eq!(outcome.changes.len(), 1);

    let change = &outcome.changes[0];
    assert_eq!(change.line, 4);
    assert_eq!(change.entity, "cf_audio_play");
    assert_eq!(change.kind, EntityKind::Function);
    assert_eq!(
        change.after,
        vec![
            "cf_audio_pause".to_string(),
            "cf_audio_stop".to_string(),
            "cf_audio_resume".to_string(),
        ]
    );

    let content = outcome.content.unwrap();
    assert!(content.contains(" * @related  cf_audio_pause cf_audio_stop cf_audio_resume\n"));
    assert!(content.ends_with('\n'));
    assert!(!content.contains("CF_AUDIO_PARAMS cf_audio_stop"));
}

#[test]
fn curated_document_is_left_untouched() {
    let curator = RelatedCurator::new();
    let first = rewrite_document(&sample_doc(), &curator);
    let second = rewrite_document(&first.content.unwrap(), &curator);

    assert!(!second.is_changed());
    assert!(second.changes.is_empty());
}

#[test]
fn spacing_is_normalized_even_when_tokens_match() {
    // Single space after the tag; the canonical line uses two.
    let source = "/**\n * @function zmain\n * @related zhelper\n */\n";
    let curator = RelatedCurator::new();
    let outcome = rewrite_document(source, &curator);

    assert!(outcome.is_changed());
    let change = &outcome.changes[0];
    assert_eq!(change.before, vec!["zhelper".to_string()]);
    assert_eq!(change.after, vec!["zhelper".to_string()]);
    assert!(outcome
        .content
        .unwrap()
        .contains(" * @related  zhelper\n"));
}

#[test]
fn crlf_documents_keep_their_line_endings() {
    let source = sample_doc().replace('\n', "\r\n");
    let curator = RelatedCurator::new();
    let outcome = rewrite_document(&source, &curator);

    let content = outcome.content.unwrap();
    assert!(content.contains(" * @related  cf_audio_pause cf_audio_stop cf_audio_resume\r\n"));
    assert!(content.ends_with("\r\n"));
    assert!(!content.contains("void cf_audio_play();\n\n"));
}

#[test]
fn documents_without_annotations_are_unchanged() {
    let curator = RelatedCurator::new();
    let outcome = rewrite_document("#pragma once\n\nint x;\n", &curator);
    assert!(!outcome.is_changed());
}

#[test]
fn override_entities_get_their_golden_list() {
    let source = "/**\n * @function slen\n * @related  whatever was here\n */\n";
    let curator = RelatedCurator::new();
    let outcome = rewrite_document(source, &curator);

    assert!(outcome
        .content
        .unwrap()
        .contains(" * @related  scount sempty sset\n"));
}

#[test]
fn detect_line_ending_prefers_crlf_when_present() {
    assert_eq!(detect_line_ending("a\r\nb\r\n"), "\r\n");
    assert_eq!(detect_line_ending("a\nb\n"), "\n");
    assert_eq!(detect_line_ending(""), "\n");
}
