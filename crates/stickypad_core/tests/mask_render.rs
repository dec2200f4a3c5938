use stickypad_core::{
    add_hidden_range, clear_hidden_ranges, render, HiddenRange, MaskSegment, Note, NotePatch,
};

fn note_with_content(content: &str) -> Note {
    Note::with_text(1, "title", content, "#F472B6")
}

fn concatenated(segments: &[MaskSegment]) -> String {
    segments.iter().map(MaskSegment::text).collect()
}

#[test]
fn hiding_a_prefix_splits_into_masked_and_plain_segments() {
    let mut note = note_with_content("hello world");
    assert!(add_hidden_range(&mut note, 0, 5));

    let segments = render(&note);
    assert_eq!(
        segments,
        vec![
            MaskSegment::Masked("hello".to_string()),
            MaskSegment::Plain(" world".to_string()),
        ]
    );
}

#[test]
fn restore_returns_render_to_plain_content() {
    let mut note = note_with_content("hello world");
    add_hidden_range(&mut note, 0, 5);
    add_hidden_range(&mut note, 6, 11);

    assert_eq!(clear_hidden_ranges(&mut note), 2);
    assert!(note.hidden_ranges.is_empty());
    assert_eq!(
        render(&note),
        vec![MaskSegment::Plain("hello world".to_string())]
    );
}

#[test]
fn collapsed_selection_is_rejected() {
    let mut note = note_with_content("hello");
    assert!(!add_hidden_range(&mut note, 3, 3));
    assert!(note.hidden_ranges.is_empty());
}

#[test]
fn out_of_bounds_selection_is_rejected() {
    let mut note = note_with_content("hello");
    assert!(!add_hidden_range(&mut note, 2, 9));
    assert!(!add_hidden_range(&mut note, 9, 12));
    assert!(note.hidden_ranges.is_empty());
}

#[test]
fn reversed_selection_is_normalized() {
    let mut note = note_with_content("hello world");
    assert!(add_hidden_range(&mut note, 11, 6));
    assert_eq!(note.hidden_ranges, vec![HiddenRange::new(6, 11)]);
}

#[test]
fn accumulated_ranges_are_kept_without_merging() {
    let mut note = note_with_content("abcdefgh");
    add_hidden_range(&mut note, 0, 3);
    add_hidden_range(&mut note, 2, 5);
    add_hidden_range(&mut note, 2, 5);

    // Storage keeps duplicates and overlap; only rendering normalizes.
    assert_eq!(note.hidden_ranges.len(), 3);
}

#[test]
fn overlapping_ranges_never_double_emit_characters() {
    let mut note = note_with_content("abcdefgh");
    add_hidden_range(&mut note, 0, 4);
    add_hidden_range(&mut note, 2, 6);

    let segments = render(&note);
    assert_eq!(
        segments,
        vec![
            MaskSegment::Masked("abcdef".to_string()),
            MaskSegment::Plain("gh".to_string()),
        ]
    );
    assert_eq!(concatenated(&segments), "abcdefgh");
}

#[test]
fn unsorted_ranges_render_in_ascending_order() {
    let mut note = note_with_content("abcdefghij");
    add_hidden_range(&mut note, 7, 9);
    add_hidden_range(&mut note, 1, 3);

    let segments = render(&note);
    assert_eq!(
        segments,
        vec![
            MaskSegment::Plain("a".to_string()),
            MaskSegment::Masked("bc".to_string()),
            MaskSegment::Plain("defg".to_string()),
            MaskSegment::Masked("hi".to_string()),
            MaskSegment::Plain("j".to_string()),
        ]
    );
}

#[test]
fn render_round_trip_reproduces_content() {
    let cases: &[(&str, &[(usize, usize)])] = &[
        ("hello world", &[(0, 5)]),
        ("hello world", &[(0, 5), (6, 11)]),
        ("abcdefgh", &[(0, 4), (2, 6), (7, 8)]),
        ("abcdefgh", &[(0, 8)]),
        ("short", &[]),
        ("", &[]),
    ];

    for (content, spans) in cases {
        let mut note = note_with_content(content);
        for (start, end) in *spans {
            add_hidden_range(&mut note, *start, *end);
        }
        assert_eq!(&concatenated(&render(&note)), content);
    }
}

#[test]
fn masking_uses_character_offsets_for_multibyte_text() {
    let mut note = note_with_content("日本語のメモ");
    assert!(add_hidden_range(&mut note, 0, 3));

    let segments = render(&note);
    assert_eq!(
        segments,
        vec![
            MaskSegment::Masked("日本語".to_string()),
            MaskSegment::Plain("のメモ".to_string()),
        ]
    );
}

#[test]
fn full_width_mask_emits_single_masked_segment() {
    let mut note = note_with_content("secret");
    add_hidden_range(&mut note, 0, 6);

    assert_eq!(
        render(&note),
        vec![MaskSegment::Masked("secret".to_string())]
    );
}

#[test]
fn editing_bypasses_masking_entirely() {
    let mut note = note_with_content("hello world");
    add_hidden_range(&mut note, 0, 5);

    note.begin_edit();
    note.stage(&NotePatch::content("hello world!"));

    assert_eq!(
        render(&note),
        vec![MaskSegment::Plain("hello world!".to_string())]
    );

    note.commit_edit();
    let segments = render(&note);
    assert!(segments[0].is_masked());
}

#[test]
fn ranges_stranded_by_edits_are_clamped_at_render_time() {
    let mut note = note_with_content("hello world");
    add_hidden_range(&mut note, 6, 11);

    // Bypass patch-time clamping to model a stale stored span.
    note.content = "hello".to_string();

    assert_eq!(
        render(&note),
        vec![MaskSegment::Plain("hello".to_string())]
    );
}
