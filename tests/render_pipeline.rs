//! Service JSON through the renderer to segments and markup.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wdid::engine::palette::{PALETTE, TILT_RANGE};
use wdid::engine::{Category, PromptRecord, PromptRenderer, RenderError};

fn render_json(json: &str) -> wdid::engine::RenderedPrompt {
    let record = PromptRecord::from_json(json).unwrap();
    PromptRenderer::new()
        .render_with(&record, &mut StdRng::seed_from_u64(7))
        .unwrap()
}

#[test]
fn daily_payload_to_markup() {
    let rendered = render_json(
        r##"{
            "prompt": "A fox & hound",
            "subject": "fox",
            "item": "hound",
            "backgroundColor": "#F59E0B",
            "hashtag": "#WDID250106"
        }"##,
    );

    assert_eq!(rendered.presentation.background_color, "#F59E0B");
    assert_eq!(
        rendered.markup(),
        concat!(
            r#"A <span class="clickable-word word-subject" data-word="fox">fox</span>"#,
            " &amp; ",
            r#"<span class="clickable-word word-item" data-word="hound">hound</span>"#
        )
    );
}

#[test]
fn segments_concatenate_to_prompt() {
    let prompt = "Three hot air balloons drifting over a sleepy harbor at dawn";
    let rendered = render_json(&format!(
        r#"{{ "prompt": "{}", "adjective": "sleepy", "subject": "hot air balloons",
             "action": "drifting", "item": "air", "scene": "harbor at dawn" }}"#,
        prompt
    ));

    assert_eq!(rendered.plain_text(), prompt);
    let words: Vec<_> = rendered
        .words()
        .map(|s| (s.text.as_str(), s.category))
        .collect();
    assert_eq!(
        words,
        vec![
            ("hot air balloons", Some(Category::Subject)),
            ("drifting", Some(Category::Action)),
            ("sleepy", Some(Category::Adjective)),
            ("harbor at dawn", Some(Category::Scene)),
        ]
    );
}

#[test]
fn case_insensitive_match_keeps_prompt_casing() {
    let rendered = render_json(r#"{ "prompt": "Owls everywhere", "subject": "owls" }"#);
    assert_eq!(rendered.word_at(0).unwrap().text, "Owls");
}

#[test]
fn null_and_blank_slots_are_ignored() {
    let rendered = render_json(
        r#"{ "prompt": "A cat napping", "subject": "cat", "action": null, "item": "  " }"#,
    );
    assert_eq!(rendered.word_count(), 1);
}

#[test]
fn missing_color_falls_back_to_palette() {
    let rendered = render_json(r#"{ "prompt": "A cat", "subject": "cat" }"#);
    assert!(PALETTE.contains(&rendered.presentation.background_color.as_str()));
    assert!(TILT_RANGE.contains(&rendered.presentation.rotation_degrees));
}

#[test]
fn malformed_payloads_are_invalid_input() {
    for json in [r#"{ "subject": "cat" }"#, r#"{ "prompt": "   " }"#] {
        let record = PromptRecord::from_json(json).unwrap();
        assert!(matches!(
            PromptRenderer::new().render(&record),
            Err(RenderError::InvalidInput(_))
        ));
    }
    assert!(matches!(
        PromptRecord::from_json("[1, 2]"),
        Err(RenderError::InvalidInput(_))
    ));
}

#[test]
fn later_slot_found_right_after_claimed_phrase() {
    let rendered =
        render_json(r#"{ "prompt": "sing la la la", "adjective": "sing la", "item": "la la" }"#);
    assert_eq!(
        rendered.markup(),
        concat!(
            r#"<span class="clickable-word word-adjective" data-word="sing la">sing la</span> "#,
            r#"<span class="clickable-word word-item" data-word="la la">la la</span>"#
        )
    );
}
