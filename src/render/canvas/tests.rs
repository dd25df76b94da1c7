// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use super::{Canvas, CanvasError};
use crate::format::parse_board;
use crate::layout::{CanvasConfig, ConfigError};
use crate::model::fixtures::{
    board_interleaved_owners, BACKWARD_ACTION, GREETING_ROUND, LONG_NOTE, SHORT_NOTE,
    TWO_PARTICIPANTS_ONE_ACTION,
};
use crate::model::{Action, Board, Direction, Note};
use crate::render::{DrawPrimitive, FontStyle, Scene, VerticalAnchor};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < EPS, "expected {expected}, got {actual}");
}

fn render_text(text: &str) -> Scene {
    let board = parse_board(text).expect("parse");
    Canvas::new(&board, CanvasConfig::default()).render().expect("render")
}

#[fixture]
fn greeting_scene() -> Scene {
    render_text(GREETING_ROUND)
}

#[test]
fn forward_action_emits_one_arrow_between_lifelines() {
    let scene = render_text(TWO_PARTICIPANTS_ONE_ACTION);

    let arrows = scene.arrows().collect::<Vec<_>>();
    assert_eq!(arrows.len(), 1);
    assert_close(arrows[0].from.x, -1.25);
    assert_close(arrows[0].to.x, 1.25);
    assert_close(arrows[0].from.y, 8.5);
    assert_eq!(arrows[0].line_no, 3);

    let label = scene.texts_for_line(3);
    assert_eq!(label.len(), 1);
    assert_eq!(label[0].text, "hi");
    assert_close(label[0].anchor.x, 0.0);
    assert_close(label[0].anchor.y, 8.5 + 0.15);
    assert_eq!(label[0].vertical, VerticalAnchor::Bottom);
}

#[test]
fn backward_action_points_at_its_sender() {
    // `B<-A`: B owns the action, the arrow starts at A and its head lands on B.
    let scene = render_text(BACKWARD_ACTION);
    let board = parse_board(BACKWARD_ACTION).expect("parse");
    let canvas = Canvas::new(&board, CanvasConfig::default());
    let a_x = canvas.positions().get("A").expect("A");
    let b_x = canvas.positions().get("B").expect("B");

    let arrows = scene.arrows().collect::<Vec<_>>();
    assert_eq!(arrows.len(), 1);
    assert_close(arrows[0].from.x, a_x);
    assert_close(arrows[0].to.x, b_x);
}

#[rstest]
#[case("participant A\nparticipant B\nA->B: m", -1.25, 1.25)]
#[case("participant A\nparticipant B\nB<-A: m", -1.25, 1.25)]
#[case("participant A\nparticipant B\nB->A: m", 1.25, -1.25)]
#[case("participant A\nparticipant B\nA<-B: m", 1.25, -1.25)]
fn arrow_orientation_follows_direction(
    #[case] text: &str,
    #[case] from_x: f64,
    #[case] to_x: f64,
) {
    let scene = render_text(text);
    let arrow = scene.arrows().next().expect("arrow");
    assert_close(arrow.from.x, from_x);
    assert_close(arrow.to.x, to_x);
}

#[test]
fn self_message_is_a_zero_length_arrow() {
    let scene = render_text("participant A\nA->A: think");
    let arrow = scene.arrows().next().expect("arrow");
    assert!(arrow.is_self_message());
    assert_close(arrow.from.x, 0.0);
}

#[rstest]
fn headers_come_first_with_box_label_and_lifeline(greeting_scene: Scene) {
    assert_eq!(greeting_scene.rects().count(), 3);
    assert_eq!(greeting_scene.lines().count(), 3);

    let header_kinds = greeting_scene.primitives[..9]
        .iter()
        .map(|p| match p {
            DrawPrimitive::Rect(_) => "rect",
            DrawPrimitive::Text(_) => "text",
            DrawPrimitive::Line(_) => "line",
            DrawPrimitive::Arrow(_) => "arrow",
        })
        .collect::<Vec<_>>();
    assert_eq!(header_kinds, ["rect", "text", "line"].repeat(3));

    let labels = greeting_scene
        .texts()
        .filter(|t| t.line_no.is_none())
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["Alice", "Bob", "Charlie"]);

    for rect in greeting_scene.rects() {
        assert_close(rect.center().y, 10.0);
        assert_close(rect.width, 1.5);
    }
}

#[rstest]
fn lifelines_reach_the_final_cursor(greeting_scene: Scene) {
    let last_event_y = greeting_scene.arrows().last().expect("arrow").from.y;
    for line in greeting_scene.lines() {
        assert!(line.dashed);
        assert_close(line.from.y, 9.8);
        assert_close(line.to.y, last_event_y);
        assert_close(line.from.x, line.to.x);
    }
}

#[rstest]
fn events_follow_source_line_order(greeting_scene: Scene) {
    let event_lines = greeting_scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            DrawPrimitive::Arrow(arrow) => Some(arrow.line_no),
            DrawPrimitive::Text(text) => text.line_no,
            _ => None,
        })
        .collect::<Vec<_>>();
    let mut sorted = event_lines.clone();
    sorted.sort_unstable();
    assert_eq!(event_lines, sorted);

    let ys = [5, 7, 9, 11, 13]
        .iter()
        .map(|line| greeting_scene.texts_for_line(*line)[0].anchor.y)
        .collect::<Vec<_>>();
    for pair in ys.windows(2) {
        assert!(pair[1] < pair[0], "cursor must move down: {ys:?}");
    }
}

#[test]
fn interleaved_owners_are_drawn_in_line_order() {
    let board = board_interleaved_owners();
    let scene = Canvas::new(&board, CanvasConfig::default()).render().expect("render");

    let rows = scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            DrawPrimitive::Arrow(arrow) => Some((arrow.line_no, arrow.from.y)),
            DrawPrimitive::Text(text) => {
                text.line_no.filter(|_| text.style == FontStyle::Italic).map(|l| (l, text.anchor.y))
            }
            _ => None,
        })
        .collect::<Vec<_>>();

    assert_eq!(rows.iter().map(|(line, _)| *line).collect::<Vec<_>>(), vec![3, 5, 7, 9]);
    assert_close(rows[0].1, 8.5);
    assert_close(rows[1].1, 8.0);
    assert_close(rows[2].1, 7.5);
    assert_close(rows[3].1, 7.0);
}

#[test]
fn long_note_wraps_and_consumes_extra_height() {
    let short = render_text(SHORT_NOTE);
    let long = render_text(LONG_NOTE);

    let short_lines = short.texts_for_line(2);
    let long_lines = long.texts_for_line(2);
    assert_eq!(short_lines.len(), 1);
    assert!(long_lines.len() >= 2);
    assert_eq!(long_lines.len(), 4);

    assert_eq!(long_lines[0].text, "note: a very long note text that");
    assert_eq!(long_lines[1].text, "exceeds the maximum wrap width");
    assert!(long_lines.iter().all(|t| t.style == FontStyle::Italic));

    let extra = (long_lines.len() - 1) as f64 * 0.1;
    assert_close(short.bounds.min_y - long.bounds.min_y, extra);

    // The block is centered on the event row: first line above, last line below.
    assert_close(long_lines[0].anchor.y, 8.5 + 0.3);
    assert_close(long_lines[3].anchor.y, 8.5 + 0.3 - 3.0 * 0.2);
}

#[test]
fn wrapped_label_pushes_following_events_down() {
    let text = "participant A
participant B
A->B: this label is long enough to wrap twice
B->A: next";
    let scene = render_text(text);

    let label = scene.texts_for_line(3);
    assert_eq!(label.len(), 2);
    assert_close(label[0].anchor.y, 8.5 + 0.15 + 0.1);
    assert_close(label[1].anchor.y, 8.5 + 0.15 + 0.1 - 0.2);

    let next = scene.arrows().find(|a| a.line_no == 4).expect("second arrow");
    assert_close(next.from.y, 8.5 - 0.1 - 0.5);
}

#[test]
fn empty_message_still_occupies_a_row() {
    let scene = render_text("participant A\nparticipant B\nA->B:   \nB->A: back");
    let labels = scene.texts_for_line(3);
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].text, "");
    let back = scene.arrows().find(|a| a.line_no == 4).expect("arrow");
    assert_close(back.from.y, 8.0);
}

#[test]
fn bounds_wrap_positions_and_final_cursor() {
    let scene = render_text(TWO_PARTICIPANTS_ONE_ACTION);
    assert_close(scene.bounds.min_x, -3.25);
    assert_close(scene.bounds.max_x, 3.25);
    assert_close(scene.bounds.max_y, 11.0);
    assert_close(scene.bounds.min_y, 7.5);
    assert_eq!(scene.figure_size, [12.0, 8.0]);

    for arrow in scene.arrows() {
        assert!(scene.bounds.contains(arrow.from) && scene.bounds.contains(arrow.to));
    }
}

#[test]
fn participants_without_events_render_headers_only() {
    let scene = render_text("participant A\nparticipant B\nparticipant C");
    assert_eq!(scene.arrows().count(), 0);
    assert_eq!(scene.primitives.len(), 9);
    assert_close(scene.bounds.min_y, 8.0);

    let xs = scene.rects().map(|r| r.center().x).collect::<Vec<_>>();
    assert_close(xs[0], -xs[2]);
    assert_close(xs[1], 0.0);
}

#[test]
fn empty_board_is_rejected() {
    let board = Board::new();
    let err = Canvas::new(&board, CanvasConfig::default()).render().unwrap_err();
    assert!(matches!(err, CanvasError::EmptyDiagram), "got {err:?}");
}

#[test]
fn event_referencing_unknown_participant_fails_loudly() {
    let mut board = Board::new();
    board
        .declare("A")
        .expect("declare")
        .push_event(Action::new(2, Direction::Forward, "Ghost", "boo"));

    let err = Canvas::new(&board, CanvasConfig::default()).render().unwrap_err();
    match err {
        CanvasError::MissingPosition { participant, line_no } => {
            assert_eq!(participant, "Ghost");
            assert_eq!(line_no, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn note_on_unknown_subject_fails_loudly() {
    let mut board = Board::new();
    board.declare("A").expect("declare").push_event(Note::new(5, "Nobody", "?"));

    let err = Canvas::new(&board, CanvasConfig::default()).render().unwrap_err();
    assert!(matches!(err, CanvasError::MissingPosition { line_no: 5, .. }), "got {err:?}");
}

#[test]
fn invalid_config_is_rejected_before_drawing() {
    let board = parse_board(TWO_PARTICIPANTS_ONE_ACTION).expect("parse");
    let config = CanvasConfig { line_height: -0.5, ..CanvasConfig::default() };
    let err = Canvas::new(&board, config).render().unwrap_err();
    assert!(
        matches!(err, CanvasError::Config(ConfigError::NonPositive { field: "line_height", .. })),
        "got {err:?}"
    );
}

#[test]
fn narrower_wrap_width_produces_more_lines() {
    let board = parse_board(TWO_PARTICIPANTS_ONE_ACTION.replace("hi", "one two three").as_str())
        .expect("parse");
    let config = CanvasConfig::default().with_max_text_width(4);
    let scene = Canvas::new(&board, config).render().expect("render");
    let texts = scene.texts_for_line(3).iter().map(|t| t.text.clone()).collect::<Vec<_>>();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(render_text(GREETING_ROUND), render_text(GREETING_ROUND));
}
