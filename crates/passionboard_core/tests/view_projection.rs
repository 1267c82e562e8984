use passionboard_core::{
    project, BoardService, BoardState, Chevron, PassionColor, ScriptedColorSource,
};

fn service() -> BoardService<ScriptedColorSource> {
    BoardService::new(ScriptedColorSource::new(vec![PassionColor::Pink]))
}

#[test]
fn collapsed_cards_have_no_body_and_point_down() {
    let view = project(&BoardState::seeded());

    assert_eq!(view.cards.len(), 3);
    for card in &view.cards {
        assert!(!card.expanded);
        assert_eq!(card.chevron, Chevron::Down);
        assert!(card.body.is_none());
    }
    assert!(!view.create_dialog.open);
    assert!(view.create_dialog.pending_title.is_empty());
}

#[test]
fn expanded_card_lists_tasks_in_order_with_indices() {
    let mut service = service();
    let mut state = BoardState::seeded();
    state = service.toggle_expansion(&state, 2);
    state = service.set_pending_task(&state, "Buy protein".to_string());

    let view = project(&state);
    let card = view.cards.iter().find(|card| card.id == 2).unwrap();

    assert!(card.expanded);
    assert_eq!(card.chevron, Chevron::Up);
    let body = card.body.as_ref().unwrap();
    assert_eq!(body.tasks.len(), 2);
    assert_eq!(body.tasks[0].index, 0);
    assert_eq!(body.tasks[0].text, "Set up gym schedule");
    assert_eq!(body.tasks[1].index, 1);
    assert_eq!(body.tasks[1].text, "Meal prep");
    assert_eq!(body.editor.pending_text, "Buy protein");

    // Other cards stay collapsed and bodiless.
    for other in view.cards.iter().filter(|card| card.id != 2) {
        assert!(other.body.is_none());
    }
}

#[test]
fn cards_keep_display_order_and_cosmetics() {
    let mut service = service();
    let state = service.create_passion(&BoardState::seeded(), "Learn Piano");

    let view = project(&state);

    assert_eq!(
        view.cards.iter().map(|card| card.id).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    assert_eq!(view.cards[3].title, "Learn Piano");
    assert_eq!(view.cards[3].color, PassionColor::Pink);
}

#[test]
fn dialog_view_mirrors_flag_and_buffer() {
    let mut service = service();
    let mut state = BoardState::seeded();
    state = service.open_create_dialog(&state);
    state = service.set_pending_title(&state, "Woodwork".to_string());

    let view = project(&state);
    assert!(view.create_dialog.open);
    assert_eq!(view.create_dialog.pending_title, "Woodwork");

    state = service.close_create_dialog(&state);
    assert!(!project(&state).create_dialog.open);
}

#[test]
fn projection_is_pure() {
    let state = BoardState::seeded();
    let before = state.clone();

    let first = project(&state);
    let second = project(&state);

    assert_eq!(state, before);
    assert_eq!(first, second);
}

#[test]
fn view_tree_serializes_as_plain_data() {
    let mut service = service();
    let mut state = BoardState::seeded();
    state = service.toggle_expansion(&state, 1);

    let json = serde_json::to_value(project(&state)).unwrap();

    assert_eq!(json["cards"][0]["id"], 1);
    assert_eq!(json["cards"][0]["color"], "blue");
    assert_eq!(json["cards"][0]["chevron"], "up");
    assert_eq!(json["cards"][0]["body"]["tasks"][0]["text"], "Plan layout");
    assert_eq!(json["cards"][1]["body"], serde_json::Value::Null);
    assert_eq!(json["create_dialog"]["open"], false);
}
