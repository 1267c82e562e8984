use passionboard_core::{
    BoardService, BoardState, ColorSource, CreateDialog, Intent, PassionColor,
    RandomColorSource, ScriptedColorSource, PALETTE,
};

fn scripted_service() -> BoardService<ScriptedColorSource> {
    BoardService::new(ScriptedColorSource::new(vec![PassionColor::Yellow]))
}

#[test]
fn blank_title_and_blank_task_leave_state_unchanged() {
    let mut service = scripted_service();
    let state = BoardState::seeded();

    for degenerate in ["", "   ", "\t\n", " \u{a0} "] {
        assert_eq!(service.create_passion(&state, degenerate), state);
        assert_eq!(service.add_task(&state, 1, degenerate), state);
    }
}

#[test]
fn create_passion_appends_without_touching_existing_entries() {
    let mut service = scripted_service();
    let old = BoardState::seeded();

    let new = service.create_passion(&old, "Learn Piano");

    assert_eq!(new.passions.len(), old.passions.len() + 1);
    assert_eq!(&new.passions[..old.passions.len()], &old.passions[..]);

    let created = new.passions.last().unwrap();
    assert_eq!(created.id, 4);
    assert_eq!(created.title, "Learn Piano");
    assert!(created.tasks.is_empty());
    assert!(!created.expanded);
}

#[test]
fn create_passion_trims_title_and_resets_dialog() {
    let mut service = scripted_service();
    let mut state = BoardState::seeded();
    state = service.open_create_dialog(&state);
    state = service.set_pending_title(&state, "  Learn Piano  ".to_string());

    let next = service.create_passion(&state, &state.pending_passion_title.clone());

    assert_eq!(next.passions.last().unwrap().title, "Learn Piano");
    assert!(next.pending_passion_title.is_empty());
    assert_eq!(next.create_dialog, CreateDialog::Closed);
}

#[test]
fn passion_ids_come_from_the_counter_not_list_length() {
    let mut service = scripted_service();
    let mut state = BoardState::seeded();

    state = service.create_passion(&state, "Learn Piano");
    assert_eq!(state.passions.last().unwrap().id, 4);
    assert_eq!(state.next_passion_id, 5);

    state = service.create_passion(&state, "Gardening");
    assert_eq!(state.passions.last().unwrap().id, 5);
    assert_eq!(state.next_passion_id, 6);

    // Counter never re-issues: every id in the list is unique.
    let mut ids: Vec<_> = state.passions.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), state.passions.len());
}

#[test]
fn add_task_appends_trimmed_text_to_exactly_one_passion() {
    let mut service = scripted_service();
    let old = service.create_passion(&BoardState::seeded(), "Learn Piano");

    let new = service.add_task(&old, 2, "  Buy protein  ");

    for (before, after) in old.passions.iter().zip(&new.passions) {
        if after.id == 2 {
            assert_eq!(after.tasks.len(), before.tasks.len() + 1);
            assert_eq!(after.tasks.last().map(String::as_str), Some("Buy protein"));
            assert_eq!(&after.tasks[..before.tasks.len()], &before.tasks[..]);
            assert_eq!(before.tasks.last().map(String::as_str), Some("Meal prep"));
        } else {
            assert_eq!(before, after);
        }
    }
    assert_eq!(new.target_passion_id, Some(2));
    assert!(new.pending_task_text.is_empty());
}

#[test]
fn add_task_permits_duplicates_in_insertion_order() {
    let mut service = scripted_service();
    let mut state = BoardState::seeded();

    state = service.add_task(&state, 1, "Plan layout");
    let tasks = &state.passion(1).unwrap().tasks;
    assert_eq!(tasks, &vec!["Plan layout", "Choose materials", "Plan layout"]);
}

#[test]
fn unknown_id_is_a_no_op_for_every_targeted_command() {
    let mut service = scripted_service();
    let state = BoardState::seeded();

    assert_eq!(service.add_task(&state, 99, "Stretch"), state);
    assert_eq!(service.toggle_expansion(&state, 99), state);
    assert_eq!(service.remove_task(&state, 99, 0), state);
}

#[test]
fn toggle_expansion_is_an_involution() {
    let mut service = scripted_service();
    let original = BoardState::seeded();

    let once = service.toggle_expansion(&original, 1);
    assert!(once.passion(1).unwrap().expanded);
    for passion in &once.passions {
        if passion.id != 1 {
            assert_eq!(Some(passion), original.passion(passion.id));
        }
    }

    let twice = service.toggle_expansion(&once, 1);
    assert_eq!(twice, original);
}

#[test]
fn remove_task_removes_exactly_the_indexed_element() {
    let mut service = scripted_service();
    let state = BoardState::seeded();

    let next = service.remove_task(&state, 1, 0);

    assert_eq!(next.passion(1).unwrap().tasks, vec!["Choose materials"]);
    for passion in &next.passions {
        if passion.id != 1 {
            assert_eq!(Some(passion), state.passion(passion.id));
        }
    }
}

#[test]
fn remove_task_out_of_range_is_a_no_op() {
    let mut service = scripted_service();
    let state = BoardState::seeded();

    assert_eq!(service.remove_task(&state, 1, 2), state);
    assert_eq!(service.remove_task(&state, 1, usize::MAX), state);
}

#[test]
fn pending_buffers_hold_text_verbatim_until_submit() {
    let mut service = scripted_service();
    let mut state = BoardState::seeded();

    state = service.set_pending_title(&state, "  half typed ".to_string());
    assert_eq!(state.pending_passion_title, "  half typed ");

    state = service.set_pending_task(&state, " milk ".to_string());
    assert_eq!(state.pending_task_text, " milk ");
}

#[test]
fn closing_the_dialog_keeps_the_pending_title() {
    let mut service = scripted_service();
    let mut state = BoardState::seeded();

    state = service.open_create_dialog(&state);
    assert_eq!(state.create_dialog, CreateDialog::Open);

    state = service.set_pending_title(&state, "Woodworking".to_string());
    state = service.close_create_dialog(&state);

    assert_eq!(state.create_dialog, CreateDialog::Closed);
    assert_eq!(state.pending_passion_title, "Woodworking");
}

#[test]
fn apply_dispatches_every_intent_variant() {
    let mut service = scripted_service();
    let mut state = BoardState::seeded();

    state = service.apply(&state, Intent::OpenCreateDialog);
    state = service.apply(
        &state,
        Intent::SetPendingTitle {
            text: "Learn Piano".to_string(),
        },
    );
    state = service.apply(
        &state,
        Intent::CreatePassion {
            title: "Learn Piano".to_string(),
        },
    );
    state = service.apply(
        &state,
        Intent::SetPendingTask {
            text: "Practice scales".to_string(),
        },
    );
    state = service.apply(
        &state,
        Intent::AddTask {
            passion_id: 4,
            text: "Practice scales".to_string(),
        },
    );
    state = service.apply(&state, Intent::ToggleExpansion { passion_id: 4 });
    state = service.apply(
        &state,
        Intent::RemoveTask {
            passion_id: 4,
            index: 0,
        },
    );
    state = service.apply(&state, Intent::CloseCreateDialog);

    let created = state.passion(4).unwrap();
    assert_eq!(created.title, "Learn Piano");
    assert!(created.tasks.is_empty());
    assert!(created.expanded);
    assert_eq!(state.create_dialog, CreateDialog::Closed);
}

#[test]
fn scenario_a_create_passion_on_seeded_board() {
    let mut service = scripted_service();
    let state = service.create_passion(&BoardState::seeded(), "Learn Piano");

    assert_eq!(state.passions.len(), 4);
    let created = &state.passions[3];
    assert_eq!(created.id, 4);
    assert!(created.tasks.is_empty());
    assert!(!created.expanded);
}

#[test]
fn scenario_b_add_task_lands_after_meal_prep() {
    let mut service = scripted_service();
    let after_a = service.create_passion(&BoardState::seeded(), "Learn Piano");

    let state = service.add_task(&after_a, 2, "  Buy protein  ");

    let tasks = &state.passion(2).unwrap().tasks;
    assert_eq!(tasks, &vec!["Set up gym schedule", "Meal prep", "Buy protein"]);
}

#[test]
fn scenario_c_double_toggle_restores_expansion() {
    let mut service = scripted_service();
    let mut state = BoardState::seeded();
    state = service.toggle_expansion(&state, 1);
    let before = state.passion(1).unwrap().expanded;

    state = service.toggle_expansion(&state, 1);
    state = service.toggle_expansion(&state, 1);

    assert_eq!(state.passion(1).unwrap().expanded, before);
}

#[test]
fn scripted_colors_are_assigned_in_sequence() {
    let mut service = BoardService::new(ScriptedColorSource::new(vec![
        PassionColor::Pink,
        PassionColor::Yellow,
    ]));
    let mut state = BoardState::empty();

    state = service.create_passion(&state, "First");
    state = service.create_passion(&state, "Second");
    state = service.create_passion(&state, "Third");

    let colors: Vec<_> = state.passions.iter().map(|p| p.color).collect();
    assert_eq!(
        colors,
        vec![PassionColor::Pink, PassionColor::Yellow, PassionColor::Pink]
    );
}

#[test]
fn seeded_random_source_is_deterministic_and_stays_in_palette() {
    let mut first = RandomColorSource::with_seed(42);
    let mut second = RandomColorSource::with_seed(42);

    for _ in 0..32 {
        let color = first.next_color();
        assert_eq!(color, second.next_color());
        assert!(PALETTE.contains(&color));
    }
}
