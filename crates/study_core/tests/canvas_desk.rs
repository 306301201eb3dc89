use study_core::{
    CanvasController, CanvasPoint, DragEvent, GridSpec, Position, SnapToggle, StudyStore,
};
use std::rc::Rc;
use tempfile::TempDir;

fn seeded_store() -> (TempDir, Rc<StudyStore>) {
    let dir = tempfile::tempdir().unwrap();
    let store = StudyStore::new(dir.path().join("study_data.db"));
    store.initialize().unwrap();
    (dir, Rc::new(store))
}

fn build(store: &Rc<StudyStore>, snap: bool) -> CanvasController {
    let subjects = store.list_subjects().unwrap();
    CanvasController::build(
        subjects,
        GridSpec::default(),
        SnapToggle::new(snap),
        store.clone(),
    )
    .unwrap()
}

#[test]
fn first_build_arranges_seed_cards_and_persists_layout() {
    let (_dir, store) = seeded_store();
    let controller = build(&store, true);

    let expected = [
        Position::new(0, 0),
        Position::new(240, 0),
        Position::new(480, 0),
        Position::new(720, 0),
        Position::new(0, 240),
    ];
    let placed: Vec<Position> = controller
        .cards()
        .iter()
        .map(|card| card.placement().to_position())
        .collect();
    assert_eq!(placed, expected);

    let stored: Vec<Position> = store
        .list_subjects()
        .unwrap()
        .iter()
        .map(|subject| subject.position)
        .collect();
    assert_eq!(stored, expected);
}

#[test]
fn second_build_keeps_persisted_layout() {
    let (_dir, store) = seeded_store();
    build(&store, true);
    let ids: Vec<i64> = store.list_subjects().unwrap().iter().map(|s| s.id).collect();

    let controller = build(&store, true);
    assert_eq!(
        controller.card(ids[1]).unwrap().placement(),
        CanvasPoint::new(240.0, 0.0)
    );
    assert_eq!(
        controller.card(ids[0]).unwrap().placement(),
        CanvasPoint::new(0.0, 0.0)
    );
}

#[test]
fn snapped_drag_is_written_to_the_store() {
    let (_dir, store) = seeded_store();
    let mut controller = build(&store, true);
    let first = controller.cards()[0].subject_id();

    controller.handle(first, DragEvent::Start).unwrap();
    controller
        .handle(first, DragEvent::Update { dx: 65.0, dy: 100.0 })
        .unwrap();
    controller
        .handle(first, DragEvent::Update { dx: 65.0, dy: 100.0 })
        .unwrap();
    controller.handle(first, DragEvent::End).unwrap();

    let stored = store.get_subject(first).unwrap().unwrap();
    assert_eq!(stored.position, Position::new(240, 240));
}

#[test]
fn unsnapped_drag_is_written_raw() {
    let (_dir, store) = seeded_store();
    let mut controller = build(&store, false);
    let id = controller.cards()[1].subject_id();

    controller
        .handle(id, DragEvent::Update { dx: 13.0, dy: 57.0 })
        .unwrap();
    controller.handle(id, DragEvent::End).unwrap();

    let stored = store.get_subject(id).unwrap().unwrap();
    assert_eq!(stored.position, Position::new(253, 57));
}

#[test]
fn drag_left_of_canvas_settles_at_origin() {
    let (_dir, store) = seeded_store();
    let mut controller = build(&store, true);
    let id = controller.cards()[0].subject_id();

    controller
        .handle(id, DragEvent::Update { dx: -50.0, dy: -50.0 })
        .unwrap();
    assert_eq!(
        controller.card(id).unwrap().placement(),
        CanvasPoint::new(0.0, 0.0)
    );
    controller.handle(id, DragEvent::End).unwrap();
    assert_eq!(
        store.get_subject(id).unwrap().unwrap().position,
        Position::ORIGIN
    );
}
