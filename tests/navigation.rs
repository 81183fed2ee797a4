use cold_war_posters::{ArtifactRecord, Catalog, Intent, Navigator, Transition, View};

fn posters(ids: &[i64]) -> Catalog {
    Catalog::new(
        ids.iter()
            .map(|&id| ArtifactRecord {
                id,
                title: format!("Poster {id}"),
                image_path: format!("posters/{id}.jpg"),
                explanation: format!("Analysis of poster {id}"),
                designer: None,
                year: None,
            })
            .collect(),
    )
}

fn run(navigator: &mut Navigator, intents: &[Intent]) {
    for &intent in intents {
        navigator.apply(intent);
    }
}

#[test]
fn browse_then_back_to_gallery() {
    let mut nav = Navigator::new(posters(&[1, 2, 3]));

    run(
        &mut nav,
        &[Intent::Enter, Intent::Select(1), Intent::Next, Intent::Back],
    );

    assert_eq!(nav.view(), View::Gallery);
    assert!(nav.current().is_none());
}

#[test]
fn next_moves_to_following_record() {
    let mut nav = Navigator::new(posters(&[1, 2, 3]));

    run(&mut nav, &[Intent::Enter, Intent::Select(1), Intent::Next]);

    assert_eq!(nav.view(), View::Detail(2));
    assert_eq!(nav.current().map(|p| p.id), Some(3));
}

#[test]
fn empty_catalog_stays_on_welcome() {
    let mut nav = Navigator::new(Catalog::default());

    assert_eq!(nav.apply(Intent::Enter), Transition::Unchanged);
    assert_eq!(nav.view(), View::Welcome);
}

#[test]
fn select_valid_and_invalid() {
    for i in 0..5 {
        let mut nav = Navigator::new(posters(&[10, 20, 30, 40, 50]));
        nav.apply(Intent::Enter);

        nav.apply(Intent::Select(i));
        assert_eq!(nav.view(), View::Detail(i));
    }

    let mut nav = Navigator::new(posters(&[10, 20, 30, 40, 50]));
    nav.apply(Intent::Enter);
    for i in [5, 6, usize::MAX] {
        assert_eq!(nav.apply(Intent::Select(i)), Transition::Unchanged);
        assert_eq!(nav.view(), View::Gallery);
    }
}

#[test]
fn detail_boundaries_are_no_ops() {
    let mut nav = Navigator::new(posters(&[1, 2, 3]));
    run(&mut nav, &[Intent::Enter, Intent::Select(0), Intent::Prev]);
    assert_eq!(nav.view(), View::Detail(0));

    run(&mut nav, &[Intent::Next, Intent::Next, Intent::Next, Intent::Next]);
    assert_eq!(nav.view(), View::Detail(2));
}

#[test]
fn menu_always_returns_to_welcome() {
    let paths: [&[Intent]; 4] = [
        &[],
        &[Intent::ShowEssay],
        &[Intent::Enter],
        &[Intent::Enter, Intent::Select(2), Intent::Prev],
    ];

    for path in paths {
        let mut nav = Navigator::new(posters(&[1, 2, 3]));
        run(&mut nav, path);
        run(&mut nav, &[Intent::Menu]);
        assert_eq!(nav.view(), View::Welcome);
    }
}

#[test]
fn duplicate_ids_navigate_by_position() {
    let mut nav = Navigator::new(posters(&[7, 7, 7]));

    run(&mut nav, &[Intent::Enter, Intent::Select(0), Intent::Next, Intent::Next]);

    assert_eq!(nav.view(), View::Detail(2));
}

#[test]
fn catalog_file_round_trip_through_navigator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("posters.json");
    std::fs::write(
        &path,
        r#"[{"id": 1, "title": "Only", "image_path": "", "explanation": "x", "year": 1961}]"#,
    )
    .unwrap();

    let mut nav = Navigator::new(Catalog::load(&path));
    run(&mut nav, &[Intent::Enter, Intent::Select(0)]);

    let current = nav.current().unwrap();
    assert_eq!(current.title, "Only");
    assert_eq!(current.designer(), "Unknown");
    assert_eq!(current.year_label(), "1961");
}
