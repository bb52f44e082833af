use spectrum_core::{
    AssessmentResult, LevelCatalog, LevelId, LevelRange, RoadmapTable, calculate_result,
};
use spectrum_render::Error;
use spectrum_render::panel::{
    MASTERY_HEADING, render_assessment_result, render_level_detail, render_roadmap,
};

#[test]
fn level_detail_lists_every_section() {
    let catalog = LevelCatalog::reference();
    let text = render_level_detail(catalog.get(LevelId(1)).unwrap());

    assert!(text.starts_with("Level 1  Ad-hoc Assistance\n"));
    assert!(text.contains("Infrequent, one-off tasks"));
    for heading in [
        "Task Profile",
        "Real-world Examples",
        "AI Tools",
        "Engineering Involvement",
        "Key Characteristics",
    ] {
        assert!(text.contains(&format!("\n{heading}\n")), "missing {heading}");
    }
    assert!(text.contains("  - Drafting an email\n"));
}

#[test]
fn assessment_result_mentions_the_transition_range() {
    let catalog = LevelCatalog::reference();
    let ids: Vec<LevelId> = [2, 2, 4, 2, 3, 2].into_iter().map(LevelId).collect();
    let result = calculate_result(&ids, &catalog).unwrap();
    let text = render_assessment_result(&result);
    assert!(text.starts_with("Level 2  Structured Productivity\n"));
    assert!(text.contains("You're transitioning between Levels 2 and 4"));

    let settled = AssessmentResult {
        is_transitioning: false,
        range: Some(LevelRange {
            from: LevelId(2),
            to: LevelId(3),
        }),
        ..result
    };
    assert!(!render_assessment_result(&settled).contains("transitioning"));
}

#[test]
fn roadmap_lists_plan_for_the_next_level() {
    let catalog = LevelCatalog::reference();
    let roadmap = RoadmapTable::reference();
    let text = render_roadmap(&catalog, &roadmap, LevelId(3)).unwrap();

    assert!(text.starts_with("Your Level-Up Roadmap\n"));
    assert!(text.contains(
        "Current: Level 3 Automated Single-Agent  ->  Target: Level 4 Multi-Step Workflow"
    ));
    assert!(text.contains("\nWhat Changes\n"));
    assert!(text.contains("  1. Map your end-to-end process ["));
    for heading in ["Your Action Plan", "Skills Needed", "Tools to Implement", "Key Milestones"] {
        assert!(text.contains(heading), "missing {heading}");
    }
}

#[test]
fn roadmap_categories_are_lowercase() {
    let text = render_roadmap(
        &LevelCatalog::reference(),
        &RoadmapTable::reference(),
        LevelId(1),
    )
    .unwrap();
    assert!(text.contains("  1. Document your top 5 AI tasks [process]"));
    assert!(text.contains("  2. Add structure to your inputs [technical]"));
}

#[test]
fn terminal_level_gets_the_mastery_message() {
    let text = render_roadmap(
        &LevelCatalog::reference(),
        &RoadmapTable::reference(),
        LevelId(6),
    )
    .unwrap();
    assert!(text.starts_with(MASTERY_HEADING));
    assert!(!text.contains("Your Action Plan"));
}

#[test]
fn unknown_current_level_is_an_error() {
    let err = render_roadmap(
        &LevelCatalog::reference(),
        &RoadmapTable::reference(),
        LevelId(9),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::Core(spectrum_core::Error::UnknownLevel { id }) if id == LevelId(9)
    ));
}

#[test]
fn missing_transition_is_reported() {
    let roadmap = RoadmapTable {
        terminal_level: LevelId(6),
        transitions: vec![],
    };
    let err = render_roadmap(&LevelCatalog::reference(), &roadmap, LevelId(2)).unwrap_err();
    assert!(matches!(err, Error::MissingTransition { from } if from == LevelId(2)));
}
