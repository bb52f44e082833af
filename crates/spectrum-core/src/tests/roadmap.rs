use crate::roadmap::ActionCategory;
use crate::*;

#[test]
fn every_non_terminal_level_has_a_transition() {
    let roadmap = RoadmapTable::reference();
    for from in 1..6 {
        let transition = roadmap
            .transition_for_level(LevelId(from))
            .unwrap_or_else(|| panic!("missing transition out of level {from}"));
        assert_eq!(transition.from_level, LevelId(from));
        assert_eq!(transition.to_level, LevelId(from + 1));
        assert!(!transition.action_items.is_empty());
        assert!(!transition.skills_needed.is_empty());
        assert!(!transition.tools_to_implement.is_empty());
        assert!(!transition.key_milestones.is_empty());
    }
}

#[test]
fn terminal_level_has_no_transition() {
    let roadmap = RoadmapTable::reference();
    assert!(roadmap.is_terminal(LevelId(6)));
    assert!(roadmap.transition_for_level(LevelId(6)).is_none());
    assert!(roadmap.transition_for_level(LevelId(7)).is_none());
    assert!(!roadmap.is_terminal(LevelId(5)));
}

#[test]
fn transition_content_matches_reference_plan() {
    let roadmap = RoadmapTable::reference();
    let t = roadmap.transition_for_level(LevelId(3)).unwrap();
    assert_eq!(t.action_items[0].title, "Map your end-to-end process");
    assert!(t.gap_analysis.task_evolution.starts_with("Expand from single-agent tasks"));

    let first = roadmap.transition_for_level(LevelId(1)).unwrap();
    assert_eq!(first.action_items[0].category, ActionCategory::Process);
    assert_eq!(first.action_items[1].category, ActionCategory::Technical);
}

#[test]
fn transition_serializes_with_lowercase_categories() {
    let roadmap = RoadmapTable::reference();
    let value = serde_json::to_value(roadmap.transition_for_level(LevelId(1)).unwrap()).unwrap();
    assert_eq!(value["fromLevel"], serde_json::json!(1));
    assert_eq!(value["toLevel"], serde_json::json!(2));
    assert_eq!(value["actionItems"][0]["category"], "process");
    assert!(value["gapAnalysis"]["riskIncrease"].is_string());
}

#[test]
fn roadmap_levels_exist_in_catalog() {
    let catalog = LevelCatalog::reference();
    let roadmap = RoadmapTable::reference();
    for t in &roadmap.transitions {
        assert!(catalog.contains(t.from_level));
        assert!(catalog.contains(t.to_level));
    }
    assert_eq!(catalog.max_id(), Some(roadmap.terminal_level));
}
