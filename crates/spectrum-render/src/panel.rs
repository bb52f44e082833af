//! Plain-text renditions of the detail, result, and roadmap panels.

use crate::{Error, Result};
use spectrum_core::roadmap::LevelTransition;
use spectrum_core::{AssessmentResult, Level, LevelCatalog, LevelId, RoadmapTable};
use std::fmt::Write as _;

pub const MASTERY_HEADING: &str = "You've Reached AI Mastery";
pub const MASTERY_BODY: [&str; 2] = [
    "Congratulations! You're operating at the highest level of AI maturity.",
    "Your organization has AI as a core capability.",
];

fn section(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title}");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

pub fn render_level_detail(level: &Level) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Level {}  {}", level.id, level.display_title());
    if let Some(summary) = level.summary() {
        let _ = writeln!(out, "{summary}");
    }
    section(&mut out, "Task Profile", &level.task_profile);
    section(&mut out, "Real-world Examples", &level.examples);
    section(&mut out, "AI Tools", &level.ai_tools);
    section(
        &mut out,
        "Engineering Involvement",
        &level.engineering_involvement,
    );
    section(&mut out, "Key Characteristics", &level.key_characteristics);
    out
}

pub fn render_assessment_result(result: &AssessmentResult) -> String {
    let level = &result.level_data;
    let mut out = String::new();
    let _ = writeln!(out, "Level {}  {}", result.primary_level, level.short_title);
    if let Some(range) = result.range.filter(|_| result.is_transitioning) {
        let _ = writeln!(
            out,
            "You're transitioning between Levels {} and {}",
            range.from, range.to
        );
    }
    if let Some(summary) = level.summary() {
        let _ = writeln!(out, "{summary}");
    }
    out
}

/// Roadmap out of `current`. At the terminal level this is the mastery message.
pub fn render_roadmap(
    catalog: &LevelCatalog,
    roadmap: &RoadmapTable,
    current: LevelId,
) -> Result<String> {
    let current_level = catalog
        .get(current)
        .ok_or(spectrum_core::Error::UnknownLevel { id: current })?;

    if roadmap.is_terminal(current) {
        let mut out = String::new();
        let _ = writeln!(out, "{MASTERY_HEADING}");
        for line in MASTERY_BODY {
            let _ = writeln!(out, "{line}");
        }
        return Ok(out);
    }

    let transition = roadmap
        .transition_for_level(current)
        .ok_or(Error::MissingTransition { from: current })?;
    let target_level = catalog
        .get(transition.to_level)
        .ok_or(spectrum_core::Error::UnknownLevel {
            id: transition.to_level,
        })?;

    Ok(render_transition(current_level, target_level, transition))
}

fn render_transition(current: &Level, target: &Level, transition: &LevelTransition) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Your Level-Up Roadmap");
    let _ = writeln!(
        out,
        "Current: Level {} {}  ->  Target: Level {} {}",
        current.id, current.short_title, target.id, target.short_title
    );

    let gap = &transition.gap_analysis;
    let _ = writeln!(out, "\nWhat Changes");
    let _ = writeln!(out, "  Task Profile: {}", gap.task_evolution);
    let _ = writeln!(out, "  Risk Level: {}", gap.risk_increase);
    let _ = writeln!(out, "  Scope: {}", gap.scope_expansion);

    let _ = writeln!(out, "\nYour Action Plan");
    for (i, item) in transition.action_items.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} [{}]", i + 1, item.title, item.category);
        let _ = writeln!(out, "     {}", item.description);
    }

    section(&mut out, "Skills Needed", &transition.skills_needed);
    section(&mut out, "Tools to Implement", &transition.tools_to_implement);
    section(&mut out, "Key Milestones", &transition.key_milestones);
    out
}
