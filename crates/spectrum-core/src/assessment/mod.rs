//! Self-assessment: a fixed questionnaire whose answers resolve to one level.

mod questions;

use crate::catalog::{Level, LevelCatalog, LevelId};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bump when questions, options, or scoring change; stored results from other versions are
/// discarded on load.
pub const ASSESSMENT_VERSION: &str = "1.0.0";

/// Minimum answer spread that marks a respondent as between levels.
pub const TRANSITION_SPREAD: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRange {
    pub from: LevelId,
    pub to: LevelId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub primary_level: LevelId,
    pub level_data: Level,
    pub is_transitioning: bool,
    pub range: Option<LevelRange>,
}

/// Scores an answer vector.
///
/// The most frequent answer wins; frequency ties go to the numerically larger level id.
/// A spread (`max - min`) of at least [`TRANSITION_SPREAD`] marks the result as transitioning
/// with `range = {min, max}`.
pub fn calculate_result(answers: &[LevelId], catalog: &LevelCatalog) -> Result<AssessmentResult> {
    let mut frequency: BTreeMap<LevelId, usize> = BTreeMap::new();
    for &answer in answers {
        *frequency.entry(answer).or_insert(0) += 1;
    }

    // `max_by_key` keeps the last maximum; keys ascend, so ties resolve to the larger id.
    let Some((&mode, _)) = frequency.iter().max_by_key(|&(_, count)| *count) else {
        return Err(Error::EmptyAnswers);
    };

    // Non-empty from here on: the BTreeMap holds at least one key.
    let (Some(&min), Some(&max)) = (frequency.keys().next(), frequency.keys().next_back()) else {
        return Err(Error::EmptyAnswers);
    };
    let spread = max.0.saturating_sub(min.0);
    let is_transitioning = spread >= TRANSITION_SPREAD;
    let range = is_transitioning.then_some(LevelRange { from: min, to: max });

    let level_data = catalog
        .get(mode)
        .cloned()
        .ok_or(Error::UnknownLevel { id: mode })?;

    tracing::debug!(
        primary_level = mode.0,
        spread,
        is_transitioning,
        "assessment scored"
    );

    Ok(AssessmentResult {
        primary_level: mode,
        level_data,
        is_transitioning,
        range,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub text: String,
    pub level_id: LevelId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn offers(&self, level: LevelId) -> bool {
        self.options.iter().any(|o| o.level_id == level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    pub version: String,
    pub questions: Vec<Question>,
}

impl Questionnaire {
    /// The six reference questions (frequency, engineering, oversight, scope, risk, state).
    pub fn reference() -> Self {
        Self {
            version: ASSESSMENT_VERSION.to_string(),
            questions: questions::questions(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Validates one answer per question, each offered by its question, then scores.
    pub fn assess(&self, answers: &[LevelId], catalog: &LevelCatalog) -> Result<AssessmentResult> {
        if answers.len() != self.questions.len() {
            return Err(Error::AnswerCountMismatch {
                expected: self.questions.len(),
                actual: answers.len(),
            });
        }
        for (question, &answer) in self.questions.iter().zip(answers) {
            if !question.offers(answer) {
                return Err(Error::InvalidAnswer {
                    question_id: question.id.clone(),
                    answer,
                });
            }
        }
        calculate_result(answers, catalog)
    }
}

/// Where an [`AnswerSheet`] stands after a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetStep {
    /// Moved to (or stayed on) the question at this index.
    Question(usize),
    /// All questions answered; the scored result.
    Finished(AssessmentResult),
}

/// In-progress questionnaire: one answer slot per question and a cursor.
///
/// `next` refuses to advance past an unanswered question; on the last question it scores the
/// sheet. `back` from a finished sheet returns to the last question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: Vec<Option<LevelId>>,
    current: usize,
    finished: bool,
}

impl AnswerSheet {
    pub fn new(questionnaire: &Questionnaire) -> Self {
        Self {
            answers: vec![None; questionnaire.len()],
            current: 0,
            finished: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_answer(&self) -> Option<LevelId> {
        self.answers.get(self.current).copied().flatten()
    }

    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn total(&self) -> usize {
        self.answers.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn can_go_back(&self) -> bool {
        self.finished || self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        !self.finished && self.current_answer().is_some()
    }

    pub fn select(&mut self, level: LevelId) {
        if self.finished {
            return;
        }
        if let Some(slot) = self.answers.get_mut(self.current) {
            *slot = Some(level);
        }
    }

    pub fn next(
        &mut self,
        questionnaire: &Questionnaire,
        catalog: &LevelCatalog,
    ) -> Result<SheetStep> {
        if !self.can_go_next() {
            return Ok(SheetStep::Question(self.current));
        }
        if self.current + 1 < self.answers.len() {
            self.current += 1;
            return Ok(SheetStep::Question(self.current));
        }
        let answers: Vec<LevelId> = self.answers.iter().flatten().copied().collect();
        let result = questionnaire.assess(&answers, catalog)?;
        self.finished = true;
        Ok(SheetStep::Finished(result))
    }

    pub fn back(&mut self) -> SheetStep {
        if self.finished {
            self.finished = false;
        } else if self.current > 0 {
            self.current -= 1;
        }
        SheetStep::Question(self.current)
    }

    pub fn retake(&mut self) {
        self.answers.iter_mut().for_each(|a| *a = None);
        self.current = 0;
        self.finished = false;
    }
}
