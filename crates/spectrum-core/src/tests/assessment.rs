use crate::assessment::{SheetStep, TRANSITION_SPREAD};
use crate::*;

fn ids(values: &[u32]) -> Vec<LevelId> {
    values.iter().copied().map(LevelId).collect()
}

fn score(values: &[u32]) -> AssessmentResult {
    calculate_result(&ids(values), &LevelCatalog::reference()).unwrap()
}

#[test]
fn unanimous_answers_are_not_transitioning() {
    let result = score(&[4, 4, 4, 4, 4, 4]);
    assert_eq!(result.primary_level, LevelId(4));
    assert_eq!(result.level_data.id, LevelId(4));
    assert!(!result.is_transitioning);
    assert_eq!(result.range, None);
}

#[test]
fn frequency_ties_resolve_to_higher_level() {
    assert_eq!(score(&[1, 1, 2, 2]).primary_level, LevelId(2));
    assert_eq!(score(&[6, 6, 1, 1, 3]).primary_level, LevelId(6));
    assert_eq!(score(&[2, 5]).primary_level, LevelId(5));
}

#[test]
fn mode_with_wide_spread_is_transitioning() {
    let result = score(&[3, 3, 3, 1, 5, 6]);
    assert_eq!(result.primary_level, LevelId(3));
    assert!(result.is_transitioning);
    assert_eq!(
        result.range,
        Some(LevelRange {
            from: LevelId(1),
            to: LevelId(6)
        })
    );
}

#[test]
fn spread_of_one_is_not_transitioning() {
    let result = score(&[2, 2, 2, 2, 2, 1]);
    assert_eq!(result.primary_level, LevelId(2));
    assert!(!result.is_transitioning);
    assert_eq!(result.range, None);
}

#[test]
fn spread_of_threshold_is_transitioning() {
    assert_eq!(TRANSITION_SPREAD, 2);
    let result = score(&[2, 2, 4, 4, 1, 1]);
    assert_eq!(result.primary_level, LevelId(4));
    assert!(result.is_transitioning);
    assert_eq!(
        result.range,
        Some(LevelRange {
            from: LevelId(1),
            to: LevelId(4)
        })
    );
}

#[test]
fn empty_answers_are_rejected() {
    let err = calculate_result(&[], &LevelCatalog::reference()).unwrap_err();
    assert!(matches!(err, Error::EmptyAnswers));
}

#[test]
fn winning_level_missing_from_catalog_is_rejected() {
    let err = calculate_result(&ids(&[9, 9, 1]), &LevelCatalog::reference()).unwrap_err();
    assert!(matches!(err, Error::UnknownLevel { id } if id == LevelId(9)));
}

#[test]
fn result_serializes_camel_case() {
    let value = serde_json::to_value(score(&[1, 3, 3])).unwrap();
    assert_eq!(value["primaryLevel"], serde_json::json!(3));
    assert_eq!(value["isTransitioning"], serde_json::json!(true));
    assert_eq!(value["range"]["from"], serde_json::json!(1));
    assert_eq!(value["levelData"]["shortTitle"], "Automated Single-Agent");
}

#[test]
fn reference_questionnaire_covers_every_level() {
    let questionnaire = Questionnaire::reference();
    assert_eq!(questionnaire.version, ASSESSMENT_VERSION);
    let question_ids: Vec<&str> = questionnaire
        .questions
        .iter()
        .map(|q| q.id.as_str())
        .collect();
    assert_eq!(
        question_ids,
        vec!["frequency", "engineering", "oversight", "scope", "risk", "state"]
    );
    for question in &questionnaire.questions {
        let levels: Vec<u32> = question.options.iter().map(|o| o.level_id.0).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5, 6], "question {}", question.id);
    }
}

#[test]
fn questionnaire_validates_answer_shape() {
    let questionnaire = Questionnaire::reference();
    let catalog = LevelCatalog::reference();

    let err = questionnaire.assess(&ids(&[1, 2]), &catalog).unwrap_err();
    assert!(matches!(
        err,
        Error::AnswerCountMismatch {
            expected: 6,
            actual: 2
        }
    ));

    let err = questionnaire
        .assess(&ids(&[1, 2, 3, 7, 1, 1]), &catalog)
        .unwrap_err();
    assert!(
        matches!(err, Error::InvalidAnswer { ref question_id, answer } if question_id == "scope" && answer == LevelId(7))
    );

    let ok = questionnaire
        .assess(&ids(&[2, 2, 3, 2, 1, 2]), &catalog)
        .unwrap();
    assert_eq!(ok.primary_level, LevelId(2));
}

#[test]
fn answer_sheet_walks_forward_and_scores() {
    let questionnaire = Questionnaire::reference();
    let catalog = LevelCatalog::reference();
    let mut sheet = AnswerSheet::new(&questionnaire);

    assert!(!sheet.can_go_next());
    assert_eq!(
        sheet.next(&questionnaire, &catalog).unwrap(),
        SheetStep::Question(0)
    );

    for (i, level) in [3, 3, 4, 3, 3, 3].into_iter().enumerate() {
        assert_eq!(sheet.current_index(), i);
        sheet.select(LevelId(level));
        let step = sheet.next(&questionnaire, &catalog).unwrap();
        if i + 1 < questionnaire.len() {
            assert_eq!(step, SheetStep::Question(i + 1));
        } else {
            match step {
                SheetStep::Finished(result) => {
                    assert_eq!(result.primary_level, LevelId(3));
                    assert!(!result.is_transitioning);
                }
                other => panic!("expected finished sheet, got {other:?}"),
            }
        }
    }
    assert!(sheet.is_finished());
    assert_eq!(sheet.answered(), 6);
}

#[test]
fn answer_sheet_back_keeps_answers_and_retake_resets() {
    let questionnaire = Questionnaire::reference();
    let catalog = LevelCatalog::reference();
    let mut sheet = AnswerSheet::new(&questionnaire);

    assert!(!sheet.can_go_back());
    sheet.select(LevelId(2));
    sheet.next(&questionnaire, &catalog).unwrap();
    assert_eq!(sheet.back(), SheetStep::Question(0));
    assert_eq!(sheet.current_answer(), Some(LevelId(2)));

    sheet.retake();
    assert_eq!(sheet.current_index(), 0);
    assert_eq!(sheet.answered(), 0);
    assert!(!sheet.is_finished());
}

#[test]
fn back_from_finished_returns_to_last_question() {
    let questionnaire = Questionnaire::reference();
    let catalog = LevelCatalog::reference();
    let mut sheet = AnswerSheet::new(&questionnaire);
    for _ in 0..questionnaire.len() {
        sheet.select(LevelId(1));
        sheet.next(&questionnaire, &catalog).unwrap();
    }
    assert!(sheet.is_finished());
    assert_eq!(sheet.back(), SheetStep::Question(5));
    assert!(!sheet.is_finished());
}
