use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::model::{
    OptionCount, QuestionBank, QuestionIndex, QuestionRecord, QuizVariant, SessionConfig,
};
use quiz_core::time::fixed_clock;
use services::{AdvanceOutcome, SessionController, SessionPhase};

fn herb_bank(n: usize) -> QuestionBank {
    let records = (0..n)
        .map(|i| QuestionRecord::new(format!("Herb {i}"), format!("herb_{i}.jpg")).unwrap())
        .collect();
    QuestionBank::new(records).unwrap()
}

fn start(n: usize, round_size: usize, max_rounds: u32, seed: u64) -> SessionController {
    let config = SessionConfig::new(round_size, max_rounds, OptionCount::Four, 100).unwrap();
    SessionController::with_clock_and_rng(
        herb_bank(n),
        config,
        QuizVariant::NameToImage,
        fixed_clock(),
        StdRng::seed_from_u64(seed),
    )
    .unwrap()
}

fn correct_choice(controller: &SessionController, index: QuestionIndex) -> String {
    controller
        .current_round()
        .question(index)
        .unwrap()
        .options()
        .correct()
        .to_string()
}

fn wrong_choice(controller: &SessionController, index: QuestionIndex) -> String {
    let question = controller.current_round().question(index).unwrap();
    question
        .options()
        .values()
        .iter()
        .find(|v| !question.options().is_correct(v))
        .expect("four-way round always has a distractor")
        .clone()
}

/// Full three-round session over 25 herbs: 10 + 10 + 5, then summary.
#[test]
fn full_session_over_25_herbs() {
    let mut controller = start(25, 10, 3, 1);

    // Round 1: answer all ten, miss three.
    let indices = controller.current_round().indices();
    assert_eq!(indices.len(), 10);
    for (i, &index) in indices.iter().enumerate() {
        let choice = if i < 3 {
            wrong_choice(&controller, index)
        } else {
            correct_choice(&controller, index)
        };
        controller.submit_answer(index, &choice).unwrap();
    }
    let report = controller.seal_round().unwrap();
    assert_eq!(report.score, 7);
    assert_eq!(report.wrong_entries.len(), 3);
    assert_eq!(controller.used_indices().len(), 10);

    // Round 2: all correct.
    assert_eq!(
        controller.advance_round().unwrap(),
        AdvanceOutcome::NextRound(2)
    );
    for index in controller.current_round().indices() {
        let choice = correct_choice(&controller, index);
        controller.submit_answer(index, &choice).unwrap();
    }
    assert_eq!(controller.seal_round().unwrap().score, 10);

    // Round 3 shrinks to the five remaining questions.
    assert_eq!(
        controller.advance_round().unwrap(),
        AdvanceOutcome::NextRound(3)
    );
    assert_eq!(controller.current_round().total(), 5);
    for index in controller.current_round().indices() {
        let choice = correct_choice(&controller, index);
        controller.submit_answer(index, &choice).unwrap();
    }
    controller.seal_round().unwrap();
    assert_eq!(controller.used_indices().len(), 25);

    // Everything consumed: advancing lands in the summary.
    assert_eq!(
        controller.advance_round().unwrap(),
        AdvanceOutcome::SummaryReached
    );
    let summary = controller.summary().unwrap();
    assert_eq!(summary.rounds_played(), 3);
    assert_eq!(summary.total_correct(), 22);
    assert_eq!(summary.total_answered(), 25);
    assert_eq!(summary.total_consumed(), 25);
    assert_eq!(summary.wrong_entries().len(), 3);
    for entry in summary.wrong_entries() {
        assert_eq!(entry.round_number, 1);
        assert_ne!(entry.chosen_name, entry.correct_name);
    }
}

/// Changing an answer before sealing counts only the final choice.
#[test]
fn final_choice_wins_across_resubmissions() {
    let mut controller = start(25, 10, 3, 2);
    let index = controller.current_round().indices()[0];

    let wrong = wrong_choice(&controller, index);
    let correct = correct_choice(&controller, index);

    controller.submit_answer(index, &wrong).unwrap();
    controller.submit_answer(index, &correct).unwrap();

    let report = controller.seal_round().unwrap();
    assert_eq!(report.score, 1);
    assert_eq!(report.answered, 1);
    // The earlier mistake stays in the review log.
    assert_eq!(report.wrong_entries.len(), 1);
}

/// Ending early after one round still produces a consistent summary.
#[test]
fn early_finish_reports_partial_session() {
    let mut controller = start(25, 10, 3, 3);

    for index in controller.current_round().indices() {
        let choice = correct_choice(&controller, index);
        controller.submit_answer(index, &choice).unwrap();
    }
    controller.seal_round().unwrap();
    controller.finish_session().unwrap();

    let summary = controller.summary().unwrap();
    assert_eq!(summary.rounds_played(), 1);
    assert_eq!(summary.total_correct(), 10);
    assert_eq!(summary.total_consumed(), 10);
    assert_eq!(summary.started_at, summary.completed_at);
}

/// Reset from the summary screen starts an entirely fresh session.
#[test]
fn reset_after_summary_allows_a_new_run() {
    let mut controller = start(12, 10, 2, 4);

    controller.seal_round().unwrap();
    controller.advance_round().unwrap();
    assert_eq!(controller.current_round().total(), 2);
    controller.seal_round().unwrap();
    controller.advance_round().unwrap();
    assert_eq!(controller.phase(), SessionPhase::Summary);

    controller.reset_session().unwrap();
    assert_eq!(controller.phase(), SessionPhase::RoundInProgress);
    assert_eq!(controller.round_number(), 1);
    assert_eq!(controller.current_round().total(), 10);
    assert!(controller.history().is_empty());
    assert!(controller.used_indices().is_empty());
}

/// The two-way image variant pairs every prompt with exactly one distractor.
#[test]
fn two_way_image_variant_round_trip() {
    let config = SessionConfig::new(10, 2, OptionCount::Two, 100).unwrap();
    let mut controller = SessionController::with_clock_and_rng(
        herb_bank(30),
        config,
        QuizVariant::NameToImage,
        fixed_clock(),
        StdRng::seed_from_u64(5),
    )
    .unwrap();

    for question in controller.current_round().questions() {
        assert_eq!(question.options().len(), 2);
        assert_eq!(question.options().correct(), question.image_ref());
        assert_eq!(question.prompt(QuizVariant::NameToImage), question.name());
    }

    for index in controller.current_round().indices() {
        let choice = correct_choice(&controller, index);
        let outcome = controller.submit_answer(index, &choice).unwrap();
        assert!(outcome.is_correct);
        assert!(outcome.chosen_name.starts_with("Herb "));
    }
    assert_eq!(controller.seal_round().unwrap().score, 10);
}
