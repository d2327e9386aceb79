use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use shared::{GenerationFailure, PersonalityReport, PlayStyle, ProfileField, GENERIC_FAILURE_MESSAGE};
use tokio::sync::Notify;

use crate::controller::IgnoreReason;

struct GatedGenerator {
    calls: AtomicUsize,
    seen: std::sync::Mutex<Vec<UserProfile>>,
    release: Notify,
    outcome: Result<PersonalityReport, GenerationFailure>,
}

impl GatedGenerator {
    fn new(outcome: Result<PersonalityReport, GenerationFailure>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            seen: std::sync::Mutex::new(Vec::new()),
            release: Notify::new(),
            outcome,
        })
    }
}

#[async_trait]
impl ReportGenerator for GatedGenerator {
    async fn generate_report(
        &self,
        profile: &UserProfile,
    ) -> Result<PersonalityReport, GenerationFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().expect("seen lock").push(profile.clone());
        self.release.notified().await;
        self.outcome.clone()
    }
}

struct PanickingGenerator;

#[async_trait]
impl ReportGenerator for PanickingGenerator {
    async fn generate_report(
        &self,
        _profile: &UserProfile,
    ) -> Result<PersonalityReport, GenerationFailure> {
        panic!("generator blew up");
    }
}

fn sample_report() -> PersonalityReport {
    PersonalityReport {
        personality_type: "The Strategist".into(),
        key_strengths: vec!["Planning".into()],
        thinking_work_style: "Deliberate".into(),
        preferred_learning_style: "Reading".into(),
        potential_skill_areas: vec!["Law".into()],
        positive_insight: "Patience pays.".into(),
    }
}

fn fill_ann(driver: &mut AnalysisDriver) {
    for (field, value) in [
        (ProfileField::Name, "Ann"),
        (ProfileField::Grade, "10"),
        (ProfileField::Games, "Chess"),
        (ProfileField::Hobbies, "Reading"),
    ] {
        driver.dispatch(ControllerMessage::EditField {
            field,
            value: value.to_string(),
        });
    }
    driver.dispatch(ControllerMessage::SelectPlayStyle(PlayStyle::Solo));
}

#[tokio::test]
async fn second_submit_while_loading_issues_no_request() {
    let generator = GatedGenerator::new(Ok(sample_report()));
    let mut driver = AnalysisDriver::new(generator.clone());
    fill_ann(&mut driver);

    let first = driver.dispatch(ControllerMessage::Submit);
    assert!(matches!(
        first,
        Dispatch::Effect(Effect::StartGeneration { .. })
    ));
    let second = driver.dispatch(ControllerMessage::Submit);
    assert_eq!(second, Dispatch::Ignored(IgnoreReason::AlreadyLoading));

    generator.release.notify_one();
    let applied = driver.next_completion().await.expect("completion");

    assert_eq!(applied, Dispatch::Updated);
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        driver.controller().analysis().report(),
        Some(&sample_report())
    );
}

#[tokio::test]
async fn submit_and_wait_settles_on_success() {
    let generator = GatedGenerator::new(Ok(sample_report()));
    generator.release.notify_one();
    let mut driver = AnalysisDriver::new(generator.clone());
    fill_ann(&mut driver);

    let analysis = driver.submit_and_wait().await.clone();

    assert!(!analysis.is_loading());
    assert_eq!(analysis.error(), None);
    assert_eq!(analysis.report(), Some(&sample_report()));

    let seen = generator.seen.lock().expect("seen lock");
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].name, "Ann");
    assert_eq!(seen[0].games, "Chess");
}

#[tokio::test]
async fn submit_and_wait_settles_on_failure() {
    let generator = GatedGenerator::new(Err(GenerationFailure::new("Service unavailable")));
    generator.release.notify_one();
    let mut driver = AnalysisDriver::new(generator);
    fill_ann(&mut driver);

    let analysis = driver.submit_and_wait().await;

    assert!(!analysis.is_loading());
    assert_eq!(analysis.report(), None);
    assert_eq!(analysis.error(), Some("Service unavailable"));
}

#[tokio::test]
async fn failure_without_message_settles_on_fallback() {
    let generator = GatedGenerator::new(Err(GenerationFailure::without_message()));
    generator.release.notify_one();
    let mut driver = AnalysisDriver::new(generator);

    let analysis = driver.submit_and_wait().await;

    assert_eq!(analysis.error(), Some(GENERIC_FAILURE_MESSAGE));
}

#[tokio::test]
async fn edits_during_loading_do_not_change_submitted_snapshot() {
    let generator = GatedGenerator::new(Ok(sample_report()));
    let mut driver = AnalysisDriver::new(generator.clone());
    fill_ann(&mut driver);

    driver.dispatch(ControllerMessage::Submit);
    driver.dispatch(ControllerMessage::EditField {
        field: ProfileField::Name,
        value: "Bea".into(),
    });
    generator.release.notify_one();
    driver.next_completion().await.expect("completion");

    assert_eq!(generator.seen.lock().expect("seen lock")[0].name, "Ann");
    assert_eq!(driver.controller().profile().name, "Bea");
    assert!(driver.controller().analysis().report().is_some());
}

#[tokio::test]
async fn panicking_generator_settles_on_failure() {
    let mut driver = AnalysisDriver::new(Arc::new(PanickingGenerator));
    fill_ann(&mut driver);

    let analysis = driver.submit_and_wait().await;

    assert!(!analysis.is_loading());
    let error = analysis.error().expect("error");
    assert!(error.contains("report generation task failed"), "{error}");
}
