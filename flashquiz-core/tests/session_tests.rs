use async_trait::async_trait;
use flashquiz_core::{
    Card, CoreError, DeckApi, DeckService, DeckValue, Grade, Progress, SaveReceipt, SaveStatus,
    Session, StudyError, View,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// In-process backend that can be switched off to simulate a dead network.
struct Flaky {
    inner: DeckService,
    offline: AtomicBool,
}

impl Flaky {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: DeckService::in_memory(),
            offline: AtomicBool::new(false),
        })
    }

    fn set_offline(&self, v: bool) {
        self.offline.store(v, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), CoreError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(CoreError::Network("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DeckApi for Flaky {
    async fn save_deck(&self, name: &str, value: DeckValue) -> Result<SaveReceipt, CoreError> {
        self.check()?;
        self.inner.save_deck(name, value).await
    }
    async fn load_deck(&self, name: &str) -> Result<DeckValue, CoreError> {
        self.check()?;
        self.inner.load_deck(name).await
    }
    async fn list_decks(&self) -> Result<Vec<String>, CoreError> {
        self.check()?;
        self.inner.list_decks().await
    }
    async fn save_score(&self, record: &str) -> Result<(), CoreError> {
        self.check()?;
        self.inner.save_score(record).await
    }
    async fn list_scores(&self) -> Result<Vec<String>, CoreError> {
        self.check()?;
        self.inner.list_scores().await
    }
}

async fn session_with_deck(api: Arc<Flaky>, name: &str, raw: &str) -> Session {
    let mut s = Session::new(api);
    s.refresh().await.unwrap();
    s.new_deck().unwrap();
    let ed = s.editor_mut().unwrap();
    ed.set_name(name);
    ed.set_raw(raw);
    assert_eq!(
        s.save().await.unwrap(),
        SaveStatus::Saved(SaveReceipt { replaced: false })
    );
    s
}

#[tokio::test]
async fn full_study_round_trip() {
    let api = Flaky::new();
    let mut s = session_with_deck(api.clone(), "Spanish", "uno|one\ndos|two\ntres|three").await;
    assert_eq!(s.decks(), ["Spanish"]);

    s.start_study().unwrap();
    assert!(matches!(s.view(), View::Viewer(_)));

    s.flip().unwrap();
    assert_eq!(s.grade(Grade::Correct).unwrap(), Progress::Next);
    assert_eq!(s.grade(Grade::Incorrect).unwrap(), Progress::Next);
    assert!(matches!(s.grade(Grade::Correct).unwrap(), Progress::Finished(t) if t.correct == 2));

    let View::Result(form) = s.view() else {
        panic!("expected result view");
    };
    assert_eq!(form.tally().incorrect, 1);

    s.result_mut().unwrap().set_studier("Ana");
    let rec = s.submit_score().await.unwrap();
    assert_eq!(rec.to_string(), "Ana, Spanish: 67");
    assert!(matches!(s.view(), View::Home));
    assert_eq!(s.scores(), ["Ana, Spanish: 67"]);
}

#[tokio::test]
async fn study_requires_saved_form() {
    let api = Flaky::new();
    let mut s = Session::new(api);
    s.new_deck().unwrap();
    assert_eq!(s.start_study(), Err(StudyError::Unsaved));

    s.editor_mut().unwrap().set_name("Spanish");
    s.editor_mut().unwrap().set_raw("uno|one");
    assert_eq!(s.start_study(), Err(StudyError::Unsaved));
    assert!(matches!(s.view(), View::Editor(_)));
}

#[tokio::test]
async fn name_collision_needs_confirmation() {
    let api = Flaky::new();
    let mut s = session_with_deck(api.clone(), "Spanish", "uno|one").await;
    s.go_home().await.unwrap();

    s.new_deck().unwrap();
    let ed = s.editor_mut().unwrap();
    ed.set_name("Spanish");
    ed.set_raw("dos|two");
    assert_eq!(s.save().await.unwrap(), SaveStatus::NeedsConfirmation);
    // nothing written yet
    assert_eq!(api.inner.load_deck("Spanish").await.unwrap().raw, "uno|one");

    s.cancel_overwrite().unwrap();
    assert_eq!(s.confirm_overwrite().await.unwrap(), None);
    assert_eq!(api.inner.load_deck("Spanish").await.unwrap().raw, "uno|one");

    assert_eq!(s.save().await.unwrap(), SaveStatus::NeedsConfirmation);
    let receipt = s.confirm_overwrite().await.unwrap().unwrap();
    assert!(receipt.replaced);
    assert_eq!(
        api.inner.load_deck("Spanish").await.unwrap().cards,
        vec![Card::new("dos", "two")]
    );
    s.start_study().unwrap();
}

#[tokio::test]
async fn open_deck_loads_into_editor() {
    let api = Flaky::new();
    api.inner
        .save_deck("French", DeckValue::new(vec![Card::new("un", "one")], "un|one"))
        .await
        .unwrap();

    let mut s = Session::new(api);
    s.refresh().await.unwrap();
    s.open_deck("French").await.unwrap();

    let ed = s.editor_mut().unwrap();
    assert_eq!(ed.name(), "French");
    assert_eq!(ed.raw(), "un|one");
    s.start_study().unwrap();
}

#[tokio::test]
async fn network_failure_leaves_state_unchanged() {
    let api = Flaky::new();
    let mut s = Session::new(api.clone());
    s.new_deck().unwrap();
    s.editor_mut().unwrap().set_name("Spanish");
    s.editor_mut().unwrap().set_raw("uno|one");

    api.set_offline(true);
    let err = s.save().await.unwrap_err();
    assert!(err.is_network());
    assert!(!s.editor_mut().unwrap().is_saved());
    assert!(s.active().is_none());
    assert!(s.decks().is_empty());

    api.set_offline(false);
    s.save().await.unwrap();
    s.start_study().unwrap();
    s.grade(Grade::Correct).unwrap();
    s.result_mut().unwrap().set_studier("Ana");

    api.set_offline(true);
    assert!(s.submit_score().await.unwrap_err().is_network());
    assert!(matches!(s.view(), View::Result(_)));

    api.set_offline(false);
    s.submit_score().await.unwrap();
    assert_eq!(api.inner.list_scores().await.unwrap(), vec!["Ana, Spanish: 100"]);
}

#[tokio::test]
async fn open_unknown_deck_stays_home() {
    let mut s = Session::new(Flaky::new());
    let err = s.open_deck("ghost").await.unwrap_err();
    assert_eq!(err, StudyError::Core(CoreError::NotFound("deck")));
    assert!(matches!(s.view(), View::Home));
}

#[tokio::test]
async fn actions_outside_their_view_are_rejected() {
    let mut s = Session::new(Flaky::new());
    assert_eq!(s.flip(), Err(StudyError::WrongView("home")));
    assert!(matches!(s.save().await, Err(StudyError::WrongView("home"))));
    assert!(matches!(
        s.submit_score().await,
        Err(StudyError::WrongView("home"))
    ));

    s.new_deck().unwrap();
    assert_eq!(s.new_deck(), Err(StudyError::WrongView("editor")));
}

#[tokio::test]
async fn shuffle_during_session_visits_every_card_once() {
    let api = Flaky::new();
    let mut s = session_with_deck(api, "Nums", "1|one\n2|two\n3|three\n4|four").await;
    s.start_study().unwrap();

    let mut rng = StdRng::seed_from_u64(11);
    let mut seen = Vec::new();
    loop {
        s.shuffle_with(&mut rng).unwrap();
        seen.push(s.viewer_mut().unwrap().current().front.clone());
        if let Progress::Finished(t) = s.grade(Grade::Incorrect).unwrap() {
            assert_eq!(t.correct, 0);
            assert_eq!(t.incorrect, 4);
            break;
        }
    }
    seen.sort();
    assert_eq!(seen, vec!["1", "2", "3", "4"]);
}
