// tests/publication_cycle.rs
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::NaiveDate;
use newsroom_publisher::config::{DashboardConfig, MailConfig, PaymentConfig};
use newsroom_publisher::notify::{
    DashboardInfo, DashboardObserver, DashboardTransport, Mail, MailObserver, MailSender,
    PaymentObserver,
};
use newsroom_publisher::{
    Criterion, Journalist, JournalistRef, News, NewsKind, Preference, PublicationManager,
    PublishError,
};

#[derive(Clone, Default)]
struct Outbox(Rc<RefCell<Vec<Mail>>>);

impl MailSender for Outbox {
    fn send_mail(&self, mail: &Mail) -> anyhow::Result<()> {
        self.0.borrow_mut().push(mail.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct Board(Rc<RefCell<Vec<DashboardInfo>>>);

impl DashboardTransport for Board {
    fn send(&self, info: &DashboardInfo) -> anyhow::Result<()> {
        self.0.borrow_mut().push(info.clone());
        Ok(())
    }
}

struct DownBoard;

impl DashboardTransport for DownBoard {
    fn send(&self, _info: &DashboardInfo) -> anyhow::Result<()> {
        anyhow::bail!("connection refused")
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()
}

fn journalist() -> JournalistRef {
    Journalist::new(today(), "Lucia Perez", Preference::Sensationalist).into_ref()
}

fn wired(outbox: &Outbox, board: &Board) -> PublicationManager {
    let mut m = PublicationManager::new();
    m.add_observer(Box::new(PaymentObserver::new(PaymentConfig::default())));
    m.add_observer(Box::new(MailObserver::new(
        Box::new(outbox.clone()),
        &MailConfig::default(),
    )));
    m.add_observer(Box::new(DashboardObserver::new(
        Box::new(board.clone()),
        &DashboardConfig::default(),
    )));
    m
}

#[test]
fn scoop_end_to_end() {
    let outbox = Outbox::default();
    let board = Board::default();
    let mut m = wired(&outbox, &board);
    m.set_criterion(Criterion::Sensationalist);

    let j = journalist();
    let scoop = News::new(NewsKind::scoop(3_000_000.0), j.clone(), today())
        .with_importance(9)
        .with_title("Un fichaje grandioso")
        .with_body("short body")
        .with_contact_email("lucia@diario.local");

    assert_eq!(m.generate(vec![scoop.clone()]).unwrap(), 1);
    assert_eq!(m.pending().len(), 1);

    let p = m.confirm_on(today()).unwrap();
    assert_eq!(p.news(), &[scoop]);
    assert_eq!(p.date(), today());
    assert!(m.pending().is_empty());

    let mails = outbox.0.borrow();
    assert_eq!(mails.len(), 1);
    assert_eq!(mails[0].from, "lucia@diario.local");
    assert_eq!(mails[0].to, "editor@newsroom.local");
    assert!(mails[0].body.contains("Un fichaje grandioso"));
    assert!(mails[0].body.contains("Lucia Perez"));

    assert_eq!(j.borrow().balance(), 50_000.0);

    let boards = board.0.borrow();
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].items.len(), 1);
    assert_eq!(boards[0].items[0].code, "01");
}

#[test]
fn confirm_always_drains_queue() {
    let outbox = Outbox::default();
    let board = Board::default();
    let mut m = wired(&outbox, &board);
    m.set_criterion(Criterion::importance_range(5, 10));

    let j = journalist();
    let mk = |imp: i32| News::new(NewsKind::article(["a"]), j.clone(), today()).with_importance(imp);

    let accepted = m.generate(vec![mk(2), mk(5), mk(10), mk(11)]).unwrap();
    assert_eq!(accepted, 2);
    // manual curation bypasses the criterion
    m.add_news(mk(1));
    let before = m.pending().len();

    let p = m.confirm_on(today()).unwrap();
    assert_eq!(p.len(), before);
    assert!(m.pending().is_empty());

    // second cycle on an empty queue still notifies everyone
    let empty = m.confirm_on(today()).unwrap();
    assert!(empty.is_empty());
    assert_eq!(board.0.borrow().len(), 2);
    assert!(board.0.borrow()[1].items.is_empty());
}

#[test]
fn queue_accumulates_across_generate_calls() {
    let mut m = PublicationManager::new().with_criterion(Criterion::AllOf(Default::default()));
    let j = journalist();
    let n = News::new(NewsKind::interview("Ana", false), j, today());
    m.generate(vec![n.clone()]).unwrap();
    m.generate(vec![n.clone()]).unwrap();
    // duplicates are kept
    assert_eq!(m.pending().len(), 2);

    m.set_criterion(Criterion::importance_range(100, 200));
    assert_eq!(m.generate(vec![n]).unwrap(), 0);
    assert_eq!(m.pending().len(), 2);
}

#[test]
fn generate_before_criterion_is_a_usage_error() {
    let mut m = PublicationManager::new();
    let n = News::new(NewsKind::scoop(1.0), journalist(), today());
    let err = m.generate(vec![n]).unwrap_err();
    assert!(matches!(err, PublishError::CriterionNotSet));
}

#[test]
fn transport_failure_names_observer_and_hands_back_batch() {
    let outbox = Outbox::default();
    let mut m = PublicationManager::new();
    m.add_observer(Box::new(DashboardObserver::new(
        Box::new(DownBoard),
        &DashboardConfig::default(),
    )));
    m.add_observer(Box::new(MailObserver::new(
        Box::new(outbox.clone()),
        &MailConfig::default(),
    )));

    let n = News::new(NewsKind::scoop(9_000_000.0), journalist(), today());
    m.add_news(n.clone());

    let err = m.confirm_on(today()).unwrap_err();
    assert!(matches!(
        err,
        PublishError::Observer { observer: "dashboard", .. }
    ));
    assert!(err.to_string().contains("dashboard"));
    // remaining observers skipped, the batch comes back with the error
    assert!(outbox.0.borrow().is_empty());
    assert!(m.pending().is_empty());
    assert_eq!(err.into_batch(), Some(vec![n]));
}

/// Dashboard that is down for the first call only.
#[derive(Default)]
struct FlakyBoard {
    calls: Cell<u32>,
}

impl DashboardTransport for FlakyBoard {
    fn send(&self, _info: &DashboardInfo) -> anyhow::Result<()> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        if n == 0 {
            anyhow::bail!("gateway timeout");
        }
        Ok(())
    }
}

#[test]
fn confirm_after_failure_does_not_pay_twice() {
    let mut m = PublicationManager::new();
    m.add_observer(Box::new(PaymentObserver::new(PaymentConfig::default())));
    m.add_observer(Box::new(DashboardObserver::new(
        Box::new(FlakyBoard::default()),
        &DashboardConfig::default(),
    )));

    let j = journalist();
    m.add_news(News::new(NewsKind::article(["a"]), j.clone(), today()));

    assert!(m.confirm_on(today()).is_err());
    assert!(m.pending().is_empty());
    assert_eq!(j.borrow().balance(), 50_000.0);

    let next = m.confirm_on(today()).unwrap();
    assert!(next.is_empty());
    assert_eq!(j.borrow().balance(), 50_000.0);
}

#[test]
fn active_conjunction_can_be_reshaped_between_batches() {
    let mut m = PublicationManager::new().with_criterion(Criterion::all_of([Criterion::Sensationalist]));
    let j = journalist();
    let mk = |imp: i32, title: &str| {
        News::new(NewsKind::article(["a"]), j.clone(), today())
            .with_importance(imp)
            .with_title(title)
    };

    assert_eq!(m.generate(vec![mk(2, "Grandioso"), mk(9, "Grandioso")]).unwrap(), 2);

    if let Some(Criterion::AllOf(all)) = m.criterion_mut() {
        all.add_child(Criterion::importance_range(8, 10));
    }
    assert_eq!(m.generate(vec![mk(2, "Grandioso"), mk(9, "Grandioso")]).unwrap(), 1);

    if let Some(Criterion::AllOf(all)) = m.criterion_mut() {
        assert!(all.remove_child(&Criterion::Sensationalist));
    }
    assert_eq!(m.generate(vec![mk(9, "Calma"), mk(3, "Calma")]).unwrap(), 1);
    assert_eq!(m.pending().len(), 4);
    assert_eq!(
        m.criterion(),
        Some(&Criterion::all_of([Criterion::importance_range(8, 10)]))
    );
}
