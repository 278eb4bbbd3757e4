use articles_core::{
    prepare_articles, ArticleRecord, ArticleWorker, Clock, FixedClock, InMemoryLibrary,
    SystemClock,
};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn today() -> NaiveDate {
    date(2026, 10, 19)
}

fn worker() -> ArticleWorker<InMemoryLibrary, FixedClock> {
    ArticleWorker::with_clock(InMemoryLibrary::new(), FixedClock(today()))
}

fn record(title: Option<&str>, content: Option<&str>, date: Option<NaiveDate>) -> ArticleRecord {
    ArticleRecord::new(
        title.map(str::to_string),
        content.map(str::to_string),
        Some("Автор".to_string()),
        date,
    )
}

#[test]
fn prepare_empty_batch_is_empty() {
    assert!(worker().prepare_articles(&[]).is_empty());
}

#[test]
fn prepare_articles_removes_articles_without_title() {
    let articles = vec![
        ArticleRecord::new(
            None,
            Some("Содержимое 1".into()),
            Some("Автор 1".into()),
            Some(date(2023, 7, 10)),
        ),
        ArticleRecord::dated("Статья 2", "Содержимое 2", "Автор 2", date(2023, 7, 10)),
    ];

    let prepared = worker().prepare_articles(&articles);
    assert_eq!(prepared.len(), 1);
    assert_eq!(prepared[0].title.as_deref(), Some("Статья 2"));
}

#[test]
fn prepare_articles_removes_articles_without_content() {
    let articles = vec![
        ArticleRecord::new(
            Some("Статья 1".into()),
            None,
            Some("Автор 1".into()),
            Some(date(2023, 7, 10)),
        ),
        ArticleRecord::dated("Статья 2", "Содержимое 2", "Автор 2", date(2023, 7, 10)),
    ];

    let prepared = worker().prepare_articles(&articles);
    assert_eq!(prepared.len(), 1);
    assert_eq!(prepared[0].title.as_deref(), Some("Статья 2"));
}

#[test]
fn prepare_articles_removes_empty_title_and_content() {
    let articles = vec![
        record(Some(""), Some("c"), Some(date(2023, 7, 10))),
        record(Some("t"), Some(""), Some(date(2023, 7, 10))),
    ];
    assert!(worker().prepare_articles(&articles).is_empty());
}

#[test]
fn prepare_articles_drops_every_untitled_record() {
    let articles = vec![
        record(None, Some("a"), Some(date(2023, 1, 1))),
        record(None, Some("b"), Some(date(2023, 1, 1))),
        record(Some("kept"), Some("c"), Some(date(2023, 1, 1))),
    ];
    let prepared = worker().prepare_articles(&articles);
    assert_eq!(prepared.len(), 1);
    assert_eq!(prepared[0].title.as_deref(), Some("kept"));
}

#[test]
fn prepare_articles_keeps_authors_unchanged() {
    let articles = vec![
        ArticleRecord::dated("Статья 1", "Содержимое 1", "Автор 1", date(2023, 7, 10)),
        ArticleRecord::dated("Статья 2", "Содержимое 2", "Автор 2", date(2023, 7, 10)),
    ];

    let prepared = worker().prepare_articles(&articles);
    assert_eq!(prepared.len(), 2);
    assert_eq!(prepared[0].author.as_deref(), Some("Автор 1"));
    assert_eq!(prepared[1].author.as_deref(), Some("Автор 2"));
}

#[test]
fn prepare_articles_leaves_absent_author_absent() {
    let articles = vec![ArticleRecord::new(
        Some("t".into()),
        Some("c".into()),
        None,
        Some(date(2023, 7, 10)),
    )];
    let prepared = worker().prepare_articles(&articles);
    assert_eq!(prepared.len(), 1);
    assert_eq!(prepared[0].author, None);
}

#[test]
fn prepare_articles_sets_default_creation_date_when_not_specified() {
    let articles = vec![
        ArticleRecord::new(
            Some("Статья 1".into()),
            Some("Содержимое 1".into()),
            Some("Автор 1".into()),
            None,
        ),
        ArticleRecord::dated("Статья 2", "Содержимое 2", "Автор 2", date(2023, 7, 10)),
    ];

    let prepared = worker().prepare_articles(&articles);
    assert_eq!(prepared.len(), 2);
    assert_eq!(prepared[0].creation_date, Some(today()));
    assert_eq!(prepared[1].creation_date, Some(date(2023, 7, 10)));
}

#[test]
fn prepare_articles_with_system_clock_uses_current_date() {
    let worker = ArticleWorker::new(InMemoryLibrary::new());
    let articles = vec![record(Some("t"), Some("c"), None)];

    let before = SystemClock.today();
    let prepared = worker.prepare_articles(&articles);
    let after = SystemClock.today();

    let defaulted = prepared[0].creation_date.unwrap();
    assert!(defaulted == before || defaulted == after);
}

#[test]
fn check_same_article() {
    let articles = vec![
        ArticleRecord::dated("Книга 1", "Содержимое 1, ", "Автор 1", date(2023, 7, 10)),
        ArticleRecord::dated("Книга 1", "Содержимое 1, ", "Автор 1", date(2023, 7, 10)),
    ];

    assert_eq!(worker().prepare_articles(&articles).len(), 1);
}

#[test]
fn prepare_articles_keeps_first_occurrence_order() {
    let a = record(Some("a"), Some("1"), Some(date(2023, 1, 1)));
    let b = record(Some("b"), Some("2"), Some(date(2023, 1, 1)));
    let c = record(Some("c"), Some("3"), Some(date(2023, 1, 1)));
    let articles = vec![a.clone(), b.clone(), a.clone(), c.clone(), b.clone()];

    assert_eq!(worker().prepare_articles(&articles), vec![a, b, c]);
}

#[test]
fn records_differing_in_one_field_are_not_duplicates() {
    let base = ArticleRecord::dated("t", "c", "a", date(2023, 7, 10));
    let other_author = ArticleRecord::dated("t", "c", "b", date(2023, 7, 10));
    let other_date = ArticleRecord::dated("t", "c", "a", date(2023, 7, 11));

    let prepared = worker().prepare_articles(&[base, other_author, other_date]);
    assert_eq!(prepared.len(), 3);
}

#[test]
fn undated_duplicates_collapse_after_defaulting() {
    let articles = vec![
        record(Some("t"), Some("c"), None),
        record(Some("t"), Some("c"), None),
    ];
    let prepared = worker().prepare_articles(&articles);
    assert_eq!(prepared.len(), 1);
    assert_eq!(prepared[0].creation_date, Some(today()));
}

#[test]
fn prepare_is_idempotent_and_output_is_valid() {
    let clock = FixedClock(today());
    let articles = vec![
        record(None, Some("c"), None),
        record(Some("t"), None, None),
        record(Some("t"), Some("c"), None),
        record(Some("t"), Some("c"), Some(today())),
        record(Some("u"), Some("d"), Some(date(2001, 2, 3))),
        record(Some("u"), Some("d"), Some(date(2001, 2, 3))),
        record(Some(""), Some(""), None),
    ];

    let once = prepare_articles(&articles, &clock);
    let twice = prepare_articles(&once, &clock);
    assert_eq!(once, twice);
    assert_eq!(once.len(), 2);

    for article in &once {
        assert!(!article.title.as_deref().unwrap_or("").is_empty());
        assert!(!article.content.as_deref().unwrap_or("").is_empty());
        assert!(article.creation_date.is_some());
    }
    for (i, left) in once.iter().enumerate() {
        for right in &once[i + 1..] {
            assert_ne!(left, right);
        }
    }
}

#[test]
fn prepare_report_matches_accepted_records() {
    let worker = worker();
    let articles = vec![
        record(None, Some("c"), None),
        record(Some("t"), Some("c"), None),
        record(Some("t"), Some("c"), None),
    ];

    let report = worker.prepare_with_report(&articles);
    assert_eq!(report.accepted, worker.prepare_articles(&articles));
    assert_eq!(report.missing_title, 1);
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.defaulted_dates, 2);
}
