use articles_core::{ArticleRecord, Rejection};
use chrono::NaiveDate;

#[test]
fn article_serialization_uses_expected_wire_fields() {
    let date = NaiveDate::from_ymd_opt(2023, 7, 10).unwrap();
    let article = ArticleRecord::dated("Статья 1", "Содержимое 1", "Автор 1", date);

    let json = serde_json::to_value(&article).unwrap();
    assert_eq!(json["title"], "Статья 1");
    assert_eq!(json["content"], "Содержимое 1");
    assert_eq!(json["author"], "Автор 1");
    assert_eq!(json["creation_date"], "2023-07-10");

    let decoded: ArticleRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, article);
}

#[test]
fn missing_json_keys_become_absent_fields() {
    let decoded: ArticleRecord = serde_json::from_str(r#"{"title":"only title"}"#).unwrap();

    assert_eq!(decoded.title.as_deref(), Some("only title"));
    assert_eq!(decoded.content, None);
    assert_eq!(decoded.author, None);
    assert_eq!(decoded.creation_date, None);
    assert_eq!(decoded.rejection(), Some(Rejection::MissingContent));
}

#[test]
fn malformed_date_fails_to_deserialize() {
    let result = serde_json::from_str::<ArticleRecord>(r#"{"creation_date":"10.07.2023"}"#);
    assert!(result.is_err());
}

#[test]
fn year_follows_creation_date() {
    let undated = ArticleRecord::new(Some("t".into()), Some("c".into()), None, None);
    assert_eq!(undated.year(), None);

    let dated = ArticleRecord::dated("t", "c", "a", NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
    assert_eq!(dated.year(), Some(1999));
}
