mod common;

use chrono::NaiveDate;
use rchatreview::api::{ChatSource, HttpChatSource, InMemoryChatSource};
use rchatreview::core::selector::{eligible_ids, sample_ids, select};
use rchatreview::errors::AppError;
use rchatreview::models::ChatSummary;
use rchatreview::utils::parse_range;

fn summary(id: i64, queue: &str, accepted: bool, started: &str) -> ChatSummary {
    ChatSummary {
        id,
        queue: queue.to_string(),
        accepted: accepted.then(|| format!("{started}:30")),
        started: Some(started.to_string()),
        ended: None,
    }
}

fn population() -> Vec<ChatSummary> {
    vec![
        summary(1, "ask-web", true, "2023-01-03T10:00"),
        summary(2, "ask-web", false, "2023-01-04T10:00"),
        summary(3, "practice-webinar", true, "2023-01-05T10:00"),
        summary(4, "Practice-upper", true, "2023-01-06T10:00"),
        summary(5, "ask-txt", true, "2023-01-07T10:00"),
        summary(6, "ask-web", true, "2023-02-01T10:00"),
    ]
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_eligible_ids_drop_unanswered_and_practice() {
    let ids = eligible_ids(&population());
    // "Practice" with a capital P is not a practice queue
    assert_eq!(ids, vec![1, 4, 5, 6]);
}

#[test]
fn test_select_within_range() {
    let source = InMemoryChatSource::new().with_summaries(population());
    let range = parse_range("2023-01").unwrap();

    let mut ids = select(&source, range, 3, 1).unwrap();
    ids.sort();
    assert_eq!(ids, vec![1, 4, 5]);
}

#[test]
fn test_sampling_is_deterministic() {
    let ids: Vec<i64> = (100..200).collect();
    let a = sample_ids(&ids, 10, 1).unwrap();
    let b = sample_ids(&ids, 10, 1).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 10);

    let mut unique = a.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 10, "sampling must be without replacement");
    assert!(a.iter().all(|id| ids.contains(id)));
}

#[test]
fn test_sampling_whole_population() {
    let ids = vec![7, 8, 9];
    let mut sample = sample_ids(&ids, 3, 99).unwrap();
    sample.sort();
    assert_eq!(sample, ids);
}

#[test]
fn test_insufficient_data() {
    let source = InMemoryChatSource::new().with_summaries(population());
    let range = parse_range("2023-01").unwrap();

    match select(&source, range, 4, 1) {
        Err(AppError::InsufficientData {
            requested,
            available,
        }) => {
            assert_eq!(requested, 4);
            assert_eq!(available, 3);
        }
        other => panic!("expected InsufficientData, got {other:?}"),
    }
}

#[test]
fn test_source_unavailable_propagates() {
    let source = InMemoryChatSource::new()
        .with_summaries(population())
        .offline();
    let range = parse_range("2023").unwrap();

    let err = select(&source, range, 1, 1).unwrap_err();
    assert!(matches!(err, AppError::SourceUnavailable(_)));
    assert!(err.is_systemic());
}

#[test]
fn test_in_memory_listing_is_inclusive() {
    let source = InMemoryChatSource::new().with_summaries(population());
    let chats = source
        .list_chats(day("2023-01-03"), day("2023-01-07"))
        .unwrap();
    let ids: Vec<i64> = chats.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_parse_range_forms() {
    assert_eq!(
        parse_range("2023").unwrap(),
        (day("2023-01-01"), day("2023-12-31"))
    );
    assert_eq!(
        parse_range("2024-02").unwrap(),
        (day("2024-02-01"), day("2024-02-29"))
    );
    assert_eq!(
        parse_range("2023-05-04").unwrap(),
        (day("2023-05-04"), day("2023-05-04"))
    );
    assert_eq!(
        parse_range("2022-09-06:2023-08-31").unwrap(),
        (day("2022-09-06"), day("2023-08-31"))
    );
    assert_eq!(
        parse_range("2023-01:2023-03").unwrap(),
        (day("2023-01-01"), day("2023-03-31"))
    );
}

#[test]
fn test_parse_range_rejects_bad_input() {
    assert!(parse_range("2023-1").is_err());
    assert!(parse_range("2023-13").is_err());
    assert!(parse_range("2023:2023-01").is_err());
    assert!(parse_range("2023-05-01:2023-04-01").is_err());
    assert!(matches!(parse_range("nope"), Err(AppError::InvalidDate(_))));
}

#[test]
fn test_http_source_urls() {
    let source = HttpChatSource::new("https://ca.libraryh3lp.com/2011-12-03/", None, None);
    assert_eq!(
        source.list_url(day("2022-09-06"), day("2023-08-31")),
        "https://ca.libraryh3lp.com/2011-12-03/chats/2022/09/06?to=2023-08-31"
    );
    assert_eq!(
        source.chat_url(42),
        "https://ca.libraryh3lp.com/2011-12-03/chats/42"
    );
}
