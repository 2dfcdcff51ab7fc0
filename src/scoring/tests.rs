use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::engine::{EngineConfig, RelevanceEngine};
use super::error::{ScoringError, ScoringResult};
use super::known_property::{PropertyProcessor, most_confident};
use super::processor::Processor;
use super::property::PropertyType;
use super::store::PropertyStore;
use super::types::{BetterBayScore, RelevanceVerdict, Report};
use crate::constants::CONFIDENCE_THRESHOLD;
use crate::dictionary::MockDictionary;
use crate::item::Item;
use crate::nlp::{LexiconTagger, PosTagger, TaggedWord, TaggingError};

const COAL: &str = "The colour of coal or soot.";

fn item1(id: &str) -> Item {
    Item::new(id, "0.99").with_attribute("color", "black")
}

fn item2(id: &str) -> Item {
    Item::new(id, "1.99")
        .with_attribute("quantity", "4")
        .with_attribute("size", "large")
}

fn colour_dictionary() -> MockDictionary {
    MockDictionary::new()
        .with_noun("black", COAL)
        .with_meanings(
            "red",
            &[
                ("adjective", &["Having red as its colour."]),
                ("noun", &["A red colour."]),
            ],
        )
        .with_noun("beige", "A type of undyed woollen fabric.")
}

fn processor_with(mock: Arc<MockDictionary>) -> PropertyProcessor {
    let store = Arc::new(PropertyStore::new(mock));
    PropertyProcessor::new(store, Arc::new(LexiconTagger::new()))
}

fn score(score: f64, confidence: f64) -> BetterBayScore {
    BetterBayScore { score, confidence }
}

fn report(confidence: f64) -> Report {
    Report::new(
        confidence,
        HashMap::from([
            ("123".to_string(), score(1.0, 1.0)),
            ("234".to_string(), score(0.0, 0.8)),
        ]),
    )
}

struct StubProcessor {
    name: &'static str,
    report: Report,
    calls: AtomicUsize,
}

impl StubProcessor {
    fn new(name: &'static str, report: Report) -> Arc<Self> {
        Arc::new(Self {
            name,
            report,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Processor for StubProcessor {
    fn name(&self) -> &str {
        self.name
    }

    async fn score(&self, _items: &[Item], _title: &str) -> ScoringResult<Report> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.report.clone())
    }
}

struct BrokenProcessor;

#[async_trait]
impl Processor for BrokenProcessor {
    fn name(&self) -> &str {
        "broken"
    }

    async fn score(&self, _items: &[Item], _title: &str) -> ScoringResult<Report> {
        Err(ScoringError::ProcessorFailed {
            processor: self.name().to_string(),
            reason: "backend offline".to_string(),
        })
    }
}

struct FailingTagger;

impl PosTagger for FailingTagger {
    fn tag(&self, _text: &str) -> Result<Vec<TaggedWord>, TaggingError> {
        Err(TaggingError::Failed {
            reason: "model unavailable".to_string(),
        })
    }
}

fn engine_with<P: Processor + 'static>(processors: Vec<Arc<P>>) -> RelevanceEngine {
    processors
        .into_iter()
        .fold(RelevanceEngine::new(EngineConfig::default()), |engine, p| {
            engine.with_processor(p)
        })
}

// ---------------------------------------------------------------------------
// Property types and store
// ---------------------------------------------------------------------------

#[test]
fn test_property_type_triggers() {
    assert_eq!(PropertyType::Colour.triggers(), &["color", "colour"]);
    assert!(PropertyType::Colour.is_triggered_by("Main Colour"));
    assert!(PropertyType::Colour.is_triggered_by("COLOR"));
    assert!(!PropertyType::Colour.is_triggered_by("Size"));
}

#[test]
fn test_property_type_parse_and_display() {
    assert_eq!("Color".parse::<PropertyType>(), Ok(PropertyType::Colour));
    assert_eq!("colour".parse::<PropertyType>(), Ok(PropertyType::Colour));
    assert!("size".parse::<PropertyType>().is_err());
    assert_eq!(PropertyType::Colour.to_string(), "colour");
}

#[test]
fn test_mapping_true_when_colour_mentioned() {
    let mapping = PropertyStore::mapping_for(PropertyType::Colour);
    assert!(mapping(&[
        "A pale greenish-blue colour, like that of the gemstone.".to_string(),
        "A sky-blue, greenish-blue, or greenish-gray semi-precious gemstone.".to_string(),
    ]));
}

#[test]
fn test_mapping_true_for_alternative_spelling() {
    let mapping = PropertyStore::mapping_for(PropertyType::Colour);
    assert!(mapping(&[
        "A pale greenish-blue Color, like that of the gemstone.".to_string()
    ]));
}

#[test]
fn test_mapping_false_without_property() {
    let mapping = PropertyStore::mapping_for(PropertyType::Colour);
    assert!(!mapping(&[
        "A sky-blue, greenish-blue, or greenish-gray semi-precious gemstone.".to_string()
    ]));
    assert!(!mapping(&[]));
}

#[tokio::test]
async fn test_store_answers_false_for_unregistered_type() {
    let mock = Arc::new(colour_dictionary());
    let store = PropertyStore::with_types(mock.clone(), Vec::new());

    assert!(!store.supports(PropertyType::Colour));
    assert!(!store.has_property("black", PropertyType::Colour).await);
    assert_eq!(mock.total_calls(), 0);
}

#[tokio::test]
async fn test_store_caches_per_word() {
    let mock = Arc::new(colour_dictionary());
    let store = PropertyStore::new(mock.clone());

    assert!(store.has_property("Black", PropertyType::Colour).await);
    assert!(store.has_property("black", PropertyType::Colour).await);
    assert!(!store.has_property("beige", PropertyType::Colour).await);

    assert_eq!(mock.call_count("black"), 1);
    assert!(
        store
            .cache(PropertyType::Colour)
            .is_some_and(|cache| cache.contains("beige"))
    );
}

// ---------------------------------------------------------------------------
// Processor helpers
// ---------------------------------------------------------------------------

#[test]
fn test_description_string_one_property() {
    assert_eq!(PropertyProcessor::get_description_string(&item1("123")), "black");
}

#[test]
fn test_description_string_two_properties() {
    assert_eq!(PropertyProcessor::get_description_string(&item2("123")), "4 large");
}

#[test]
fn test_description_contains_prop() {
    assert!(PropertyProcessor::description_contains_prop(
        &item1("123"),
        PropertyType::Colour
    ));
    assert!(!PropertyProcessor::description_contains_prop(
        &item2("123"),
        PropertyType::Colour
    ));
}

#[test]
fn test_description_contains_prop_checks_names_not_values() {
    let item = Item::new("1", "1.00").with_attribute("Style", "colour block");
    assert!(!PropertyProcessor::description_contains_prop(
        &item,
        PropertyType::Colour
    ));

    let item = Item::new("1", "1.00").with_attribute("Main Colour", "Red");
    assert!(PropertyProcessor::description_contains_prop(
        &item,
        PropertyType::Colour
    ));
}

#[test]
fn test_tag_parts_of_speech_lowercases() {
    let processor = processor_with(Arc::new(MockDictionary::new()));
    let tagged = processor
        .tag_parts_of_speech("The Dog Walked Slowly.")
        .unwrap();

    assert_eq!(
        tagged,
        vec![
            TaggedWord::new("the", "DT"),
            TaggedWord::new("dog", "NN"),
            TaggedWord::new("walked", "VBD"),
            TaggedWord::new("slowly", "RB"),
        ]
    );
}

// ---------------------------------------------------------------------------
// Scoring a single property type
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_score_for_type_single_match() {
    let processor = processor_with(Arc::new(colour_dictionary()));

    let report = processor
        .score_for_type(&[item1("123")], PropertyType::Colour)
        .await
        .unwrap();

    assert_eq!(report.confidence, 1.0);
    assert_eq!(report.scores.len(), 1);
    assert_eq!(report.score_for("123"), Some(&BetterBayScore::matched()));
}

#[tokio::test]
async fn test_score_for_type_backfills_unmatched_confidence() {
    let processor = processor_with(Arc::new(colour_dictionary()));
    let beige = Item::new("234", "0.99").with_attribute("color", "beige");

    let report = processor
        .score_for_type(&[item1("123"), beige], PropertyType::Colour)
        .await
        .unwrap();

    assert_eq!(report.score_for("123"), Some(&score(1.0, 1.0)));
    assert_eq!(report.score_for("234"), Some(&score(0.0, 0.5)));
    assert_eq!(report.confidence, 0.75);
}

#[tokio::test]
async fn test_score_for_type_skips_verbs() {
    let mock = Arc::new(colour_dictionary());
    let processor = processor_with(mock.clone());
    let item = Item::new("123", "299.99").with_attribute("os", "Running Windows 10");

    let report = processor
        .score_for_type(&[item], PropertyType::Colour)
        .await
        .unwrap();

    assert_eq!(report.confidence, 0.0);
    assert_eq!(report.score_for("123"), Some(&score(0.0, 0.0)));
    assert_eq!(mock.call_count("running"), 0);
    assert_eq!(mock.call_count("windows"), 1);
    assert_eq!(mock.call_count("10"), 0);
}

#[tokio::test]
async fn test_score_for_type_stops_at_first_hit() {
    let mock = Arc::new(colour_dictionary());
    let processor = processor_with(mock.clone());
    let item = Item::new("1", "5.00")
        .with_attribute("colour", "black")
        .with_attribute("trim", "red");

    let report = processor
        .score_for_type(&[item], PropertyType::Colour)
        .await
        .unwrap();

    assert_eq!(report.score_for("1"), Some(&BetterBayScore::matched()));
    assert_eq!(mock.call_count("black"), 1);
    assert_eq!(mock.call_count("red"), 0);
}

#[tokio::test]
async fn test_score_for_type_reuses_cache_across_items() {
    let mock = Arc::new(colour_dictionary());
    let processor = processor_with(mock.clone());

    processor
        .score_for_type(
            &[item1("1"), item1("2"), item1("3")],
            PropertyType::Colour,
        )
        .await
        .unwrap();

    assert_eq!(mock.call_count("black"), 1);
}

#[tokio::test]
async fn test_score_for_type_rejects_empty_batch() {
    let processor = processor_with(Arc::new(colour_dictionary()));

    let err = processor
        .score_for_type(&[], PropertyType::Colour)
        .await
        .unwrap_err();

    assert!(matches!(err, ScoringError::EmptyBatch));
}

#[tokio::test]
async fn test_reports_stay_in_range_and_cover_every_item() {
    let processor = processor_with(Arc::new(colour_dictionary()));
    let batches: Vec<Vec<Item>> = vec![
        vec![item1("a")],
        vec![item1("a"), item2("b")],
        vec![
            item1("a"),
            Item::new("b", "1").with_attribute("color", "beige"),
            Item::new("c", "1").with_attribute("color", "red"),
            Item::new("d", "1").with_attribute("color", "zorblat"),
        ],
        vec![Item::new("x", "1").with_attribute("color", "")],
    ];

    for batch in batches {
        let report = processor
            .score_for_type(&batch, PropertyType::Colour)
            .await
            .unwrap();

        assert!((0.0..=1.0).contains(&report.confidence));
        assert_eq!(report.scores.len(), batch.len());
        for item in &batch {
            let s = report.score_for(&item.id).expect("every item is scored");
            assert!(s.score == 0.0 || s.score == 1.0);
            assert!((0.0..=1.0).contains(&s.confidence));
        }
    }
}

// ---------------------------------------------------------------------------
// Scoring across property types
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_score_all_types_match() {
    let processor = processor_with(Arc::new(colour_dictionary()));

    let report = processor.score(&[item1("123")], "Item Title").await.unwrap();

    assert_eq!(report.confidence, 1.0);
    assert_eq!(report.score_for("123"), Some(&BetterBayScore::matched()));
}

#[tokio::test]
async fn test_score_without_property_attribute_does_no_lookups() {
    let mock = Arc::new(colour_dictionary());
    let processor = processor_with(mock.clone());

    let report = processor.score(&[item2("123")], "Item Title").await.unwrap();

    assert_eq!(report, Report::empty());
    assert_eq!(mock.total_calls(), 0);
}

#[tokio::test]
async fn test_score_quick_filter_uses_first_item() {
    let mock = Arc::new(colour_dictionary());
    let processor = processor_with(mock.clone());

    let report = processor
        .score(&[item2("1"), item1("2")], "Item Title")
        .await
        .unwrap();

    assert!(report.is_empty());
    assert_eq!(mock.total_calls(), 0);
}

#[tokio::test]
async fn test_score_with_no_types_is_empty() {
    let processor = processor_with(Arc::new(colour_dictionary())).with_types(Vec::new());

    let report = processor.score(&[item1("1")], "Item Title").await.unwrap();

    assert!(processor.types().is_empty());
    assert_eq!(report, Report::empty());
}

#[tokio::test]
async fn test_score_rejects_empty_batch() {
    let processor = processor_with(Arc::new(colour_dictionary()));
    let err = processor.score(&[], "Item Title").await.unwrap_err();
    assert!(matches!(err, ScoringError::EmptyBatch));
}

#[test]
fn test_most_confident_picks_maximum() {
    let low = Report::new(0.2, HashMap::from([("a".to_string(), score(0.0, 0.2))]));
    let high = Report::new(0.9, HashMap::from([("b".to_string(), score(1.0, 1.0))]));

    assert_eq!(most_confident([low.clone(), high.clone()]), high);
    assert_eq!(most_confident([high.clone(), low]), high);
}

#[test]
fn test_most_confident_keeps_first_on_tie() {
    let first = Report::new(0.5, HashMap::from([("first".to_string(), score(1.0, 1.0))]));
    let second = Report::new(0.5, HashMap::from([("second".to_string(), score(0.0, 0.0))]));

    assert_eq!(most_confident([first.clone(), second]), first);
}

#[test]
fn test_most_confident_of_nothing_is_empty() {
    assert_eq!(most_confident(Vec::<Report>::new()), Report::empty());
    assert_eq!(most_confident([Report::empty()]), Report::empty());
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_engine_returns_empty_when_below_threshold() {
    let stub = StubProcessor::new("stub", report(0.0));
    let engine = engine_with(vec![stub.clone()]);

    let result = engine.score(&[item1("123")], "Item title").await.unwrap();

    assert_eq!(result, Report::empty());
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn test_engine_returns_report_above_threshold() {
    let engine = engine_with(vec![StubProcessor::new("stub", report(0.9))]);

    let result = engine.score(&[item1("123")], "Item title").await.unwrap();

    assert_eq!(result, report(0.9));
}

#[tokio::test]
async fn test_engine_threshold_is_strict() {
    let engine = engine_with(vec![StubProcessor::new(
        "stub",
        report(CONFIDENCE_THRESHOLD),
    )]);

    let result = engine.score(&[item1("123")], "Item title").await.unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_engine_stops_at_first_confident_processor() {
    let first = StubProcessor::new("first", report(0.9));
    let second = StubProcessor::new("second", report(1.0));
    let engine = engine_with(vec![first.clone(), second.clone()]);

    engine.score(&[item1("123")], "Item title").await.unwrap();

    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 0);
}

#[tokio::test]
async fn test_engine_falls_through_to_later_processor() {
    let first = StubProcessor::new("first", report(0.1));
    let second = StubProcessor::new("second", report(0.7));
    let engine = engine_with(vec![first.clone(), second.clone()]);

    let result = engine.score(&[item1("123")], "Item title").await.unwrap();

    assert_eq!(result.confidence, 0.7);
    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 1);
}

#[tokio::test]
async fn test_engine_rejects_empty_batch() {
    let stub = StubProcessor::new("stub", report(0.9));
    let engine = engine_with(vec![stub.clone()]);

    let err = engine.score(&[], "Item title").await.unwrap_err();

    assert!(matches!(err, ScoringError::EmptyBatch));
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_item_is_relevant_to_listing() {
    let engine = engine_with(vec![StubProcessor::new("stub", report(0.9))]);
    let first = item1("123");
    let second = item1("234");

    let relevant = engine
        .is_relevant_to_listing(&first, &[first.clone(), second], "Item Title")
        .await
        .unwrap();

    assert!(relevant);
}

#[tokio::test]
async fn test_item_is_not_relevant_to_listing() {
    let engine = engine_with(vec![StubProcessor::new("stub", report(0.9))]);
    let first = item1("123");
    let second = item1("234");

    let relevant = engine
        .is_relevant_to_listing(&second, &[first, second.clone()], "Item Title")
        .await
        .unwrap();

    assert!(!relevant);
}

#[tokio::test]
async fn test_low_confidence_report_keeps_candidate() {
    let engine = engine_with(vec![StubProcessor::new("stub", report(0.0))]);
    let first = item1("123");
    let second = item1("234");

    let verdict = engine
        .evaluate(&second, &[first, second.clone()], "Item Title")
        .await
        .unwrap();

    assert_eq!(verdict, RelevanceVerdict::NoEvidence);
    assert!(verdict.is_relevant());
}

#[tokio::test]
async fn test_engine_without_processors_keeps_candidate() {
    let engine = RelevanceEngine::new(EngineConfig::default());
    let candidate = item1("123");

    assert!(
        engine
            .is_relevant_to_listing(&candidate, &[candidate.clone()], "Item Title")
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_candidate_confidence_at_threshold_is_kept() {
    let stub = Report::new(
        0.9,
        HashMap::from([
            ("123".to_string(), score(0.0, CONFIDENCE_THRESHOLD)),
            ("234".to_string(), score(1.0, 1.0)),
        ]),
    );
    let engine = engine_with(vec![StubProcessor::new("stub", stub)]);
    let candidate = item1("123");

    let verdict = engine
        .evaluate(&candidate, &[candidate.clone(), item1("234")], "Item Title")
        .await
        .unwrap();

    assert_eq!(
        verdict,
        RelevanceVerdict::Corroborated {
            score: score(0.0, CONFIDENCE_THRESHOLD)
        }
    );
}

#[tokio::test]
async fn test_candidate_just_above_threshold_is_rejected() {
    let stub = Report::new(
        0.9,
        HashMap::from([("123".to_string(), score(0.0, 0.66))]),
    );
    let engine = engine_with(vec![StubProcessor::new("stub", stub)]);
    let candidate = item1("123");

    let relevant = engine
        .is_relevant_to_listing(&candidate, &[candidate.clone()], "Item Title")
        .await
        .unwrap();

    assert!(!relevant);
}

#[tokio::test]
async fn test_missing_candidate_score_is_an_error() {
    let engine = engine_with(vec![StubProcessor::new("stub", report(0.9))]);
    let stranger = item1("999");

    let err = engine
        .is_relevant_to_listing(&stranger, &[stranger.clone()], "Item Title")
        .await
        .unwrap_err();

    assert!(matches!(err, ScoringError::MissingScore { ref item_id } if item_id == "999"));
}

#[tokio::test]
async fn test_tagging_failure_surfaces_to_caller() {
    let store = Arc::new(PropertyStore::new(Arc::new(colour_dictionary())));
    let processor = PropertyProcessor::new(store, Arc::new(FailingTagger));
    let engine = engine_with(vec![Arc::new(processor)]);
    let candidate = item1("123");

    let err = engine
        .is_relevant_to_listing(&candidate, &[candidate.clone()], "Item Title")
        .await
        .unwrap_err();

    assert!(matches!(err, ScoringError::Tagging(_)));
}

#[tokio::test]
async fn test_processor_failure_stops_the_engine() {
    let later = StubProcessor::new("later", report(0.9));
    let engine = RelevanceEngine::new(EngineConfig::default())
        .with_processor(Arc::new(BrokenProcessor))
        .with_processor(later.clone());

    let err = engine.score(&[item1("123")], "Item title").await.unwrap_err();

    assert!(matches!(err, ScoringError::ProcessorFailed { ref processor, .. } if processor == "broken"));
    assert_eq!(later.calls(), 0);
}

#[tokio::test]
async fn test_default_pipeline_rejects_odd_one_out() {
    let mock = Arc::new(colour_dictionary());
    let engine = RelevanceEngine::with_dictionary(mock.clone(), EngineConfig::default());
    let items = vec![
        Item::new("1", "9.99").with_attribute("Colour", "Black"),
        Item::new("2", "9.99").with_attribute("Colour", "Red"),
        Item::new("3", "0.99").with_attribute("Colour", "Beige"),
    ];

    let odd_one_out = engine
        .is_relevant_to_listing(&items[2], &items, "Wool Scarf")
        .await
        .unwrap();
    let black = engine
        .is_relevant_to_listing(&items[0], &items, "Wool Scarf")
        .await
        .unwrap();

    assert!(!odd_one_out);
    assert!(black);
    assert_eq!(mock.call_count("black"), 1);
    assert_eq!(mock.call_count("beige"), 1);
    assert_eq!(engine.processor_count(), 1);
}

#[tokio::test]
async fn test_multicoloured_candidate_is_kept() {
    let mock = Arc::new(
        MockDictionary::new()
            .with_noun("black", COAL)
            .with_noun("white", "The colour of snow or milk.")
            .with_meanings(
                "multicoloured",
                &[("adjective", &["Having many colours."])],
            ),
    );
    let processor = Arc::new(processor_with(mock.clone()));
    let engine = engine_with(vec![processor.clone()]);
    let items = vec![
        Item::new("1", "9.99").with_attribute("Colour", "Black"),
        Item::new("2", "9.99").with_attribute("Colour", "White"),
        Item::new("3", "4.99").with_attribute("Colour", "Multicoloured"),
    ];

    let relevant = engine
        .is_relevant_to_listing(&items[2], &items, "Cotton T-Shirt")
        .await
        .unwrap();

    assert!(relevant);
    assert_eq!(mock.call_count("multicoloured"), 1);
    let colour_cache = processor.store().cache(PropertyType::Colour).unwrap();
    assert!(colour_cache.contains("multicoloured"));
    assert_eq!(processor.types(), &[PropertyType::Colour]);
}

#[test]
fn test_engine_config_validation() {
    assert!(EngineConfig::default().validate().is_ok());
    assert!(
        EngineConfig::default()
            .with_confidence_threshold(1.2)
            .validate()
            .is_err()
    );
    assert!(
        EngineConfig::default()
            .with_score_threshold(-0.5)
            .validate()
            .is_err()
    );
}

#[test]
fn test_verdict_reporting() {
    let rejected = RelevanceVerdict::Rejected {
        score: score(0.0, 0.8),
    };
    let corroborated = RelevanceVerdict::Corroborated {
        score: BetterBayScore::matched(),
    };

    assert!(!rejected.is_relevant());
    assert!(corroborated.is_relevant());
    assert_eq!(rejected.debug_status(), "REJECTED");
    assert_eq!(RelevanceVerdict::NoEvidence.debug_status(), "NO_EVIDENCE");
    assert_eq!(RelevanceVerdict::NoEvidence.score(), None);
    assert_eq!(corroborated.score(), Some(BetterBayScore::matched()));
    assert!(rejected.to_string().contains("0.8000"));
    assert_eq!(RelevanceVerdict::NoEvidence.to_string(), "NO_EVIDENCE");
}

#[test]
fn test_score_rejection_rule() {
    assert!(BetterBayScore::matched().is_match());
    assert!(!BetterBayScore::unmatched().is_match());
    assert!(score(0.0, 0.9).is_rejected(0.65, 0.5));
    assert!(!score(0.0, 0.65).is_rejected(0.65, 0.5));
    assert!(!score(0.5, 0.9).is_rejected(0.65, 0.5));
    assert!(!score(1.0, 1.0).is_rejected(0.65, 0.5));
}
