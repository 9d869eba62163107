use textrazor_api::types::{
    Account, Analysis, Category, CategoryList, Dictionary, DictionaryEntry, DictionaryEntryList,
    RelationType,
};
use textrazor_api::{EntryList, RawBody, RequestBody};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn load_response<T: serde::de::DeserializeOwned>(name: &str) -> T {
    let mut envelope: serde_json::Value = serde_json::from_str(&load_fixture(name)).unwrap();
    serde_json::from_value(envelope["response"].take()).unwrap()
}

#[test]
fn deserialize_analysis() {
    let analysis: Analysis = load_response("analysis.json");
    assert_eq!(analysis.language, "eng");
    assert!(analysis.language_is_reliable);

    assert_eq!(analysis.entities.len(), 1);
    let bbc = &analysis.entities[0];
    assert_eq!(bbc.entity_id, "BBC");
    assert_eq!(bbc.entity_english_id, "BBC");
    assert_eq!(bbc.wikidata_id, "Q9531");
    assert_eq!(bbc.matching_tokens, vec![0]);
    assert_eq!(bbc.types[0], "Agent");
    assert_eq!(bbc.types.len(), 5);
    assert!((bbc.confidence_score - 1.726).abs() < 1e-9);
    assert_eq!(bbc.ending_pos, 3);
    assert!(bbc.data.is_empty());

    assert_eq!(analysis.sentences.len(), 1);
    let words = &analysis.sentences[0].words;
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].token, "BBC");
    assert_eq!(words[0].part_of_speech, "NNP");
    assert_eq!(words[1].starting_pos, 3);
    assert!(words[0].parent_position.is_none());

    assert_eq!(analysis.topics[0].label, "Broadcasting");
    assert_eq!(analysis.relations[0].params.len(), 2);
    assert_eq!(analysis.relations[0].params[0].relation, RelationType::Subject);
    assert_eq!(analysis.relations[0].params[1].relation, RelationType::Object);
    assert_eq!(analysis.relations[0].params[1].word_positions, vec![2, 3]);

    assert!(analysis.entailments.is_empty());
    assert!(analysis.categories.is_empty());
}

#[test]
fn deserialize_empty_analysis() {
    let analysis: Analysis = load_response("not_ok.json");
    assert!(analysis.entities.is_empty());
    assert!(analysis.sentences.is_empty());
    assert_eq!(analysis.cleaned_text, "");
}

#[test]
fn deserialize_unknown_relation_type() {
    let param: textrazor_api::types::RelationParam =
        serde_json::from_str(r#"{"relation":"PREDICATE","wordPositions":[4]}"#).unwrap();
    assert_eq!(param.relation, RelationType::Other);
    assert_eq!(param.relation.to_string(), "OTHER");
}

#[test]
fn deserialize_account() {
    let account: Account = load_response("account.json");
    assert_eq!(account.plan, "FREE");
    assert_eq!(account.requests_used_today, 17);
    assert_eq!(account.concurrent_request_limit, 2);
    assert_eq!(account.concurrent_requests_used, 0);
    assert_eq!(account.plan_daily_included_requests, 500);
}

#[test]
fn deserialize_dictionary_entries() {
    let list: DictionaryEntryList = load_response("dictionary_entries.json");
    assert_eq!(list.limit, 20);
    assert_eq!(list.total, 1);
    assert_eq!(list.entries[0].id, "DEV2");
    assert_eq!(list.entries[0].text, "Bjarne Stroustrup");

    let entry: DictionaryEntry = load_response("dictionary_entry.json");
    assert_eq!(entry.data["profession"], vec!["programmer".to_string()]);
}

#[test]
fn deserialize_categories() {
    let list: CategoryList = load_response("categories.json");
    assert_eq!(list.id, "sport2");
    assert_eq!(list.total, 3);
    assert_eq!(list.last_updated, 1489517818);
    assert_eq!(list.categories.len(), 3);
    assert_eq!(list.categories[2].label, "Cricket");

    let category: Category = load_response("category.json");
    assert_eq!(category.category_id, "100");
    assert_eq!(category.query, "concept('sport>golf')");
}

#[test]
fn encode_dictionary() {
    let dictionary = Dictionary::new("test_ents")
        .with_match_type("token")
        .with_case_insensitive(true)
        .with_language("eng");
    let encoded = RequestBody::encode(&dictionary).unwrap();
    let json: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "test_ents",
            "matchType": "token",
            "caseInsensitive": true,
            "language": "eng"
        })
    );
}

#[test]
fn encode_entry_list() {
    let entries = vec![
        DictionaryEntry::new("DEV2", "Bjarne Stroustrup").with_data("profession", "programmer"),
        DictionaryEntry::new("DEV3", "Dennis Ritchie"),
    ];
    let encoded = EntryList(&entries).encode().unwrap();
    let json: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"id": "DEV2", "text": "Bjarne Stroustrup", "data": {"profession": ["programmer"]}},
            {"id": "DEV3", "text": "Dennis Ritchie", "data": {}}
        ])
    );
}

#[test]
fn raw_body_passes_through() {
    let csv = "100,Golf,concept('sport>golf')\n101,Squash,concept('sport>squash')\n";
    assert_eq!(RawBody::new(csv).encode().unwrap(), csv);
}
