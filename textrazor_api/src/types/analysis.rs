use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::envelope::{nested_response, Envelope};

/// Result of analyzing a text or a web page.
///
/// Which collections are filled depends on the `extractors` requested.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Analysis {
    #[serde(skip)]
    envelope: Envelope,

    pub custom_annotation_output: String,

    pub cleaned_text: String,

    pub raw_text: String,

    pub language: String,

    pub language_is_reliable: bool,

    pub entailments: Vec<Entailment>,

    pub entities: Vec<Entity>,

    pub topics: Vec<Topic>,

    pub categories: Vec<ScoredCategory>,

    pub noun_phrases: Vec<NounPhrase>,

    pub properties: Vec<Property>,

    pub relations: Vec<Relation>,

    pub sentences: Vec<Sentence>,

    pub matching_rules: Vec<String>,
}

nested_response!(Analysis);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entity {
    pub id: i64,

    pub entity_id: String,

    pub entity_english_id: String,

    pub custom_entity_id: String,

    pub confidence_score: f64,

    pub relevance_score: f64,

    #[serde(rename = "type")]
    pub types: Vec<String>,

    pub freebase_types: Vec<String>,

    pub freebase_id: String,

    pub wikidata_id: String,

    pub wiki_link: String,

    /// Positions of the words this entity was matched from.
    pub matching_tokens: Vec<i64>,

    pub matched_text: String,

    pub starting_pos: i64,

    pub ending_pos: i64,

    /// Custom data attached to dictionary-matched entities.
    pub data: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Topic {
    pub id: i64,

    pub label: String,

    pub score: f64,

    pub wiki_link: String,

    pub wikidata_id: String,
}

/// A category assigned by a classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoredCategory {
    pub category_id: String,

    pub label: String,

    pub score: f64,

    pub classifier_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entailment {
    pub context_score: f64,

    pub prior_score: f64,

    pub score: f64,

    /// Tree describing the entailed word; its shape depends on the entailment.
    pub entailed_tree: serde_json::Value,

    pub entailed_words: Vec<String>,

    pub word_positions: Vec<i64>,
}

/// Role of a word in a [`Relation`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RelationType {
    Subject,
    Object,
    #[default]
    #[serde(other)]
    Other,
}
impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RelationType::Subject => "SUBJECT",
                RelationType::Object => "OBJECT",
                RelationType::Other => "OTHER",
            }
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationParam {
    pub word_positions: Vec<i64>,

    pub relation: RelationType,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Relation {
    pub params: Vec<RelationParam>,

    pub word_positions: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NounPhrase {
    pub word_positions: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Property {
    pub word_positions: Vec<i64>,

    pub property_positions: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sentence {
    pub position: i64,

    pub words: Vec<Word>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Word {
    pub position: i64,

    pub starting_pos: i64,

    pub ending_pos: i64,

    pub token: String,

    pub lemma: String,

    pub stem: String,

    pub part_of_speech: String,

    pub parent_position: Option<i64>,

    pub relation_to_parent: String,

    /// Wordnet senses this word may take, with their scores.
    pub senses: Vec<Sense>,

    pub spelling_suggestions: Vec<SpellingSuggestion>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sense {
    pub synset: String,

    pub score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellingSuggestion {
    pub suggestion: String,

    pub score: f64,
}
