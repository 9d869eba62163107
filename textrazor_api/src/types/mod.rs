mod analysis;
pub use self::analysis::{
    Analysis, Entailment, Entity, NounPhrase, Property, Relation, RelationParam, RelationType,
    ScoredCategory, Sense, Sentence, SpellingSuggestion, Topic, Word,
};

mod account;
pub use self::account::Account;

mod dictionary;
pub use self::dictionary::{Dictionary, DictionaryEntry, DictionaryEntryList, DictionaryList};

mod classifier;
pub use self::classifier::{Category, CategoryList};
