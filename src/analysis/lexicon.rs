//! Compact affect lexicon in the AFINN style, trimmed to vocabulary that
//! actually shows up in song lyrics. Valences run from -5 (most negative)
//! to 5 (most positive); words the table does not know score 0.

use lazy_static::lazy_static;
use std::collections::HashMap;

const VALENCES: &[(&str, i32)] = &[
    ("abandon", -2),
    ("abandoned", -2),
    ("abuse", -3),
    ("ache", -2),
    ("admire", 3),
    ("adore", 3),
    ("afraid", -2),
    ("aggressive", -2),
    ("alive", 1),
    ("alone", -2),
    ("amazing", 4),
    ("anger", -3),
    ("angry", -3),
    ("awful", -3),
    ("bad", -3),
    ("beautiful", 3),
    ("best", 3),
    ("better", 2),
    ("bitter", -2),
    ("bless", 2),
    ("blessed", 3),
    ("bold", 2),
    ("bored", -2),
    ("brave", 2),
    ("bright", 1),
    ("brilliant", 4),
    ("broke", -1),
    ("broken", -1),
    ("burden", -2),
    ("calm", 2),
    ("care", 2),
    ("careless", -2),
    ("celebrate", 3),
    ("chance", 2),
    ("chaos", -2),
    ("charm", 3),
    ("cheer", 2),
    ("cold", -1),
    ("comfort", 2),
    ("confused", -2),
    ("courage", 2),
    ("coward", -2),
    ("crash", -2),
    ("crazy", -2),
    ("cried", -2),
    ("cries", -2),
    ("cruel", -3),
    ("cry", -1),
    ("crying", -2),
    ("curse", -1),
    ("damn", -4),
    ("danger", -2),
    ("dark", -1),
    ("dead", -3),
    ("dear", 2),
    ("death", -2),
    ("defeated", -2),
    ("delight", 3),
    ("demon", -2),
    ("denied", -2),
    ("desire", 1),
    ("despair", -3),
    ("destroy", -3),
    ("destroyed", -3),
    ("devil", -2),
    ("die", -3),
    ("died", -3),
    ("dirty", -2),
    ("disaster", -2),
    ("doom", -2),
    ("doubt", -1),
    ("dream", 1),
    ("drown", -2),
    ("dying", -2),
    ("embrace", 1),
    ("empty", -1),
    ("enemy", -2),
    ("enjoy", 2),
    ("evil", -3),
    ("fail", -2),
    ("failed", -2),
    ("faith", 1),
    ("fake", -3),
    ("fear", -2),
    ("fearless", 2),
    ("fight", -1),
    ("fine", 2),
    ("fire", -2),
    ("forget", -1),
    ("forgive", 1),
    ("forgotten", -1),
    ("free", 1),
    ("freedom", 2),
    ("frightened", -2),
    ("fun", 4),
    ("funeral", -1),
    ("gentle", 2),
    ("gift", 2),
    ("glad", 3),
    ("glorious", 2),
    ("glory", 2),
    ("god", 1),
    ("good", 3),
    ("grace", 1),
    ("grave", -2),
    ("great", 3),
    ("grief", -2),
    ("guilty", -3),
    ("happy", 3),
    ("harm", -2),
    ("hate", -3),
    ("hated", -3),
    ("hates", -3),
    ("heartbreak", -2),
    ("heaven", 2),
    ("hell", -4),
    ("helpless", -2),
    ("hero", 2),
    ("honest", 2),
    ("hope", 2),
    ("hopeless", -2),
    ("hug", 2),
    ("hurt", -2),
    ("hurts", -2),
    ("innocent", 1),
    ("jealous", -2),
    ("joy", 3),
    ("kill", -3),
    ("killed", -3),
    ("kind", 2),
    ("kiss", 2),
    ("laugh", 1),
    ("liar", -3),
    ("lie", -1),
    ("lies", -2),
    ("lonely", -2),
    ("lost", -3),
    ("love", 3),
    ("loved", 3),
    ("lovely", 3),
    ("loves", 3),
    ("lucky", 3),
    ("mad", -3),
    ("miracle", 4),
    ("miserable", -3),
    ("misery", -2),
    ("murder", -2),
    ("nervous", -2),
    ("nice", 3),
    ("nightmare", -3),
    ("no", -1),
    ("numb", -1),
    ("pain", -2),
    ("painful", -2),
    ("panic", -3),
    ("paradise", 3),
    ("peace", 2),
    ("peaceful", 2),
    ("perfect", 3),
    ("pleasure", 3),
    ("poison", -2),
    ("poor", -2),
    ("praise", 3),
    ("pray", 1),
    ("precious", 2),
    ("pretty", 1),
    ("proud", 2),
    ("rage", -2),
    ("regret", -2),
    ("rich", 2),
    ("romance", 2),
    ("ruin", -2),
    ("sad", -2),
    ("safe", 1),
    ("satisfied", 2),
    ("save", 2),
    ("scare", -2),
    ("scared", -2),
    ("scream", -2),
    ("shame", -2),
    ("shine", 2),
    ("sick", -2),
    ("sin", -2),
    ("smile", 2),
    ("sorrow", -2),
    ("sorry", -1),
    ("splendid", 3),
    ("steal", -2),
    ("strange", -1),
    ("strength", 2),
    ("strong", 2),
    ("struggle", -2),
    ("stupid", -2),
    ("suffer", -2),
    ("sunshine", 2),
    ("super", 3),
    ("sweet", 2),
    ("tears", -2),
    ("terrible", -3),
    ("terror", -3),
    ("thank", 2),
    ("torn", -2),
    ("torture", -4),
    ("tragedy", -2),
    ("trap", -1),
    ("treasure", 2),
    ("triumph", 4),
    ("trouble", -2),
    ("true", 2),
    ("trust", 1),
    ("ugly", -3),
    ("unhappy", -2),
    ("united", 1),
    ("useless", -2),
    ("vicious", -2),
    ("victory", 3),
    ("violence", -3),
    ("war", -2),
    ("warm", 1),
    ("weak", -2),
    ("weary", -2),
    ("weep", -2),
    ("welcome", 2),
    ("whore", -4),
    ("wicked", -2),
    ("win", 4),
    ("winner", 4),
    ("wish", 1),
    ("won", 3),
    ("wonderful", 4),
    ("worry", -3),
    ("worse", -3),
    ("worst", -3),
    ("worthless", -2),
    ("wound", -2),
    ("wrong", -2),
    ("yes", 1),
];

lazy_static! {
    static ref LEXICON: HashMap<&'static str, i32> = VALENCES.iter().copied().collect();
}

/// The valence of `word`, or 0 when the lexicon does not know it.
/// Callers are expected to lowercase before asking.
pub(super) fn valence(word: &str) -> i32 {
    LEXICON.get(word).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_words_have_their_valence() {
        assert_eq!(valence("love"), 3);
        assert_eq!(valence("hate"), -3);
        assert_eq!(valence("hell"), -4);
        assert_eq!(valence("wonderful"), 4);
    }

    #[test]
    fn unknown_words_score_zero() {
        assert_eq!(valence("guitar"), 0);
        assert_eq!(valence(""), 0);
    }

    #[test]
    fn lookups_are_not_case_folded_here() {
        assert_eq!(valence("Love"), 0);
    }

    #[test]
    fn table_has_no_duplicate_words() {
        assert_eq!(LEXICON.len(), VALENCES.len());
    }
}
