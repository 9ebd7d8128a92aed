//! Anchor assignment.
//!
//! Every entity gets a slug anchor that is unique within its list, the
//! alphabet bucket it is listed under, and the href of its listing entry
//! (`{type_path}/{letter}.html#{anchor}`).

use rustc_hash::FxHashSet;

use crate::site::types::Entity;
use crate::site::utils::canonical_name;

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Bucket for names that do not start with a Latin letter.
pub const OVERFLOW_LETTER: char = '0';

/// Appended to a slug until it no longer collides.
pub const DISAMBIGUATION_FILLER: char = 'x';

/// The 26 letters followed by the overflow bucket.
pub fn extended_alphabet() -> Vec<String> {
    ALPHABET
        .chars()
        .chain(std::iter::once(OVERFLOW_LETTER))
        .map(String::from)
        .collect()
}

/// Alphabet bucket of a name: its uppercased first character if that is
/// one of A-Z, the overflow bucket otherwise.
pub fn bucket_letter(name: &str) -> char {
    let Some(first) = name.chars().next() else {
        return OVERFLOW_LETTER;
    };

    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => c,
        _ => OVERFLOW_LETTER,
    }
}

/// Anchor, bucket and href of one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub id: String,
    pub letter: char,
    pub href: String,
}

/// An entity stamped with its anchor.
#[derive(Debug, Clone)]
pub struct Anchored<E> {
    pub entity: E,
    pub anchor: Anchor,
}

impl<E: Entity> Anchored<E> {
    pub fn name(&self) -> &str {
        self.entity.name()
    }

    /// Listing page of this entity, e.g. `games/A.html`.
    pub fn page(&self) -> String {
        listing_page(E::KIND.path(), self.anchor.letter)
    }
}

pub fn listing_page(path: &str, letter: char) -> String {
    format!("{}/{}.html", path, letter)
}

/// Stamp anchors on a list of entities, in list order.
///
/// Anchors are derived from the name attribute; a slug already taken in
/// this list is extended with the filler character until it is free.
pub fn assign_anchors<E: Entity>(entities: Vec<E>) -> Vec<Anchored<E>> {
    let mut taken: FxHashSet<String> = FxHashSet::default();

    entities
        .into_iter()
        .map(|entity| {
            let mut id = canonical_name(entity.name());
            while taken.contains(&id) {
                id.push(DISAMBIGUATION_FILLER);
            }
            taken.insert(id.clone());

            let letter = bucket_letter(entity.name());
            let href = format!("{}#{}", listing_page(E::KIND.path(), letter), id);

            Anchored {
                entity,
                anchor: Anchor { id, letter, href },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::types::{Developer, Game};

    fn game(title: &str) -> Game {
        Game {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_extended_alphabet() {
        let alphabet = extended_alphabet();
        assert_eq!(alphabet.len(), 27);
        assert_eq!(alphabet[0], "A");
        assert_eq!(alphabet[25], "Z");
        assert_eq!(alphabet[26], "0");
    }

    #[test]
    fn test_bucket_letter() {
        assert_eq!(bucket_letter("OpenTTD"), 'O');
        assert_eq!(bucket_letter("freeciv"), 'F');
        assert_eq!(bucket_letter("0 A.D."), OVERFLOW_LETTER);
        assert_eq!(bucket_letter("2048"), OVERFLOW_LETTER);
        assert_eq!(bucket_letter("Ätna"), OVERFLOW_LETTER);
        assert_eq!(bucket_letter("ßtest"), OVERFLOW_LETTER);
        assert_eq!(bucket_letter("[Zombie]"), OVERFLOW_LETTER);
        assert_eq!(bucket_letter(""), OVERFLOW_LETTER);
    }

    #[test]
    fn test_anchor_and_href() {
        let anchored = assign_anchors(vec![game("Battle for Wesnoth")]);
        let anchor = &anchored[0].anchor;
        assert_eq!(anchor.id, "battle_for_wesnoth");
        assert_eq!(anchor.letter, 'B');
        assert_eq!(anchor.href, "games/B.html#battle_for_wesnoth");
        assert_eq!(anchored[0].page(), "games/B.html");
    }

    #[test]
    fn test_collisions_get_filler_suffix() {
        let anchored = assign_anchors(vec![game("Tetris"), game("tetris"), game("Tetris!"), game("Tetrisx")]);
        let ids: Vec<_> = anchored.iter().map(|a| a.anchor.id.as_str()).collect();
        assert_eq!(ids, vec!["tetris", "tetrisx", "tetrisxx", "tetrisxxx"]);
    }

    #[test]
    fn test_anchors_unique_within_list() {
        let names = ["A", "a", "A!", "a?", "B", "b", "", "#", "A b", "a_b", "Ab"];
        let anchored = assign_anchors(names.iter().map(|n| game(n)).collect());
        let ids: FxHashSet<_> = anchored.iter().map(|a| a.anchor.id.clone()).collect();
        assert_eq!(ids.len(), names.len());
    }

    #[test]
    fn test_anchors_scoped_per_list() {
        let games = assign_anchors(vec![game("Jane Doe")]);
        let developers = assign_anchors(vec![Developer {
            name: "Jane Doe".to_string(),
            ..Default::default()
        }]);
        assert_eq!(games[0].anchor.id, developers[0].anchor.id);
        assert_eq!(developers[0].anchor.href, "developers/J.html#jane_doe");
    }
}
