use super::*;
use crate::corpus::Catalog;

fn catalog(entries: &[(&str, &str)]) -> Catalog {
    Catalog(
        entries
            .iter()
            .map(|(hex, name)| ((*hex).to_owned(), (*name).to_owned()))
            .collect(),
    )
}

#[test]
fn build_normalizes_and_keeps_order() {
    let index = NameIndex::build(&catalog(&[
        ("ff0000", "Mars Red"),
        ("#00ff00", "Leaf"),
        ("00f", "Shorthand Blue"),
    ]))
    .unwrap();
    assert_eq!(index.len(), 3);
    assert!(!index.is_empty());

    let exact = index.resolve(Rgb::opaque(0, 0, 0xff)).unwrap();
    assert_eq!(exact.name, "Shorthand Blue");
    assert_eq!(exact.index, 2);
}

#[test]
fn build_skips_unparseable_entries() {
    let index = NameIndex::build(&catalog(&[
        ("not-hex", "Broken"),
        ("112233", "Kept"),
    ]))
    .unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.resolve(Rgb::opaque(0x11, 0x22, 0x33)).unwrap().name, "Kept");
}

#[test]
fn empty_corpus_is_an_error_not_a_sentinel() {
    assert!(matches!(
        NameIndex::build(&catalog(&[])),
        Err(crate::error::PaletteError::CorpusEmpty)
    ));
    assert!(matches!(
        NameIndex::build(&catalog(&[("zzz", "Nothing Parses")])),
        Err(crate::error::PaletteError::CorpusEmpty)
    ));
}

#[test]
fn resolve_returns_the_nearest_entry() {
    let index = NameIndex::build(&catalog(&[
        ("000000", "Ink"),
        ("ffffff", "Paper"),
        ("fe0000", "Almost Red"),
    ]))
    .unwrap();
    assert_eq!(index.resolve(Rgb::opaque(0xfd, 0, 0)).unwrap().name, "Almost Red");
    assert_eq!(index.resolve(Rgb::opaque(4, 4, 4)).unwrap().name, "Ink");
    assert_eq!(index.resolve(Rgb::opaque(0xf0, 0xf0, 0xf0)).unwrap().name, "Paper");
}

#[test]
fn distance_ties_break_by_first_inserted_order() {
    // 000000 and 000002 are equidistant from 000001.
    let index = NameIndex::build(&catalog(&[
        ("000000", "First Listed"),
        ("000002", "Second Listed"),
    ]))
    .unwrap();
    let resolved = index.resolve(Rgb::opaque(0, 0, 1)).unwrap();
    assert_eq!(resolved.name, "First Listed");
    assert_eq!(resolved.index, 0);
}

#[test]
fn resolution_is_deterministic_across_repeated_queries() {
    let index = NameIndex::build(&catalog(&[
        ("3b82f6", "Bright Blue"),
        ("123456", "Deep Slate"),
        ("abcdef", "Pale Sky"),
    ]))
    .unwrap();
    let query = Rgb::opaque(0x40, 0x80, 0xf0);
    let first = index.resolve(query).unwrap();
    for _ in 0..10 {
        assert_eq!(index.resolve(query).unwrap(), first);
    }
}

#[test]
fn slugify_lowercases_and_dashes_everything_else() {
    assert_eq!(slugify("Blue Bouquet"), "blue-bouquet");
    assert_eq!(slugify("Rosy's Red!"), "rosy-s-red-");
    assert_eq!(slugify("20000 Leagues Under the Sea"), "20000-leagues-under-the-sea");
    assert_eq!(slugify("Crème"), "cr-me");
}
