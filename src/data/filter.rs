use std::collections::HashSet;

use super::model::{Dataset, TypeTag};

// ---------------------------------------------------------------------------
// Type filter: which names belong to a primary type
// ---------------------------------------------------------------------------

/// Names of every record whose `type1` matches `tag`.
///
/// Dataset order is kept and a name repeated on several rows is listed once,
/// at its first occurrence.
pub fn select_names(dataset: &Dataset, tag: TypeTag) -> Vec<String> {
    let mut seen = HashSet::new();
    dataset
        .records
        .iter()
        .filter(|r| r.type1 == tag.as_str())
        .filter(|r| seen.insert(r.name.as_str()))
        .map(|r| r.name.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Frequency count over `type1`
// ---------------------------------------------------------------------------

/// How many records carry each distinct `type1`.
///
/// Sorted by descending count; equal counts keep first-encountered order.
pub fn type_counts(dataset: &Dataset) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for r in &dataset.records {
        match counts.iter_mut().find(|(t, _)| *t == r.type1) {
            Some((_, n)) => *n += 1,
            None => counts.push((r.type1.clone(), 1)),
        }
    }
    // `sort_by` is stable, so ties stay in encounter order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::from_reader;

    fn fixture() -> Dataset {
        let csv = "\
name,type1,attack,defense,hp,height_m,kg,speed
Bulbasaur,grass,49,49,45,0.7,6.9,45
Charmander,fire,52,43,39,0.6,8.5,65
Ivysaur,grass,62,63,60,1.0,13.0,60
Bulbasaur,grass,1,1,1,1,1,1
Squirtle,water,48,65,44,0.5,9.0,43
Vulpix,fire,41,40,38,0.6,9.9,65
Pidgey,flying,45,40,40,0.3,1.8,56
";
        from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn grass_names_are_unique_and_in_dataset_order() {
        let ds = fixture();
        assert_eq!(select_names(&ds, TypeTag::Grass), ["Bulbasaur", "Ivysaur"]);
    }

    #[test]
    fn every_selected_name_has_the_requested_type() {
        let ds = fixture();
        for tag in TypeTag::ALL {
            let names = select_names(&ds, tag);
            let unique: HashSet<_> = names.iter().collect();
            assert_eq!(unique.len(), names.len(), "duplicates for {tag}");
            for name in &names {
                assert!(ds
                    .records
                    .iter()
                    .any(|r| &r.name == name && r.type1 == tag.as_str()));
            }
            let any_of_type = ds.records.iter().any(|r| r.type1 == tag.as_str());
            assert_eq!(names.is_empty(), !any_of_type, "emptiness for {tag}");
        }
    }

    #[test]
    fn unmatched_type_yields_no_names() {
        assert!(select_names(&fixture(), TypeTag::Dragon).is_empty());
    }

    #[test]
    fn counts_sort_descending_with_stable_ties() {
        let counts = type_counts(&fixture());
        assert_eq!(
            counts,
            vec![
                ("grass".to_string(), 3),
                ("fire".to_string(), 2),
                ("water".to_string(), 1),
                ("flying".to_string(), 1),
            ]
        );
    }

    #[test]
    fn counts_cover_every_record() {
        let ds = fixture();
        let total: usize = type_counts(&ds).iter().map(|(_, n)| n).sum();
        assert_eq!(total, ds.len());
        assert!(type_counts(&Dataset::default()).is_empty());
    }
}
