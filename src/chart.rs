use std::f64::consts::TAU;

use crate::data::filter::type_counts;
use crate::data::model::Dataset;

pub const DISTRIBUTION_TITLE: &str = "Types de Pokémon présents";

// ---------------------------------------------------------------------------
// Proportional chart model, independent of rendering
// ---------------------------------------------------------------------------

/// One wedge of a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    /// Draw `label` and value on the wedge itself rather than only on hover.
    pub annotated: bool,
}

impl Slice {
    /// The value as a reader would write it: `49`, `0.7`.
    pub fn value_text(&self) -> String {
        if self.value.is_finite() && self.value.fract() == 0.0 {
            format!("{:.0}", self.value)
        } else {
            format!("{}", self.value)
        }
    }

    fn weight(&self) -> f64 {
        if self.value.is_finite() && self.value > 0.0 {
            self.value
        } else {
            0.0
        }
    }
}

/// A pie chart: each slice's area is proportional to its value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProportionChart {
    pub title: Option<String>,
    pub slices: Vec<Slice>,
}

impl ProportionChart {
    /// A chart with no title and no slices.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Each slice's share of the total. Zero, negative and `NaN` values get
    /// no area; all zeros if nothing has positive weight.
    pub fn fractions(&self) -> Vec<f64> {
        let total: f64 = self.slices.iter().map(Slice::weight).sum();
        self.slices
            .iter()
            .map(|s| if total > 0.0 { s.weight() / total } else { 0.0 })
            .collect()
    }

    /// Start and end angle per slice, in radians, laid end to end from 0.
    pub fn wedges(&self) -> Vec<(f64, f64)> {
        let mut start = 0.0;
        self.fractions()
            .into_iter()
            .map(|f| {
                let end = start + f * TAU;
                let wedge = (start, end);
                start = end;
                wedge
            })
            .collect()
    }

    /// Index of the slice covering `theta`, if any.
    pub fn slice_at_angle(&self, theta: f64) -> Option<usize> {
        let theta = theta.rem_euclid(TAU);
        self.wedges()
            .iter()
            .position(|&(start, end)| end > start && theta >= start && theta < end)
    }
}

// ---------------------------------------------------------------------------
// The two charts the dashboard shows
// ---------------------------------------------------------------------------

/// Stats breakdown of the selected Pokémon.
///
/// `None` and names missing from the dataset both give an empty chart. When
/// several rows share the name, the first one wins.
pub fn compute_stats(dataset: &Dataset, selection: Option<&str>) -> ProportionChart {
    let Some(name) = selection else {
        return ProportionChart::empty();
    };
    let Some(record) = dataset.find_by_name(name) else {
        log::warn!("No record named '{name}'; showing an empty stats chart");
        return ProportionChart::empty();
    };

    let fields = [
        ("Attack", record.attack),
        ("Defense", record.defense),
        ("HP", record.hp),
        ("Taille", record.height_m),
        ("Poid", record.kg),
        ("Speed", record.speed),
    ];

    ProportionChart {
        title: Some(format!("Statistiques de {name}")),
        slices: fields
            .into_iter()
            .map(|(label, value)| Slice {
                label: label.to_string(),
                value,
                annotated: true,
            })
            .collect(),
    }
}

/// How the whole dataset splits across primary types.
pub fn compute_distribution(dataset: &Dataset) -> ProportionChart {
    ProportionChart {
        title: Some(DISTRIBUTION_TITLE.to_string()),
        slices: type_counts(dataset)
            .into_iter()
            .map(|(label, count)| Slice {
                label,
                value: count as f64,
                annotated: false,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::from_reader;

    fn fixture() -> Dataset {
        let csv = "\
name,type1,attack,defense,hp,height_m,kg,speed
Bulbasaur,grass,49,49,45,0.7,6.9,45
Ivysaur,grass,62,63,60,1.0,13.0,60
Charmander,fire,52,43,39,0.6,8.5,65
Ivysaur,water,1,1,1,1,1,1
";
        from_reader(csv.as_bytes()).unwrap()
    }

    fn pairs(chart: &ProportionChart) -> Vec<(&str, f64)> {
        chart
            .slices
            .iter()
            .map(|s| (s.label.as_str(), s.value))
            .collect()
    }

    #[test]
    fn bulbasaur_stats_in_fixed_order() {
        let chart = compute_stats(&fixture(), Some("Bulbasaur"));
        assert_eq!(chart.title.as_deref(), Some("Statistiques de Bulbasaur"));
        assert_eq!(
            pairs(&chart),
            vec![
                ("Attack", 49.0),
                ("Defense", 49.0),
                ("HP", 45.0),
                ("Taille", 0.7),
                ("Poid", 6.9),
                ("Speed", 45.0),
            ]
        );
        assert!(chart.slices.iter().all(|s| s.annotated));
    }

    #[test]
    fn every_name_gets_six_slices_from_its_first_row() {
        let ds = fixture();
        for record in &ds.records {
            let chart = compute_stats(&ds, Some(&record.name));
            assert_eq!(chart.slices.len(), 6);
            let first = ds.find_by_name(&record.name).unwrap();
            let values: Vec<f64> = chart.slices.iter().map(|s| s.value).collect();
            assert_eq!(
                values,
                [
                    first.attack,
                    first.defense,
                    first.hp,
                    first.height_m,
                    first.kg,
                    first.speed
                ]
            );
        }
        // Duplicate name resolves to the grass row.
        assert_eq!(compute_stats(&ds, Some("Ivysaur")).slices[0].value, 62.0);
    }

    #[test]
    fn no_selection_and_unknown_name_give_empty_chart() {
        let ds = fixture();
        assert_eq!(compute_stats(&ds, None), ProportionChart::empty());
        let missing = compute_stats(&ds, Some("Mew"));
        assert!(missing.is_empty());
        assert!(missing.title.is_none());
    }

    #[test]
    fn distribution_counts_every_type() {
        let ds = fixture();
        let chart = compute_distribution(&ds);
        assert_eq!(chart.title.as_deref(), Some(DISTRIBUTION_TITLE));
        assert_eq!(
            pairs(&chart),
            vec![("grass", 2.0), ("fire", 1.0), ("water", 1.0)]
        );
        let total: f64 = chart.slices.iter().map(|s| s.value).sum();
        assert_eq!(total, ds.len() as f64);
        assert!(chart.slices.iter().all(|s| !s.annotated));
    }

    #[test]
    fn distribution_ignores_selection() {
        let ds = fixture();
        let before = compute_distribution(&ds);
        let _ = compute_stats(&ds, Some("Charmander"));
        assert_eq!(compute_distribution(&ds), before);
    }

    #[test]
    fn value_text_drops_integral_fraction() {
        let slice = |value| Slice {
            label: String::new(),
            value,
            annotated: true,
        };
        assert_eq!(slice(49.0).value_text(), "49");
        assert_eq!(slice(0.7).value_text(), "0.7");
        assert_eq!(slice(f64::NAN).value_text(), "NaN");
    }

    #[test]
    fn fractions_skip_missing_values() {
        let mut chart = compute_stats(&fixture(), Some("Bulbasaur"));
        chart.slices[3].value = f64::NAN;
        let fractions = chart.fractions();
        assert_eq!(fractions[3], 0.0);
        let sum: f64 = fractions.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn angles_map_back_to_slices() {
        let chart = ProportionChart {
            title: None,
            slices: ["a", "b", "c"]
                .iter()
                .zip([1.0, 0.0, 3.0])
                .map(|(label, value)| Slice {
                    label: label.to_string(),
                    value,
                    annotated: false,
                })
                .collect(),
        };
        // a covers the first quarter, b is empty, c the rest.
        assert_eq!(chart.slice_at_angle(0.1), Some(0));
        assert_eq!(chart.slice_at_angle(TAU / 4.0 + 0.1), Some(2));
        assert_eq!(chart.slice_at_angle(-0.1), Some(2));
        assert_eq!(ProportionChart::empty().slice_at_angle(1.0), None);
    }
}
