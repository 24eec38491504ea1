use std::collections::BTreeMap;

use crate::models::VariantDimension;

/// Expands per-dimension label picks into every full selection (exactly one
/// label per dimension): the Cartesian product across dimensions.
///
/// The running list is expanded against each subsequent dimension in turn,
/// earlier entries first, so output order is deterministic for a given input
/// order. A dimension with no picked labels makes the whole result empty;
/// callers treat the empty list as an incomplete selection and block the
/// add-to-cart / checkout action.
pub fn generate_combinations(
    dimensions: &[(String, Vec<String>)],
) -> Vec<BTreeMap<String, String>> {
    let mut combinations: Vec<BTreeMap<String, String>> = Vec::new();

    for (index, (kind, labels)) in dimensions.iter().enumerate() {
        if labels.is_empty() {
            return Vec::new();
        }

        if index == 0 {
            combinations = labels
                .iter()
                .map(|label| BTreeMap::from([(kind.clone(), label.clone())]))
                .collect();
        } else {
            combinations = combinations
                .into_iter()
                .flat_map(|combination| {
                    labels.iter().map(move |label| {
                        let mut expanded = combination.clone();
                        expanded.insert(kind.clone(), label.clone());
                        expanded
                    })
                })
                .collect();
        }
    }

    combinations
}

/// Single-select path: one picked label per dimension, yielding the one full
/// selection, or `None` when any dimension is missing a pick.
pub fn complete_selection(
    dimensions: &[VariantDimension],
    picked: &BTreeMap<String, String>,
) -> Option<BTreeMap<String, String>> {
    let per_dimension: Vec<(String, Vec<String>)> = dimensions
        .iter()
        .map(|dimension| {
            (
                dimension.kind.clone(),
                picked.get(&dimension.kind).cloned().into_iter().collect(),
            )
        })
        .collect();

    generate_combinations(&per_dimension).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VariantOption;

    fn dims(input: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
        input
            .iter()
            .map(|(kind, labels)| {
                (
                    kind.to_string(),
                    labels.iter().map(|l| l.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn expands_in_first_in_first_expanded_order() {
        let combos = generate_combinations(&dims(&[("D1", &["a", "b"]), ("D2", &["x"])]));

        assert_eq!(combos.len(), 2);
        assert_eq!(combos[0]["D1"], "a");
        assert_eq!(combos[0]["D2"], "x");
        assert_eq!(combos[1]["D1"], "b");
        assert_eq!(combos[1]["D2"], "x");
    }

    #[test]
    fn two_by_two_keeps_the_running_list_order() {
        let combos = generate_combinations(&dims(&[("D1", &["a", "b"]), ("D2", &["x", "y"])]));

        let flat: Vec<(String, String)> = combos
            .iter()
            .map(|c| (c["D1"].clone(), c["D2"].clone()))
            .collect();
        assert_eq!(
            flat,
            vec![
                ("a".to_string(), "x".to_string()),
                ("a".to_string(), "y".to_string()),
                ("b".to_string(), "x".to_string()),
                ("b".to_string(), "y".to_string()),
            ]
        );
    }

    #[test]
    fn empty_dimension_yields_the_incomplete_sentinel() {
        let combos = generate_combinations(&dims(&[("D1", &["a"]), ("D2", &[])]));
        assert!(combos.is_empty());
    }

    #[test]
    fn no_dimensions_yields_nothing() {
        assert!(generate_combinations(&[]).is_empty());
    }

    #[test]
    fn complete_selection_requires_every_dimension() {
        let dimensions = vec![
            VariantDimension {
                kind: "Size".to_string(),
                options: vec![
                    VariantOption::Label("S".to_string()),
                    VariantOption::Label("M".to_string()),
                ],
            },
            VariantDimension {
                kind: "Color".to_string(),
                options: vec![VariantOption::Label("Red".to_string())],
            },
        ];

        let full = BTreeMap::from([
            ("Size".to_string(), "M".to_string()),
            ("Color".to_string(), "Red".to_string()),
        ]);
        let selection = complete_selection(&dimensions, &full).unwrap();
        assert_eq!(selection["Size"], "M");
        assert_eq!(selection["Color"], "Red");

        let partial = BTreeMap::from([("Size".to_string(), "M".to_string())]);
        assert!(complete_selection(&dimensions, &partial).is_none());
    }
}
