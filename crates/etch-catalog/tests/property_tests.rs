use etch_catalog::{Catalog, Material, ValidationError};
use proptest::prelude::*;
use std::collections::HashSet;

fn materials() -> impl Strategy<Value = Vec<Material>> {
    proptest::collection::vec(("[a-e]{1,2}", "[A-Za-z ]{0,16}", "[A-Za-z ]{0,12}"), 0..12).prop_map(
        |rows| {
            rows.into_iter()
                .map(|(id, name, tag)| Material::new(id, name, "Carbon Steel").with_tags([tag]))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn prop_duplicate_ids_rejected_exactly_when_present(materials in materials()) {
        let distinct: HashSet<_> = materials.iter().map(|m| &m.id).collect();
        let unique = distinct.len() == materials.len();
        match Catalog::new(materials.clone(), Vec::new(), Vec::new()) {
            Ok(catalog) => {
                prop_assert!(unique);
                prop_assert_eq!(catalog.materials(), materials.as_slice());
                for m in &materials {
                    prop_assert_eq!(catalog.material(&m.id), Some(m));
                }
            }
            Err(err) => {
                prop_assert!(!unique);
                let is_duplicate = matches!(err, ValidationError::DuplicateMaterialId(_));
                prop_assert!(is_duplicate);
            }
        }
    }

    #[test]
    fn prop_search_is_ordered_subset(materials in materials(), query in "[a-z ]{0,4}") {
        let mut seen = HashSet::new();
        let materials: Vec<_> = materials
            .into_iter()
            .filter(|m| seen.insert(m.id.clone()))
            .collect();
        let catalog = Catalog::new(materials, Vec::new(), Vec::new()).unwrap();

        let found = catalog.search_materials(&query);
        let positions: Vec<_> = found
            .iter()
            .map(|m| catalog.materials().iter().position(|c| c.id == m.id))
            .collect();

        prop_assert!(positions.iter().all(Option::is_some));
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        if query.trim().is_empty() {
            prop_assert_eq!(found.len(), catalog.material_count());
        }
    }
}
