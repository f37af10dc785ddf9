//! Testing utilities for the etch workspace
//!
//! Shared fixtures: a reference catalog of common engineering alloys and
//! laboratory etchants, plus small builders.

#![allow(missing_docs)]

use etch_catalog::{Catalog, CatalogDocument, Etchant, Material, MaterialId, ProductLink};

pub fn material(id: &str, name: &str, category: &str) -> Material {
    Material::new(id, name, category)
}

pub fn etchant(id: &str, name: &str) -> Etchant {
    Etchant::new(id, name)
}

pub fn reference_materials() -> Vec<Material> {
    vec![
        material("1018", "1018 Steel", "Carbon Steel")
            .with_hardness_category("soft")
            .with_common_etchants(["2% Nital", "Picral"])
            .with_alternative_names(["AISI 1018"])
            .with_tags(["structural", "low carbon"])
            .with_notes("Ferrite-pearlite. Final polish with colloidal silica."),
        material("4340", "4340 Steel", "Low Alloy Steel")
            .with_hardness_category("hard")
            .with_common_etchants(["5% Nital"]),
        material("304", "304 Stainless Steel", "Stainless Steel")
            .with_hardness_category("medium")
            .with_common_etchants(["Oxalic Acid", "Glyceregia"])
            .with_alternative_names(["18-8", "UNS S30400"])
            .with_tags(["austenitic"]),
        material("6061", "6061 Aluminum", "Aluminum Alloys")
            .with_hardness_category("soft")
            .with_common_etchants(["Keller's Reagent"])
            .with_notes("Soft, smears easily; diamond polish then colloidal silica."),
        material("ti64", "Ti-6Al-4V", "Titanium Alloys")
            .with_hardness_category("hard")
            .with_common_etchants(["Kroll's Reagent"]),
        material("cast-ti", "Cast Titanium", "Titanium Alloys"),
        material("c360", "C360 Brass", "Copper Alloys").with_hardness_category("soft"),
        material("718", "Inconel 718", "Superalloys").with_hardness_category("very-hard"),
        material("gray-iron", "Gray Cast Iron", "Cast Iron")
            .with_hardness_category("medium")
            .with_common_etchants(["2% Nital"]),
        material("d2", "D2 Tool Steel", "Tool Steel")
            .with_hardness_category("very-hard")
            .with_common_etchants(["5% Nital", "Vilella's Reagent"]),
        material("az31", "AZ31 Magnesium", "Magnesium Alloys"),
    ]
}

pub fn reference_etchants() -> Vec<Etchant> {
    vec![
        etchant("nital-2", "2% Nital")
            .with_compatible(["carbon-steel", "cast-iron", "tool-steel"])
            .with_incompatible(["stainless-steel", "aluminum"])
            .with_reveals("Ferrite grain boundaries, pearlite")
            .with_typical_results("Darkened pearlite, outlined ferrite grains")
            .featured(true)
            .product_available(true),
        etchant("nital-5", "5% Nital")
            .with_compatible(["carbon-steel", "tool-steel"])
            .with_incompatible(["stainless-steel"])
            .with_reveals("Martensite, tempered martensite")
            .product_available(true),
        etchant("picral", "Picral")
            .with_compatible(["carbon-steel", "cast-iron"])
            .with_reveals("Carbides, pearlite, bainite"),
        etchant("keller", "Keller's Reagent")
            .with_compatible(["aluminum"])
            .with_incompatible(["stainless-steel", "carbon-steel"])
            .with_reveals("Grain structure, intermetallic phases")
            .featured(true)
            .product_available(true),
        etchant("kroll", "Kroll's Reagent")
            .with_compatible(["titanium"])
            .with_reveals("Alpha-beta phase structure")
            .with_related_materials(["ti64"])
            .featured(true),
        etchant("oxalic", "Oxalic Acid (electrolytic)")
            .with_compatible(["stainless-steel"])
            .with_reveals("Carbides, grain boundaries, sigma phase")
            .with_related_materials(["304"]),
        etchant("glyceregia", "Glyceregia")
            .with_compatible(["stainless-steel", "nickel-alloys"])
            .with_reveals("Grain structure, twin boundaries"),
        etchant("klemm-1", "Klemm's I")
            .with_compatible(["carbon-steel", "copper-brass"])
            .with_reveals("Ferrite coloration, phosphorus segregation"),
        etchant("ammonium-persulfate", "Ammonium Persulfate")
            .with_compatible(["copper-brass"])
            .with_reveals("Grain boundaries, twin boundaries")
            .product_available(true),
        etchant("vilella", "Vilella's Reagent")
            .with_compatible(["tool-steel", "stainless-steel"])
            .with_reveals("Carbides, martensite, prior austenite grain boundaries")
            .with_related_materials(["d2"]),
        etchant("marble", "Marble's Reagent")
            .with_compatible(["nickel-alloys", "stainless-steel"])
            .with_incompatible(["aluminum"])
            .with_reveals("Grain structure, gamma prime precipitates"),
    ]
}

pub fn reference_products() -> Vec<ProductLink> {
    vec![
        ProductLink::new("diamond", "Diamond Suspension", ["diamond"]),
        ProductLink::new(
            "colloidal-silica",
            "Colloidal Silica",
            ["colloidal silica", "final polish"],
        ),
        ProductLink::new("vibratory", "Vibratory Polisher", ["smear", "austenitic"]),
    ]
}

pub fn reference_document() -> CatalogDocument {
    CatalogDocument {
        materials: reference_materials(),
        etchants: reference_etchants(),
        products: reference_products(),
    }
}

pub fn reference_catalog() -> Catalog {
    Catalog::from_document(reference_document()).expect("reference catalog ids are unique")
}

/// Look up a reference material by id, panicking if absent
pub fn reference_material(id: &str) -> Material {
    reference_materials()
        .into_iter()
        .find(|m| m.id == MaterialId::new(id))
        .unwrap_or_else(|| panic!("no reference material '{id}'"))
}
