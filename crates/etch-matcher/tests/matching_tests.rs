use etch_catalog::{Etchant, Material};
use etch_matcher::{
    match_etchants, normalize_category, score_etchant, CategoryToken, ColorBand, MatchReason,
    Matcher, MatcherConfig, Purpose, TieBreak,
};
use etch_test_utils::{etchant, material, reference_catalog, reference_material};
use pretty_assertions::assert_eq;

fn ranked(
    material: &Material,
    purpose: Option<Purpose>,
    etchants: &[Etchant],
) -> Vec<(String, u32)> {
    match_etchants(material, purpose, etchants)
        .into_iter()
        .map(|r| (r.etchant.id.to_string(), r.score))
        .collect()
}

fn pairs(expected: &[(&str, u32)]) -> Vec<(String, u32)> {
    expected.iter().map(|(id, s)| ((*id).to_string(), *s)).collect()
}

#[test]
fn test_carbon_steel_reference_ranking() {
    let catalog = reference_catalog();
    let steel = reference_material("1018");

    assert_eq!(
        ranked(&steel, None, catalog.etchants()),
        pairs(&[
            ("nital-2", 215),
            ("picral", 180),
            ("nital-5", 105),
            ("klemm-1", 100),
            ("kroll", 10),
            ("ammonium-persulfate", 5),
        ])
    );
}

#[test]
fn test_carbon_steel_grain_boundaries() {
    let catalog = reference_catalog();
    let steel = reference_material("1018");

    assert_eq!(
        ranked(&steel, Some(Purpose::GrainBoundaries), catalog.etchants()),
        pairs(&[
            ("nital-2", 265),
            ("picral", 180),
            ("nital-5", 105),
            ("klemm-1", 100),
            ("ammonium-persulfate", 55),
            ("oxalic", 50),
            ("glyceregia", 50),
            ("vilella", 50),
            ("marble", 50),
            ("kroll", 10),
        ])
    );
}

#[test]
fn test_stainless_reference_ranking() {
    let catalog = reference_catalog();
    let stainless = reference_material("304");

    let results = match_etchants(&stainless, None, catalog.etchants());
    let ids: Vec<_> = results.iter().map(|r| r.etchant.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["oxalic", "glyceregia", "vilella", "marble", "kroll", "ammonium-persulfate"]
    );

    let top = &results[0];
    assert_eq!(top.score, 250);
    assert_eq!(
        top.reasons,
        vec![MatchReason::Compatible, MatchReason::Recommended, MatchReason::DirectLink]
    );
    assert_eq!(top.percentage(280), 89);
    assert_eq!(top.color_band(280), ColorBand::Strong);
}

#[test]
fn test_titanium_hardness_bias() {
    let catalog = reference_catalog();
    let ti = reference_material("ti64");

    assert_eq!(
        ranked(&ti, None, catalog.etchants()),
        pairs(&[
            ("kroll", 260),
            ("nital-5", 35),
            ("nital-2", 15),
            ("keller", 15),
            ("ammonium-persulfate", 5),
        ])
    );
}

#[test]
fn test_unrecognized_category_only_gets_bonuses() {
    let catalog = reference_catalog();
    let magnesium = reference_material("az31");

    assert_eq!(normalize_category(&magnesium).as_str(), "magnesium alloys");
    assert_eq!(
        ranked(&magnesium, None, catalog.etchants()),
        pairs(&[
            ("nital-2", 15),
            ("keller", 15),
            ("kroll", 10),
            ("nital-5", 5),
            ("ammonium-persulfate", 5),
        ])
    );
}

#[test]
fn test_veto_dominance_example() {
    let stainless = material("304", "304 Stainless Steel", "stainless-steel");
    let keller = etchant("keller", "Keller's Reagent")
        .with_compatible(["aluminum"])
        .with_incompatible(["stainless-steel"])
        .featured(true);

    assert!(match_etchants(&stainless, None, std::slice::from_ref(&keller)).is_empty());
    assert_eq!(score_etchant(&stainless, None, &keller).score, 0);
}

#[test]
fn test_compatibility_scoring() {
    let steel = material("m", "Plain Steel", "Carbon Steel");
    let e = etchant("e", "Etchant").with_compatible(["carbon-steel"]);

    let result = score_etchant(&steel, None, &e);
    assert!(result.score >= 100);
    assert!(result.reasons.contains(&MatchReason::Compatible));
}

#[test]
fn test_purpose_bias_adds_exactly_fifty() {
    let steel = material("4140", "4140 Steel", "Low Alloy Steel");
    let e = etchant("e", "Custom").with_reveals("Tempered martensite");

    let without = score_etchant(&steel, None, &e);
    let with = score_etchant(&steel, Some(Purpose::Martensite), &e);

    assert_eq!(with.score, without.score + 50);
    assert!(with.reasons.iter().any(|r| r.to_string() == "Reveals martensite"));
    assert!(!without.reasons.iter().any(|r| matches!(r, MatchReason::Reveals(_))));
}

#[test]
fn test_hardness_bias_mutual_exclusivity() {
    let strong = etchant("e", "5% Nital");
    let hard = material("h", "Hard", "").with_hardness_category("hard");
    let soft = material("s", "Soft", "").with_hardness_category("soft");

    assert_eq!(score_etchant(&hard, None, &strong).score, 30);
    assert_eq!(score_etchant(&soft, None, &strong).score, 0);
}

#[test]
fn test_ranking_order_150_90_0() {
    let steel = material("m", "1020 Steel", "Carbon Steel").with_common_etchants(["Klemm"]);
    let etchants = vec![
        etchant("e90", "Klemm's I").featured(true),
        etchant("e0", "Keller's").featured(true).with_incompatible(["carbon-steel"]),
        etchant("e150", "Picral")
            .with_compatible(["carbon-steel"])
            .with_reveals("carbides"),
    ];

    assert_eq!(
        ranked(&steel, Some(Purpose::Carbides), &etchants),
        pairs(&[("e150", 150), ("e90", 90)])
    );
}

#[test]
fn test_empty_catalog() {
    let steel = reference_material("1018");
    assert!(match_etchants(&steel, Some(Purpose::Pearlite), &[]).is_empty());
    assert!(match_etchants(&steel, None, &[]).is_empty());
}

#[test]
fn test_cast_titanium_normalizes_to_titanium() {
    let cast = reference_material("cast-ti");
    assert_eq!(normalize_category(&cast).token(), Some(CategoryToken::Titanium));
    assert_eq!(normalize_category(&cast), normalize_category(&cast));

    let catalog = reference_catalog();
    assert_eq!(ranked(&cast, None, catalog.etchants())[0], ("kroll".to_string(), 110));
}

#[test]
fn test_name_tie_break_over_reference_catalog() {
    let catalog = reference_catalog();
    let stainless = reference_material("304");
    let matcher = Matcher::new(MatcherConfig::new().with_tie_break(TieBreak::Name));

    let ids: Vec<_> = matcher
        .rank(&stainless, None, catalog.etchants())
        .iter()
        .map(|r| r.etchant.id.as_str())
        .collect();
    // vilella and marble tie at 100; "Marble's" sorts before "Vilella's"
    assert_eq!(
        ids,
        vec!["oxalic", "glyceregia", "marble", "vilella", "kroll", "ammonium-persulfate"]
    );
}

#[test]
fn test_inputs_are_not_mutated() {
    let catalog = reference_catalog();
    let steel = reference_material("1018");
    let before_material = steel.clone();
    let before_etchants = catalog.etchants().to_vec();

    let _ = match_etchants(&steel, Some(Purpose::Ferrite), catalog.etchants());

    assert_eq!(steel, before_material);
    assert_eq!(catalog.etchants(), before_etchants.as_slice());
}
