use knowyourmsp::reference::{normalize, ReferenceTables};

#[test]
fn region_lookup_is_case_and_whitespace_insensitive() {
    let tables = ReferenceTables::load().expect("embedded tables parse");

    for name in tables.region_names() {
        let exact = tables.region(name).expect("exact name resolves").clone();

        let shouty = name.to_uppercase();
        let squashed: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        let padded = format!("  {}  ", name.to_lowercase());

        for variant in [shouty, squashed, padded] {
            let found = tables.region(&variant);
            assert_eq!(
                found,
                Some(&exact),
                "variant '{}' should resolve to the same record as '{}'",
                variant,
                name
            );
        }
    }
}

#[test]
fn region_count_and_ids() {
    let tables = ReferenceTables::load().unwrap();
    assert_eq!(tables.region_names().len(), 8, "Scotland has 8 regions");

    let highlands = tables.region("Highlands and Islands").unwrap();
    assert_eq!(highlands.region_id, 3);
    assert!(highlands.active_until.is_none());
}

#[test]
fn unknown_names_do_not_resolve() {
    let tables = ReferenceTables::load().unwrap();
    assert!(tables.region("Yorkshire").is_none());
    assert!(tables.constituency("Narnia").is_none());
    assert!(tables.ambiguous_constituency("Narnia").is_none());
}

#[test]
fn constituency_lookup_matches_exactly_after_normalization() {
    let tables = ReferenceTables::load().unwrap();

    let east = tables.constituency("dundee city east").unwrap();
    assert_eq!(east.name, "Dundee City East");

    // Punctuation survives normalization, so the canonical comma form is required.
    assert!(tables.constituency("Caithness, Sutherland and Ross").is_some());
    assert!(
        tables.constituency("Dundee").is_none(),
        "ambiguous names are not direct matches"
    );
}

#[test]
fn ambiguous_dundee_lists_both_seats() {
    let tables = ReferenceTables::load().unwrap();

    let entry = tables.ambiguous_constituency("DUNDEE").unwrap();
    assert_eq!(entry.name, "Dundee");
    assert_eq!(
        entry.matches,
        vec!["Dundee City East".to_string(), "Dundee City West".to_string()]
    );

    // Every candidate is itself a resolvable constituency.
    for candidate in &entry.matches {
        assert!(
            tables.constituency(candidate).is_some(),
            "candidate '{}' should resolve directly",
            candidate
        );
    }
}

#[test]
fn normalize_lowers_and_strips_whitespace() {
    assert_eq!(normalize("Highlands and Islands"), "highlandsandislands");
    assert_eq!(normalize("  Mid Scotland\tand Fife "), "midscotlandandfife");
    assert_eq!(normalize("Ayr"), "ayr");
}
