use worldgen_core::{
    Env, HexLoc, PcgDice, Scale, SectorOracle, StarDensity, StellarDetail, StellarOracle,
    Subsector, SubsectorIndex, TradeCode, TravelZone, Variant, World, WorldGenerator,
    WorldRequest, header,
};

/// Reference data for the one subsector these tests care about.
struct Marches;

impl SectorOracle for Marches {
    fn subsector(&self, sector: &str, index: SubsectorIndex) -> Option<Subsector> {
        match (sector, index) {
            ("Spinward Marches", SubsectorIndex::C) => Some(Subsector::new("Regina")),
            ("Spinward Marches", SubsectorIndex::A) => Some(Subsector::new("Cronor")),
            _ => None,
        }
    }

    fn abbreviation(&self, sector: &str) -> Option<String> {
        (sector == "Spinward Marches").then(|| "Spin".to_owned())
    }
}

struct Stellar;

impl StellarOracle for Stellar {
    fn stellar_detail(&self, star: &str) -> Option<StellarDetail> {
        // Anything brighter than the main sequence pushes the inner orbits out.
        if star.contains(" I") {
            Some(StellarDetail::new(8, 6))
        } else {
            Some(StellarDetail::new(3, 0))
        }
    }
}

fn regina(variant: Variant) -> WorldRequest {
    WorldRequest::new(variant, "Regina", "1910", "Spinward Marches")
}

/// The same seed must always produce the same Basic listing line.
#[test]
fn basic_regina_is_reproducible() {
    let env = Env::with_all(&Marches, &Stellar).into_world_env();
    let generator = WorldGenerator::new(env);

    let lines: Vec<String> = (0..3)
        .map(|_| {
            generator
                .generate(&mut PcgDice::new(1910), &regina(Variant::Basic))
                .expect("1910 is a valid sector hex")
                .to_tab_line()
        })
        .collect();

    assert_eq!(lines[0], lines[1]);
    assert_eq!(lines[1], lines[2]);

    let fields: Vec<&str> = lines[0].split('\t').collect();
    assert_eq!(fields.len(), 8);
    assert_eq!(&fields[..4], ["Spin", "C", "1910", "Regina"]);
    assert_eq!(header(Variant::Basic).split('\t').count(), fields.len());
}

#[test]
fn different_seeds_differ() {
    let generator = WorldGenerator::default();
    let lines: std::collections::HashSet<String> = (0..20)
        .map(|seed| {
            generator
                .generate(&mut PcgDice::new(seed), &regina(Variant::SecondSurvey))
                .expect("valid request")
                .to_tab_line()
        })
        .collect();
    assert!(lines.len() > 15, "only {} distinct worlds", lines.len());
}

#[test]
fn invalid_hexes_produce_no_world() {
    let generator = WorldGenerator::default();
    for hex in ["", "191", "19100", "0000", "3301", "0141", "ab12"] {
        let request = WorldRequest::new(Variant::Extended, "Nowhere", hex, "Spinward Marches");
        assert!(
            generator.generate(&mut PcgDice::new(1), &request).is_err(),
            "{hex:?} should be rejected"
        );
    }
}

#[test]
fn zhodani_worlds_have_no_nobility() {
    let generator = WorldGenerator::default();
    for seed in 0..300 {
        let request = regina(Variant::SecondSurvey).with_allegiance("Zh");
        let world = generator
            .generate(&mut PcgDice::new(seed), &request)
            .expect("valid request");
        assert_eq!(world.nobility, "");
        assert!(world.uwp.tech <= 14);
        assert!(world.uwp.population == 0 || world.uwp.population >= 4);
    }
}

#[test]
fn imperial_worlds_always_have_a_baron() {
    let generator = WorldGenerator::default();
    for seed in 0..100 {
        let request = regina(Variant::SecondSurvey).with_allegiance("ImDd");
        let world = generator
            .generate(&mut PcgDice::new(seed), &request)
            .expect("valid request");
        assert!(world.nobility.starts_with('B'));
    }
}

#[test]
fn starport_x_means_red_zone() {
    let generator = WorldGenerator::default();
    for variant in [Variant::Extended, Variant::SecondSurvey] {
        for seed in 0..3_000 {
            let world = generator
                .generate(&mut PcgDice::new(seed), &regina(variant))
                .expect("valid request");
            if world.uwp.starport == worldgen_core::Starport::X {
                assert_eq!(world.zone, TravelZone::Red, "seed {seed} {variant}");
            }
        }
    }
}

#[test]
fn survey_orbits_respect_the_stellar_table() {
    let env = Env::with_all(&Marches, &Stellar).into_world_env();
    let generator = WorldGenerator::new(env);
    for seed in 0..500 {
        let world = generator
            .generate(&mut PcgDice::new(seed), &regina(Variant::SecondSurvey))
            .expect("valid request");
        let primary = world.stars.primary().expect("survey worlds have a primary");
        let detail = Stellar
            .stellar_detail(&primary.to_string())
            .expect("table covers every star");
        let orbit = world.orbit.expect("orbit known when the table is");
        assert!(orbit >= detail.min_orbit);
        assert!((1..=8).contains(&world.stars.star_count()));
    }
}

#[test]
fn survey_trade_codes_follow_the_profile() {
    let generator = WorldGenerator::default();
    for seed in 0..500 {
        let world = generator
            .generate(&mut PcgDice::new(seed), &regina(Variant::SecondSurvey))
            .expect("valid request");
        let uwp = world.uwp;
        assert_eq!(world.trade_codes.contains(TradeCode::Hi), uwp.population >= 9);
        assert_eq!(
            world.trade_codes.contains(TradeCode::Lo),
            (1..=3).contains(&uwp.population)
        );
        assert_eq!(
            world.trade_codes.contains(TradeCode::Sa),
            world.mainworld_type == worldgen_core::MainworldType::FarSatellite
        );
    }
}

/// A generated Extended world is re-read from its listing and extended.
#[test]
fn listing_round_trip_then_extend() {
    let generator = WorldGenerator::default();
    let world = generator
        .generate(&mut PcgDice::new(42), &regina(Variant::Extended))
        .expect("valid request");
    let line = world.to_tab_line();

    let mut reread = World::from_tab_line(&line).expect("own output parses");
    assert_eq!(reread.variant, Variant::Extended);
    assert_eq!(reread.uwp, world.uwp);
    assert_eq!(reread.pbg, world.pbg);
    assert_eq!(reread.trade_codes, world.trade_codes);
    assert_eq!(reread.to_tab_line(), line);

    generator.extend(&mut PcgDice::new(43), &mut reread);
    let extended = reread.to_tab_line();
    assert_eq!(extended.split('\t').count(), 17);
    assert!(extended.starts_with(&line.split('\t').take(6).collect::<Vec<_>>().join("\t")));
}

#[test]
fn sector_density_defaults_to_standard() {
    assert_eq!(StarDensity::default().percentage(), 50);
    let hex = HexLoc::parse("0101", Scale::Sector).expect("valid");
    assert_eq!(hex.index(), Some(SubsectorIndex::A));
}
