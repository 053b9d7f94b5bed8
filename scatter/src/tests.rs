use crate::*;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use rand::SeedableRng;
use rand::rngs::StdRng;

const POLICIES: [InterpolationPolicy; 3] = [
    InterpolationPolicy::LinearConvergeFast { speed_factor: 2.0 },
    InterpolationPolicy::WindowedPeak,
    InterpolationPolicy::ConvergeFromStart,
];

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-5
}

fn sample_seeds(n: usize) -> Vec<CharacterSeed> {
    let mut rng = StdRng::seed_from_u64(7);
    SeedRange::default().generate(n, &mut rng)
}

#[test]
fn hi_there_linear_converge_fast_scenario() {
    let options = ScatterOptions::new("Hi there").with_speed_factor(2.0);
    let mut s =
        ScatterText::with_seeds(options, vec![CharacterSeed::new(100.0, -50.0, 30.0)]).unwrap();
    assert_eq!(s.len(), 8);

    assert_eq!(
        s.transform_at(0).unwrap(),
        CharacterTransform {
            translate_x: 100.0,
            translate_y: -50.0,
            rotate_deg: 30.0,
            opacity: 0.0,
        }
    );

    s.set_progress(0.25);
    assert_eq!(
        s.transform_at(0).unwrap(),
        CharacterTransform {
            translate_x: 50.0,
            translate_y: -25.0,
            rotate_deg: 15.0,
            opacity: 0.5,
        }
    );

    s.set_progress(0.5);
    assert!(s.transform_at(0).unwrap().is_settled());
    assert!(s.is_settled());
}

#[test]
fn anchored_policies_start_at_full_seed_offset() {
    for seed in sample_seeds(32) {
        for policy in [
            InterpolationPolicy::linear_converge_fast(2.0),
            InterpolationPolicy::ConvergeFromStart,
        ] {
            let t = policy.map(0.0, seed);
            assert_eq!(t.translate_x, seed.dx);
            assert_eq!(t.translate_y, seed.dy);
            assert_eq!(t.rotate_deg, seed.drotate);
            assert_eq!(t.opacity, 0.0);
        }
    }
}

#[test]
fn every_policy_is_settled_at_full_progress() {
    for seed in sample_seeds(32) {
        for policy in POLICIES {
            assert!(policy.map(1.0, seed).is_settled(), "{policy} seed={seed:?}");
        }
    }
}

#[test]
fn map_is_pure() {
    let seed = CharacterSeed::new(-123.5, 77.25, 91.0);
    for policy in POLICIES {
        for i in 0..=20 {
            let p = i as f32 / 20.0;
            let a = policy.map(p, seed);
            let b = policy.map(p, seed);
            assert_eq!(a.translate_x.to_bits(), b.translate_x.to_bits());
            assert_eq!(a.translate_y.to_bits(), b.translate_y.to_bits());
            assert_eq!(a.rotate_deg.to_bits(), b.rotate_deg.to_bits());
            assert_eq!(a.opacity.to_bits(), b.opacity.to_bits());
        }
    }
}

#[test]
fn linear_converge_fast_opacity_is_monotonic() {
    let policy = InterpolationPolicy::linear_converge_fast(2.0);
    let seed = CharacterSeed::new(10.0, 10.0, 10.0);
    let mut last = 0.0f32;
    for i in 0..=1000 {
        let p = i as f32 / 1000.0;
        let opacity = policy.map(p, seed).opacity;
        assert!(opacity >= last, "opacity dropped at p={p}");
        if p >= 0.5 {
            assert_eq!(opacity, 1.0);
        }
        last = opacity;
    }
}

#[test]
fn progress_is_clamped_before_mapping() {
    let seed = CharacterSeed::new(100.0, -50.0, 30.0);
    for policy in POLICIES {
        assert_eq!(policy.map(1.5, seed), policy.map(1.0, seed));
        assert_eq!(policy.map(-0.2, seed), policy.map(0.0, seed));
        assert_eq!(policy.map(f32::NAN, seed), policy.map(0.0, seed));
    }
    assert_eq!(ScrollProgress::new(7.0), ScrollProgress::END);
    assert_eq!(ScrollProgress::new(-1.0), ScrollProgress::START);
}

#[test]
fn windowed_peak_passes_through_the_seed() {
    let policy = InterpolationPolicy::WindowedPeak;
    let seed = CharacterSeed::new(100.0, -40.0, 20.0);

    assert!(policy.map(0.0, seed).is_settled());
    assert_eq!(policy.map(0.125, seed).translate_x, 50.0);
    let peak = policy.map(0.25, seed);
    assert_eq!(
        (peak.translate_x, peak.translate_y, peak.rotate_deg),
        (100.0, -40.0, 20.0)
    );
    assert_eq!(policy.map(0.375, seed).translate_y, -20.0);
    assert!(policy.map(0.5, seed).is_settled());
    assert!(policy.map(0.75, seed).is_settled());

    // Opacity stops are both 1: flat everywhere.
    for i in 0..=10 {
        assert_eq!(policy.map(i as f32 / 10.0, seed).opacity, 1.0);
    }
}

#[test]
fn converge_from_start_ramps_opacity_between_stops() {
    let policy = InterpolationPolicy::ConvergeFromStart;
    let seed = CharacterSeed::new(100.0, 0.0, -60.0);

    let quarter = policy.map(0.25, seed);
    assert_eq!(quarter.translate_x, 50.0);
    assert_eq!(quarter.rotate_deg, -30.0);

    assert_eq!(policy.map(0.05, seed).opacity, 0.0);
    assert_eq!(policy.map(0.1, seed).opacity, 0.0);
    assert!(approx(policy.map(0.3, seed).opacity, 0.5));
    assert_eq!(policy.map(0.5, seed).opacity, 1.0);
    assert!(policy.map(0.5, seed).is_settled());
}

#[test]
fn settle_progress_matches_policy() {
    assert!(approx(
        InterpolationPolicy::linear_converge_fast(2.0)
            .settle_progress()
            .get(),
        0.5
    ));
    assert!(approx(
        InterpolationPolicy::linear_converge_fast(4.0)
            .settle_progress()
            .get(),
        0.25
    ));
    assert_eq!(InterpolationPolicy::WindowedPeak.settle_progress().get(), 0.5);
    assert_eq!(
        InterpolationPolicy::ConvergeFromStart.settle_progress().get(),
        0.5
    );

    let seed = CharacterSeed::new(33.0, -12.0, 170.0);
    for policy in POLICIES {
        assert!(policy.map(policy.settle_progress(), seed).is_settled());
    }
}

#[test]
fn seed_generation_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let range = SeedRange::default();
    let seeds = range.generate(5, &mut rng);
    assert_eq!(seeds.len(), 5);
    for seed in &seeds {
        assert!((-200.0..=200.0).contains(&seed.dx));
        assert!((-200.0..=200.0).contains(&seed.dy));
        assert!((-180.0..=180.0).contains(&seed.drotate));
        assert!(range.contains(seed));
    }

    let mut again = StdRng::seed_from_u64(42);
    assert_eq!(range.generate(5, &mut again), seeds);

    assert!(range.generate(0, &mut rng).is_empty());
}

#[test]
fn zero_seed_range_yields_zero_seeds() {
    let mut rng = StdRng::seed_from_u64(1);
    let seeds = SeedRange::new(0.0, 0.0).generate(3, &mut rng);
    assert!(seeds.iter().all(|s| *s == CharacterSeed::ZERO));
}

#[test]
fn seed_range_rejects_overflowing_spans() {
    let overflowing = [
        (f32::MAX, 180.0),
        (200.0, f32::MAX / 2.0),
        (f32::INFINITY, 0.0),
        (f32::NAN, 0.0),
    ];
    for (translate, rotate) in overflowing {
        let range = SeedRange::new(translate, rotate);
        assert!(matches!(range.validate(), Err(Error::InvalidSeedRange { .. })));

        let mut rng = StdRng::seed_from_u64(9);
        let options = ScatterOptions::new("overflow").with_seed_range(range);
        assert!(matches!(
            ScatterText::with_rng(options, &mut rng),
            Err(Error::InvalidSeedRange { .. })
        ));
    }

    let widest = SeedRange::new(SeedRange::MAX_BOUND, SeedRange::MAX_BOUND);
    assert!(widest.validate().is_ok());
    let mut rng = StdRng::seed_from_u64(9);
    assert!(widest.generate(4, &mut rng).iter().all(|s| widest.contains(s)));
}

#[test]
fn engine_seeds_once_per_mount() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut s = ScatterText::with_rng(ScatterOptions::new("scatter"), &mut rng).unwrap();
    let before = s.seeds().to_vec();
    assert_eq!(before.len(), 7);

    for i in 0..=10 {
        s.set_progress(i as f32 / 10.0);
        let _ = s.frame();
    }
    s.set_policy(InterpolationPolicy::ConvergeFromStart).unwrap();
    assert_eq!(s.seeds(), &before[..]);
}

#[test]
fn missing_seeds_degrade_to_zero_offsets() {
    let options = ScatterOptions::new("abcd").with_policy(InterpolationPolicy::ConvergeFromStart);
    let s = ScatterText::with_seeds(options, vec![CharacterSeed::new(5.0, 5.0, 5.0)]).unwrap();
    assert_eq!(s.seeds().len(), 1);
    assert_eq!(s.seed_at(3), CharacterSeed::ZERO);

    let frame = s.frame();
    assert_eq!(frame.len(), 4);
    for f in &frame[1..] {
        assert_eq!(f.transform.translate_x, 0.0);
        assert_eq!(f.transform.translate_y, 0.0);
        assert_eq!(f.transform.rotate_deg, 0.0);
    }
    assert_eq!(frame[0].transform.translate_x, 5.0);
    assert_eq!(s.transform_at(4), None);
}

#[test]
fn extra_seeds_are_dropped() {
    let seeds = vec![CharacterSeed::ZERO; 5];
    let s = ScatterText::with_seeds(ScatterOptions::new("ab"), seeds).unwrap();
    assert_eq!(s.seeds().len(), 2);
}

#[test]
fn empty_text_renders_nothing() {
    let mut s = ScatterText::with_seeds(ScatterOptions::new(""), Vec::new()).unwrap();
    s.set_progress(0.3);
    assert!(s.is_empty());
    assert!(s.frame().is_empty());
    assert!(s.is_settled());

    let mut visited = 0;
    s.for_each_transform(|_, _, _| visited += 1);
    assert_eq!(visited, 0);
}

#[test]
fn spaces_stay_plain_in_data_and_render_as_nbsp() {
    let glyphs = segment("Hi there");
    assert_eq!(glyphs.len(), 8);
    assert_eq!(glyphs[2], Glyph(' '));
    assert!(glyphs[2].is_space());
    assert_eq!(glyphs[2].display(), NBSP);
    assert_eq!(glyphs[0].display(), 'H');

    let s = ScatterText::with_seeds(ScatterOptions::new("a b"), Vec::new()).unwrap();
    assert_eq!(s.frame()[1].glyph.char(), ' ');
}

#[test]
fn non_ascii_text_segments_per_char() {
    assert_eq!(segment("你好").len(), 2);
    assert_eq!(segment("Здравствуйте").len(), 12);
}

#[test]
fn frame_matches_per_index_transforms() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut s = ScatterText::with_rng(ScatterOptions::new("frame"), &mut rng).unwrap();
    s.set_progress(0.2);

    let mut buf = Vec::new();
    s.frame_into(&mut buf);
    assert_eq!(buf.len(), 5);
    for f in &buf {
        assert_eq!(Some(f.transform), s.transform_at(f.index));
        assert_eq!(f.glyph, s.glyphs()[f.index]);
    }

    s.frame_into(&mut buf);
    assert_eq!(buf.len(), 5);
}

#[test]
fn on_change_fires_on_progress_and_policy_changes() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut s = ScatterText::with_seeds(ScatterOptions::new("ab"), Vec::new()).unwrap();
    let c = Arc::clone(&calls);
    s.set_on_change(Some(move |_: &ScatterText| {
        c.fetch_add(1, Ordering::Relaxed);
    }));

    s.set_progress(0.1);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    // Same (clamped) value: no notification.
    s.set_progress(0.1);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    s.set_progress(2.0);
    s.set_progress(1.0);
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    s.set_policy(InterpolationPolicy::WindowedPeak).unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 3);

    s.batch_update(|s| {
        s.set_progress(0.2);
        s.set_progress(0.3);
        s.set_policy(InterpolationPolicy::ConvergeFromStart).unwrap();
    });
    assert_eq!(calls.load(Ordering::Relaxed), 4);
}

#[test]
fn invalid_configuration_is_rejected() {
    for speed_factor in [0.5, 0.0, -2.0, f32::NAN, f32::INFINITY] {
        let err = ScatterText::with_seeds(
            ScatterOptions::new("x").with_speed_factor(speed_factor),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSpeedFactor(_)));
    }

    let err = ScatterOptions::new("x")
        .with_seed_range(SeedRange::new(-1.0, 10.0))
        .validate()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidSeedRange { .. }));

    let mut s = ScatterText::with_seeds(ScatterOptions::new("x"), Vec::new()).unwrap();
    assert!(s.set_policy(InterpolationPolicy::linear_converge_fast(0.1)).is_err());
    assert_eq!(s.policy(), InterpolationPolicy::default());
}

#[test]
fn unvalidated_speed_factor_behaves_like_one() {
    let seed = CharacterSeed::new(10.0, 0.0, 0.0);
    let slow = InterpolationPolicy::linear_converge_fast(0.25);
    let one = InterpolationPolicy::linear_converge_fast(1.0);
    assert_eq!(slow.map(0.5, seed), one.map(0.5, seed));
    assert!(slow.map(1.0, seed).is_settled());
}

#[test]
fn policy_names_parse() {
    assert_eq!(
        "linear-converge-fast".parse::<InterpolationPolicy>().unwrap(),
        InterpolationPolicy::linear_converge_fast(DEFAULT_SPEED_FACTOR)
    );
    assert_eq!(
        "WINDOWED_PEAK".parse::<InterpolationPolicy>().unwrap(),
        InterpolationPolicy::WindowedPeak
    );
    assert_eq!(
        " converge-from-start ".parse::<InterpolationPolicy>().unwrap(),
        InterpolationPolicy::ConvergeFromStart
    );
    assert_eq!(
        "bounce".parse::<InterpolationPolicy>().unwrap_err(),
        Error::unknown_policy("bounce")
    );
    for policy in POLICIES {
        let parsed: InterpolationPolicy = policy.name().parse().unwrap();
        assert_eq!(parsed.name(), policy.name());
    }
}

#[test]
fn interpolate_holds_outside_stops() {
    let stops = [(0.25, 1.0), (0.75, 3.0)];
    assert_eq!(interpolate(0.0, &stops), 1.0);
    assert_eq!(interpolate(0.5, &stops), 2.0);
    assert_eq!(interpolate(0.9, &stops), 3.0);
    assert_eq!(interpolate(0.5, &[]), 0.0);
    assert_eq!(interpolate(0.5, &[(0.1, 4.0)]), 4.0);
}

#[test]
fn css_transform_string() {
    let t = InterpolationPolicy::default().map(0.25, CharacterSeed::new(100.0, -50.0, 30.0));
    assert_eq!(t.css(), "translate(50px, -25px) rotate(15deg)");
}
