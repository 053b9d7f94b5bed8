// Example: the same seed under each interpolation policy.
use scatter::{CharacterSeed, InterpolationPolicy};

fn main() {
    let seed = CharacterSeed::new(120.0, -80.0, 45.0);
    let policies = [
        InterpolationPolicy::linear_converge_fast(2.0),
        InterpolationPolicy::WindowedPeak,
        InterpolationPolicy::ConvergeFromStart,
    ];

    for policy in policies {
        println!("{policy} (settles at p={:.2})", policy.settle_progress().get());
        for step in 0..=10 {
            let p = step as f32 / 10.0;
            let t = policy.map(p, seed);
            println!(
                "  p={p:.1} x={:>8.2} y={:>8.2} rot={:>7.2} opacity={:.2}",
                t.translate_x, t.translate_y, t.rotate_deg, t.opacity
            );
        }
    }
}
