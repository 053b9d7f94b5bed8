/// Samples a piecewise-linear curve through `stops` (`(input, output)` pairs sorted by input).
///
/// Inputs before the first stop hold the first output; inputs after the last stop hold the last
/// output. An empty curve yields `0`.
pub fn interpolate(input: f32, stops: &[(f32, f32)]) -> f32 {
    debug_assert!(
        stops.windows(2).all(|w| w[0].0 <= w[1].0),
        "interpolate: stops must be sorted by input"
    );
    let Some(&(_, first)) = stops.first() else {
        return 0.0;
    };

    let idx = stops.partition_point(|&(at, _)| at <= input);
    if idx == 0 {
        return first;
    }
    if idx >= stops.len() {
        return stops[stops.len() - 1].1;
    }

    let (a_at, a) = stops[idx - 1];
    let (b_at, b) = stops[idx];
    let span = b_at - a_at;
    if span <= 0.0 {
        return a;
    }
    let t = (input - a_at) / span;
    lerp(a, b, t)
}

pub(crate) fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
