// Example: minimal usage, sampling one character across the scroll range.
use scatter::{InterpolationPolicy, ScatterOptions, ScatterText};

fn main() {
    let options = ScatterOptions::new("Every word is a step towards creativity.")
        .with_policy(InterpolationPolicy::linear_converge_fast(2.0));
    let mut text = ScatterText::new(options).expect("valid options");

    println!("glyphs={} seed[0]={:?}", text.len(), text.seed_at(0));
    for step in 0..=8 {
        let p = step as f32 / 8.0;
        text.set_progress(p);
        let t = text.transform_at(0).expect("non-empty text");
        println!(
            "p={p:.3} opacity={:.2} transform={} settled={}",
            t.opacity,
            t.css(),
            text.is_settled()
        );
    }
}
