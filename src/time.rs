//! Frame timing for the twinkle animation
//!
//! Elapsed seconds since app start, with the same signature on native and
//! web.

/// Twinkle cycle length in seconds. Per-star delays are spread across one
/// cycle so the field never pulses in unison.
pub const TWINKLE_PERIOD: f64 = 2.0;

#[cfg(target_arch = "wasm32")]
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_seconds() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Marker brightness in `[0.3, 1.0]` for a star with the given twinkle
/// offset at time `now`.
pub fn twinkle_brightness(now: f64, delay: f32) -> f32 {
    let phase = (now + f64::from(delay)) / TWINKLE_PERIOD * std::f64::consts::TAU;
    let wave = 0.5 + 0.5 * phase.sin();
    (0.3 + 0.7 * wave) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_stays_in_range() {
        for i in 0..400 {
            let now = i as f64 * 0.173;
            let delay = (i % 20) as f32 * 0.1;
            let b = twinkle_brightness(now, delay);
            assert!((0.3..=1.0).contains(&b), "brightness {b} out of range");
        }
    }

    #[test]
    fn delays_desynchronize_stars() {
        // Half a period apart puts two stars in opposite phase.
        let a = twinkle_brightness(0.5, 0.0);
        let b = twinkle_brightness(0.5, (TWINKLE_PERIOD / 2.0) as f32);
        assert!((a - b).abs() > 0.5);
    }
}
