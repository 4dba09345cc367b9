use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Small PRNG seeded from `Math.random` mixed with the current time.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn browser_rng() -> SmallRng {
    let random = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    let now = js_sys::Date::now() as u64;
    SmallRng::seed_from_u64(random ^ now.rotate_left(21))
}
