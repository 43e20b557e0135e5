pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = 887272;

/// Rounds `tick` to the closest multiple of `tick_spacing`, ties toward
/// positive infinity. A result just past `[MIN_TICK, MAX_TICK]` is moved back
/// in by one spacing.
///
/// Only meaningful for valid pool ticks, i.e. `tick` in `[MIN_TICK, MAX_TICK]`
/// and `tick_spacing` in `1..=MAX_TICK`. The result then lies in the same
/// bounds.
pub fn nearest_usable_tick(tick: i32, tick_spacing: i32) -> i32 {
    debug_assert!(tick_spacing > 0, "tick spacing must be positive");

    let tick = i64::from(tick);
    let spacing = i64::from(tick_spacing);

    let quotient = tick.div_euclid(spacing);
    let remainder = tick.rem_euclid(spacing);
    let rounded = (if remainder * 2 >= spacing { quotient + 1 } else { quotient }) * spacing;

    let usable = if rounded < i64::from(MIN_TICK) {
        rounded + spacing
    } else if rounded > i64::from(MAX_TICK) {
        rounded - spacing
    } else {
        rounded
    };

    usable as i32
}

#[inline]
pub fn is_usable_tick(tick: i32, tick_spacing: i32) -> bool {
    tick % tick_spacing == 0
}
