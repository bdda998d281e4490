//! Per-item presentation delays used to sequence sibling entrance
//! animations. Pure data: nothing here touches the DOM, so the schedule is
//! testable without a rendering environment.

/// Delay for the `index`-th item: `base + index * step`, saturating.
pub fn delay_ms(base: u32, step: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base.saturating_add(index.saturating_mul(step))
}

/// Inline style fragment applying the stagger as a CSS transition delay.
pub fn transition_delay(base: u32, step: u32, index: usize) -> String {
    format!("transition-delay: {}ms;", delay_ms(base, step, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_is_linear_in_index() {
        assert_eq!(delay_ms(200, 100, 0), 200);
        assert_eq!(delay_ms(200, 100, 3), 500);
    }

    #[test]
    fn delay_is_monotonic_in_index() {
        let delays: Vec<u32> = (0..20).map(|k| delay_ms(300, 50, k)).collect();
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn delay_saturates_instead_of_overflowing() {
        assert_eq!(delay_ms(u32::MAX, 100, 5), u32::MAX);
        assert_eq!(delay_ms(0, u32::MAX, usize::MAX), u32::MAX);
    }

    #[test]
    fn transition_delay_formats_milliseconds() {
        assert_eq!(transition_delay(100, 80, 2), "transition-delay: 260ms;");
    }
}
