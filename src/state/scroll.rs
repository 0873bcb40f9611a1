// Sub-pixel scroll accumulation: whole ticks go out, the fraction stays.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollAccumulator {
    remainder: f64,
}

impl ScrollAccumulator {
    /// Adds a scaled vertical delta; returns the whole ticks to send, if any.
    pub fn push(&mut self, delta: f64) -> Option<i32> {
        if !delta.is_finite() {
            return None;
        }
        self.remainder += delta;
        let whole = self.remainder.round();
        if whole == 0.0 {
            return None;
        }
        self.remainder -= whole;
        Some(whole as i32)
    }

    pub fn remainder(&self) -> f64 {
        self.remainder
    }

    pub fn reset(&mut self) {
        self.remainder = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fractions_carry_over() {
        let mut acc = ScrollAccumulator::default();
        assert_eq!(acc.push(0.3), None);
        assert_eq!(acc.push(0.3), Some(1));
        assert!((acc.remainder() + 0.4).abs() < 1e-9);
        assert_eq!(acc.push(-0.2), Some(-1));
        assert!((acc.remainder() - 0.4).abs() < 1e-9);
        assert_eq!(acc.push(-0.5), None);
        assert!((acc.remainder() + 0.1).abs() < 1e-9);
    }

    #[test]
    fn large_delta_goes_out_whole() {
        let mut acc = ScrollAccumulator::default();
        assert_eq!(acc.push(-20.0), Some(-20));
        assert_eq!(acc.remainder(), 0.0);
    }

    #[test]
    fn reset_drops_fraction() {
        let mut acc = ScrollAccumulator::default();
        acc.push(0.4);
        acc.reset();
        assert_eq!(acc.push(0.4), None);
        assert!((acc.remainder() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn non_finite_delta_is_ignored() {
        let mut acc = ScrollAccumulator::default();
        acc.push(0.25);
        assert_eq!(acc.push(f64::NAN), None);
        assert_eq!(acc.push(f64::INFINITY), None);
        assert!((acc.remainder() - 0.25).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn sent_ticks_track_real_input(deltas in prop::collection::vec(-40.0f64..40.0, 0..200)) {
            let mut acc = ScrollAccumulator::default();
            let mut sent: i64 = 0;
            for d in &deltas {
                if let Some(whole) = acc.push(*d) {
                    sent += whole as i64;
                }
                prop_assert!(acc.remainder().abs() <= 0.5 + 1e-9);
            }
            let total: f64 = deltas.iter().sum();
            prop_assert!((sent as f64 - total.round()).abs() <= 1.0);
            prop_assert!((sent as f64 + acc.remainder() - total).abs() < 1e-6);
        }
    }
}
