/// Easing curves in the "power" family: power1 is quadratic, power2 cubic,
/// power3 quartic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[cfg(test)]
    Linear,
    #[default]
    Power2Out,
    Power3Out,
    Power2InOut,
}

impl Ease {
    /// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            #[cfg(test)]
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Ease; 4] = [Ease::Linear, Ease::Power2Out, Ease::Power3Out, Ease::Power2InOut];

    #[test]
    fn endpoints_are_fixed() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{:?}", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{:?}", ease);
        }
    }

    #[test]
    fn out_curves_lead_linear() {
        assert!(Ease::Power2Out.apply(0.3) > 0.3);
        assert!(Ease::Power3Out.apply(0.3) > Ease::Power2Out.apply(0.3));
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn curves_are_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for ease in ALL {
                prop_assert!(ease.apply(lo) <= ease.apply(hi) + 1e-12);
            }
        }
    }
}
