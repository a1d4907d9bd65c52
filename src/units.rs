use derive_more::{Add, AddAssign, Display, From, Into, Sum};

/// A whole number of device pixels. All canvas dimensions and line offsets
/// produced by the layout engine are expressed in [Px].
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Add,
    AddAssign,
    Sum,
    Display,
    From,
    Into,
)]
#[display("{_0}px")]
pub struct Px(pub u32);

impl Px {
    pub const ZERO: Px = Px(0);

    /// Round a fractional measurement up to the next whole pixel. Negative and
    /// non-finite measurements collapse to zero.
    pub fn ceil(value: f32) -> Px {
        if value.is_finite() && value > 0.0 {
            Px(value.ceil() as u32)
        } else {
            Px::ZERO
        }
    }

    /// Converts a wire-level integer where `0` means "unconstrained" into an
    /// optional constraint, rejecting negative values
    pub fn constraint(name: &'static str, value: i32) -> Result<Option<Px>, crate::TextBitmapError> {
        match value {
            v if v < 0 => Err(crate::TextBitmapError::InvalidParameter {
                name,
                value: v as i64,
            }),
            0 => Ok(None),
            v => Ok(Some(Px(v as u32))),
        }
    }

    /// Half of this quantity, rounding down
    pub fn half(self) -> Px {
        Px(self.0 / 2)
    }

    /// This quantity repeated `count` times
    pub fn times(self, count: usize) -> Px {
        Px(self
            .0
            .saturating_mul(u32::try_from(count).unwrap_or(u32::MAX)))
    }
}

impl From<Px> for f32 {
    fn from(px: Px) -> f32 {
        px.0 as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_rounds_up_fractional_widths() {
        assert_eq!(Px::ceil(10.01), Px(11));
        assert_eq!(Px::ceil(10.0), Px(10));
        assert_eq!(Px::ceil(-3.0), Px::ZERO);
        assert_eq!(Px::ceil(f32::NAN), Px::ZERO);
    }

    #[test]
    fn zero_means_unconstrained() {
        assert_eq!(Px::constraint("max_width", 0).unwrap(), None);
        assert_eq!(Px::constraint("max_width", 64).unwrap(), Some(Px(64)));
        assert!(matches!(
            Px::constraint("max_height", -1),
            Err(crate::TextBitmapError::InvalidParameter {
                name: "max_height",
                value: -1
            })
        ));
    }

    #[test]
    fn displays_with_unit() {
        assert_eq!(Px(12).to_string(), "12px");
    }
}
