/// Horizontal alignment of each laid-out line within the canvas.
///
/// The calling engine refers to alignments by fixed numeric codes; those only
/// ever appear at the boundary through [Alignment::from_code] and
/// [Alignment::code].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub const LEFT_CODE: i32 = 0x31;
    pub const RIGHT_CODE: i32 = 0x32;
    pub const CENTER_CODE: i32 = 0x33;

    /// Decode an engine alignment code. Anything unrecognized is treated as
    /// [Alignment::Left]
    pub fn from_code(code: i32) -> Alignment {
        match code {
            Self::CENTER_CODE => Alignment::Center,
            Self::RIGHT_CODE => Alignment::Right,
            _ => Alignment::Left,
        }
    }

    /// The engine code for this alignment
    pub fn code(self) -> i32 {
        match self {
            Alignment::Left => Self::LEFT_CODE,
            Alignment::Center => Self::CENTER_CODE,
            Alignment::Right => Self::RIGHT_CODE,
        }
    }
}

impl From<i32> for Alignment {
    fn from(code: i32) -> Self {
        Alignment::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_engine_codes() {
        assert_eq!(Alignment::from_code(0x31), Alignment::Left);
        assert_eq!(Alignment::from_code(0x32), Alignment::Right);
        assert_eq!(Alignment::from_code(0x33), Alignment::Center);
    }

    #[test]
    fn unknown_codes_fall_back_to_left() {
        assert_eq!(Alignment::from_code(0), Alignment::Left);
        assert_eq!(Alignment::from_code(0x34), Alignment::Left);
        assert_eq!(Alignment::from(-7), Alignment::Left);
        assert_eq!(Alignment::default(), Alignment::Left);
    }

    #[test]
    fn codes_survive_a_trip_through_the_boundary() {
        for alignment in [Alignment::Left, Alignment::Center, Alignment::Right] {
            assert_eq!(Alignment::from_code(alignment.code()), alignment);
        }
    }
}
