use {
    crate::*,
    std::{
        iter::repeat,
        num::{NonZeroU32, ParseIntError},
        str::{FromStr, Split},
    },
};

/// Analogous enum to `Direction`, but specifically for parsing character codes.
#[repr(u8)]
enum CharDirection {
    /// Analog to `Direction::North`
    Up,

    /// Analog to `Direction::East`
    Right,

    /// Analog to `Direction::South`
    Down,

    /// Analog to `Direction::West`
    Left,
}

impl From<CharDirection> for Direction {
    fn from(char_direction: CharDirection) -> Self {
        (char_direction as u8).into()
    }
}

#[derive(Debug, PartialEq)]
pub struct InvalidDirectionChar(pub char);

impl TryFrom<char> for CharDirection {
    type Error = InvalidDirectionChar;

    fn try_from(direction_char: char) -> Result<Self, Self::Error> {
        Ok(match direction_char {
            'u' | 'U' => CharDirection::Up,
            'r' | 'R' => CharDirection::Right,
            'd' | 'D' => CharDirection::Down,
            'l' | 'L' => CharDirection::Left,
            _ => Err(InvalidDirectionChar(direction_char))?,
        })
    }
}

/// A single parsed input line: a direction for the head knot and a positive step count, consumed
/// one unit step at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Motion {
    dir: Direction,
    dist: u32,
}

#[derive(Debug, PartialEq)]
pub enum MotionParseError<'s> {
    NoDirToken,
    InvalidDirTokenLength(&'s str),
    FailedToParseDir(InvalidDirectionChar),
    NoDistToken,
    FailedToParseDist(ParseIntError),
    DistTooLarge(u32),
    ExtraTokenFound,
}

impl<'s> TryFrom<&'s str> for Motion {
    type Error = MotionParseError<'s>;

    fn try_from(motion_str: &'s str) -> Result<Self, Self::Error> {
        use MotionParseError as Error;

        let mut token_iter: Split<char> = motion_str.split(' ');

        let dir: Direction = match token_iter.next() {
            None => Err(Error::NoDirToken),
            Some(dir_str) if dir_str.len() == 1_usize => {
                Ok(CharDirection::try_from(dir_str.chars().next().unwrap())
                    .map_err(Error::FailedToParseDir)?
                    .into())
            }
            Some(dir_str) => Err(Error::InvalidDirTokenLength(dir_str)),
        }?;

        // `NonZeroU32` rejects zero counts, and the lack of a sign token rejects negative ones
        let dist: u32 = match token_iter.next() {
            None => Err(Error::NoDistToken),
            Some(dist_str) => NonZeroU32::from_str(dist_str).map_err(Error::FailedToParseDist),
        }?
        .get();

        if dist > i32::MAX as u32 {
            Err(Error::DistTooLarge(dist))
        } else if token_iter.next().is_some() {
            Err(Error::ExtraTokenFound)
        } else {
            Ok(Self { dir, dist })
        }
    }
}

/// The full parsed input, in application order
#[derive(Debug, PartialEq)]
pub struct MotionSequence(Vec<Motion>);

impl MotionSequence {
    /// Flattens the motions into the directions of their individual unit steps
    pub fn unit_steps(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0
            .iter()
            .flat_map(|motion: &Motion| repeat(motion.dir).take(motion.dist as usize))
    }
}

impl<'s> TryFrom<&'s str> for MotionSequence {
    type Error = MotionParseError<'s>;

    fn try_from(motion_sequence_str: &'s str) -> Result<Self, Self::Error> {
        let mut motion_sequence: MotionSequence = MotionSequence(Vec::new());

        // `lines` and not `split('\n')`: input files end in a newline, and that's not a motion
        for motion_str in motion_sequence_str.lines() {
            motion_sequence.0.push(motion_str.try_into()?);
        }

        Ok(motion_sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOTION_SEQUENCE_STR: &str = "\
        R 4\n\
        U 4\n\
        L 3\n\
        D 1\n\
        R 4\n\
        D 1\n\
        L 5\n\
        R 2";

    macro_rules! motion_sequence {
        [$(($dir:ident, $dist:expr),)*] => {
            MotionSequence(vec![
                $( Motion { dir: Direction::$dir, dist: $dist }, )*
            ])
        };
    }

    #[test]
    fn test_motion_sequence_try_from_str() {
        assert_eq!(
            MotionSequence::try_from(MOTION_SEQUENCE_STR),
            Ok(example_motion_sequence())
        );
    }

    #[test]
    fn test_motion_sequence_try_from_str_tolerates_final_newline() {
        assert_eq!(
            MotionSequence::try_from("R 4\nU 4\n"),
            Ok(motion_sequence![(East, 4), (North, 4),])
        );
    }

    #[test]
    fn test_motion_sequence_try_from_empty_str() {
        assert_eq!(MotionSequence::try_from(""), Ok(motion_sequence![]));
    }

    #[test]
    fn test_motion_try_from_str() {
        assert_eq!(
            Motion::try_from("U 13"),
            Ok(Motion {
                dir: Direction::North,
                dist: 13_u32
            })
        );

        // The parser accepts lowercase direction letters
        assert_eq!(
            Motion::try_from("d 2"),
            Ok(Motion {
                dir: Direction::South,
                dist: 2_u32
            })
        );
    }

    #[test]
    fn test_motion_try_from_str_errors() {
        use MotionParseError as Error;

        assert_eq!(
            Motion::try_from("X 4"),
            Err(Error::FailedToParseDir(InvalidDirectionChar('X')))
        );
        assert_eq!(Motion::try_from("UP 4"), Err(Error::InvalidDirTokenLength("UP")));
        assert_eq!(Motion::try_from(""), Err(Error::InvalidDirTokenLength("")));
        assert_eq!(Motion::try_from("R"), Err(Error::NoDistToken));
        assert!(matches!(
            Motion::try_from("R x"),
            Err(Error::FailedToParseDist(_))
        ));
        assert!(matches!(
            Motion::try_from("R 0"),
            Err(Error::FailedToParseDist(_))
        ));
        assert!(matches!(
            Motion::try_from("R -4"),
            Err(Error::FailedToParseDist(_))
        ));
        assert_eq!(
            Motion::try_from("R 4294967295"),
            Err(Error::DistTooLarge(u32::MAX))
        );
        assert_eq!(Motion::try_from("R 4 7"), Err(Error::ExtraTokenFound));
    }

    #[test]
    fn test_unit_steps() {
        use Direction::*;

        assert_eq!(
            MotionSequence::try_from("R 2\nU 1\nL 3")
                .unwrap()
                .unit_steps()
                .collect::<Vec<Direction>>(),
            vec![East, East, North, West, West, West]
        );
        assert_eq!(
            example_motion_sequence().unit_steps().count(),
            24_usize
        );
    }

    fn example_motion_sequence() -> MotionSequence {
        motion_sequence![
            (East, 4),
            (North, 4),
            (West, 3),
            (South, 1),
            (East, 4),
            (South, 1),
            (West, 5),
            (East, 2),
        ]
    }
}
