use {
    glam::IVec2,
    memmap::Mmap,
    static_assertions::const_assert,
    std::{
        fs::File,
        io::{Error, ErrorKind, Result as IoResult},
        mem::transmute,
        str::{from_utf8, Utf8Error},
    },
    strum::{EnumCount, EnumIter},
};

pub use {
    self::{direction::*, motion::*, rope::*, survey::*},
    clap::Parser,
};

pub mod motion;
pub mod rope;
pub mod survey;

#[derive(Debug, Parser)]
pub struct QuestionArgs {
    /// Print extra information, if there is any
    #[arg(short, long, default_value_t)]
    pub verbose: bool,
}

/// Arguments for program execution
#[derive(Debug, Parser)]
pub struct Args {
    /// Input file path
    #[arg(short, long, default_value_t)]
    input_file_path: String,

    /// Run against a built-in example input instead of a file
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub example: Option<u8>,

    /// The question to run, both if omitted
    #[arg(short, long, default_value_t, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub question: u8,

    /// Knot count, 2 for question 1 and 10 for question 2 if omitted
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(2..))]
    pub knots: Option<u8>,

    /// Expected visited-cell count, checked when a single question is selected
    #[arg(long)]
    pub expected: Option<usize>,

    #[command(flatten)]
    pub question_args: QuestionArgs,
}

impl Args {
    /// Returns the input file path, or a provided default if the field is empty
    ///
    /// # Arguments
    ///
    /// * `default` - A default input file path string slice to use if `self.input_file_path` is
    ///   empty
    pub fn input_file_path<'a>(&'a self, default: &'a str) -> &'a str {
        if self.input_file_path.is_empty() {
            default
        } else {
            &self.input_file_path
        }
    }
}

/// Opens a memory-mapped UTF-8 file at a specified path, and passes in a `&str` over the file to a
/// provided callback function
///
/// # Errors
///
/// This function returns a `Result::Err`-wrapped `std::io::Error` if `std::fs::File::open` is
/// unable to open a read-only file at `file_path`, `memmap::Mmap::map` fails to create an `Mmap`
/// instance for the opened file, or `std::str::from_utf8` determines the file is not in valid
/// UTF-8 format. `f` is only executed *iff* an error is not encountered.
///
/// # Safety
///
/// This function uses `Mmap::map`, which is an unsafe function. There is no guarantee that an
/// external process won't modify the file after it is opened as read-only, which would be UB while
/// this function refers to it as an immutable string slice. For more info on this, see:
///
/// * https://users.rust-lang.org/t/how-unsafe-is-mmap/19635
/// * https://users.rust-lang.org/t/is-there-no-safe-way-to-use-mmap-in-rust/70338
pub unsafe fn open_utf8_file<T, F: FnOnce(&str) -> T>(file_path: &str, f: F) -> IoResult<T> {
    let file: File = File::open(file_path)?;

    // SAFETY: This operation is unsafe
    let mmap: Mmap = Mmap::map(&file)?;
    let bytes: &[u8] = &mmap;
    let utf8_str: &str = from_utf8(bytes).map_err(|utf8_error: Utf8Error| -> Error {
        Error::new(ErrorKind::InvalidData, utf8_error)
    })?;

    Ok(f(utf8_str))
}

mod direction {
    use super::*;

    macro_rules! define_direction {
        {
            $(#[$meta:meta])*
            $vis:vis enum $direction:ident {
                $( $variant:ident, )*
            }
        } => {
            $(#[$meta])*
            $vis enum $direction {
                $( $variant, )*
            }

            const VECS: [IVec2; $direction::COUNT] = [
                $( $direction::$variant.vec_internal(), )*
            ];
        };
    }

    define_direction! {
        #[derive(Copy, Clone, Debug, EnumCount, EnumIter, PartialEq)]
        #[repr(u8)]
        pub enum Direction {
            North,
            East,
            South,
            West,
        }
    }

    // This guarantees we can safely convert from `u8` to `Direction` by masking the smallest 2
    // bits, which is the same as masking by `U8_MASK`
    const_assert!(Direction::COUNT == 4_usize);

    impl Direction {
        const U8_MASK: u8 = Self::COUNT as u8 - 1_u8;

        #[inline]
        pub const fn vec(self) -> IVec2 {
            VECS[self as usize]
        }

        #[inline]
        pub const fn from_u8(value: u8) -> Self {
            // SAFETY: See `const_assert` above
            unsafe { transmute(value & Self::U8_MASK) }
        }

        const fn vec_internal(self) -> IVec2 {
            match self {
                Self::North => IVec2::NEG_Y,
                Self::East => IVec2::X,
                Self::South => IVec2::Y,
                Self::West => IVec2::NEG_X,
            }
        }
    }

    impl From<Direction> for IVec2 {
        fn from(value: Direction) -> Self {
            value.vec()
        }
    }

    impl From<u8> for Direction {
        fn from(value: u8) -> Self {
            Self::from_u8(value)
        }
    }
}
