use rope_sim::*;

const DEFAULT_INPUT_FILE_PATH: &str = "input/moves.txt";

const QUESTION_1_KNOT_COUNT: usize = 2_usize;
const QUESTION_2_KNOT_COUNT: usize = 10_usize;

/// A short walk: a two-knot tail visits 13 cells, a ten-knot tail never leaves the start
const EXAMPLE_1_STR: &str = "\
    R 4\n\
    U 4\n\
    L 3\n\
    D 1\n\
    R 4\n\
    D 1\n\
    L 5\n\
    R 2";

/// A longer walk where a ten-knot tail actually gets dragged around, visiting 36 cells
const EXAMPLE_2_STR: &str = "\
    R 5\n\
    U 8\n\
    L 8\n\
    D 3\n\
    R 17\n\
    D 10\n\
    L 25\n\
    U 20";

fn run_question(
    motion_sequence: &MotionSequence,
    question: u8,
    knot_count: usize,
    expected: Option<usize>,
    question_args: &QuestionArgs,
) {
    match survey_tail(knot_count, motion_sequence) {
        Some(survey) => {
            if question_args.verbose {
                println!("{}", survey.render());
            }

            let count: usize = survey.visited_cell_count();

            match expected {
                Some(expected) if expected == count => {
                    println!("question {question} ({knot_count} knots): {count} (matches expected)")
                }
                Some(expected) => {
                    println!("question {question} ({knot_count} knots): {count} (expected {expected})")
                }
                None => println!("question {question} ({knot_count} knots): {count}"),
            }
        }
        None => eprintln!(
            "A rope needs at least {} knots, but {knot_count} were requested",
            Rope::MIN_KNOT_COUNT
        ),
    }
}

fn solve(input: &str, args: &Args) {
    match MotionSequence::try_from(input) {
        Ok(motion_sequence) => {
            let expected: Option<usize> = if args.question == 0_u8 {
                if args.expected.is_some() {
                    eprintln!("--expected is only checked when a single question is selected");
                }

                None
            } else {
                args.expected
            };

            if args.question != 2_u8 {
                run_question(
                    &motion_sequence,
                    1_u8,
                    args.knots.map_or(QUESTION_1_KNOT_COUNT, usize::from),
                    expected,
                    &args.question_args,
                );
            }

            if args.question != 1_u8 {
                run_question(
                    &motion_sequence,
                    2_u8,
                    args.knots.map_or(QUESTION_2_KNOT_COUNT, usize::from),
                    expected,
                    &args.question_args,
                );
            }
        }
        Err(error) => eprintln!("Failed to parse motions:\n{error:#?}"),
    }
}

fn main() {
    let args: Args = Args::parse();

    match args.example {
        Some(1_u8) => solve(EXAMPLE_1_STR, &args),
        Some(_) => solve(EXAMPLE_2_STR, &args),
        None => {
            let input_file_path: &str = args.input_file_path(DEFAULT_INPUT_FILE_PATH);

            if let Err(err) =
                // SAFETY: This operation is unsafe, we're just hoping nobody else touches the file
                // while this program is executing
                unsafe { open_utf8_file(input_file_path, |input: &str| solve(input, &args)) }
            {
                eprintln!(
                    "Encountered error {} when opening file \"{}\"",
                    err, input_file_path
                );
            }
        }
    }
}
