use {crate::*, glam::IVec2, std::collections::HashSet};

/// The set of cells a rope's tail has occupied over one simulation run
#[derive(Debug, PartialEq)]
pub struct TailSurvey {
    visited: HashSet<IVec2>,
    start: IVec2,
}

impl TailSurvey {
    fn new(start: IVec2) -> Self {
        let mut survey: Self = Self {
            visited: HashSet::new(),
            start,
        };

        // The starting cell counts as visited
        survey.record(start);

        survey
    }

    fn record(&mut self, pos: IVec2) {
        self.visited.insert(pos);
    }

    #[inline]
    pub fn visited_cell_count(&self) -> usize {
        self.visited.len()
    }

    /// Renders the bounding box of the visited cells, row by row: `'s'` for the start cell, `'#'`
    /// for other visited cells, `'.'` elsewhere
    pub fn render(&self) -> String {
        let (min, max): (IVec2, IVec2) = self
            .visited
            .iter()
            .fold((self.start, self.start), |(min, max), pos: &IVec2| {
                (min.min(*pos), max.max(*pos))
            });
        let dimensions: IVec2 = max - min + IVec2::ONE;
        let mut rendering: String =
            String::with_capacity((dimensions.y * (dimensions.x + 1_i32)) as usize);

        for y in min.y..=max.y {
            if y != min.y {
                rendering.push('\n');
            }

            for x in min.x..=max.x {
                let pos: IVec2 = IVec2::new(x, y);

                rendering.push(if pos == self.start {
                    's'
                } else if self.visited.contains(&pos) {
                    '#'
                } else {
                    '.'
                });
            }
        }

        rendering
    }
}

/// Runs a full simulation: a rope of `knot_count` knots piled up on the origin, driven one unit
/// step at a time, with the tail's cell recorded after every step. Returns `None` for a knot
/// count below two.
pub fn survey_tail(knot_count: usize, motion_sequence: &MotionSequence) -> Option<TailSurvey> {
    let mut rope: Rope = Rope::try_from_knot_count(knot_count)?;
    let mut survey: TailSurvey = TailSurvey::new(*rope.tail());

    for dir in motion_sequence.unit_steps() {
        rope += dir;
        survey.record(*rope.tail());
    }

    Some(survey)
}
