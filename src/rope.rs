use {crate::*, glam::IVec2, std::ops::AddAssign};

/// Repositions a trailing knot after its leader has moved.
///
/// A knot still touching its leader (both axis distances at most one) stays put. Otherwise it
/// takes one step toward the leader along each axis where they differ, which covers straight and
/// diagonal catch-up with the same clamped-delta step.
///
/// Leaders only ever advance one cell per tick, so a separation above two on either axis means
/// the chain was driven incorrectly, and the function panics rather than jumping further.
pub fn follow(leader: IVec2, follower: IVec2) -> IVec2 {
    let delta: IVec2 = leader - follower;
    let abs: IVec2 = delta.abs();

    assert!(
        abs.x.max(abs.y) <= 2_i32,
        "follower at {follower} lost its leader at {leader}"
    );

    if abs.x.max(abs.y) <= 1_i32 {
        follower
    } else {
        follower + delta.clamp(IVec2::NEG_ONE, IVec2::ONE)
    }
}

/// An ordered chain of knots, head first, tail last
#[derive(Clone, Debug, PartialEq)]
pub struct Rope(Vec<IVec2>);

impl Rope {
    pub const MIN_KNOT_COUNT: usize = 2_usize;

    /// Returns a rope of `knot_count` knots piled up on the origin, or `None` for anything
    /// shorter than a head and a tail
    pub fn try_from_knot_count(knot_count: usize) -> Option<Self> {
        (knot_count >= Self::MIN_KNOT_COUNT).then(|| Self(vec![IVec2::ZERO; knot_count]))
    }

    #[inline]
    pub fn head(&self) -> &IVec2 {
        &self.0[0_usize]
    }

    #[inline]
    pub fn tail(&self) -> &IVec2 {
        &self.0[self.0.len() - 1_usize]
    }

    #[inline]
    pub fn knots(&self) -> &[IVec2] {
        &self.0
    }

    /// Whether every knot is within one cell of its leader on both axes
    pub fn is_linked(&self) -> bool {
        self.0.windows(2_usize).all(|pair: &[IVec2]| {
            let abs: IVec2 = (pair[0_usize] - pair[1_usize]).abs();

            abs.x.max(abs.y) <= 1_i32
        })
    }
}

impl AddAssign<Direction> for Rope {
    fn add_assign(&mut self, dir: Direction) {
        self.0[0_usize] += dir.vec();

        for index in 1_usize..self.0.len() {
            let new_knot: IVec2 = follow(self.0[index - 1_usize], self.0[index]);

            // This knot doesn't move, and no knot behind it moves either
            if new_knot == self.0[index] {
                break;
            }

            self.0[index] = new_knot;
        }

        debug_assert!(self.is_linked());
    }
}
