/// Whether a higher or lower raw value is preferable for a criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Higher raw values are preferable.
    Benefit,
    /// Lower raw values are preferable.
    Cost,
}

/// A single decision criterion. The direction is a domain decision fixed by
/// the caller and is never inferred from the data.
#[derive(Clone, Copy, Debug)]
pub struct Criterion {
    pub name: &'static str,
    pub direction: Direction,
}
