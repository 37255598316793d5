/// Outcome of the slot check for a capacity-limited event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// Slots remain. `remaining` is `None` for unlimited events.
    Open { remaining: Option<i64> },
    Full,
}

/// Compares the live registration count against the event's slot limit.
/// Must be evaluated against a count read at write time; counts rendered
/// earlier may already be stale.
pub fn check(max_slots: Option<i32>, registered: i64) -> Capacity {
    match max_slots {
        None => Capacity::Open { remaining: None },
        Some(max) if registered >= i64::from(max) => Capacity::Full,
        Some(max) => Capacity::Open {
            remaining: Some(i64::from(max) - registered),
        },
    }
}

impl Capacity {
    pub fn is_full(self) -> bool {
        matches!(self, Capacity::Full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(2), 0, Capacity::Open { remaining: Some(2) })]
    #[case(Some(2), 1, Capacity::Open { remaining: Some(1) })]
    #[case(Some(2), 2, Capacity::Full)]
    #[case(Some(2), 3, Capacity::Full)]
    #[case(None, 1_000, Capacity::Open { remaining: None })]
    fn boundary_cases(
        #[case] max_slots: Option<i32>,
        #[case] registered: i64,
        #[case] expected: Capacity,
    ) {
        assert_eq!(check(max_slots, registered), expected);
    }

    #[test]
    fn accepts_up_to_the_limit_and_rejects_past_it() {
        let max = Some(50);
        for taken in 0..50 {
            assert!(!check(max, taken).is_full());
        }
        assert!(check(max, 50).is_full());
    }
}
