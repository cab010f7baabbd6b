//! Applied-delta history for edit sessions

/// Relative tolerance used when matching an inverse delta
const RELATIVE_TOLERANCE: f64 = 1e-5;

/// Absolute tolerance used when matching an inverse delta
const ABSOLUTE_TOLERANCE: f64 = 1e-8;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * b.abs()
}

/// A 2D displacement in the XY plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// The opposite displacement
    pub fn negated(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// Check whether `self` undoes `other`, within floating tolerance
    pub fn is_inverse_of(self, other: Delta) -> bool {
        let inverse = other.negated();
        close(self.dx, inverse.dx) && close(self.dy, inverse.dy)
    }
}

/// Stack of deltas applied during one session
#[derive(Debug, Clone, Default)]
pub struct DeltaStack {
    applied: Vec<Delta>,
}

impl DeltaStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an applied delta
    pub fn push(&mut self, delta: Delta) {
        self.applied.push(delta);
    }

    /// Remove and return the most recent delta
    pub fn pop(&mut self) -> Option<Delta> {
        self.applied.pop()
    }

    /// Most recent delta
    pub fn last(&self) -> Option<Delta> {
        self.applied.last().copied()
    }

    /// Check whether `delta` would undo the most recent one
    pub fn undoes_last(&self, delta: Delta) -> bool {
        self.last().is_some_and(|last| delta.is_inverse_of(last))
    }

    /// All applied deltas, oldest first
    pub fn as_slice(&self) -> &[Delta] {
        &self.applied
    }

    pub fn len(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_matching_with_rounding() {
        let d = 2.0 * std::f64::consts::SQRT_2 / 2.0;
        let up_right = Delta::new(d, d);
        let down_left = Delta::new(-(2.0_f64.sqrt()), -(2.0_f64.sqrt()));
        assert!(down_left.is_inverse_of(up_right));
        assert!(!up_right.is_inverse_of(up_right));
        assert!(!Delta::new(-2.0, 0.0).is_inverse_of(Delta::new(0.0, 2.0)));
    }

    #[test]
    fn test_stack_undo_detection() {
        let mut stack = DeltaStack::new();
        assert!(!stack.undoes_last(Delta::new(1.0, 0.0)));

        stack.push(Delta::new(0.0, 2.0));
        stack.push(Delta::new(2.0, 0.0));
        assert!(stack.undoes_last(Delta::new(-2.0, 0.0)));
        assert!(!stack.undoes_last(Delta::new(0.0, -2.0)));
        assert_eq!(stack.as_slice(), &[Delta::new(0.0, 2.0), Delta::new(2.0, 0.0)]);

        assert_eq!(stack.pop(), Some(Delta::new(2.0, 0.0)));
        assert!(stack.undoes_last(Delta::new(0.0, -2.0)));
        assert_eq!(stack.len(), 1);
    }
}
