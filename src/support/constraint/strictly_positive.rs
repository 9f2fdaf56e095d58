use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Values greater than zero.
///
/// Works with plain numbers and with `uom` quantities.
///
/// ```
/// use twine_propeller::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Velocity, velocity::foot_per_second};
///
/// let tip_speed = StrictlyPositive::new(Velocity::new::<foot_per_second>(800.0)).unwrap();
/// assert!(tip_speed.into_inner().get::<foot_per_second>() > 799.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Builds a [`Constrained<T, StrictlyPositive>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::foot};

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-9).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-3.0), Err(ConstraintError::Negative));
        assert_eq!(StrictlyPositive::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn diameters() {
        let diameter = StrictlyPositive::new(Length::new::<foot>(10.5)).unwrap();
        assert_eq!(diameter.as_ref(), &Length::new::<foot>(10.5));

        assert!(StrictlyPositive::new(Length::new::<foot>(0.0)).is_err());
    }
}
