use thiserror::Error;

/// Reasons a checked setter refuses a set of boundary conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// A boundary value is NaN or infinite.
    #[error("boundary value `{name}` is not finite")]
    NonFinite { name: &'static str },

    /// Start and final time coincide.
    #[error("start and final time are equal, the segment has no duration")]
    Degenerate,
}

/// Returns `NonFinite` for the first value that is NaN or infinite.
pub(crate) fn check_finite<T: num_traits::Float>(
    values: &[(&'static str, T)],
) -> Result<(), ProfileError> {
    match values.iter().find(|(_, v)| !v.is_finite()) {
        Some(&(name, _)) => Err(ProfileError::NonFinite { name }),
        None => Ok(()),
    }
}
