use std::fmt;

/// An error from appearance compilation or element construction.
///
/// All errors are local to one element's resolution; callers log and move
/// on to sibling elements rather than aborting the tree build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppearanceError {
    /// A linear gradient declared an angle that is not a multiple of 45
    /// after normalization modulo 360.
    InvalidGradientAngle { angle: i32 },
    /// No constructor is registered for the element name.
    ElementNotFound { name: String },
    /// A registered constructor was found but failed to produce an element.
    ConstructionFailed { name: String },
}

impl fmt::Display for AppearanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGradientAngle { angle } => {
                write!(f, "gradient angle {angle} must be a multiple of 45")
            }
            Self::ElementNotFound { name } => {
                write!(f, "no constructor registered for element `{name}`")
            }
            Self::ConstructionFailed { name } => {
                write!(f, "constructor for element `{name}` failed")
            }
        }
    }
}

impl std::error::Error for AppearanceError {}
