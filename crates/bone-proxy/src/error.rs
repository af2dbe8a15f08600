use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformField {
    Position,
    Rotation,
    Scale,
}

impl Display for TransformField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransformField::Position => write!(f, "position"),
            TransformField::Rotation => write!(f, "rotation"),
            TransformField::Scale => write!(f, "scale"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformError {
    NonFinite { field: TransformField },
    NegativeScale { axis: Axis, value: f32 },
    /// Model or bone scale factor that is not finite and positive
    InvalidScaleFactor { value: f32 },
}

impl Display for TransformError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::NonFinite { field } => {
                write!(f, "Non-finite component in bone {}", field)
            }
            TransformError::NegativeScale { axis, value } => {
                write!(f, "Negative bone scale on {} axis: {}", axis, value)
            }
            TransformError::InvalidScaleFactor { value } => {
                write!(f, "Scale factor must be finite and positive: {}", value)
            }
        }
    }
}

impl Error for TransformError {}
