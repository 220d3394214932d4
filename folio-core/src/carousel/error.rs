use thiserror::Error;

/// Configuration faults detected when building or re-laying out a carousel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    #[error("carousel requires at least one item")]
    EmptyItems,

    #[error("invalid layout: {field} = {value}")]
    InvalidLayout { field: &'static str, value: f32 },

    #[error("invalid motion tuning: {field} = {value}")]
    InvalidTuning { field: &'static str, value: f32 },
}
