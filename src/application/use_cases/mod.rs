//! Use case implementations.

mod acquire_image_use_case;

pub use acquire_image_use_case::AcquireImageUseCase;
