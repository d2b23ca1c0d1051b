//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Long-lived services built on the use cases.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::ImageLoadedEvent;
pub use services::{ImageRequestService, RecipeFeed};
pub use use_cases::AcquireImageUseCase;
