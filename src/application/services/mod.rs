//! Application services.

mod image_request_service;
mod recipe_feed;

pub use image_request_service::ImageRequestService;
pub use recipe_feed::RecipeFeed;
