mod image_fetcher_port;
mod image_store_port;
mod recipe_source_port;

pub use image_fetcher_port::ImageFetcherPort;
pub use image_store_port::ImageStorePort;
pub use recipe_source_port::RecipeDataSource;
