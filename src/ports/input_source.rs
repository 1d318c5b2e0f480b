use crate::domain::{AppError, ProductInput};

/// Port for acquiring a product input.
pub trait InputSource {
    /// Produce a fully populated product input.
    fn read_input(&mut self) -> Result<ProductInput, AppError>;
}
