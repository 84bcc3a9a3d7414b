pub mod formatter;
pub mod get_available;
pub mod get_user;
pub mod memory;
pub mod models;
pub mod repository;

use crate::error::{AppError, ServiceFailure};

pub use formatter::{AnimalFormatter, encode_image};
pub use get_available::{GetAvailableAnimalsParams, GetAvailableAnimalsService};
pub use get_user::{GetUserAnimalsParams, GetUserAnimalsService};
pub use memory::InMemoryAnimalRepository;
pub use models::{
    Animal, AnimalImage, AnimalWithImages, AnimalsPayload, AvailableAnimalsQuery, FormattedAnimal,
};
pub use repository::{AnimalRepository, SharedAnimalRepository};

fn require_user_id(user_id: &str) -> Result<(), AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::Validation("缺少 userId".into()));
    }
    Ok(())
}

/// 记录失败并转换为对外的失败载荷。
fn fail(op: &'static str, err: AppError) -> ServiceFailure {
    tracing::warn!(
        target: "pet_adoption_backend::animal",
        op,
        code = err.stable_code(),
        "{err}"
    );
    ServiceFailure::from(err)
}
