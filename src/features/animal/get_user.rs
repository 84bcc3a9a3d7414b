use serde::{Deserialize, Serialize};

use crate::error::{AppError, ServiceFailure};

use super::formatter::AnimalFormatter;
use super::models::AnimalsPayload;
use super::repository::SharedAnimalRepository;
use super::{fail, require_user_id};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserAnimalsParams {
    pub user_id: String,
}

/// 列出用户本人发布的动物。
#[derive(Clone)]
pub struct GetUserAnimalsService {
    repository: SharedAnimalRepository,
    formatter: AnimalFormatter,
}

impl GetUserAnimalsService {
    pub fn new(repository: SharedAnimalRepository, formatter: AnimalFormatter) -> Self {
        Self {
            repository,
            formatter,
        }
    }

    pub async fn execute(
        &self,
        params: GetUserAnimalsParams,
    ) -> Result<AnimalsPayload, ServiceFailure> {
        const OP: &str = "get_user_animals";

        let user_id = params.user_id;
        require_user_id(&user_id).map_err(|e| fail(OP, e))?;

        let animals = self
            .repository
            .find_all_by_user_id(&user_id)
            .await
            .map_err(|e| fail(OP, AppError::from(e)))?;

        let animals = self
            .formatter
            .format_animals_with_images(&animals)
            .map_err(|e| fail(OP, AppError::from(e)))?;

        tracing::debug!(
            target: "pet_adoption_backend::animal",
            user_id = %user_id,
            count = animals.len(),
            "user animals formatted"
        );
        Ok(AnimalsPayload { animals })
    }
}
