use serde::{Deserialize, Serialize};

use crate::error::{AppError, ServiceFailure};

use super::formatter::AnimalFormatter;
use super::models::{AnimalsPayload, AvailableAnimalsQuery};
use super::repository::SharedAnimalRepository;
use super::{fail, require_user_id};

/// 可领养动物查询参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAvailableAnimalsParams {
    /// 请求者用户 ID（由上游鉴权解析得到）
    pub user_id: String,
    pub gender: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
}

/// 列出可领养的动物（排除请求者本人发布的动物）。
#[derive(Clone)]
pub struct GetAvailableAnimalsService {
    repository: SharedAnimalRepository,
    formatter: AnimalFormatter,
}

impl GetAvailableAnimalsService {
    pub fn new(repository: SharedAnimalRepository, formatter: AnimalFormatter) -> Self {
        Self {
            repository,
            formatter,
        }
    }

    pub async fn execute(
        &self,
        params: GetAvailableAnimalsParams,
    ) -> Result<AnimalsPayload, ServiceFailure> {
        const OP: &str = "get_available_animals";

        let GetAvailableAnimalsParams {
            user_id,
            gender,
            kind,
            name,
        } = params;
        require_user_id(&user_id).map_err(|e| fail(OP, e))?;

        // 过滤条件原样透传，匹配语义由仓储决定
        let query = AvailableAnimalsQuery {
            user_id,
            gender,
            kind,
            name,
        };
        tracing::debug!(
            target: "pet_adoption_backend::animal",
            user_id = %query.user_id,
            gender = ?query.gender,
            kind = ?query.kind,
            name = ?query.name,
            "querying available animals"
        );

        let animals = self
            .repository
            .find_all_available_not_from_user(&query)
            .await
            .map_err(|e| fail(OP, AppError::from(e)))?;

        let animals = self
            .formatter
            .format_animals_with_images(&animals)
            .map_err(|e| fail(OP, AppError::from(e)))?;

        tracing::debug!(
            target: "pet_adoption_backend::animal",
            count = animals.len(),
            "available animals formatted"
        );
        Ok(AnimalsPayload { animals })
    }
}
