use utoipa::OpenApi;

/// 对外载荷的 OpenAPI 组件文档（仅 schemas，不含路由）。
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(
            crate::features::animal::models::Animal,
            crate::features::animal::models::FormattedAnimal,
            crate::features::animal::models::AnimalsPayload,
            crate::error::ServiceFailure,
        )
    ),
    tags(
        (
            name = "Animal",
            description = "动物查询：可领养列表（排除本人发布）与本人发布列表，图片以 base64 返回。"
        ),
    ),
    info(
        title = "Pet Adoption Backend",
        version = env!("CARGO_PKG_VERSION"),
        description = "动物查询服务的对外载荷定义。成功时为 `{animals: FormattedAnimal[]}`，失败时为 `{message}`。"
    )
)]
pub struct ApiDoc;

/// 生成格式化后的 OpenAPI JSON
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}
