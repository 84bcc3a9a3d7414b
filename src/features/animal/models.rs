use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 可领养动物（不含图片）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: String,
    /// 名字
    pub name: String,
    /// 物种（如 dog / cat）
    #[serde(rename = "type")]
    pub kind: String,
    /// 性别
    pub gender: String,
    /// 品种
    pub race: String,
    /// 年龄描述（如 "2 anos"）
    pub age: String,
    pub description: String,
    /// 是否开放领养
    pub available: bool,
    /// 发布者（所有者）用户 ID
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Animal {
    /// 以随机 ID 和当前时间创建一条开放领养的记录。
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            kind: kind.into(),
            gender: gender.into(),
            race: String::new(),
            age: String::new(),
            description: String::new(),
            available: true,
            user_id: user_id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// 动物图片原始数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalImage {
    pub id: String,
    /// 原始图片字节
    pub image_data: Vec<u8>,
    /// 所属动物 ID
    pub animal_id: String,
}

impl AnimalImage {
    pub fn new(animal_id: impl Into<String>, image_data: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            image_data,
            animal_id: animal_id.into(),
        }
    }
}

/// 仓储返回的动物记录（附带有序图片列表）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalWithImages {
    #[serde(flatten)]
    pub animal: Animal,
    #[serde(default)]
    pub images: Vec<AnimalImage>,
}

impl AnimalWithImages {
    pub fn new(animal: Animal) -> Self {
        Self {
            animal,
            images: Vec::new(),
        }
    }

    /// 追加一张图片，`animal_id` 自动指向当前动物。
    pub fn with_image(mut self, image_data: Vec<u8>) -> Self {
        self.images
            .push(AnimalImage::new(self.animal.id.clone(), image_data));
        self
    }
}

/// 对外传输的动物视图：字段与 Animal 一致，`images` 为 base64 文本列表。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
  "id": "6b1f0c9e-3c43-4c3a-9a59-1f7a4d8e2b10",
  "name": "Rex",
  "type": "dog",
  "gender": "male",
  "race": "vira-lata",
  "age": "2 anos",
  "description": "Muito brincalhão",
  "available": true,
  "userId": "u1",
  "createdAt": "2024-05-01T12:00:00Z",
  "updatedAt": "2024-05-01T12:00:00Z",
  "images": ["iVBORw0KGgo="]
}))]
pub struct FormattedAnimal {
    #[serde(flatten)]
    pub animal: Animal,
    /// 标准 base64（含填充）编码的图片，顺序与原始图片一致
    pub images: Vec<String>,
}

/// “可领养且非本人发布”查询条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableAnimalsQuery {
    /// 请求者用户 ID（其本人发布的动物会被排除）
    pub user_id: String,
    pub gender: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
}

/// 服务成功载荷：`{ "animals": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AnimalsPayload {
    pub animals: Vec<FormattedAnimal>,
}
