use fake::{Dummy, Faker};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a post. APIs serve either numbers or strings.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Int(i64),
    Str(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Int(id) => write!(f, "{}", id),
            PostId::Str(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        PostId::Int(id)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        PostId::Str(id.to_owned())
    }
}

impl Dummy<Faker> for PostId {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
        PostId::Int(rng.gen_range(1..100_000))
    }
}

/// Defines post data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_with_user_id() {
        let post: Post = serde_json::from_value(json!({
            "userId": 7,
            "id": 3,
            "title": "ea molestias",
            "body": "et iusto sed"
        }))
        .unwrap();
        assert_eq!(post.id, PostId::Int(3));
        assert_eq!(post.user_id, Some(7));
        assert_eq!(post.title, "ea molestias");
    }

    #[test]
    fn deserialize_without_user_id() {
        let post: Post = serde_json::from_value(json!({
            "id": 1,
            "title": "t",
            "body": "b"
        }))
        .unwrap();
        assert_eq!(post.user_id, None);
    }

    #[test]
    fn deserialize_string_and_negative_ids() {
        let posts: Vec<Post> = serde_json::from_str(
            r#"[{"id":"a1","title":"t","body":"b"},{"id":-4,"title":"u","body":"c"}]"#,
        )
        .unwrap();
        assert_eq!(posts[0].id, PostId::from("a1"));
        assert_eq!(posts[1].id, PostId::Int(-4));
        assert_eq!(posts[0].id.to_string(), "a1");
        assert_eq!(posts[1].id.to_string(), "-4");
    }

    #[test]
    fn serialize_keeps_id_shape() {
        let post = Post {
            id: PostId::from("x9"),
            title: "t".to_string(),
            body: "b".to_string(),
            user_id: None,
        };
        assert_eq!(
            serde_json::to_value(&post).unwrap(),
            json!({ "id": "x9", "title": "t", "body": "b" })
        );
    }

    #[test]
    fn deserialize_missing_title_fails() {
        let result = serde_json::from_value::<Post>(json!({ "id": 1, "body": "b" }));
        assert!(result.is_err());
    }
}
