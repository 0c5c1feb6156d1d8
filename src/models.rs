//! Frontend Models
//!
//! Data structures matching the backend wire format.

use serde::{Deserialize, Serialize};

/// A persona (from a fandom) the user can post as.
///
/// The backend stores characters inside the user document, so the wire
/// format uses Mongo-style `_id` and the legacy `pic` field for the avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub fandom: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(rename = "pic", default)]
    pub avatar_url: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Draft/published state of a forum. One-way on the client: the UI only
/// ever moves `Draft -> Published`, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ForumStatus {
    #[default]
    Draft,
    Published,
}

impl ForumStatus {
    pub fn label(self) -> &'static str {
        match self {
            ForumStatus::Draft => "Draft",
            ForumStatus::Published => "Published",
        }
    }
}

/// One post of a forum being composed, as submitted to `/createforum`.
///
/// `floor` is the 1-based position of the post inside the thread and is
/// assigned from the editor order at collection time. `nickname` and
/// `avatar` are already resolved against the character's defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    #[serde(rename = "characterId", alias = "character_id")]
    pub character_id: String,
    pub content: String,
    pub floor: u32,
    pub nickname: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Payload for `/createforum`. `id: None` creates, `id: Some` updates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForumDraft {
    pub id: Option<String>,
    pub title: String,
    pub status: ForumStatus,
    pub posts: Vec<PostDraft>,
}

/// A stored post as returned by the thread endpoints. The backend keeps a
/// denormalized snapshot of the character next to each post.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    #[serde(rename = "characterId", alias = "character_id", default)]
    pub character_id: Option<String>,
    #[serde(default)]
    pub character_name: Option<String>,
    #[serde(default)]
    pub character_fandom: Option<String>,
    #[serde(default)]
    pub content: String,
    pub floor: u32,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A full thread as returned by `/api/thread/:id` and `/api/my_forums/:id`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThreadDetail {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: Option<ForumStatus>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Character snapshot carried on forum summaries (subset of [`Character`]).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub fandom: String,
}

/// One row of a forum listing (`/api/my_forums`, `/api/published_forums`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForumSummary {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: ForumStatus,
    #[serde(default)]
    pub post_count: u32,
    #[serde(default)]
    pub characters: Vec<CharacterSnapshot>,
    #[serde(default)]
    pub author_username: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl ForumSummary {
    /// Nickname of the original poster, used for the "author" column.
    pub fn op_nickname(&self) -> &str {
        self.characters
            .first()
            .map(|c| c.nickname.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("N/A")
    }

    /// Sort key for "latest first" listings: most recent activity.
    pub fn activity_date(&self) -> &str {
        self.updated_at
            .as_deref()
            .or(self.created_at.as_deref())
            .unwrap_or("")
    }

    /// Sort key for published listings.
    pub fn published_date(&self) -> &str {
        self.published_at
            .as_deref()
            .or(self.created_at.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forum_draft_wire_shape() {
        // The publish payload shape: id null on create, characterId per post.
        let draft = ForumDraft {
            id: None,
            title: "Hello".into(),
            status: ForumStatus::Published,
            posts: vec![PostDraft {
                character_id: "harry".into(),
                content: "Hi!".into(),
                floor: 1,
                nickname: "TheBoyWhoLived".into(),
                avatar: Some("https://example.com/hp.png".into()),
            }],
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["id"], serde_json::Value::Null);
        assert_eq!(json["title"], "Hello");
        assert_eq!(json["status"], "published");
        assert_eq!(json["posts"][0]["characterId"], "harry");
        assert_eq!(json["posts"][0]["floor"], 1);
        assert_eq!(json["posts"][0]["nickname"], "TheBoyWhoLived");
    }

    #[test]
    fn character_parses_mongo_fields() {
        let json = r#"{"_id":"65f1","name":"Harry Potter","fandom":"Harry Potter",
                       "nickname":"TheBoyWhoLived","pic":"/static/hp.png"}"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, "65f1");
        assert_eq!(c.avatar_url.as_deref(), Some("/static/hp.png"));
        assert_eq!(c.created_at, None);
    }

    #[test]
    fn stored_post_accepts_snake_case_character_id() {
        let json = r#"{"character_id":"65f1","content":"Hi","floor":2,"nickname":"X"}"#;
        let p: Post = serde_json::from_str(json).unwrap();
        assert_eq!(p.character_id.as_deref(), Some("65f1"));
        assert_eq!(p.floor, 2);
    }

    #[test]
    fn forum_summary_defaults_and_op() {
        let json = r#"{"id":"42","title":"T","status":"published","post_count":3,
                       "characters":[{"name":"Harry","nickname":"TheBoyWhoLived","fandom":"HP"}],
                       "created_at":"2026-01-01T00:00:00"}"#;
        let f: ForumSummary = serde_json::from_str(json).unwrap();
        assert_eq!(f.status, ForumStatus::Published);
        assert_eq!(f.op_nickname(), "TheBoyWhoLived");
        assert_eq!(f.published_date(), "2026-01-01T00:00:00");

        let bare: ForumSummary = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        assert_eq!(bare.status, ForumStatus::Draft);
        assert_eq!(bare.op_nickname(), "N/A");
    }

    #[test]
    fn published_listings_sort_newest_first() {
        fn summary(id: &str, published: Option<&str>, created: Option<&str>) -> ForumSummary {
            serde_json::from_value(serde_json::json!({
                "id": id,
                "published_at": published,
                "created_at": created,
            }))
            .unwrap()
        }

        // The middle entry has no published_at and falls back to its
        // creation date for ordering.
        let mut list = vec![
            summary("old", Some("2026-01-02T00:00:00"), None),
            summary("mid", None, Some("2026-03-01T00:00:00")),
            summary("new", Some("2026-05-01T00:00:00"), None),
        ];
        list.sort_by(|a, b| b.published_date().cmp(a.published_date()));
        let order: Vec<&str> = list.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(order, ["new", "mid", "old"]);
    }
}
