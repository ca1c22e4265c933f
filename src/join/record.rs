//! Record types flowing through the join.
//!
//! Posts and comments carry whatever fields the remote API returns. Only the
//! fields the join reads are typed (`id`, `postId`, `body`); everything else is
//! kept in a generic `extra` payload that is written back into the JSON object
//! on serialization, so records pass through the join untouched.
//!
//! A [`Post`] remembers where `id` sat among its keys, and a [`JoinedPost`]
//! writes `comment` the way an object spread does: an existing `comment` key
//! keeps its position and takes the new value, otherwise the key is appended.

use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Insertion-ordered bag of opaque JSON fields.
///
/// `serde_json` is built with `preserve_order`, so fields come back out in
/// the order they were read.
pub type Fields = serde_json::Map<String, Value>;

const ID_KEY: &str = "id";
const COMMENT_KEY: &str = "comment";

/// A post record, identified by its primary key `id`.
///
/// Serializes as a single JSON object: the fields of `extra` (which must
/// serialize to an object, or to `null` for payloads such as `()`) with `id`
/// placed back at the position it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Post<T = Fields> {
    /// Primary key matched against [`Comment::post_id`].
    pub id: u64,

    /// Every other field of the record, passed through unchanged.
    pub extra: T,

    /// Index of `id` among the record's keys.
    id_position: usize,
}

impl<T: Default> Post<T> {
    /// Creates a post with only an `id` and default extra fields.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self::with_extra(id, T::default())
    }
}

impl<T> Post<T> {
    /// Creates a post with the given extra payload; `id` serializes first.
    #[must_use]
    pub fn with_extra(id: u64, extra: T) -> Self {
        Self {
            id,
            extra,
            id_position: 0,
        }
    }

    /// Index of `id` among the keys of the serialized record.
    #[must_use]
    #[inline]
    pub fn id_position(&self) -> usize {
        self.id_position
    }
}

impl<T: Serialize> Post<T> {
    /// Renders the record as an ordered JSON object, `id` included.
    ///
    /// An `id` key inside `extra` is ignored in favour of [`Post::id`].
    ///
    /// # Errors
    ///
    /// Fails if `extra` does not serialize to a JSON object or `null`.
    pub fn to_fields(&self) -> Result<Fields, serde_json::Error> {
        let rest = match serde_json::to_value(&self.extra)? {
            Value::Object(map) => map,
            Value::Null => Fields::new(),
            other => {
                return Err(<serde_json::Error as ser::Error>::custom(format!(
                    "post payload must serialize to a JSON object, got {other}"
                )));
            }
        };

        let mut fields = Fields::with_capacity(rest.len() + 1);
        let mut placed = false;
        for (key, value) in rest {
            if key == ID_KEY {
                continue;
            }
            if !placed && fields.len() == self.id_position {
                fields.insert(ID_KEY.to_string(), Value::from(self.id));
                placed = true;
            }
            fields.insert(key, value);
        }
        if !placed {
            fields.insert(ID_KEY.to_string(), Value::from(self.id));
        }
        Ok(fields)
    }
}

impl<'de, T: Deserialize<'de>> Post<T> {
    /// Splits an ordered JSON object into a post.
    ///
    /// # Errors
    ///
    /// Fails if `id` is missing or not an unsigned integer, or if the remaining
    /// fields do not deserialize into `T`.
    pub fn from_fields(mut fields: Fields) -> Result<Self, serde_json::Error> {
        let id_position = fields
            .keys()
            .position(|key| key == ID_KEY)
            .ok_or_else(|| <serde_json::Error as de::Error>::missing_field(ID_KEY))?;
        let id = fields
            .shift_remove(ID_KEY)
            .map(u64::deserialize)
            .transpose()?
            .ok_or_else(|| <serde_json::Error as de::Error>::missing_field(ID_KEY))?;

        let extra = if fields.is_empty() {
            T::deserialize(Value::Object(Fields::new())).or_else(|_| T::deserialize(Value::Null))?
        } else {
            T::deserialize(Value::Object(fields))?
        };

        Ok(Self {
            id,
            extra,
            id_position,
        })
    }
}

impl<T: Serialize> Serialize for Post<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_fields()
            .map_err(<S::Error as ser::Error>::custom)?
            .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Post<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Fields::deserialize(deserializer)?;
        Self::from_fields(fields).map_err(<D::Error as de::Error>::custom)
    }
}

/// A comment record referencing a post through `postId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment<T = Fields> {
    /// Foreign key into [`Post::id`]. Not unique.
    #[serde(rename = "postId")]
    pub post_id: u64,

    /// Text attached to the joined post.
    pub body: String,

    /// Every other field of the record.
    #[serde(flatten)]
    pub extra: T,
}

impl<T: Default> Comment<T> {
    /// Creates a comment with default extra fields.
    #[must_use]
    pub fn new(post_id: u64, body: impl Into<String>) -> Self {
        Self {
            post_id,
            body: body.into(),
            extra: T::default(),
        }
    }
}

/// A post with the body of at most one associated comment.
///
/// When no comment matched, `comment` is `None` and the post serializes
/// exactly as it was read. When one matched, its body is written under
/// `comment`, replacing in place any `comment` field the post already had.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedPost<T = Fields> {
    /// The input post, unchanged.
    pub post: Post<T>,

    /// Body of the representative comment, if any matched.
    pub comment: Option<String>,
}

impl<T: Clone> JoinedPost<T> {
    /// Clones `post` into a joined record, attaching `body` when present.
    #[inline]
    pub(crate) fn from_match(post: &Post<T>, body: Option<&str>) -> Self {
        Self {
            post: post.clone(),
            comment: body.map(str::to_owned),
        }
    }
}

impl<T> JoinedPost<T> {
    /// Returns the primary key of the underlying post.
    #[must_use]
    #[inline]
    pub fn id(&self) -> u64 {
        self.post.id
    }

    /// Returns `true` if a comment was attached.
    #[must_use]
    #[inline]
    pub fn has_comment(&self) -> bool {
        self.comment.is_some()
    }
}

impl<T: Serialize> Serialize for JoinedPost<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut fields = self
            .post
            .to_fields()
            .map_err(<S::Error as ser::Error>::custom)?;
        if let Some(body) = &self.comment {
            fields.insert(COMMENT_KEY.to_string(), Value::String(body.clone()));
        }
        fields.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for JoinedPost<T> {
    /// Reads `comment` as the attached body; every other key goes to the post.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Fields::deserialize(deserializer)?;
        let comment = fields
            .shift_remove(COMMENT_KEY)
            .map(String::deserialize)
            .transpose()
            .map_err(<D::Error as de::Error>::custom)?;
        let post = Post::from_fields(fields).map_err(<D::Error as de::Error>::custom)?;
        Ok(Self { post, comment })
    }
}

/// The two collections produced by the data supplier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset<P = Fields, C = Fields> {
    /// Posts, in source order.
    pub posts: Vec<Post<P>>,
    /// Comments, in source order.
    pub comments: Vec<Comment<C>>,
}
